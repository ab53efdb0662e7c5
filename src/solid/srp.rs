// SOLID 1: Single Responsibility - one reason to change per type.

use itertools::Itertools;

use crate::error::DemoError;
use crate::harness::{Demo, Session, Topic};

pub const DEMO: Demo = Demo {
    name: "srp",
    topic: Topic::Solid,
    summary: "Report that computes, formats and stores itself vs three focused types",
    run,
};

#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub description: String,
    pub quantity: u32,
    pub unit_price: f64,
}

impl LineItem {
    pub fn new(description: &str, quantity: u32, unit_price: f64) -> Self {
        Self {
            description: description.to_string(),
            quantity,
            unit_price,
        }
    }

    pub fn subtotal(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }
}

// ============================================================================
// Bad: one type owns the data, the math, the layout and the storage
// ============================================================================

pub struct ReportManager {
    title: String,
    items: Vec<LineItem>,
    saved: Vec<String>,
}

impl ReportManager {
    pub fn new(title: &str, items: Vec<LineItem>) -> Self {
        Self {
            title: title.to_string(),
            items,
            saved: Vec::new(),
        }
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(LineItem::subtotal).sum()
    }

    pub fn render(&self) -> String {
        let body = self
            .items
            .iter()
            .map(|i| format!("{} x{} = {:.2}", i.description, i.quantity, i.subtotal()))
            .join("; ");
        format!("{} | {} | total {:.2}", self.title, body, self.total())
    }

    pub fn save(&mut self) -> usize {
        let rendered = self.render();
        self.saved.push(rendered);
        self.saved.len()
    }
}

// ============================================================================
// Good: data, formatting and storage change independently
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub title: String,
    pub items: Vec<LineItem>,
}

impl Report {
    pub fn total(&self) -> f64 {
        self.items.iter().map(LineItem::subtotal).sum()
    }
}

pub struct ReportFormatter;

impl ReportFormatter {
    pub fn render(&self, report: &Report) -> String {
        let body = report
            .items
            .iter()
            .map(|i| format!("{} x{} = {:.2}", i.description, i.quantity, i.subtotal()))
            .join("; ");
        format!("{} | {} | total {:.2}", report.title, body, report.total())
    }
}

/// In-memory stand-in for wherever reports end up.
#[derive(Default)]
pub struct ReportArchive {
    entries: Vec<String>,
}

impl ReportArchive {
    pub fn store(&mut self, rendered: String) -> usize {
        self.entries.push(rendered);
        self.entries.len()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

fn sample_items() -> Vec<LineItem> {
    vec![
        LineItem::new("keyboard", 2, 49.5),
        LineItem::new("monitor", 1, 189.0),
    ]
}

fn run(session: &mut Session) -> Result<(), DemoError> {
    session.heading("Single Responsibility");

    session.step("Bad: ReportManager does everything");
    let mut manager = ReportManager::new("Q3 purchases", sample_items());
    session.result(manager.render());
    session.result(format!("saved as entry #{}", manager.save()));

    session.step("Good: Report + ReportFormatter + ReportArchive");
    let report = Report {
        title: "Q3 purchases".to_string(),
        items: sample_items(),
    };
    let formatter = ReportFormatter;
    let mut archive = ReportArchive::default();
    let rendered = formatter.render(&report);
    session.result(rendered.clone());
    session.result(format!("saved as entry #{}", archive.store(rendered)));
    session.note("Changing the layout now touches only ReportFormatter");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_designs_render_the_same() {
        let manager = ReportManager::new("t", sample_items());
        let report = Report {
            title: "t".to_string(),
            items: sample_items(),
        };
        assert_eq!(manager.render(), ReportFormatter.render(&report));
        assert_eq!(manager.total(), report.total());
        assert_eq!(report.total(), 288.0);
    }

    #[test]
    fn test_archive_keeps_order() {
        let mut archive = ReportArchive::default();
        assert_eq!(archive.store("a".to_string()), 1);
        assert_eq!(archive.store("b".to_string()), 2);
        assert_eq!(archive.entries(), ["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_render_format() {
        let report = Report {
            title: "r".to_string(),
            items: vec![LineItem::new("pen", 3, 1.5)],
        };
        assert_eq!(ReportFormatter.render(&report), "r | pen x3 = 4.50 | total 4.50");
    }
}
