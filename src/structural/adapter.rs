// Pattern: Adapter.
// The dashboard expects JSON customer records. The legacy CRM only exports
// `id;name;email` lines. The adapter converts one to the other so neither
// side has to change.

use csv::{ReaderBuilder, Trim};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::error::DemoError;
use crate::harness::{Demo, Session, Topic};

pub const DEMO: Demo = Demo {
    name: "adapter",
    topic: Topic::Structural,
    summary: "Legacy semicolon export adapted to the JSON feed a dashboard expects",
    run,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: u32,
    pub name: String,
    pub email: String,
}

/// What the dashboard knows how to consume.
pub trait CustomerFeed {
    fn customers_json(&self) -> Result<String, DemoError>;
}

/// Already JSON-native.
pub struct InMemoryFeed {
    pub customers: Vec<Customer>,
}

impl CustomerFeed for InMemoryFeed {
    fn customers_json(&self) -> Result<String, DemoError> {
        serde_json::to_string(&self.customers).map_err(|e| DemoError::Adapter(e.to_string()))
    }
}

/// The adaptee. Its interface is fixed.
pub struct LegacyCrmExport {
    rows: Vec<String>,
}

impl LegacyCrmExport {
    pub fn new(rows: &[&str]) -> Self {
        Self {
            rows: rows.iter().map(|r| r.to_string()).collect(),
        }
    }

    pub fn export_rows(&self) -> &[String] {
        &self.rows
    }
}

pub struct CrmFeedAdapter {
    legacy: LegacyCrmExport,
}

impl CrmFeedAdapter {
    pub fn new(legacy: LegacyCrmExport) -> Self {
        Self { legacy }
    }

    /// Reads the export as headerless `;`-delimited records. Quoted fields may
    /// contain the delimiter.
    pub fn customers(&self) -> Result<Vec<Customer>, DemoError> {
        let data = self
            .legacy
            .export_rows()
            .iter()
            .filter(|row| !row.trim().is_empty())
            .join("\n");

        let mut reader = ReaderBuilder::new()
            .delimiter(b';')
            .has_headers(false)
            .trim(Trim::All)
            .from_reader(data.as_bytes());

        reader
            .deserialize::<Customer>()
            .map(|record| record.map_err(|e| DemoError::Adapter(format!("bad legacy row: {}", e))))
            .collect()
    }
}

impl CustomerFeed for CrmFeedAdapter {
    fn customers_json(&self) -> Result<String, DemoError> {
        let customers = self.customers()?;
        serde_json::to_string(&customers).map_err(|e| DemoError::Adapter(e.to_string()))
    }
}

/// The client. It only sees `CustomerFeed`.
pub fn render_dashboard(feed: &dyn CustomerFeed) -> Result<String, DemoError> {
    let json = feed.customers_json()?;
    Ok(format!("dashboard <- {}", json))
}

fn run(session: &mut Session) -> Result<(), DemoError> {
    session.heading("Adapter");

    let native = InMemoryFeed {
        customers: vec![Customer {
            id: 1,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        }],
    };
    session.step("JSON-native feed");
    session.result(render_dashboard(&native)?);

    session.step("Legacy CRM through the adapter");
    let adapter = CrmFeedAdapter::new(LegacyCrmExport::new(&[
        "2;Grace Hopper;grace@example.com",
        "3; Alan Turing ;alan@example.com",
    ]));
    session.result(render_dashboard(&adapter)?);

    session.step("Corrupt legacy export");
    let broken = CrmFeedAdapter::new(LegacyCrmExport::new(&["x;Nobody;nobody@example.com"]));
    match render_dashboard(&broken) {
        Ok(out) => session.result(out),
        Err(err) => session.note(err.to_string()),
    }
    Ok(())
}
