use colored::Colorize;
use serde::Serialize;
use std::fmt;

use crate::config::TourConfig;
use crate::error::{DemoError, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Heading,
    Step,
    Result,
    Rejected,
    Unsupported,
    Note,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    pub kind: LineKind,
    pub text: String,
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            LineKind::Heading => write!(f, "=== {} ===", self.text),
            LineKind::Step => write!(f, "  {}", self.text),
            LineKind::Result => write!(f, "  -> {}", self.text),
            LineKind::Rejected => write!(f, "  rejected: {}", self.text),
            LineKind::Unsupported => write!(f, "  unsupported: {}", self.text),
            LineKind::Note => write!(f, "  # {}", self.text),
        }
    }
}

/// Ordered record of everything a demo printed.
#[derive(Debug, Default)]
pub struct Transcript {
    lines: Vec<Line>,
    echo: Option<Echo>,
}

#[derive(Debug, Clone, Copy)]
struct Echo {
    color: bool,
}

impl Transcript {
    /// A transcript that only records.
    pub fn new() -> Self {
        Self::default()
    }

    /// A transcript that also prints each line to stdout as it arrives.
    pub fn echoing(color: bool) -> Self {
        Self {
            lines: Vec::new(),
            echo: Some(Echo { color }),
        }
    }

    pub fn push(&mut self, kind: LineKind, text: impl Into<String>) {
        let line = Line {
            kind,
            text: text.into(),
        };
        if let Some(echo) = self.echo {
            print_line(&line, echo.color);
        }
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<Line> {
        self.lines
    }

    pub fn count(&self, kind: LineKind) -> usize {
        self.lines.iter().filter(|l| l.kind == kind).count()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.text.contains(needle))
    }
}

fn print_line(line: &Line, color: bool) {
    if !color {
        println!("{}", line);
        return;
    }
    let rendered = line.to_string();
    match line.kind {
        LineKind::Heading => println!("{}", rendered.bold().cyan()),
        LineKind::Result => println!("{}", rendered.green()),
        LineKind::Rejected => println!("{}", rendered.yellow()),
        LineKind::Unsupported => println!("{}", rendered.red()),
        LineKind::Note => println!("{}", rendered.dimmed()),
        LineKind::Step => println!("{}", rendered),
    }
}

/// What a demo writes to while it runs.
pub struct Session<'a> {
    transcript: Transcript,
    config: &'a TourConfig,
}

impl<'a> Session<'a> {
    pub fn new(config: &'a TourConfig, transcript: Transcript) -> Self {
        Self { transcript, config }
    }

    pub fn config(&self) -> &TourConfig {
        self.config
    }

    pub fn heading(&mut self, text: impl Into<String>) {
        self.transcript.push(LineKind::Heading, text);
    }

    pub fn step(&mut self, text: impl Into<String>) {
        self.transcript.push(LineKind::Step, text);
    }

    pub fn result(&mut self, text: impl Into<String>) {
        self.transcript.push(LineKind::Result, text);
    }

    pub fn note(&mut self, text: impl Into<String>) {
        self.transcript.push(LineKind::Note, text);
    }

    pub fn rejected(&mut self, err: &ValidationError) {
        tracing::debug!(error = %err, "operation rejected");
        self.transcript.push(LineKind::Rejected, err.to_string());
    }

    /// Reports rejections and unsupported operations and returns `None` so
    /// the demo can carry on. Every other error comes back unchanged.
    pub fn attempt<T>(&mut self, result: Result<T, DemoError>) -> Result<Option<T>, DemoError> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(DemoError::Rejected(err)) => {
                self.rejected(&err);
                Ok(None)
            }
            Err(err @ DemoError::Unsupported { .. }) => {
                tracing::debug!(error = %err, "unsupported operation");
                self.transcript.push(LineKind::Unsupported, err.to_string());
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn finish(self) -> Transcript {
        self.transcript
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_rendering() {
        let line = Line {
            kind: LineKind::Heading,
            text: "Bridge".to_string(),
        };
        assert_eq!(line.to_string(), "=== Bridge ===");

        let line = Line {
            kind: LineKind::Result,
            text: "7.00".to_string(),
        };
        assert_eq!(line.to_string(), "  -> 7.00");
    }

    #[test]
    fn test_attempt_reports_and_continues() {
        let config = TourConfig::default();
        let mut session = Session::new(&config, Transcript::new());

        let value = session.attempt::<u32>(Err(DemoError::unsupported("Robot", "eat")));
        assert!(matches!(value, Ok(None)));

        let value = session.attempt::<u32>(Err(ValidationError::NonPositiveAmount { amount: -1.0 }.into()));
        assert!(matches!(value, Ok(None)));

        let value = session.attempt(Ok(3));
        assert!(matches!(value, Ok(Some(3))));

        let transcript = session.finish();
        assert_eq!(transcript.count(LineKind::Unsupported), 1);
        assert_eq!(transcript.count(LineKind::Rejected), 1);
        assert!(transcript.contains("Robot does not support 'eat'"));
    }

    #[test]
    fn test_attempt_propagates_other_errors() {
        let config = TourConfig::default();
        let mut session = Session::new(&config, Transcript::new());

        let value = session.attempt::<()>(Err(DemoError::UnknownKind("boat".to_string())));
        assert!(matches!(value, Err(DemoError::UnknownKind(_))));
        assert!(session.transcript().lines().is_empty());
    }
}
