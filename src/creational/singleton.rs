// Pattern: Singleton with explicit initialization.
// The instance is created by a named `init` call, not on first access, so
// the order of initialization is visible and testable.

use std::sync::OnceLock;
use thiserror::Error;

use crate::error::DemoError;
use crate::harness::{Demo, Session, Topic};

pub const DEMO: Demo = Demo {
    name: "singleton",
    topic: Topic::Creational,
    summary: "Process-wide settings behind a OnceLock with explicit init and one accessor",
    run,
};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SingletonError {
    #[error("{0} was already initialized")]
    AlreadyInitialized(&'static str),

    #[error("{0} accessed before initialization")]
    NotInitialized(&'static str),
}

/// One-time slot. `OnceLock` guards initialization; after that every access
/// sees the same value.
pub struct Singleton<T> {
    label: &'static str,
    cell: OnceLock<T>,
}

impl<T> Singleton<T> {
    pub const fn new(label: &'static str) -> Self {
        Self {
            label,
            cell: OnceLock::new(),
        }
    }

    /// Stores `value`. Fails if a value is already stored.
    pub fn init(&self, value: T) -> Result<&T, SingletonError> {
        self.cell
            .set(value)
            .map_err(|_| SingletonError::AlreadyInitialized(self.label))?;
        self.get()
    }

    pub fn get(&self) -> Result<&T, SingletonError> {
        self.cell.get().ok_or(SingletonError::NotInitialized(self.label))
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    pub app_name: String,
    pub max_connections: u32,
    pub debug: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            app_name: "patterns-tour".to_string(),
            max_connections: 16,
            debug: cfg!(debug_assertions),
        }
    }
}

static SETTINGS: Singleton<AppSettings> = Singleton::new("AppSettings");

/// Initializes the process-wide settings. Call once, early.
pub fn init_settings(settings: AppSettings) -> Result<&'static AppSettings, SingletonError> {
    SETTINGS.init(settings)
}

/// The single accessor for the process-wide settings.
pub fn settings() -> Result<&'static AppSettings, SingletonError> {
    SETTINGS.get()
}

fn run(session: &mut Session) -> Result<(), DemoError> {
    session.heading("Singleton");

    // The tour may run this demo more than once in a process.
    match init_settings(AppSettings::default()) {
        Ok(settings) => session.step(format!("initialized settings for {}", settings.app_name)),
        Err(SingletonError::AlreadyInitialized(_)) => {
            session.step("settings were initialized earlier in this process")
        }
        Err(err) => return Err(err.into()),
    }

    let first = settings()?;
    let second = settings()?;
    session.result(format!(
        "{} allows {} connections (debug: {})",
        first.app_name, first.max_connections, first.debug
    ));
    session.result(format!("same instance: {}", std::ptr::eq(first, second)));

    match init_settings(AppSettings {
        app_name: "impostor".to_string(),
        ..AppSettings::default()
    }) {
        Ok(_) => session.note("second init unexpectedly succeeded"),
        Err(err) => session.note(format!("second init refused: {}", err)),
    }
    Ok(())
}
