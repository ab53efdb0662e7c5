use std::path::PathBuf;

use thiserror::Error;

use crate::creational::builder::BuildError;
use crate::creational::singleton::SingletonError;

/// A precondition failed. The operation was skipped and state is unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("amount must be positive, got {amount}")]
    NonPositiveAmount { amount: f64 },

    #[error("amount {amount} exceeds the per-operation limit of {limit}")]
    LimitExceeded { limit: f64, amount: f64 },

    #[error("insufficient funds: balance is {balance}, requested {amount}")]
    InsufficientFunds { balance: f64, amount: f64 },

    #[error("not enough fuel: {available:.1} L available, {required:.1} L required")]
    InsufficientFuel { available: f64, required: f64 },

    #[error("access denied for role '{role}'")]
    AccessDenied { role: String },
}

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("rejected: {0}")]
    Rejected(#[from] ValidationError),

    /// A variant was forced to implement an operation it cannot honor.
    #[error("{variant} does not support '{operation}'")]
    Unsupported {
        variant: &'static str,
        operation: &'static str,
    },

    #[error("no demo named '{0}'")]
    UnknownDemo(String),

    #[error("unknown kind '{0}'")]
    UnknownKind(String),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Singleton(#[from] SingletonError),

    #[error("adapter failed: {0}")]
    Adapter(String),
}

impl DemoError {
    pub fn unsupported(variant: &'static str, operation: &'static str) -> Self {
        DemoError::Unsupported { variant, operation }
    }

    /// Errors a driver is expected to report and move past.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, DemoError::Rejected(_) | DemoError::Unsupported { .. })
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Everything that makes a tour run exit unsuccessfully.
#[derive(Error, Debug)]
pub enum TourError {
    #[error("{}: {source}", path.display())]
    ConfigFile { path: PathBuf, source: ConfigError },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Demo(#[from] DemoError),

    #[error("failed to encode reports: {0}")]
    Report(#[from] serde_json::Error),

    #[error("demos failed: {}", .0.join(", "))]
    Failed(Vec<&'static str>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_errors() {
        assert!(DemoError::unsupported("Robot", "eat").is_recoverable());
        assert!(DemoError::from(ValidationError::NonPositiveAmount { amount: 0.0 }).is_recoverable());
        assert!(!DemoError::UnknownDemo("nope".to_string()).is_recoverable());
    }

    #[test]
    fn test_tour_error_messages() {
        let err = TourError::ConfigFile {
            path: PathBuf::from("tour.toml"),
            source: ConfigError::Invalid("skip lists unknown demo 'visitor'".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "tour.toml: invalid config: skip lists unknown demo 'visitor'"
        );
        assert_eq!(
            TourError::Failed(vec!["lsp", "proxy"]).to_string(),
            "demos failed: lsp, proxy"
        );
        assert_eq!(
            TourError::from(DemoError::UnknownDemo("visitor".to_string())).to_string(),
            "no demo named 'visitor'"
        );
    }

    #[test]
    fn test_messages() {
        let err = DemoError::unsupported("Penguin", "fly");
        assert_eq!(err.to_string(), "Penguin does not support 'fly'");

        let err = ValidationError::InsufficientFunds {
            balance: 100.0,
            amount: 250.0,
        };
        assert_eq!(
            err.to_string(),
            "insufficient funds: balance is 100, requested 250"
        );
    }
}
