use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigError;

/// Settings for a tour run, loaded from TOML. Every field has a default so an
/// empty file (or no file at all) is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TourConfig {
    pub color: bool,
    /// Demo names excluded from `all`.
    pub skip: Vec<String>,
    pub account: AccountLimits,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AccountLimits {
    pub opening_balance: f64,
    pub max_deposit: f64,
    pub max_withdrawal: f64,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            color: true,
            skip: Vec::new(),
            account: AccountLimits::default(),
        }
    }
}

impl Default for AccountLimits {
    fn default() -> Self {
        Self {
            opening_balance: 1000.0,
            max_deposit: 10_000.0,
            max_withdrawal: 5_000.0,
        }
    }
}

impl TourConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: TourConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Checks limits and that every skipped name is one of `known`.
    pub fn validate<'a>(&self, known: impl IntoIterator<Item = &'a str>) -> Result<(), ConfigError> {
        let limits = &self.account;
        for (field, value) in [
            ("opening_balance", limits.opening_balance),
            ("max_deposit", limits.max_deposit),
            ("max_withdrawal", limits.max_withdrawal),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "account.{} must be a non-negative number, got {}",
                    field, value
                )));
            }
        }

        let known: Vec<&str> = known.into_iter().collect();
        if let Some(name) = self.skip.iter().find(|name| !known.contains(&name.as_str())) {
            return Err(ConfigError::Invalid(format!(
                "skip lists unknown demo '{}'",
                name
            )));
        }
        Ok(())
    }

    pub fn is_skipped(&self, name: &str) -> bool {
        self.skip.iter().any(|s| s == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_from_empty_file() {
        let config = TourConfig::from_toml_str("").unwrap();
        assert_eq!(config, TourConfig::default());
        assert_eq!(config.account.max_withdrawal, 5_000.0);
        assert_eq!(config.account.max_deposit, 10_000.0);
    }

    #[test]
    fn test_partial_override() {
        let config = TourConfig::from_toml_str(
            "color = false\nskip = [\"proxy\"]\n[account]\nmax_withdrawal = 250.0\n",
        )
        .unwrap();
        assert!(!config.color);
        assert!(config.is_skipped("proxy"));
        assert_eq!(config.account.max_withdrawal, 250.0);
        assert_eq!(config.account.max_deposit, 10_000.0);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = TourConfig::from_toml_str("colour = true\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_validate() {
        let mut config = TourConfig::default();
        assert!(config.validate(["proxy"]).is_ok());

        config.skip.push("missing".to_string());
        assert!(matches!(
            config.validate(["proxy"]),
            Err(ConfigError::Invalid(_))
        ));

        let mut config = TourConfig::default();
        config.account.max_deposit = -1.0;
        assert!(config.validate(std::iter::empty()).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[account]\nopening_balance = 42.0").unwrap();

        let config = TourConfig::load(file.path()).unwrap();
        assert_eq!(config.account.opening_balance, 42.0);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = TourConfig::load(dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
