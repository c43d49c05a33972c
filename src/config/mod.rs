#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::utils::error::Result;
use crate::utils::validation::{
    validate_aws_region, validate_table_name, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_REGION: &str = "ap-southeast-2";
pub const DEFAULT_EMPLOYEES_TABLE: &str = "Employees";
pub const DEFAULT_BOOKS_TABLE: &str = "Books";

/// Where records live. Read once at process start and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub region: String,
    pub endpoint_url: Option<String>,
    pub employees_table: String,
    pub books_table: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            endpoint_url: None,
            employees_table: DEFAULT_EMPLOYEES_TABLE.to_string(),
            books_table: DEFAULT_BOOKS_TABLE.to_string(),
        }
    }
}

impl StoreConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable source; unset or blank values keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        Self {
            region: var("ROSTER_REGION").unwrap_or(defaults.region),
            endpoint_url: var("ROSTER_ENDPOINT_URL"),
            employees_table: var("EMPLOYEES_TABLE").unwrap_or(defaults.employees_table),
            books_table: var("BOOKS_TABLE").unwrap_or(defaults.books_table),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

impl Validate for StoreConfig {
    fn validate(&self) -> Result<()> {
        validate_aws_region("region", &self.region)?;
        if let Some(endpoint) = &self.endpoint_url {
            validate_url("endpoint_url", endpoint)?;
        }
        validate_table_name("employees_table", &self.employees_table)?;
        validate_table_name("books_table", &self.books_table)?;

        tracing::debug!("Store configuration validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ApiError;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::from_lookup(|_| None);
        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.region, "ap-southeast-2");
        assert_eq!(config.employees_table, "Employees");
        assert_eq!(config.books_table, "Books");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_overrides() {
        let vars = HashMap::from([
            ("ROSTER_ENDPOINT_URL", "http://localhost:8000"),
            ("EMPLOYEES_TABLE", "roster-dev-Employees"),
            ("BOOKS_TABLE", "  "),
        ]);
        let config = StoreConfig::from_lookup(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(config.region, DEFAULT_REGION);
        assert_eq!(config.endpoint_url.as_deref(), Some("http://localhost:8000"));
        assert_eq!(config.employees_table, "roster-dev-Employees");
        assert_eq!(config.books_table, DEFAULT_BOOKS_TABLE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml() {
        let config = StoreConfig::from_toml_str(
            r#"
region = "us-east-1"
employees_table = "StaffDirectory"
"#,
        )
        .unwrap();

        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.employees_table, "StaffDirectory");
        assert_eq!(config.books_table, DEFAULT_BOOKS_TABLE);
        assert_eq!(config.endpoint_url, None);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let config = StoreConfig {
            endpoint_url: Some("ftp://localhost".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ApiError::InvalidConfigValue { ref field, .. }) if field == "endpoint_url"
        ));

        let config = StoreConfig {
            books_table: "B".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
