//! Configuration for the customer permission expander
//!
//! Read from a JSON document. Missing keys take their defaults, so `{}` is
//! a valid configuration.

use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;


pub const DEFAULT_CHILD_TYPE: &str = "product-customer-permission";


#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] io::Error),
    #[error("cannot parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("child_type must not be empty")]
    EmptyChildType,
}


#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PermissionConfig {
    /// Index type name of the child documents that hold customer permissions
    #[serde(default = "default_child_type")]
    pub child_type: String,
}

fn default_child_type() -> String { DEFAULT_CHILD_TYPE.to_string() }


impl Default for PermissionConfig {
    fn default() -> PermissionConfig {
        PermissionConfig {
            child_type: default_child_type(),
        }
    }
}


impl PermissionConfig {
    pub fn new(child_type: &str) -> PermissionConfig {
        PermissionConfig {
            child_type: child_type.to_owned(),
        }
    }

    pub fn from_json_str(data: &str) -> Result<PermissionConfig, ConfigError> {
        let config: PermissionConfig = serde_json::from_str(data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<PermissionConfig, ConfigError> {
        let data = fs::read_to_string(path)?;
        PermissionConfig::from_json_str(&data)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.child_type.trim().is_empty() {
            return Err(ConfigError::EmptyChildType);
        }

        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use std::env;
    use std::fs;
    use std::path::Path;

    use super::{PermissionConfig, ConfigError, DEFAULT_CHILD_TYPE};

    #[test]
    fn test_defaults() {
        let config = PermissionConfig::from_json_str("{}").unwrap();

        assert_eq!(config.child_type, DEFAULT_CHILD_TYPE);
        assert_eq!(config, PermissionConfig::default());
    }

    #[test]
    fn test_child_type() {
        let config = PermissionConfig::from_json_str("{\"child_type\": \"customer\"}").unwrap();

        assert_eq!(config, PermissionConfig::new("customer"));
    }

    #[test]
    fn test_gives_error_for_empty_child_type() {
        match PermissionConfig::from_json_str("{\"child_type\": \"  \"}") {
            Err(ConfigError::EmptyChildType) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_gives_error_for_unknown_key() {
        match PermissionConfig::from_json_str("{\"child_typ\": \"customer\"}") {
            Err(ConfigError::Parse(_)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_from_file() {
        let mut path = env::temp_dir();
        path.push(format!("permission-config-{}.json", std::process::id()));
        fs::write(&path, "{\"child_type\": \"customer\"}").unwrap();

        let config = PermissionConfig::from_file(&path);
        fs::remove_file(&path).unwrap();

        assert_eq!(config.unwrap(), PermissionConfig::new("customer"));
    }

    #[test]
    fn test_gives_error_for_missing_file() {
        match PermissionConfig::from_file(Path::new("/nonexistent/permission-config.json")) {
            Err(ConfigError::Io(_)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
