//! Settings of the demonstration driver, read from a small TOML document:
//! ```toml
//! [logging]
//! level = "info"
//! to_file = false
//! [demo]
//! variable = "x"
//! point = 1.5
//! ```
//! Missing tables and keys fall back to the defaults.

use std::fmt;
use std::path::Path;
use toml::{Table, Value};

/// Error types for loading the configuration
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    InvalidValue { key: String, message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Cannot read configuration: {}", e),
            ConfigError::Parse(e) => write!(f, "Malformed configuration: {}", e),
            ConfigError::InvalidValue { key, message } => {
                write!(f, "Invalid value for '{}': {}", key, message)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::InvalidValue { .. } => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// off, error, warn, info, debug or trace
    pub loglevel: String,
    /// also write the log into log_<date>.txt
    pub log_to_file: bool,
    /// variable the demo differentiates with respect to
    pub variable: String,
    /// value of `variable` the demo evaluates at
    pub point: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            loglevel: "info".to_string(),
            log_to_file: false,
            variable: "x".to_string(),
            point: 1.0,
        }
    }
}

impl EngineConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let table: Table = content.parse()?;
        let mut config = EngineConfig::default();

        if let Some(logging) = section(&table, "logging")? {
            if let Some(level) = logging.get("level") {
                config.loglevel = as_str("logging.level", level)?.to_lowercase();
            }
            if let Some(to_file) = logging.get("to_file") {
                config.log_to_file = to_file
                    .as_bool()
                    .ok_or_else(|| invalid("logging.to_file", "expected a boolean"))?;
            }
        }
        if let Some(demo) = section(&table, "demo")? {
            if let Some(variable) = demo.get("variable") {
                let variable = as_str("demo.variable", variable)?;
                if variable.trim().is_empty() {
                    return Err(invalid("demo.variable", "variable name is empty"));
                }
                config.variable = variable.trim().to_string();
            }
            if let Some(point) = demo.get("point") {
                // integers are accepted as points too
                config.point = match point {
                    Value::Float(v) => *v,
                    Value::Integer(v) => *v as f64,
                    _ => return Err(invalid("demo.point", "expected a number")),
                };
            }
        }
        Ok(config)
    }
}

fn section<'a>(table: &'a Table, name: &str) -> Result<Option<&'a Table>, ConfigError> {
    match table.get(name) {
        None => Ok(None),
        Some(Value::Table(t)) => Ok(Some(t)),
        Some(_) => Err(invalid(name, "expected a table")),
    }
}

fn as_str<'a>(key: &str, value: &'a Value) -> Result<&'a str, ConfigError> {
    value
        .as_str()
        .ok_or_else(|| invalid(key, "expected a string"))
}

fn invalid(key: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        message: message.to_string(),
    }
}
