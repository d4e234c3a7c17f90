use crate::error::GreetError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_SALUTATION: &str = "Привет";

/// Settings for a [`crate::Greeter`].
///
/// Every field has a default, so an empty TOML document is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GreeterConfig {
    salutation: String,
}

impl Default for GreeterConfig {
    fn default() -> Self {
        Self {
            salutation: DEFAULT_SALUTATION.to_string(),
        }
    }
}

impl GreeterConfig {
    pub fn new(salutation: impl Into<String>) -> Self {
        Self {
            salutation: salutation.into(),
        }
    }

    pub fn salutation(&self) -> &str {
        &self.salutation
    }

    pub fn from_toml_str(content: &str) -> Result<Self, GreetError> {
        toml::from_str(content).map_err(GreetError::from)
    }

    pub fn load(path: &Path) -> Result<Self, GreetError> {
        let content =
            fs::read_to_string(path).map_err(|err| GreetError::read_config(path, err))?;
        Self::from_toml_str(&content)
    }
}
