//! Studio configuration.
//!
//! ```toml
//! supported_versions = ["1.0", "1.1"]
//! default_version = "1.1"
//! ```

use serde::{Deserialize, Serialize};

use crate::dsl::schema::CURRENT_DSL_VERSION;
use crate::error::StudioError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    /// Versions the validator accepts. Empty accepts any version string.
    pub supported_versions: Vec<String>,
    /// Version stamped on documents created by the editors.
    pub default_version: String,
}

impl Default for StudioConfig {
    fn default() -> Self {
        StudioConfig {
            supported_versions: Vec::new(),
            default_version: CURRENT_DSL_VERSION.to_string(),
        }
    }
}

impl StudioConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, StudioError> {
        toml::from_str(content).map_err(|e| StudioError::ConfigError(e.to_string()))
    }

    pub fn with_supported_versions<I, S>(mut self, versions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.supported_versions = versions.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_version_supported(&self, version: &str) -> bool {
        self.supported_versions.is_empty() || self.supported_versions.iter().any(|v| v == version)
    }
}
