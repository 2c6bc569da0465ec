//! Wire compatibility configuration

use serde::{Deserialize, Serialize};

use crate::dialect::Dialect;
use crate::result::{WireError, WireResult};

/// Configuration for a [`crate::WireCompat`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WireConfig {
    /// Dialect the remote end speaks
    pub dialect: Dialect,
    /// Log each capability dropped during W3C translation at debug level
    pub log_dropped_capabilities: bool,
}

impl Default for WireConfig {
    fn default() -> Self {
        Self {
            dialect: Dialect::W3C,
            log_dropped_capabilities: true,
        }
    }
}

impl WireConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dialect
    #[must_use]
    pub const fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Set dropped-capability logging
    #[must_use]
    pub const fn with_log_dropped_capabilities(mut self, enabled: bool) -> Self {
        self.log_dropped_capabilities = enabled;
        self
    }

    /// Load from JSON
    ///
    /// # Errors
    ///
    /// Returns [`WireError::Config`] if the document does not parse
    pub fn from_json(json: &str) -> WireResult<Self> {
        serde_json::from_str(json).map_err(|e| WireError::config(e.to_string()))
    }

    /// Load from YAML
    ///
    /// # Errors
    ///
    /// Returns [`WireError::Config`] if the document does not parse
    pub fn from_yaml(yaml: &str) -> WireResult<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| WireError::config(e.to_string()))
    }
}
