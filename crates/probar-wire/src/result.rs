//! Result and error types for probar-wire.

use thiserror::Error;

/// Result type for wire translation operations
pub type WireResult<T> = Result<T, WireError>;

/// Errors that can occur while translating between wire dialects
///
/// Unknown capability keys are not errors: the capability translator drops
/// them. Everything here is fatal for the single call that produced it.
#[derive(Debug, Error)]
pub enum WireError {
    /// Response object carries neither the W3C nor the legacy element key
    #[error("Response object does not contain an element identifier")]
    MissingElementIdentifier,

    /// Element identifier key present but its value is not a string
    #[error("Element identifier under '{key}' is not a string")]
    MalformedElementIdentifier {
        /// Key the identifier was found under
        key: String,
    },

    /// Key down / key up requested for a non-modifier key
    #[error("Key Down / Up events only make sense for modifier keys, got {key:?}")]
    InvalidModifierKey {
        /// The rejected key
        key: String,
    },

    /// JSON that cannot be represented as a capability value
    #[error("Unsupported capability value: {message}")]
    UnsupportedValue {
        /// Error message
        message: String,
    },

    /// JavaScript can only be disabled for HtmlUnit
    #[error("isJavascriptEnabled() is a htmlunit-only option (browser: {browser})")]
    JavascriptToggleUnsupported {
        /// Browser name the capability set targets
        browser: String,
    },

    /// Unrecognized locator mechanism name
    #[error("Unknown locator mechanism: {name}")]
    UnknownMechanism {
        /// The unrecognized name
        name: String,
    },

    /// Unrecognized dialect name
    #[error("Unknown wire dialect: {name}")]
    UnknownDialect {
        /// The unrecognized name
        name: String,
    },

    /// Configuration could not be loaded
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl WireError {
    /// Create an unsupported value error
    #[must_use]
    pub fn unsupported_value(message: impl Into<String>) -> Self {
        Self::UnsupportedValue {
            message: message.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
