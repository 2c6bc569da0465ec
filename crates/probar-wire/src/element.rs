//! Remote element references.

use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;

use crate::dialect::Dialect;
use crate::result::{WireError, WireResult};
use crate::value::{CapabilityMap, CapabilityValue};

/// Element identifier key defined by W3C WebDriver
pub const W3C_ELEMENT_IDENTIFIER: &str = "element-6066-11e4-a52e-4f735466cecf";

/// Element identifier key used by the legacy JsonWire protocol
pub const LEGACY_ELEMENT_IDENTIFIER: &str = "ELEMENT";

/// Opaque server-assigned element identifier
///
/// Belongs to the session that produced it. Only equality is meaningful.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementHandle(String);

impl ElementHandle {
    /// Wrap a raw identifier
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier
    #[must_use]
    pub fn id(&self) -> &str {
        &self.0
    }

    /// Consume into the raw identifier
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Extract the handle from a response object
    ///
    /// The W3C key takes precedence over the legacy `ELEMENT` key.
    ///
    /// # Errors
    ///
    /// [`WireError::MissingElementIdentifier`] if neither key is present,
    /// [`WireError::MalformedElementIdentifier`] if the value is not a string.
    pub fn extract(raw: &CapabilityMap) -> WireResult<Self> {
        resolve(|key| raw.get(key).map(CapabilityValue::as_str))
    }

    /// Extract the handle from a raw JSON response value
    ///
    /// # Errors
    ///
    /// Same as [`Self::extract`]; a non-object is treated as missing the
    /// identifier.
    pub fn from_json(raw: &serde_json::Value) -> WireResult<Self> {
        let object = raw
            .as_object()
            .ok_or(WireError::MissingElementIdentifier)?;
        resolve(|key| object.get(key).map(serde_json::Value::as_str))
    }

    /// Wire reference to this element for the given dialect
    #[must_use]
    pub fn to_reference(&self, dialect: Dialect) -> serde_json::Value {
        match dialect {
            Dialect::W3C => json!({ W3C_ELEMENT_IDENTIFIER: self.0 }),
            Dialect::Legacy => json!({ LEGACY_ELEMENT_IDENTIFIER: self.0 }),
        }
    }
}

/// `lookup` yields `Some(None)` for a present key with a non-string value.
fn resolve<'a>(lookup: impl Fn(&str) -> Option<Option<&'a str>>) -> WireResult<ElementHandle> {
    for key in [W3C_ELEMENT_IDENTIFIER, LEGACY_ELEMENT_IDENTIFIER] {
        match lookup(key) {
            Some(Some(id)) => return Ok(ElementHandle::new(id)),
            Some(None) => {
                return Err(WireError::MalformedElementIdentifier {
                    key: key.to_string(),
                })
            }
            None => {}
        }
    }
    Err(WireError::MissingElementIdentifier)
}

impl fmt::Display for ElementHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
