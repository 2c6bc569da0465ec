//! Dialect-bound facade over the translators.
//!
//! The session layer decides once which dialect the server speaks and then
//! routes every request and response through a [`WireCompat`] built for it.

use tracing::trace;

use crate::capabilities::CapabilitySet;
use crate::config::WireConfig;
use crate::dialect::Dialect;
use crate::element::ElementHandle;
use crate::keys::KeyAction;
use crate::locator::{Locator, LocatorQuery};
use crate::result::WireResult;
use crate::w3c::CapabilityTranslator;

/// Translator bundle for one dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireCompat {
    dialect: Dialect,
    log_dropped: bool,
}

impl WireCompat {
    /// Create for a dialect
    #[must_use]
    pub const fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            log_dropped: true,
        }
    }

    /// W3C dialect
    #[must_use]
    pub const fn w3c() -> Self {
        Self::new(Dialect::W3C)
    }

    /// Legacy JsonWire dialect
    #[must_use]
    pub const fn legacy() -> Self {
        Self::new(Dialect::Legacy)
    }

    /// Create from configuration
    #[must_use]
    pub const fn from_config(config: &WireConfig) -> Self {
        Self {
            dialect: config.dialect,
            log_dropped: config.log_dropped_capabilities,
        }
    }

    /// The dialect this instance targets
    #[must_use]
    pub const fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Capability object for a new-session request
    ///
    /// Legacy servers receive the set as given (`desiredCapabilities`). W3C
    /// servers receive the strict translation (`capabilities.alwaysMatch`).
    #[must_use]
    pub fn session_capabilities(&self, capabilities: &CapabilitySet) -> CapabilitySet {
        match self.dialect {
            Dialect::Legacy => capabilities.clone(),
            Dialect::W3C => CapabilityTranslator::new()
                .with_log_dropped(self.log_dropped)
                .translate(capabilities),
        }
    }

    /// Locator rewritten for this dialect
    #[must_use]
    pub fn locator(&self, locator: &Locator) -> Locator {
        let translated = locator.translate(self.dialect);
        if translated != *locator {
            trace!(from = %locator, to = %translated, "rewrote locator");
        }
        translated
    }

    /// Find-element request body
    #[must_use]
    pub fn find_query(&self, locator: &Locator) -> LocatorQuery {
        LocatorQuery::from(self.locator(locator))
    }

    /// Element handle from a response value. Either identifier key is
    /// accepted regardless of dialect.
    ///
    /// # Errors
    ///
    /// Propagates [`ElementHandle::from_json`] failures.
    pub fn element(&self, raw: &serde_json::Value) -> WireResult<ElementHandle> {
        ElementHandle::from_json(raw)
    }

    /// Element handles from a find-elements response array
    ///
    /// # Errors
    ///
    /// Fails on the first entry without a usable identifier.
    pub fn elements(&self, raw: &[serde_json::Value]) -> WireResult<Vec<ElementHandle>> {
        raw.iter().map(ElementHandle::from_json).collect()
    }

    /// Element reference to embed in a request for this dialect
    #[must_use]
    pub fn element_reference(&self, element: &ElementHandle) -> serde_json::Value {
        element.to_reference(self.dialect)
    }

    /// Validated key down action
    ///
    /// # Errors
    ///
    /// Propagates [`KeyAction::key_down`] failures.
    pub fn key_down(&self, key: &str) -> WireResult<KeyAction> {
        KeyAction::key_down(key)
    }

    /// Validated key up action
    ///
    /// # Errors
    ///
    /// Propagates [`KeyAction::key_up`] failures.
    pub fn key_up(&self, key: &str) -> WireResult<KeyAction> {
        KeyAction::key_up(key)
    }
}

impl Default for WireCompat {
    fn default() -> Self {
        Self::from_config(&WireConfig::default())
    }
}
