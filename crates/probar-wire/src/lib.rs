//! probar-wire: WebDriver wire dialect compatibility
//!
//! WebDriver servers speak one of two dialects: the legacy JsonWire protocol
//! or W3C WebDriver. This crate lets callers build capabilities, locators and
//! key actions once and render them for whichever dialect the session layer
//! negotiated.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                        WireCompat(Dialect)                        │
//! ├──────────────────────────────────────────────────────────────────┤
//! │  CapabilitySet ──► CapabilityTranslator ──► session capabilities │
//! │  Locator       ──► Locator::translate   ──► {"using", "value"}   │
//! │  response      ──► ElementHandle::extract ─► ElementHandle       │
//! │  key           ──► validate_modifier    ──► KeyAction            │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every operation is a pure function of its inputs. Nothing here performs
//! I/O or holds state between calls.
//!
//! # Example
//!
//! ```
//! use probar_wire::prelude::*;
//!
//! let mut caps = CapabilitySet::chrome();
//! caps.set_version("67.0.1");
//!
//! let w3c = WireCompat::w3c();
//! let body = w3c.session_capabilities(&caps);
//! assert_eq!(body.get("browserVersion").and_then(CapabilityValue::as_str), Some("67.0.1"));
//! assert!(!body.contains("platformName"));
//!
//! let query = w3c.find_query(&Locator::id("login"));
//! assert_eq!(query.value, "#login");
//! ```

#![warn(missing_docs)]

mod capabilities;
mod compat;
mod config;
mod dialect;
mod element;
mod keys;
mod locator;
mod result;
mod value;

/// Legacy to W3C capability translation tables and merge rules
pub mod w3c;

pub use capabilities::{BrowserType, CapabilitySet, CapabilityType, Platform};
pub use compat::WireCompat;
pub use config::WireConfig;
pub use dialect::Dialect;
pub use element::{ElementHandle, LEGACY_ELEMENT_IDENTIFIER, W3C_ELEMENT_IDENTIFIER};
pub use keys::{validate_modifier, KeyAction, KeyActionKind, Keys};
pub use locator::{Locator, LocatorQuery, Mechanism};
pub use result::{WireError, WireResult};
pub use value::{CapabilityMap, CapabilityValue};
pub use w3c::{to_w3c, CapabilityTranslator};

/// Prelude for convenient imports
pub mod prelude {
    pub use super::capabilities::*;
    pub use super::compat::*;
    pub use super::config::*;
    pub use super::dialect::*;
    pub use super::element::*;
    pub use super::keys::*;
    pub use super::locator::*;
    pub use super::result::*;
    pub use super::value::*;
    pub use super::w3c::{to_w3c, CapabilityTranslator};
}
