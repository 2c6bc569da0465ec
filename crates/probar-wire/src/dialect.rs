//! Wire dialect tag.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::result::WireError;

/// Which generation of the WebDriver wire protocol a server speaks
///
/// This crate never detects the dialect itself; the session layer decides and
/// passes it in with every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Pre-standard JsonWire protocol
    #[serde(alias = "jsonwire")]
    Legacy,
    /// W3C WebDriver
    #[default]
    W3C,
}

impl Dialect {
    /// Whether this is the W3C dialect
    #[must_use]
    pub const fn is_w3c(self) -> bool {
        matches!(self, Self::W3C)
    }

    /// Lowercase name, as used in configuration files
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::W3C => "w3c",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = WireError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "legacy" | "jsonwire" => Ok(Self::Legacy),
            "w3c" => Ok(Self::W3C),
            _ => Err(WireError::UnknownDialect {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_w3c() {
        assert_eq!(Dialect::default(), Dialect::W3C);
        assert!(Dialect::default().is_w3c());
        assert!(!Dialect::Legacy.is_w3c());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("legacy".parse::<Dialect>().unwrap(), Dialect::Legacy);
        assert_eq!("JsonWire".parse::<Dialect>().unwrap(), Dialect::Legacy);
        assert_eq!("W3C".parse::<Dialect>().unwrap(), Dialect::W3C);
        assert!(matches!(
            "marionette".parse::<Dialect>(),
            Err(WireError::UnknownDialect { .. })
        ));
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for dialect in [Dialect::Legacy, Dialect::W3C] {
            assert_eq!(dialect.to_string().parse::<Dialect>().unwrap(), dialect);
        }
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Dialect::W3C).unwrap(), "\"w3c\"");
        assert_eq!(
            serde_json::from_str::<Dialect>("\"jsonwire\"").unwrap(),
            Dialect::Legacy
        );
    }
}
