//! Element locators and their per-dialect wire form.
//!
//! W3C WebDriver dropped the `id`, `name` and `class name` strategies. When
//! talking to a W3C server those locators are rewritten as CSS selectors:
//!
//! | Mechanism    | W3C rewrite            |
//! |--------------|------------------------|
//! | `class name` | `.value`               |
//! | `id`         | `#value`               |
//! | `name`       | `[name='value']`       |
//!
//! The `name` rewrite inserts the value verbatim. Quotes inside it are not
//! escaped; servers in the wild expect exactly this encoding.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::dialect::Dialect;
use crate::result::WireError;

/// Locator strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mechanism {
    /// CSS selector
    #[serde(rename = "css selector")]
    CssSelector,
    /// Element id attribute
    #[serde(rename = "id")]
    Id,
    /// Element name attribute
    #[serde(rename = "name")]
    Name,
    /// Single CSS class name
    #[serde(rename = "class name")]
    ClassName,
    /// Exact anchor text
    #[serde(rename = "link text")]
    LinkText,
    /// Substring of anchor text
    #[serde(rename = "partial link text")]
    PartialLinkText,
    /// Tag name
    #[serde(rename = "tag name")]
    TagName,
    /// XPath expression
    #[serde(rename = "xpath")]
    XPath,
}

impl Mechanism {
    /// All mechanisms
    pub const ALL: [Self; 8] = [
        Self::CssSelector,
        Self::Id,
        Self::Name,
        Self::ClassName,
        Self::LinkText,
        Self::PartialLinkText,
        Self::TagName,
        Self::XPath,
    ];

    /// Literal wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CssSelector => "css selector",
            Self::Id => "id",
            Self::Name => "name",
            Self::ClassName => "class name",
            Self::LinkText => "link text",
            Self::PartialLinkText => "partial link text",
            Self::TagName => "tag name",
            Self::XPath => "xpath",
        }
    }

    /// Whether a W3C server accepts this mechanism as-is
    #[must_use]
    pub const fn is_w3c_native(self) -> bool {
        !matches!(self, Self::Id | Self::Name | Self::ClassName)
    }
}

impl fmt::Display for Mechanism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mechanism {
    type Err = WireError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mechanism| mechanism.as_str() == s)
            .ok_or_else(|| WireError::UnknownMechanism {
                name: s.to_string(),
            })
    }
}

/// A (mechanism, value) pair identifying how to find an element
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locator {
    mechanism: Mechanism,
    value: String,
}

impl Locator {
    /// Create a locator
    #[must_use]
    pub fn new(mechanism: Mechanism, value: impl Into<String>) -> Self {
        Self {
            mechanism,
            value: value.into(),
        }
    }

    /// Locate by CSS selector
    #[must_use]
    pub fn css(selector: impl Into<String>) -> Self {
        Self::new(Mechanism::CssSelector, selector)
    }

    /// Locate by id attribute
    #[must_use]
    pub fn id(id: impl Into<String>) -> Self {
        Self::new(Mechanism::Id, id)
    }

    /// Locate by name attribute
    #[must_use]
    pub fn name(name: impl Into<String>) -> Self {
        Self::new(Mechanism::Name, name)
    }

    /// Locate by class name
    #[must_use]
    pub fn class_name(class: impl Into<String>) -> Self {
        Self::new(Mechanism::ClassName, class)
    }

    /// Locate by exact link text
    #[must_use]
    pub fn link_text(text: impl Into<String>) -> Self {
        Self::new(Mechanism::LinkText, text)
    }

    /// Locate by partial link text
    #[must_use]
    pub fn partial_link_text(text: impl Into<String>) -> Self {
        Self::new(Mechanism::PartialLinkText, text)
    }

    /// Locate by tag name
    #[must_use]
    pub fn tag_name(tag: impl Into<String>) -> Self {
        Self::new(Mechanism::TagName, tag)
    }

    /// Locate by XPath
    #[must_use]
    pub fn xpath(expression: impl Into<String>) -> Self {
        Self::new(Mechanism::XPath, expression)
    }

    /// The locator strategy
    #[must_use]
    pub const fn mechanism(&self) -> Mechanism {
        self.mechanism
    }

    /// The locator value
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Rewrite for the given dialect
    ///
    /// Legacy servers get the locator unchanged. W3C servers get `id`,
    /// `name` and `class name` as CSS selectors.
    #[must_use]
    pub fn translate(&self, dialect: Dialect) -> Self {
        if !dialect.is_w3c() {
            return self.clone();
        }
        let value = &self.value;
        match self.mechanism {
            Mechanism::ClassName => Self::css(format!(".{value}")),
            Mechanism::Id => Self::css(format!("#{value}")),
            Mechanism::Name => Self::css(format!("[name='{value}']")),
            _ => self.clone(),
        }
    }

    /// Find-element request body for the given dialect
    #[must_use]
    pub fn to_query(&self, dialect: Dialect) -> LocatorQuery {
        LocatorQuery::from(self.translate(dialect))
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.mechanism, self.value)
    }
}

/// Find-element request body: `{"using": "...", "value": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocatorQuery {
    /// Mechanism wire name
    pub using: Mechanism,
    /// Locator value
    pub value: String,
}

impl From<Locator> for LocatorQuery {
    fn from(locator: Locator) -> Self {
        Self {
            using: locator.mechanism,
            value: locator.value,
        }
    }
}

impl From<LocatorQuery> for Locator {
    fn from(query: LocatorQuery) -> Self {
        Self::new(query.using, query.value)
    }
}
