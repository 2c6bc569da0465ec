//! Desired capabilities.
//!
//! A [`CapabilitySet`] is the dialect-neutral bag of capabilities a caller
//! assembles before creating a session. It accepts legacy JsonWire keys, W3C
//! keys, vendor extensions and arbitrary custom keys alike; only the
//! translation in [`crate::w3c`] decides what reaches a strict server.

use serde::{Deserialize, Serialize};
use std::collections::btree_map;

use crate::result::{WireError, WireResult};
use crate::value::{CapabilityMap, CapabilityValue};

/// Well-known capability keys
#[derive(Debug, Clone, Copy)]
pub struct CapabilityType;

impl CapabilityType {
    /// Browser name (both dialects)
    pub const BROWSER_NAME: &'static str = "browserName";
    /// Legacy browser version
    pub const VERSION: &'static str = "version";
    /// Legacy platform
    pub const PLATFORM: &'static str = "platform";
    /// Legacy JavaScript toggle (HtmlUnit only)
    pub const JAVASCRIPT_ENABLED: &'static str = "javascriptEnabled";
    /// Legacy screenshot support flag
    pub const TAKES_SCREENSHOT: &'static str = "takesScreenshot";
    /// Legacy alert handling flag
    pub const HANDLES_ALERTS: &'static str = "handlesAlerts";
    /// Legacy CSS selector support flag
    pub const CSS_SELECTORS_ENABLED: &'static str = "cssSelectorsEnabled";
    /// Legacy web storage flag
    pub const WEB_STORAGE_ENABLED: &'static str = "webStorageEnabled";
    /// Legacy database flag
    pub const DATABASE_ENABLED: &'static str = "databaseEnabled";
    /// Legacy geolocation flag
    pub const LOCATION_CONTEXT_ENABLED: &'static str = "locationContextEnabled";
    /// Legacy application cache flag
    pub const APPLICATION_CACHE_ENABLED: &'static str = "applicationCacheEnabled";
    /// Legacy connectivity flag
    pub const BROWSER_CONNECTION_ENABLED: &'static str = "browserConnectionEnabled";
    /// Legacy rotation flag
    pub const ROTATABLE: &'static str = "rotatable";
    /// Legacy certificate policy
    pub const ACCEPT_SSL_CERTS: &'static str = "acceptSslCerts";
    /// Legacy native events flag
    pub const NATIVE_EVENTS: &'static str = "nativeEvents";
    /// Legacy Chrome options fragment
    pub const CHROME_OPTIONS: &'static str = "chromeOptions";
    /// Legacy encoded Firefox profile
    pub const FIREFOX_PROFILE: &'static str = "firefox_profile";

    /// W3C browser version
    pub const BROWSER_VERSION: &'static str = "browserVersion";
    /// W3C platform
    pub const PLATFORM_NAME: &'static str = "platformName";
    /// W3C certificate policy
    pub const ACCEPT_INSECURE_CERTS: &'static str = "acceptInsecureCerts";
    /// W3C page load strategy
    pub const PAGE_LOAD_STRATEGY: &'static str = "pageLoadStrategy";
    /// Proxy configuration (both dialects)
    pub const PROXY: &'static str = "proxy";
    /// W3C window rect support
    pub const SET_WINDOW_RECT: &'static str = "setWindowRect";
    /// W3C session timeouts
    pub const TIMEOUTS: &'static str = "timeouts";
    /// W3C strict file interactability
    pub const STRICT_FILE_INTERACTABILITY: &'static str = "strictFileInteractability";
    /// W3C user prompt handler
    pub const UNHANDLED_PROMPT_BEHAVIOR: &'static str = "unhandledPromptBehavior";

    /// Chrome vendor options
    pub const GOOG_CHROME_OPTIONS: &'static str = "goog:chromeOptions";
    /// Firefox vendor options
    pub const MOZ_FIREFOX_OPTIONS: &'static str = "moz:firefoxOptions";
}

/// Legacy platform names
#[derive(Debug, Clone, Copy)]
pub struct Platform;

impl Platform {
    /// Any platform; carries no meaning for a W3C server
    pub const ANY: &'static str = "ANY";
    /// Android
    pub const ANDROID: &'static str = "ANDROID";
    /// Linux
    pub const LINUX: &'static str = "LINUX";
    /// macOS
    pub const MAC: &'static str = "MAC";
    /// Unix
    pub const UNIX: &'static str = "UNIX";
    /// Windows
    pub const WINDOWS: &'static str = "WINDOWS";
}

/// Browser names
#[derive(Debug, Clone, Copy)]
pub struct BrowserType;

impl BrowserType {
    /// Firefox
    pub const FIREFOX: &'static str = "firefox";
    /// Chrome
    pub const CHROME: &'static str = "chrome";
    /// Microsoft Edge
    pub const MICROSOFT_EDGE: &'static str = "MicrosoftEdge";
    /// Internet Explorer
    pub const IE: &'static str = "internet explorer";
    /// Opera
    pub const OPERA: &'static str = "opera";
    /// Safari
    pub const SAFARI: &'static str = "safari";
    /// Android browser
    pub const ANDROID: &'static str = "android";
    /// iPhone
    pub const IPHONE: &'static str = "iPhone";
    /// iPad
    pub const IPAD: &'static str = "iPad";
    /// HtmlUnit
    pub const HTMLUNIT: &'static str = "htmlunit";
    /// PhantomJS
    pub const PHANTOMJS: &'static str = "phantomjs";
}

/// A set of desired capabilities, keyed by capability name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapabilitySet {
    capabilities: CapabilityMap,
}

impl CapabilitySet {
    /// Create an empty set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set preset with a browser name and legacy platform
    #[must_use]
    pub fn for_browser(browser: &str, platform: &str) -> Self {
        let mut caps = Self::new();
        caps.set_browser_name(browser);
        caps.set_platform(platform);
        caps
    }

    /// Android browser on Android
    #[must_use]
    pub fn android() -> Self {
        Self::for_browser(BrowserType::ANDROID, Platform::ANDROID)
    }

    /// Chrome on any platform
    #[must_use]
    pub fn chrome() -> Self {
        Self::for_browser(BrowserType::CHROME, Platform::ANY)
    }

    /// Firefox on any platform
    #[must_use]
    pub fn firefox() -> Self {
        Self::for_browser(BrowserType::FIREFOX, Platform::ANY)
    }

    /// HtmlUnit on any platform
    #[must_use]
    pub fn html_unit() -> Self {
        Self::for_browser(BrowserType::HTMLUNIT, Platform::ANY)
    }

    /// HtmlUnit with JavaScript enabled
    #[must_use]
    pub fn html_unit_with_js() -> Self {
        let mut caps = Self::html_unit();
        caps.insert(CapabilityType::JAVASCRIPT_ENABLED, true);
        caps
    }

    /// Microsoft Edge on Windows
    #[must_use]
    pub fn microsoft_edge() -> Self {
        Self::for_browser(BrowserType::MICROSOFT_EDGE, Platform::WINDOWS)
    }

    /// Internet Explorer on Windows
    #[must_use]
    pub fn internet_explorer() -> Self {
        Self::for_browser(BrowserType::IE, Platform::WINDOWS)
    }

    /// Safari on iPhone
    #[must_use]
    pub fn iphone() -> Self {
        Self::for_browser(BrowserType::IPHONE, Platform::MAC)
    }

    /// Safari on iPad
    #[must_use]
    pub fn ipad() -> Self {
        Self::for_browser(BrowserType::IPAD, Platform::MAC)
    }

    /// Opera on any platform
    #[must_use]
    pub fn opera() -> Self {
        Self::for_browser(BrowserType::OPERA, Platform::ANY)
    }

    /// Safari on any platform
    #[must_use]
    pub fn safari() -> Self {
        Self::for_browser(BrowserType::SAFARI, Platform::ANY)
    }

    /// PhantomJS on any platform
    #[must_use]
    pub fn phantomjs() -> Self {
        Self::for_browser(BrowserType::PHANTOMJS, Platform::ANY)
    }

    /// Parse a set from a JSON object
    ///
    /// # Errors
    ///
    /// Returns error if the JSON is not an object or contains `null`
    pub fn from_json(json: &str) -> WireResult<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::try_from(value)
    }

    /// Insert a capability, replacing any previous value for the key
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<CapabilityValue>,
    ) -> Option<CapabilityValue> {
        self.capabilities.insert(key.into(), value.into())
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<CapabilityValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Get a capability value
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&CapabilityValue> {
        self.capabilities.get(key)
    }

    /// Set a capability. Alias of [`Self::insert`] that discards the
    /// previous value.
    pub fn set_capability(&mut self, key: impl Into<String>, value: impl Into<CapabilityValue>) {
        self.insert(key, value);
    }

    /// Get a capability value. Alias of [`Self::get`].
    #[must_use]
    pub fn capability(&self, key: &str) -> Option<&CapabilityValue> {
        self.get(key)
    }

    /// Mutably borrow a capability value
    pub fn get_mut(&mut self, key: &str) -> Option<&mut CapabilityValue> {
        self.capabilities.get_mut(key)
    }

    /// Remove a capability
    pub fn remove(&mut self, key: &str) -> Option<CapabilityValue> {
        self.capabilities.remove(key)
    }

    /// Whether the key is present
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.capabilities.contains_key(key)
    }

    /// Number of capabilities
    #[must_use]
    pub fn len(&self) -> usize {
        self.capabilities.len()
    }

    /// Whether the set is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.capabilities.is_empty()
    }

    /// Iterate over capabilities in key order
    pub fn iter(&self) -> btree_map::Iter<'_, String, CapabilityValue> {
        self.capabilities.iter()
    }

    /// Iterate over capability keys in key order
    pub fn keys(&self) -> btree_map::Keys<'_, String, CapabilityValue> {
        self.capabilities.keys()
    }

    /// Borrow the underlying map
    #[must_use]
    pub const fn as_map(&self) -> &CapabilityMap {
        &self.capabilities
    }

    /// Convert into an object value
    #[must_use]
    pub fn into_value(self) -> CapabilityValue {
        CapabilityValue::Object(self.capabilities)
    }

    /// Convert into a JSON object
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        self.clone().into_value().into_json()
    }

    /// Browser name, if set to a string
    #[must_use]
    pub fn browser_name(&self) -> Option<&str> {
        self.get(CapabilityType::BROWSER_NAME)
            .and_then(CapabilityValue::as_str)
    }

    /// Set the browser name
    pub fn set_browser_name(&mut self, browser: &str) {
        self.insert(CapabilityType::BROWSER_NAME, browser);
    }

    /// Legacy version value (string or number)
    #[must_use]
    pub fn version(&self) -> Option<&CapabilityValue> {
        self.get(CapabilityType::VERSION)
    }

    /// Set the legacy version
    pub fn set_version(&mut self, version: impl Into<CapabilityValue>) {
        self.insert(CapabilityType::VERSION, version);
    }

    /// Legacy platform, if set to a string
    #[must_use]
    pub fn platform(&self) -> Option<&str> {
        self.get(CapabilityType::PLATFORM)
            .and_then(CapabilityValue::as_str)
    }

    /// Set the legacy platform
    pub fn set_platform(&mut self, platform: &str) {
        self.insert(CapabilityType::PLATFORM, platform);
    }

    /// Whether JavaScript is enabled. Absent means enabled.
    #[must_use]
    pub fn is_javascript_enabled(&self) -> bool {
        self.get(CapabilityType::JAVASCRIPT_ENABLED)
            .and_then(CapabilityValue::as_bool)
            .unwrap_or(true)
    }

    /// Toggle JavaScript
    ///
    /// # Errors
    ///
    /// Disabling JavaScript is only supported by HtmlUnit; for any other
    /// browser this fails and leaves the set untouched.
    pub fn set_javascript_enabled(&mut self, enabled: bool) -> WireResult<()> {
        let browser = self.browser_name().unwrap_or_default();
        if !enabled && browser != BrowserType::HTMLUNIT {
            return Err(WireError::JavascriptToggleUnsupported {
                browser: browser.to_string(),
            });
        }
        self.insert(CapabilityType::JAVASCRIPT_ENABLED, enabled);
        Ok(())
    }

    /// Translate to the strict W3C capability object
    #[must_use]
    pub fn to_w3c(&self) -> Self {
        crate::w3c::CapabilityTranslator::new().translate(self)
    }
}

impl TryFrom<serde_json::Value> for CapabilitySet {
    type Error = WireError;

    fn try_from(value: serde_json::Value) -> WireResult<Self> {
        match CapabilityValue::try_from(value)? {
            CapabilityValue::Object(capabilities) => Ok(Self { capabilities }),
            other => Err(WireError::unsupported_value(format!(
                "capability set must be an object, got {}",
                other.kind()
            ))),
        }
    }
}

impl From<CapabilityMap> for CapabilitySet {
    fn from(capabilities: CapabilityMap) -> Self {
        Self { capabilities }
    }
}

impl<K: Into<String>, V: Into<CapabilityValue>> FromIterator<(K, V)> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            capabilities: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for CapabilitySet {
    type Item = (String, CapabilityValue);
    type IntoIter = btree_map::IntoIter<String, CapabilityValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.capabilities.into_iter()
    }
}

impl<'a> IntoIterator for &'a CapabilitySet {
    type Item = (&'a String, &'a CapabilityValue);
    type IntoIter = btree_map::Iter<'a, String, CapabilityValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.capabilities.iter()
    }
}
