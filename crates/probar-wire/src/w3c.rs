//! Legacy to W3C capability translation.
//!
//! A strict W3C server rejects a new-session request carrying any capability
//! it does not know. The translator therefore filters instead of failing:
//!
//! ```text
//! input key                      output
//! ─────────────────────────────  ──────────────────────────────────────────
//! vendor:name (contains ':')     kept verbatim
//! W3C allow-list                 kept verbatim ("ANY" platformName elided)
//! version / platform / ...       renamed, unless the W3C key is also present
//! chromeOptions                  merged into goog:chromeOptions
//! firefox_profile                moz:firefoxOptions.profile, never overwriting
//! anything else                  dropped
//! ```

use tracing::{debug, trace};

use crate::capabilities::{CapabilitySet, CapabilityType, Platform};
use crate::value::{CapabilityMap, CapabilityValue};

/// Legacy keys renamed for W3C. `browserName` keeps its name and is covered
/// by [`W3C_CAPABILITIES`].
pub const RENAMED_CAPABILITIES: &[(&str, &str)] = &[
    (CapabilityType::VERSION, CapabilityType::BROWSER_VERSION),
    (CapabilityType::PLATFORM, CapabilityType::PLATFORM_NAME),
    (
        CapabilityType::ACCEPT_SSL_CERTS,
        CapabilityType::ACCEPT_INSECURE_CERTS,
    ),
];

/// Standalone keys a W3C server accepts
pub const W3C_CAPABILITIES: &[&str] = &[
    CapabilityType::BROWSER_NAME,
    CapabilityType::BROWSER_VERSION,
    CapabilityType::PLATFORM_NAME,
    CapabilityType::ACCEPT_INSECURE_CERTS,
    CapabilityType::PAGE_LOAD_STRATEGY,
    CapabilityType::PROXY,
    CapabilityType::SET_WINDOW_RECT,
    CapabilityType::TIMEOUTS,
    CapabilityType::STRICT_FILE_INTERACTABILITY,
    CapabilityType::UNHANDLED_PROMPT_BEHAVIOR,
];

/// Field of `moz:firefoxOptions` holding the encoded profile
pub const FIREFOX_PROFILE_FIELD: &str = "profile";

/// Whether a key is a vendor extension (`vendor:name`)
#[must_use]
pub fn is_vendor_extension(key: &str) -> bool {
    key.contains(':')
}

/// Whether a key is a valid standalone W3C capability
#[must_use]
pub fn is_w3c_capability(key: &str) -> bool {
    W3C_CAPABILITIES.contains(&key)
}

fn renamed(key: &str) -> Option<&'static str> {
    RENAMED_CAPABILITIES
        .iter()
        .find(|(legacy, _)| *legacy == key)
        .map(|(_, w3c)| *w3c)
}

fn is_any_platform(value: &CapabilityValue) -> bool {
    value
        .as_str()
        .is_some_and(|platform| platform.eq_ignore_ascii_case(Platform::ANY))
}

/// Whether `key` is present and kept by translation. An `ANY` platformName
/// is elided, so it never supersedes a legacy platform.
fn survives(input: &CapabilitySet, key: &str) -> bool {
    input
        .get(key)
        .is_some_and(|value| !(key == CapabilityType::PLATFORM_NAME && is_any_platform(value)))
}

/// Converts a capability set into the strict W3C capability object
#[derive(Debug, Clone, Copy)]
pub struct CapabilityTranslator {
    log_dropped: bool,
}

impl Default for CapabilityTranslator {
    fn default() -> Self {
        Self { log_dropped: true }
    }
}

impl CapabilityTranslator {
    /// Create a translator that logs dropped keys at debug level
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle per-key debug logs for dropped capabilities
    #[must_use]
    pub const fn with_log_dropped(mut self, log_dropped: bool) -> Self {
        self.log_dropped = log_dropped;
        self
    }

    /// Translate a capability set. Never fails; unknown keys are dropped.
    #[must_use]
    pub fn translate(&self, input: &CapabilitySet) -> CapabilitySet {
        let mut output = CapabilitySet::new();

        for (key, value) in input {
            self.translate_entry(input, &mut output, key, value);
        }

        if let Some(legacy) = input.get(CapabilityType::CHROME_OPTIONS) {
            let merged = match input.get(CapabilityType::GOOG_CHROME_OPTIONS) {
                Some(explicit) => {
                    debug!(
                        legacy = legacy.kind(),
                        explicit = explicit.kind(),
                        "merging chromeOptions into goog:chromeOptions"
                    );
                    merge_options(legacy, explicit)
                }
                None => legacy.clone(),
            };
            output.insert(CapabilityType::GOOG_CHROME_OPTIONS, merged);
        }

        if let Some(profile) = input.get(CapabilityType::FIREFOX_PROFILE) {
            self.apply_firefox_profile(&mut output, profile);
        }

        trace!(
            input = input.len(),
            output = output.len(),
            "translated capabilities to W3C"
        );
        output
    }

    fn translate_entry(
        &self,
        input: &CapabilitySet,
        output: &mut CapabilitySet,
        key: &str,
        value: &CapabilityValue,
    ) {
        if key == CapabilityType::CHROME_OPTIONS || key == CapabilityType::FIREFOX_PROFILE {
            return;
        }

        if is_vendor_extension(key) {
            output.insert(key, value.clone());
            return;
        }

        if is_w3c_capability(key) {
            if key == CapabilityType::PLATFORM_NAME && is_any_platform(value) {
                self.dropped(key, "platform ANY carries no meaning");
                return;
            }
            output.insert(key, value.clone());
            return;
        }

        let Some(target) = renamed(key) else {
            self.dropped(key, "not a W3C capability");
            return;
        };

        if survives(input, target) {
            self.dropped(key, "superseded by its W3C counterpart");
            return;
        }

        if key == CapabilityType::PLATFORM {
            if is_any_platform(value) {
                self.dropped(key, "platform ANY carries no meaning");
                return;
            }
            let value = match value {
                CapabilityValue::String(platform) => {
                    CapabilityValue::String(platform.to_lowercase())
                }
                other => other.clone(),
            };
            debug!(from = key, to = target, "renamed legacy capability");
            output.insert(target, value);
            return;
        }

        debug!(from = key, to = target, "renamed legacy capability");
        output.insert(target, value.clone());
    }

    fn apply_firefox_profile(&self, output: &mut CapabilitySet, profile: &CapabilityValue) {
        match output.get_mut(CapabilityType::MOZ_FIREFOX_OPTIONS) {
            None => {
                output.insert(
                    CapabilityType::MOZ_FIREFOX_OPTIONS,
                    CapabilityValue::object([(FIREFOX_PROFILE_FIELD, profile.clone())]),
                );
            }
            Some(CapabilityValue::Object(options)) => {
                if options.contains_key(FIREFOX_PROFILE_FIELD) {
                    self.dropped(
                        CapabilityType::FIREFOX_PROFILE,
                        "moz:firefoxOptions already defines a profile",
                    );
                } else {
                    options.insert(FIREFOX_PROFILE_FIELD.to_string(), profile.clone());
                }
            }
            Some(_) => self.dropped(
                CapabilityType::FIREFOX_PROFILE,
                "moz:firefoxOptions is not an object",
            ),
        }
    }

    fn dropped(&self, key: &str, reason: &str) {
        if self.log_dropped {
            debug!(key, reason, "dropped capability");
        }
    }
}

/// Translate with the default translator
#[must_use]
pub fn to_w3c(input: &CapabilitySet) -> CapabilitySet {
    CapabilityTranslator::new().translate(input)
}

/// Merge a legacy options fragment with an explicit vendor fragment.
///
/// Lists concatenate legacy items first. Objects merge key by key,
/// recursively. Any other pairing keeps the explicit value.
#[must_use]
pub fn merge_options(legacy: &CapabilityValue, explicit: &CapabilityValue) -> CapabilityValue {
    match (legacy, explicit) {
        (CapabilityValue::Object(legacy), CapabilityValue::Object(explicit)) => {
            CapabilityValue::Object(merge_maps(legacy, explicit))
        }
        (CapabilityValue::List(legacy), CapabilityValue::List(explicit)) => {
            CapabilityValue::List(legacy.iter().chain(explicit).cloned().collect())
        }
        (_, explicit) => explicit.clone(),
    }
}

fn merge_maps(legacy: &CapabilityMap, explicit: &CapabilityMap) -> CapabilityMap {
    let mut merged = legacy.clone();
    for (key, value) in explicit {
        let value = match merged.remove(key) {
            Some(existing) => merge_options(&existing, value),
            None => value.clone(),
        };
        merged.insert(key.clone(), value);
    }
    merged
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn caps(value: serde_json::Value) -> CapabilitySet {
        CapabilitySet::try_from(value).unwrap()
    }

    mod filter_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_input() {
            assert!(to_w3c(&CapabilitySet::new()).is_empty());
        }

        #[test]
        fn test_renamed_capabilities() {
            let input = caps(json!({
                "browserName": "chrome",
                "version": "67.0.1",
                "platform": "linux",
                "acceptSslCerts": true
            }));
            assert_eq!(
                to_w3c(&input).to_json(),
                json!({
                    "browserName": "chrome",
                    "browserVersion": "67.0.1",
                    "platformName": "linux",
                    "acceptInsecureCerts": true
                })
            );
        }

        #[test]
        fn test_platform_lowercased() {
            let input = caps(json!({"platform": "LINUX"}));
            assert_eq!(to_w3c(&input).to_json(), json!({"platformName": "linux"}));
        }

        #[test]
        fn test_any_platform_removed() {
            assert!(to_w3c(&caps(json!({"platform": "ANY"}))).is_empty());
            assert!(to_w3c(&caps(json!({"platformName": "ANY"}))).is_empty());
        }

        #[test]
        fn test_legacy_booleans_removed() {
            let input = caps(json!({"webStorageEnabled": true, "takesScreenshot": false}));
            assert!(to_w3c(&input).is_empty());
        }

        #[test]
        fn test_custom_capability_removed() {
            let input = caps(json!({"customInvalidCapability": "shouldBeRemoved"}));
            assert!(to_w3c(&input).is_empty());
        }

        #[test]
        fn test_w3c_capabilities_kept() {
            let input = caps(json!({
                "pageLoadStrategy": "eager",
                "strictFileInteractability": false,
                "timeouts": {"implicit": 0, "pageLoad": 300_000}
            }));
            assert_eq!(to_w3c(&input), input);
        }

        #[test]
        fn test_vendor_extension_kept() {
            let input = caps(json!({"vendor:prefix": "vendor extension should be kept"}));
            assert_eq!(to_w3c(&input), input);
        }

        #[test]
        fn test_explicit_w3c_key_wins_over_legacy() {
            let input = caps(json!({"version": "66", "browserVersion": "67"}));
            assert_eq!(to_w3c(&input).to_json(), json!({"browserVersion": "67"}));
        }

        #[test]
        fn test_any_platform_name_does_not_hide_legacy_platform() {
            let input = caps(json!({"platform": "linux", "platformName": "ANY"}));
            assert_eq!(to_w3c(&input).to_json(), json!({"platformName": "linux"}));
        }

        #[test]
        fn test_any_legacy_platform_keeps_platform_name() {
            let input = caps(json!({"platform": "ANY", "platformName": "mac"}));
            assert_eq!(to_w3c(&input).to_json(), json!({"platformName": "mac"}));
        }

        #[test]
        fn test_javascript_enabled_removed() {
            let input = CapabilitySet::html_unit_with_js();
            assert_eq!(to_w3c(&input).to_json(), json!({"browserName": "htmlunit"}));
        }

        #[test]
        fn test_logging_toggle_does_not_change_output() {
            let input = caps(json!({"foo": 1, "browserName": "chrome"}));
            let quiet = CapabilityTranslator::new().with_log_dropped(false);
            assert_eq!(quiet.translate(&input), to_w3c(&input));
        }
    }

    mod chrome_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_chrome_options_converted() {
            let input = caps(json!({"chromeOptions": {"args": ["--headless"]}}));
            assert_eq!(
                to_w3c(&input).to_json(),
                json!({"goog:chromeOptions": {"args": ["--headless"]}})
            );
        }

        #[test]
        fn test_chrome_options_merged() {
            let input = caps(json!({
                "chromeOptions": {"args": ["--headless"]},
                "goog:chromeOptions": {
                    "debuggerAddress": "127.0.0.1:38947",
                    "args": ["window-size=1024,768"]
                }
            }));
            assert_eq!(
                to_w3c(&input).to_json(),
                json!({
                    "goog:chromeOptions": {
                        "args": ["--headless", "window-size=1024,768"],
                        "debuggerAddress": "127.0.0.1:38947"
                    }
                })
            );
        }

        #[test]
        fn test_explicit_scalar_wins() {
            let input = caps(json!({
                "chromeOptions": {"binary": "/usr/bin/chromium", "detach": true},
                "goog:chromeOptions": {"binary": "/opt/chrome"}
            }));
            assert_eq!(
                to_w3c(&input).to_json(),
                json!({
                    "goog:chromeOptions": {"binary": "/opt/chrome", "detach": true}
                })
            );
        }

        #[test]
        fn test_nested_objects_merged() {
            let input = caps(json!({
                "chromeOptions": {"prefs": {"a": 1, "b": 1}},
                "goog:chromeOptions": {"prefs": {"b": 2}}
            }));
            assert_eq!(
                to_w3c(&input).to_json(),
                json!({"goog:chromeOptions": {"prefs": {"a": 1, "b": 2}}})
            );
        }

        #[test]
        fn test_non_object_explicit_wins() {
            let input = caps(json!({
                "chromeOptions": {"args": ["--headless"]},
                "goog:chromeOptions": "opaque"
            }));
            assert_eq!(
                to_w3c(&input).to_json(),
                json!({"goog:chromeOptions": "opaque"})
            );
        }

        #[test]
        fn test_legacy_key_absent_from_output() {
            let input = caps(json!({"chromeOptions": {"args": []}}));
            assert!(!to_w3c(&input).contains(CapabilityType::CHROME_OPTIONS));
        }
    }

    mod firefox_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        const PROFILE: &str = "UEsDBBQAAAAIAAAAIQ==";

        #[test]
        fn test_firefox_profile_converted() {
            let input = caps(json!({"firefox_profile": PROFILE}));
            assert_eq!(
                to_w3c(&input).to_json(),
                json!({"moz:firefoxOptions": {"profile": PROFILE}})
            );
        }

        #[test]
        fn test_firefox_profile_not_overwritten() {
            let input = caps(json!({
                "firefox_profile": PROFILE,
                "moz:firefoxOptions": {"profile": "w3cProfile"}
            }));
            assert_eq!(
                to_w3c(&input).to_json(),
                json!({"moz:firefoxOptions": {"profile": "w3cProfile"}})
            );
        }

        #[test]
        fn test_firefox_profile_merged_with_options() {
            let input = caps(json!({
                "firefox_profile": PROFILE,
                "moz:firefoxOptions": {"args": ["-headless"]}
            }));
            assert_eq!(
                to_w3c(&input).to_json(),
                json!({"moz:firefoxOptions": {"profile": PROFILE, "args": ["-headless"]}})
            );
        }

        #[test]
        fn test_non_object_firefox_options_kept() {
            let input = caps(json!({
                "firefox_profile": PROFILE,
                "moz:firefoxOptions": true
            }));
            assert_eq!(
                to_w3c(&input).to_json(),
                json!({"moz:firefoxOptions": true})
            );
        }
    }

    mod merge_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_lists_concatenate_legacy_first() {
            let merged = merge_options(
                &CapabilityValue::from(vec!["a", "b"]),
                &CapabilityValue::from(vec!["c"]),
            );
            assert_eq!(merged, CapabilityValue::from(vec!["a", "b", "c"]));
        }

        #[test]
        fn test_mismatched_kinds_keep_explicit() {
            let merged = merge_options(
                &CapabilityValue::from(vec!["a"]),
                &CapabilityValue::from("b"),
            );
            assert_eq!(merged, CapabilityValue::from("b"));
        }

        #[test]
        fn test_tables() {
            assert!(is_w3c_capability("pageLoadStrategy"));
            assert!(!is_w3c_capability("version"));
            assert!(is_vendor_extension("goog:chromeOptions"));
            assert_eq!(renamed("acceptSslCerts"), Some("acceptInsecureCerts"));
            assert_eq!(renamed("browserName"), None);
        }
    }
}
