//! Dispatcher configuration.

use serde::Deserialize;

/// Settings resolved once at startup and handed to the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NotifyConfig {
    /// Whether the process runs on the supported platform. When `false`,
    /// every send is logged and skipped without touching the host.
    pub platform_supported: bool,
}

impl NotifyConfig {
    /// Configuration for the platform this binary was compiled for.
    #[must_use]
    pub const fn detect() -> Self {
        Self {
            platform_supported: cfg!(target_os = "android"),
        }
    }

    /// Parse configuration from JSON. Missing fields keep their detected value.
    ///
    /// # Errors
    /// Returns the parse error if `json` is not a valid configuration object.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self::detect()
    }
}
