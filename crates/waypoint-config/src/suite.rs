//! On-disk suite file format.
//!
//! These are the raw, unvalidated shapes deserialized from a suite TOML file.
//! [`crate::TestConfig`] is built from a [`SuiteFile`] once validation passes.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_LOAD_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 1_000;
pub const DEFAULT_HOME_STAGE: &str = "home-page";
pub const DEFAULT_DESTINATION_STAGE: &str = "destination-page";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) \
     Ubuntu Chromium/53.0.2785.143 Chrome/53.0.2785.143 Safari/537.36";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuiteFile {
    pub manifest: ManifestSection,

    pub target: TargetSection,

    #[serde(default)]
    pub capture: CaptureSection,

    #[serde(default)]
    pub viewports: Vec<ViewportSpec>,
}

/// Identity of a suite. `id` doubles as the capture filename slug.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestSection {
    pub id: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TargetSection {
    pub url: String,

    pub nav_selector: String,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default = "default_page_load_timeout_ms")]
    pub page_load_timeout_ms: u64,

    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,

    #[serde(default)]
    pub settle: SettleStrategy,

    pub title_pattern: String,

    pub destination_url_pattern: String,

    #[serde(default = "default_home_stage")]
    pub home_stage: String,

    #[serde(default = "default_destination_stage")]
    pub destination_stage: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CaptureSection {
    #[serde(default = "default_capture_enabled")]
    pub enabled: bool,
}

impl Default for CaptureSection {
    fn default() -> Self {
        Self {
            enabled: default_capture_enabled(),
        }
    }
}

/// A virtual browser window geometry under test.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViewportSpec {
    pub name: String,
    pub width: u32,
    pub height: u32,
}

impl ViewportSpec {
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }
}

impl std::fmt::Display for ViewportSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({},{})", self.name, self.width, self.height)
    }
}

/// How a reloaded page is considered settled before assertions run.
///
/// `Delay` sleeps for a fixed time and is only a heuristic. `DocumentReady`
/// polls `document.readyState`, bounded by the page load timeout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SettleStrategy {
    #[default]
    Delay,
    DocumentReady,
}

pub fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

pub fn default_page_load_timeout_ms() -> u64 {
    DEFAULT_PAGE_LOAD_TIMEOUT_MS
}

pub fn default_settle_delay_ms() -> u64 {
    DEFAULT_SETTLE_DELAY_MS
}

pub fn default_home_stage() -> String {
    DEFAULT_HOME_STAGE.to_string()
}

pub fn default_destination_stage() -> String {
    DEFAULT_DESTINATION_STAGE.to_string()
}

pub fn default_capture_enabled() -> bool {
    true
}
