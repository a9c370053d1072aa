//! The immutable configuration a run is executed against.
//!
//! `TestConfig` is built once from a validated [`SuiteFile`] and never
//! mutated afterwards. It carries compiled patterns and durations rather than
//! the raw strings and millisecond counts of the file format.

use std::path::{Path, PathBuf};
use std::time::Duration;

use figment::{
    Figment,
    providers::{Format as _, Toml},
};
use regex::Regex;

use crate::capture::CaptureNamer;
use crate::error::{ConfigError, Result};
use crate::suite::{ManifestSection, SettleStrategy, SuiteFile, ViewportSpec};
use crate::validation::validate_suite;

/// Identity of the suite a config was built from.
pub type ScriptManifest = ManifestSection;

#[derive(Debug, Clone)]
pub struct TestConfig {
    pub script: ScriptManifest,
    pub target_url: String,
    pub nav_selector: String,
    pub user_agent: String,
    pub page_load_timeout: Duration,
    pub settle_delay: Duration,
    pub settle: SettleStrategy,
    pub capture_enabled: bool,
    pub viewports: Vec<ViewportSpec>,
    pub title_pattern: Regex,
    pub destination_url_pattern: Regex,
    pub home_stage: String,
    pub destination_stage: String,
    /// File the suite was loaded from, if any.
    pub source: Option<PathBuf>,
}

impl TestConfig {
    /// Load and validate a suite file.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the file does not exist, `Parse` for malformed
    /// TOML or missing fields, and validation errors otherwise.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let suite: SuiteFile = Figment::from(Toml::file(path))
            .extract()
            .map_err(|e| ConfigError::Parse {
                path: path.to_path_buf(),
                source: Box::new(e),
            })?;

        let mut config = Self::try_from(suite)?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Build a config from suite TOML held in memory.
    ///
    /// # Example
    ///
    /// ```
    /// use waypoint_config::TestConfig;
    ///
    /// let config = TestConfig::from_toml_str(r#"
    /// [manifest]
    /// id = "example"
    /// name = "Example"
    /// description = "Follows the docs link"
    ///
    /// [target]
    /// url = "https://example.com"
    /// nav_selector = "a[href$='docs']"
    /// title_pattern = "Example"
    /// destination_url_pattern = "example.com/docs"
    ///
    /// [[viewports]]
    /// name = "desktop"
    /// width = 1600
    /// height = 900
    /// "#).unwrap();
    ///
    /// assert_eq!(config.viewports.len(), 1);
    /// assert_eq!(config.expected_assertions(), 2);
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let suite: SuiteFile =
            Figment::from(Toml::string(text))
                .extract()
                .map_err(|e| ConfigError::Parse {
                    path: PathBuf::from("<inline>"),
                    source: Box::new(e),
                })?;
        Self::try_from(suite)
    }

    /// Assertions recorded for every viewport: the title match plus the
    /// element-and-navigation check.
    pub const ASSERTIONS_PER_VIEWPORT: usize = 2;

    pub fn expected_assertions(&self) -> usize {
        self.viewports.len() * Self::ASSERTIONS_PER_VIEWPORT
    }

    pub fn capture_namer(&self) -> CaptureNamer {
        CaptureNamer::new(self.script.id.clone())
    }

    /// Returns a copy with capture forced on or off.
    #[must_use]
    pub fn with_capture(mut self, enabled: bool) -> Self {
        self.capture_enabled = enabled;
        self
    }

    /// Returns a copy with a different element/URL wait bound.
    #[must_use]
    pub fn with_page_load_timeout(mut self, timeout: Duration) -> Self {
        self.page_load_timeout = timeout;
        self
    }
}

impl TryFrom<SuiteFile> for TestConfig {
    type Error = ConfigError;

    fn try_from(suite: SuiteFile) -> Result<Self> {
        validate_suite(&suite)?;

        let title_pattern = compile("target.title_pattern", &suite.target.title_pattern)?;
        let destination_url_pattern = compile(
            "target.destination_url_pattern",
            &suite.target.destination_url_pattern,
        )?;

        let target = suite.target;
        Ok(Self {
            script: suite.manifest,
            target_url: target.url.trim().to_string(),
            nav_selector: target.nav_selector,
            user_agent: target.user_agent,
            page_load_timeout: Duration::from_millis(target.page_load_timeout_ms),
            settle_delay: Duration::from_millis(target.settle_delay_ms),
            settle: target.settle,
            capture_enabled: suite.capture.enabled,
            viewports: suite.viewports,
            title_pattern,
            destination_url_pattern,
            home_stage: target.home_stage,
            destination_stage: target.destination_stage,
            source: None,
        })
    }
}

fn compile(field: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
        field: field.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUITE: &str = r#"
[manifest]
id = "bloomberg-home-page"
name = "Bloomberg Home Page Test"
description = "Tests navigation from the home page to the stocks page"

[target]
url = "https://www.bloomberg.com"
nav_selector = "a[href$='stocks']"
title_pattern = "Bloomberg"
destination_url_pattern = "www.bloomberg.com/markets/stocks"
destination_stage = "stocks-page"

[capture]
enabled = true

[[viewports]]
name = "desktop"
width = 1600
height = 900

[[viewports]]
name = "mobile-landscape"
width = 640
height = 360

[[viewports]]
name = "mobile-portrait"
width = 360
height = 640
"#;

    #[test]
    fn builds_from_toml() {
        let config = TestConfig::from_toml_str(SUITE).unwrap();

        assert_eq!(config.script.id, "bloomberg-home-page");
        assert_eq!(config.page_load_timeout, Duration::from_secs(10));
        assert_eq!(config.settle_delay, Duration::from_secs(1));
        assert_eq!(config.destination_stage, "stocks-page");
        assert!(config.title_pattern.is_match("Bloomberg - Business News"));
        assert!(
            config
                .destination_url_pattern
                .is_match("https://www.bloomberg.com/markets/stocks")
        );
    }

    #[test]
    fn viewport_order_is_preserved() {
        let config = TestConfig::from_toml_str(SUITE).unwrap();
        let names: Vec<_> = config.viewports.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, ["desktop", "mobile-landscape", "mobile-portrait"]);
    }

    #[test]
    fn expected_assertions_track_viewport_count() {
        let config = TestConfig::from_toml_str(SUITE).unwrap();
        assert_eq!(config.expected_assertions(), 6);
    }

    #[test]
    fn no_viewports_means_no_expected_assertions() {
        let head = SUITE.split("[[viewports]]").next().unwrap();
        let config = TestConfig::from_toml_str(head).unwrap();
        assert!(config.viewports.is_empty());
        assert_eq!(config.expected_assertions(), 0);
    }

    #[test]
    fn invalid_pattern_is_reported_with_field() {
        let text = SUITE.replace(r#"title_pattern = "Bloomberg""#, r#"title_pattern = "(Bloomberg""#);
        let err = TestConfig::from_toml_str(&text).unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidPattern { ref field, .. } if field == "target.title_pattern")
        );
    }

    #[test]
    fn missing_required_field_is_a_parse_error() {
        let text = SUITE.replace(r#"nav_selector = "a[href$='stocks']""#, "");
        let err = TestConfig::from_toml_str(&text).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn overrides_return_adjusted_copies() {
        let config = TestConfig::from_toml_str(SUITE)
            .unwrap()
            .with_capture(false)
            .with_page_load_timeout(Duration::from_millis(250));
        assert!(!config.capture_enabled);
        assert_eq!(config.page_load_timeout, Duration::from_millis(250));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = TestConfig::load("/nonexistent/suite.toml").unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }
}
