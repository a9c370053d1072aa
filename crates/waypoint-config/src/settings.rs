//! Run-wide settings shared by every suite in an invocation.
//!
//! Merged from several sources, highest priority last:
//! defaults < `waypoint.toml` < `WAYPOINT_*` environment variables < caller
//! overrides (CLI flags).

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format as _, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

pub const SETTINGS_FILE: &str = "waypoint.toml";
pub const ENV_PREFIX: &str = "WAYPOINT_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSettings {
    /// Directory capture artifacts are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Forces capture on or off for every suite when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capture: Option<bool>,

    #[serde(default = "default_headless")]
    pub headless: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chrome_path: Option<PathBuf>,

    /// Overrides every suite's element/URL wait bound when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_load_timeout_ms: Option<u64>,

    /// Initial browser window size before the first viewport is applied.
    #[serde(default = "default_window_size")]
    pub window_size: (u32, u32),
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            capture: None,
            headless: default_headless(),
            chrome_path: None,
            page_load_timeout_ms: None,
            window_size: default_window_size(),
        }
    }
}

impl RunSettings {
    /// The figment every settings load starts from.
    ///
    /// Callers merge their own overrides on top before extracting.
    pub fn figment(dir: impl AsRef<Path>) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::file(dir.as_ref().join(SETTINGS_FILE)))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    /// Load settings for the given working directory without overrides.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        Self::extract(Self::figment(dir))
    }

    /// Extract settings from a prepared figment.
    pub fn extract(figment: Figment) -> Result<Self> {
        let settings: Self = figment.extract().map_err(|e| ConfigError::Parse {
            path: PathBuf::from(SETTINGS_FILE),
            source: Box::new(e),
        })?;

        if settings.page_load_timeout_ms == Some(0) {
            return Err(ConfigError::invalid(
                "page_load_timeout_ms",
                "must be a positive number of milliseconds",
            ));
        }
        if settings.window_size.0 == 0 || settings.window_size.1 == 0 {
            return Err(ConfigError::invalid("window_size", "width and height must be positive"));
        }

        Ok(settings)
    }
}

pub fn default_output_dir() -> PathBuf {
    PathBuf::from("captures")
}

pub fn default_headless() -> bool {
    true
}

pub fn default_window_size() -> (u32, u32) {
    (1920, 1080)
}
