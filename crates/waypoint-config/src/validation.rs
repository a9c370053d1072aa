//! Suite validation.
//!
//! Checks the shape of a [`SuiteFile`] without touching the network or a
//! browser. Regular expressions are compiled when the [`crate::TestConfig`]
//! is built, so pattern errors surface there.

use std::collections::HashMap;

use crate::error::{ConfigError, Result};
use crate::suite::SuiteFile;

const URL_SCHEMES: &[&str] = &["http://", "https://", "file://", "data:"];

/// Validate a suite file.
///
/// # Errors
///
/// Returns the first problem found: empty manifest fields, a relative target
/// URL, zero timeouts, empty stage labels, zero-sized or duplicate viewports.
pub fn validate_suite(suite: &SuiteFile) -> Result<()> {
    let manifest = &suite.manifest;
    for (field, value) in [
        ("manifest.id", &manifest.id),
        ("manifest.name", &manifest.name),
        ("manifest.description", &manifest.description),
    ] {
        if value.trim().is_empty() {
            return Err(ConfigError::invalid(field, "must not be empty"));
        }
    }

    if manifest.id.contains(['/', '\\']) {
        return Err(ConfigError::invalid(
            "manifest.id",
            "used as a filename slug, so it cannot contain path separators",
        ));
    }

    let target = &suite.target;
    let url = target.url.trim();
    if !URL_SCHEMES.iter().any(|scheme| url.starts_with(scheme)) {
        return Err(ConfigError::invalid(
            "target.url",
            format!("'{url}' must be an absolute http(s), file or data URL"),
        ));
    }

    if target.nav_selector.trim().is_empty() {
        return Err(ConfigError::invalid("target.nav_selector", "must not be empty"));
    }

    if target.page_load_timeout_ms == 0 {
        return Err(ConfigError::invalid(
            "target.page_load_timeout_ms",
            "must be a positive number of milliseconds",
        ));
    }

    for (field, stage) in [
        ("target.home_stage", &target.home_stage),
        ("target.destination_stage", &target.destination_stage),
    ] {
        if stage.trim().is_empty() {
            return Err(ConfigError::invalid(field, "stage labels must not be empty"));
        }
    }

    let mut seen: HashMap<(u32, u32), &str> = HashMap::new();
    for viewport in &suite.viewports {
        if viewport.width == 0 || viewport.height == 0 {
            return Err(ConfigError::invalid(
                format!("viewports.{}", viewport.name),
                "width and height must be positive",
            ));
        }

        if let Some(existing) = seen.insert((viewport.width, viewport.height), &viewport.name) {
            return Err(ConfigError::DuplicateViewport {
                name: viewport.name.clone(),
                existing: existing.to_string(),
                width: viewport.width,
                height: viewport.height,
            });
        }
    }

    Ok(())
}
