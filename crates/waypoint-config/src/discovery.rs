//! File-based suite discovery for CLI use
//!
//! A path may name a single suite file or a directory. Directories are walked
//! recursively and every `.toml` file carrying a complete `[manifest]` table
//! is treated as a suite. Other TOML files (settings, tool configs) are
//! skipped.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::config::TestConfig;
use crate::error::{ConfigError, Result};

/// Manifest keys a file must define to be picked up as a suite.
pub const MANIFEST_KEYS: [&str; 3] = ["id", "name", "description"];

/// Suite discovery rooted at a file or directory.
///
/// # Example
///
/// ```no_run
/// use waypoint_config::SuiteDiscovery;
///
/// let suites = SuiteDiscovery::new("suites").load_all().unwrap();
/// for suite in &suites {
///     println!("{}", suite.script.name);
/// }
/// ```
pub struct SuiteDiscovery {
    root: PathBuf,
}

impl SuiteDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find candidate suite files, sorted by path.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the root does not exist, or a walk/I/O error.
    pub fn find(&self) -> Result<Vec<PathBuf>> {
        if self.root.is_file() {
            return Ok(vec![self.root.clone()]);
        }
        if !self.root.exists() {
            return Err(ConfigError::NotFound(self.root.clone()));
        }

        let mut found = Vec::new();
        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = entry.map_err(|source| ConfigError::Walk {
                path: self.root.clone(),
                source,
            })?;

            if entry.file_type().is_dir() || !has_toml_extension(entry.path()) {
                continue;
            }

            let content = fs::read_to_string(entry.path())?;
            if declares_manifest(&content) {
                debug!("Adding suite candidate: {}", entry.path().display());
                found.push(entry.into_path());
            } else {
                debug!(
                    "Skipping {}: incomplete manifest definition",
                    entry.path().display()
                );
            }
        }

        found.sort();
        Ok(found)
    }

    /// Load every discovered suite.
    ///
    /// # Errors
    ///
    /// Returns `NoSuites` when nothing was found, or the first load error.
    pub fn load_all(&self) -> Result<Vec<TestConfig>> {
        let paths = self.find()?;
        if paths.is_empty() {
            return Err(ConfigError::NoSuites(self.root.clone()));
        }

        paths.iter().map(|path| TestConfig::load(path)).collect()
    }
}

/// Discover and load suites under every given root (convenience function).
///
/// Suites are returned grouped by root, in the order the roots were given.
pub fn discover_suites<P: AsRef<Path>>(roots: &[P]) -> Result<Vec<TestConfig>> {
    let mut suites = Vec::new();
    for root in roots {
        suites.extend(SuiteDiscovery::new(root).load_all()?);
    }
    Ok(suites)
}

fn has_toml_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}

/// True if the text has a `[manifest]` table defining every manifest key.
///
/// A file that mentions `[manifest]` but is not valid TOML still counts, so
/// that the parse error is reported instead of the suite silently vanishing.
fn declares_manifest(content: &str) -> bool {
    match toml::from_str::<toml::Table>(content) {
        Ok(table) => table
            .get("manifest")
            .and_then(toml::Value::as_table)
            .is_some_and(|manifest| MANIFEST_KEYS.iter().all(|key| manifest.contains_key(*key))),
        Err(_) => content.contains("[manifest]"),
    }
}
