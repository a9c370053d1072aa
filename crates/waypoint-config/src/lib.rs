//! Suite configuration for waypoint.
//!
//! A suite is one TOML file describing a target page, the navigational
//! element expected on it, and the viewports to exercise. This crate turns
//! those files into immutable [`TestConfig`] values and locates them on disk.

pub mod capture;
pub mod config;
pub mod discovery;
pub mod error;
pub mod settings;
pub mod suite;
pub mod validation;

// Re-export main types
pub use capture::*;
pub use config::*;
pub use error::*;
pub use settings::*;
pub use suite::*;

pub use discovery::{SuiteDiscovery, discover_suites};
pub use validation::validate_suite;
