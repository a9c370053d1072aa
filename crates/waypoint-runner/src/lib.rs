//! # waypoint-runner
//!
//! The viewport-cycling navigation test orchestrator.
//!
//! For each configured viewport the runner resizes the browser, reloads the
//! target, asserts the page title, waits for the navigational element,
//! follows it and waits for the destination URL, capturing the page before
//! and after. Viewports run strictly one after another.
//!
//! ```ignore
//! let config = TestConfig::load("suites/bloomberg.toml")?;
//! let mut reporter = RecordingReporter::new();
//! let summary = TestRunDriver::new("captures")
//!     .execute(&config, &page, &mut reporter)
//!     .await?;
//! assert_eq!(summary.recorded(), config.expected_assertions());
//! ```

pub mod driver;
pub mod orchestrator;
pub mod outcome;
pub mod reporter;
pub mod step;

pub use driver::TestRunDriver;
pub use orchestrator::ViewportCycleOrchestrator;
pub use outcome::{CaptureArtifact, RunSummary, Stage, StepOutcome};
pub use reporter::{RecordingReporter, ReportEvent, Reporter};
pub use step::NavigationStep;
