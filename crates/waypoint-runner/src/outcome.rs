//! Assertion outcomes and run totals.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use waypoint_config::CaptureRegion;

/// The point in a viewport cycle an assertion is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    Title,
    ElementFound,
    Navigation,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Title => "title",
            Stage::ElementFound => "element-found",
            Stage::Navigation => "navigation",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a single assertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "kebab-case")]
pub enum StepOutcome {
    Pass { stage: Stage },
    Fail { stage: Stage, reason: String },
}

impl StepOutcome {
    pub fn pass(stage: Stage) -> Self {
        StepOutcome::Pass { stage }
    }

    pub fn fail(stage: Stage, reason: impl Into<String>) -> Self {
        StepOutcome::Fail {
            stage,
            reason: reason.into(),
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, StepOutcome::Pass { .. })
    }

    pub fn stage(&self) -> Stage {
        match self {
            StepOutcome::Pass { stage } | StepOutcome::Fail { stage, .. } => *stage,
        }
    }
}

/// An image written during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaptureArtifact {
    pub filename: String,
    pub path: PathBuf,
    pub region: CaptureRegion,
}

/// Aggregate counters for one run across all viewports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub expected_assertions: usize,
    pub passed: usize,
    pub failed: usize,
    pub artifacts: Vec<CaptureArtifact>,
}

impl RunSummary {
    pub fn new(expected_assertions: usize) -> Self {
        Self {
            expected_assertions,
            ..Self::default()
        }
    }

    pub fn record(&mut self, outcome: &StepOutcome) {
        if outcome.is_pass() {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn recorded(&self) -> usize {
        self.passed + self.failed
    }

    /// True when every expected assertion was recorded and none failed.
    pub fn is_success(&self) -> bool {
        self.failed == 0 && self.passed == self.expected_assertions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_labels_are_kebab_case() {
        assert_eq!(Stage::ElementFound.to_string(), "element-found");
        assert_eq!(
            serde_json::to_value(Stage::Navigation).unwrap(),
            serde_json::json!("navigation")
        );
    }

    #[test]
    fn summary_counts_outcomes() {
        let mut summary = RunSummary::new(4);
        summary.record(&StepOutcome::pass(Stage::Title));
        summary.record(&StepOutcome::fail(Stage::Navigation, "navigation-timeout"));

        assert_eq!(summary.passed, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.recorded(), 2);
        assert!(!summary.is_success());
    }

    #[test]
    fn empty_summary_is_success() {
        let summary = RunSummary::new(0);
        assert!(summary.is_success());
        assert!(summary.artifacts.is_empty());
    }

    #[test]
    fn outcome_serializes_with_result_tag() {
        let json = serde_json::to_value(StepOutcome::fail(
            Stage::ElementFound,
            "element-not-found-or-timeout",
        ))
        .unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "result": "fail",
                "stage": "element-found",
                "reason": "element-not-found-or-timeout"
            })
        );
    }
}
