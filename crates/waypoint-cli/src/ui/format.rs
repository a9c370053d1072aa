//! Formatting utilities for durations and run summaries.

use crate::commands::run::{SuiteReport, SuiteStatus};
use console::Term;
use owo_colors::{OwoColorize, Stream::Stderr};
use std::time::Duration;
use waypoint_runner::RunSummary;

/// Format duration in human-readable format.
///
/// Converts to the most appropriate unit (ms, s, m:s).
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use waypoint_cli::ui::format_duration;
///
/// assert_eq!(format_duration(Duration::from_millis(50)), "50ms");
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
/// assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();

    if total_ms < 1000 {
        format!("{total_ms}ms")
    } else if total_ms < 60_000 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        let secs = duration.as_secs();
        let mins = secs / 60;
        let secs = secs % 60;
        format!("{mins}m {secs}s")
    }
}

/// One-line description of a suite's counters.
///
/// ```
/// use waypoint_cli::ui::summary_line;
/// use waypoint_runner::RunSummary;
///
/// let mut summary = RunSummary::new(4);
/// summary.passed = 3;
/// summary.failed = 1;
/// assert_eq!(summary_line(&summary), "3/4 passed, 1 failed, 0 captures");
/// ```
pub fn summary_line(summary: &RunSummary) -> String {
    format!(
        "{}/{} passed, {} failed, {} captures",
        summary.passed,
        summary.expected_assertions,
        summary.failed,
        summary.artifacts.len()
    )
}

/// Print the per-suite table and overall totals to stderr.
pub fn print_run_summary(reports: &[SuiteReport], elapsed: Duration) {
    let width = usize::from(Term::stderr().size().1).min(80);

    eprintln!("\n{}", "Run Summary".if_supports_color(Stderr, |t| t.bold()));
    eprintln!("{}", "─".repeat(width));

    let mut passed = 0;
    let mut failed = 0;
    let mut aborted = 0;

    for report in reports {
        let detail = match &report.status {
            SuiteStatus::Completed { summary } => {
                passed += summary.passed;
                failed += summary.failed;
                summary_line(summary)
            }
            SuiteStatus::Aborted { error } => {
                aborted += 1;
                format!("aborted: {error}")
            }
        };
        let marker = if report.is_success() {
            "✓".if_supports_color(Stderr, |t| t.green()).to_string()
        } else {
            "✗".if_supports_color(Stderr, |t| t.red()).to_string()
        };

        eprintln!(
            "  {marker} {} {} {}",
            report.id,
            detail.if_supports_color(Stderr, |t| t.dimmed()),
            format!("({})", format_duration(Duration::from_millis(report.duration_ms)))
                .if_supports_color(Stderr, |t| t.dimmed())
        );
    }

    eprintln!("{}", "─".repeat(width));
    eprintln!(
        "  Total: {passed} passed, {failed} failed, {aborted} aborted across {} suite(s) in {}",
        reports.len(),
        format_duration(elapsed)
    );
}
