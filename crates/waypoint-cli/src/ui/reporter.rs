//! Reporter that prints assertion results as they happen.

use super::format::summary_line;
use owo_colors::{OwoColorize, Stream::Stderr};
use waypoint_runner::{Reporter, RunSummary};

/// Prints each assertion of one suite to stderr.
#[derive(Debug)]
pub struct TerminalReporter {
    suite: String,
}

impl TerminalReporter {
    pub fn new(suite: impl Into<String>) -> Self {
        Self {
            suite: suite.into(),
        }
    }
}

impl Reporter for TerminalReporter {
    fn info(&mut self, message: &str) {
        eprintln!("    {}", message.if_supports_color(Stderr, |t| t.dimmed()));
    }

    fn pass(&mut self, message: &str) {
        eprintln!("  {} {message}", "✓".if_supports_color(Stderr, |t| t.green()));
    }

    fn fail(&mut self, message: &str) {
        eprintln!(
            "  {} {}",
            "✗".if_supports_color(Stderr, |t| t.red()),
            message.if_supports_color(Stderr, |t| t.red())
        );
    }

    fn done(&mut self, summary: &RunSummary) {
        let line = format!("{}: {}", self.suite, summary_line(summary));
        if summary.is_success() {
            super::success(&line);
        } else {
            super::error(&line);
        }
    }
}
