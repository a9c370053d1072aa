//! Spinner for waits without a known duration, like browser startup.

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::{OwoColorize, Stream::Stderr};
use std::time::Duration;

/// Simple spinner for tasks without known duration.
///
/// Outside an attended terminal (CI, pipes) the spinner stays hidden and
/// only the final message is printed.
///
/// # Examples
///
/// ```no_run
/// use waypoint_cli::ui::Spinner;
///
/// let spinner = Spinner::new("Launching browser...");
/// spinner.finish("Browser ready");
/// ```
pub struct Spinner {
    pb: ProgressBar,
}

impl Spinner {
    /// Create and start a new spinner.
    pub fn new(message: &str) -> Self {
        let pb = if super::interactive() {
            let pb = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
                pb.set_style(style.tick_strings(&["◐", "◓", "◑", "◒"]));
            }
            pb.enable_steady_tick(Duration::from_millis(100));
            pb
        } else {
            ProgressBar::hidden()
        };
        pb.set_message(message.to_string());

        Self { pb }
    }

    /// Update spinner message while it's running.
    pub fn set_message(&self, message: &str) {
        self.pb.set_message(message.to_string());
    }

    /// Finish spinner with success message.
    pub fn finish(&self, message: &str) {
        self.pb.finish_and_clear();
        super::success(message);
    }

    /// Finish spinner with error message.
    pub fn fail(&self, message: &str) {
        self.pb.finish_and_clear();
        eprintln!("{} {}", "✗".if_supports_color(Stderr, |t| t.red()), message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_creation() {
        // Should not panic
        let spinner = Spinner::new("Launching...");
        spinner.set_message("Updated");
        spinner.finish("Done");
    }

    #[test]
    fn test_spinner_fail() {
        let spinner = Spinner::new("Launching");
        spinner.fail("Failed");
    }
}
