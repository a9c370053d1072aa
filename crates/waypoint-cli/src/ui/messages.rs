//! Status message functions for terminal output.
//!
//! Colors go through `if_supports_color`, so `--no-color`, `NO_COLOR` and
//! non-terminal stderr all produce plain text.

use owo_colors::{OwoColorize, Stream::Stderr};

/// Print a success message to stderr.
///
/// ```no_run
/// use waypoint_cli::ui::success;
///
/// success("All suites passed");
/// ```
pub fn success(message: &str) {
    eprintln!("{} {}", "✓".if_supports_color(Stderr, |t| t.green()), message);
}

/// Print an info message to stderr.
pub fn info(message: &str) {
    eprintln!("{} {}", "ℹ".if_supports_color(Stderr, |t| t.blue()), message);
}

/// Print a warning message to stderr.
pub fn warning(message: &str) {
    eprintln!(
        "{} {}",
        "⚠".if_supports_color(Stderr, |t| t.yellow()),
        message.if_supports_color(Stderr, |t| t.yellow())
    );
}

/// Print an error message to stderr.
pub fn error(message: &str) {
    eprintln!(
        "{} {}",
        "✗".if_supports_color(Stderr, |t| t.red()),
        message.if_supports_color(Stderr, |t| t.red())
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_messages() {
        // These should not panic
        success("Success message");
        info("Info message");
        warning("Warning message");
        error("Error message");
    }
}
