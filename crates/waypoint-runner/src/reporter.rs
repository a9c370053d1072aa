//! Reporting seam between the orchestrator and its audience.

use crate::outcome::RunSummary;

/// Receives progress from a run.
///
/// `pass` and `fail` are called once per assertion, `info` for notable
/// progress, and `done` once after the last viewport of a completed run.
pub trait Reporter {
    fn info(&mut self, message: &str);
    fn pass(&mut self, message: &str);
    fn fail(&mut self, message: &str);
    fn done(&mut self, summary: &RunSummary);
}

/// One call received by a [`RecordingReporter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEvent {
    Info(String),
    Pass(String),
    Fail(String),
    Done(RunSummary),
}

/// Keeps every call in order. Useful for tests and for replaying a run.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    events: Vec<ReportEvent>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[ReportEvent] {
        &self.events
    }

    /// The pass/fail/done sequence, ignoring info messages.
    pub fn verdicts(&self) -> Vec<&'static str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                ReportEvent::Info(_) => None,
                ReportEvent::Pass(_) => Some("pass"),
                ReportEvent::Fail(_) => Some("fail"),
                ReportEvent::Done(_) => Some("done"),
            })
            .collect()
    }

    pub fn done_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, ReportEvent::Done(_)))
            .count()
    }
}

impl Reporter for RecordingReporter {
    fn info(&mut self, message: &str) {
        self.events.push(ReportEvent::Info(message.to_string()));
    }

    fn pass(&mut self, message: &str) {
        self.events.push(ReportEvent::Pass(message.to_string()));
    }

    fn fail(&mut self, message: &str) {
        self.events.push(ReportEvent::Fail(message.to_string()));
    }

    fn done(&mut self, summary: &RunSummary) {
        self.events.push(ReportEvent::Done(summary.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdicts_skip_info() {
        let mut reporter = RecordingReporter::new();
        reporter.info("found");
        reporter.pass("title");
        reporter.fail("nav");
        reporter.done(&RunSummary::new(2));

        assert_eq!(reporter.verdicts(), vec!["pass", "fail", "done"]);
        assert_eq!(reporter.events().len(), 4);
        assert_eq!(reporter.done_count(), 1);
    }
}
