//! Pluggable failure reporting for the harness.

use std::panic::Location;

use parking_lot::Mutex;

/// Receives harness assertion failures.
///
/// This is the seam to whatever test framework is in use.
pub trait FailureReporter {
    fn report_failure(&self, message: &str, location: &'static Location<'static>);
}

/// Panics with the message, which fails the current `#[test]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanicReporter;

impl FailureReporter for PanicReporter {
    fn report_failure(&self, message: &str, location: &'static Location<'static>) {
        panic!("{} (at {})", message, location);
    }
}

/// A failure captured by [`RecordingReporter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportedFailure {
    pub message: String,
    pub file: &'static str,
    pub line: u32,
}

/// Records failures instead of panicking.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    failures: Mutex<Vec<ReportedFailure>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failures(&self) -> Vec<ReportedFailure> {
        self.failures.lock().clone()
    }

    pub fn is_clean(&self) -> bool {
        self.failures.lock().is_empty()
    }
}

impl FailureReporter for RecordingReporter {
    fn report_failure(&self, message: &str, location: &'static Location<'static>) {
        tracing::debug!(%location, message, "harness failure recorded");
        self.failures.lock().push(ReportedFailure {
            message: message.to_string(),
            file: location.file(),
            line: location.line(),
        });
    }
}

impl<R: FailureReporter + ?Sized> FailureReporter for &R {
    fn report_failure(&self, message: &str, location: &'static Location<'static>) {
        (**self).report_failure(message, location);
    }
}
