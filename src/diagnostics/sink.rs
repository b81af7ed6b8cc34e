//! Destinations for fatal reports.

use std::io::{self, Write};

use parking_lot::Mutex;

use super::report::FatalReport;
use crate::config::DiagnosticFormat;

/// Receives a report right before the store terminates.
///
/// Implementations must not panic; the caller terminates right after.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, report: &FatalReport);
}

/// Writes reports to standard error and mirrors them as `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink {
    format: DiagnosticFormat,
}

impl StderrSink {
    pub fn new(format: DiagnosticFormat) -> Self {
        Self { format }
    }
}

impl DiagnosticSink for StderrSink {
    fn report(&self, report: &FatalReport) {
        tracing::error!(
            stage = %report.stage,
            site = %report.site,
            failure = %report.failure,
            "fatal store error"
        );

        let rendered = match self.format {
            DiagnosticFormat::Text => report.to_string(),
            DiagnosticFormat::Json => match serde_json::to_string(report) {
                Ok(json) => json,
                Err(_) => report.to_string(),
            },
        };

        let mut stderr = io::stderr().lock();
        if let Err(err) = writeln!(stderr, "{}", rendered).and_then(|_| stderr.flush()) {
            tracing::warn!(error = %err, "failed to write fatal report to stderr");
        }
    }
}

/// Keeps every report in memory.
#[derive(Debug, Default)]
pub struct CaptureSink {
    reports: Mutex<Vec<FatalReport>>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> Vec<FatalReport> {
        self.reports.lock().clone()
    }

    pub fn last(&self) -> Option<FatalReport> {
        self.reports.lock().last().cloned()
    }
}

impl DiagnosticSink for CaptureSink {
    fn report(&self, report: &FatalReport) {
        self.reports.lock().push(report.clone());
    }
}

/// Discards reports.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&self, _report: &FatalReport) {}
}
