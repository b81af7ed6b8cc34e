//! Fatal-path reporting.
//!
//! A program failure seen by a live store is a logic bug, never a condition
//! callers handle. The store writes a [`FatalReport`] to its
//! [`DiagnosticSink`] and then terminates according to [`FatalAction`].

mod report;
mod sink;

pub use report::{FatalReport, Stage};
pub use sink::{CaptureSink, DiagnosticSink, NullSink, StderrSink};

use crate::config::FatalAction;

/// Report and terminate. Never returns.
pub(crate) fn terminate(sink: &dyn DiagnosticSink, action: FatalAction, report: FatalReport) -> ! {
    sink.report(&report);
    match action {
        FatalAction::Abort => std::process::abort(),
        FatalAction::Panic => panic!("{}", report),
    }
}
