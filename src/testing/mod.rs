//! Test support for programs.
//!
//! [`Harness`] drives `start`, `update` and `render` directly, without a
//! store or a delegate:
//!
//! ```ignore
//! let harness = Harness::new(Counter);
//! let state = harness.expect_start_state(1).unwrap();
//! harness.expect(harness.expect_view(&state), Some("1".to_string()));
//! ```

mod harness;
mod reporter;

pub use harness::Harness;
pub use reporter::{FailureReporter, PanicReporter, RecordingReporter, ReportedFailure};
