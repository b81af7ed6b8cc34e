//! Live runtime for a [`Program`](crate::program::Program).
//!
//! A [`Store`] owns the state and the current view, applies events on the
//! thread that created it, and pushes results to a weakly held
//! [`Delegate`](crate::delegate::Delegate).
//!
//! # Delivery order
//!
//! For one `dispatch_all` call:
//!
//! 1. every event is applied in order, each against the state left by the
//!    previous one;
//! 2. if any event changed the state, the view is rendered once and sent
//!    through `did_update`;
//! 3. all effects of the batch are sent through `did_emit` in emission order.
//!
//! Intermediate views inside a batch are never rendered.

mod runtime;

pub use runtime::Store;
