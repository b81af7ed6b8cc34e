//! Unidirectional state management: seed → start → state → render → view,
//! with events driving `update` and effects flowing out to an observer.
//!
//! - [`program`] - The pure contract a state machine implements
//! - [`store`] - The runtime owning state and notifying a delegate
//! - [`delegate`] - The weakly held observer interface
//! - [`diagnostics`] - Fatal-path reports and their sinks
//! - [`testing`] - Harness for asserting on program outcomes
//! - [`config`] - Store settings loaded from TOML

pub mod config;
pub mod delegate;
pub mod diagnostics;
pub mod logging;
pub mod program;
pub mod store;
pub mod testing;

pub use delegate::Delegate;
pub use program::{Program, Start, Transition, Update};
pub use store::Store;
