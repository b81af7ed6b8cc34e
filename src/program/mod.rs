//! Program contract: the pure half of the architecture.
//!
//! # Architecture
//!
//! ```text
//! Seed ──→ start ──→ State ──→ render ──→ View
//!                      ↑   │
//!             update ──┘   └──→ Effects
//!                ↑
//!              Event
//! ```
//!
//! - `contract.rs` - The [`Program`] trait (start, update, render)
//! - `transition.rs` - Return shapes of `start` and `update`
//!
//! Nothing in this module owns state. The [`Store`](crate::store::Store)
//! runs a program live; the [`Harness`](crate::testing::Harness) runs it
//! against literal inputs in tests.

mod contract;
mod transition;

pub use contract::Program;
pub use transition::{Start, Transition, Update};
