//! Store configuration.
//!
//! Loaded from TOML the way any embedding application loads the rest of
//! its settings:
//!
//! ```toml
//! fatal_action = "panic"      # or "abort" (default)
//! diagnostic_format = "text"  # or "json"
//! ```

mod loader;
mod types;

pub use loader::{ConfigError, FATAL_ACTION_ENV};
pub use types::{DiagnosticFormat, FatalAction, StoreConfig};
