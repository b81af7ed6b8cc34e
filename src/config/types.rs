use serde::{Deserialize, Serialize};

/// Runtime settings for a [`Store`](crate::store::Store).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// What to do after a fatal report is written (default: abort).
    #[serde(default)]
    pub fatal_action: FatalAction,
    /// Encoding used by the stderr diagnostic sink (default: text).
    #[serde(default)]
    pub diagnostic_format: DiagnosticFormat,
}

/// How the process ends on an unrecoverable store failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FatalAction {
    /// `std::process::abort`. No unwinding, no destructors.
    #[default]
    Abort,
    /// Panic with the rendered report. Lets tests observe the fatal path.
    Panic,
}

/// Output encoding for fatal reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticFormat {
    #[default]
    Text,
    Json,
}

impl StoreConfig {
    /// Config preset for tests: panic instead of aborting.
    pub fn panicking() -> Self {
        Self {
            fatal_action: FatalAction::Panic,
            ..Self::default()
        }
    }
}
