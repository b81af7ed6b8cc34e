//! Structured dump written before the process is terminated.

use std::fmt;
use std::panic::Location;

use serde::Serialize;

/// Which runtime step hit the fatal path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Start,
    Update,
    Render,
    /// A confined store method was called from a thread other than the owner.
    WrongThread,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Start => "start",
            Stage::Update => "update",
            Stage::Render => "render",
            Stage::WrongThread => "wrong thread",
        };
        f.write_str(name)
    }
}

/// Everything needed to locate an unrecoverable store failure.
///
/// Values are captured as their `Debug` renderings at the moment of
/// failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FatalReport {
    /// `file:line:column` of the store call that failed.
    pub site: String,
    pub stage: Stage,
    pub failure: String,
    /// `"seed"`, `"event"`, `"events"` or `"operation"`.
    pub input_label: &'static str,
    pub input: String,
    /// Absent when `start` failed, since no state exists yet.
    pub state: Option<String>,
}

impl FatalReport {
    pub(crate) fn new(
        site: &'static Location<'static>,
        stage: Stage,
        failure: String,
        input_label: &'static str,
        input: String,
        state: Option<String>,
    ) -> Self {
        Self {
            site: site.to_string(),
            stage,
            failure,
            input_label,
            input,
            state,
        }
    }
}

impl fmt::Display for FatalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "fatal store error during {}", self.stage)?;
        writeln!(f, "  call site: {}", self.site)?;
        writeln!(f, "  failure:   {}", self.failure)?;
        writeln!(f, "  {:<9}  {}", format!("{}:", self.input_label), self.input)?;
        match &self.state {
            Some(state) => write!(f, "  state:     {}", state),
            None => write!(f, "  state:     <none>"),
        }
    }
}
