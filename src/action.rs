//! Action type
//!
//! The closed set of things the agent loop can do in one cycle. Modeled as
//! an exhaustive enum so the planner's decision table is total by
//! construction: every match over `Action` covers all three kinds.

use serde::{Deserialize, Serialize};

/// One unit of work for the agent loop.
///
/// The payload exists only on `WriteNote`; the other kinds carry nothing.
/// Constructed fresh by the planner each cycle, consumed by the loop,
/// never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Action {
    /// Append a note to the log.
    #[serde(rename = "WRITE_NOTE")]
    WriteNote { payload: Option<String> },
    /// List the most recent notes.
    #[serde(rename = "READ_NOTES")]
    ReadNotes,
    /// Stop the run.
    #[serde(rename = "DONE")]
    Done,
}

impl Action {
    /// Wire-level kind name, for logs and trace rendering.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::WriteNote { .. } => "WRITE_NOTE",
            Action::ReadNotes => "READ_NOTES",
            Action::Done => "DONE",
        }
    }

    /// Whether executing this action terminates the run.
    pub fn is_done(&self) -> bool {
        matches!(self, Action::Done)
    }
}
