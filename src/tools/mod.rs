//! Tool capabilities
//!
//! The agent loop executes actions against a small capability set: a
//! write/read pair over the note log. Refusals ("Refused: empty note.")
//! and an empty log ("No notes yet.") are ordinary observation text, not
//! errors; only real storage faults surface as [`ToolError`].

pub mod notes;
pub mod todo;

pub use notes::NoteStore;
pub use todo::TodoStore;

use thiserror::Error;

/// Storage-layer errors. These abort a run; there is no retry.
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Write/read capability pair consumed by the agent loop.
pub trait Toolbox {
    /// Append one note line; returns the observation text.
    fn write_note(&self, text: &str) -> Result<String, ToolError>;

    /// List the last `last_n` notes (all of them when `last_n` is 0);
    /// returns the observation text.
    fn read_notes(&self, last_n: usize) -> Result<String, ToolError>;
}
