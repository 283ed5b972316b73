//! Append-only note log
//!
//! One note per line in a plain text file; append order is read order.
//! No escaping: a note containing a newline is split into multiple stored
//! entries, an accepted limitation. The file location is injected at
//! construction so tests can point each run at an isolated directory.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::{ToolError, Toolbox};

/// File-backed note store.
pub struct NoteStore {
    path: PathBuf,
}

impl NoteStore {
    /// Create a store over the given log file. The file and its parent
    /// directory are created lazily on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the underlying log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<(), ToolError> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        Ok(())
    }
}

impl Toolbox for NoteStore {
    fn write_note(&self, text: &str) -> Result<String, ToolError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok("Refused: empty note.".to_string());
        }
        self.ensure_parent()?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", text)?;
        Ok(format!("OK: wrote note ({} chars).", text.chars().count()))
    }

    fn read_notes(&self, last_n: usize) -> Result<String, ToolError> {
        if !self.path.exists() {
            return Ok("No notes yet.".to_string());
        }
        let content = fs::read_to_string(&self.path)?;
        let lines: Vec<&str> = content.lines().collect();
        let tail = if last_n > 0 && lines.len() > last_n {
            &lines[lines.len() - last_n..]
        } else {
            &lines[..]
        };
        if tail.is_empty() {
            return Ok("No notes yet.".to_string());
        }
        Ok(tail
            .iter()
            .map(|line| format!("- {}", line))
            .collect::<Vec<_>>()
            .join("\n"))
    }
}
