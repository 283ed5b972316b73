//! Todo list tool
//!
//! JSON-file-backed todo list with add/list operations. Part of the tool
//! surface but deliberately not wired into the planner: no goal phrasing
//! ever selects it. Full overwrite on save; no transactionality beyond
//! that.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::ToolError;

/// One todo entry as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoItem {
    pub text: String,
    pub done: bool,
}

/// File-backed todo store.
pub struct TodoStore {
    path: PathBuf,
}

impl TodoStore {
    /// Create a store over the given JSON file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the underlying JSON file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<TodoItem>, ToolError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn save(&self, items: &[TodoItem]) -> Result<(), ToolError> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(items)?)?;
        Ok(())
    }

    /// Append a todo; refuses empty input with an observation string.
    pub fn add_todo(&self, text: &str) -> Result<String, ToolError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok("Refused: empty todo.".to_string());
        }
        let mut items = self.load()?;
        items.push(TodoItem {
            text: text.to_string(),
            done: false,
        });
        self.save(&items)?;
        Ok(format!("OK: added todo ({} total).", items.len()))
    }

    /// Numbered listing of all todos, `[x]` marking completed ones.
    pub fn list_todos(&self) -> Result<String, ToolError> {
        let items = self.load()?;
        if items.is_empty() {
            return Ok("No todos yet.".to_string());
        }
        Ok(items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let mark = if item.done { "x" } else { " " };
                format!("{}. [{}] {}", i + 1, mark, item.text)
            })
            .collect::<Vec<_>>()
            .join("\n"))
    }
}
