//! Configuration management

use anyhow::Result;
use std::path::PathBuf;

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the note log and todo file
    pub data_dir: PathBuf,

    /// HTTP bind address for --serve mode
    pub http_addr: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let data_dir = std::env::var("AGENT_LAB_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data"));

        let http_addr = std::env::var("AGENT_LAB_HTTP_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string());

        Ok(Self {
            data_dir,
            http_addr,
        })
    }

    /// Note log location inside the data directory
    pub fn notes_path(&self) -> PathBuf {
        self.data_dir.join("notes.txt")
    }

    /// Todo file location inside the data directory
    pub fn todos_path(&self) -> PathBuf {
        self.data_dir.join("todos.json")
    }
}
