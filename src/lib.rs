//! Agent Lab
//!
//! Minimal agent loop: given a free-text goal, repeatedly pick an action
//! (write a note, read notes, or stop), execute it against file-backed
//! tools, and record the observation until the run terminates.
//!
//! # Architecture
//!
//! ```text
//! goal ──► Agent Loop ──► Planner (keyword/regex rules)
//!              │
//!              ├── NoteStore (append-only line log)
//!              └── trace [{step, action, observation}]
//! ```
//!
//! The planner is a deterministic classifier over the goal text, standing
//! in for a real LLM planner. The loop caps every run at
//! [`agent::MAX_STEPS`] cycles and stops early on a DONE action. Boundary
//! adapters (CLI in `main`, HTTP in [`api`]) only construct goals and
//! render traces.

pub mod action;
pub mod agent;
pub mod api;
pub mod config;
pub mod planner;
pub mod tools;

pub use action::Action;
pub use agent::{Agent, RunReport, TraceEntry, MAX_STEPS};
pub use config::Config;
pub use tools::{NoteStore, TodoStore, ToolError, Toolbox};
