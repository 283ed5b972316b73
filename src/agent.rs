//! Agent loop
//!
//! Drives the decide -> act -> observe cycle to completion and returns a
//! structured trace. One cycle fully completes before the next begins; the
//! planner sees only the goal and the step index, never prior
//! observations. Progress goes to `tracing` rather than stdout; rendering
//! the trace is the caller's job.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::action::Action;
use crate::planner;
use crate::tools::{ToolError, Toolbox};

/// Upper bound on decide/act/observe cycles per run.
pub const MAX_STEPS: usize = 6;

/// How many notes a READ_NOTES action lists.
const READ_TAIL: usize = 10;

/// One decide/act/observe cycle in a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceEntry {
    pub step: usize,
    pub action: Action,
    pub observation: String,
}

/// Completed run: the goal, the full trace, and the final observation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub goal: String,
    pub steps: Vec<TraceEntry>,
    #[serde(rename = "final")]
    pub final_observation: Option<String>,
}

/// A single run over a goal. Owns the mutable run state; consumed by
/// [`Agent::run`] and discarded with it.
pub struct Agent {
    goal: String,
    step: usize,
    max_steps: usize,
}

impl Agent {
    /// Create a run for a goal. The goal is trimmed once here and never
    /// mutated afterwards.
    pub fn new(goal: &str) -> Self {
        Self {
            goal: goal.trim().to_string(),
            step: 0,
            max_steps: MAX_STEPS,
        }
    }

    pub fn goal(&self) -> &str {
        &self.goal
    }

    fn act(&self, action: &Action, tools: &impl Toolbox) -> Result<String, ToolError> {
        match action {
            Action::WriteNote { payload } => tools.write_note(payload.as_deref().unwrap_or("")),
            Action::ReadNotes => tools.read_notes(READ_TAIL),
            Action::Done => Ok("Finished.".to_string()),
        }
    }

    /// Run to termination: a DONE action or an exhausted step budget,
    /// whichever comes first. Storage faults abort the run.
    pub fn run(mut self, tools: &impl Toolbox) -> Result<RunReport, ToolError> {
        debug!(goal = %self.goal, "starting run");
        let mut trace = Vec::new();

        while self.step < self.max_steps {
            let action = planner::decide(&self.goal, self.step);
            debug!(step = self.step, kind = action.kind(), "decide");

            let observation = self.act(&action, tools)?;
            debug!(step = self.step, observation = %observation, "observe");

            let done = action.is_done();
            trace.push(TraceEntry {
                step: self.step,
                action,
                observation,
            });
            self.step += 1;
            if done {
                break;
            }
        }

        let final_observation = trace.last().map(|e| e.observation.clone());
        Ok(RunReport {
            goal: self.goal,
            steps: trace,
            final_observation,
        })
    }
}
