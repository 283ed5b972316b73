//! Run API
//!
//! Exposes the agent loop over HTTP:
//! - POST /run - drive one run to completion, return the trace
//! - GET /health - liveness with version and uptime
//!
//! The handlers only validate and format; all decision logic lives in the
//! planner and the loop. Note-store I/O is blocking file I/O, so runs go
//! through `spawn_blocking`.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use crate::agent::{Agent, RunReport};
use crate::tools::NoteStore;

/// Longest goal accepted over HTTP, in characters.
pub const MAX_GOAL_CHARS: usize = 500;

/// Application state shared across handlers
pub struct AppState {
    /// Note store every run executes against
    pub store: Arc<NoteStore>,
    /// Server start time for uptime calculation
    pub start_time: Instant,
    /// Application version
    pub version: &'static str,
}

impl AppState {
    /// Create new application state around a note store
    pub fn new(store: NoteStore) -> Self {
        Self {
            store: Arc::new(store),
            start_time: Instant::now(),
            version: env!("CARGO_PKG_VERSION"),
        }
    }

    /// Get uptime in seconds
    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

/// Run request body
#[derive(Debug, Deserialize)]
pub struct RunRequest {
    pub goal: String,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub uptime_secs: u64,
    /// Timestamp (ISO 8601)
    pub timestamp: String,
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Health check handler
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: state.version,
        uptime_secs: state.uptime_secs(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Run handler
///
/// Validates the goal length, then drives one agent run to completion and
/// returns the full trace. An empty or over-long goal is rejected with
/// 422; storage faults map to 500.
pub async fn run_agent(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RunRequest>,
) -> Result<Json<RunReport>, (StatusCode, Json<ErrorResponse>)> {
    let goal = req.goal.trim().to_string();
    if goal.is_empty() || goal.chars().count() > MAX_GOAL_CHARS {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                error: format!("goal must be 1..={} characters", MAX_GOAL_CHARS),
            }),
        ));
    }

    info!(goal = %goal, "run requested");
    let store = state.store.clone();
    let report = tokio::task::spawn_blocking(move || Agent::new(&goal).run(store.as_ref()))
        .await
        .map_err(internal)?
        .map_err(internal)?;

    Ok(Json(report))
}

fn internal(e: impl std::fmt::Display) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}

/// Create the API router
pub fn api_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/run", post(run_agent))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn state_in(dir: &TempDir) -> Arc<AppState> {
        Arc::new(AppState::new(NoteStore::new(dir.path().join("notes.txt"))))
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let dir = TempDir::new().unwrap();
        let Json(health) = health_check(State(state_in(&dir))).await;
        assert_eq!(health.status, "ok");
        assert!(!health.version.is_empty());
    }

    #[tokio::test]
    async fn test_run_returns_trace() {
        let dir = TempDir::new().unwrap();
        let req = RunRequest {
            goal: "save a note: from http, then show notes".to_string(),
        };
        let Json(report) = run_agent(State(state_in(&dir)), Json(req)).await.unwrap();

        assert_eq!(report.goal, "save a note: from http, then show notes");
        assert_eq!(report.steps.len(), 3);
        assert_eq!(report.steps[0].action.kind(), "WRITE_NOTE");
        assert_eq!(report.final_observation.as_deref(), Some("Finished."));
    }

    #[tokio::test]
    async fn test_empty_goal_rejected() {
        let dir = TempDir::new().unwrap();
        let req = RunRequest {
            goal: "   ".to_string(),
        };
        let err = run_agent(State(state_in(&dir)), Json(req)).await.unwrap_err();
        assert_eq!(err.0, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_overlong_goal_rejected() {
        let dir = TempDir::new().unwrap();
        let req = RunRequest {
            goal: "x".repeat(MAX_GOAL_CHARS + 1),
        };
        let err = run_agent(State(state_in(&dir)), Json(req)).await.unwrap_err();
        assert_eq!(err.0, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_runs_share_the_note_log() {
        let dir = TempDir::new().unwrap();
        let state = state_in(&dir);

        let write = RunRequest {
            goal: "note: shared entry".to_string(),
        };
        run_agent(State(state.clone()), Json(write)).await.unwrap();

        let read = RunRequest {
            goal: "show notes".to_string(),
        };
        let Json(report) = run_agent(State(state), Json(read)).await.unwrap();
        assert_eq!(report.steps[0].observation, "- shared entry");
    }
}
