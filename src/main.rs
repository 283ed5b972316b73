//! Agent Lab - Entry Point
//!
//! Modes:
//! - Default: run one goal from the command line, print the trace
//! - --serve / -s: HTTP API mode (POST /run, GET /health)

use agent_lab::{api, Agent, Config, NoteStore};
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Demo goal used when no arguments are given.
const DEFAULT_GOAL: &str = "Save a note about what agentic AI is, then show notes.";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Parse args
    let args: Vec<String> = std::env::args().skip(1).collect();
    let serve_mode = args.iter().any(|a| a == "--serve" || a == "-s");
    let help_mode = args.iter().any(|a| a == "--help" || a == "-h");

    if help_mode {
        println!("Agent Lab v{}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Usage: agent-lab [OPTIONS] [GOAL...]");
        println!();
        println!("Options:");
        println!("  --serve, -s  Run the HTTP API (POST /run, GET /health)");
        println!("  --help, -h   Show this help");
        println!();
        println!("Default: run GOAL (or a demo goal) once and print the trace");
        println!();
        println!("Environment variables:");
        println!("  AGENT_LAB_DATA_DIR   Data directory (default: data)");
        println!("  AGENT_LAB_HTTP_ADDR  Bind address for --serve (default: 127.0.0.1:8080)");
        return Ok(());
    }

    // Setup logging based on mode
    let log_level = std::env::var("RUST_LOG")
        .map(|s| match s.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        })
        .unwrap_or(if serve_mode { Level::INFO } else { Level::WARN });

    if serve_mode {
        // Server mode - structured JSON logs
        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_ansi(false)
            .json()
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    } else {
        // CLI mode - plain output with colors
        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_ansi(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    }

    let config = Config::from_env()?;
    let store = NoteStore::new(config.notes_path());

    if serve_mode {
        info!("Agent Lab API v{}", env!("CARGO_PKG_VERSION"));

        let state = Arc::new(api::AppState::new(store));
        let app = api::api_router(state);
        let listener = tokio::net::TcpListener::bind(&config.http_addr).await?;
        info!("Listening on {}", config.http_addr);
        axum::serve(listener, app).await?;
    } else {
        let goal: String = args
            .iter()
            .filter(|a| !a.starts_with('-'))
            .cloned()
            .collect::<Vec<_>>()
            .join(" ");
        let goal = if goal.trim().is_empty() {
            DEFAULT_GOAL.to_string()
        } else {
            goal
        };

        let report = Agent::new(&goal).run(&store)?;

        println!("\n[GOAL] {}\n", report.goal);
        for entry in &report.steps {
            println!("[STEP {}] decide -> {}", entry.step + 1, entry.action.kind());
            println!("[STEP {}] observe -> {}\n", entry.step + 1, entry.observation);
        }
    }

    Ok(())
}
