//! HTTP server for the Leave Accrual Engine.
//!
//! # Environment
//!
//! - `RUST_LOG`: log filter (default: `info`)
//! - `LEAVE_POLICY_DIR`: policy directory (default: `./config/korea_lsa`)
//! - `LEAVE_ENGINE_ADDR`: listen address (default: `127.0.0.1:3000`)

use std::env;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use leave_accrual_engine::api::{AppState, create_router};
use leave_accrual_engine::config::ConfigLoader;
use leave_accrual_engine::engine::LeaveAccrualEngine;

const DEFAULT_POLICY_DIR: &str = "./config/korea_lsa";
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let policy_dir = env::var("LEAVE_POLICY_DIR").unwrap_or_else(|_| DEFAULT_POLICY_DIR.to_string());
    let addr = env::var("LEAVE_ENGINE_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());

    let loader = ConfigLoader::load(&policy_dir)
        .with_context(|| format!("failed to load leave policy from {}", policy_dir))?;
    info!(
        statute = %loader.statute().code,
        version = %loader.statute().version,
        policy_dir = %policy_dir,
        "Leave policy loaded"
    );

    let state = AppState::new(LeaveAccrualEngine::from_config(&loader));
    let router = create_router(state);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!(addr = %addr, "Leave accrual engine listening");

    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
