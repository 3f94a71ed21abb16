//! Prism View - Local preview server for the scroll scene
//!
//! The server uses an actor pattern with a dedicated shell thread:
//! - Main thread: Axum HTTP server handling requests
//! - Shell thread: Owns the `PresentationShell`, processes edits and frames
//!
//! Theme generation runs on the async side behind a single-flight gate; only
//! the result is handed to the shell thread.
//!
//! ## API
//! - `GET /api/health`
//! - `GET /api/state`
//! - `GET/POST /api/config`, `POST /api/config/edit`
//! - `GET /api/presets`, `POST /api/preset`
//! - `POST /api/scroll`
//! - `GET /api/frame?time=|dt=`
//! - `GET /api/scene`
//! - `POST /api/theme`

mod actor;
mod routes;

use anyhow::Context;
use axum::http::HeaderValue;
use prism_core::{PresentationShell, SceneConfig};
use prism_theme::{ThemeClient, ThemeClientConfig, ThemeService};
use routes::AppState;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::var("PRISM_VIEW_CONFIG") {
        Ok(path) => SceneConfig::from_json_file(&path)
            .with_context(|| format!("Failed to load config from {}", path))?,
        Err(_) => SceneConfig::default(),
    };

    let client = ThemeClient::new(ThemeClientConfig::from_env())
        .context("Failed to build theme client")?;
    info!(
        provider = ?client.config().provider,
        model = %client.config().model,
        "theme client ready"
    );

    let state = AppState {
        tx: actor::spawn(PresentationShell::new(config)),
        themes: ThemeService::new(Arc::new(client)),
    };

    let allow_origin = std::env::var("PRISM_VIEW_ALLOW_ORIGIN")
        .ok()
        .and_then(|origin| origin.parse::<HeaderValue>().ok())
        .unwrap_or_else(|| HeaderValue::from_static("*"));

    let app = routes::router(state, allow_origin);

    let addr = std::env::var("PRISM_VIEW_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Starting Prism View server on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
