//! Pacetrack -- self-hosted marathon progress tracker.
//!
//! This crate provides the record store, progress calculations, submission
//! validation, and the single-page web UI that ties them together.

pub mod config;
pub mod progress;
pub mod store;
pub mod validate;
pub mod web;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use crate::store::FileStore;
use crate::web::state::AppState;

/// Start the pacetrack server: record store, router, listener.
pub async fn serve(bind: &str, data_file: &Path) -> Result<()> {
    tracing::info!(data_file = %data_file.display(), "Opening runner log");
    let store = Arc::new(FileStore::new(data_file));
    let state = AppState::new(store);
    let app = web::router(state);

    let addr: std::net::SocketAddr = bind.parse()?;
    tracing::info!(%addr, "Pacetrack listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
