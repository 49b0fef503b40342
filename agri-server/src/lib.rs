//! Farmer submission endpoint.
//!
//! A single `POST /api/farmer` route that stores every JSON payload it
//! receives as its own file on local disk (see [`records::RecordWriter`]),
//! plus `GET /health`. No authentication, validation, deduplication or
//! read-back.

pub mod records;
pub mod routes;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use log::info;
use records::RecordWriter;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Largest accepted request body (10 MiB).
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Port used when neither `--port` nor `PORT` is given.
pub const DEFAULT_PORT: u16 = 5000;

pub type SharedState = Arc<RecordWriter>;

/// Server settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: IpAddr,
    pub port: u16,
    /// Directory receiving the submission files.
    pub data_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            data_dir: PathBuf::from("."),
        }
    }
}

/// Create the API router
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/api/farmer", post(routes::save_farmer))
        .route("/health", get(routes::health))
        // The dashboard is served from another origin.
        .layer(CorsLayer::permissive())
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}

/// Bind and serve until Ctrl-C.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    tokio::fs::create_dir_all(&config.data_dir).await?;
    let state = Arc::new(RecordWriter::new(config.data_dir.clone()));
    let app = create_router(state.clone());

    let addr = SocketAddr::new(config.bind, config.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        "Backend API running on {} (records in {})",
        listener.local_addr()?,
        state.dir().display()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutting down");
        })
        .await?;
    Ok(())
}
