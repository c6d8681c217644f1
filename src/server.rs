//! Static asset server for the built dashboard front-end.
//!
//! Every request is answered from the asset directory. Paths that match no
//! file get the directory's `index.html`, so client-side routes resolve.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::error::{DashboardError, DashboardResult};

pub const DEFAULT_PORT: u16 = 5174;
pub const DEFAULT_ASSET_DIR: &str = "dist";
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub asset_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR,
            port: DEFAULT_PORT,
            asset_dir: PathBuf::from(DEFAULT_ASSET_DIR),
        }
    }
}

impl ServerConfig {
    /// Reads `PORT`, `ASSET_DIR` and `BIND_ADDR` from the process environment.
    pub fn from_env() -> DashboardResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env` with an arbitrary variable source.
    ///
    /// Unset or empty variables fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> DashboardResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(raw) = read("PORT") {
            config.port = raw.trim().parse().map_err(|_| {
                DashboardError::Config(format!("PORT must be a port number, got `{raw}`"))
            })?;
        }
        if let Some(raw) = read("BIND_ADDR") {
            config.bind_addr = raw.trim().parse().map_err(|_| {
                DashboardError::Config(format!("BIND_ADDR must be an IP address, got `{raw}`"))
            })?;
        }
        if let Some(raw) = read("ASSET_DIR") {
            config.asset_dir = PathBuf::from(raw);
        }
        Ok(config)
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

/// Router serving `asset_dir` with an `index.html` fallback.
pub fn router(config: &ServerConfig) -> Router {
    let index = config.asset_dir.join("index.html");
    let assets = ServeDir::new(&config.asset_dir).fallback(ServeFile::new(index));

    Router::new()
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Binds and serves until ctrl-c.
pub async fn serve(config: ServerConfig) -> DashboardResult<()> {
    if !config.asset_dir.join("index.html").is_file() {
        warn!(
            asset_dir = %config.asset_dir.display(),
            "asset directory has no index.html; fallback requests will 404"
        );
    }

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, asset_dir = %config.asset_dir.display(), "dashboard server listening");

    axum::serve(listener, router(&config))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("dashboard server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(%err, "ctrl-c handler unavailable; serving until killed");
        std::future::pending::<()>().await;
    }
}
