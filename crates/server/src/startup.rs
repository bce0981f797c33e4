use axum::Router;
use configs::AppConfig;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

/// Any origin is echoed back; the browser client is served from elsewhere.
fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Config file first, then `SERVER_*`/`DATABASE_URL` env vars, then the built-in URL.
fn load_config() -> Result<AppConfig, StartupError> {
    let mut cfg = match configs::load_default() {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!(error = %e, "no usable config file, reading environment");
            AppConfig::from_env()
        }
    };
    cfg.database.normalize_from_env();
    if cfg.database.url.trim().is_empty() {
        cfg.database.url = models::db::DATABASE_URL.clone();
    }
    cfg.normalize_and_validate()
        .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    Ok(cfg)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl_c");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

/// Public entry: connect, migrate, build the app and serve until Ctrl+C.
/// Expects `.env` and the tracing subscriber to be set up by the caller.
pub async fn run() -> Result<(), StartupError> {
    let cfg = load_config()?;

    let db = models::db::connect_with_config(&cfg.database).await?;
    models::db::migrate(&db).await?;
    let state = AppState::with_db(db);

    let app: Router = routes::build_router(state, build_cors());

    let addr = cfg.bind_addr();
    info!(%addr, "starting hospital records server");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(anyhow::Error::from)?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(anyhow::Error::from)?;
    info!("server stopped");
    Ok(())
}
