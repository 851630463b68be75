// src/web/mod.rs — HTTP surface: router, server lifecycle, page handlers

pub mod cookies;
pub mod forms;
pub mod handlers;
pub mod render;

use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tower_http::trace::TraceLayer;

use crate::infra::config::Config;
use crate::infra::errors::StockroomError;
use crate::session::SessionStore;

/// Shared state for page handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SessionStore>,
}

/// Build the axum router: one page served on GET and POST, plus liveness.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::show_page).post(handlers::submit_page))
        .route("/healthz", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until ctrl-c. Also starts the periodic session expiry
/// sweep when the config asks for one.
pub async fn start_server(config: &Config, state: AppState) -> Result<(), StockroomError> {
    let addr = format!("{}:{}", config.server.bind, config.server.port);

    if config.session.sweep_interval_secs > 0 {
        spawn_session_sweep(state.store.clone(), config.session.sweep_interval_secs);
    }

    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("stockroom listening on http://{addr}");
    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutting down");
        })
        .await?;
    Ok(())
}

fn spawn_session_sweep(store: Arc<dyn SessionStore>, interval_secs: u64) {
    tokio::spawn(async move {
        let mut tick = tokio::time::interval(Duration::from_secs(interval_secs));
        loop {
            tick.tick().await;
            let reaped = store.reap_expired().await;
            if reaped > 0 {
                tracing::debug!("expiry sweep dropped {reaped} idle session(s)");
            }
        }
    });
}
