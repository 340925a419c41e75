//! flakyrec server
//!
//! - `GET /records/:id`, `POST /records`
//! - store lookups randomly slow down or fail
//! - `/healthz`, `/readyz`, `/metrics`
//!
//! Usage: `flakyrec-server [config.yaml]` (defaults when omitted).

use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};

use flakyrec_server::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = match std::env::args().nth(1) {
        Some(path) => config::load_from_file(&path).expect("config load failed"),
        None => config::ServiceConfig::default(),
    };
    let listen: SocketAddr = cfg
        .server
        .listen
        .parse()
        .expect("server.listen must be a valid SocketAddr");

    let state = app_state::AppState::new(&cfg);
    let app = router::build_router(state.clone());

    tracing::info!(%listen, application = %state.metrics().application(), "flakyrec-server starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state))
        .await
        .expect("server failed");
}

async fn shutdown_signal(state: app_state::AppState) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    state.metrics().set_draining();
    tracing::info!("shutdown requested, draining");
}
