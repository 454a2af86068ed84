//! Entry point for the `items-gateway` HTTP server.

use std::sync::Arc;

use items_core::ItemStore;
use items_gateway::{
    config::{GatewayConfig, LogFormat},
    logging,
    routes::create_router,
};
use tracing::info;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let config = GatewayConfig::from_env();
    logging::init(config.as_ref().map_or(LogFormat::default(), |c| c.log_format));
    let config = match config {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let store = Arc::new(ItemStore::new());
    let app = create_router(store);

    let listener = match tokio::net::TcpListener::bind(config.listen_addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(addr = %config.listen_addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    info!(addr = %config.listen_addr, "items-gateway listening");

    if let Err(e) = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }

    info!("items-gateway stopped");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };
    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(unix)]
    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    #[cfg(not(unix))]
    ctrl_c.await;

    info!("shutdown signal received");
}
