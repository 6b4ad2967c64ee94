use std::sync::Arc;

use log::info;
use rally_persistence_memory::{MemoryMatchStore, MemoryPlayerStore};
use rally_server_app::build_application;

mod logs;

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received. Preparing graceful exit...");
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    logs::init_logger();

    let player_store = Arc::new(MemoryPlayerStore::new());
    let match_store = Arc::new(MemoryMatchStore::new());
    let app = Arc::new(build_application(player_store, match_store));

    info!("Starting application");
    rally_server_api::http::run(app, shutdown_signal()).await;
}
