use crate::config::Config;
use phishguard_classifier::KeywordClassifier;
use phishguard_types::InterfaceConfig;
use tokio::net::TcpListener;
use tokio::signal;

mod config;
mod error;
mod page;
mod routes;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;
    let interface = InterfaceConfig::default();
    let app = routes::router(KeywordClassifier::default(), interface);

    let listener = TcpListener::bind(config.addr()).await?;

    log::info!("Listening on http://{}", listener.local_addr()?);
    log::info!("Press Ctrl+C to stop the server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        log::error!("Failed to listen for Ctrl+C: {e}");
        std::future::pending::<()>().await;
    }
    log::info!("Shutting down server...");
}
