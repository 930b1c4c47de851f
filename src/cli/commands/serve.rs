use crate::api::{AppState, routes};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::LogStore;
use crate::errors::{AppError, AppResult};
use std::net::SocketAddr;
use std::sync::Arc;

/// Handle the `serve` command: open the store and run the HTTP service
/// until Ctrl-C.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Serve { bind } = cmd {
        let bind = bind.as_deref().unwrap_or(&cfg.bind_address);
        let addr: SocketAddr = bind
            .parse()
            .map_err(|_| AppError::Config(format!("invalid bind address: '{bind}'")))?;

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;

        runtime.block_on(serve(addr, cfg))?;
    }
    Ok(())
}

async fn serve(addr: SocketAddr, cfg: &Config) -> AppResult<()> {
    let store = LogStore::open(&cfg.database, cfg.pool_size, cfg.week_start)?;
    tracing::info!(
        database = %cfg.database,
        week_start = cfg.week_start.as_str(),
        "Log store ready"
    );

    let state = Arc::new(AppState::new(store));
    let app = routes::app(state, &cfg.allowed_origins)?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
}
