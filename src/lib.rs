pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod scoring;
pub mod server;
pub mod shutdown;
pub mod state;

pub use config::{CliArgs, ServerConfig};
pub use error::ApiError;
pub use logging::{LoggingConfig, init_logging};
pub use server::router;
pub use state::AppState;

use anyhow::Result;
use std::sync::Arc;
use tokio::net::TcpListener;

pub async fn run_server(config: ServerConfig) -> Result<()> {
    let config = Arc::new(config);
    let state = Arc::new(AppState::new(config.clone()));

    let listener = TcpListener::bind(config.http_bind_address).await?;
    let actual_addr = listener.local_addr()?;
    tracing::info!(bind = %actual_addr, "receipt points service listening");

    axum::serve(listener, server::router(state))
        .with_graceful_shutdown(shutdown::shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}
