//! Web server implementation using Axum

use anyhow::Result;

use crate::clock::Clock;
use crate::config::Config;
use crate::routes::{self, AppState};

/// Start the web server
pub async fn serve(
    config: Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting folio server...");

    // Use CLI overrides if provided, otherwise use config
    let host = host_override.unwrap_or_else(|| config.server.host.to_owned());
    let port = port_override.unwrap_or(config.server.port);

    let state = AppState {
        config,
        clock: Clock::system(),
    };

    let app = routes::router(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
