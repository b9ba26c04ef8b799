//! # luhn-check
//!
//! Credit card number validation over HTTP.
//!
//! ## Usage
//!
//! ```bash
//! # Listen on the default 127.0.0.1:8080
//! luhn-check
//!
//! # Pick a port, reject non-digit input
//! luhn-check 9000 --policy strict
//!
//! curl -X POST http://127.0.0.1:9000/ \
//!   -H 'Content-Type: application/json' \
//!   -d '{"number": "4003600000000014"}'
//! ```

use clap::Parser;
use luhn_api::{logging, routes, AppConfig, AppState, Cli};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::from_env()?.with_cli(cli);

    logging::init(config.log_format)?;

    let addr = config.socket_addr()?;
    info!("Input policy: {}", config.policy);

    let state = AppState::new(config);
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("luhn-check v{} listening on http://{}", env!("CARGO_PKG_VERSION"), addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
