//! Email Check Service - Entry point.

use anyhow::{Context, Result};
use email_check_service::{
    api::{create_router, create_router_with_rate_limit, AppState, RateLimitState},
    config::Config,
    telemetry::init_logging,
};
use gxlu_client::GxluClient;
use std::net::{IpAddr, SocketAddr};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;

    // Initialize logging
    init_logging(&config.log);

    info!("Starting Email Check Service");

    let probe = GxluClient::with_endpoint(&config.probe.endpoint_url, config.probe.timeout)
        .context("Failed to create gxlu client")?;
    info!(
        endpoint = %probe.endpoint(),
        timeout = ?config.probe.timeout,
        "Registration probe ready"
    );

    let state = AppState::new(probe);

    let app = match RateLimitState::from_per_minute(config.rate_limit.global_per_minute) {
        Some(rate_limit) => {
            info!(
                per_minute = config.rate_limit.global_per_minute,
                "Global rate limit enabled"
            );
            create_router_with_rate_limit(state, rate_limit)
        }
        None => create_router(state),
    };

    let ip: IpAddr = config
        .server
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address: {}", config.server.listen_addr))?;
    let addr = SocketAddr::new(ip, config.server.port);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Email Check Service stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
