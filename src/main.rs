//! Binary entry point for the backend API server.

use backend_api::{create_app, ApiConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment or use defaults
    let config = ApiConfig::from_env()?;

    init_tracing(&config);

    tracing::info!(address = %config.server_address(), "starting backend API server");

    let app = create_app(config.clone());

    let listener = tokio::net::TcpListener::bind(config.server_address()).await?;
    tracing::info!(address = %listener.local_addr()?, "backend API server listening");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Initialize tracing/logging
///
/// `RUST_LOG` takes precedence; the configured log level is the
/// fallback. Initialized here rather than in `create_app` so tests can
/// build the router repeatedly without touching the global subscriber.
fn init_tracing(config: &ApiConfig) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
