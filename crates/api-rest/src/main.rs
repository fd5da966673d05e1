//! Standalone HTTP server binary.
//!
//! ## Purpose
//! Runs the vet clinic HTTP server on its own, without the workspace's `vetclinic-run`
//! wrapper. Useful during development when iterating on the API crate.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{router, AppState};

/// Main entry point for the standalone HTTP server
///
/// # Environment Variables
/// - `VET_REST_ADDR`: Server address (default: "0.0.0.0:8000")
/// - see [`AppState::from_env`] for catalog and component settings
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - configuration or the catalog cannot be loaded,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("VET_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".into());

    tracing::info!("-- Starting VetClinic REST API on {}", addr);

    let state = AppState::from_env()?;
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
