use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{router, AppState};

/// Main entry point for the VetClinic application
///
/// Loads `.env`, installs logging, resolves configuration and the catalog once, and serves
/// the site over HTTP.
///
/// # Environment Variables
/// - `VET_REST_ADDR`: HTTP server address (default: "0.0.0.0:8000")
/// - `VET_COMPONENTS_DIR`: Directory holding the header/footer fragments (default: `components/`)
/// - `VET_CATALOG_PATH`: Catalog YAML replacing the embedded one (optional)
/// - `VET_SITE_TITLE`: Page title (default: "Ветеринарная клиника Друг")
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If startup or the server fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("vetclinic_run=info".parse()?)
                .add_directive("api_rest=info".parse()?)
                .add_directive("vet_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("VET_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".into());

    tracing::info!("++ Starting VetClinic on {}", addr);

    let state = AppState::from_env()?;
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
