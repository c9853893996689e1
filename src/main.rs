use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{router, AppState};
use healthassist_core::config::seed_demo_data_from_env_value;
use healthassist_core::constants::DEFAULT_REST_ADDR;
use healthassist_core::CoreConfig;

/// Main entry point for the HealthAssist server
///
/// Serves the REST API (with Swagger UI at `/swagger-ui`) over in-memory stores.
///
/// # Environment Variables
/// - `HEALTHASSIST_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `HEALTHASSIST_SEED_DEMO_DATA`: start with the demo account, claim and family records
///   (default: true)
/// - `RUST_LOG`: extra tracing directives
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the configuration is invalid,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("healthassist=info".parse()?)
                .add_directive("api_rest=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr =
        std::env::var("HEALTHASSIST_REST_ADDR").unwrap_or_else(|_| DEFAULT_REST_ADDR.into());
    let seed_demo_data =
        seed_demo_data_from_env_value(std::env::var("HEALTHASSIST_SEED_DEMO_DATA").ok())?;
    let cfg = CoreConfig::new(seed_demo_data);

    let app = router(AppState::from_config(&cfg)?);

    tracing::info!(seed_demo_data, "++ Starting HealthAssist REST on {}", rest_addr);

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
