use city_info_api::config::Config;
use city_info_api::handlers::AppState;
use city_info_api::routes::build_router;
use city_info_api::traffic::SystemClock;
use city_info_api::upstream::build_http_client;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the application.
///
/// This function initializes the application, including:
/// - Logging and tracing.
/// - Configuration loading.
/// - The shared outbound HTTP client.
/// - HTTP routes and middleware.
///
/// It then starts the Axum server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "city_info_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    let http_client = build_http_client(config.upstream_timeout)?;
    tracing::info!(
        "Upstream HTTP client initialized ({:?} timeout)",
        config.upstream_timeout
    );

    let port = config.port;
    let app_state = Arc::new(AppState {
        config,
        http_client,
        clock: Arc::new(SystemClock),
    });

    let app = build_router(app_state);

    // Start server
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
