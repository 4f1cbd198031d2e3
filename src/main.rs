use anyhow::Context;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use portfolio_cms::build_router;
use portfolio_cms::config::Config;
use portfolio_cms::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    let addr = config.server_addr();
    let admin_email = config.admin_email.clone();

    let state = AppState::new(config).context("Failed to initialize application state")?;

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Mock server started on http://{}", addr);
    tracing::info!("API base URL: http://{}/api (admin: {})", addr, admin_email);
    axum::serve(listener, app).await?;

    Ok(())
}
