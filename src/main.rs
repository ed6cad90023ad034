use std::sync::Arc;

use anyhow::Context;
use tower_http::cors::CorsLayer;
use tracing::info;

use groq_relay::config::Config;
use groq_relay::routes;
use groq_relay::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "groq_relay=info,tower_http=info".into()),
        )
        .with_target(true)
        .init();

    let config = Config::from_env().context("loading configuration")?;
    info!(
        model = %config.model,
        base_url = %config.base_url,
        static_dir = %config.static_dir.display(),
        "configuration loaded"
    );

    let state = Arc::new(AppState::from_config(&config));

    let cors = CorsLayer::very_permissive();

    let app = routes::create_router(&config.static_dir)
        .with_state(state)
        .layer(cors);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;

    info!("groq-relay listening on http://{addr}");
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
