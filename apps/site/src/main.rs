mod config;
mod contact;
mod content;
mod errors;
mod llm_client;
mod render;
mod resume;
mod routes;
mod state;
mod theme;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::contact::mailer::HttpMailer;
use crate::content::load_content;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio v{}", env!("CARGO_PKG_VERSION"));

    // Content is loaded whole or not at all
    let content = load_content(config.content_path.as_deref())?;
    info!(
        "Content loaded: {} skill categories, {} projects",
        content.skills.categories.len(),
        content.projects.len()
    );
    info!("Layout: {:?}", config.layout);

    let mailer = Arc::new(HttpMailer::new(
        config.email_api_url.clone(),
        config.email_api_key.clone(),
        config.contact_from_email.clone(),
        config.contact_to_email.clone(),
    ));
    info!("Mailer initialized ({})", config.email_api_url);
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let state = AppState::from_config(&config, content, mailer);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
