mod auth;
mod config;
mod describe;
mod error;
mod portfolio;
mod resume;
mod server;

use std::sync::Arc;

use rmcp::{ServiceExt, transport::stdio};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use portfolio_common::openai::{OpenAiClient, OpenAiClientConfig};
use portfolio_common::redis::RedisCache;
use portfolio_core::seed::Seed;

use auth::AuthFlag;
use config::Config;
use describe::DescriptionGenerator;
use error::AppError;
use portfolio::Portfolio;
use resume::ResumeStore;
use server::PortfolioServer;

fn load_seed(config: &Config) -> Result<Seed, AppError> {
    let Some(path) = &config.seed_path else {
        return Ok(Seed::builtin());
    };
    let raw = std::fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("failed to read {}: {e}", path.display())))?;
    Seed::from_json(&raw)
        .map_err(|e| AppError::Config(format!("invalid seed {}: {e}", path.display())))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("starting portfolio MCP server");

    let config = Config::from_env()?;
    info!(
        redis = config.redis_url.is_some(),
        seed = config.seed_path.is_some(),
        model = %config.description_model,
        "configuration loaded"
    );

    let redis = RedisCache::new(config.redis_url.as_deref());
    if redis.is_available().await {
        info!("redis connected");
    } else {
        info!("redis unavailable, authoring flag and resume fall back to defaults");
    }

    let auth = AuthFlag::new(redis.clone(), config.force_authoring);
    let context = auth.session_context().await;

    let seed = load_seed(&config)?;
    info!(
        projects = seed.projects.len(),
        experience = seed.experience.len(),
        demos = seed.demos.len(),
        articles = seed.articles.len(),
        skill_categories = seed.skills.len(),
        "seed loaded"
    );
    let portfolio = Portfolio::mount(seed, context);

    let openai = Arc::new(OpenAiClient::new(OpenAiClientConfig::from_env())?);
    let describer = Arc::new(DescriptionGenerator::new(
        openai,
        config.description_model.clone(),
        redis.clone(),
    ));
    let resume = Arc::new(ResumeStore::new(redis, config.resume_default.clone()));

    let server = PortfolioServer::new(portfolio, describer, resume, auth);

    if let Ok(addr) = std::env::var("MCP_TCP_LISTEN_ADDR") {
        let listener = TcpListener::bind(&addr).await?;
        info!(listen_addr = %addr, "MCP server ready, serving on TCP");
        loop {
            let (stream, peer) = listener.accept().await?;
            let server = server.clone();
            tokio::spawn(async move {
                tracing::info!(peer = %peer, "MCP client connected");
                let service = server.serve(stream).await.inspect_err(|e| {
                    tracing::error!(error = %e, "MCP server error");
                })?;
                service.waiting().await?;
                tracing::info!(peer = %peer, "MCP client disconnected");
                Ok::<(), anyhow::Error>(())
            });
        }
    } else {
        info!("MCP server ready, serving on stdio");
        let service = server.serve(stdio()).await.inspect_err(|e| {
            tracing::error!(error = %e, "MCP server error");
        })?;
        service.waiting().await?;
        info!("MCP server shut down");
    }
    Ok(())
}
