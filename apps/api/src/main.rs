mod analysis;
mod config;
mod errors;
mod extraction;
mod llm_client;
mod recommendations;
mod report;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::extraction::{DocumentResumeExtractor, LexiconJobSkillExtractor};
use crate::llm_client::LlmClient;
use crate::recommendations::{
    LlmRecommendationGenerator, RecommendationGenerator, TemplateRecommendationGenerator,
};
use crate::report::ReportStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SkillMatch API v{}", env!("CARGO_PKG_VERSION"));

    let recommender = build_recommender(&config);
    info!("Recommendation backend: {}", recommender.backend());

    let reports = ReportStore::new(config.report_cache_capacity);
    info!(
        "Report store capacity: {}, ATS scoring {}",
        config.report_cache_capacity,
        if config.enable_ats_score { "enabled" } else { "disabled" }
    );

    let state = AppState {
        config: config.clone(),
        recommender,
        resume_extractor: Arc::new(DocumentResumeExtractor),
        job_skill_extractor: Arc::new(LexiconJobSkillExtractor),
        reports,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the frontend host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// LLM generator when an API key is configured, template generator otherwise.
fn build_recommender(config: &Config) -> Arc<dyn RecommendationGenerator> {
    let Some(api_key) = config.anthropic_api_key.clone() else {
        info!("ANTHROPIC_API_KEY not set, using template recommendations");
        return Arc::new(TemplateRecommendationGenerator);
    };

    match LlmClient::new(api_key) {
        Ok(client) => {
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Arc::new(LlmRecommendationGenerator(client))
        }
        Err(e) => {
            warn!("LLM client unavailable, using template recommendations: {e}");
            Arc::new(TemplateRecommendationGenerator)
        }
    }
}
