// Copyright (c) 2026 OmniDesk
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use omnidesk::openai::OpenAiClient;
use omnidesk::rag::{ChatModel, Embedder, KnowledgeService};
use omnidesk::routes::{self, AppState};
use omnidesk::AppConfig;
use std::sync::Arc;
use tower_http::set_header::SetResponseHeaderLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    tracing::info!("Starting OmniDesk knowledge service...");

    let config = AppConfig::load()?;
    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        persist_dir = %config.knowledge.persist_dir.display(),
        "Configuration loaded"
    );

    let client = Arc::new(OpenAiClient::new(config.openai.clone())?);
    let embedder: Arc<dyn Embedder> = client.clone();
    let chat: Arc<dyn ChatModel> = client;
    let service = Arc::new(KnowledgeService::new(embedder, chat, &config.knowledge));

    let app = routes::router(AppState { service }).layer(SetResponseHeaderLayer::overriding(
        axum::http::header::X_CONTENT_TYPE_OPTIONS,
        axum::http::HeaderValue::from_static("nosniff"),
    ));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
