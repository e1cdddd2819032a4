// Copyright (c) 2026 OmniDesk
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Route definitions, kept out of main.rs for maintainability.

pub(crate) mod health;
pub(crate) mod knowledge;

use axum::{routing::get, routing::post, Json, Router};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use utoipa::OpenApi;

use crate::rag::KnowledgeService;

/// Default request timeout (30 seconds)
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<KnowledgeService>,
}

/// OmniDesk API documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "OmniDesk API",
        version = "0.1.0",
        description = "Enterprise knowledge service: document ingestion and retrieval-augmented question answering"
    ),
    paths(
        health::health_check,
        knowledge::add_documents,
        knowledge::query
    ),
    components(schemas(
        crate::domain::HealthResponse,
        crate::domain::AddDocumentsRequest,
        crate::domain::AddDocumentsResponse,
        crate::domain::QueryRequest,
        crate::domain::QueryResponse
    ))
)]
struct ApiDoc;

async fn openapi_spec() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/documents", post(knowledge::add_documents))
        .route("/query", post(knowledge::query))
        .route("/api-docs/openapi.json", get(openapi_spec))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(DEFAULT_TIMEOUT))
        .with_state(state)
}
