// Copyright (c) 2026 OmniDesk
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Knowledge routes: document ingestion and question answering.
//!
//! Malformed bodies (missing fields, wrong types) are rejected by the
//! `Json` extractor with 422 before the service is touched.

use crate::domain::{AddDocumentsRequest, AddDocumentsResponse, QueryRequest, QueryResponse};
use crate::error::AppError;
use crate::routes::AppState;
use axum::{extract::State, Json};

/// Ingest documents, replacing the current knowledge index
#[utoipa::path(
    post,
    path = "/documents",
    tag = "knowledge",
    request_body = AddDocumentsRequest,
    responses(
        (status = 200, description = "Documents ingested", body = AddDocumentsResponse),
        (status = 422, description = "Missing or mistyped documents field")
    ),
    operation_id = "add_documents"
)]
pub async fn add_documents(
    State(state): State<AppState>,
    Json(req): Json<AddDocumentsRequest>,
) -> Result<Json<AddDocumentsResponse>, AppError> {
    state.service.add_documents(&req.documents).await?;
    Ok(Json(AddDocumentsResponse {
        status: "success".to_string(),
        document_count: req.documents.len(),
    }))
}

/// Answer a question against the ingested documents
#[utoipa::path(
    post,
    path = "/query",
    tag = "knowledge",
    request_body = QueryRequest,
    responses(
        (status = 200, description = "Answer with supporting source excerpts", body = QueryResponse),
        (status = 422, description = "Missing question field")
    ),
    operation_id = "query"
)]
pub async fn query(
    State(state): State<AppState>,
    Json(req): Json<QueryRequest>,
) -> Result<Json<QueryResponse>, AppError> {
    let result = state.service.query(&req.question).await?;
    Ok(Json(result))
}
