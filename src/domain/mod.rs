// Copyright (c) 2026 OmniDesk
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddDocumentsRequest {
    pub documents: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AddDocumentsResponse {
    pub status: String,
    pub document_count: usize,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct QueryRequest {
    pub question: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct QueryResponse {
    pub answer: String,
    pub sources: Vec<String>,
}
