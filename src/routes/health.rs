// Copyright (c) 2026 OmniDesk
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Health check route

use crate::domain::HealthResponse;
use crate::utils::constants::SERVICE_NAME;
use axum::Json;

/// Basic health check handler
///
/// Reports service availability together with the service identifier.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is running normally", body = HealthResponse)
    ),
    operation_id = "health_check"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
    })
}
