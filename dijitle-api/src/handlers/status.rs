use crate::dtos::StatusResponse;
use crate::{SERVICE_ID, SERVICE_VERSION};
use axum::Json;

/// Service status report
#[utoipa::path(
    get,
    path = "/api/v1/status",
    responses(
        (status = 200, description = "Service identity and run state", body = StatusResponse)
    ),
    tag = "Service"
)]
pub async fn service_status() -> Json<StatusResponse> {
    Json(StatusResponse {
        service: SERVICE_ID.to_string(),
        status: "running".to_string(),
        version: SERVICE_VERSION.to_string(),
    })
}
