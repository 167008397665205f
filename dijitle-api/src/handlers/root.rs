use crate::dtos::WelcomeResponse;
use crate::SERVICE_NAME;
use axum::Json;

/// Welcome message
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Welcome message", body = WelcomeResponse)
    ),
    tag = "Service"
)]
pub async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: format!("Welcome to {}", SERVICE_NAME),
    })
}
