//! Response payloads. Each is built fresh per request and serialized once.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WelcomeResponse {
    #[schema(example = "Welcome to Dijitle API")]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
}

/// Field order is the wire order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    #[schema(example = "dijitle-api")]
    pub service: String,
    #[schema(example = "running")]
    pub status: String,
    #[schema(example = "1.0.0")]
    pub version: String,
}
