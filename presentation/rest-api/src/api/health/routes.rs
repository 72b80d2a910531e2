use std::sync::Arc;

use chrono::Utc;
use poem_openapi::{ApiResponse, Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use business::domain::product::repository::ProductRepository;

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// "healthy" when the catalog can be read, "degraded" otherwise
    pub status: String,
    /// Number of products in the catalog, when readable
    #[oai(skip_serializing_if_is_none)]
    pub products: Option<u64>,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
}

#[derive(ApiResponse)]
pub enum HealthResponse {
    #[oai(status = 200)]
    Healthy(Json<HealthCheckResponse>),
    #[oai(status = 503)]
    Degraded(Json<HealthCheckResponse>),
}

/// Health API for monitoring and infrastructure checks
pub struct Api {
    repository: Arc<dyn ProductRepository>,
}

impl Api {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Reads the catalog once to confirm it is reachable and well formed.
    ///
    /// ## Response
    /// - `status`: "healthy" or "degraded"
    /// - `products`: catalog size when healthy
    /// - `timestamp`: Current server timestamp in ISO 8601 format
    /// - `version`: Service version from Cargo.toml
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> HealthResponse {
        let catalog = self.repository.get_all().await;
        let body = |status: &str, products: Option<u64>| HealthCheckResponse {
            status: status.to_string(),
            products,
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        };

        match catalog {
            Ok(products) => {
                HealthResponse::Healthy(Json(body("healthy", Some(products.len() as u64))))
            }
            Err(err) => {
                tracing::warn!(error = %err, "health check could not read catalog");
                HealthResponse::Degraded(Json(body("degraded", None)))
            }
        }
    }
}
