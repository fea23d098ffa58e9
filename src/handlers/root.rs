use actix_web::{web, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::errors::AppError;
use crate::AppService;

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DiagnosticsResponse {
    pub backend: String,
    /// Connection state, or the (truncated) store error.
    pub database: String,
    /// Whether a PostgreSQL URL is configured.
    pub database_url: String,
    /// Store implementation in use: `postgres` or `memory`.
    pub store: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

const MAX_ERROR_CHARS: usize = 80;

/// GET /
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service banner", body = MessageResponse)),
    tag = "status"
)]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse {
        message: "Food Delivery API running".to_string(),
    })
}

/// GET /test
///
/// Reports which store is in use and whether it answers. A failing store is
/// described in the body; the status code stays 200.
#[utoipa::path(
    get,
    path = "/test",
    responses((status = 200, description = "Store diagnostics", body = DiagnosticsResponse)),
    tag = "status"
)]
pub async fn diagnostics(service: web::Data<AppService>) -> Result<HttpResponse, AppError> {
    let report = web::block(move || service.diagnostics())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let database = match &report.error {
        None => "connected".to_string(),
        Some(e) => format!("error: {}", e.chars().take(MAX_ERROR_CHARS).collect::<String>()),
    };

    let database_url = if report.store == "postgres" { "set" } else { "not set" };
    let connection_status = if report.connected {
        "Connected"
    } else {
        "Not Connected"
    };

    Ok(HttpResponse::Ok().json(DiagnosticsResponse {
        backend: "running".to_string(),
        database,
        database_url: database_url.to_string(),
        store: report.store.to_string(),
        connection_status: connection_status.to_string(),
        collections: report.collections,
    }))
}
