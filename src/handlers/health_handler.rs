//! handlers/health_handler.rs
//! Endpoints de diagnóstico. El único sitio donde un ConnectionError se
//! vuelve visible hacia fuera.

use actix_web::{web, HttpResponse};

use crate::models::lead_model::DbCheckResponse;
use crate::services::lead_service::LeadService;

/// GET /healthz — vive el proceso; no toca almacenamiento.
pub async fn healthz_endpoint() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "ok": true }))
}

/// GET /dbcheck — round-trip real contra la base.
pub async fn dbcheck_endpoint(lead_service: web::Data<LeadService>) -> HttpResponse {
    match lead_service.check_connectivity().await {
        Ok(ts) => HttpResponse::Ok().json(DbCheckResponse {
            db_connected: true,
            timestamp: Some(ts),
            error: None,
        }),
        Err(e) => HttpResponse::Ok().json(DbCheckResponse {
            db_connected: false,
            timestamp: None,
            error: Some(e.to_string()),
        }),
    }
}
