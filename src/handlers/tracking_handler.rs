//! handlers/tracking_handler.rs
//! Endpoints de tracking: pixel de apertura y enlace de baja. Sin
//! autenticación a propósito, igual que los abre cualquier cliente de correo.

use actix_web::{web, HttpResponse};
use log::error;

use crate::services::lead_service::LeadService;

/// PNG transparente de 1×1, 67 bytes.
pub const PIXEL_PNG: &[u8] =
    b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR\x00\x00\x00\x01\x00\x00\x00\x01\
\x08\x06\x00\x00\x00\x1f\x15\xc4\x89\x00\x00\x00\nIDATx\x9cc\x00\x01\
\x00\x00\x05\x00\x01\r\n-\xb4\x00\x00\x00\x00IEND\xaeB`\x82";

/// La respuesta del pixel, siempre la misma. Que el update haya fallado (o ni
/// se haya podido intentar) no cambia ni un byte: alterarla rompería la
/// confirmación de entrega en el cliente de correo y delataría si el lead
/// existe o no.
pub fn pixel_response() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("image/png")
        .append_header(("Cache-Control", "no-cache, no-store, must-revalidate"))
        .append_header(("Pragma", "no-cache"))
        .append_header(("Expires", "0"))
        .body(PIXEL_PNG)
}

/// GET /o/{lead_id}.png
pub async fn track_open_endpoint(
    lead_service: web::Data<LeadService>,
    path: web::Path<i64>,
) -> HttpResponse {
    let lead_id = path.into_inner();

    if let Err(e) = lead_service.record_open(lead_id).await {
        // Solo al log; la respuesta no cambia.
        error!("No se pudo registrar apertura del lead {}: {:?}", lead_id, e);
    }

    pixel_response()
}

/// GET /u/{lead_id}
pub async fn unsubscribe_endpoint(
    lead_service: web::Data<LeadService>,
    path: web::Path<i64>,
) -> HttpResponse {
    let lead_id = path.into_inner();

    if let Err(e) = lead_service.unsubscribe(lead_id).await {
        error!("No se pudo dar de baja el lead {}: {:?}", lead_id, e);
    }

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body("<h3>Unsubscribed ✅</h3>")
}
