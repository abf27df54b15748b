//! app.rs
use crate::handlers::{health_handler, tracking_handler};
use actix_web::web;

pub fn init_app(cfg: &mut web::ServiceConfig) {
    cfg.route("/healthz", web::get().to(health_handler::healthz_endpoint))
        .route("/dbcheck", web::get().to(health_handler::dbcheck_endpoint))
        // {lead_id} no numérico se rechaza aquí mismo (400), antes del handler
        .route(
            "/o/{lead_id}.png",
            web::get().to(tracking_handler::track_open_endpoint),
        )
        .route(
            "/u/{lead_id}",
            web::get().to(tracking_handler::unsubscribe_endpoint),
        );
}
