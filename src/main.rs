use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use sqlx::{Pool, Postgres};

use crate::config::db_config::DbConfig;
use crate::logger::init_logger;
use crate::services::db_service::DbService;
use crate::services::lead_service::LeadService;
use crate::services::schema_service::SchemaService;

mod app;
mod config;
mod handlers;
mod logger;
mod models;
mod services;

#[cfg(test)]
mod tests;

/// Abre el pool y corre el bootstrap del esquema. Si algo falla aquí el
/// proceso sigue arrancando en modo degradado: los trackers responden igual
/// y `/dbcheck` reporta el estado real.
async fn setup_database(db_config: &DbConfig) -> Option<Pool<Postgres>> {
    let db_pool = match DbService::connect(db_config).await {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Sin conexión a la base de datos: {:?}", e);
            return None;
        }
    };

    if let Err(e) = SchemaService::ensure_schema(&db_pool).await {
        // No es fatal: el esquema puede existir ya, o llegar después.
        log::error!("Fallo en bootstrap del esquema: {:?}", e);
    }

    Some(db_pool)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok(); // Cargar .env al inicio
    init_logger();

    // Configuración inválida sí es fatal: en producción no hay defaults.
    let db_config = DbConfig::from_env().expect("Configuración de base de datos inválida");

    let db_pool = setup_database(&db_config).await;
    let lead_service = LeadService::new(db_pool);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);

    log::info!("Levantando servidor en 0.0.0.0:{}", port);
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(lead_service.clone()))
            .configure(app::init_app)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
