//! services/db_service.rs
//! Apertura de conexiones a Postgres con fallback de TLS a texto claro.

use sqlx::postgres::{PgPoolOptions, PgSslMode};
use sqlx::{Pool, Postgres};
use thiserror::Error;

use crate::config::db_config::DbConfig;

/// Taxonomía de errores de la capa de datos.
#[derive(Debug, Error)]
pub enum DbError {
    /// El proceso arrancó sin pool (modo degradado).
    #[error("no hay conexión a la base de datos disponible")]
    Unavailable,
    /// No se pudo abrir sesión tras el único reintento en claro.
    #[error("no se pudo conectar a la base de datos: {0}")]
    Connection(#[source] sqlx::Error),
    /// La sesión existe pero la consulta falló.
    #[error("fallo de consulta: {0}")]
    Query(#[from] sqlx::Error),
}

pub struct DbService;

impl DbService {
    /// Abre el pool intentando primero una conexión cifrada. Si ese intento
    /// falla por cualquier motivo se reintenta exactamente una vez sin
    /// cifrado; si ambos fallan se devuelve `DbError::Connection` con la
    /// causa. No hay más reintentos que ese.
    pub async fn connect(config: &DbConfig) -> Result<Pool<Postgres>, DbError> {
        let base = config
            .connect_options()
            .map_err(|e| DbError::Connection(sqlx::Error::Configuration(e.into())))?;

        let encrypted = base.clone().ssl_mode(PgSslMode::Require);
        match Self::try_connect(encrypted).await {
            Ok(pool) => {
                log::info!("Conexión a Postgres establecida (TLS)");
                Ok(pool)
            }
            Err(e) => {
                log::warn!("Conexión TLS falló ({}); reintentando sin cifrado", e);
                let plaintext = base.ssl_mode(PgSslMode::Disable);
                match Self::try_connect(plaintext).await {
                    Ok(pool) => {
                        log::info!("Conexión a Postgres establecida (sin TLS)");
                        Ok(pool)
                    }
                    Err(e) => Err(DbError::Connection(e)),
                }
            }
        }
    }

    /// `connect_with` abre y valida una conexión real, así el fallback se
    /// decide aquí y no en mitad de una petición.
    async fn try_connect(
        options: sqlx::postgres::PgConnectOptions,
    ) -> Result<Pool<Postgres>, sqlx::Error> {
        PgPoolOptions::new()
            .max_connections(10)
            .connect_with(options)
            .await
    }
}
