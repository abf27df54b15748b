//! services/lead_service.rs
//! Transiciones de estado de leads: aperturas de pixel y bajas.

use chrono::{DateTime, Utc};
use sqlx::{Pool, Postgres};

use crate::services::db_service::DbError;

#[derive(Clone, Debug)]
pub struct LeadService {
    /// `None` cuando el arranque no consiguió conexión (modo degradado).
    db_pool: Option<Pool<Postgres>>,
}

impl LeadService {
    pub fn new(db_pool: Option<Pool<Postgres>>) -> Self {
        LeadService { db_pool }
    }

    fn pool(&self) -> Result<&Pool<Postgres>, DbError> {
        self.db_pool.as_ref().ok_or(DbError::Unavailable)
    }

    /// Registra una apertura de pixel. Incremento relativo en una sola
    /// sentencia: aperturas concurrentes del mismo lead (los clientes de
    /// correo precargan el pixel varias veces seguidas) nunca pierden
    /// actualizaciones. El predicado `unsubscribed = FALSE` hace que un lead
    /// dado de baja quede intacto, contador incluido; un id inexistente
    /// afecta cero filas y no es un error.
    pub async fn record_open(&self, lead_id: i64) -> Result<u64, DbError> {
        let pool = self.pool()?;

        let result = sqlx::query(
            r#"
            UPDATE taskmind.outreach_leads
            SET opens_count = COALESCE(opens_count, 0) + 1,
                last_opened = NOW(),
                status = 'opened',
                updated_at = NOW()
            WHERE id = $1
              AND unsubscribed = FALSE
            "#,
        )
        .bind(lead_id)
        .execute(pool)
        .await?;

        let rows = result.rows_affected();
        if rows > 0 {
            self.log_event(pool, lead_id, "open", serde_json::json!({ "source": "pixel" }))
                .await;
        }
        Ok(rows)
    }

    /// Marca el lead como dado de baja. Estado absorbente: el predicado
    /// excluye leads ya dados de baja, así que repetir la llamada afecta
    /// cero filas y deja la fila idéntica. Id inexistente tampoco es error.
    pub async fn unsubscribe(&self, lead_id: i64) -> Result<u64, DbError> {
        let pool = self.pool()?;

        let result = sqlx::query(
            r#"
            UPDATE taskmind.outreach_leads
            SET unsubscribed = TRUE,
                status = 'unsubscribed',
                updated_at = NOW()
            WHERE id = $1
              AND unsubscribed = FALSE
            "#,
        )
        .bind(lead_id)
        .execute(pool)
        .await?;

        let rows = result.rows_affected();
        if rows > 0 {
            self.log_event(pool, lead_id, "unsubscribe", serde_json::json!({ "source": "link" }))
                .await;
        }
        Ok(rows)
    }

    /// Round-trip trivial para `/dbcheck`. Los trackers nunca pasan por aquí.
    pub async fn check_connectivity(&self) -> Result<DateTime<Utc>, DbError> {
        let pool = self.pool()?;

        let now: DateTime<Utc> = sqlx::query_scalar("SELECT NOW()")
            .fetch_one(pool)
            .await?;
        Ok(now)
    }

    /// Bitácora best-effort: un fallo aquí se loguea y jamás tumba la
    /// transición que lo originó.
    async fn log_event(
        &self,
        pool: &Pool<Postgres>,
        lead_id: i64,
        event_type: &str,
        metadata: serde_json::Value,
    ) {
        let result = sqlx::query(
            r#"
            INSERT INTO taskmind.lead_events (lead_id, event_type, metadata)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(lead_id)
        .bind(event_type)
        .bind(metadata)
        .execute(pool)
        .await;

        if let Err(e) = result {
            log::warn!("No se pudo registrar evento {} del lead {}: {}", event_type, lead_id, e);
        }
    }
}
