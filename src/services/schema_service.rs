//! services/schema_service.rs
//! Bootstrap idempotente del esquema `taskmind`.

use sqlx::{Pool, Postgres};

use crate::services::db_service::DbError;

/// Sentencias de creación, en orden de dependencia. Cada una lleva su propio
/// guard de existencia (`IF NOT EXISTS`): dos instancias arrancando a la vez
/// pueden ejecutar la secuencia completa sin provocar un "already exists"
/// fatal, sin ningún check-then-create a nivel de aplicación.
const SCHEMA_STATEMENTS: &[&str] = &[
    "CREATE SCHEMA IF NOT EXISTS taskmind",
    r#"
    CREATE TABLE IF NOT EXISTS taskmind.outreach_leads (
        id           BIGSERIAL PRIMARY KEY,
        email        TEXT,
        name         TEXT,
        status       TEXT NOT NULL DEFAULT 'new',
        unsubscribed BOOLEAN NOT NULL DEFAULT FALSE,
        opens_count  INTEGER DEFAULT 0,
        last_opened  TIMESTAMPTZ,
        created_at   TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at   TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    // Propiedad del pipeline de envío; aquí solo se garantiza que exista.
    r#"
    CREATE TABLE IF NOT EXISTS taskmind.outreach_messages (
        id              BIGSERIAL PRIMARY KEY,
        lead_id         BIGINT NOT NULL
                        REFERENCES taskmind.outreach_leads (id) ON DELETE CASCADE,
        channel         TEXT,
        subject         TEXT,
        body            TEXT,
        delivery_status TEXT,
        error_message   TEXT,
        sent_at         TIMESTAMPTZ
    )
    "#,
    // Bitácora append-only de eventos de engagement.
    r#"
    CREATE TABLE IF NOT EXISTS taskmind.lead_events (
        id         BIGSERIAL PRIMARY KEY,
        lead_id    BIGINT NOT NULL,
        event_type TEXT NOT NULL,
        metadata   JSONB,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
];

pub struct SchemaService;

impl SchemaService {
    /// Corre la secuencia completa dentro de una transacción. Se invoca una
    /// vez por arranque; el llamador decide qué hacer si falla (el proceso
    /// sigue sirviendo en modo degradado, nunca aborta por esto).
    pub async fn ensure_schema(db_pool: &Pool<Postgres>) -> Result<(), DbError> {
        let mut tx = db_pool.begin().await?;

        for statement in SCHEMA_STATEMENTS {
            sqlx::query(statement).execute(&mut *tx).await?;
        }

        tx.commit().await?;
        log::info!("Esquema taskmind verificado");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todas_las_sentencias_llevan_guard_de_existencia() {
        for statement in SCHEMA_STATEMENTS {
            assert!(
                statement.contains("IF NOT EXISTS"),
                "sentencia sin guard: {}",
                statement
            );
        }
    }

    #[test]
    fn la_tabla_de_leads_se_crea_antes_que_sus_dependientes() {
        let leads = SCHEMA_STATEMENTS
            .iter()
            .position(|s| s.contains("CREATE TABLE IF NOT EXISTS taskmind.outreach_leads"))
            .unwrap();
        let messages = SCHEMA_STATEMENTS
            .iter()
            .position(|s| s.contains("outreach_messages"))
            .unwrap();
        assert!(leads < messages);
    }
}
