//! models/lead_model.rs

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Fila de `taskmind.outreach_leads`. Las filas las crea el proceso de
/// importación; este servicio solo muta status/opens_count/last_opened/
/// unsubscribed/updated_at, nunca crea ni borra leads.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct LeadRecord {
    pub id: i64,
    pub email: Option<String>,
    pub name: Option<String>,
    pub status: String, // "new", "contacted", "opened", "unsubscribed"
    pub unsubscribed: bool,
    pub opens_count: Option<i32>, // NULL cuenta como cero
    pub last_opened: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Respuesta de GET /dbcheck
#[derive(Debug, Clone, Serialize)]
pub struct DbCheckResponse {
    #[serde(rename = "dbConnected")]
    pub db_connected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
