//! models/event_model.rs

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Entrada de la bitácora `taskmind.lead_events`. Append-only: este servicio
/// solo escribe, nunca lee ni actualiza entradas.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct LeadEvent {
    pub id: i64,
    pub lead_id: i64,
    pub event_type: String, // "open", "unsubscribe"
    pub metadata: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}
