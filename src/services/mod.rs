//! services/mod.rs
//! Módulo que agrupa las capas de acceso a datos del tracker.

pub mod db_service;
pub mod lead_service;
pub mod schema_service;
