//! handlers/mod.rs
//! Módulo que agrupa los handlers HTTP (trackers y diagnóstico).

pub mod health_handler;
pub mod tracking_handler;
