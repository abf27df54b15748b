//! models/mod.rs
//! Módulo raíz para modelos/estructuras compartidas.

pub mod event_model;
pub mod lead_model;
