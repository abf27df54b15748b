//! config/mod.rs

pub mod db_config;
