//! config/db_config.rs
//! Descriptor de conexión a Postgres: una URL completa (DATABASE_URL) o
//! parámetros sueltos (DB_HOST, DB_PORT, DB_USER, DB_PASS, DB_NAME).
//!
//! Los valores por defecto son SOLO para desarrollo local. Con
//! APP_ENV=production cada parámetro no definido es un error de arranque:
//! nunca se despliega con credenciales embebidas.

use std::str::FromStr;

use anyhow::{bail, Context, Result};
use sqlx::postgres::PgConnectOptions;

#[derive(Debug, Clone)]
pub struct DbConfig {
    /// URL completa; tiene prioridad sobre los parámetros sueltos.
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl DbConfig {
    pub fn from_env() -> Result<Self> {
        let production = std::env::var("APP_ENV")
            .map(|v| v == "production")
            .unwrap_or(false);
        Self::from_lookup(|name| std::env::var(name).ok(), production)
    }

    /// Resuelve la configuración desde un lookup arbitrario (en producción
    /// los defaults de desarrollo están prohibidos).
    pub fn from_lookup<F>(get: F, production: bool) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = get("DATABASE_URL") {
            return Ok(DbConfig {
                url: Some(url),
                host: String::new(),
                port: 0,
                user: String::new(),
                password: String::new(),
                database: String::new(),
            });
        }

        let var = |name: &str, dev_default: &str| -> Result<String> {
            match get(name) {
                Some(v) => Ok(v),
                None if production => {
                    bail!("{} no está definida y APP_ENV=production no admite defaults", name)
                }
                None => Ok(dev_default.to_string()),
            }
        };

        let port_raw = var("DB_PORT", "5432")?;
        let port: u16 = port_raw
            .parse()
            .with_context(|| format!("DB_PORT inválido: {}", port_raw))?;

        Ok(DbConfig {
            url: None,
            host: var("DB_HOST", "localhost")?,
            port,
            user: var("DB_USER", "taskmind")?,
            password: var("DB_PASS", "taskmind")?,
            database: var("DB_NAME", "taskmind_db")?,
        })
    }

    /// Traduce el descriptor a opciones de sqlx. El modo SSL lo decide
    /// `DbService` (cifrado primero, un reintento en claro).
    pub fn connect_options(&self) -> Result<PgConnectOptions> {
        if let Some(url) = &self.url {
            return PgConnectOptions::from_str(url).context("DATABASE_URL inválida");
        }

        Ok(PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        let map: HashMap<&str, &str> = vars.iter().copied().collect();
        move |name| map.get(name).map(|v| v.to_string())
    }

    #[test]
    fn usa_defaults_en_desarrollo() {
        let cfg = DbConfig::from_lookup(lookup(&[]), false).unwrap();
        assert_eq!(cfg.host, "localhost");
        assert_eq!(cfg.port, 5432);
        assert_eq!(cfg.database, "taskmind_db");
        assert!(cfg.url.is_none());
    }

    #[test]
    fn produccion_sin_config_explicita_falla() {
        let err = DbConfig::from_lookup(lookup(&[]), true).unwrap_err();
        assert!(err.to_string().contains("APP_ENV=production"));
    }

    #[test]
    fn produccion_con_todos_los_parametros_arranca() {
        let vars = [
            ("DB_HOST", "db.internal"),
            ("DB_PORT", "6432"),
            ("DB_USER", "tracker"),
            ("DB_PASS", "secret"),
            ("DB_NAME", "taskmind_db"),
        ];
        let cfg = DbConfig::from_lookup(lookup(&vars), true).unwrap();
        assert_eq!(cfg.host, "db.internal");
        assert_eq!(cfg.port, 6432);
    }

    #[test]
    fn database_url_tiene_prioridad() {
        let vars = [
            ("DATABASE_URL", "postgres://u:p@host:5432/db"),
            ("DB_HOST", "ignorado"),
        ];
        let cfg = DbConfig::from_lookup(lookup(&vars), true).unwrap();
        assert_eq!(cfg.url.as_deref(), Some("postgres://u:p@host:5432/db"));
        assert!(cfg.connect_options().is_ok());
    }

    #[test]
    fn db_port_no_numerico_es_error() {
        let err = DbConfig::from_lookup(lookup(&[("DB_PORT", "abc")]), false).unwrap_err();
        assert!(err.to_string().contains("DB_PORT"));
    }
}
