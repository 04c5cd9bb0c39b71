pub mod defaults;
pub mod validate;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub database: DatabaseConfig,
    pub static_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    /// False when `url` is the debug-build fallback rather than `DATABASE_URL`.
    pub url_from_env: bool,
    pub max_connections: u32,
    pub min_idle: u32,
    pub connect_timeout_secs: u64,
    pub sync_schema: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: defaults::DEFAULT_HOST.to_string(),
            port: defaults::DEFAULT_PORT,
            log_level: defaults::DEFAULT_RUST_LOG.to_string(),
            database: DatabaseConfig::default(),
            static_dir: PathBuf::from(defaults::DEFAULT_STATIC_DIR),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: defaults::DEFAULT_DATABASE_URL.to_string(),
            url_from_env: false,
            max_connections: defaults::DEFAULT_DB_MAX_CONNECTIONS,
            min_idle: defaults::DEFAULT_DB_MIN_IDLE,
            connect_timeout_secs: defaults::DEFAULT_DB_CONNECT_TIMEOUT_SECS,
            sync_schema: defaults::DEFAULT_DB_SYNC_SCHEMA,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        // Load .env from crate root (falls back to current dir if missing)
        let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
        let _ = dotenvy::from_filename(manifest_dir.join(".env")).or_else(|_| dotenvy::dotenv());

        let host = std::env::var("HOST").unwrap_or_else(|_| defaults::DEFAULT_HOST.to_string());
        let port = match std::env::var("PORT") {
            Ok(val) => val.parse::<u16>().context("PORT must be a valid u16")?,
            Err(_) => defaults::DEFAULT_PORT,
        };
        let log_level =
            std::env::var("RUST_LOG").unwrap_or_else(|_| defaults::DEFAULT_RUST_LOG.to_string());

        let (url, url_from_env) = match std::env::var("DATABASE_URL") {
            Ok(val) => (val, true),
            Err(_) if cfg!(debug_assertions) => (defaults::DEFAULT_DATABASE_URL.to_string(), false),
            Err(err) => {
                Err(anyhow::anyhow!(err)).context("DATABASE_URL is required in release builds")?
            }
        };

        let database = DatabaseConfig {
            url,
            url_from_env,
            max_connections: parse_or("DB_MAX_CONNS", defaults::DEFAULT_DB_MAX_CONNECTIONS)?,
            min_idle: parse_or("DB_MIN_IDLE", defaults::DEFAULT_DB_MIN_IDLE)?,
            connect_timeout_secs: parse_or(
                "DB_CONNECT_TIMEOUT_SECS",
                defaults::DEFAULT_DB_CONNECT_TIMEOUT_SECS,
            )?,
            sync_schema: parse_or("DB_SYNC_SCHEMA", defaults::DEFAULT_DB_SYNC_SCHEMA)?,
        };

        let static_dir = std::env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(defaults::DEFAULT_STATIC_DIR));

        let cfg = Self {
            host,
            port,
            log_level,
            database,
            static_dir,
        };
        validate::validate(&cfg)?;
        Ok(cfg)
    }

    pub fn database_url_label(&self) -> &'static str {
        if self.database.url_from_env {
            "(set)"
        } else {
            "(not set)"
        }
    }
}

fn parse_or<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(val) => val
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value: {val:?}")),
        Err(_) => Ok(default),
    }
}
