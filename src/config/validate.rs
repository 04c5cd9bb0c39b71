use anyhow::{Result, bail};

use super::AppConfig;

pub fn validate(cfg: &AppConfig) -> Result<()> {
    let mut errors: Vec<String> = Vec::new();

    if cfg.host.trim().is_empty() {
        errors.push("HOST must not be empty".to_string());
    }

    if cfg.database.url.trim().is_empty() {
        errors.push("DATABASE_URL must not be empty".to_string());
    } else if !is_postgres_url(&cfg.database.url) {
        errors.push("DATABASE_URL must use the postgres:// or postgresql:// scheme".to_string());
    }

    if cfg.database.max_connections == 0 {
        errors.push("DB_MAX_CONNS must be > 0".to_string());
    }

    if cfg.database.min_idle > cfg.database.max_connections {
        errors.push(format!(
            "DB_MIN_IDLE ({}) must be <= DB_MAX_CONNS ({})",
            cfg.database.min_idle, cfg.database.max_connections
        ));
    }

    if cfg.database.connect_timeout_secs == 0 {
        errors.push("DB_CONNECT_TIMEOUT_SECS must be > 0".to_string());
    }

    if errors.is_empty() {
        return Ok(());
    }

    bail!("invalid app config:\n- {}", errors.join("\n- "))
}

fn is_postgres_url(url: &str) -> bool {
    let normalized = url.trim().to_ascii_lowercase();
    normalized.starts_with("postgres://") || normalized.starts_with("postgresql://")
}

#[cfg(test)]
mod tests {
    use super::validate;
    use crate::config::AppConfig;

    #[test]
    fn accepts_defaults() {
        validate(&AppConfig::default()).expect("defaults should validate");
    }

    #[test]
    fn rejects_non_postgres_url() {
        let mut cfg = AppConfig::default();
        cfg.database.url = "mysql://localhost/app".to_string();

        let err = validate(&cfg).expect_err("mysql url should fail");
        assert!(err.to_string().contains("postgres://"));
    }

    #[test]
    fn collects_every_problem() {
        let mut cfg = AppConfig::default();
        cfg.host = " ".to_string();
        cfg.database.max_connections = 1;
        cfg.database.min_idle = 4;

        let message = validate(&cfg).expect_err("config should fail").to_string();
        assert!(message.contains("HOST must not be empty"));
        assert!(message.contains("DB_MIN_IDLE (4) must be <= DB_MAX_CONNS (1)"));
    }

    #[test]
    fn labels_fallback_database_url_as_not_set() {
        let mut cfg = AppConfig::default();
        assert_eq!(cfg.database_url_label(), "(not set)");

        cfg.database.url_from_env = true;
        assert_eq!(cfg.database_url_label(), "(set)");
    }
}
