use std::{path::PathBuf, sync::Arc};

use axum::Router;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};

use crate::{config::AppConfig, routes::app, state::AppState};

/// Config that never touches the process environment.
pub fn test_config() -> AppConfig {
    let mut cfg = AppConfig::default();
    cfg.database.url_from_env = true;
    cfg.static_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public");
    cfg
}

pub fn test_app(db: DatabaseConnection) -> Router {
    app(AppState::new(test_config(), db))
}

pub fn empty_mock_app() -> Router {
    test_app(MockDatabase::new(DatabaseBackend::Postgres).into_connection())
}
