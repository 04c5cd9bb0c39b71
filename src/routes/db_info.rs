use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::{
    db::dao::TableCounts, error::AppError, services::ServiceContext, state::AppState,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DbInfoResponse {
    pub tables: TableCounts,
    pub database_url: &'static str,
    pub timestamp: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/db/info", get(db_info))
        .with_state(state)
}

async fn db_info(State(state): State<Arc<AppState>>) -> Result<Json<DbInfoResponse>, AppError> {
    let system = ServiceContext::from_state(state.as_ref()).system();
    let tables = system.table_counts().await?;
    Ok(Json(DbInfoResponse {
        tables,
        database_url: state.config.database_url_label(),
        timestamp: super::now_timestamp(),
    }))
}
