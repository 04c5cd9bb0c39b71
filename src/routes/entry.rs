use std::sync::Arc;

use axum::{Router, middleware};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{
    middleware::{catch_panic_layer, json_error_middleware},
    state::AppState,
};

use super::{db_info, health, posts, todos, users};

pub fn router(state: Arc<AppState>) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .merge(health::router(state.clone()))
        .merge(todos::router(state.clone()))
        .merge(users::router(state.clone()))
        .merge(posts::router(state.clone()))
        .merge(db_info::router(state))
        .fallback_service(static_files)
}

/// The router with the error, panic and trace layers the server runs with.
pub fn app(state: Arc<AppState>) -> Router {
    router(state)
        .layer(middleware::from_fn(json_error_middleware))
        .layer(catch_panic_layer())
        .layer(TraceLayer::new_for_http())
}
