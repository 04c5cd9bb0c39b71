use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::get};
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::Serialize;

use crate::{
    db::entities::user, error::AppError, routes::posts::PostResponse, services::ServiceContext,
    services::user_service::UserWithPosts, state::AppState,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Debug, Serialize)]
pub struct UserWithPostsResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    pub posts: Vec<PostResponse>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/users", get(list_users))
        .with_state(state)
}

async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<UserWithPostsResponse>>, AppError> {
    let users = ServiceContext::from_state(state.as_ref())
        .user()
        .list_with_posts()
        .await?;
    Ok(Json(users.into_iter().map(UserWithPostsResponse::from).collect()))
}

impl From<user::Model> for UserResponse {
    fn from(model: user::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            created_at: model.created_at,
        }
    }
}

impl From<UserWithPosts> for UserWithPostsResponse {
    fn from(entry: UserWithPosts) -> Self {
        Self {
            user: entry.user.into(),
            posts: entry.posts.into_iter().map(PostResponse::from).collect(),
        }
    }
}
