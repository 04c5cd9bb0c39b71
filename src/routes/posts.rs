use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::get};
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::Serialize;

use crate::{
    db::entities::post, error::AppError, routes::users::UserResponse, services::ServiceContext,
    services::post_service::PostWithAuthor, state::AppState,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: i32,
    pub title: String,
    pub content: Option<String>,
    pub published: bool,
    pub author_id: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum AuthorResponse {
    Known(UserResponse),
    Unknown {
        name: &'static str,
        email: &'static str,
    },
}

impl AuthorResponse {
    pub fn unknown() -> Self {
        Self::Unknown {
            name: "Unknown",
            email: "",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PostWithAuthorResponse {
    #[serde(flatten)]
    pub post: PostResponse,
    pub author: AuthorResponse,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/posts", get(list_posts))
        .with_state(state)
}

async fn list_posts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PostWithAuthorResponse>>, AppError> {
    let posts = ServiceContext::from_state(state.as_ref())
        .post()
        .list_with_authors()
        .await?;
    Ok(Json(posts.into_iter().map(PostWithAuthorResponse::from).collect()))
}

impl From<post::Model> for PostResponse {
    fn from(model: post::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            content: model.content,
            published: model.published,
            author_id: model.author_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<PostWithAuthor> for PostWithAuthorResponse {
    fn from(entry: PostWithAuthor) -> Self {
        let author = match entry.author {
            Some(user) => AuthorResponse::Known(user.into()),
            None => AuthorResponse::unknown(),
        };
        Self {
            post: entry.post.into(),
            author,
        }
    }
}
