use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    routing::{get, patch},
};
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};

use crate::{
    db::entities::todo,
    error::AppError,
    services::{ServiceContext, todo_service::TODO_NOT_FOUND},
    state::AppState,
};

#[derive(Debug, Default, Deserialize)]
pub struct CreateTodoRequest {
    pub title: Option<String>,
}

/// `None` means the field was absent; `Some(None)` means it was sent as `null`.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTodoRequest {
    #[serde(default, deserialize_with = "present")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub completed: Option<Option<bool>>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoResponse {
    pub id: i32,
    pub title: String,
    pub completed: bool,
    pub priority: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/todos", get(list_todos).post(create_todo))
        .route("/api/todos/{id}", patch(update_todo).delete(delete_todo))
        .with_state(state)
}

async fn list_todos(State(state): State<Arc<AppState>>) -> Result<Json<Vec<TodoResponse>>, AppError> {
    let todos = ServiceContext::from_state(state.as_ref()).todo().list().await?;
    Ok(Json(todos.into_iter().map(TodoResponse::from).collect()))
}

async fn create_todo(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<TodoResponse>), AppError> {
    let body: CreateTodoRequest = parse_body(&headers, &body)?;
    let title = require_title(body.title.as_deref())?;
    let todo = ServiceContext::from_state(state.as_ref())
        .todo()
        .create(title)
        .await?;
    Ok((StatusCode::CREATED, Json(todo.into())))
}

async fn update_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<TodoResponse>, AppError> {
    let id = parse_todo_id(&id)?;
    let (title, completed) = todo_changes(parse_body(&headers, &body)?)?;
    let todo = ServiceContext::from_state(state.as_ref())
        .todo()
        .update(id, title, completed)
        .await?;
    Ok(Json(todo.into()))
}

async fn delete_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_todo_id(&id)?;
    ServiceContext::from_state(state.as_ref())
        .todo()
        .delete(id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Bodies that are empty or not labelled as JSON read as `{}`.
fn parse_body<T>(headers: &HeaderMap, body: &Bytes) -> Result<T, AppError>
where
    T: DeserializeOwned + Default,
{
    let is_json = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_ascii_lowercase().contains("json"))
        .unwrap_or(false);
    if !is_json || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body)
        .map_err(|err| AppError::bad_request(format!("invalid JSON body: {err}")))
}

// The columns are NOT NULL, so an explicit null can never be written.
fn todo_changes(body: UpdateTodoRequest) -> Result<(Option<String>, Option<bool>), AppError> {
    match (body.title, body.completed) {
        (Some(None), _) | (_, Some(None)) => {
            tracing::debug!("todo update with null field rejected");
            Err(AppError::not_found(TODO_NOT_FOUND))
        }
        (title, completed) => Ok((title.flatten(), completed.flatten())),
    }
}

// Only absence and the empty string are rejected; whitespace is kept verbatim.
fn require_title(title: Option<&str>) -> Result<&str, AppError> {
    match title {
        Some(title) if !title.is_empty() => Ok(title),
        _ => Err(AppError::bad_request("title is required")),
    }
}

// An id that is not an integer can never match a row.
fn parse_todo_id(raw: &str) -> Result<i32, AppError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| AppError::not_found(TODO_NOT_FOUND))
}

impl From<todo::Model> for TodoResponse {
    fn from(model: todo::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            completed: model.completed,
            priority: model.priority,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Bytes,
        http::{HeaderMap, HeaderValue, StatusCode, header},
    };

    use super::{
        CreateTodoRequest, UpdateTodoRequest, parse_body, parse_todo_id, require_title,
        todo_changes,
    };

    fn json_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers
    }

    #[test]
    fn title_must_be_present_and_non_empty() {
        assert_eq!(
            require_title(None).expect_err("missing").status(),
            StatusCode::BAD_REQUEST
        );
        assert!(require_title(Some("")).is_err());
        assert_eq!(require_title(Some("  ")).expect("whitespace is kept"), "  ");
        assert_eq!(require_title(Some("Test")).expect("valid"), "Test");
    }

    #[test]
    fn unparsable_ids_are_not_found() {
        assert_eq!(parse_todo_id("12").expect("numeric id"), 12);
        assert_eq!(
            parse_todo_id("abc").expect_err("text id").status(),
            StatusCode::NOT_FOUND
        );
        assert!(parse_todo_id("99999999999").is_err());
    }

    #[test]
    fn missing_or_unlabelled_body_reads_as_empty_object() {
        let body: CreateTodoRequest =
            parse_body(&HeaderMap::new(), &Bytes::from_static(b"{\"title\":\"x\"}"))
                .expect("unlabelled body is ignored");
        assert!(body.title.is_none());

        let body: CreateTodoRequest =
            parse_body(&json_headers(), &Bytes::new()).expect("empty body is allowed");
        assert!(body.title.is_none());
    }

    #[test]
    fn wrongly_typed_fields_are_bad_requests() {
        let err = parse_body::<CreateTodoRequest>(
            &json_headers(),
            &Bytes::from_static(b"{\"title\":5}"),
        )
        .expect_err("number title");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn explicit_null_fields_cannot_be_written() {
        let body: UpdateTodoRequest =
            parse_body(&json_headers(), &Bytes::from_static(b"{\"title\":null}"))
                .expect("null is valid JSON");
        let err = todo_changes(body).expect_err("null title");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);

        let body: UpdateTodoRequest =
            parse_body(&json_headers(), &Bytes::from_static(b"{\"completed\":true}"))
                .expect("valid body");
        assert_eq!(
            todo_changes(body).expect("absent title is fine"),
            (None, Some(true))
        );
    }
}
