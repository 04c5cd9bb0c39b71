use crate::{
    db::dao::{DaoLayerError, TodoDao},
    db::entities::todo,
    error::AppError,
};

pub const TODO_NOT_FOUND: &str = "Todo not found";

#[derive(Clone)]
pub struct TodoService {
    todo_dao: TodoDao,
}

impl TodoService {
    pub fn new(todo_dao: TodoDao) -> Self {
        Self { todo_dao }
    }

    pub async fn list(&self) -> Result<Vec<todo::Model>, AppError> {
        Ok(self.todo_dao.list_newest_first().await?)
    }

    pub async fn create(&self, title: &str) -> Result<todo::Model, AppError> {
        Ok(self.todo_dao.create_todo(title).await?)
    }

    /// Store failures are reported as "not found" too; the cause is only logged.
    pub async fn update(
        &self,
        id: i32,
        title: Option<String>,
        completed: Option<bool>,
    ) -> Result<todo::Model, AppError> {
        self.todo_dao
            .update_todo(id, title, completed)
            .await
            .map_err(|err| mask_as_not_found("update", id, err))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.todo_dao
            .delete_todo(id)
            .await
            .map_err(|err| mask_as_not_found("delete", id, err))
    }
}

fn mask_as_not_found(op: &'static str, id: i32, err: DaoLayerError) -> AppError {
    match &err {
        DaoLayerError::NotFound { .. } => {
            tracing::debug!(op, id, "todo not found");
        }
        DaoLayerError::Db(db_err) => {
            tracing::warn!(op, id, error = %db_err, "todo write failed; reporting as not found");
        }
    }
    AppError::not_found(TODO_NOT_FOUND)
}
