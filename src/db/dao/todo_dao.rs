use sea_orm::{DatabaseConnection, Set, sea_query::OnConflict};

use super::{DaoBase, DaoResult};
use crate::db::entities::{prelude::Todo, todo};

#[derive(Debug, Clone, Copy)]
pub struct NewTodo<'a> {
    pub title: &'a str,
    pub completed: bool,
}

#[derive(Clone)]
pub struct TodoDao {
    db: DatabaseConnection,
}

impl DaoBase for TodoDao {
    type Entity = Todo;

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl TodoDao {
    pub async fn create_todo(&self, title: &str) -> DaoResult<todo::Model> {
        let model = todo::ActiveModel {
            title: Set(title.to_string()),
            completed: Set(false),
            priority: Set(0),
            ..Default::default()
        };
        self.create(model).await
    }

    pub async fn list_newest_first(&self) -> DaoResult<Vec<todo::Model>> {
        self.find_all(None).await
    }

    pub async fn update_todo(
        &self,
        id: i32,
        title: Option<String>,
        completed: Option<bool>,
    ) -> DaoResult<todo::Model> {
        self.update(id, move |active| {
            if let Some(title) = title {
                active.title = Set(title);
            }
            if let Some(completed) = completed {
                active.completed = Set(completed);
            }
        })
        .await
    }

    pub async fn delete_todo(&self, id: i32) -> DaoResult<()> {
        self.delete(id).await.map(|_| ())
    }

    /// Titles carry no unique constraint, so nothing is ever skipped here and
    /// repeated calls insert duplicates.
    pub async fn insert_ignoring_conflicts(&self, todos: &[NewTodo<'_>]) -> DaoResult<u64> {
        let rows = todos
            .iter()
            .map(|new| todo::ActiveModel {
                title: Set(new.title.to_string()),
                completed: Set(new.completed),
                ..Default::default()
            })
            .collect();
        self.insert_many_ignoring(rows, OnConflict::new().do_nothing().to_owned())
            .await
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, FixedOffset, TimeZone};
    use sea_orm::{
        DatabaseBackend, DbErr, MockDatabase, MockExecResult, prelude::DateTimeWithTimeZone,
        sea_query::ValueType,
    };

    use crate::db::entities::todo;

    use super::{NewTodo, TodoDao};
    use crate::db::dao::{DaoBase, DaoLayerError};

    fn ts() -> chrono::DateTime<chrono::FixedOffset> {
        FixedOffset::east_opt(0)
            .expect("offset should be valid")
            .with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
            .single()
            .expect("timestamp should be valid")
    }

    fn todo_model(id: i32, title: &str, completed: bool) -> todo::Model {
        let now = ts();
        todo::Model {
            id,
            title: title.to_string(),
            completed,
            priority: 0,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn create_todo_returns_inserted_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[todo_model(1, "Test", false)]])
            .into_connection();
        let dao = TodoDao::new(&db);

        let created = dao.create_todo("Test").await.expect("insert should succeed");
        assert_eq!(created.id, 1);
        assert_eq!(created.title, "Test");
        assert!(!created.completed);
        assert_eq!(created.priority, 0);
    }

    #[tokio::test]
    async fn update_todo_propagates_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<todo::Model>::new()])
            .into_connection();
        let dao = TodoDao::new(&db);

        let err = dao
            .update_todo(42, None, Some(true))
            .await
            .expect_err("update should fail");
        assert!(matches!(err, DaoLayerError::NotFound { id: 42, .. }));
    }

    #[tokio::test]
    async fn update_todo_returns_row_written_by_store() {
        let existing = todo_model(7, "Write docs", false);
        let mut updated = existing.clone();
        updated.completed = true;
        updated.updated_at = ts() + Duration::seconds(5);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[existing], [updated]])
            .into_connection();
        let dao = TodoDao::new(&db);

        let result = dao
            .update_todo(7, None, Some(true))
            .await
            .expect("update should succeed");
        assert!(result.completed);
        assert_eq!(result.title, "Write docs");
        assert!(result.updated_at > result.created_at);
    }

    #[tokio::test]
    async fn update_todo_writes_a_fresh_updated_at() {
        let stale = FixedOffset::east_opt(0)
            .expect("offset should be valid")
            .with_ymd_and_hms(2000, 1, 1, 0, 0, 0)
            .single()
            .expect("timestamp should be valid");
        let mut existing = todo_model(7, "Write docs", false);
        existing.created_at = stale;
        existing.updated_at = stale;
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[existing.clone()], [existing]])
            .into_connection();
        let dao = TodoDao::new(&db);

        dao.update_todo(7, Some("Write better docs".to_string()), None)
            .await
            .expect("update should succeed");

        let log = db.into_transaction_log();
        let update = log
            .iter()
            .flat_map(|txn| txn.statements())
            .find(|stmt| stmt.sql.starts_with("UPDATE"))
            .expect("an UPDATE should be issued");
        assert!(update.sql.contains(r#""updated_at" = "#));
        assert!(!update.sql.contains(r#""created_at" = "#));

        let written: Vec<DateTimeWithTimeZone> = update
            .values
            .iter()
            .flat_map(|values| values.0.iter().cloned())
            .filter_map(|value| <DateTimeWithTimeZone as ValueType>::try_from(value).ok())
            .collect();
        assert_eq!(written.len(), 1);
        assert!(written[0] > stale);
    }

    #[tokio::test]
    async fn delete_todo_reports_missing_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();
        let dao = TodoDao::new(&db);

        let err = dao.delete_todo(9).await.expect_err("delete should fail");
        assert!(matches!(err, DaoLayerError::NotFound { id: 9, .. }));
    }

    #[tokio::test]
    async fn list_maps_database_errors() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("select failed".to_string())])
            .into_connection();
        let dao = TodoDao::new(&db);

        let err = dao.list_newest_first().await.expect_err("list should fail");
        assert!(matches!(err, DaoLayerError::Db(_)));
    }

    #[tokio::test]
    async fn insert_ignoring_conflicts_skips_empty_input() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let dao = TodoDao::new(&db);

        let inserted = dao
            .insert_ignoring_conflicts(&[])
            .await
            .expect("empty insert should succeed");
        assert_eq!(inserted, 0);
        assert!(db.into_transaction_log().is_empty());
    }

    #[tokio::test]
    async fn insert_ignoring_conflicts_uses_on_conflict_do_nothing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 2,
            }])
            .into_connection();
        let dao = TodoDao::new(&db);

        let inserted = dao
            .insert_ignoring_conflicts(&[
                NewTodo {
                    title: "a",
                    completed: true,
                },
                NewTodo {
                    title: "b",
                    completed: false,
                },
            ])
            .await
            .expect("insert should succeed");
        assert_eq!(inserted, 2);

        let log = format!("{:?}", db.into_transaction_log());
        assert!(log.contains("ON CONFLICT"));
        assert!(log.contains("DO NOTHING"));
    }
}
