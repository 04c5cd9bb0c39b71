use sea_orm::{
    ConnectionTrait, DatabaseConnection, EntityName, FromQueryResult, Statement,
};
use serde::Serialize;

use super::DaoResult;
use crate::db::entities::prelude::{Post, Todo, User};

#[derive(Debug, FromQueryResult)]
struct CountRow {
    count: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableCounts {
    pub todos: i64,
    pub users: i64,
    pub posts: i64,
}

/// Raw SQL helpers that bypass the entity query builder.
#[derive(Clone)]
pub struct StatsDao {
    db: DatabaseConnection,
}

impl StatsDao {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    pub async fn ping(&self) -> DaoResult<()> {
        self.db.execute_unprepared("SELECT 1").await?;
        Ok(())
    }

    pub async fn table_counts(&self) -> DaoResult<TableCounts> {
        Ok(TableCounts {
            todos: self.count_rows(Todo.table_name()).await?,
            users: self.count_rows(User.table_name()).await?,
            posts: self.count_rows(Post.table_name()).await?,
        })
    }

    // `table` only ever comes from entity metadata.
    async fn count_rows(&self, table: &str) -> DaoResult<i64> {
        let stmt = Statement::from_string(
            self.db.get_database_backend(),
            format!("SELECT COUNT(*) AS count FROM {table}"),
        );
        let row = CountRow::find_by_statement(stmt).one(&self.db).await?;
        Ok(row.map(|row| row.count).unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, Value};

    use super::{StatsDao, TableCounts};
    use crate::db::dao::DaoLayerError;

    fn count_row(count: i64) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([("count", Value::from(count))])
    }

    #[tokio::test]
    async fn table_counts_reads_each_table_in_order() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[count_row(5)], [count_row(2)], [count_row(3)]])
            .into_connection();
        let dao = StatsDao::new(&db);

        let counts = dao.table_counts().await.expect("counts should load");
        assert_eq!(
            counts,
            TableCounts {
                todos: 5,
                users: 2,
                posts: 3
            }
        );

        let log = format!("{:?}", db.into_transaction_log());
        let todos = log.find("FROM todos").expect("todos counted");
        let users = log.find("FROM users").expect("users counted");
        let posts = log.find("FROM posts").expect("posts counted");
        assert!(todos < users && users < posts);
    }

    #[tokio::test]
    async fn table_counts_stops_at_first_failure() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("relation \"todos\" does not exist".to_string())])
            .into_connection();
        let dao = StatsDao::new(&db);

        let err = dao.table_counts().await.expect_err("counts should fail");
        assert!(matches!(err, DaoLayerError::Db(_)));
        assert!(err.to_string().contains("does not exist"));
    }

    #[tokio::test]
    async fn ping_runs_select_one() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();
        let dao = StatsDao::new(&db);

        dao.ping().await.expect("ping should succeed");
    }

    #[tokio::test]
    async fn ping_surfaces_connection_errors() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors([DbErr::Custom("connection refused".to_string())])
            .into_connection();
        let dao = StatsDao::new(&db);

        let err = dao.ping().await.expect_err("ping should fail");
        assert!(err.to_string().contains("connection refused"));
    }
}
