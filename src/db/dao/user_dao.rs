use sea_orm::{DatabaseConnection, Order, Set, sea_query::OnConflict};

use super::{DaoBase, DaoResult};
use crate::db::entities::{prelude::User, user};

#[derive(Debug, Clone, Copy)]
pub struct NewUser<'a> {
    pub name: &'a str,
    pub email: &'a str,
}

#[derive(Clone)]
pub struct UserDao {
    db: DatabaseConnection,
}

impl DaoBase for UserDao {
    type Entity = User;

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl UserDao {
    pub async fn list_all(&self) -> DaoResult<Vec<user::Model>> {
        self.find_all(Some((user::Column::Id, Order::Asc))).await
    }

    /// Rows whose email already exists are skipped by the store.
    pub async fn insert_ignoring_conflicts(&self, users: &[NewUser<'_>]) -> DaoResult<u64> {
        let rows = users
            .iter()
            .map(|new| user::ActiveModel {
                name: Set(new.name.to_string()),
                email: Set(new.email.to_string()),
                ..Default::default()
            })
            .collect();
        self.insert_many_ignoring(
            rows,
            OnConflict::column(user::Column::Email)
                .do_nothing()
                .to_owned(),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    use crate::db::entities::user;

    use super::{NewUser, UserDao};
    use crate::db::dao::DaoBase;

    fn user_model(id: i32, email: &str) -> user::Model {
        user::Model {
            id,
            name: "Someone".to_string(),
            email: email.to_string(),
            created_at: FixedOffset::east_opt(0)
                .expect("offset should be valid")
                .with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
                .single()
                .expect("timestamp should be valid"),
        }
    }

    #[tokio::test]
    async fn list_all_returns_rows_in_store_order() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[
                user_model(1, "alice@example.com"),
                user_model(2, "bob@example.com"),
            ]])
            .into_connection();
        let dao = UserDao::new(&db);

        let users = dao.list_all().await.expect("query should succeed");
        let ids: Vec<i32> = users.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn insert_ignoring_conflicts_reports_rows_actually_inserted() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();
        let dao = UserDao::new(&db);

        let inserted = dao
            .insert_ignoring_conflicts(&[
                NewUser {
                    name: "Alice",
                    email: "alice@example.com",
                },
                NewUser {
                    name: "Bob",
                    email: "bob@example.com",
                },
            ])
            .await
            .expect("insert should succeed");
        assert_eq!(inserted, 1);

        let log = format!("{:?}", db.into_transaction_log());
        assert!(log.contains(r#"ON CONFLICT (\"email\") DO NOTHING"#));
    }
}
