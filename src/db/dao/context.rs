use sea_orm::DatabaseConnection;

use super::{DaoBase, PostDao, StatsDao, TodoDao, UserDao};

#[derive(Clone)]
pub struct DaoContext {
    db: DatabaseConnection,
}

impl DaoContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    pub fn user(&self) -> UserDao {
        DaoBase::new(&self.db)
    }

    pub fn todo(&self) -> TodoDao {
        DaoBase::new(&self.db)
    }

    pub fn post(&self) -> PostDao {
        DaoBase::new(&self.db)
    }

    pub fn stats(&self) -> StatsDao {
        StatsDao::new(&self.db)
    }
}
