use crate::db::dao::{DaoResult, StatsDao, TableCounts};

#[derive(Clone)]
pub struct SystemService {
    stats_dao: StatsDao,
}

impl SystemService {
    pub fn new(stats_dao: StatsDao) -> Self {
        Self { stats_dao }
    }

    pub async fn check_database(&self) -> DaoResult<()> {
        self.stats_dao.ping().await
    }

    pub async fn table_counts(&self) -> DaoResult<TableCounts> {
        self.stats_dao.table_counts().await
    }
}
