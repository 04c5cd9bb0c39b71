use sea_orm::{DatabaseConnection, Order, Set, sea_query::OnConflict};

use super::{DaoBase, DaoResult};
use crate::db::entities::{post, prelude::Post};

#[derive(Debug, Clone, Copy)]
pub struct NewPost<'a> {
    pub title: &'a str,
    pub content: Option<&'a str>,
    pub published: bool,
    pub author_id: i32,
}

#[derive(Clone)]
pub struct PostDao {
    db: DatabaseConnection,
}

impl DaoBase for PostDao {
    type Entity = Post;

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl PostDao {
    pub async fn list_newest_first(&self) -> DaoResult<Vec<post::Model>> {
        self.find_all(None).await
    }

    pub async fn list_all(&self) -> DaoResult<Vec<post::Model>> {
        self.find_all(Some((post::Column::Id, Order::Asc))).await
    }

    pub async fn insert_ignoring_conflicts(&self, posts: &[NewPost<'_>]) -> DaoResult<u64> {
        let rows = posts
            .iter()
            .map(|new| post::ActiveModel {
                title: Set(new.title.to_string()),
                content: Set(new.content.map(str::to_string)),
                published: Set(new.published),
                author_id: Set(new.author_id),
                ..Default::default()
            })
            .collect();
        self.insert_many_ignoring(rows, OnConflict::new().do_nothing().to_owned())
            .await
    }
}
