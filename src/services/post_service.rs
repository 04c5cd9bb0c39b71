use std::collections::HashMap;

use crate::{
    db::dao::{PostDao, UserDao},
    db::entities::{post, user},
    error::AppError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct PostWithAuthor {
    pub post: post::Model,
    /// `None` when the referenced user could not be found.
    pub author: Option<user::Model>,
}

#[derive(Clone)]
pub struct PostService {
    post_dao: PostDao,
    user_dao: UserDao,
}

impl PostService {
    pub fn new(post_dao: PostDao, user_dao: UserDao) -> Self {
        Self { post_dao, user_dao }
    }

    /// Newest posts first. Two independent reads joined in memory; not a
    /// consistent snapshot.
    pub async fn list_with_authors(&self) -> Result<Vec<PostWithAuthor>, AppError> {
        let posts = self.post_dao.list_newest_first().await?;
        let users = self.user_dao.list_all().await?;
        Ok(attach_authors(posts, users))
    }
}

pub fn attach_authors(posts: Vec<post::Model>, users: Vec<user::Model>) -> Vec<PostWithAuthor> {
    let users: HashMap<i32, user::Model> = users.into_iter().map(|u| (u.id, u)).collect();

    posts
        .into_iter()
        .map(|post| {
            let author = users.get(&post.author_id).cloned();
            PostWithAuthor { post, author }
        })
        .collect()
}
