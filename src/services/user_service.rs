use std::collections::HashMap;

use crate::{
    db::dao::{PostDao, UserDao},
    db::entities::{post, user},
    error::AppError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct UserWithPosts {
    pub user: user::Model,
    pub posts: Vec<post::Model>,
}

#[derive(Clone)]
pub struct UserService {
    user_dao: UserDao,
    post_dao: PostDao,
}

impl UserService {
    pub fn new(user_dao: UserDao, post_dao: PostDao) -> Self {
        Self { user_dao, post_dao }
    }

    /// Two independent reads joined in memory; not a consistent snapshot.
    pub async fn list_with_posts(&self) -> Result<Vec<UserWithPosts>, AppError> {
        let users = self.user_dao.list_all().await?;
        let posts = self.post_dao.list_all().await?;
        Ok(group_posts_by_author(users, posts))
    }
}

/// Keeps user order and, within a user, post order. Posts without a matching
/// user are dropped.
pub fn group_posts_by_author(
    users: Vec<user::Model>,
    posts: Vec<post::Model>,
) -> Vec<UserWithPosts> {
    let mut by_author: HashMap<i32, Vec<post::Model>> = HashMap::new();
    for post in posts {
        by_author.entry(post.author_id).or_default().push(post);
    }

    users
        .into_iter()
        .map(|user| {
            let posts = by_author.remove(&user.id).unwrap_or_default();
            UserWithPosts { user, posts }
        })
        .collect()
}
