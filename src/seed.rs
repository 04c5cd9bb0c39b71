//! Fixed sample data for a fresh database.
//!
//! Every insert is `ON CONFLICT DO NOTHING`. Only `users.email` is unique, so
//! running the seed twice leaves the users alone but inserts todos and posts again.

use sea_orm::DatabaseConnection;
use tracing::{info, warn};

use crate::db::dao::{DaoContext, DaoResult, NewPost, NewTodo, NewUser};

pub const ALICE_EMAIL: &str = "alice@example.com";
pub const BOB_EMAIL: &str = "bob@example.com";

pub const SEED_USERS: &[NewUser<'static>] = &[
    NewUser {
        name: "Alice Johnson",
        email: ALICE_EMAIL,
    },
    NewUser {
        name: "Bob Smith",
        email: BOB_EMAIL,
    },
];

pub const SEED_TODOS: &[NewTodo<'static>] = &[
    NewTodo {
        title: "Learn Drizzle ORM",
        completed: true,
    },
    NewTodo {
        title: "Build a REST API",
        completed: true,
    },
    NewTodo {
        title: "Deploy to Embr",
        completed: true,
    },
    NewTodo {
        title: "Write documentation",
        completed: false,
    },
    NewTodo {
        title: "Add more features",
        completed: false,
    },
];

struct SeedPost {
    title: &'static str,
    content: &'static str,
    published: bool,
    author_email: &'static str,
}

const SEED_POSTS: &[SeedPost] = &[
    SeedPost {
        title: "Getting Started with Drizzle",
        content: "Drizzle ORM is a lightweight TypeScript ORM...",
        published: true,
        author_email: ALICE_EMAIL,
    },
    SeedPost {
        title: "Best Practices for Node.js",
        content: "Here are some tips for building Node.js applications...",
        published: true,
        author_email: BOB_EMAIL,
    },
    SeedPost {
        title: "Draft: Advanced Topics",
        content: "Coming soon: advanced database optimization techniques...",
        published: false,
        author_email: ALICE_EMAIL,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedReport {
    pub users_inserted: u64,
    pub todos_inserted: u64,
    /// `None` when the posts were skipped because an author is missing.
    pub posts_inserted: Option<u64>,
}

pub async fn run(db: &DatabaseConnection) -> DaoResult<SeedReport> {
    info!("seeding database");
    let daos = DaoContext::new(db);

    let users_inserted = daos.user().insert_ignoring_conflicts(SEED_USERS).await?;
    info!(count = users_inserted, "inserted users");

    let todos_inserted = daos.todo().insert_ignoring_conflicts(SEED_TODOS).await?;
    info!(count = todos_inserted, "inserted todos");

    let users = daos.user().list_all().await?;
    let id_for = |email: &str| users.iter().find(|u| u.email == email).map(|u| u.id);

    let (Some(alice_id), Some(bob_id)) = (id_for(ALICE_EMAIL), id_for(BOB_EMAIL)) else {
        warn!("seed users missing after insert; skipping posts");
        return Ok(SeedReport {
            users_inserted,
            todos_inserted,
            posts_inserted: None,
        });
    };

    let posts: Vec<NewPost<'_>> = SEED_POSTS
        .iter()
        .map(|post| NewPost {
            title: post.title,
            content: Some(post.content),
            published: post.published,
            author_id: if post.author_email == ALICE_EMAIL {
                alice_id
            } else {
                bob_id
            },
        })
        .collect();
    let posts_inserted = daos.post().insert_ignoring_conflicts(&posts).await?;
    info!(count = posts_inserted, "inserted posts");

    Ok(SeedReport {
        users_inserted,
        todos_inserted,
        posts_inserted: Some(posts_inserted),
    })
}
