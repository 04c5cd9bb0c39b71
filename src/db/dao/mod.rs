pub mod base;
pub mod base_traits;
mod context;
pub mod error;
pub mod post_dao;
pub mod stats_dao;
pub mod todo_dao;
pub mod user_dao;

pub use base::DaoBase;
pub use base_traits::{HasCreatedAtColumn, HasIdColumn, TimestampedActiveModel};
pub use context::DaoContext;
pub use error::{DaoLayerError, DaoResult};
pub use post_dao::{NewPost, PostDao};
pub use stats_dao::{StatsDao, TableCounts};
pub use todo_dao::{NewTodo, TodoDao};
pub use user_dao::{NewUser, UserDao};
