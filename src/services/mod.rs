pub mod context;
pub mod post_service;
pub mod system_service;
pub mod todo_service;
pub mod user_service;

pub use context::ServiceContext;
