#[allow(unused_imports)]
pub mod prelude {
    pub use super::post::Entity as Post;
    pub use super::todo::Entity as Todo;
    pub use super::user::Entity as User;
}

pub mod post;
pub mod todo;
pub mod user;
