//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in conduit-core.

mod article;
mod error;
mod user;

pub use article::PgArticleRepository;
pub use user::PgUserRepository;
