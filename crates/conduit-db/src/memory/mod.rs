//! In-memory repository implementations
//!
//! Backed by `tokio::sync::RwLock`, these adapters enforce the same uniqueness
//! rules as the PostgreSQL schema. Used by service and router tests, and by
//! any deployment that does not need durable storage.

mod article;
mod user;

pub use article::InMemoryArticleRepository;
pub use user::InMemoryUserRepository;
