//! # conduit-db
//!
//! Storage adapters implementing the repository traits from `conduit-core`.
//!
//! ## Overview
//!
//! - PostgreSQL connection pool management and migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - PostgreSQL repository implementations
//! - In-memory repository implementations with the same uniqueness rules
//!
//! ## Usage
//!
//! ```rust,ignore
//! use conduit_db::{create_pool, run_migrations, DatabaseConfig, PgUserRepository};
//! use conduit_core::UserRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::new("postgres://localhost/conduit", 20, 5)).await?;
//!     run_migrations(&pool, "./migrations").await?;
//!     let users = PgUserRepository::new(pool);
//!     let everyone = users.find_all().await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::{InMemoryArticleRepository, InMemoryUserRepository};
pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{PgArticleRepository, PgUserRepository};
