//! Database models - SQLx-compatible structs for PostgreSQL tables

mod article;
mod user;

pub use article::{ArticleModel, AuthorSummaryModel};
pub use user::UserModel;
