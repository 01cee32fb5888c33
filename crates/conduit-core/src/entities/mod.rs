//! Domain entities - core business objects

mod article;
mod statistics;
mod user;

pub use article::{Article, AuthorSummary};
pub use statistics::{format_iso_millis, RosterEntry, UserStatistics};
pub use user::{NewUser, User, UserChanges};
