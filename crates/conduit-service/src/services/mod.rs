//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] for the duration of a call.

pub mod auth;
pub mod context;
pub mod error;
pub mod stats;

pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{NotFoundContext, ServiceError, ServiceResult};
pub use stats::StatsService;
