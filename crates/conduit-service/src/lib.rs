//! # conduit-service
//!
//! Application layer: account lifecycle, session tokens, and engagement statistics.
//!
//! Services borrow a [`ServiceContext`] holding the repository ports and the
//! token signer, so the same code runs against PostgreSQL or the in-memory
//! adapters.

pub mod dto;
pub mod services;

pub use services::{
    AuthService, NotFoundContext, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, StatsService,
};
