//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod auth;
pub mod health;
pub mod stats;
pub mod users;
