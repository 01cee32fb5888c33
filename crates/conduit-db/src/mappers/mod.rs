//! Model to entity mappers
//!
//! Conversions from database rows (`models`) into domain objects (`conduit-core`).

mod article;
mod user;
