//! Authentication utilities

mod jwt;
mod password;

pub use jwt::{Claims, TokenService, DEFAULT_TOKEN_TTL_DAYS};
pub use password::hash_password;
