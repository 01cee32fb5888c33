//! Password hashing
//!
//! Credentials are stored as the lowercase hex HMAC-SHA256 digest keyed by the
//! plaintext password over an empty message. The digest depends on the password
//! alone, so the stored hash doubles as an exact-match lookup key and login
//! never needs a separate verify step.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::AppError;

type HmacSha256 = Hmac<Sha256>;

fn keyed_mac(password: &str) -> Result<HmacSha256, AppError> {
    HmacSha256::new_from_slice(password.as_bytes())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))
}

/// Hash a password into its stored form
///
/// # Errors
/// Returns an error if the MAC cannot be keyed
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let mac = keyed_mac(password)?;
    Ok(hex::encode(mac.finalize().into_bytes()))
}
