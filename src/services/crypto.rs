use base64::{engine::general_purpose, Engine as _};
use hmac::{Hmac, Mac};
use rand::prelude::*;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Compute the password hash: base64 of HMAC-SHA256 over the password,
/// keyed with the per-user secret
pub fn hash_password(password: &str, secret: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(password.as_bytes());
    general_purpose::STANDARD.encode(mac.finalize().into_bytes())
}

/// Verify a password against a stored hash and secret
///
/// Recomputes the HMAC and compares against the decoded stored digest in
/// constant time. A stored hash that is not valid base64 never matches.
pub fn verify_password(password: &str, hashed_password: &str, secret: &str) -> bool {
    let stored = match general_purpose::STANDARD.decode(hashed_password) {
        Ok(bytes) => bytes,
        Err(_) => return false,
    };

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(password.as_bytes());

    // verify_slice performs a constant-time comparison
    mac.verify_slice(&stored).is_ok()
}

/// Generate a fresh per-user secret: base64 of 32 cryptographically
/// random bytes. Never derived from the password.
pub fn generate_secret() -> String {
    let mut rng = rand::rng();
    let bytes: [u8; 32] = rng.random();
    general_purpose::STANDARD.encode(bytes)
}
