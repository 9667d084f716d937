//! Password hashing, verification and rehash detection.

use bcrypt::HashParts;

use crate::config::HashConfig;
use crate::error::HashError;

/// Hashes `secret` with bcrypt under the cost carried by `config`.
///
/// The cost is validated against [4, 31] before any hashing work begins;
/// the check depends only on the numeric cost, never on the secret. The
/// primitive draws a fresh random salt per call, so two calls with the same
/// inputs produce different encodings.
///
/// bcrypt digests at most the first 72 bytes of input; anything beyond is
/// ignored by the primitive, identically at hash and verify time.
pub fn make(secret: &str, config: HashConfig) -> Result<String, HashError> {
    config.validate()?;
    let hashed = bcrypt::hash(secret, config.cost)?;
    tracing::debug!(cost = config.cost, "derived new password hash");
    Ok(hashed)
}

/// Verifies `secret` against a previously stored `hash`.
///
/// Returns false for any mismatch, and false rather than an error when
/// `hash` is malformed or in a foreign format.
pub fn check(secret: &str, hash: &str) -> bool {
    match bcrypt::verify(secret, hash) {
        Ok(matched) => matched,
        Err(_) => {
            tracing::debug!("stored hash did not parse as bcrypt, treating as mismatch");
            false
        }
    }
}

/// Reports whether `hash` should be regenerated under `config`.
///
/// True when the embedded cost differs from `config.cost`, or when `hash`
/// is not a bcrypt encoding at all. Unlike [`make`], the target cost is not
/// range-checked here: this function never fails, and an out-of-range value
/// is caught by the `make` call that follows a true result.
pub fn needs_rehash(hash: &str, config: HashConfig) -> bool {
    match hash.parse::<HashParts>() {
        Ok(parts) => parts.get_cost() != config.cost,
        Err(_) => true,
    }
}
