use thiserror::Error;

use crate::config::{MAX_COST, MIN_COST};

/// Errors surfaced by the hashing facade.
///
/// Only [`HashError::InvalidConfiguration`] is part of the documented
/// contract; it signals a programming or deployment mistake and must not be
/// reported to end users as a wrong password.
#[derive(Debug, Error)]
pub enum HashError {
    #[error("invalid hash configuration: cost must be between {MIN_COST} and {MAX_COST}, got {0}")]
    InvalidConfiguration(u32),
    #[error("password hash failed: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
}
