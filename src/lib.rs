//! Minimal password-hashing facade over bcrypt.
//!
//! Three stateless operations: [`make`] derives a salted hash from a
//! plaintext secret, [`check`] verifies a plaintext against a stored hash,
//! and [`needs_rehash`] reports when a stored hash was produced under an
//! outdated work factor. The encoded hash string is opaque to this crate;
//! callers persist it and hand it back unchanged.
//!
//! `make` is CPU-bound with latency proportional to 2^cost. On
//! latency-sensitive paths, offload it to a worker thread.

pub mod config;
pub mod error;
pub mod hasher;

pub use config::{DEFAULT_COST, HashConfig, MAX_COST, MIN_COST};
pub use error::HashError;
pub use hasher::{check, make, needs_rehash};
