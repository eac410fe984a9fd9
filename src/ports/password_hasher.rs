//! Password hashing port.

use crate::domain::account::PasswordHash;
use crate::domain::foundation::DomainError;

/// One-way password hashing and verification.
///
/// Hashing is CPU-bound and synchronous.
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password with a fresh salt.
    fn hash(&self, plaintext: &str) -> Result<PasswordHash, DomainError>;

    /// Check a plaintext password against a stored hash.
    ///
    /// Unusable or malformed hashes verify as `false`.
    fn verify(&self, plaintext: &str, hash: &PasswordHash) -> bool;
}
