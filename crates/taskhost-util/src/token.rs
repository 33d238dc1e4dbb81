//! Random identifier generation.

use rand::RngCore;

const TOKEN_BYTES: usize = 10;

/// A short random hex identifier.
///
/// Returns 20 hex characters drawn from the OS-seeded thread-local CSPRNG.
/// Collisions are improbable but not excluded; use it as a best-effort unique
/// suffix (container names, correlation ids), not as a security token.
///
/// # Examples
///
/// ```rust
/// use taskhost_util::token::rand_hex;
///
/// let id = rand_hex();
/// assert_eq!(id.len(), 20);
/// ```
pub fn rand_hex() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}
