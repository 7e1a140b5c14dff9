//! Cryptographically secure random number generator.

use rand_core::{CryptoRng, OsRng, RngCore};

use crate::{Error, Group, Result};

/// Number of sampling attempts before the randomness source is considered
/// degenerate. A healthy CSPRNG produces a zero scalar with probability
/// around 2^-256, so more than one retry never happens in practice.
const MAX_SAMPLE_ATTEMPTS: usize = 8;

/// Cryptographically secure random number generator.
///
/// This is a thin wrapper around `OsRng` that provides a consistent interface
/// for cryptographic randomness throughout the library. Protocol entry points
/// take the RNG as an argument, so tests may substitute any other
/// `CryptoRngCore` implementation (e.g. a seeded one).
pub struct SecureRng(OsRng);

impl SecureRng {
    /// Creates a new cryptographically secure random number generator.
    pub fn new() -> Self {
        Self(OsRng)
    }
}

impl Default for SecureRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for SecureRng {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand_core::Error> {
        self.0.try_fill_bytes(dest)
    }
}

impl CryptoRng for SecureRng {}

/// Samples a uniformly random non-zero scalar.
///
/// Secret keys and ephemeral nonces must lie in `[1, n-1]`; zero is rejected
/// and resampled. Fails with [`Error::RandomnessUnavailable`] if the source
/// keeps producing zero, which only happens when it is broken or exhausted.
pub fn nonzero_scalar<G: Group, R: rand_core::CryptoRngCore>(rng: &mut R) -> Result<G::Scalar> {
    for _ in 0..MAX_SAMPLE_ATTEMPTS {
        let scalar = G::random_scalar(rng);
        if !G::scalar_is_zero(&scalar) {
            return Ok(scalar);
        }
    }
    Err(Error::RandomnessUnavailable)
}
