//! Error types for the Schnorr proof library.

/// Main error types for the library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The randomness source failed to produce a usable scalar.
    #[error("Randomness source unavailable or degenerate")]
    RandomnessUnavailable,

    /// A scalar value is invalid or out of range.
    #[error("Invalid scalar: {0}")]
    InvalidScalar(String),

    /// A point is not a valid member of the prime-order subgroup.
    #[error("Invalid point: {0}")]
    InvalidPoint(String),

    /// Invalid protocol parameters or malformed proof encoding.
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    /// The verification equation did not hold for the given proof.
    #[error("Proof verification failed")]
    VerificationFailed,
}

/// Convenience result type used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;
