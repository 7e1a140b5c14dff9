//! Core cryptographic primitives shared by all protocol components:
//! the [`Group`] abstraction over scalar-field and group operations,
//! and the [`SecureRng`] randomness source.

/// Generic group trait covering scalar and element arithmetic.
pub mod group;
/// Cryptographically secure randomness.
pub mod rng;

pub use group::Group;
pub use rng::{nonzero_scalar, SecureRng};
