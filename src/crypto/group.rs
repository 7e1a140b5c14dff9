use core::fmt::Debug;

use rand_core::CryptoRngCore;
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::Result;

/// A prime-order group suitable for the Schnorr protocol.
///
/// Implementations provide scalar arithmetic modulo the group order `n`,
/// point arithmetic over the prime-order subgroup, byte serialization, and
/// membership validation. All scalar operations reduce modulo `n`; a scalar
/// never leaves the range `[0, n-1]`.
pub trait Group: Clone + Debug + Send + Sync + 'static {
    /// Scalar in `[0, n-1]` where `n` is the group order.
    type Scalar: Clone
        + Debug
        + Eq
        + PartialEq
        + Zeroize
        + Serialize
        + for<'de> Deserialize<'de>
        + Send
        + Sync;

    /// Element of the prime-order subgroup, including the identity.
    type Element: Clone
        + Debug
        + Eq
        + PartialEq
        + Serialize
        + for<'de> Deserialize<'de>
        + Send
        + Sync;

    /// Human-readable group name, bound into every transcript.
    fn name() -> &'static str;

    /// The fixed base point `G` generating the subgroup.
    fn generator() -> Self::Element;

    /// Parses a scalar from its canonical byte encoding.
    ///
    /// Rejects encodings of integers outside `[0, n-1]`.
    fn scalar_from_bytes(bytes: &[u8]) -> Result<Self::Scalar>;

    /// Canonical fixed-width byte encoding of a scalar.
    fn scalar_to_bytes(scalar: &Self::Scalar) -> Vec<u8>;

    /// Parses an element, rejecting off-curve or wrong-subgroup encodings.
    fn element_from_bytes(bytes: &[u8]) -> Result<Self::Element>;

    /// Canonical fixed-width byte encoding of an element.
    fn element_to_bytes(element: &Self::Element) -> Vec<u8>;

    /// Samples a uniformly random scalar in `[0, n-1]`.
    fn random_scalar<R: CryptoRngCore>(rng: &mut R) -> Self::Scalar;

    /// Interprets 64 uniformly random bytes as a big integer and reduces it
    /// modulo `n`. Used for challenge derivation; the doubled width keeps
    /// the reduction bias negligible.
    fn scalar_from_wide_bytes(bytes: &[u8; 64]) -> Self::Scalar;

    /// `element * scalar` (scalar multiplication).
    fn scalar_mul(element: &Self::Element, scalar: &Self::Scalar) -> Self::Element;

    /// `a + b` (point addition).
    fn element_add(a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// The identity element of the group.
    fn identity() -> Self::Element;

    /// Whether `element` is the identity.
    fn is_identity(element: &Self::Element) -> bool;

    /// Validates that `element` is a member of the prime-order subgroup.
    ///
    /// Every externally supplied point must pass through this gate before
    /// being used in the verification equation.
    fn validate_element(element: &Self::Element) -> Result<()>;

    /// `a + b mod n`.
    fn scalar_add(a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar;

    /// `a * b mod n`.
    fn scalar_mul_scalar(a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar;

    /// Whether the scalar is zero.
    fn scalar_is_zero(scalar: &Self::Scalar) -> bool;
}
