//! Ristretto255 group implementation.
//!
//! Ristretto255 is a prime-order group constructed over Curve25519; every
//! decodable encoding is by construction a valid member of the group, so
//! membership validation cannot fail after decompression.

use curve25519_dalek::constants::RISTRETTO_BASEPOINT_POINT;
use curve25519_dalek::ristretto::{CompressedRistretto, RistrettoPoint};
use curve25519_dalek::scalar::Scalar as DalekScalar;
use curve25519_dalek::traits::Identity;
use rand_core::CryptoRngCore;
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::{Error, Group, Result};

/// Number of bytes in a Ristretto255 scalar or compressed element (32 bytes).
const RISTRETTO_BYTES: usize = 32;

/// Number of bytes used for wide scalar reduction (64 bytes).
const WIDE_REDUCTION_BYTES: usize = 64;

/// Ristretto255 group implementation providing fast, modern elliptic curve operations.
#[derive(Clone, Debug)]
pub struct Ristretto255;

/// Scalar in the Ristretto255 group.
///
/// Scalars are automatically zeroized when dropped for security.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize, Zeroize)]
#[zeroize(drop)]
pub struct Scalar(DalekScalar);

/// Element (point) in the Ristretto255 group.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Element(RistrettoPoint);

impl Scalar {
    /// Creates a new scalar from a curve25519_dalek Scalar.
    pub fn new(value: DalekScalar) -> Self {
        Self(value)
    }

    /// Returns a reference to the inner curve25519_dalek Scalar.
    pub fn inner(&self) -> &DalekScalar {
        &self.0
    }
}

impl Element {
    /// Creates a new element from a RistrettoPoint.
    pub fn new(value: RistrettoPoint) -> Self {
        Self(value)
    }

    /// Returns a reference to the inner RistrettoPoint.
    pub fn inner(&self) -> &RistrettoPoint {
        &self.0
    }
}

impl Group for Ristretto255 {
    type Scalar = Scalar;
    type Element = Element;

    fn name() -> &'static str {
        "Ristretto255"
    }

    fn generator() -> Self::Element {
        Element(RISTRETTO_BASEPOINT_POINT)
    }

    fn scalar_from_bytes(bytes: &[u8]) -> Result<Self::Scalar> {
        if bytes.len() != RISTRETTO_BYTES {
            return Err(Error::InvalidScalar(format!(
                "Expected {} bytes, got {}",
                RISTRETTO_BYTES,
                bytes.len()
            )));
        }

        let mut arr = [0u8; RISTRETTO_BYTES];
        arr.copy_from_slice(bytes);

        match DalekScalar::from_canonical_bytes(arr).into() {
            Some(scalar) => Ok(Scalar(scalar)),
            None => Err(Error::InvalidScalar(
                "Bytes do not represent a valid scalar".to_string(),
            )),
        }
    }

    fn scalar_to_bytes(scalar: &Self::Scalar) -> Vec<u8> {
        scalar.0.to_bytes().to_vec()
    }

    fn element_from_bytes(bytes: &[u8]) -> Result<Self::Element> {
        if bytes.len() != RISTRETTO_BYTES {
            return Err(Error::InvalidPoint(format!(
                "Expected {} bytes, got {}",
                RISTRETTO_BYTES,
                bytes.len()
            )));
        }

        let mut arr = [0u8; RISTRETTO_BYTES];
        arr.copy_from_slice(bytes);

        match CompressedRistretto(arr).decompress() {
            Some(point) => Ok(Element(point)),
            None => Err(Error::InvalidPoint(
                "Bytes do not represent a valid Ristretto point".to_string(),
            )),
        }
    }

    fn element_to_bytes(element: &Self::Element) -> Vec<u8> {
        element.0.compress().to_bytes().to_vec()
    }

    fn random_scalar<R: CryptoRngCore>(rng: &mut R) -> Self::Scalar {
        let mut bytes = [0u8; WIDE_REDUCTION_BYTES];
        rng.fill_bytes(&mut bytes);
        Scalar(DalekScalar::from_bytes_mod_order_wide(&bytes))
    }

    fn scalar_from_wide_bytes(bytes: &[u8; 64]) -> Self::Scalar {
        Scalar(DalekScalar::from_bytes_mod_order_wide(bytes))
    }

    fn scalar_mul(element: &Self::Element, scalar: &Self::Scalar) -> Self::Element {
        Element(element.0 * scalar.0)
    }

    fn element_add(a: &Self::Element, b: &Self::Element) -> Self::Element {
        Element(a.0 + b.0)
    }

    fn identity() -> Self::Element {
        Element(RistrettoPoint::identity())
    }

    fn is_identity(element: &Self::Element) -> bool {
        element.0 == RistrettoPoint::identity()
    }

    fn validate_element(_element: &Self::Element) -> Result<()> {
        // Decoded Ristretto points are group members by construction.
        Ok(())
    }

    fn scalar_add(a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar {
        Scalar(a.0 + b.0)
    }

    fn scalar_mul_scalar(a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar {
        Scalar(a.0 * b.0)
    }

    fn scalar_is_zero(scalar: &Self::Scalar) -> bool {
        scalar.0 == DalekScalar::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SecureRng;

    #[test]
    fn generator_is_not_identity() {
        let g = Ristretto255::generator();
        assert!(!Ristretto255::is_identity(&g));
        assert!(Ristretto255::validate_element(&g).is_ok());
    }

    #[test]
    fn scalar_serialization() {
        let mut rng = SecureRng::new();
        let scalar = Ristretto255::random_scalar(&mut rng);
        let bytes = Ristretto255::scalar_to_bytes(&scalar);
        let deserialized = Ristretto255::scalar_from_bytes(&bytes).unwrap();
        assert_eq!(scalar, deserialized);
    }

    #[test]
    fn scalar_from_bytes_rejects_noncanonical() {
        // All 0xFF exceeds the group order in little-endian form.
        let result = Ristretto255::scalar_from_bytes(&[0xFF; 32]);
        assert!(result.is_err());
    }

    #[test]
    fn wide_reduction_deterministic() {
        let bytes = [7u8; 64];
        let a = Ristretto255::scalar_from_wide_bytes(&bytes);
        let b = Ristretto255::scalar_from_wide_bytes(&bytes);
        assert_eq!(a, b);
    }

    #[test]
    fn element_serialization() {
        let g = Ristretto255::generator();
        let mut rng = SecureRng::new();
        let x = Ristretto255::random_scalar(&mut rng);
        let y = Ristretto255::scalar_mul(&g, &x);

        let bytes = Ristretto255::element_to_bytes(&y);
        let deserialized = Ristretto255::element_from_bytes(&bytes).unwrap();
        assert_eq!(y, deserialized);
    }

    #[test]
    fn element_from_bytes_rejects_invalid_encoding() {
        // Not every 32-byte string decodes to a Ristretto point.
        let result = Ristretto255::element_from_bytes(&[0xFF; 32]);
        assert!(result.is_err());
    }

    #[test]
    fn identity() {
        let id = Ristretto255::identity();
        assert!(Ristretto255::is_identity(&id));

        let g = Ristretto255::generator();
        assert!(!Ristretto255::is_identity(&g));
    }

    #[test]
    fn element_addition_is_homomorphic() {
        let g = Ristretto255::generator();
        let mut rng = SecureRng::new();
        let a = Ristretto255::random_scalar(&mut rng);
        let b = Ristretto255::random_scalar(&mut rng);

        let ga = Ristretto255::scalar_mul(&g, &a);
        let gb = Ristretto255::scalar_mul(&g, &b);
        let ga_plus_gb = Ristretto255::element_add(&ga, &gb);

        let a_plus_b = Ristretto255::scalar_add(&a, &b);
        let g_a_plus_b = Ristretto255::scalar_mul(&g, &a_plus_b);

        assert_eq!(ga_plus_gb, g_a_plus_b);
    }
}
