//! secp256k1 elliptic curve group implementation.
//!
//! The curve has a prime order, so every on-curve point other than the
//! identity generates the full group and no cofactor handling is needed.
//! Points are serialized in SEC1 compressed form (33 bytes).

use k256::elliptic_curve::ops::Reduce;
use k256::elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use k256::elliptic_curve::{Field, PrimeField};
use k256::{AffinePoint, EncodedPoint, FieldBytes, ProjectivePoint, Scalar as K256Scalar, U256};
use rand_core::CryptoRngCore;
use serde::{Deserialize, Serialize};
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

use crate::{Error, Group, Result};

/// Number of bytes in a secp256k1 scalar (32 bytes).
const SECP256K1_SCALAR_BYTES: usize = 32;

/// Number of bytes in a compressed secp256k1 point (1 byte prefix + 32 byte x-coordinate).
const SECP256K1_COMPRESSED_BYTES: usize = 33;

/// `2^256 mod n` as canonical big-endian scalar bytes, where `n` is the
/// secp256k1 group order. Used to recombine the two halves of a 64-byte
/// digest during wide reduction: `hi * 2^256 + lo mod n`.
const WIDE_REDUCTION_SHIFT: [u8; 32] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x01, 0x45, 0x51, 0x23, 0x19, 0x50, 0xB7, 0x5F, 0xC4, 0x40, 0x2D, 0xA1, 0x73, 0x2F, 0xC9,
    0xBE, 0xBF,
];

/// secp256k1 elliptic curve group implementation.
#[derive(Clone, Debug)]
pub struct Secp256k1;

/// Scalar in the secp256k1 group.
///
/// Scalars are automatically zeroized when dropped for security.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scalar(
    #[serde(
        serialize_with = "serialize_scalar",
        deserialize_with = "deserialize_scalar"
    )]
    K256Scalar,
);

/// Element (point) in the secp256k1 group.
///
/// Points are stored in projective coordinates for efficient arithmetic,
/// and serialized in compressed form to save bandwidth.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Element(
    #[serde(
        serialize_with = "serialize_element",
        deserialize_with = "deserialize_element"
    )]
    ProjectivePoint,
);

fn serialize_scalar<S>(scalar: &K256Scalar, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_bytes(&scalar.to_bytes())
}

fn deserialize_scalar<'de, D>(deserializer: D) -> std::result::Result<K256Scalar, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let bytes: Vec<u8> = serde::Deserialize::deserialize(deserializer)?;
    if bytes.len() != SECP256K1_SCALAR_BYTES {
        return Err(serde::de::Error::invalid_length(
            bytes.len(),
            &"32 bytes for secp256k1 scalar",
        ));
    }

    let mut arr = [0u8; SECP256K1_SCALAR_BYTES];
    arr.copy_from_slice(&bytes);

    Option::<K256Scalar>::from(K256Scalar::from_repr(arr.into()))
        .ok_or_else(|| serde::de::Error::custom("Invalid secp256k1 scalar"))
}

fn serialize_element<S>(
    element: &ProjectivePoint,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    let affine = element.to_affine();
    let encoded = affine.to_encoded_point(true); // compressed format
    serializer.serialize_bytes(encoded.as_bytes())
}

fn deserialize_element<'de, D>(deserializer: D) -> std::result::Result<ProjectivePoint, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let bytes: Vec<u8> = serde::Deserialize::deserialize(deserializer)?;
    if bytes.len() != SECP256K1_COMPRESSED_BYTES {
        return Err(serde::de::Error::invalid_length(
            bytes.len(),
            &"33 bytes for compressed secp256k1 point",
        ));
    }

    let encoded = EncodedPoint::from_bytes(&bytes)
        .map_err(|_| serde::de::Error::custom("Invalid encoded point"))?;

    let affine = Option::<AffinePoint>::from(AffinePoint::from_encoded_point(&encoded))
        .ok_or_else(|| serde::de::Error::custom("Invalid secp256k1 point"))?;

    Ok(ProjectivePoint::from(affine))
}

impl Zeroize for Scalar {
    fn zeroize(&mut self) {
        // K256Scalar doesn't expose mutable internals, so we overwrite with zero
        self.0 = K256Scalar::ZERO;
    }
}

impl Drop for Scalar {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Scalar {}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_affine().eq(&other.0.to_affine())
    }
}

impl Eq for Element {}

impl Scalar {
    /// Creates a new scalar from a k256 Scalar.
    pub fn new(value: K256Scalar) -> Self {
        Self(value)
    }

    /// Returns a reference to the inner k256 Scalar.
    pub fn inner(&self) -> &K256Scalar {
        &self.0
    }
}

impl Element {
    /// Creates a new element from a ProjectivePoint.
    pub fn new(value: ProjectivePoint) -> Self {
        Self(value)
    }

    /// Returns a reference to the inner ProjectivePoint.
    pub fn inner(&self) -> &ProjectivePoint {
        &self.0
    }
}

impl Group for Secp256k1 {
    type Scalar = Scalar;
    type Element = Element;

    fn name() -> &'static str {
        "secp256k1"
    }

    fn generator() -> Self::Element {
        Element(ProjectivePoint::GENERATOR)
    }

    fn scalar_from_bytes(bytes: &[u8]) -> Result<Self::Scalar> {
        if bytes.len() != SECP256K1_SCALAR_BYTES {
            return Err(Error::InvalidScalar(format!(
                "Expected {} bytes, got {}",
                SECP256K1_SCALAR_BYTES,
                bytes.len()
            )));
        }

        let mut arr = [0u8; SECP256K1_SCALAR_BYTES];
        arr.copy_from_slice(bytes);

        match Option::<K256Scalar>::from(K256Scalar::from_repr(arr.into())) {
            Some(scalar) => Ok(Scalar(scalar)),
            None => Err(Error::InvalidScalar(
                "Bytes do not represent a scalar below the group order".to_string(),
            )),
        }
    }

    fn scalar_to_bytes(scalar: &Self::Scalar) -> Vec<u8> {
        scalar.0.to_bytes().to_vec()
    }

    fn element_from_bytes(bytes: &[u8]) -> Result<Self::Element> {
        if bytes.len() != SECP256K1_COMPRESSED_BYTES {
            return Err(Error::InvalidPoint(format!(
                "Expected {} bytes, got {}",
                SECP256K1_COMPRESSED_BYTES,
                bytes.len()
            )));
        }

        let encoded = EncodedPoint::from_bytes(bytes)
            .map_err(|_| Error::InvalidPoint("Failed to parse encoded point".to_string()))?;

        let affine = Option::<AffinePoint>::from(AffinePoint::from_encoded_point(&encoded))
            .ok_or_else(|| {
                Error::InvalidPoint("Bytes do not represent a point on secp256k1".to_string())
            })?;

        Ok(Element(ProjectivePoint::from(affine)))
    }

    fn element_to_bytes(element: &Self::Element) -> Vec<u8> {
        let affine = element.0.to_affine();
        affine.to_encoded_point(true).as_bytes().to_vec()
    }

    fn random_scalar<R: CryptoRngCore>(rng: &mut R) -> Self::Scalar {
        Scalar(K256Scalar::random(&mut *rng))
    }

    fn scalar_from_wide_bytes(bytes: &[u8; 64]) -> Self::Scalar {
        let hi = <K256Scalar as Reduce<U256>>::reduce_bytes(FieldBytes::from_slice(&bytes[..32]));
        let lo = <K256Scalar as Reduce<U256>>::reduce_bytes(FieldBytes::from_slice(&bytes[32..]));
        let shift = Option::<K256Scalar>::from(K256Scalar::from_repr(WIDE_REDUCTION_SHIFT.into()))
            .unwrap_or_else(|| unreachable!("2^256 mod n is below the group order"));

        // hi * 2^256 + lo mod n
        Scalar(hi * shift + lo)
    }

    fn scalar_mul(element: &Self::Element, scalar: &Self::Scalar) -> Self::Element {
        Element(element.0 * scalar.0)
    }

    fn element_add(a: &Self::Element, b: &Self::Element) -> Self::Element {
        Element(a.0 + b.0)
    }

    fn identity() -> Self::Element {
        Element(ProjectivePoint::IDENTITY)
    }

    fn is_identity(element: &Self::Element) -> bool {
        element.0 == ProjectivePoint::IDENTITY
    }

    fn validate_element(element: &Self::Element) -> Result<()> {
        // Identity is a valid subgroup member; the protocol layers decide
        // whether to accept it in a given position.
        if Self::is_identity(element) {
            return Ok(());
        }

        // For non-identity points, verify they survive a compress/decompress
        // round trip. Decoding enforces the curve equation, and the curve has
        // prime order, so this also settles subgroup membership.
        let affine = element.0.to_affine();
        let encoded = affine.to_encoded_point(true);
        match Option::<AffinePoint>::from(AffinePoint::from_encoded_point(&encoded)) {
            Some(decoded) if decoded == affine => Ok(()),
            _ => Err(Error::InvalidPoint(
                "Element failed recompression validation".to_string(),
            )),
        }
    }

    fn scalar_add(a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar {
        Scalar(a.0 + b.0)
    }

    fn scalar_mul_scalar(a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar {
        Scalar(a.0 * b.0)
    }

    fn scalar_is_zero(scalar: &Self::Scalar) -> bool {
        scalar.0.is_zero().into()
    }
}
