//! Protocol gadgets for Schnorr proofs and signatures.
//!
//! This module contains the core data structures used in the protocol:
//! parameters, secret and public keys, commitment, response, and proof.

use zeroize::Zeroize;

use crate::crypto::nonzero_scalar;
use crate::{Error, Group, Result};

/// Protocol version for serialization compatibility.
const PROTOCOL_VERSION: u8 = 1;

/// Public parameters for the Schnorr protocol.
///
/// Holds the process-wide read-only configuration: the generator `G` and
/// whether challenges bind the public key. Parameters are created once and
/// passed by reference into [`Prover`](crate::Prover) and
/// [`Verifier`](crate::Verifier); nothing mutates them afterwards.
#[derive(Clone, Debug)]
pub struct Parameters<G: Group> {
    generator: G::Element,
    bind_public_key: bool,
}

impl<G: Group> Parameters<G> {
    /// Creates parameters with the group's standard generator and public-key
    /// binding enabled.
    ///
    /// Binding the public key into the challenge is the strictly safer
    /// variant and the recommended default.
    pub fn new() -> Self {
        Self {
            generator: G::generator(),
            bind_public_key: true,
        }
    }

    /// Creates parameters with a custom generator.
    ///
    /// # Errors
    ///
    /// Returns an error if the generator is the identity element or fails
    /// group validation.
    pub fn with_generator(generator: G::Element) -> Result<Self> {
        G::validate_element(&generator)?;

        if G::is_identity(&generator) {
            return Err(Error::InvalidParams(
                "Generator cannot be identity".to_string(),
            ));
        }

        Ok(Self {
            generator,
            bind_public_key: true,
        })
    }

    /// Sets whether the challenge derivation binds the public key.
    ///
    /// Disabling the binding reproduces the bare zero-knowledge-proof
    /// variant of the protocol; leaving it enabled yields the signature
    /// variant. Proofs made under one setting never verify under the other.
    pub fn bind_public_key(mut self, bind: bool) -> Self {
        self.bind_public_key = bind;
        self
    }

    /// Returns the generator `G`.
    pub fn generator(&self) -> &G::Element {
        &self.generator
    }

    /// Whether challenges bind the public key.
    pub fn binds_public_key(&self) -> bool {
        self.bind_public_key
    }
}

impl<G: Group> Default for Parameters<G> {
    fn default() -> Self {
        Self::new()
    }
}

/// Secret key for the Schnorr protocol: a scalar `x` in `[1, n-1]`.
///
/// The key is exclusively owned by the prover and never transmitted. It is
/// automatically zeroized when dropped.
#[derive(Clone, Debug)]
pub struct SecretKey<G: Group> {
    x: G::Scalar,
}

impl<G: Group> SecretKey<G> {
    /// Samples a fresh random secret key.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::RandomnessUnavailable`] if the randomness source
    /// cannot produce a non-zero scalar.
    pub fn random<R: rand_core::CryptoRngCore>(rng: &mut R) -> Result<Self> {
        Ok(Self {
            x: nonzero_scalar::<G, _>(rng)?,
        })
    }

    /// Creates a secret key from an existing scalar.
    ///
    /// # Errors
    ///
    /// Rejects the zero scalar, whose public key would be the identity.
    pub fn from_scalar(x: G::Scalar) -> Result<Self> {
        if G::scalar_is_zero(&x) {
            return Err(Error::InvalidScalar(
                "Secret key cannot be zero".to_string(),
            ));
        }
        Ok(Self { x })
    }

    /// Parses a secret key from its canonical byte encoding.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_scalar(G::scalar_from_bytes(bytes)?)
    }

    /// Returns a reference to the secret scalar.
    pub(crate) fn scalar(&self) -> &G::Scalar {
        &self.x
    }
}

impl<G: Group> Zeroize for SecretKey<G> {
    fn zeroize(&mut self) {
        self.x.zeroize();
    }
}

impl<G: Group> Drop for SecretKey<G> {
    fn drop(&mut self) {
        self.x.zeroize();
    }
}

impl<G: Group> zeroize::ZeroizeOnDrop for SecretKey<G> {}

/// Public key for the Schnorr protocol: the point `X = x * G`.
///
/// Derived from the secret key, safe to share, and valid for the lifetime
/// of the key pair.
#[derive(Clone, Debug)]
pub struct PublicKey<G: Group> {
    point: G::Element,
}

impl<G: Group> PublicKey<G> {
    /// Wraps an existing group element as a public key.
    ///
    /// Call [`PublicKey::validate`] before trusting a key received from an
    /// untrusted source.
    pub fn new(point: G::Element) -> Self {
        Self { point }
    }

    /// Computes the public key `X = x * G` from a secret key.
    pub fn from_secret(params: &Parameters<G>, secret: &SecretKey<G>) -> Self {
        Self {
            point: G::scalar_mul(params.generator(), secret.scalar()),
        }
    }

    /// Returns the public key point.
    pub fn point(&self) -> &G::Element {
        &self.point
    }

    /// Canonical byte encoding of the public key.
    pub fn to_bytes(&self) -> Vec<u8> {
        G::element_to_bytes(&self.point)
    }

    /// Parses and validates a public key from bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let key = Self::new(G::element_from_bytes(bytes)?);
        key.validate()?;
        Ok(key)
    }

    /// Validates that the key is a non-identity member of the subgroup.
    pub fn validate(&self) -> Result<()> {
        G::validate_element(&self.point)?;
        if G::is_identity(&self.point) {
            return Err(Error::InvalidPoint(
                "Public key cannot be identity".to_string(),
            ));
        }
        Ok(())
    }
}

impl<G: Group> PartialEq for PublicKey<G> {
    fn eq(&self, other: &Self) -> bool {
        self.point == other.point
    }
}

impl<G: Group> Eq for PublicKey<G> {}

/// Commitment in a Schnorr proof: the point `R = r * G` for an ephemeral
/// secret `r`, published as the first part of the proof.
#[derive(Clone, Debug)]
pub struct Commitment<G: Group> {
    r: G::Element,
}

impl<G: Group> Commitment<G> {
    /// Creates a new commitment from the commitment point.
    pub fn new(r: G::Element) -> Self {
        Self { r }
    }

    /// Returns the commitment point `R = r * G`.
    pub fn r(&self) -> &G::Element {
        &self.r
    }
}

impl<G: Group> PartialEq for Commitment<G> {
    fn eq(&self, other: &Self) -> bool {
        self.r == other.r
    }
}

impl<G: Group> Eq for Commitment<G> {}

/// Response in a Schnorr proof: the scalar `s = r + e * x mod n`.
#[derive(Clone, Debug)]
pub struct Response<G: Group> {
    s: G::Scalar,
}

impl<G: Group> Response<G> {
    /// Creates a new response from a scalar value.
    pub fn new(s: G::Scalar) -> Self {
        Self { s }
    }

    /// Returns a reference to the response scalar.
    pub fn s(&self) -> &G::Scalar {
        &self.s
    }
}

impl<G: Group> PartialEq for Response<G> {
    fn eq(&self, other: &Self) -> bool {
        self.s == other.s
    }
}

impl<G: Group> Eq for Response<G> {}

/// Complete non-interactive Schnorr proof: the pair `(R, s)`.
///
/// A proof demonstrates knowledge of the secret key behind a public key,
/// bound to the context it was generated for. Proofs are immutable once
/// produced, can be transmitted freely, and are consumed read-only by the
/// verifier.
///
/// # Serialization
///
/// Proofs serialize to a versioned, length-prefixed byte format via
/// [`Proof::to_bytes`] and [`Proof::from_bytes`]. Deserialization validates
/// subgroup membership of the commitment and the range of the response, so a
/// parsed proof is always structurally sound.
#[derive(Clone, Debug)]
pub struct Proof<G: Group> {
    version: u8,
    commitment: Commitment<G>,
    response: Response<G>,
}

/// A Schnorr signature is a proof whose bound context is the signed message.
pub type Signature<G> = Proof<G>;

impl<G: Group> Proof<G> {
    /// Creates a new proof from commitment and response.
    ///
    /// This is typically called by [`Prover`](crate::Prover) and not
    /// directly by users.
    pub fn new(commitment: Commitment<G>, response: Response<G>) -> Self {
        Self {
            version: PROTOCOL_VERSION,
            commitment,
            response,
        }
    }

    /// Returns the protocol version.
    pub fn version(&self) -> u8 {
        self.version
    }

    /// Returns a reference to the commitment.
    pub fn commitment(&self) -> &Commitment<G> {
        &self.commitment
    }

    /// Returns a reference to the response.
    pub fn response(&self) -> &Response<G> {
        &self.response
    }

    /// Validates the structural invariants of the proof.
    ///
    /// The commitment must be a non-identity subgroup member. An identity
    /// commitment corresponds to the degenerate ephemeral secret `r = 0`,
    /// which the hardened prover never emits, so it is rejected here.
    pub fn validate(&self) -> Result<()> {
        G::validate_element(self.commitment.r())?;
        if G::is_identity(self.commitment.r()) {
            return Err(Error::InvalidPoint(
                "Commitment cannot be identity".to_string(),
            ));
        }
        Ok(())
    }

    /// Serializes the proof to bytes.
    ///
    /// Format: `[version (1 byte)][r_len (4 bytes)][r][s_len (4 bytes)][s]`
    pub fn to_bytes(&self) -> Vec<u8> {
        let r_bytes = G::element_to_bytes(self.commitment.r());
        let s_bytes = G::scalar_to_bytes(self.response.s());

        let mut result = Vec::with_capacity(1 + 4 + r_bytes.len() + 4 + s_bytes.len());
        result.push(self.version);

        result.extend_from_slice(&(r_bytes.len() as u32).to_be_bytes());
        result.extend_from_slice(&r_bytes);

        result.extend_from_slice(&(s_bytes.len() as u32).to_be_bytes());
        result.extend_from_slice(&s_bytes);

        result
    }

    /// Deserializes and validates a proof from bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        const MAX_ELEMENT_SIZE: usize = 4096;
        const MAX_SCALAR_SIZE: usize = 512;
        const MIN_PROOF_SIZE: usize = 1 + 4 + 1 + 4 + 1;

        if bytes.len() < MIN_PROOF_SIZE {
            return Err(Error::InvalidParams(format!(
                "Proof too small: {} bytes",
                bytes.len()
            )));
        }

        let version = bytes[0];
        if version != PROTOCOL_VERSION {
            return Err(Error::InvalidParams(format!(
                "Unsupported proof version: {}",
                version
            )));
        }

        let mut pos = 1;

        let r_len = read_length(bytes, &mut pos, "r")?;
        if r_len == 0 || r_len > MAX_ELEMENT_SIZE {
            return Err(Error::InvalidParams(format!("Invalid r length: {}", r_len)));
        }
        if pos + r_len > bytes.len() {
            return Err(Error::InvalidParams(
                "Truncated proof: incomplete r data".to_string(),
            ));
        }
        let r = G::element_from_bytes(&bytes[pos..pos + r_len])?;
        pos += r_len;

        let s_len = read_length(bytes, &mut pos, "s")?;
        if s_len == 0 || s_len > MAX_SCALAR_SIZE {
            return Err(Error::InvalidParams(format!("Invalid s length: {}", s_len)));
        }
        if pos + s_len > bytes.len() {
            return Err(Error::InvalidParams(
                "Truncated proof: incomplete s data".to_string(),
            ));
        }
        let s = G::scalar_from_bytes(&bytes[pos..pos + s_len])?;
        pos += s_len;

        if pos != bytes.len() {
            return Err(Error::InvalidParams(format!(
                "Proof has {} trailing bytes",
                bytes.len() - pos
            )));
        }

        G::validate_element(&r)?;

        if G::is_identity(&r) {
            return Err(Error::InvalidPoint(
                "Commitment cannot be identity".to_string(),
            ));
        }

        if G::scalar_is_zero(&s) {
            return Err(Error::InvalidScalar(
                "Response scalar is zero".to_string(),
            ));
        }

        Ok(Proof {
            version,
            commitment: Commitment::new(r),
            response: Response::new(s),
        })
    }
}

/// Reads a big-endian u32 length prefix at `*pos`, advancing the cursor.
fn read_length(bytes: &[u8], pos: &mut usize, field: &str) -> Result<usize> {
    if *pos + 4 > bytes.len() {
        return Err(Error::InvalidParams(format!(
            "Truncated proof: missing {} length",
            field
        )));
    }
    let len = u32::from_be_bytes(
        bytes[*pos..*pos + 4]
            .try_into()
            .unwrap_or_else(|_| unreachable!("Slice is exactly 4 bytes")),
    ) as usize;
    *pos += 4;
    Ok(len)
}
