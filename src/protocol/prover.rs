use rand_core::CryptoRngCore;
use zeroize::Zeroize;

use super::{bind_transcript, Commitment, Parameters, Proof, PublicKey, Response, SecretKey};
use super::{Signature, Transcript};
use crate::crypto::nonzero_scalar;
use crate::{Group, Result};

/// Prover for the non-interactive Schnorr protocol.
///
/// Generates proofs of knowledge of the secret key behind a public key,
/// bound to an arbitrary context, and signatures over messages. Both use
/// the same algorithm; see [`Parameters::bind_public_key`] for the only
/// behavioral switch between the two historical variants.
///
/// # Security
///
/// - Always use [`SecureRng`](crate::SecureRng) (or another CSPRNG) for
///   randomness
/// - Bind proofs to a unique context to prevent replay across applications
/// - The ephemeral secret is sampled fresh per call and zeroized before the
///   call returns; it never leaves this module
pub struct Prover<G: Group> {
    params: Parameters<G>,
    secret: SecretKey<G>,
    public: PublicKey<G>,
}

impl<G: Group> Prover<G> {
    /// Creates a new prover with the given parameters and secret key.
    ///
    /// The public key is computed from the secret as `X = x * G`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use schnorr_zkp::{Parameters, Prover, Secp256k1, SecretKey, SecureRng};
    ///
    /// let params = Parameters::<Secp256k1>::new();
    /// let mut rng = SecureRng::new();
    /// let secret = SecretKey::random(&mut rng).unwrap();
    ///
    /// let prover = Prover::new(params, secret);
    /// ```
    pub fn new(params: Parameters<G>, secret: SecretKey<G>) -> Self {
        let public = PublicKey::from_secret(&params, &secret);
        Self {
            params,
            secret,
            public,
        }
    }

    /// Creates a prover from an existing key pair.
    ///
    /// Useful when the public key has been computed once and cached. The
    /// caller must ensure the public key matches the secret key.
    pub fn with_public_key(
        params: Parameters<G>,
        secret: SecretKey<G>,
        public: PublicKey<G>,
    ) -> Self {
        Self {
            params,
            secret,
            public,
        }
    }

    /// Returns the prover's public key.
    pub fn public_key(&self) -> &PublicKey<G> {
        &self.public
    }

    /// Generates a non-interactive zero-knowledge proof bound to `context`.
    ///
    /// Steps: sample a fresh non-zero ephemeral secret `r`, publish the
    /// commitment `R = r * G`, derive the challenge `e` from the transcript,
    /// and respond with `s = r + e * x mod n`.
    ///
    /// # Errors
    ///
    /// Fails with [`RandomnessUnavailable`](crate::Error::RandomnessUnavailable)
    /// if the randomness source cannot produce a usable ephemeral secret.
    pub fn prove<R: CryptoRngCore>(&self, rng: &mut R, context: &[u8]) -> Result<Proof<G>> {
        let mut nonce = nonzero_scalar::<G, _>(rng)?;
        let commitment = Commitment::new(G::scalar_mul(self.params.generator(), &nonce));

        let mut transcript = Transcript::new();
        bind_transcript(
            &mut transcript,
            &self.params,
            &self.public,
            &commitment,
            context,
        );
        let challenge = transcript.challenge_scalar::<G>();

        let response = Response::new(G::scalar_add(
            &nonce,
            &G::scalar_mul_scalar(&challenge, self.secret.scalar()),
        ));
        nonce.zeroize();

        Ok(Proof::new(commitment, response))
    }

    /// Signs a message.
    ///
    /// Identical to [`Prover::prove`] with the message as the bound context;
    /// the distinction is purely one of naming at the call site.
    pub fn sign<R: CryptoRngCore>(&self, rng: &mut R, message: &[u8]) -> Result<Signature<G>> {
        self.prove(rng, message)
    }
}
