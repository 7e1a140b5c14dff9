use super::{bind_transcript, Parameters, Proof, PublicKey, Transcript};
use crate::{Error, Group, Result};

/// Verifier for the non-interactive Schnorr protocol.
///
/// Validates proofs of knowledge of a discrete logarithm. Every externally
/// supplied point passes through subgroup-membership validation before it
/// reaches the verification equation; malformed or forged proofs surface as
/// typed errors, never as panics.
pub struct Verifier<G: Group> {
    params: Parameters<G>,
    public: PublicKey<G>,
}

impl<G: Group> Verifier<G> {
    /// Creates a new verifier for the given parameters and public key.
    pub fn new(params: Parameters<G>, public: PublicKey<G>) -> Self {
        Self { params, public }
    }

    /// Returns the public key being verified against.
    pub fn public_key(&self) -> &PublicKey<G> {
        &self.public
    }

    /// Verifies a proof against the context it claims to be bound to.
    ///
    /// Steps: validate the public key and commitment as non-identity
    /// subgroup members, recompute the challenge `e` over an identical
    /// transcript, and check `s * G == R + e * X`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidPoint`] if the public key or commitment fails
    ///   subgroup validation
    /// - [`Error::VerificationFailed`] if the verification equation does
    ///   not hold (wrong key, tampered proof, or mismatched context)
    pub fn verify(&self, proof: &Proof<G>, context: &[u8]) -> Result<()> {
        self.public.validate()?;
        proof.validate()?;

        let mut transcript = Transcript::new();
        bind_transcript(
            &mut transcript,
            &self.params,
            &self.public,
            proof.commitment(),
            context,
        );
        let challenge = transcript.challenge_scalar::<G>();

        let lhs = G::scalar_mul(self.params.generator(), proof.response().s());
        let rhs = G::element_add(
            proof.commitment().r(),
            &G::scalar_mul(self.public.point(), &challenge),
        );

        if lhs != rhs {
            return Err(Error::VerificationFailed);
        }

        Ok(())
    }

    /// Verifies a signature over a message.
    ///
    /// Identical to [`Verifier::verify`] with the message as the bound
    /// context.
    pub fn verify_signature(&self, signature: &Proof<G>, message: &[u8]) -> Result<()> {
        self.verify(signature, message)
    }
}
