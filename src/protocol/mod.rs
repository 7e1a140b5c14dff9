/// Core protocol types (parameters, keys, commitment, response, proof).
pub mod gadgets;
/// Prover implementation generating proofs and signatures.
pub mod prover;
/// Merlin transcript wrapper for the Fiat-Shamir transformation.
pub mod transcript;
/// Verifier implementation validating proofs and signatures.
pub mod verifier;

pub use gadgets::{Commitment, Parameters, Proof, PublicKey, Response, SecretKey, Signature};
pub use prover::Prover;
pub use transcript::Transcript;
pub use verifier::Verifier;

use crate::Group;

/// Binds every public input of a proof into the transcript, in a fixed
/// order, under distinct labels. The prover and verifier share this single
/// routine, so their challenge derivations cannot diverge on encoding.
pub(crate) fn bind_transcript<G: Group>(
    transcript: &mut Transcript,
    params: &Parameters<G>,
    public_key: &PublicKey<G>,
    commitment: &Commitment<G>,
    context: &[u8],
) {
    transcript.append_group_name(G::name());
    transcript.append_generator(&G::element_to_bytes(params.generator()));
    if params.binds_public_key() {
        transcript.append_public_key(&G::element_to_bytes(public_key.point()));
    }
    transcript.append_context(context);
    transcript.append_commitment(&G::element_to_bytes(commitment.r()));
}
