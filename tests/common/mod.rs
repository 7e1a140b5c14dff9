//! Common test utilities shared across integration tests.

use schnorr_zkp::{Group, Parameters, Prover, PublicKey, SecretKey, SecureRng};

/// Creates a prover with a freshly sampled secret key, returning it together
/// with the corresponding public key.
pub fn prover_with_keys<G: Group>(params: &Parameters<G>) -> (Prover<G>, PublicKey<G>) {
    let mut rng = SecureRng::new();
    let secret = SecretKey::random(&mut rng).expect("Key generation should succeed");
    let prover = Prover::new(params.clone(), secret);
    let public = prover.public_key().clone();
    (prover, public)
}
