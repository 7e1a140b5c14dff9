mod common;

use common::prover_with_keys;
use schnorr_zkp::protocol::{Commitment, Response};
use schnorr_zkp::{
    Error, Group, Parameters, Proof, PublicKey, Ristretto255, Secp256k1, SecretKey, SecureRng,
    Transcript, Verifier,
};

#[test]
fn proof_is_bound_to_its_context() {
    let params = Parameters::<Secp256k1>::new();
    let mut rng = SecureRng::new();
    let (prover, public) = prover_with_keys(&params);

    let proof = prover.prove(&mut rng, b"session-1").unwrap();

    let verifier = Verifier::new(params, public);
    assert!(
        verifier.verify(&proof, b"session-1").is_ok(),
        "Proof should verify with matching context"
    );
    assert!(
        verifier.verify(&proof, b"session-2").is_err(),
        "Proof should fail verification with different context (replay protection)"
    );
}

#[test]
fn single_byte_context_change_rejects() {
    let params = Parameters::<Secp256k1>::new();
    let mut rng = SecureRng::new();
    let (prover, public) = prover_with_keys(&params);

    let proof = prover.prove(&mut rng, b"context-A").unwrap();

    let verifier = Verifier::new(params, public);
    assert!(verifier.verify(&proof, b"context-B").is_err());
    assert!(verifier.verify(&proof, b"context-A\0").is_err());
    assert!(verifier.verify(&proof, b"context-").is_err());
}

#[test]
fn reject_corrupted_commitment() {
    let params = Parameters::<Secp256k1>::new();
    let mut rng = SecureRng::new();
    let (prover, public) = prover_with_keys(&params);

    let proof = prover.prove(&mut rng, b"tamper").unwrap();
    let mut bytes = proof.to_bytes();

    // Flip a bit inside the commitment's x-coordinate:
    // [version (1)][r_len (4)][r (33)]...
    bytes[1 + 4 + 10] ^= 0x01;

    // Corruption surfaces either as a parse failure (off-curve point) or as
    // a verification failure.
    if let Ok(corrupted) = Proof::<Secp256k1>::from_bytes(&bytes) {
        let verifier = Verifier::new(params, public);
        assert!(
            verifier.verify(&corrupted, b"tamper").is_err(),
            "Corrupted commitment should fail verification"
        );
    }
}

#[test]
fn reject_corrupted_response() {
    let params = Parameters::<Secp256k1>::new();
    let mut rng = SecureRng::new();
    let (prover, public) = prover_with_keys(&params);

    let proof = prover.prove(&mut rng, b"tamper").unwrap();
    let mut bytes = proof.to_bytes();

    // Flip a bit inside the response scalar:
    // [version (1)][r_len (4)][r (33)][s_len (4)][s (32)]
    let s_offset = 1 + 4 + 33 + 4;
    bytes[s_offset + 16] ^= 0x01;

    if let Ok(corrupted) = Proof::<Secp256k1>::from_bytes(&bytes) {
        let verifier = Verifier::new(params, public);
        assert!(
            verifier.verify(&corrupted, b"tamper").is_err(),
            "Corrupted response should fail verification"
        );
    }
}

#[test]
fn reject_substituted_public_key() {
    let params = Parameters::<Ristretto255>::new();
    let mut rng = SecureRng::new();
    let (prover, _public) = prover_with_keys(&params);
    let (_, other_public) = prover_with_keys(&params);

    let proof = prover.prove(&mut rng, b"keyswap").unwrap();

    let verifier = Verifier::new(params, other_public);
    assert!(verifier.verify(&proof, b"keyswap").is_err());
}

#[test]
fn reject_degenerate_zero_nonce_proof() {
    // A proof crafted with r = 0 satisfies the bare verification equation
    // (s*G = e*x*G = identity + e*X), but the identity commitment must be
    // rejected at the validation gate before the equation is ever checked.
    let params = Parameters::<Secp256k1>::new();
    let mut rng = SecureRng::new();

    let x = Secp256k1::random_scalar(&mut rng);
    let secret = SecretKey::<Secp256k1>::from_scalar(x.clone()).unwrap();
    let public = PublicKey::from_secret(&params, &secret);

    let identity = Secp256k1::identity();
    let mut transcript = Transcript::new();
    transcript.append_group_name(Secp256k1::name());
    transcript.append_generator(&Secp256k1::element_to_bytes(params.generator()));
    transcript.append_public_key(&Secp256k1::element_to_bytes(public.point()));
    transcript.append_context(b"degenerate");
    transcript.append_commitment(&Secp256k1::element_to_bytes(&identity));
    let e = transcript.challenge_scalar::<Secp256k1>();

    let s = Secp256k1::scalar_mul_scalar(&e, &x);
    let forged = Proof::new(Commitment::new(identity), Response::new(s));

    let verifier = Verifier::new(params, public);
    assert!(matches!(
        verifier.verify(&forged, b"degenerate"),
        Err(Error::InvalidPoint(_))
    ));
}

#[test]
fn reject_forged_response() {
    // Without knowledge of the secret key, a random response should never
    // satisfy the verification equation.
    let params = Parameters::<Secp256k1>::new();
    let mut rng = SecureRng::new();
    let (prover, public) = prover_with_keys(&params);

    let proof = prover.prove(&mut rng, b"forge").unwrap();
    let forged = Proof::new(
        proof.commitment().clone(),
        Response::new(Secp256k1::random_scalar(&mut rng)),
    );

    let verifier = Verifier::new(params, public);
    assert!(matches!(
        verifier.verify(&forged, b"forge"),
        Err(Error::VerificationFailed)
    ));
}

#[test]
fn response_scalar_stays_in_range() {
    // The serialized response must always re-parse as a canonical scalar,
    // i.e. lie in [0, n-1].
    let params = Parameters::<Secp256k1>::new();
    let mut rng = SecureRng::new();
    let (prover, _) = prover_with_keys(&params);

    for _ in 0..16 {
        let proof = prover.prove(&mut rng, b"range").unwrap();
        let s_bytes = Secp256k1::scalar_to_bytes(proof.response().s());
        assert!(Secp256k1::scalar_from_bytes(&s_bytes).is_ok());
    }
}

#[test]
fn commitment_is_a_valid_member() {
    let params = Parameters::<Ristretto255>::new();
    let mut rng = SecureRng::new();
    let (prover, _) = prover_with_keys(&params);

    let proof = prover.prove(&mut rng, b"membership").unwrap();
    assert!(Ristretto255::validate_element(proof.commitment().r()).is_ok());
    assert!(!Ristretto255::is_identity(proof.commitment().r()));
}
