//! End-to-end demonstration: key generation, proving, signing, and the
//! failure modes a verifier must catch.

use schnorr_zkp::{Parameters, Proof, Prover, Secp256k1, SecretKey, SecureRng, Verifier};

fn main() {
    let params = Parameters::<Secp256k1>::new();
    let mut rng = SecureRng::new();

    let secret = SecretKey::random(&mut rng).expect("randomness available");
    let prover = Prover::new(params.clone(), secret);
    let public = prover.public_key().clone();
    println!("public key:  {}", hex::encode(public.to_bytes()));

    // Zero-knowledge proof bound to a session context.
    let proof = prover.prove(&mut rng, b"demo-session").expect("proof");
    println!("proof:       {}", hex::encode(proof.to_bytes()));

    let verifier = Verifier::new(params, public);
    println!(
        "same context:      {:?}",
        verifier.verify(&proof, b"demo-session").is_ok()
    );
    println!(
        "other context:     {:?}",
        verifier.verify(&proof, b"other-session").is_ok()
    );

    // Signature over a message: the same construction, different naming.
    let signature = prover.sign(&mut rng, b"pay 5 coins to bob").expect("signature");
    println!(
        "signature valid:   {:?}",
        verifier
            .verify_signature(&signature, b"pay 5 coins to bob")
            .is_ok()
    );

    // A single flipped byte on the wire is caught.
    let mut tampered = signature.to_bytes();
    tampered[10] ^= 0xFF;
    let rejected = match Proof::<Secp256k1>::from_bytes(&tampered) {
        Ok(parsed) => verifier
            .verify_signature(&parsed, b"pay 5 coins to bob")
            .is_err(),
        Err(_) => true,
    };
    println!("tamper detected:   {rejected:?}");
}
