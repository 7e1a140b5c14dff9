//! Non-interactive Schnorr zero-knowledge proofs and signatures over
//! prime-order groups.
//!
//! The crate implements the Fiat-Shamir transformed Schnorr identification
//! protocol: a prover holding a secret scalar `x` with public key `X = x*G`
//! publishes a commitment `R = r*G`, derives the challenge
//! `e = H(R, X, context)` from a transcript, and responds with
//! `s = r + e*x mod n`. A verifier accepts when `s*G == R + e*X`.
//!
//! Proofs and signatures share one code path: a signature is simply a proof
//! whose bound context is the signed message. Whether the public key is
//! bound into the challenge is controlled by
//! [`Parameters::bind_public_key`](protocol::Parameters::bind_public_key)
//! (enabled by default, which is the strictly safer variant).
//!
//! # Groups
//!
//! Protocol logic is generic over the [`Group`] trait. Two backends ship:
//!
//! - [`Secp256k1`] — the primary backend, built on the `k256` crate
//! - [`Ristretto255`] — built on `curve25519-dalek`
//!
//! # Example
//!
//! ```rust
//! use schnorr_zkp::{Parameters, Prover, Secp256k1, SecretKey, SecureRng, Verifier};
//!
//! let params = Parameters::<Secp256k1>::new();
//! let mut rng = SecureRng::new();
//!
//! let secret = SecretKey::random(&mut rng).unwrap();
//! let prover = Prover::new(params.clone(), secret);
//! let public_key = prover.public_key().clone();
//!
//! let proof = prover.prove(&mut rng, b"session-42").unwrap();
//!
//! let verifier = Verifier::new(params, public_key);
//! assert!(verifier.verify(&proof, b"session-42").is_ok());
//! assert!(verifier.verify(&proof, b"session-43").is_err());
//! ```

/// Cryptographic primitives: the group trait and secure randomness.
pub mod crypto;
/// Consumed interfaces of the unrelated economics collaborators.
pub mod economics;
/// Error types for the library.
pub mod error;
/// Concrete group implementations (secp256k1, Ristretto255).
pub mod groups;
/// The Schnorr protocol: gadgets, transcript, prover, and verifier.
pub mod protocol;

pub use crypto::{Group, SecureRng};
pub use error::{Error, Result};
pub use groups::{Ristretto255, Secp256k1};
pub use protocol::{
    Commitment, Parameters, Proof, Prover, PublicKey, Response, SecretKey, Signature, Transcript,
    Verifier,
};
