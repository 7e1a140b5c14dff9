/// Ristretto255 group implementation (fast, modern elliptic curve).
pub mod ristretto;
/// secp256k1 group implementation (the Bitcoin curve).
pub mod secp256k1;

pub use ristretto::Ristretto255;
pub use secp256k1::Secp256k1;
