use merlin::Transcript as MerlinTranscript;

use crate::Group;

/// Protocol label for transcript initialization.
const PROTOCOL_LABEL: &[u8] = b"Schnorr NIZK v1.0.0";

/// Domain separation tag for the protocol name.
const PROTOCOL_DST: &[u8] = b"schnorr-dlog";

/// Domain separation tag for challenge generation.
const CHALLENGE_DST: &[u8] = b"challenge";

/// Number of challenge bytes squeezed before reduction (64 bytes).
///
/// Doubling the scalar width keeps the modular-reduction bias negligible.
const CHALLENGE_BYTES: usize = 64;

/// Transcript wrapper for the Fiat-Shamir transformation.
///
/// Provides domain-separated, deterministic challenge generation using
/// Merlin. Every message is framed with a label and its length by the
/// underlying STROBE construction, so concatenation ambiguities between
/// adjacent fields are impossible.
pub struct Transcript(MerlinTranscript);

impl Transcript {
    /// Creates a new transcript for the Schnorr protocol.
    pub fn new() -> Self {
        let mut transcript = MerlinTranscript::new(PROTOCOL_LABEL);
        transcript.append_message(b"protocol", PROTOCOL_DST);
        Self(transcript)
    }

    /// Appends the application context or signed message.
    ///
    /// The context binds a proof to an application-specific statement so it
    /// cannot be replayed elsewhere. An empty context is valid and still
    /// contributes a well-defined (labelled, zero-length) message.
    pub fn append_context(&mut self, context: &[u8]) {
        self.0.append_message(b"context", context);
    }

    /// Appends the group name to the transcript.
    pub fn append_group_name(&mut self, name: &str) {
        self.0.append_message(b"group", name.as_bytes());
    }

    /// Appends the serialized generator to the transcript.
    pub fn append_generator(&mut self, generator: &[u8]) {
        self.0.append_message(b"generator", generator);
    }

    /// Appends the serialized public key to the transcript.
    pub fn append_public_key(&mut self, public_key: &[u8]) {
        self.0.append_message(b"public-key", public_key);
    }

    /// Appends the serialized commitment `R` to the transcript.
    pub fn append_commitment(&mut self, commitment: &[u8]) {
        self.0.append_message(b"commitment", commitment);
    }

    /// Squeezes the challenge scalar `e` out of the transcript.
    ///
    /// Identical transcript inputs always yield the identical challenge;
    /// any single differing byte yields an unrelated one.
    pub fn challenge_scalar<G: Group>(&mut self) -> G::Scalar {
        let mut buf = [0u8; CHALLENGE_BYTES];
        self.0.challenge_bytes(CHALLENGE_DST, &mut buf);
        G::scalar_from_wide_bytes(&buf)
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Ristretto255, Secp256k1};

    fn filled_transcript(commitment: &[u8]) -> Transcript {
        let mut transcript = Transcript::new();
        transcript.append_group_name("test");
        transcript.append_generator(b"g");
        transcript.append_public_key(b"X");
        transcript.append_context(b"ctx");
        transcript.append_commitment(commitment);
        transcript
    }

    #[test]
    fn challenge_is_deterministic() {
        let c1 = filled_transcript(b"R").challenge_scalar::<Secp256k1>();
        let c2 = filled_transcript(b"R").challenge_scalar::<Secp256k1>();
        assert_eq!(c1, c2);
    }

    #[test]
    fn challenge_differs_for_different_commitments() {
        let c1 = filled_transcript(b"R").challenge_scalar::<Secp256k1>();
        let c2 = filled_transcript(b"R'").challenge_scalar::<Secp256k1>();
        assert_ne!(c1, c2);
    }

    #[test]
    fn challenge_differs_for_different_context() {
        let mut t1 = Transcript::new();
        t1.append_context(b"");
        let c1 = t1.challenge_scalar::<Ristretto255>();

        let mut t2 = Transcript::new();
        t2.append_context(b"x");
        let c2 = t2.challenge_scalar::<Ristretto255>();

        assert_ne!(c1, c2);
    }

    #[test]
    fn empty_context_is_well_defined() {
        let mut t1 = Transcript::new();
        t1.append_context(b"");
        let c1 = t1.challenge_scalar::<Secp256k1>();

        let mut t2 = Transcript::new();
        t2.append_context(b"");
        let c2 = t2.challenge_scalar::<Secp256k1>();

        assert_eq!(c1, c2);
    }

    #[test]
    fn field_boundaries_are_unambiguous() {
        // "ab" + "c" and "a" + "bc" must not collide thanks to length framing.
        let mut t1 = Transcript::new();
        t1.append_public_key(b"ab");
        t1.append_context(b"c");
        let c1 = t1.challenge_scalar::<Secp256k1>();

        let mut t2 = Transcript::new();
        t2.append_public_key(b"a");
        t2.append_context(b"bc");
        let c2 = t2.challenge_scalar::<Secp256k1>();

        assert_ne!(c1, c2);
    }
}
