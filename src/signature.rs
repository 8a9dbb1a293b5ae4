// Copyright (c) 2024, The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use core::mem;

use num_bigint::BigUint;
use num_traits::Zero;
use rand_core::CryptoRngCore;
use serde::{Deserialize, Serialize};
use snafu::prelude::*;

use crate::{
    challenge::challenge,
    curve,
    keys::{PrivateKey, PublicKey},
};

/// A Schnorr ring signature.
///
/// The signature owns copies of the ring keys it was produced against, the initial challenge
/// `e[0]`, and one scalar per ring member. Only the initial challenge travels with the signature;
/// the verifier reconstructs the rest of the chain.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RingSignature {
    #[serde(rename = "R")]
    ring: Vec<PublicKey>,
    #[serde(rename = "S")]
    s: Vec<Vec<u8>>,
    #[serde(rename = "E")]
    e: Vec<u8>,
}

/// Errors that can arise when producing a [`RingSignature`].
#[derive(Debug, Snafu)]
pub enum SignatureError {
    /// The message to sign is empty.
    #[snafu(display("You should provide a message to sign"))]
    EmptyMessage,
    /// The signer index does not fall within the ring.
    #[snafu(display("The index of the signer should be in the ring"))]
    InvalidSignerIndex,
    /// The ring has fewer than two members.
    #[snafu(display("The ring is too small: you need at least two participants"))]
    RingTooSmall,
    /// A ring member's bytes do not decode to a curve point.
    #[snafu(display("The ring key at index {index} is not a valid curve point"))]
    InvalidRingKey { index: usize },
    /// The closing scalar reduced to zero.
    #[snafu(display("Could not produce ring signature"))]
    SignatureFailed,
}

impl RingSignature {
    /// Sign a message on behalf of a ring of public keys.
    ///
    /// The `ring` must hold at least two keys, all of which decode to curve points, and
    /// `signer_index` must name the slot whose key corresponds to `signing_key`. Nothing checks
    /// that correspondence here: a mismatched index or key produces a signature that simply fails
    /// to verify.
    ///
    /// You must provide a [`CryptoRngCore`] random number generator `rng`; production callers
    /// should pass [`OsRng`](`rand_core::OsRng`).
    ///
    /// The construction chains challenges around the ring. Starting from a fresh nonce `k` at the
    /// signer's slot, each subsequent slot `i` draws a uniform scalar `s[i]` and derives the next
    /// challenge from `s[i]·G + e[i]·P[i]`, so every slot but the signer's is pure randomness.
    /// Closing the ring solves `s[r] = k - e[r]·x (mod N)` so that the signer's slot also hashes
    /// to the challenge that seeded it.
    pub fn sign<R: CryptoRngCore>(
        message: &[u8],
        ring: &[PublicKey],
        signer_index: usize,
        signing_key: &PrivateKey,
        rng: &mut R,
    ) -> Result<Self, SignatureError> {
        if message.is_empty() {
            return Err(SignatureError::EmptyMessage);
        }
        if signer_index >= ring.len() {
            return Err(SignatureError::InvalidSignerIndex);
        }
        if ring.len() < 2 {
            return Err(SignatureError::RingTooSmall);
        }

        let members = ring.len();
        let mut e = vec![Vec::new(); members];
        let mut s = vec![Vec::new(); members];

        // Seed the chain at the slot after the signer
        let k = curve::random_scalar(rng);
        e[(signer_index + 1) % members] = challenge(message, &curve::mul_base(&k));

        // Walk the remaining slots, drawing a uniform scalar for each
        let mut i = (signer_index + 1) % members;
        while i != signer_index {
            s[i] = curve::random_scalar(rng);

            let member = curve::decode_point(ring[i].as_bytes())
                .context(InvalidRingKeySnafu { index: i })?;
            let point = curve::mul_base(&s[i]) + curve::mul(&member, &e[i]);
            e[(i + 1) % members] = challenge(message, &point);

            i = (i + 1) % members;
        }

        // Close the ring. The closing scalar is reduced to its canonical representative in
        // `[0, N)` so that its big-endian encoding carries no hidden sign and is strictly below
        // the group order.
        let n = curve::order();
        let nonce = BigUint::from_bytes_be(&k) % &n;
        let product =
            BigUint::from_bytes_be(&e[signer_index]) * BigUint::from_bytes_be(signing_key.as_bytes()) % &n;
        let closing = (nonce + (&n - product)) % &n;
        if closing.is_zero() {
            // Tough luck...
            return Err(SignatureError::SignatureFailed);
        }
        s[signer_index] = closing.to_bytes_be();

        Ok(Self {
            ring: ring.to_vec(),
            s,
            e: mem::take(&mut e[0]),
        })
    }

    /// Verify this signature against a message.
    ///
    /// Returns `true` only if some member of the ring produced the signature on exactly this
    /// message. All failure modes collapse to `false`; the verifier deliberately does not explain
    /// which check failed.
    ///
    /// Verification consumes no secrets and is deterministic.
    pub fn verify(&self, message: &[u8]) -> bool {
        if self.ring.len() < 2 {
            return false;
        }
        if self.s.len() != self.ring.len() {
            return false;
        }
        if self.e.is_empty() {
            return false;
        }

        let members = self
            .ring
            .iter()
            .map(|key| curve::decode_point(key.as_bytes()))
            .collect::<Option<Vec<_>>>();
        let Some(members) = members else {
            return false;
        };

        // Recompute the challenge chain from the transported initial challenge
        let mut ee = self.e.clone();
        for (member, s) in members.iter().zip(&self.s) {
            let point = curve::mul_base(s) + curve::mul(member, &ee);
            ee = challenge(message, &point);
        }

        // The chain must loop back to where it began
        ee == self.e
    }

    /// Get the ring of public keys this signature was produced against.
    pub fn get_ring(&self) -> &[PublicKey] {
        &self.ring
    }

    /// Get the initial challenge `e[0]`.
    pub fn get_e(&self) -> &[u8] {
        &self.e
    }

    /// Get the per-member scalars.
    pub fn get_s(&self) -> &[Vec<u8>] {
        &self.s
    }

    /// Assemble a signature from its parts without validation.
    #[cfg(test)]
    pub(crate) fn from_parts(ring: Vec<PublicKey>, e: Vec<u8>, s: Vec<Vec<u8>>) -> Self {
        Self { ring, s, e }
    }
}

#[cfg(test)]
mod test {
    use num_bigint::BigUint;
    use num_traits::Zero;
    use rand_chacha::ChaCha12Rng;
    use rand_core::SeedableRng;

    use super::*;
    use crate::curve;

    fn keypair(rng: &mut ChaCha12Rng) -> (PublicKey, PrivateKey) {
        let private = PrivateKey::random(rng);
        (private.public_key(), private)
    }

    #[test]
    fn test_each_member_can_sign() {
        let mut rng = ChaCha12Rng::seed_from_u64(8675309);
        let (alice_public, alice_private) = keypair(&mut rng);
        let (bob_public, bob_private) = keypair(&mut rng);
        let (carol_public, carol_private) = keypair(&mut rng);

        let ring = [alice_public, bob_public, carol_public];
        let signers = [alice_private, bob_private, carol_private];
        let message = b"Big Brother Is Watching";

        for (index, signer) in signers.iter().enumerate() {
            let signature = RingSignature::sign(message, &ring, index, signer, &mut rng).unwrap();
            assert!(signature.verify(message));
        }
    }

    #[test]
    fn test_rejects_empty_message() {
        let mut rng = ChaCha12Rng::seed_from_u64(8675309);
        let (alice_public, alice_private) = keypair(&mut rng);
        let (bob_public, _) = keypair(&mut rng);

        let result = RingSignature::sign(b"", &[alice_public, bob_public], 0, &alice_private, &mut rng);
        assert!(matches!(result, Err(SignatureError::EmptyMessage)));
    }

    #[test]
    fn test_rejects_small_ring() {
        let mut rng = ChaCha12Rng::seed_from_u64(8675309);
        let (alice_public, alice_private) = keypair(&mut rng);

        let result = RingSignature::sign(b"hello", &[alice_public], 0, &alice_private, &mut rng);
        assert!(matches!(result, Err(SignatureError::RingTooSmall)));
    }

    #[test]
    fn test_rejects_invalid_index() {
        let mut rng = ChaCha12Rng::seed_from_u64(8675309);
        let (alice_public, alice_private) = keypair(&mut rng);
        let (bob_public, _) = keypair(&mut rng);
        let ring = [alice_public, bob_public];

        let result = RingSignature::sign(b"hello", &ring, ring.len(), &alice_private, &mut rng);
        assert!(matches!(result, Err(SignatureError::InvalidSignerIndex)));
    }

    #[test]
    fn test_rejects_undecodable_ring_key() {
        let mut rng = ChaCha12Rng::seed_from_u64(8675309);
        let (alice_public, alice_private) = keypair(&mut rng);
        let garbage = PublicKey::from_bytes(&b"not a curve point"[..]);

        let result = RingSignature::sign(b"hello", &[alice_public, garbage], 0, &alice_private, &mut rng);
        assert!(matches!(result, Err(SignatureError::InvalidRingKey { index: 1 })));
    }

    #[test]
    fn test_two_member_ring() {
        let mut rng = ChaCha12Rng::seed_from_u64(8675309);
        let (alice_public, alice_private) = keypair(&mut rng);
        let (bob_public, _) = keypair(&mut rng);

        let ring = [alice_public, bob_public];
        let signature = RingSignature::sign(b"hello", &ring, 0, &alice_private, &mut rng).unwrap();
        assert!(signature.verify(b"hello"));
    }

    #[test]
    fn test_wrong_message_rejected() {
        let mut rng = ChaCha12Rng::seed_from_u64(8675309);
        let (alice_public, alice_private) = keypair(&mut rng);
        let (bob_public, _) = keypair(&mut rng);

        let ring = [alice_public, bob_public];
        let message = b"very secret much hidden";
        let signature = RingSignature::sign(message, &ring, 0, &alice_private, &mut rng).unwrap();

        assert!(!signature.verify(b"not hidden very insecure"));
        assert!(signature.verify(message));
    }

    #[test]
    fn test_wrong_signer_index_rejected() {
        let mut rng = ChaCha12Rng::seed_from_u64(8675309);
        let (alice_public, alice_private) = keypair(&mut rng);
        let (bob_public, _) = keypair(&mut rng);

        // Signing cannot tell that the key sits at index 0, but the closing arithmetic used the
        // wrong slot, so verification must fail
        let ring = [alice_public, bob_public];
        let signature = RingSignature::sign(b"hello", &ring, 1, &alice_private, &mut rng).unwrap();
        assert!(!signature.verify(b"hello"));
    }

    #[test]
    fn test_ring_from_the_middle() {
        let mut rng = ChaCha12Rng::seed_from_u64(8675309);
        let keys = (0..5).map(|_| keypair(&mut rng)).collect::<Vec<_>>();
        let ring = keys.iter().map(|(public, _)| public.clone()).collect::<Vec<PublicKey>>();

        let signature = RingSignature::sign(b"hello", &ring, 2, &keys[2].1, &mut rng).unwrap();
        assert!(signature.verify(b"hello"));
    }

    #[test]
    fn test_ring_order_is_significant() {
        let mut rng = ChaCha12Rng::seed_from_u64(8675309);
        let (alice_public, alice_private) = keypair(&mut rng);
        let (bob_public, _) = keypair(&mut rng);

        let ring = vec![alice_public.clone(), bob_public.clone()];
        let signature = RingSignature::sign(b"hello", &ring, 0, &alice_private, &mut rng).unwrap();

        // Swapping members and scalars in lockstep still breaks the challenge chain
        let swapped = RingSignature::from_parts(
            vec![bob_public, alice_public],
            signature.get_e().to_vec(),
            vec![signature.get_s()[1].clone(), signature.get_s()[0].clone()],
        );
        assert!(!swapped.verify(b"hello"));
    }

    #[test]
    fn test_tampered_challenge_rejected() {
        let mut rng = ChaCha12Rng::seed_from_u64(8675309);
        let (alice_public, alice_private) = keypair(&mut rng);
        let (bob_public, _) = keypair(&mut rng);

        let ring = vec![alice_public, bob_public];
        let signature = RingSignature::sign(b"hello", &ring, 0, &alice_private, &mut rng).unwrap();

        let mut e = signature.get_e().to_vec();
        e[0] ^= 0x01;
        let damaged = RingSignature::from_parts(ring, e, signature.get_s().to_vec());
        assert!(!damaged.verify(b"hello"));
    }

    #[test]
    fn test_duplicate_members_allowed() {
        let mut rng = ChaCha12Rng::seed_from_u64(8675309);
        let (alice_public, alice_private) = keypair(&mut rng);

        let ring = [alice_public.clone(), alice_public];
        let signature = RingSignature::sign(b"hello", &ring, 0, &alice_private, &mut rng).unwrap();
        assert!(signature.verify(b"hello"));
    }

    #[test]
    fn test_closing_scalar_is_canonical() {
        let mut rng = ChaCha12Rng::seed_from_u64(8675309);
        let order = curve::order();

        for index in 0..8 {
            let (alice_public, alice_private) = keypair(&mut rng);
            let (bob_public, bob_private) = keypair(&mut rng);
            let ring = [alice_public, bob_public];

            let signer = if index % 2 == 0 { &alice_private } else { &bob_private };
            let signature =
                RingSignature::sign(b"canonical", &ring, index % 2, signer, &mut rng).unwrap();

            let closing = BigUint::from_bytes_be(&signature.get_s()[index % 2]);
            assert!(!closing.is_zero());
            assert!(closing < order);
        }
    }

    #[test]
    fn test_verify_is_deterministic() {
        let mut rng = ChaCha12Rng::seed_from_u64(8675309);
        let (alice_public, alice_private) = keypair(&mut rng);
        let (bob_public, _) = keypair(&mut rng);

        let ring = [alice_public, bob_public];
        let signature = RingSignature::sign(b"hello", &ring, 0, &alice_private, &mut rng).unwrap();

        for _ in 0..4 {
            assert!(signature.verify(b"hello"));
            assert!(!signature.verify(b"goodbye"));
        }
    }

    #[test]
    fn test_verify_rejects_structural_damage() {
        let mut rng = ChaCha12Rng::seed_from_u64(8675309);
        let (alice_public, alice_private) = keypair(&mut rng);
        let (bob_public, _) = keypair(&mut rng);

        let ring = vec![alice_public, bob_public];
        let signature = RingSignature::sign(b"hello", &ring, 0, &alice_private, &mut rng).unwrap();

        // Scalar count disagrees with the ring
        let mut s = signature.get_s().to_vec();
        s.pop();
        let damaged = RingSignature::from_parts(ring.clone(), signature.get_e().to_vec(), s);
        assert!(!damaged.verify(b"hello"));

        // Empty initial challenge
        let damaged =
            RingSignature::from_parts(ring.clone(), Vec::new(), signature.get_s().to_vec());
        assert!(!damaged.verify(b"hello"));

        // Ring shrunk below two members
        let damaged = RingSignature::from_parts(
            ring[..1].to_vec(),
            signature.get_e().to_vec(),
            signature.get_s()[..1].to_vec(),
        );
        assert!(!damaged.verify(b"hello"));

        // A ring member that does not decode
        let mut bad_ring = ring.clone();
        bad_ring[1] = PublicKey::from_bytes(&b"garbage"[..]);
        let damaged = RingSignature::from_parts(
            bad_ring,
            signature.get_e().to_vec(),
            signature.get_s().to_vec(),
        );
        assert!(!damaged.verify(b"hello"));

        // A tampered scalar
        let mut s = signature.get_s().to_vec();
        s[1] = curve::random_scalar(&mut rng);
        let damaged = RingSignature::from_parts(ring, signature.get_e().to_vec(), s);
        assert!(!damaged.verify(b"hello"));
    }
}
