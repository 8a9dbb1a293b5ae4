// Copyright (c) 2024, The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

//! An experimental Rust implementation of Schnorr ring signatures.
//!
//! # Overview
//!
//! A ring signature lets a signer sign a message against a set of arbitrary public keys, the
//! ring. Successful verification of a signature means that the holder of one of the ring's
//! private keys produced it, but does not reveal which one. This crate implements the classic
//! Rivest-Shamir-Tauman construction carried over to a discrete-log group, with Schnorr-style
//! challenges.
//!
//! More formally, let `G` generate a prime-order group of order `N`, let `H` be a cryptographic
//! hash, and let the ring hold public keys `P[0], ..., P[R-1]` with `P[i] = x[i]·G`. A signer
//! holding `x[r]` draws a nonce `k`, seeds the challenge chain with `e[r+1] = H(m ‖ k·G)`, and
//! walks the remaining slots drawing uniform scalars `s[i]` and chaining
//! `e[i+1] = H(m ‖ s[i]·G + e[i]·P[i])`. Closing the ring solves `s[r] = k - e[r]·x[r] (mod N)`,
//! which makes the chain consistent at every slot. The signature is the ring, the initial
//! challenge `e[0]`, and the scalars `s[0], ..., s[R-1]`; a verifier recomputes the chain from
//! `e[0]` and accepts only if it loops back to `e[0]` exactly.
//!
//! Every non-signer scalar is uniform, and the signer's own scalar inherits uniformity from the
//! nonce, so the signature is distributed identically no matter which ring member produced it.
//!
//! # Implementation notes
//!
//! This implementation makes several opinionated choices:
//! - It uses [NIST P-384](https://crates.io/crates/p384) for group operations, with keys and
//!   group elements travelling in uncompressed SEC1 form.
//! - It uses SHA-256 for challenge hashing.
//! - Signatures serialize to a structured record (JSON with fields `R`, `S`, `E`) and travel as
//!   standard base64 text; keys travel as base64 of their raw bytes.
//!
//! The curve and hash are baked into the wire formats; changing either requires versioning the
//! signature record.
//!
//! A small command-line front-end (`generate`, `sign`, `verify`) ships with the crate.
//!
//! # Warning
//!
//! While this implementation is written with security in mind, it is currently **experimental**
//! and not suitable for production use. In particular it makes no constant-time claims beyond
//! those of the underlying curve library, and signatures here are neither linkable nor traceable
//! by design.
//!
//! # Example
//!
//! ```
//! use rand_core::OsRng;
//! use ringsig::{PrivateKey, RingSignature};
//!
//! let mut rng = OsRng;
//!
//! // Three parties publish their keys; the second will sign
//! let keys = (0..3).map(|_| PrivateKey::random(&mut rng)).collect::<Vec<PrivateKey>>();
//! let ring = keys.iter().map(PrivateKey::public_key).collect::<Vec<_>>();
//!
//! let message = b"Big Brother Is Watching";
//! let signature = RingSignature::sign(message, &ring, 1, &keys[1], &mut rng).unwrap();
//!
//! // Anyone can confirm that some ring member signed, but not which one
//! assert!(signature.verify(message));
//!
//! // The signature travels as base64 text
//! let text = signature.to_base64().unwrap();
//! let decoded = RingSignature::from_base64(&text).unwrap();
//! assert!(decoded.verify(message));
//! ```

/// Fiat-Shamir challenge hashing.
pub(crate) mod challenge;
/// Signature and key wire encodings.
pub mod codec;
pub use codec::CodecError;
/// Group operations over the P-384 curve.
pub(crate) mod curve;
/// Ring signature key pairs.
pub mod keys;
pub use keys::{PrivateKey, PublicKey};
/// Ring signature generation and verification.
pub mod signature;
pub use signature::{RingSignature, SignatureError};
