// Copyright (c) 2024, The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use base64::{engine::general_purpose::STANDARD, Engine};
use rand_core::CryptoRngCore;
use serde::{Deserialize, Serialize};
use snafu::prelude::*;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{
    codec::{Base64Snafu, CodecError},
    curve,
};

/// A ring member's public key.
///
/// The key holds the uncompressed SEC1 encoding of a P-384 point. It is deliberately just bytes:
/// ring signatures must be able to carry arbitrary key material so that verification, not
/// construction, decides validity.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PublicKey(Vec<u8>);

/// A signing key.
///
/// The key holds the big-endian encoding of a nonzero scalar `x` with public counterpart `x·G`.
/// Key material is wiped from memory on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey(Vec<u8>);

impl PublicKey {
    /// Build a [`PublicKey`] from raw bytes.
    ///
    /// The bytes are not checked against the curve; an off-curve key is rejected when used.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Build a [`PublicKey`] from its base64 text form.
    pub fn from_base64(text: &str) -> Result<Self, CodecError> {
        Ok(Self(STANDARD.decode(text).context(Base64Snafu)?))
    }

    /// Get the raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Encode the key as base64 text.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.0)
    }
}

impl PrivateKey {
    /// Generate a new [`PrivateKey`] with a uniform nonzero scalar.
    ///
    /// You must provide a [`CryptoRngCore`] random number generator `rng`; production callers
    /// should pass [`OsRng`](`rand_core::OsRng`). An entropy failure panics, since nothing sound
    /// can be signed without it.
    pub fn random<R: CryptoRngCore>(rng: &mut R) -> Self {
        Self(curve::random_scalar(rng))
    }

    /// Build a [`PrivateKey`] from raw scalar bytes.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Build a [`PrivateKey`] from its base64 text form.
    pub fn from_base64(text: &str) -> Result<Self, CodecError> {
        Ok(Self(STANDARD.decode(text).context(Base64Snafu)?))
    }

    /// Get the raw scalar bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Encode the key as base64 text.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.0)
    }

    /// Compute the [`PublicKey`] corresponding to this key.
    pub fn public_key(&self) -> PublicKey {
        PublicKey(curve::encode_point(&curve::mul_base(&self.0)))
    }
}
