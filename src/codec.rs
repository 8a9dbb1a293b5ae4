// Copyright (c) 2024, The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use base64::{engine::general_purpose::STANDARD, Engine};
use snafu::prelude::*;

use crate::signature::RingSignature;

/// Errors that can arise when encoding or decoding signatures and keys.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum CodecError {
    /// The base64 text form is malformed.
    #[snafu(display("Invalid base64 encoding"))]
    Base64 { source: base64::DecodeError },
    /// The structured record is malformed or missing a field.
    #[snafu(display("Malformed signature record"))]
    Record { source: serde_json::Error },
}

impl RingSignature {
    /// Encode this signature as a structured byte record.
    ///
    /// The record carries three named fields: the ring `R`, the per-member scalars `S`, and the
    /// initial challenge `E`. Byte strings round-trip exactly, including empty ones.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CodecError> {
        serde_json::to_vec(self).context(RecordSnafu)
    }

    /// Decode a signature from its structured byte record.
    ///
    /// All three fields must be present. Nothing here checks the signature against the curve;
    /// a decoded signature that carries nonsense simply fails to verify.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        serde_json::from_slice(bytes).context(RecordSnafu)
    }

    /// Encode this signature as base64 text, the friendly form for transport and storage.
    pub fn to_base64(&self) -> Result<String, CodecError> {
        Ok(STANDARD.encode(self.to_bytes()?))
    }

    /// Decode a signature from its base64 text form.
    pub fn from_base64(text: &str) -> Result<Self, CodecError> {
        Self::from_bytes(&STANDARD.decode(text).context(Base64Snafu)?)
    }
}
