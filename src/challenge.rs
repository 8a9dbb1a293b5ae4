// Copyright (c) 2024, The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use p384::ProjectivePoint;
use sha2::{Digest, Sha256};

use crate::curve;

/// Compute the Fiat-Shamir challenge `H(message ‖ point)`.
///
/// The digest binds the message to a group element and doubles as the scalar consumed by the next
/// link of the ring. It is numerically below the group order, so no reduction is ever applied to
/// it on either side of the protocol.
pub(crate) fn challenge(message: &[u8], point: &ProjectivePoint) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(message);
    hasher.update(curve::encode_point(point));

    hasher.finalize().to_vec()
}
