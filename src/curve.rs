// Copyright (c) 2024, The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use num_bigint::BigUint;
use p384::{
    elliptic_curve::{
        bigint::ArrayEncoding,
        ops::Reduce,
        sec1::{FromEncodedPoint, ToEncodedPoint},
        Curve,
        Field,
    },
    AffinePoint,
    EncodedPoint,
    FieldBytes,
    NistP384,
    ProjectivePoint,
    Scalar,
};
use rand_core::CryptoRngCore;

/// Size of a serialized scalar in bytes.
pub(crate) const SCALAR_BYTES: usize = 48;

/// Size of a serialized group element in bytes: one tag byte plus two coordinates.
pub(crate) const POINT_BYTES: usize = 2 * SCALAR_BYTES + 1;

/// Get the order `N` of the P-384 base point group as an arbitrary-precision integer.
pub(crate) fn order() -> BigUint {
    BigUint::from_bytes_be(&NistP384::ORDER.to_be_byte_array())
}

/// Interpret big-endian bytes of any length as a scalar, reducing modulo the group order.
///
/// Inputs that fit the serialized scalar width use the curve library's wide reduction directly.
/// Longer inputs, which can only arise from hostile wire data, are first reduced with
/// arbitrary-precision arithmetic.
pub(crate) fn scalar_from_bytes(bytes: &[u8]) -> Scalar {
    let mut repr = FieldBytes::default();
    if bytes.len() <= SCALAR_BYTES {
        repr[SCALAR_BYTES - bytes.len()..].copy_from_slice(bytes);
    } else {
        let reduced = (BigUint::from_bytes_be(bytes) % order()).to_bytes_be();
        repr[SCALAR_BYTES - reduced.len()..].copy_from_slice(&reduced);
    }

    <Scalar as Reduce<<NistP384 as Curve>::Uint>>::reduce_bytes(&repr)
}

/// Encode a scalar as minimal big-endian bytes.
pub(crate) fn scalar_to_bytes(scalar: &Scalar) -> Vec<u8> {
    BigUint::from_bytes_be(&scalar.to_bytes()).to_bytes_be()
}

/// Fixed-base multiplication `k·G`, accepting unreduced big-endian scalar bytes.
pub(crate) fn mul_base(k: &[u8]) -> ProjectivePoint {
    ProjectivePoint::GENERATOR * scalar_from_bytes(k)
}

/// Variable-base multiplication `k·P`, accepting unreduced big-endian scalar bytes.
pub(crate) fn mul(point: &ProjectivePoint, k: &[u8]) -> ProjectivePoint {
    point * &scalar_from_bytes(k)
}

/// Encode a group element using the uncompressed SEC1 form.
pub(crate) fn encode_point(point: &ProjectivePoint) -> Vec<u8> {
    point.to_affine().to_encoded_point(false).as_bytes().to_vec()
}

/// Decode an uncompressed SEC1 encoding into a group element.
///
/// Returns `None` if the bytes are malformed, use a compressed or identity encoding, or do not
/// name a point on the curve.
pub(crate) fn decode_point(bytes: &[u8]) -> Option<ProjectivePoint> {
    let encoded = EncodedPoint::from_bytes(bytes).ok()?;
    if encoded.is_identity() || encoded.is_compressed() {
        return None;
    }

    Option::<AffinePoint>::from(AffinePoint::from_encoded_point(&encoded)).map(ProjectivePoint::from)
}

/// Draw the minimal big-endian encoding of a uniform scalar in `[1, N-1]`.
///
/// Zero draws are rejected and retried.
pub(crate) fn random_scalar<R: CryptoRngCore>(rng: &mut R) -> Vec<u8> {
    loop {
        let scalar = Scalar::random(&mut *rng);
        if !bool::from(scalar.is_zero()) {
            return scalar_to_bytes(&scalar);
        }
    }
}
