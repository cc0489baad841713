// -*- mode: rust; -*-
//
// This file is part of ec25519.
// Copyright (c) 2016-2021 isis lovecruft
// Copyright (c) 2016-2019 Henry de Valence
// See LICENSE for licensing information.
//
// Authors:
// - isis agora lovecruft <isis@patternsinthevoid.net>
// - Henry de Valence <hdevalence@hdevalence.ca>

//! This module contains various constants (such as curve parameters,
//! isomorphism factors, and the base points), endianness-adjusted for
//! the radix-\\(2^8\\) backend.

use crate::backend::serial::u32::field::FieldElement8;
use crate::backend::serial::u32::scalar::Scalar8;
use crate::edwards::{CompressedEdwardsY, EdwardsPoint};

/// The parameter `a` of the legacy-model curve
/// \\( ax^2 + y^2 = 1 + dx^2y^2 \\).
pub const EDWARDS_A: u32 = 486664;

/// The parameter `d` of the legacy-model curve.
pub const EDWARDS_D: u32 = 486660;

/// \\( -1 \pmod p \\), in canonical form.
pub(crate) const MINUS_ONE: FieldElement8 = FieldElement8::from_limbs([
    0xec, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x7f,
]);

/// \\( 2^{255} + 19 = 2^{256} - p \\), used by the freeze and parity
/// computations to detect values not below \\(p\\).
pub(crate) const MINUS_P: FieldElement8 = FieldElement8::from_limbs([
    19, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 128,
]);

/// \\( \sqrt{-1} \pmod p \\), precomputed as \\( 2^{(p-1)/4} \\).
///
/// Multiplying a square-root candidate by this constant moves between
/// the two cosets of fourth powers.
pub(crate) const SQRT_M1: FieldElement8 = FieldElement8::from_limbs([
    0xb0, 0xa0, 0x0e, 0x4a, 0x27, 0x1b, 0xee, 0xc4,
    0x78, 0xe4, 0x2f, 0xad, 0x06, 0x18, 0x43, 0x2f,
    0xa7, 0xd7, 0xfb, 0x3d, 0x99, 0x00, 0x4d, 0x2b,
    0x0b, 0xdf, 0xc1, 0x4f, 0x80, 0x24, 0x83, 0x2b,
]);

/// Factor to multiply an x coordinate with to convert from the legacy
/// to the Ed25519 representation.
pub(crate) const LEGACY_TO_ED25519: FieldElement8 = FieldElement8::from_limbs([
    0xe7, 0x81, 0xba, 0x00, 0x55, 0xfb, 0x91, 0x33,
    0x7d, 0xe5, 0x82, 0xb4, 0x2e, 0x2c, 0x5e, 0x3a,
    0x81, 0xb0, 0x03, 0xfc, 0x23, 0xf7, 0x84, 0x2d,
    0x44, 0xf9, 0x5f, 0x9f, 0x0b, 0x12, 0xd9, 0x70,
]);

/// Factor to multiply an x coordinate with to convert from the Ed25519
/// to the legacy representation. The inverse of [`LEGACY_TO_ED25519`].
pub(crate) const ED25519_TO_LEGACY: FieldElement8 = FieldElement8::from_limbs([
    0xe9, 0x68, 0x42, 0xdb, 0xaf, 0x04, 0xb4, 0x40,
    0xa1, 0xd5, 0x43, 0xf2, 0xf9, 0x38, 0x31, 0x28,
    0x01, 0x17, 0x05, 0x67, 0x9b, 0x81, 0x61, 0xf8,
    0xa9, 0x5b, 0x3e, 0x6a, 0x20, 0x67, 0x4b, 0x24,
]);

/// `L` is the order of the base point,
/// \\( \ell = 2^{252} + 27742317777372353535851937790883648493 \\).
pub(crate) const L: Scalar8 = Scalar8([
    0xed, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58,
    0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9, 0xde, 0x14,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10,
]);

/// `L` * `LFACTOR` = -1 (mod 2^8).
pub(crate) const LFACTOR: u8 = 27;

/// `RR` = \\( R^2 = 2^{512} \pmod \ell \\), where \\( R = 2^{256} \\) is
/// the Montgomery modulus.
pub(crate) const RR: Scalar8 = Scalar8([
    0x01, 0x0f, 0x9c, 0x44, 0xe3, 0x11, 0x06, 0xa4,
    0x47, 0x93, 0x85, 0x68, 0xa7, 0x1b, 0x0e, 0xd0,
    0x65, 0xbe, 0xf5, 0x17, 0xd2, 0x73, 0xec, 0xce,
    0x3d, 0x9a, 0x30, 0x7c, 0x1b, 0x41, 0x99, 0x03,
]);

/// The Ed25519 base point, in compressed Edwards y form.
pub const ED25519_BASEPOINT_COMPRESSED: CompressedEdwardsY = CompressedEdwardsY([
    0x58, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
]);

/// The base point used by Ed25519, as an `EdwardsPoint`. It is the
/// group inverse of [`LEGACY_BASEPOINT_POINT`].
///
/// The affine y coordinate is \\( 4/5 \pmod p \\); the x coordinate is
/// the even-parity root of the curve equation. The order of the base
/// point is \\( \ell \\).
pub const ED25519_BASEPOINT_POINT: EdwardsPoint = EdwardsPoint {
    X: FieldElement8::from_limbs([
        0x1a, 0xd5, 0x25, 0x8f, 0x60, 0x2d, 0x56, 0xc9,
        0xb2, 0xa7, 0x25, 0x95, 0x60, 0xc7, 0x2c, 0x69,
        0x5c, 0xdc, 0xd6, 0xfd, 0x31, 0xe2, 0xa4, 0xc0,
        0xfe, 0x53, 0x6e, 0xcd, 0xd3, 0x36, 0x69, 0x21,
    ]),
    Y: FieldElement8::from_limbs([
        0x58, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
        0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
        0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
        0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
    ]),
    Z: FieldElement8::ONE,
    T: FieldElement8::from_limbs([
        0xa3, 0xdd, 0xb7, 0xa5, 0xb3, 0x8a, 0xde, 0x6d,
        0xf5, 0x52, 0x51, 0x77, 0x80, 0x9f, 0xf0, 0x20,
        0x7d, 0xe3, 0xab, 0x64, 0x8e, 0x4e, 0xea, 0x66,
        0x65, 0x76, 0x8b, 0xd7, 0x0f, 0x5f, 0x87, 0x67,
    ]),
};

/// The legacy ec25519 base point, as an `EdwardsPoint`. It is the group
/// inverse of [`ED25519_BASEPOINT_POINT`].
///
/// The constant carries the same literal coordinates as the Ed25519
/// base point: the isomorphism between the two representations is
/// applied at the pack/unpack boundary, never to the constants.
///
/// In new software that doesn't need compatibility with historic
/// ec25519 key material, prefer [`ED25519_BASEPOINT_POINT`].
pub const LEGACY_BASEPOINT_POINT: EdwardsPoint = EdwardsPoint {
    X: FieldElement8::from_limbs([
        0x1a, 0xd5, 0x25, 0x8f, 0x60, 0x2d, 0x56, 0xc9,
        0xb2, 0xa7, 0x25, 0x95, 0x60, 0xc7, 0x2c, 0x69,
        0x5c, 0xdc, 0xd6, 0xfd, 0x31, 0xe2, 0xa4, 0xc0,
        0xfe, 0x53, 0x6e, 0xcd, 0xd3, 0x36, 0x69, 0x21,
    ]),
    Y: FieldElement8::from_limbs([
        0x58, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
        0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
        0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
        0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
    ]),
    Z: FieldElement8::ONE,
    T: FieldElement8::from_limbs([
        0xa3, 0xdd, 0xb7, 0xa5, 0xb3, 0x8a, 0xde, 0x6d,
        0xf5, 0x52, 0x51, 0x77, 0x80, 0x9f, 0xf0, 0x20,
        0x7d, 0xe3, 0xab, 0x64, 0x8e, 0x4e, 0xea, 0x66,
        0x65, 0x76, 0x8b, 0xd7, 0x0f, 0x5f, 0x87, 0x67,
    ]),
};
