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

#![allow(non_snake_case)]

use subtle::{Choice, ConditionallySelectable};

use crate::edwards::EdwardsPoint;
use crate::scalar::Scalar;
use crate::traits::Identity;

/// Perform constant-time, variable-base scalar multiplication over the
/// low `bits` bits of `scalar`. `bits` is clamped to 256.
///
/// A left-to-right double-and-add ladder: every iteration performs both
/// the doubling and the addition, and selects between the two results
/// with a branch-free mask on the scalar bit. The bit length should be
/// a constant, never computed from secret data.
pub(crate) fn mul(point: &EdwardsPoint, scalar: &Scalar, bits: usize) -> EdwardsPoint {
    let mut Q = EdwardsPoint::identity();

    for pos in (0..bits.min(256)).rev() {
        let b = Choice::from((scalar[pos >> 3] >> (pos & 7)) & 1);

        let R = Q.double();
        let S = &R + point;
        Q = EdwardsPoint::conditional_select(&R, &S, b);
    }
    Q
}
