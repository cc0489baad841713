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

//! **INTERNALS:** the arithmetic backend.
//!
//! There is a single serial backend, using 32 byte-sized limbs for
//! field elements and scalars alike, plus the scalar multiplication
//! built on top of it.

use crate::edwards::EdwardsPoint;
use crate::scalar::Scalar;

pub(crate) mod serial;

/// Perform constant-time, variable-base scalar multiplication.
pub(crate) fn variable_base_mul(point: &EdwardsPoint, scalar: &Scalar) -> EdwardsPoint {
    serial::scalar_mul::variable_base::mul(point, scalar, 256)
}

/// Perform constant-time, variable-base scalar multiplication over the
/// low `bits` bits of `scalar`.
pub(crate) fn variable_base_mul_bits(
    point: &EdwardsPoint,
    scalar: &Scalar,
    bits: usize,
) -> EdwardsPoint {
    serial::scalar_mul::variable_base::mul(point, scalar, bits)
}
