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

//! Various constants, such as the curve parameters and the base points
//! of the two representations.
//!
//! Both base points have affine \\( y = 4/5 \pmod p \\) and order
//! \\( \ell = 2^{252} + 27742317777372353535851937790883648493 \\),
//! and carry identical literal coordinates: the isomorphism between
//! the Ed25519 and legacy representations is applied when points are
//! packed and unpacked, not to the constants themselves.

#![allow(non_snake_case)]

pub use crate::backend::serial::u32::constants::{
    ED25519_BASEPOINT_COMPRESSED, ED25519_BASEPOINT_POINT, EDWARDS_A, EDWARDS_D,
    LEGACY_BASEPOINT_POINT,
};

pub(crate) use crate::backend::serial::u32::constants::{
    ED25519_TO_LEGACY, L, LEGACY_TO_ED25519, LFACTOR, MINUS_ONE, MINUS_P, RR, SQRT_M1,
};

#[cfg(test)]
mod test {
    use super::*;
    use crate::traits::IsIdentity;

    #[test]
    fn compressed_basepoint_matches_basepoint_constant() {
        // The compressed constant is the y coordinate with the sign
        // bit clear; the y limbs of the point constant are the same
        // bytes.
        let b = &ED25519_BASEPOINT_POINT;
        assert_eq!(b.Y.as_bytes(), ED25519_BASEPOINT_COMPRESSED.to_bytes());
    }

    #[test]
    fn basepoint_is_not_the_identity() {
        assert!(!ED25519_BASEPOINT_POINT.is_identity());
        assert!(!LEGACY_BASEPOINT_POINT.is_identity());
    }

    #[test]
    fn curve_parameters_relate() {
        // d = a - 4, and the addition constants divide evenly.
        assert_eq!(EDWARDS_A - EDWARDS_D, 4);
        assert_eq!(EDWARDS_A % 8, 0);
        assert_eq!(EDWARDS_D % 4, 0);
    }
}
