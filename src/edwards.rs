// -*- mode: rust; -*-
//
// This file is part of ec25519.
// Copyright (c) 2016-2021 isis lovecruft
// Copyright (c) 2016-2020 Henry de Valence
// See LICENSE for licensing information.
//
// Authors:
// - isis agora lovecruft <isis@patternsinthevoid.net>
// - Henry de Valence <hdevalence@hdevalence.ca>

//! Group operations for Curve25519, in Edwards form.
//!
//! ## Two representations
//!
//! The same abstract group is exposed in two isomorphic twisted Edwards
//! representations: the Ed25519 one and the legacy ec25519 one, which
//! differ by a constant scaling of the x coordinate. The representation
//! only matters at the serialization boundary, where the appropriate
//! isomorphism factor is multiplied in.
//!
//! ## Encoding and Decoding
//!
//! Encoding is done by converting to and from a [`CompressedEdwardsY`]
//! struct (255 bits of y plus the sign of x, as in Ed25519) or a
//! [`CompressedLegacyX`] struct (255 bits of the legacy-model x plus
//! the sign of y), both typed wrappers around `[u8; 32]`. Affine
//! \\((x, y)\\) pairs can also be loaded and stored in either
//! convention.
//!
//! ## Equality Testing
//!
//! The `EdwardsPoint` struct implements the [`subtle::ConstantTimeEq`]
//! trait for constant-time equality checking, and the Rust `Eq` trait
//! for variable-time equality checking.
//!
//! ## Scalar Multiplication
//!
//! Scalar multiplication on Edwards points is provided by the `*`
//! operator between a [`Scalar`] and an `EdwardsPoint`, which performs
//! a constant-time double-and-add ladder, and by
//! [`EdwardsPoint::mul_bits`], which runs the same ladder over a
//! caller-chosen number of low bits of the scalar. The bit length
//! must be a public constant: choosing it from secret data would leak
//! through timing.
//!
//! ## Implementation
//!
//! The arithmetic works on the extended coordinates \\((X, Y, Z, T)\\)
//! of Hisil, Wong, Carter, and Dawson, with \\(T Z = X Y\\) and affine
//! coordinates \\((X/Z, Y/Z)\\). The addition and doubling formulas
//! produce the result directly in extended coordinates.

// We allow non snake_case names because coordinates in projective space are
// traditionally denoted by the capitalisation of their respective
// counterparts in affine space.  Yeah, you heard me, rustc, I'm gonna have my
// affine and projective cakes and eat both of them too.
#![allow(non_snake_case)]

use core::array::TryFromSliceError;
use core::fmt::Debug;
use core::ops::{Add, AddAssign};
use core::ops::{Mul, MulAssign};
use core::ops::{Neg, Sub, SubAssign};

use subtle::Choice;
use subtle::ConditionallyNegatable;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;

use crate::constants;
use crate::field::FieldElement;
use crate::scalar::Scalar;
use crate::traits::Identity;

// ------------------------------------------------------------------------
// Compressed points
// ------------------------------------------------------------------------

/// In "Edwards y" / "Ed25519" format, the curve point \\((x,y)\\) is
/// determined by the \\(y\\)-coordinate and the sign of \\(x\\).
///
/// The first 255 bits of a `CompressedEdwardsY` represent the
/// \\(y\\)-coordinate.  The high bit of the 32nd byte gives the sign of
/// the Ed25519-model \\(x\\).
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct CompressedEdwardsY(pub [u8; 32]);

/// In the legacy ec25519 format the roles are swapped: the first 255
/// bits hold the legacy-model \\(x\\)-coordinate, and the high bit of
/// the 32nd byte gives the sign of \\(y\\).
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct CompressedLegacyX(pub [u8; 32]);

impl ConstantTimeEq for CompressedEdwardsY {
    fn ct_eq(&self, other: &CompressedEdwardsY) -> Choice {
        self.as_bytes().ct_eq(other.as_bytes())
    }
}

impl ConstantTimeEq for CompressedLegacyX {
    fn ct_eq(&self, other: &CompressedLegacyX) -> Choice {
        self.as_bytes().ct_eq(other.as_bytes())
    }
}

impl Debug for CompressedEdwardsY {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        write!(f, "CompressedEdwardsY: {:?}", self.as_bytes())
    }
}

impl Debug for CompressedLegacyX {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        write!(f, "CompressedLegacyX: {:?}", self.as_bytes())
    }
}

impl CompressedEdwardsY {
    /// View this `CompressedEdwardsY` as an array of bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Copy this `CompressedEdwardsY` to an array of bytes.
    pub const fn to_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Construct a `CompressedEdwardsY` from a slice of bytes.
    ///
    /// # Errors
    ///
    /// Returns [`TryFromSliceError`] if the input `bytes` slice does not have
    /// a length of 32.
    pub fn from_slice(bytes: &[u8]) -> Result<CompressedEdwardsY, TryFromSliceError> {
        bytes.try_into().map(CompressedEdwardsY)
    }

    /// Attempt to decompress to an `EdwardsPoint`.
    ///
    /// Returns `None` if the input is not the \\(y\\)-coordinate of a
    /// curve point.
    pub fn decompress(&self) -> Option<EdwardsPoint> {
        let mut y_bytes = self.0;
        y_bytes[31] &= 0x7f;
        let Y = FieldElement::from_bytes(&y_bytes);

        // Solve a X^2 + Y^2 = 1 + d X^2 Y^2 for X:
        //   X^2 = (1 - Y^2) / (a - d Y^2)
        let YY = Y.square();
        let u = &FieldElement::ONE - &YY;
        let v = &FieldElement::ONE.mul_small(constants::EDWARDS_A)
            - &YY.mul_small(constants::EDWARDS_D);
        let XX = &u * &v.invert();

        let (was_square, mut X) = XX.sqrt();
        if (!was_square).into() {
            return None;
        }

        // The sign bit refers to the Ed25519-model x coordinate.
        let compressed_sign_bit = Choice::from(self.0[31] >> 7);
        let parity = (&X * &constants::LEGACY_TO_ED25519).is_negative();
        X.conditional_negate(compressed_sign_bit ^ parity);

        let T = &X * &Y;
        Some(EdwardsPoint {
            X,
            Y,
            Z: FieldElement::ONE,
            T,
        })
    }
}

impl CompressedLegacyX {
    /// View this `CompressedLegacyX` as an array of bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Copy this `CompressedLegacyX` to an array of bytes.
    pub const fn to_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Construct a `CompressedLegacyX` from a slice of bytes.
    ///
    /// # Errors
    ///
    /// Returns [`TryFromSliceError`] if the input `bytes` slice does not have
    /// a length of 32.
    pub fn from_slice(bytes: &[u8]) -> Result<CompressedLegacyX, TryFromSliceError> {
        bytes.try_into().map(CompressedLegacyX)
    }

    /// Attempt to decompress to an `EdwardsPoint`.
    ///
    /// Returns `None` if the input is not the legacy \\(x\\)-coordinate
    /// of a curve point.
    pub fn decompress(&self) -> Option<EdwardsPoint> {
        let mut x_bytes = self.0;
        x_bytes[31] &= 0x7f;
        let x = FieldElement::from_bytes(&x_bytes);

        // Solve a X^2 + Y^2 = 1 + d X^2 Y^2 for Y:
        //   Y^2 = (1 - a X^2) / (1 - d X^2)
        let XX = x.square();
        let u = &FieldElement::ONE - &XX.mul_small(constants::EDWARDS_A);
        let v = &FieldElement::ONE - &XX.mul_small(constants::EDWARDS_D);
        let YY = &u * &v.invert();

        let (was_square, mut Y) = YY.sqrt();
        if (!was_square).into() {
            return None;
        }

        let compressed_sign_bit = Choice::from(self.0[31] >> 7);
        let parity = Y.is_negative();
        Y.conditional_negate(compressed_sign_bit ^ parity);

        let X = &x * &constants::LEGACY_TO_ED25519;
        let T = &X * &Y;
        Some(EdwardsPoint {
            X,
            Y,
            Z: FieldElement::ONE,
            T,
        })
    }
}

impl TryFrom<&[u8]> for CompressedEdwardsY {
    type Error = TryFromSliceError;

    fn try_from(slice: &[u8]) -> Result<CompressedEdwardsY, TryFromSliceError> {
        Self::from_slice(slice)
    }
}

impl TryFrom<&[u8]> for CompressedLegacyX {
    type Error = TryFromSliceError;

    fn try_from(slice: &[u8]) -> Result<CompressedLegacyX, TryFromSliceError> {
        Self::from_slice(slice)
    }
}

impl Identity for CompressedEdwardsY {
    fn identity() -> CompressedEdwardsY {
        CompressedEdwardsY([
            1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
            0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        ])
    }
}

impl Identity for CompressedLegacyX {
    /// The identity has \\(x = 0\\) and \\(y = 1\\), whose parity bit
    /// is set.
    fn identity() -> CompressedLegacyX {
        CompressedLegacyX([
            0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
            0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x80,
        ])
    }
}

// ------------------------------------------------------------------------
// Internal point representation
// ------------------------------------------------------------------------

/// An `EdwardsPoint` represents a point on the curve in extended
/// twisted Edwards coordinates.
///
/// The internal representation is not unique; for serialization a
/// point should always be packed.
#[derive(Copy, Clone)]
#[allow(missing_docs)]
pub struct EdwardsPoint {
    pub(crate) X: FieldElement,
    pub(crate) Y: FieldElement,
    pub(crate) Z: FieldElement,
    pub(crate) T: FieldElement,
}

// ------------------------------------------------------------------------
// Constructors
// ------------------------------------------------------------------------

impl Identity for EdwardsPoint {
    fn identity() -> EdwardsPoint {
        EdwardsPoint {
            X: FieldElement::ZERO,
            Y: FieldElement::ONE,
            Z: FieldElement::ONE,
            T: FieldElement::ZERO,
        }
    }
}

impl EdwardsPoint {
    /// Verify that affine coordinates (with \\(Z = 1\\)) satisfy the
    /// curve equation \\( a X^2 + Y^2 = 1 + d X^2 Y^2 \\), and fill in
    /// the extended coordinate \\(T = X Y\\) on success.
    fn complete_affine(X: FieldElement, Y: FieldElement) -> Option<EdwardsPoint> {
        let XX = X.square();
        let YY = Y.square();
        let aXX = XX.mul_small(constants::EDWARDS_A);
        let dXX = XX.mul_small(constants::EDWARDS_D);
        let lhs = &aXX + &YY;
        let rhs = &FieldElement::ONE + &(&dXX * &YY);
        let residue = &lhs - &rhs;

        if residue.is_zero().into() {
            let T = &X * &Y;
            Some(EdwardsPoint {
                X,
                Y,
                Z: FieldElement::ONE,
                T,
            })
        } else {
            None
        }
    }

    /// Load a point of the Ed25519 representation from its affine
    /// \\((x, y)\\) coordinates, as 32-byte little-endian field
    /// elements.
    ///
    /// Returns `None` if the coordinates do not satisfy the curve
    /// equation.
    pub fn from_affine_ed25519(x: &[u8; 32], y: &[u8; 32]) -> Option<EdwardsPoint> {
        let X = &FieldElement::from_bytes(x) * &constants::ED25519_TO_LEGACY;
        let Y = FieldElement::from_bytes(y);
        EdwardsPoint::complete_affine(X, Y)
    }

    /// Load a point of the legacy representation from its affine
    /// \\((x, y)\\) coordinates, as 32-byte little-endian field
    /// elements.
    ///
    /// Returns `None` if the coordinates do not satisfy the curve
    /// equation.
    pub fn from_affine_legacy(x: &[u8; 32], y: &[u8; 32]) -> Option<EdwardsPoint> {
        let X = &FieldElement::from_bytes(x) * &constants::LEGACY_TO_ED25519;
        let Y = FieldElement::from_bytes(y);
        EdwardsPoint::complete_affine(X, Y)
    }

    /// Store the affine \\((x, y)\\) coordinates of this point in the
    /// Ed25519 representation, canonically reduced.
    pub fn to_affine_ed25519(&self) -> ([u8; 32], [u8; 32]) {
        let zinv = self.Z.invert();
        let x = &(&self.X * &zinv) * &constants::LEGACY_TO_ED25519;
        let y = &self.Y * &zinv;
        (x.as_bytes(), y.as_bytes())
    }

    /// Store the affine \\((x, y)\\) coordinates of this point in the
    /// legacy representation, canonically reduced.
    pub fn to_affine_legacy(&self) -> ([u8; 32], [u8; 32]) {
        let zinv = self.Z.invert();
        let x = &(&self.X * &zinv) * &constants::ED25519_TO_LEGACY;
        let y = &self.Y * &zinv;
        (x.as_bytes(), y.as_bytes())
    }

    /// Compress this point to the Ed25519 wire format: 255 bits of y
    /// and the sign of x.
    pub fn compress(&self) -> CompressedEdwardsY {
        let zinv = self.Z.invert();
        let x = &(&self.X * &zinv) * &constants::LEGACY_TO_ED25519;
        let y = &self.Y * &zinv;
        let mut s = y.as_bytes();
        s[31] |= x.is_negative().unwrap_u8() << 7;
        CompressedEdwardsY(s)
    }

    /// Compress this point to the legacy ec25519 wire format: 255 bits
    /// of the legacy-model x and the sign of y.
    pub fn compress_legacy(&self) -> CompressedLegacyX {
        let zinv = self.Z.invert();
        let x = &(&self.X * &zinv) * &constants::ED25519_TO_LEGACY;
        let y = &self.Y * &zinv;
        let mut s = x.as_bytes();
        s[31] |= y.is_negative().unwrap_u8() << 7;
        CompressedLegacyX(s)
    }
}

// ------------------------------------------------------------------------
// Equality
// ------------------------------------------------------------------------

impl ConstantTimeEq for EdwardsPoint {
    fn ct_eq(&self, other: &EdwardsPoint) -> Choice {
        // We would like to check that the point (X/Z, Y/Z) is equal to
        // the point (X'/Z', Y'/Z') without converting into affine
        // coordinates (x, y) and (x', y'), which requires two inversions.
        // We have that X = xZ and X' = x'Z'. Thus, x = x' is equivalent to
        // (xZ)Z' = (x'Z')Z, and similarly for the y-coordinate.

        (&self.X * &other.Z).ct_eq(&(&other.X * &self.Z))
            & (&self.Y * &other.Z).ct_eq(&(&other.Y * &self.Z))
    }
}

impl PartialEq for EdwardsPoint {
    fn eq(&self, other: &EdwardsPoint) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for EdwardsPoint {}

impl ConditionallySelectable for EdwardsPoint {
    fn conditional_select(a: &EdwardsPoint, b: &EdwardsPoint, choice: Choice) -> EdwardsPoint {
        EdwardsPoint {
            X: FieldElement::conditional_select(&a.X, &b.X, choice),
            Y: FieldElement::conditional_select(&a.Y, &b.Y, choice),
            Z: FieldElement::conditional_select(&a.Z, &b.Z, choice),
            T: FieldElement::conditional_select(&a.T, &b.T, choice),
        }
    }
}

// ------------------------------------------------------------------------
// Doubling
// ------------------------------------------------------------------------

impl EdwardsPoint {
    /// Add this point to itself.
    ///
    /// Equivalent to `self + self`, but faster.
    pub fn double(&self) -> EdwardsPoint {
        let A = self.X.square();
        let B = self.Y.square();
        let C = self.Z.square().mul_small(2);
        let D = -&A;

        let t0 = &self.X + &self.Y;
        let E = &(&t0.square() - &A) - &B;

        let G = &D + &B;
        let F = &G - &C;
        let H = &D - &B;

        EdwardsPoint {
            X: &E * &F,
            Y: &G * &H,
            Z: &F * &G,
            T: &E * &H,
        }
    }
}

// ------------------------------------------------------------------------
// Addition and Subtraction
// ------------------------------------------------------------------------

impl<'a, 'b> Add<&'b EdwardsPoint> for &'a EdwardsPoint {
    type Output = EdwardsPoint;
    /// Unified addition tuned for this curve; the small constants are
    /// `a/8`, `d/4` and `a/4`.
    fn add(self, other: &'b EdwardsPoint) -> EdwardsPoint {
        let t0 = (&self.Y - &self.X).mul_small(constants::EDWARDS_A / 8);
        let A = &(&other.Y - &other.X) * &t0;

        let t1 = (&self.Y + &self.X).mul_small(constants::EDWARDS_A / 8);
        let B = &(&other.Y + &other.X) * &t1;

        let C = &self.T * &other.T.mul_small(constants::EDWARDS_D / 4);
        let D = &self.Z * &other.Z.mul_small(constants::EDWARDS_A / 4);

        let E = &B - &A;
        let F = &D + &C;
        let G = &D - &C;
        let H = &B + &A;

        EdwardsPoint {
            X: &E * &F,
            Y: &G * &H,
            Z: &F * &G,
            T: &E * &H,
        }
    }
}

define_add_variants!(LHS = EdwardsPoint, RHS = EdwardsPoint, Output = EdwardsPoint);

impl<'b> AddAssign<&'b EdwardsPoint> for EdwardsPoint {
    fn add_assign(&mut self, _rhs: &'b EdwardsPoint) {
        *self = (self as &EdwardsPoint) + _rhs;
    }
}

define_add_assign_variants!(LHS = EdwardsPoint, RHS = EdwardsPoint);

impl<'a, 'b> Sub<&'b EdwardsPoint> for &'a EdwardsPoint {
    type Output = EdwardsPoint;
    fn sub(self, other: &'b EdwardsPoint) -> EdwardsPoint {
        self + &(-other)
    }
}

define_sub_variants!(LHS = EdwardsPoint, RHS = EdwardsPoint, Output = EdwardsPoint);

impl<'b> SubAssign<&'b EdwardsPoint> for EdwardsPoint {
    fn sub_assign(&mut self, _rhs: &'b EdwardsPoint) {
        *self = (self as &EdwardsPoint) - _rhs;
    }
}

define_sub_assign_variants!(LHS = EdwardsPoint, RHS = EdwardsPoint);

// ------------------------------------------------------------------------
// Negation
// ------------------------------------------------------------------------

impl<'a> Neg for &'a EdwardsPoint {
    type Output = EdwardsPoint;

    fn neg(self) -> EdwardsPoint {
        EdwardsPoint {
            X: -(&self.X),
            Y: self.Y,
            Z: self.Z,
            T: -(&self.T),
        }
    }
}

impl Neg for EdwardsPoint {
    type Output = EdwardsPoint;

    fn neg(self) -> EdwardsPoint {
        -&self
    }
}

// ------------------------------------------------------------------------
// Scalar multiplication
// ------------------------------------------------------------------------

impl<'b> MulAssign<&'b Scalar> for EdwardsPoint {
    fn mul_assign(&mut self, scalar: &'b Scalar) {
        let result = (self as &EdwardsPoint) * scalar;
        *self = result;
    }
}

define_mul_assign_variants!(LHS = EdwardsPoint, RHS = Scalar);

define_mul_variants!(LHS = EdwardsPoint, RHS = Scalar, Output = EdwardsPoint);
define_mul_variants!(LHS = Scalar, RHS = EdwardsPoint, Output = EdwardsPoint);

impl<'a, 'b> Mul<&'b Scalar> for &'a EdwardsPoint {
    type Output = EdwardsPoint;
    /// Scalar multiplication: compute `scalar * self`, consuming all
    /// 256 bits of the scalar.
    fn mul(self, scalar: &'b Scalar) -> EdwardsPoint {
        crate::backend::variable_base_mul(self, scalar)
    }
}

impl<'a, 'b> Mul<&'b EdwardsPoint> for &'a Scalar {
    type Output = EdwardsPoint;
    /// Scalar multiplication: compute `self * point`, consuming all
    /// 256 bits of the scalar.
    fn mul(self, point: &'b EdwardsPoint) -> EdwardsPoint {
        point * self
    }
}

impl EdwardsPoint {
    /// Scalar multiplication over the low `bits` bits of `scalar`,
    /// which is clamped to 256.
    ///
    /// This speeds up multiplication when the scalar is known to be
    /// short. The bit length must always be a public constant, never
    /// computed at runtime from secret data, so that no timing attacks
    /// are possible.
    pub fn mul_bits(&self, scalar: &Scalar, bits: usize) -> EdwardsPoint {
        crate::backend::variable_base_mul_bits(self, scalar, bits)
    }
}

// ------------------------------------------------------------------------
// Debug traits
// ------------------------------------------------------------------------

impl Debug for EdwardsPoint {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        write!(
            f,
            "EdwardsPoint{{\n\tX: {:?},\n\tY: {:?},\n\tZ: {:?},\n\tT: {:?}\n}}",
            &self.X, &self.Y, &self.Z, &self.T
        )
    }
}

// ------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::constants;
    use crate::scalar::clamp_integer;
    use crate::traits::IsIdentity;

    /// Legacy-format compressed keys from the libuecc test suite;
    /// all four decompress successfully.
    static LEGACY_KEYS: [[u8; 32]; 4] = [
        [
            0x83, 0x36, 0x9b, 0xed, 0xdc, 0xa7, 0x77, 0x58,
            0x51, 0x67, 0x52, 0x0f, 0xb5, 0x4a, 0x7f, 0xb0,
            0x59, 0x10, 0x2b, 0xf4, 0xe0, 0xa4, 0x6d, 0xd5,
            0xfb, 0x1c, 0x63, 0x3d, 0x83, 0xdb, 0x77, 0xa2,
        ],
        [
            0xb4, 0xdb, 0xdb, 0x0c, 0x05, 0xdd, 0x28, 0x20,
            0x45, 0x34, 0xfa, 0x27, 0xc5, 0xaf, 0xca, 0x4d,
            0xcd, 0xa5, 0x39, 0x7d, 0x83, 0x3e, 0x30, 0x64,
            0xf7, 0xa7, 0x28, 0x1b, 0x24, 0x9d, 0xc7, 0xc7,
        ],
        [
            0x34, 0x6a, 0x11, 0xa8, 0xbd, 0x8f, 0xce, 0xdf,
            0xcd, 0xe2, 0xe1, 0x9c, 0x99, 0x6b, 0x6e, 0x44,
            0x97, 0xd0, 0xda, 0xfc, 0x3f, 0x5a, 0xf7, 0x09,
            0x6c, 0x91, 0x5b, 0xd0, 0xf9, 0xfe, 0x4f, 0xe9,
        ],
        [
            0x3b, 0xac, 0x2a, 0xda, 0x2f, 0xbf, 0xa1, 0xea,
            0x75, 0xb2, 0xcb, 0x21, 0x44, 0x90, 0xd5, 0xd7,
            0x18, 0xf1, 0xbb, 0xe5, 0xb2, 0x26, 0x18, 0x44,
            0x88, 0xc0, 0x7c, 0xf1, 0xa5, 0x51, 0xe8, 0xd9,
        ],
    ];

    /// Canonical coordinate bytes (X, Y, Z, T) of `LEGACY_KEYS[0]`
    /// decompressed, computed with a Python big-integer model of the
    /// same formulas.
    static KEY0_UNPACKED: [[u8; 32]; 4] = [
        [
            0x58, 0x26, 0xad, 0xf5, 0x5c, 0x58, 0x75, 0x58,
            0x73, 0x55, 0x94, 0xbf, 0x4f, 0x03, 0x63, 0x18,
            0xa9, 0x6b, 0xf1, 0x8d, 0x6c, 0x6c, 0x6a, 0x79,
            0x3e, 0x24, 0x1d, 0xab, 0x61, 0x9d, 0xb4, 0x72,
        ],
        [
            0xe3, 0xce, 0x26, 0x29, 0x0c, 0x1f, 0xfd, 0x9f,
            0x7a, 0xa7, 0xbc, 0x10, 0x57, 0xc9, 0xc6, 0x92,
            0x04, 0x2f, 0x4c, 0xef, 0x0e, 0xa6, 0x04, 0xa1,
            0xfe, 0x46, 0xc2, 0xa7, 0xb0, 0x75, 0xa1, 0x08,
        ],
        [
            0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        ],
        [
            0x95, 0xac, 0x50, 0xdc, 0xe7, 0x23, 0xfa, 0xc1,
            0x28, 0xce, 0xae, 0x26, 0x25, 0x8c, 0x2c, 0x6b,
            0xb3, 0x7e, 0xcc, 0x40, 0xb9, 0x0f, 0xc5, 0xf4,
            0x65, 0x5c, 0x75, 0xf0, 0x9d, 0x28, 0xb8, 0x62,
        ],
    ];

    /// Packed legacy public keys derived as `LEGACY_KEYS[i] * base`,
    /// computed with the same big-integer model. These pin the full
    /// 256-bit ladder, not just its low bits.
    static DERIVED_PUBLIC_KEYS: [[u8; 32]; 4] = [
        [
            0x05, 0x2b, 0x00, 0x6c, 0x20, 0xb8, 0xdc, 0xc5,
            0xdc, 0xb9, 0x7c, 0xd9, 0x6a, 0x85, 0x78, 0xf7,
            0x91, 0xc5, 0x49, 0xa9, 0x49, 0x71, 0xfc, 0x93,
            0x3c, 0xbe, 0x2a, 0x29, 0x99, 0xbf, 0x38, 0x28,
        ],
        [
            0x9c, 0x99, 0x3f, 0x3d, 0x42, 0xd4, 0x56, 0xf6,
            0x98, 0xe7, 0x84, 0x90, 0x2e, 0x43, 0x1d, 0x46,
            0x7e, 0xe5, 0xfa, 0xdb, 0xf8, 0x14, 0xc0, 0x3f,
            0xbd, 0x7c, 0xc2, 0xfe, 0x77, 0x43, 0xc7, 0x9a,
        ],
        [
            0x1d, 0x34, 0x2d, 0xcf, 0xbe, 0x83, 0xd5, 0x0a,
            0x40, 0xfe, 0x58, 0xf6, 0x34, 0x96, 0x7d, 0x1e,
            0x9f, 0x8c, 0x77, 0x29, 0x87, 0x51, 0xeb, 0xaa,
            0xba, 0x38, 0x6b, 0x96, 0x13, 0x06, 0x31, 0xf9,
        ],
        [
            0x38, 0xaf, 0x70, 0xbd, 0x3b, 0xb6, 0x39, 0x5e,
            0xed, 0x69, 0xa4, 0x62, 0x9b, 0xfa, 0x41, 0xf8,
            0xb2, 0xf6, 0x3d, 0xb5, 0x69, 0x30, 0x88, 0x1c,
            0xba, 0xa0, 0x26, 0xa9, 0x0b, 0x03, 0xc1, 0x9c,
        ],
    ];

    /// The Ed25519-form encoding of `DERIVED_PUBLIC_KEYS[0]`.
    static DERIVED_PUBLIC_KEY_0_ED25519: [u8; 32] = [
        0x7c, 0xc4, 0xca, 0x04, 0xb4, 0x4b, 0x42, 0xfa,
        0x44, 0x2a, 0x86, 0xca, 0x51, 0xa6, 0xc3, 0x5f,
        0x06, 0x5c, 0x29, 0xc0, 0x94, 0x29, 0xf5, 0xab,
        0x8a, 0x72, 0xf9, 0x34, 0x06, 0x81, 0x76, 0x5d,
    ];

    fn scalar_from_u64(x: u64) -> Scalar {
        let mut bytes = [0u8; 32];
        bytes[..8].copy_from_slice(&x.to_le_bytes());
        Scalar::from_bytes(bytes)
    }

    #[test]
    fn identity_doubles_to_identity() {
        assert!(EdwardsPoint::identity().double().is_identity());
    }

    #[test]
    fn identity_plus_base_is_base() {
        let sum = &EdwardsPoint::identity() + &constants::LEGACY_BASEPOINT_POINT;
        assert!(!sum.is_identity());
        assert_eq!(
            sum.compress_legacy(),
            constants::LEGACY_BASEPOINT_POINT.compress_legacy()
        );
    }

    #[test]
    fn addition_is_commutative() {
        let b = constants::ED25519_BASEPOINT_POINT;
        let b2 = b.double();
        assert_eq!((&b + &b2).compress(), (&b2 + &b).compress());
    }

    #[test]
    fn double_matches_add_to_self() {
        let b = constants::ED25519_BASEPOINT_POINT;
        assert_eq!(b.double().compress(), (&b + &b).compress());
        let b4 = b.double().double();
        assert_eq!(b4.compress(), (&b.double() + &b.double()).compress());
    }

    #[test]
    fn point_minus_itself_is_identity() {
        let b = constants::LEGACY_BASEPOINT_POINT;
        assert!((&b - &b).is_identity());
        assert!((&b + &(-&b)).is_identity());
    }

    #[test]
    fn double_negation_is_identity_map() {
        let b = constants::ED25519_BASEPOINT_POINT;
        assert_eq!(-&(-&b), b);
    }

    #[test]
    fn compressed_identity_constants() {
        assert_eq!(
            EdwardsPoint::identity().compress(),
            CompressedEdwardsY::identity()
        );
        assert_eq!(
            EdwardsPoint::identity().compress_legacy(),
            CompressedLegacyX::identity()
        );
    }

    #[test]
    fn legacy_keys_round_trip() {
        for bytes in LEGACY_KEYS.iter() {
            let compressed = CompressedLegacyX(*bytes);
            let point = compressed.decompress().expect("key should be on the curve");
            assert_eq!(point.compress_legacy(), compressed);
        }
    }

    #[test]
    fn legacy_key_unpacks_to_expected_coordinates() {
        let point = CompressedLegacyX(LEGACY_KEYS[0])
            .decompress()
            .expect("key should be on the curve");
        assert_eq!(point.X.as_bytes(), KEY0_UNPACKED[0]);
        assert_eq!(point.Y.as_bytes(), KEY0_UNPACKED[1]);
        assert_eq!(point.Z.as_bytes(), KEY0_UNPACKED[2]);
        assert_eq!(point.T.as_bytes(), KEY0_UNPACKED[3]);
    }

    #[test]
    fn derived_public_keys_match_fixtures() {
        for (key, expected) in LEGACY_KEYS.iter().zip(DERIVED_PUBLIC_KEYS.iter()) {
            let public = &constants::LEGACY_BASEPOINT_POINT * &Scalar::from_bytes(*key);
            assert_eq!(public.compress_legacy().to_bytes(), *expected);
        }
    }

    #[test]
    fn derived_public_key_ed25519_encoding_matches_fixture() {
        let public = &constants::LEGACY_BASEPOINT_POINT * &Scalar::from_bytes(LEGACY_KEYS[0]);
        assert_eq!(
            public.compress(),
            CompressedEdwardsY(DERIVED_PUBLIC_KEY_0_ED25519)
        );
    }

    #[test]
    fn ed25519_basepoint_encoding_round_trips() {
        let compressed = constants::ED25519_BASEPOINT_COMPRESSED;
        let point = compressed.decompress().expect("base y is on the curve");
        assert_eq!(point.compress(), compressed);
    }

    #[test]
    fn decompression_sign_handling() {
        // Manually set the high bit of the last byte to flip the sign
        let mut minus_bytes = constants::ED25519_BASEPOINT_COMPRESSED.to_bytes();
        minus_bytes[31] |= 1 << 7;
        let plus = constants::ED25519_BASEPOINT_COMPRESSED
            .decompress()
            .expect("base y is on the curve");
        let minus = CompressedEdwardsY(minus_bytes)
            .decompress()
            .expect("negated point is on the curve");
        assert_eq!(minus, -&plus);
    }

    #[test]
    fn scalar_mult_by_zero_one_two() {
        let b = constants::ED25519_BASEPOINT_POINT;
        assert!((&b * &scalar_from_u64(0)).is_identity());
        assert_eq!((&b * &scalar_from_u64(1)).compress(), b.compress());
        assert_eq!((&b * &scalar_from_u64(2)).compress(), b.double().compress());
    }

    #[test]
    fn scalar_mult_distributes_over_small_sums() {
        let b = constants::LEGACY_BASEPOINT_POINT;
        let two_b = &b * &scalar_from_u64(2);
        let three_b = &b * &scalar_from_u64(3);
        let five_b = &b * &scalar_from_u64(5);
        assert_eq!((&two_b + &three_b).compress(), five_b.compress());
    }

    #[test]
    fn ladder_matches_repeated_addition() {
        let b = constants::ED25519_BASEPOINT_POINT;
        let k = 77u64;
        let ladder = &b * &scalar_from_u64(k);
        let mut sum = EdwardsPoint::identity();
        for _ in 0..k {
            sum = &sum + &b;
        }
        assert_eq!(ladder.compress(), sum.compress());
    }

    #[test]
    fn ladder_matches_repeated_addition_beyond_one_byte() {
        // A multi-byte scalar drives the ladder through bit positions
        // the small-scalar tests never reach; the 256-bit cases are
        // pinned by `derived_public_keys_match_fixtures`.
        let b = constants::LEGACY_BASEPOINT_POINT;
        let k = 0x1234u64;
        let ladder = &b * &scalar_from_u64(k);
        let mut sum = EdwardsPoint::identity();
        for _ in 0..k {
            sum = &sum + &b;
        }
        assert_eq!(ladder.compress_legacy(), sum.compress_legacy());
    }

    #[test]
    fn mul_bits_uses_only_the_low_bits() {
        let b = constants::ED25519_BASEPOINT_POINT;
        // 0x13 = 0b10011; the low four bits encode 3.
        let s = scalar_from_u64(0x13);
        assert_eq!(
            b.mul_bits(&s, 4).compress(),
            (&b * &scalar_from_u64(3)).compress()
        );
    }

    #[test]
    fn mul_bits_clamps_the_bit_length() {
        let b = constants::LEGACY_BASEPOINT_POINT;
        let s = Scalar::from_bytes(clamp_integer([0x5a; 32]));
        assert_eq!(b.mul_bits(&s, 300).compress(), (&b * &s).compress());
    }

    #[test]
    fn mul_is_commutative_in_operand_order() {
        let b = constants::ED25519_BASEPOINT_POINT;
        let s = scalar_from_u64(31337);
        assert_eq!((&s * &b).compress(), (&b * &s).compress());
    }

    #[test]
    fn affine_identity_round_trips() {
        let (x, y) = EdwardsPoint::identity().to_affine_ed25519();
        assert_eq!(x, [0u8; 32]);
        let mut one = [0u8; 32];
        one[0] = 1;
        assert_eq!(y, one);

        let p = EdwardsPoint::from_affine_ed25519(&x, &y).expect("identity is on the curve");
        assert!(p.is_identity());

        let p = EdwardsPoint::from_affine_legacy(&x, &y).expect("identity is on the curve");
        assert!(p.is_identity());
    }

    #[test]
    fn from_affine_rejects_junk() {
        let mut one = [0u8; 32];
        one[0] = 1;
        assert!(EdwardsPoint::from_affine_ed25519(&one, &one).is_none());
        assert!(EdwardsPoint::from_affine_legacy(&one, &one).is_none());
    }

    #[test]
    fn compress_agrees_with_affine_parity() {
        let b = constants::ED25519_BASEPOINT_POINT;
        let (x, y) = b.to_affine_ed25519();
        let compressed = b.compress();
        assert_eq!(compressed.as_bytes()[31] >> 7, x[0] & 1);
        assert_eq!(&compressed.as_bytes()[..31], &y[..31]);
    }

    #[test]
    fn select_between_points_is_exact() {
        let a = EdwardsPoint::identity();
        let b = constants::ED25519_BASEPOINT_POINT;
        let r0 = EdwardsPoint::conditional_select(&a, &b, subtle::Choice::from(0));
        let r1 = EdwardsPoint::conditional_select(&a, &b, subtle::Choice::from(1));
        assert_eq!(r0, a);
        assert_eq!(r1, b);
    }

    #[test]
    fn random_small_ladders_match_addition_chains() {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        let b = constants::LEGACY_BASEPOINT_POINT;
        for _ in 0..4 {
            let k: u8 = rng.gen();
            let ladder = &b * &scalar_from_u64(k as u64);
            let mut sum = EdwardsPoint::identity();
            for _ in 0..k {
                sum = &sum + &b;
            }
            assert_eq!(ladder.compress(), sum.compress());
        }
    }
}
