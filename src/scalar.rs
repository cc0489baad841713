// -*- mode: rust; -*-
//
// This file is part of ec25519.
// Copyright (c) 2016-2021 isis lovecruft
// Copyright (c) 2016-2019 Henry de Valence
// Portions Copyright 2017 Brian Smith
// See LICENSE for licensing information.
//
// Authors:
// - Isis Agora Lovecruft <isis@patternsinthevoid.net>
// - Henry de Valence <hdevalence@hdevalence.ca>
// - Brian Smith <brian@briansmith.org>

//! Arithmetic on scalars (integers mod the group order).
//!
//! Both base points have prime order
//! \\( \ell = 2\^{252} + 27742317777372353535851937790883648493 \\).
//!
//! A [`Scalar`] is a plain 256-bit little-endian integer: unlike some
//! other curve libraries, no reducedness invariant is maintained on the
//! byte representation. Arithmetic operators reduce modulo \\(\ell\\)
//! as needed, and scalar-point multiplication consumes the raw bits,
//! which is what the X25519-style clamped-key convention requires.
//!
//! To obtain the canonical representative of a scalar, use
//! [`Scalar::reduce`] or construct it with
//! [`Scalar::from_bytes_mod_order`].

use core::array::TryFromSliceError;
use core::ops::Index;
use core::ops::{Add, AddAssign};
use core::ops::{Mul, MulAssign};
use core::ops::{Sub, SubAssign};

use subtle::Choice;
use subtle::ConstantTimeEq;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::backend;

/// An `UnpackedScalar` represents an element of the field GF(l),
/// optimized for speed.
///
/// This is a type alias for the backend scalar type.
type UnpackedScalar = backend::serial::u32::scalar::Scalar8;

/// The `Scalar` struct holds an integer \\(s\\) with
/// \\(0 \leq s < 2^{256}\\), usually interpreted as an element of
/// \\(\mathbb Z / \ell\mathbb Z \\).
#[allow(clippy::derived_hash_with_manual_eq)]
#[derive(Copy, Clone, Hash)]
pub struct Scalar {
    /// `bytes` is a little-endian byte encoding of the integer.
    pub(crate) bytes: [u8; 32],
}

impl Scalar {
    /// Construct a `Scalar` from the given 256-bit integer, without
    /// reducing it.
    pub const fn from_bytes(bytes: [u8; 32]) -> Scalar {
        Scalar { bytes }
    }

    /// Construct a `Scalar` from the first 32 bytes of a slice.
    ///
    /// # Errors
    ///
    /// Returns [`TryFromSliceError`] if the input `bytes` slice holds
    /// fewer than 32 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Scalar, TryFromSliceError> {
        let head = bytes.get(..32).unwrap_or(bytes);
        Ok(Scalar {
            bytes: head.try_into()?,
        })
    }

    /// Construct a `Scalar` by reducing a 256-bit little-endian integer
    /// modulo the group order \\( \ell \\).
    pub fn from_bytes_mod_order(bytes: [u8; 32]) -> Scalar {
        Scalar::from_bytes(bytes).reduce()
    }

    /// Convert this `Scalar` to its underlying sequence of bytes.
    pub const fn to_bytes(&self) -> [u8; 32] {
        self.bytes
    }

    /// View the little-endian byte encoding of this `Scalar`.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }

    /// Reduce this `Scalar` to the canonical representative in
    /// \\([0, \ell - 1]\\).
    pub fn reduce(&self) -> Scalar {
        self.unpack().reduce().pack()
    }

    /// Test whether this `Scalar` is zero modulo \\( \ell \\), in
    /// constant time.
    pub fn is_zero(&self) -> Choice {
        let reduced = self.unpack().reduce();
        let mut bits: u32 = 0;
        for i in 0..32 {
            bits |= reduced[i] as u32;
        }
        Choice::from(((bits.wrapping_sub(1) >> 8) & 1) as u8)
    }

    /// Invert this `Scalar` modulo \\( \ell \\), computing
    /// \\( s^{\ell - 2} \\).
    ///
    /// The result for zero input is zero.
    pub fn invert(&self) -> Scalar {
        self.unpack().invert().pack()
    }

    /// Unpack this `Scalar` to an `UnpackedScalar` for arithmetic.
    pub(crate) fn unpack(&self) -> UnpackedScalar {
        UnpackedScalar::from_bytes(&self.bytes)
    }
}

/// Clamp the given scalar bytes for use as a secret key.
///
/// This clears the low 3 bits (making the scalar a multiple of 8,
/// killing the cofactor), clears bit 255, and sets bit 254. See Daniel
/// J. Bernstein's paper [_Curve25519: new Diffie-Hellman speed
/// records_](https://cr.yp.to/ecdh/curve25519-20060209.pdf) for the
/// rationale.
///
/// The output is idempotent under repeated clamping.
pub const fn clamp_integer(mut bytes: [u8; 32]) -> [u8; 32] {
    bytes[0] &= 0b1111_1000;
    bytes[31] &= 0b0111_1111;
    bytes[31] |= 0b0100_0000;
    bytes
}

impl UnpackedScalar {
    /// Pack the limbs of this `UnpackedScalar` into a `Scalar`.
    fn pack(&self) -> Scalar {
        Scalar {
            bytes: self.as_bytes(),
        }
    }
}

impl Index<usize> for Scalar {
    type Output = u8;

    /// Index the bytes of the representative for this `Scalar`.
    /// Mutation is not permitted.
    fn index(&self, _index: usize) -> &u8 {
        &(self.bytes[_index])
    }
}

impl core::fmt::Debug for Scalar {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Scalar{{\n\tbytes: {:?},\n}}", &self.bytes)
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Scalar) -> Choice {
        self.bytes.ct_eq(&other.bytes)
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Scalar) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Scalar {}

#[cfg(feature = "zeroize")]
impl Zeroize for Scalar {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
    }
}

impl<'a, 'b> Add<&'b Scalar> for &'a Scalar {
    type Output = Scalar;
    fn add(self, rhs: &'b Scalar) -> Scalar {
        UnpackedScalar::add(&self.unpack(), &rhs.unpack()).pack()
    }
}

define_add_variants!(LHS = Scalar, RHS = Scalar, Output = Scalar);

impl<'b> AddAssign<&'b Scalar> for Scalar {
    fn add_assign(&mut self, rhs: &'b Scalar) {
        *self = (self as &Scalar) + rhs;
    }
}

define_add_assign_variants!(LHS = Scalar, RHS = Scalar);

impl<'a, 'b> Sub<&'b Scalar> for &'a Scalar {
    type Output = Scalar;
    fn sub(self, rhs: &'b Scalar) -> Scalar {
        UnpackedScalar::sub(&self.unpack(), &rhs.unpack()).pack()
    }
}

define_sub_variants!(LHS = Scalar, RHS = Scalar, Output = Scalar);

impl<'b> SubAssign<&'b Scalar> for Scalar {
    fn sub_assign(&mut self, rhs: &'b Scalar) {
        *self = (self as &Scalar) - rhs;
    }
}

define_sub_assign_variants!(LHS = Scalar, RHS = Scalar);

impl<'a, 'b> Mul<&'b Scalar> for &'a Scalar {
    type Output = Scalar;
    fn mul(self, rhs: &'b Scalar) -> Scalar {
        UnpackedScalar::mul(&self.unpack(), &rhs.unpack()).pack()
    }
}

define_mul_variants!(LHS = Scalar, RHS = Scalar, Output = Scalar);

impl<'b> MulAssign<&'b Scalar> for Scalar {
    fn mul_assign(&mut self, rhs: &'b Scalar) {
        *self = (self as &Scalar) * rhs;
    }
}

define_mul_assign_variants!(LHS = Scalar, RHS = Scalar);

#[cfg(test)]
mod test {
    use super::*;

    fn scalar_from_u64(x: u64) -> Scalar {
        let mut bytes = [0u8; 32];
        bytes[..8].copy_from_slice(&x.to_le_bytes());
        Scalar::from_bytes(bytes)
    }

    #[test]
    fn from_slice_takes_first_32_bytes() {
        let mut long = [0u8; 40];
        for (i, b) in long.iter_mut().enumerate() {
            *b = i as u8;
        }
        let s = Scalar::from_slice(&long).unwrap();
        assert_eq!(&s.to_bytes()[..], &long[..32]);
    }

    #[test]
    fn from_slice_rejects_short_input() {
        let short = [1u8; 31];
        assert!(Scalar::from_slice(&short).is_err());
    }

    #[test]
    fn add_small_scalars() {
        let two = scalar_from_u64(2);
        let three = scalar_from_u64(3);
        let five = scalar_from_u64(5);
        assert_eq!((two + three).reduce(), five.reduce());
    }

    #[test]
    fn sub_undoes_add() {
        let a = Scalar::from_bytes([0xad; 32]);
        let b = Scalar::from_bytes([0x42; 32]);
        let r = (&(&a + &b) - &b).reduce();
        assert_eq!(r, a.reduce());
    }

    #[test]
    fn mul_by_inverse_is_one() {
        let a = Scalar::from_bytes([0x37; 32]);
        let prod = (&a * &a.invert()).reduce();
        assert_eq!(prod, scalar_from_u64(1));
    }

    #[test]
    fn is_zero_detects_multiples_of_l() {
        assert!(bool::from(Scalar::from_bytes([0u8; 32]).is_zero()));

        // l itself
        let l = Scalar::from_bytes([
            0xed, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58,
            0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9, 0xde, 0x14,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10,
        ]);
        assert!(bool::from(l.is_zero()));

        assert!(!bool::from(scalar_from_u64(1).is_zero()));
    }

    #[test]
    fn clamping_sets_and_clears_the_right_bits() {
        let clamped = clamp_integer([0xff; 32]);
        assert_eq!(clamped[0], 0xf8);
        assert_eq!(clamped[31], 0x7f);
        for b in &clamped[1..31] {
            assert_eq!(*b, 0xff);
        }
    }

    #[test]
    fn clamping_is_idempotent() {
        let once = clamp_integer([0xa5; 32]);
        let twice = clamp_integer(once);
        assert_eq!(once, twice);
        assert_eq!(once[0] & 7, 0);
        assert_eq!(once[31] & 0x80, 0);
        assert_ne!(once[31] & 0x40, 0);
    }

    #[test]
    fn reduce_matches_from_bytes_mod_order() {
        let raw = [0xee; 32];
        assert_eq!(
            Scalar::from_bytes(raw).reduce(),
            Scalar::from_bytes_mod_order(raw)
        );
    }
}
