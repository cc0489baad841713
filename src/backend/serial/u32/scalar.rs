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

//! Arithmetic mod \\(\ell = 2^{252} + 27742317777372353535851937790883648493\\)
//! with 32 byte-sized limbs.
//!
//! Multiplication is byte-serial Montgomery multiplication with
//! \\(R = 2^{256}\\); the per-limb reduction uses
//! \\(-\ell^{-1} \equiv 27 \pmod{2^8}\\). Addition, subtraction and
//! reduction run limb-by-limb in signed 64-bit accumulators, so borrows
//! propagate exactly.

use core::fmt::Debug;
use core::ops::{Index, IndexMut};

use subtle::Choice;
use subtle::ConditionallySelectable;

use crate::constants;

/// The `Scalar8` struct represents an element in
/// \\(\mathbb Z / \ell\mathbb Z\\) as 32 byte limbs.
#[derive(Copy, Clone)]
pub(crate) struct Scalar8(pub(crate) [u8; 32]);

impl Debug for Scalar8 {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        write!(f, "Scalar8: {:?}", &self.0[..])
    }
}

impl Index<usize> for Scalar8 {
    type Output = u8;
    fn index(&self, _index: usize) -> &u8 {
        &(self.0[_index])
    }
}

impl IndexMut<usize> for Scalar8 {
    fn index_mut(&mut self, _index: usize) -> &mut u8 {
        &mut (self.0[_index])
    }
}

impl ConditionallySelectable for Scalar8 {
    fn conditional_select(a: &Scalar8, b: &Scalar8, choice: Choice) -> Scalar8 {
        let mut out = [0u8; 32];
        for i in 0..32 {
            out[i] = u8::conditional_select(&a.0[i], &b.0[i], choice);
        }
        Scalar8(out)
    }
}

impl Scalar8 {
    /// The scalar \\( 0 \\).
    pub(crate) const ZERO: Scalar8 = Scalar8([0u8; 32]);

    /// The scalar \\( 1 \\), in standard (non-Montgomery) form.
    pub(crate) const ONE: Scalar8 = Scalar8([
        1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    ]);

    /// Unpack a 32 byte / 256 bit scalar into 32 byte limbs.
    pub(crate) fn from_bytes(bytes: &[u8; 32]) -> Scalar8 {
        Scalar8(*bytes)
    }

    /// Pack the limbs of this `Scalar8` into 32 bytes.
    pub(crate) fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Reduce to the unique representative in \\([0, \ell - 1]\\).
    ///
    /// With `n` the top nibble of the input, compute both
    /// `a - n * l` and `a - (n - 1) * l` limb-by-limb with borrow, and
    /// select the first candidate exactly when it did not underflow.
    pub(crate) fn reduce(&self) -> Scalar8 {
        let n = (self.0[31] >> 4) as i64;

        let mut out1 = [0u8; 32];
        let mut out2 = [0u8; 32];
        let mut u1: i64 = 0;
        let mut u2: i64 = 0;

        for j in 0..32 {
            u1 += self.0[j] as i64 - n * constants::L[j] as i64;
            u2 += self.0[j] as i64 - (n - 1) * constants::L[j] as i64;
            out1[j] = u1 as u8;
            out2[j] = u2 as u8;
            u1 >>= 8;
            u2 >>= 8;
        }

        // The borrow-out is 0 or -1; pick the second candidate on
        // underflow of the first.
        let underflow = Choice::from((u1 & 1) as u8);
        Scalar8::conditional_select(&Scalar8(out1), &Scalar8(out2), underflow)
    }

    /// Compute `a + b` (mod \\(\ell\\)), weakly reduced.
    ///
    /// The correction multiple is chosen from the top nibbles so that
    /// reduced inputs give a result in \\([0, 2\ell)\\).
    pub(crate) fn add(a: &Scalar8, b: &Scalar8) -> Scalar8 {
        let n = 1i64 - (a[31] >> 4) as i64 - (b[31] >> 4) as i64;

        let mut out = [0u8; 32];
        let mut u: i64 = 0;
        for j in 0..32 {
            u += a[j] as i64 + b[j] as i64 + n * constants::L[j] as i64;
            out[j] = u as u8;
            u >>= 8;
        }
        Scalar8(out)
    }

    /// Compute `a - b` (mod \\(\ell\\)), weakly reduced.
    pub(crate) fn sub(a: &Scalar8, b: &Scalar8) -> Scalar8 {
        let n = 8i64 - (a[31] >> 4) as i64 + (b[31] >> 4) as i64;

        let mut out = [0u8; 32];
        let mut u: i64 = 0;
        for j in 0..32 {
            u += a[j] as i64 - b[j] as i64 + n * constants::L[j] as i64;
            out[j] = u as u8;
            u >>= 8;
        }
        Scalar8(out)
    }

    /// Compute `(a * b) / R` (mod \\(\ell\\)), where `R` is the
    /// Montgomery modulus \\(2^{256}\\).
    ///
    /// Interleaved multiply-and-reduce: every outer iteration adds one
    /// limb product and one multiple of \\(\ell\\) chosen to clear the
    /// bottom byte.
    pub(crate) fn montgomery_mul(a: &Scalar8, b: &Scalar8) -> Scalar8 {
        let mut out = Scalar8::ZERO;

        for i in 0..32 {
            let mut u: u32 = out[0] as u32 + (a[i] as u32) * (b[0] as u32);
            let nq = (u.wrapping_mul(constants::LFACTOR as u32)) & 255;
            u += nq * constants::L[0] as u32;

            for j in 1..32 {
                u += ((out[j] as u32 + (a[i] as u32) * (b[j] as u32))
                    + nq * constants::L[j] as u32)
                    << 8;
                u >>= 8;
                out[j - 1] = u as u8;
            }
            out[31] = (u >> 8) as u8;
        }
        out
    }

    /// Compute `a * b` (mod \\(\ell\\)).
    pub(crate) fn mul(a: &Scalar8, b: &Scalar8) -> Scalar8 {
        let b = b.reduce();
        let ab = Scalar8::montgomery_mul(a, &b);
        Scalar8::montgomery_mul(&ab, &constants::RR)
    }

    /// Compute `self^-1` (mod \\(\ell\\)) as `self^(l - 2)`.
    ///
    /// Left-to-right square-and-multiply over the constant exponent
    /// \\(\ell - 2\\), two bits per iteration, entirely in Montgomery
    /// products. Branching on the bits of the fixed public exponent
    /// leaks nothing about the input.
    pub(crate) fn invert(&self) -> Scalar8 {
        let a = self.reduce();

        let mut acc = Scalar8::ONE;
        let mut pow = a;

        for i in 0..32 {
            let c = if i == 0 {
                constants::L[0] - 2
            } else {
                constants::L[i]
            };

            for j in (0..8).step_by(2) {
                if c & (1 << j) != 0 {
                    acc = Scalar8::montgomery_mul(&acc, &pow);
                }
                let sq = Scalar8::montgomery_mul(&pow, &pow);
                if c & (2 << j) != 0 {
                    acc = Scalar8::montgomery_mul(&acc, &sq);
                }
                pow = Scalar8::montgomery_mul(&sq, &sq);
            }
        }

        // Every product above divided by R once; a final product with 1
        // cancels the last surplus factor, by Fermat on R^(l-1).
        Scalar8::montgomery_mul(&acc, &Scalar8::ONE)
    }
}
