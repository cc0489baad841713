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

//! Field arithmetic modulo \\(p = 2^{255} - 19\\), using \\(32\\)
//! byte-sized limbs held in `u32` words.
//!
//! A field element \\(x\\) is represented in radix \\(2^8\\) as
//! $$
//! x = \sum\_{i=0}\^{31} x\_i 2\^{8i},
//! $$
//! where each limb normally holds a byte but may grow into the word's
//! upper bits between reductions, deferring carries.
//!
//! Two reduction strengths exist. [`FieldElement8::squeeze`] performs
//! carry propagation and folds the bits above \\(2^{255}\\) back with a
//! factor of \\(19\\), leaving a value strictly below \\(2p\\); most
//! operations squeeze their own output. [`FieldElement8::as_bytes`]
//! performs the full reduction to the canonical representative.
//!
//! This code was originally derived from the libuecc implementation,
//! and was then rewritten to use unsigned limbs with 64-bit products.

use core::fmt::Debug;
use core::ops::{Add, Mul, Neg, Sub};

use subtle::Choice;
use subtle::ConditionallySelectable;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::constants;

/// A `FieldElement8` represents an element of the field
/// \\( \mathbb Z / (2\^{255} - 19)\\).
///
/// In this implementation, a `FieldElement8` is represented in radix
/// \\(2^8\\) as 32 `u32`s with deferred carries.
///
/// # Note
///
/// The `ec25519::field` module provides a type alias
/// `ec25519::field::FieldElement` to this type.
#[derive(Copy, Clone)]
pub(crate) struct FieldElement8(pub(crate) [u32; 32]);

/// Helper function to multiply two 32-bit integers with 64 bits
/// of output.
#[inline(always)]
fn m(x: u32, y: u32) -> u64 {
    (x as u64) * (y as u64)
}

impl Debug for FieldElement8 {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        write!(f, "FieldElement8({:?})", &self.0[..])
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for FieldElement8 {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl ConditionallySelectable for FieldElement8 {
    fn conditional_select(
        a: &FieldElement8,
        b: &FieldElement8,
        choice: Choice,
    ) -> FieldElement8 {
        let mut out = [0u32; 32];
        for i in 0..32 {
            out[i] = u32::conditional_select(&a.0[i], &b.0[i], choice);
        }
        FieldElement8(out)
    }
}

impl<'a, 'b> Add<&'b FieldElement8> for &'a FieldElement8 {
    type Output = FieldElement8;
    fn add(self, rhs: &'b FieldElement8) -> FieldElement8 {
        let mut out = [0u32; 32];
        let mut u: u64 = 0;

        for j in 0..31 {
            u += self.0[j] as u64 + rhs.0[j] as u64;
            out[j] = (u & 0xff) as u32;
            u >>= 8;
        }

        u += self.0[31] as u64 + rhs.0[31] as u64;
        out[31] = u as u32;
        FieldElement8(out)
    }
}

impl<'a, 'b> Sub<&'b FieldElement8> for &'a FieldElement8 {
    type Output = FieldElement8;
    /// Compute `self - rhs`.
    ///
    /// `rhs` must be squeezed. Each limb carries a bias of `0xff00`
    /// (with an initial residue of 218, together a multiple of `p`)
    /// so that the limb differences never borrow.
    fn sub(self, rhs: &'b FieldElement8) -> FieldElement8 {
        let mut out = [0u32; 32];
        let mut u: i64 = 218;

        for j in 0..31 {
            u += self.0[j] as i64 + 0xff00 - rhs.0[j] as i64;
            out[j] = (u & 0xff) as u32;
            u >>= 8;
        }

        u += self.0[31] as i64 - rhs.0[31] as i64;
        out[31] = u as u32;
        FieldElement8(out)
    }
}

impl<'a> Neg for &'a FieldElement8 {
    type Output = FieldElement8;
    /// Compute `-self`.
    ///
    /// `self` must be squeezed. No squeeze of the result is required
    /// for a subtraction from zero.
    fn neg(self) -> FieldElement8 {
        &FieldElement8::ZERO - self
    }
}

impl<'a, 'b> Mul<&'b FieldElement8> for &'a FieldElement8 {
    type Output = FieldElement8;
    fn mul(self, rhs: &'b FieldElement8) -> FieldElement8 {
        let a = &self.0;
        let b = &rhs.0;
        let mut out = [0u32; 32];

        // Schoolbook convolution; the coefficients for indices >= 32
        // wrap around with a factor of 38 = 2 * 19, since
        // 2^256 = 38 (mod p).
        for i in 0..32 {
            let mut u: u64 = 0;
            for j in 0..=i {
                u += m(a[j], b[i - j]);
            }
            for j in (i + 1)..32 {
                u += 38 * m(a[j], b[i + 32 - j]);
            }
            out[i] = u as u32;
        }

        FieldElement8(out).squeeze()
    }
}

impl FieldElement8 {
    pub(crate) const fn from_limbs(limbs: [u32; 32]) -> FieldElement8 {
        FieldElement8(limbs)
    }

    /// The scalar \\( 0 \\).
    pub(crate) const ZERO: FieldElement8 = FieldElement8::from_limbs([
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    ]);
    /// The scalar \\( 1 \\).
    pub(crate) const ONE: FieldElement8 = FieldElement8::from_limbs([
        1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    ]);

    /// Load a `FieldElement8` from 32 bytes, one byte per limb.
    ///
    /// # Warning
    ///
    /// This function neither masks the high bit nor reduces: the
    /// first squeeze of the loaded value canonicalizes bit 255, so
    /// `2^255 - 18` decodes to the same element as `1`.
    pub(crate) fn from_bytes(data: &[u8; 32]) -> FieldElement8 {
        let mut limbs = [0u32; 32];
        for i in 0..32 {
            limbs[i] = data[i] as u32;
        }
        FieldElement8(limbs)
    }

    /// Serialize this `FieldElement8` to a 32-byte array. The encoding
    /// is canonical.
    pub(crate) fn as_bytes(&self) -> [u8; 32] {
        // Reduce the value to the range [0, 2p).
        let h = self.squeeze();

        // Let h be the value to encode, and compute h + (2^256 - p).
        // If h >= p the addition wraps 2^256 and the top bit of the
        // last limb comes out clear; keep the adjusted value, which is
        // then h - p plus a discarded 2^256.  Otherwise keep h itself.
        // Only the low byte of each limb is meaningful afterwards.
        let sum = &h + &constants::MINUS_P;
        let below_p = Choice::from(((sum.0[31] >> 7) & 1) as u8);
        let frozen = FieldElement8::conditional_select(&sum, &h, below_p);

        let mut s = [0u8; 32];
        for i in 0..32 {
            s[i] = frozen.0[i] as u8;
        }
        s
    }

    /// Carry and weakly reduce, leaving a value strictly below
    /// \\(2p\\): limbs 0..=30 hold a byte each, limb 31 is at most
    /// \\(2 \cdot 2^7\\).
    pub(crate) fn squeeze(&self) -> FieldElement8 {
        let mut out = [0u32; 32];
        let mut u: u64 = 0;

        for j in 0..31 {
            u += self.0[j] as u64;
            out[j] = (u & 0xff) as u32;
            u >>= 8;
        }

        u += self.0[31] as u64;
        out[31] = (u & 127) as u32;

        // Fold the bits above 2^255 back in: 2^255 = 19 (mod p).
        u = 19 * (u >> 7);

        for j in 0..31 {
            u += out[j] as u64;
            out[j] = (u & 0xff) as u32;
            u >>= 8;
        }

        u += out[31] as u64;
        out[31] = u as u32;
        FieldElement8(out)
    }

    /// Determine if this `FieldElement8` is negative, in the sense
    /// used in the ed25519 paper: `x` is negative if the low bit of
    /// the canonical representative is set.
    ///
    /// # Return
    ///
    /// If negative, return `Choice(1)`.  Otherwise, return `Choice(0)`.
    pub(crate) fn is_negative(&self) -> Choice {
        let a = self.squeeze();
        // As in the freeze, the top bit of (a + 2^256 - p) tells
        // whether a is below p; folding it into the low bit of a
        // yields the parity of the canonical representative.
        let sum = &a + &constants::MINUS_P;
        let bit = (a.0[0] ^ (sum.0[31] >> 7) ^ 1) & 1;
        Choice::from(bit as u8)
    }

    /// Compute `self * n` for a small integer `n`.
    ///
    /// The result is squeezed.
    pub(crate) fn mul_small(&self, n: u32) -> FieldElement8 {
        let mut out = [0u32; 32];
        let mut u: u64 = 0;

        for j in 0..31 {
            u += m(n, self.0[j]);
            out[j] = (u & 0xff) as u32;
            u >>= 8;
        }

        u += m(n, self.0[31]);
        out[31] = (u & 127) as u32;
        u = 19 * (u >> 7);

        for j in 0..31 {
            u += out[j] as u64;
            out[j] = (u & 0xff) as u32;
            u >>= 8;
        }

        u += out[31] as u64;
        out[31] = u as u32;
        FieldElement8(out)
    }

    /// Compute `self^2`.
    ///
    /// The result is squeezed.
    pub(crate) fn square(&self) -> FieldElement8 {
        let a = &self.0;
        let mut out = [0u32; 32];

        // As in `mul`, but off-diagonal products appear twice and are
        // collected once, then doubled. The ranges take j strictly
        // below its convolution partner: 2j < i and 2j < i + 32.
        for i in 0..32 {
            let mut u: u64 = 0;
            for j in 0..(i + 1) / 2 {
                u += m(a[j], a[i - j]);
            }
            for j in (i + 1)..(i + 33) / 2 {
                u += 38 * m(a[j], a[i + 32 - j]);
            }

            u *= 2;
            if i & 1 == 0 {
                u += m(a[i / 2], a[i / 2]);
                u += 38 * m(a[i / 2 + 16], a[i / 2 + 16]);
            }

            out[i] = u as u32;
        }

        FieldElement8(out).squeeze()
    }

    /// Given `k > 0`, return `self^(2^k)`.
    pub(crate) fn pow2k(&self, k: u32) -> FieldElement8 {
        debug_assert!(k > 0);
        let mut z = self.square();
        for _ in 1..k {
            z = z.square();
        }
        z
    }
}
