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

#![no_std]
//------------------------------------------------------------------------
// Documentation:
//------------------------------------------------------------------------
#![doc = include_str!("../README.md")]
//------------------------------------------------------------------------
// Linting:
//------------------------------------------------------------------------
#![warn(
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

//------------------------------------------------------------------------
// External dependencies:
//------------------------------------------------------------------------

#[cfg(test)]
#[macro_use]
extern crate std;

// Internal macros. Must come first!
#[macro_use]
pub(crate) mod macros;

//------------------------------------------------------------------------
// ec25519 public modules
//------------------------------------------------------------------------

// Point operations on the Edwards form of Curve25519
pub mod edwards;

// Arithmetic on scalars mod the order of the base point
pub mod scalar;

// Useful constants, like the base points of the two representations
pub mod constants;

// Identity trait for points
pub mod traits;

//------------------------------------------------------------------------
// ec25519 internal modules
//------------------------------------------------------------------------

// Finite field arithmetic mod p = 2^255 - 19
pub(crate) mod field;

// The serial arithmetic backend lives here
pub(crate) mod backend;
