// -*- mode: rust; -*-
//
// This file is part of curve25519-engine.
// See LICENSE for licensing information.

//! Five-limb field and scalar arithmetic over `u64`, with products
//! widened to `u128`.

pub mod constants;
pub mod field;
pub mod scalar;
