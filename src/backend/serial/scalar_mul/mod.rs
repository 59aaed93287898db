// -*- mode: rust; -*-
//
// This file is part of curve25519-engine.
// See LICENSE for licensing information.

//! Scalar multiplication algorithms over the Edwards curve models.
//!
//! | module                 | computes   | timing            |
//! |------------------------|------------|-------------------|
//! | `variable_base`        | \\([s]P\\)     | constant          |
//! | `vartime_double_base`  | \\([a]A + [b]B\\) | variable, public inputs |
//!
//! Fixed-base multiplication is `EdwardsBasepointTable::mul_base`; the
//! Montgomery ladder lives in `montgomery`.

pub mod variable_base;
pub mod vartime_double_base;
