// -*- mode: rust; -*-
//
// This file is part of curve25519-engine.
// See LICENSE for licensing information.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![warn(
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

#[cfg(feature = "alloc")]
#[allow(unused_imports)]
#[macro_use]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub use digest;

// Operator forwarding macros; declared before any module that uses them.
#[macro_use]
pub(crate) mod macros;

pub mod constants;
pub mod edwards;
pub mod errors;
pub mod montgomery;
pub mod scalar;
pub mod traits;

pub mod ed25519;
pub mod x25519;

pub(crate) mod backend;
pub(crate) mod field;
pub(crate) mod window;

pub use crate::{
    edwards::EdwardsPoint, errors::CurveError, montgomery::MontgomeryPoint, scalar::Scalar,
};
