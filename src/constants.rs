// -*- mode: rust; -*-
//
// This file is part of curve25519-engine.
// See LICENSE for licensing information.

//! Curve constants: the two basepoint encodings, the prime-order
//! subgroup order \\(\ell\\) and the lazily built basepoint tables.
//!
#![cfg_attr(feature = "precomputed-tables", doc = "```")]
#![cfg_attr(not(feature = "precomputed-tables"), doc = "```ignore")]
//! use curve25519_engine::constants;
//! use curve25519_engine::traits::{BasepointTable, IsIdentity};
//!
//! let B = &*constants::ED25519_BASEPOINT_TABLE;
//! let l = &constants::BASEPOINT_ORDER;
//!
//! let A = B.basepoint() * l;
//! assert!(A.is_identity());
//! ```

#![allow(non_snake_case)]

#[cfg(feature = "precomputed-tables")]
use std::sync::LazyLock;

use cfg_if::cfg_if;

use crate::edwards::CompressedEdwardsY;
use crate::montgomery::MontgomeryPoint;
use crate::scalar::Scalar;

#[cfg(feature = "precomputed-tables")]
use crate::backend::serial::curve_models::AffineNielsPoint;
#[cfg(feature = "precomputed-tables")]
use crate::edwards::EdwardsBasepointTable;
#[cfg(feature = "precomputed-tables")]
use crate::traits::BasepointTable;
#[cfg(feature = "precomputed-tables")]
use crate::window::NafLookupTable8;

cfg_if! {
    if #[cfg(target_pointer_width = "64")] {
        pub use crate::backend::serial::u64::constants::ED25519_BASEPOINT_POINT;
        pub(crate) use crate::backend::serial::u64::constants::{
            APLUS2_OVER_FOUR, EDWARDS_D, EDWARDS_D2, SQRT_M1,
        };
        #[cfg(test)]
        pub(crate) use crate::backend::serial::u64::constants::{EIGHT_TORSION, MONTGOMERY_A};
    }
}

/// Encoding of the Ed25519 basepoint: \\(y = 4/5\\) little-endian, with
/// a clear sign bit because the basepoint's \\(x\\) is even.
pub const ED25519_BASEPOINT_COMPRESSED: CompressedEdwardsY = CompressedEdwardsY([
    0x58, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
]);

/// \\(u = 9\\), the X25519 basepoint.
pub const X25519_BASEPOINT: MontgomeryPoint = MontgomeryPoint([
    0x09, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
]);

/// \\(\ell = 2\^{252} + 27742317777372353535851937790883648493\\), stored
/// unreduced.
///
/// As a `Scalar` it equals zero, so it only makes sense as a multiplier:
/// \\([\ell]P\\) is the identity exactly when \\(P\\) is torsion-free.
pub const BASEPOINT_ORDER: Scalar = Scalar {
    bytes: [
        0xed, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, 0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9, 0xde,
        0x14, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x10,
    ],
};

/// Radix-16 multiples of the basepoint for `mul_base`.
///
/// Built on first access and then shared between threads.
#[cfg(feature = "precomputed-tables")]
pub static ED25519_BASEPOINT_TABLE: LazyLock<EdwardsBasepointTable> =
    LazyLock::new(|| EdwardsBasepointTable::create(&ED25519_BASEPOINT_POINT));

/// \\(B, 3B, \ldots, 127B\\) for double-base verification.
#[cfg(feature = "precomputed-tables")]
pub(crate) static AFFINE_ODD_MULTIPLES_OF_BASEPOINT: LazyLock<NafLookupTable8<AffineNielsPoint>> =
    LazyLock::new(|| NafLookupTable8::<AffineNielsPoint>::from(&ED25519_BASEPOINT_POINT));
