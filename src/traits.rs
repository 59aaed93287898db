// -*- mode: rust; -*-
//
// This file is part of curve25519-engine.
// See LICENSE for licensing information.

//! Traits shared by the point types.

use subtle::ConstantTimeEq;

use crate::scalar::{clamp_integer, Scalar};

/// Types with a neutral element.
pub trait Identity {
    /// The neutral element.
    fn identity() -> Self;
}

/// Comparison against the neutral element.
pub trait IsIdentity {
    /// Whether `self` is the neutral element.
    fn is_identity(&self) -> bool;
}

impl<T> IsIdentity for T
where
    T: ConstantTimeEq + Identity,
{
    fn is_identity(&self) -> bool {
        self.ct_eq(&T::identity()).into()
    }
}

/// Precomputed multiples of a fixed point, for fast constant-time
/// \\([s]B\\).
///
/// `ED25519_BASEPOINT_TABLE` is the instance for the Ed25519 basepoint.
pub trait BasepointTable {
    /// Point type the table is built from and produces.
    type Point;

    /// Precompute the table for `basepoint`.
    fn create(basepoint: &Self::Point) -> Self;

    /// The point the table was built from.
    fn basepoint(&self) -> Self::Point;

    /// \\([s]B\\) in constant time.
    fn mul_base(&self, scalar: &Scalar) -> Self::Point;

    /// \\([c]B\\) for the clamped integer \\(c\\) = `clamp_integer(bytes)`.
    ///
    /// \\(c\\) is not reduced mod \\(\ell\\); that only changes the
    /// result when \\(B\\) has a torsion component.
    fn mul_base_clamped(&self, bytes: [u8; 32]) -> Self::Point {
        // c < 2^255, which is all the radix-16 recoding requires.
        let s = Scalar {
            bytes: clamp_integer(bytes),
        };
        self.mul_base(&s)
    }
}

/// Curve-equation check, for tests and debug assertions.  Variable time.
#[allow(dead_code)]
pub(crate) trait ValidityCheck {
    /// Whether the coordinates satisfy the curve equation.
    fn is_valid(&self) -> bool;
}
