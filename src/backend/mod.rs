// -*- mode: rust; -*-
//
// This file is part of curve25519-engine.
// See LICENSE for licensing information.

//! Entry points from the point types into the arithmetic.
//!
//! Only the portable `serial` backend exists.

use crate::EdwardsPoint;
use crate::Scalar;

pub mod serial;

/// \\([s]P\\), constant time.
pub(crate) fn variable_base_mul(point: &EdwardsPoint, scalar: &Scalar) -> EdwardsPoint {
    serial::scalar_mul::variable_base::mul(point, scalar)
}

/// \\(aA + bB\\) for the Ed25519 basepoint \\(B\\).  Variable time.
#[allow(non_snake_case)]
pub(crate) fn vartime_double_base_mul(a: &Scalar, A: &EdwardsPoint, b: &Scalar) -> EdwardsPoint {
    serial::scalar_mul::vartime_double_base::mul(a, A, b)
}
