// -*- mode: rust; -*-
//
// This file is part of curve25519-engine.
// See LICENSE for licensing information.

//! Constant-time \\([s]P\\) for an arbitrary point.

#![allow(non_snake_case)]

use crate::backend::serial::curve_models::ProjectiveNielsPoint;
use crate::edwards::EdwardsPoint;
use crate::scalar::Scalar;
use crate::traits::Identity;
use crate::window::LookupTable;

/// Horner evaluation of \\(\sum s\_i 16\^i P\\) over the signed radix-16
/// digits of `scalar`, from \\(s\_{63}\\) down, with each digit's
/// multiple of `point` fetched by a constant-time table scan.
pub(crate) fn mul(point: &EdwardsPoint, scalar: &Scalar) -> EdwardsPoint {
    let table = LookupTable::<ProjectiveNielsPoint>::from(point);
    let digits = scalar.as_radix_16();

    let (top, rest) = (digits[63], &digits[..63]);
    let mut acc = &EdwardsPoint::identity() + &table.select(top);
    for &digit in rest.iter().rev() {
        let shifted = acc.as_extended().mul_by_pow_2(4);
        acc = &shifted + &table.select(digit);
    }
    acc.as_extended()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::constants;

    #[test]
    fn matches_repeated_addition() {
        let B = constants::ED25519_BASEPOINT_POINT;
        let mut expected = EdwardsPoint::identity();
        for k in 0u64..20 {
            assert_eq!(mul(&B, &Scalar::from(k)), expected);
            expected = &expected + &B;
        }
    }

    #[test]
    fn zero_and_identity_give_identity() {
        let B = constants::ED25519_BASEPOINT_POINT;
        assert_eq!(mul(&B, &Scalar::ZERO), EdwardsPoint::identity());
        assert_eq!(
            mul(&EdwardsPoint::identity(), &crate::scalar::test::X),
            EdwardsPoint::identity()
        );
    }

    #[test]
    fn minus_one_is_negation() {
        let B = constants::ED25519_BASEPOINT_POINT;
        assert_eq!(mul(&B, &-Scalar::ONE), -&B);
    }
}
