// -*- mode: rust; -*-
//
// This file is part of curve25519-engine.
// See LICENSE for licensing information.

//! Interleaved NAF evaluation of \\(aA + bB\\) for signature checks.

#![allow(non_snake_case)]

use core::ops::{Add, Sub};

use crate::backend::serial::curve_models::{CompletedPoint, ProjectiveNielsPoint, ProjectivePoint};
use crate::constants;
use crate::edwards::EdwardsPoint;
use crate::scalar::Scalar;
use crate::traits::Identity;
use crate::window::NafLookupTable5;

/// Add `digit * P` to `acc`, with `select(|digit|)` returning the cached
/// odd multiple of `P`.
#[inline(always)]
fn apply_digit<T, F>(acc: CompletedPoint, digit: i8, select: F) -> CompletedPoint
where
    F: Fn(usize) -> T,
    for<'a, 'b> &'a EdwardsPoint:
        Add<&'b T, Output = CompletedPoint> + Sub<&'b T, Output = CompletedPoint>,
{
    if digit > 0 {
        &acc.as_extended() + &select(digit as usize)
    } else if digit < 0 {
        &acc.as_extended() - &select(digit.unsigned_abs() as usize)
    } else {
        acc
    }
}

/// \\(aA + bB\\) with \\(B\\) the Ed25519 basepoint.  Variable time in
/// both scalars, so only for public inputs.
pub(crate) fn mul(a: &Scalar, A: &EdwardsPoint, b: &Scalar) -> EdwardsPoint {
    let a_naf = a.non_adjacent_form(5);
    let table_A = NafLookupTable5::<ProjectiveNielsPoint>::from(A);

    #[cfg(feature = "precomputed-tables")]
    let (b_naf, table_B) = (b.non_adjacent_form(8), &*constants::AFFINE_ODD_MULTIPLES_OF_BASEPOINT);
    #[cfg(not(feature = "precomputed-tables"))]
    let (b_naf, table_B) = (
        b.non_adjacent_form(5),
        &NafLookupTable5::<ProjectiveNielsPoint>::from(&constants::ED25519_BASEPOINT_POINT),
    );

    // Leading zero digits only double the identity.
    let top = (0..256)
        .rev()
        .find(|&j| a_naf[j] != 0 || b_naf[j] != 0)
        .unwrap_or(0);

    let mut r = ProjectivePoint::identity();
    for i in (0..=top).rev() {
        let t = apply_digit(r.double(), a_naf[i], |x| table_A.select(x));
        let t = apply_digit(t, b_naf[i], |x| table_B.select(x));
        r = t.as_projective();
    }

    r.as_extended()
}
