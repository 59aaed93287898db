// -*- mode: rust; -*-
//
// This file is part of curve25519-engine.
// See LICENSE for licensing information.

//! Tables of small multiples of a point.
//!
//! `LookupTable` serves the constant-time fixed-window code: it holds
//! \\(P, 2P, \ldots, 8P\\) and answers signed digits in \\([-8, 8]\\)
//! without secret-dependent memory access.  The `NafLookupTable*`
//! types hold odd multiples for the variable-time NAF code and are
//! indexed directly.

#![allow(non_snake_case)]

use core::fmt::Debug;
use core::ops::Add;

use subtle::{Choice, ConditionallyNegatable, ConditionallySelectable, ConstantTimeEq};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::backend::serial::curve_models::{AffineNielsPoint, CompletedPoint, ProjectiveNielsPoint};
use crate::edwards::EdwardsPoint;
use crate::traits::Identity;

/// `[first, first + step, first + 2 step, ...]`, each entry cached by `cache`.
fn arithmetic_progression<T, const N: usize>(
    first: &EdwardsPoint,
    step: &EdwardsPoint,
    cache: fn(&EdwardsPoint) -> T,
) -> [T; N]
where
    T: Copy,
    for<'a, 'b> &'a EdwardsPoint: Add<&'b T, Output = CompletedPoint>,
{
    let mut entries = [cache(first); N];
    for i in 1..N {
        entries[i] = cache(&(step + &entries[i - 1]).as_extended());
    }
    entries
}

/// \\(P, 2P, \ldots, 8P\\) for a point \\(P\\), read only through
/// [`LookupTable::select`].
#[derive(Copy, Clone)]
pub struct LookupTable<T>(pub(crate) [T; 8]);

impl<T> LookupTable<T>
where
    T: Identity + ConditionallySelectable + ConditionallyNegatable,
{
    /// \\(xP\\) for \\(-8 \leq x \leq 8\\).
    ///
    /// All eight entries are touched for every `x`.
    pub fn select(&self, x: i8) -> T {
        debug_assert!((-8..=8).contains(&x));

        // sign is 0 or -1; (x + sign) ^ sign is |x|.
        let sign = (x as i16) >> 7;
        let magnitude = ((x as i16 + sign) ^ sign) as u16;

        let mut t = T::identity();
        for (j, entry) in (1u16..).zip(self.0.iter()) {
            t.conditional_assign(entry, magnitude.ct_eq(&j));
        }
        t.conditional_negate(Choice::from((sign & 1) as u8));
        t
    }
}

impl<T: Copy + Default> Default for LookupTable<T> {
    fn default() -> LookupTable<T> {
        LookupTable([T::default(); 8])
    }
}

impl<T: Debug> Debug for LookupTable<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("LookupTable").field(&self.0).finish()
    }
}

impl<'a> From<&'a EdwardsPoint> for LookupTable<ProjectiveNielsPoint> {
    fn from(P: &'a EdwardsPoint) -> Self {
        LookupTable(arithmetic_progression(P, P, EdwardsPoint::as_projective_niels))
    }
}

impl<'a> From<&'a EdwardsPoint> for LookupTable<AffineNielsPoint> {
    fn from(P: &'a EdwardsPoint) -> Self {
        // TODO: batch the eight inversions of `as_affine_niels` with `FieldElement::batch_invert`.
        LookupTable(arithmetic_progression(P, P, EdwardsPoint::as_affine_niels))
    }
}

#[cfg(feature = "zeroize")]
impl<T> Zeroize for LookupTable<T>
where
    T: Copy + Default + Zeroize,
{
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

/// \\(A, 3A, \ldots, 15A\\).  Public points and public digits only.
#[derive(Copy, Clone)]
pub(crate) struct NafLookupTable5<T>(pub(crate) [T; 8]);

impl<T: Copy> NafLookupTable5<T> {
    /// \\(xA\\) for odd \\(0 < x < 16\\).
    pub fn select(&self, x: usize) -> T {
        debug_assert!(x % 2 == 1 && x < 16);
        self.0[x / 2]
    }
}

impl<T: Debug> Debug for NafLookupTable5<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("NafLookupTable5").field(&self.0).finish()
    }
}

impl<'a> From<&'a EdwardsPoint> for NafLookupTable5<ProjectiveNielsPoint> {
    fn from(A: &'a EdwardsPoint) -> Self {
        let A2 = A.double();
        NafLookupTable5(arithmetic_progression(A, &A2, EdwardsPoint::as_projective_niels))
    }
}

/// \\(A, 3A, \ldots, 127A\\), for the width-8 basepoint NAF.
#[cfg(feature = "precomputed-tables")]
#[derive(Copy, Clone)]
pub(crate) struct NafLookupTable8<T>(pub(crate) [T; 64]);

#[cfg(feature = "precomputed-tables")]
impl<T: Copy> NafLookupTable8<T> {
    /// \\(xA\\) for odd \\(0 < x < 128\\).
    pub fn select(&self, x: usize) -> T {
        debug_assert!(x % 2 == 1 && x < 128);
        self.0[x / 2]
    }
}

#[cfg(feature = "precomputed-tables")]
impl<T: Debug> Debug for NafLookupTable8<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

#[cfg(feature = "precomputed-tables")]
impl<'a> From<&'a EdwardsPoint> for NafLookupTable8<AffineNielsPoint> {
    fn from(A: &'a EdwardsPoint) -> Self {
        let A2 = A.double();
        NafLookupTable8(arithmetic_progression(A, &A2, EdwardsPoint::as_affine_niels))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::constants::ED25519_BASEPOINT_POINT;
    use crate::scalar::Scalar;

    fn multiple(k: i64) -> EdwardsPoint {
        let s = if k < 0 {
            -Scalar::from((-k) as u64)
        } else {
            Scalar::from(k as u64)
        };
        ED25519_BASEPOINT_POINT * s
    }

    #[test]
    fn select_covers_every_digit() {
        let B = ED25519_BASEPOINT_POINT;
        let projective = LookupTable::<ProjectiveNielsPoint>::from(&B);
        let affine = LookupTable::<AffineNielsPoint>::from(&B);
        let id = EdwardsPoint::identity();

        for x in -8i8..=8 {
            let expected = multiple(x as i64);
            assert_eq!((&id + &projective.select(x)).as_extended(), expected);
            assert_eq!((&id + &affine.select(x)).as_extended(), expected);
        }
    }

    #[test]
    fn naf_table_holds_odd_multiples() {
        let B = ED25519_BASEPOINT_POINT;
        let table = NafLookupTable5::<ProjectiveNielsPoint>::from(&B);
        let id = EdwardsPoint::identity();
        for x in (1..16).step_by(2) {
            assert_eq!((&id + &table.select(x)).as_extended(), multiple(x as i64));
        }
    }

    #[cfg(feature = "precomputed-tables")]
    #[test]
    fn naf_table8_holds_odd_multiples() {
        let B = ED25519_BASEPOINT_POINT;
        let table = NafLookupTable8::<AffineNielsPoint>::from(&B);
        let id = EdwardsPoint::identity();
        for x in [1usize, 3, 63, 65, 127] {
            assert_eq!((&id + &table.select(x)).as_extended(), multiple(x as i64));
        }
    }

    #[cfg(feature = "zeroize")]
    #[test]
    fn zeroize_resets_entries() {
        let mut table = LookupTable::<AffineNielsPoint>::from(&ED25519_BASEPOINT_POINT);
        table.zeroize();
        for entry in table.0.iter() {
            assert_eq!(entry.xy2d, crate::field::FieldElement::ZERO);
            assert_eq!(entry.y_plus_x, crate::field::FieldElement::ZERO);
        }
    }
}
