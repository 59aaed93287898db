// -*- mode: rust; -*-
//
// This file is part of curve25519-engine.
// See LICENSE for licensing information.

//! Working coordinate systems for Edwards arithmetic.
//!
//! Public points are `EdwardsPoint`s in extended coordinates
//! \\((X:Y:Z:T)\\) with \\(x = X/Z\\), \\(y = Y/Z\\), \\(XY = ZT\\).
//! Inside scalar multiplication four more shapes appear:
//!
//! | type                   | coordinates                            | role                                  |
//! |------------------------|----------------------------------------|---------------------------------------|
//! | `ProjectivePoint`      | \\((X:Y:Z)\\)                          | input to doubling                     |
//! | `CompletedPoint`       | \\(((X:Z),(Y:T))\\)                    | output of every addition and doubling |
//! | `ProjectiveNielsPoint` | \\((Y+X, Y-X, Z, 2dXY)\\)              | cached addend for variable points     |
//! | `AffineNielsPoint`     | \\((y+x, y-x, 2dxy)\\)                 | cached addend for fixed tables        |
//!
//! A completed point is turned into a projective point (3M) when the
//! next step is a doubling, and into an extended point (4M) when the
//! next step is an addition.  The addition formulas are those of
//! Hisil, Wong, Carter and Dawson for \\(a = -1\\), with the second
//! operand pre-split into its Niels form.

#![allow(non_snake_case)]

use core::fmt::Debug;
use core::ops::{Add, Neg, Sub};

use subtle::{Choice, ConditionallySelectable};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::constants;
use crate::edwards::EdwardsPoint;
use crate::field::FieldElement;
use crate::traits::{Identity, ValidityCheck};

/// \\((X:Y:Z)\\), with \\(x = X/Z\\) and \\(y = Y/Z\\).
#[derive(Copy, Clone)]
pub struct ProjectivePoint {
    pub X: FieldElement,
    pub Y: FieldElement,
    pub Z: FieldElement,
}

/// \\(((X:Z),(Y:T))\\), with \\(x = X/Z\\) and \\(y = Y/T\\).
#[derive(Copy, Clone)]
#[allow(missing_docs)]
pub struct CompletedPoint {
    pub X: FieldElement,
    pub Y: FieldElement,
    pub Z: FieldElement,
    pub T: FieldElement,
}

/// An affine point cached as \\((y+x, y-x, 2dxy)\\).
///
/// The coordinates are affine, so structural equality is point equality.
#[derive(Copy, Clone, Eq, PartialEq)]
#[allow(missing_docs)]
pub struct AffineNielsPoint {
    pub y_plus_x: FieldElement,
    pub y_minus_x: FieldElement,
    pub xy2d: FieldElement,
}

/// An extended point cached as \\((Y+X, Y-X, Z, 2dT)\\).
#[derive(Copy, Clone)]
pub struct ProjectiveNielsPoint {
    pub Y_plus_X: FieldElement,
    pub Y_minus_X: FieldElement,
    pub Z: FieldElement,
    pub T2d: FieldElement,
}

#[cfg(feature = "zeroize")]
impl Zeroize for AffineNielsPoint {
    fn zeroize(&mut self) {
        self.y_plus_x.zeroize();
        self.y_minus_x.zeroize();
        self.xy2d.zeroize();
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for ProjectiveNielsPoint {
    fn zeroize(&mut self) {
        self.Y_plus_X.zeroize();
        self.Y_minus_X.zeroize();
        self.Z.zeroize();
        self.T2d.zeroize();
    }
}

impl Identity for ProjectivePoint {
    fn identity() -> ProjectivePoint {
        ProjectivePoint {
            X: FieldElement::ZERO,
            Y: FieldElement::ONE,
            Z: FieldElement::ONE,
        }
    }
}

// (0, 1) gives y + x = y - x = 1 and a zero product term.

impl Identity for ProjectiveNielsPoint {
    fn identity() -> ProjectiveNielsPoint {
        ProjectiveNielsPoint {
            Y_plus_X: FieldElement::ONE,
            Y_minus_X: FieldElement::ONE,
            Z: FieldElement::ONE,
            T2d: FieldElement::ZERO,
        }
    }
}

impl Identity for AffineNielsPoint {
    fn identity() -> AffineNielsPoint {
        AffineNielsPoint {
            y_plus_x: FieldElement::ONE,
            y_minus_x: FieldElement::ONE,
            xy2d: FieldElement::ZERO,
        }
    }
}

impl Default for ProjectiveNielsPoint {
    fn default() -> ProjectiveNielsPoint {
        ProjectiveNielsPoint::identity()
    }
}

impl Default for AffineNielsPoint {
    fn default() -> AffineNielsPoint {
        AffineNielsPoint::identity()
    }
}

impl ValidityCheck for ProjectivePoint {
    /// Checks \\((Y^2 - X^2) Z^2 = Z^4 + d X^2 Y^2\\).  Not constant time.
    fn is_valid(&self) -> bool {
        let x2 = self.X.square();
        let y2 = self.Y.square();
        let z2 = self.Z.square();
        let lhs = &(&y2 - &x2) * &z2;
        let rhs = &z2.square() + &(&constants::EDWARDS_D * &(&x2 * &y2));
        lhs == rhs
    }
}

impl ConditionallySelectable for ProjectiveNielsPoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        ProjectiveNielsPoint {
            Y_plus_X: FieldElement::conditional_select(&a.Y_plus_X, &b.Y_plus_X, choice),
            Y_minus_X: FieldElement::conditional_select(&a.Y_minus_X, &b.Y_minus_X, choice),
            Z: FieldElement::conditional_select(&a.Z, &b.Z, choice),
            T2d: FieldElement::conditional_select(&a.T2d, &b.T2d, choice),
        }
    }
}

impl ConditionallySelectable for AffineNielsPoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        AffineNielsPoint {
            y_plus_x: FieldElement::conditional_select(&a.y_plus_x, &b.y_plus_x, choice),
            y_minus_x: FieldElement::conditional_select(&a.y_minus_x, &b.y_minus_x, choice),
            xy2d: FieldElement::conditional_select(&a.xy2d, &b.xy2d, choice),
        }
    }
}

impl ProjectivePoint {
    /// To extended coordinates, 3M + 1S.
    pub fn as_extended(&self) -> EdwardsPoint {
        EdwardsPoint {
            X: &self.X * &self.Z,
            Y: &self.Y * &self.Z,
            Z: self.Z.square(),
            T: &self.X * &self.Y,
        }
    }

    /// `2P`, 3S + 1 doubled square.
    pub fn double(&self) -> CompletedPoint {
        let x2 = self.X.square();
        let y2 = self.Y.square();
        let two_z2 = self.Z.square2();
        let sum = &y2 + &x2;
        let diff = &y2 - &x2;

        CompletedPoint {
            X: &(&self.X + &self.Y).square() - &sum,
            Y: sum,
            T: &two_z2 - &diff,
            Z: diff,
        }
    }
}

impl CompletedPoint {
    /// To projective coordinates, 3M.
    pub fn as_projective(&self) -> ProjectivePoint {
        ProjectivePoint {
            X: &self.X * &self.T,
            Y: &self.Y * &self.Z,
            Z: &self.Z * &self.T,
        }
    }

    /// To extended coordinates, 4M.
    pub fn as_extended(&self) -> EdwardsPoint {
        EdwardsPoint {
            X: &self.X * &self.T,
            Y: &self.Y * &self.Z,
            Z: &self.Z * &self.T,
            T: &self.X * &self.Y,
        }
    }
}

/// Shared body of the four Niels additions.
///
/// `q_plus` and `q_minus` are the cached `y+x` and `y-x` of the addend
/// (swapped for a subtraction), `two_z` is \\(2 Z_1 Z_2\\) and `t_term`
/// is \\(2d T_1 T_2\\).
#[inline]
fn niels_combine(
    p: &EdwardsPoint,
    q_plus: &FieldElement,
    q_minus: &FieldElement,
    two_z: &FieldElement,
    t_term: &FieldElement,
    subtract: bool,
) -> CompletedPoint {
    let a = &(&p.Y + &p.X) * q_plus;
    let b = &(&p.Y - &p.X) * q_minus;
    let (Z, T) = if subtract {
        (two_z - t_term, two_z + t_term)
    } else {
        (two_z + t_term, two_z - t_term)
    };

    CompletedPoint {
        X: &a - &b,
        Y: &a + &b,
        Z,
        T,
    }
}

impl<'a, 'b> Add<&'b ProjectiveNielsPoint> for &'a EdwardsPoint {
    type Output = CompletedPoint;

    fn add(self, other: &'b ProjectiveNielsPoint) -> CompletedPoint {
        let zz = &self.Z * &other.Z;
        let t_term = &self.T * &other.T2d;
        niels_combine(self, &other.Y_plus_X, &other.Y_minus_X, &(&zz + &zz), &t_term, false)
    }
}

impl<'a, 'b> Sub<&'b ProjectiveNielsPoint> for &'a EdwardsPoint {
    type Output = CompletedPoint;

    fn sub(self, other: &'b ProjectiveNielsPoint) -> CompletedPoint {
        let zz = &self.Z * &other.Z;
        let t_term = &self.T * &other.T2d;
        niels_combine(self, &other.Y_minus_X, &other.Y_plus_X, &(&zz + &zz), &t_term, true)
    }
}

impl<'a, 'b> Add<&'b AffineNielsPoint> for &'a EdwardsPoint {
    type Output = CompletedPoint;

    fn add(self, other: &'b AffineNielsPoint) -> CompletedPoint {
        let t_term = &self.T * &other.xy2d;
        niels_combine(self, &other.y_plus_x, &other.y_minus_x, &(&self.Z + &self.Z), &t_term, false)
    }
}

impl<'a, 'b> Sub<&'b AffineNielsPoint> for &'a EdwardsPoint {
    type Output = CompletedPoint;

    fn sub(self, other: &'b AffineNielsPoint) -> CompletedPoint {
        let t_term = &self.T * &other.xy2d;
        niels_combine(self, &other.y_minus_x, &other.y_plus_x, &(&self.Z + &self.Z), &t_term, true)
    }
}

// Negation swaps the two sums and flips the product term.

impl<'a> Neg for &'a ProjectiveNielsPoint {
    type Output = ProjectiveNielsPoint;

    fn neg(self) -> ProjectiveNielsPoint {
        ProjectiveNielsPoint {
            Y_plus_X: self.Y_minus_X,
            Y_minus_X: self.Y_plus_X,
            Z: self.Z,
            T2d: -(&self.T2d),
        }
    }
}

impl<'a> Neg for &'a AffineNielsPoint {
    type Output = AffineNielsPoint;

    fn neg(self) -> AffineNielsPoint {
        AffineNielsPoint {
            y_plus_x: self.y_minus_x,
            y_minus_x: self.y_plus_x,
            xy2d: -(&self.xy2d),
        }
    }
}

impl Debug for ProjectivePoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ProjectivePoint")
            .field("X", &self.X)
            .field("Y", &self.Y)
            .field("Z", &self.Z)
            .finish()
    }
}

impl Debug for CompletedPoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CompletedPoint")
            .field("X", &self.X)
            .field("Y", &self.Y)
            .field("Z", &self.Z)
            .field("T", &self.T)
            .finish()
    }
}

impl Debug for AffineNielsPoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AffineNielsPoint")
            .field("y_plus_x", &self.y_plus_x)
            .field("y_minus_x", &self.y_minus_x)
            .field("xy2d", &self.xy2d)
            .finish()
    }
}

impl Debug for ProjectiveNielsPoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ProjectiveNielsPoint")
            .field("Y_plus_X", &self.Y_plus_X)
            .field("Y_minus_X", &self.Y_minus_X)
            .field("Z", &self.Z)
            .field("T2d", &self.T2d)
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::constants::ED25519_BASEPOINT_POINT;
    use subtle::ConditionallyNegatable;

    #[test]
    fn doubling_stays_on_curve() {
        let B = ED25519_BASEPOINT_POINT.as_projective();
        assert!(B.is_valid());
        let B2 = B.double().as_projective();
        assert!(B2.is_valid());
        assert!(B2.double().as_projective().is_valid());
    }

    #[test]
    fn projective_and_completed_conversions_agree() {
        let B = ED25519_BASEPOINT_POINT;
        let doubled = B.as_projective().double();
        assert_eq!(doubled.as_extended(), doubled.as_projective().as_extended());
    }

    #[test]
    fn niels_addition_agrees_with_affine_niels() {
        let B = ED25519_BASEPOINT_POINT;
        let B2 = B.double();
        let via_projective = (&B2 + &B.as_projective_niels()).as_extended();
        let via_affine = (&B2 + &B.as_affine_niels()).as_extended();
        assert_eq!(via_projective, via_affine);

        let back_projective = (&via_projective - &B.as_projective_niels()).as_extended();
        let back_affine = (&via_affine - &B.as_affine_niels()).as_extended();
        assert_eq!(back_projective, B2);
        assert_eq!(back_affine, B2);
    }

    #[test]
    fn niels_negation_matches_subtraction() {
        let B = ED25519_BASEPOINT_POINT;
        let B3 = &B.double() + &B;

        let mut neg_pn = B.as_projective_niels();
        neg_pn.conditional_negate(Choice::from(1));
        assert_eq!((&B3 + &neg_pn).as_extended(), (&B3 - &B.as_projective_niels()).as_extended());

        let mut an = B.as_affine_niels();
        an.conditional_negate(Choice::from(0));
        assert_eq!(an, B.as_affine_niels());
        an.conditional_negate(Choice::from(1));
        assert_eq!(an, -&B.as_affine_niels());
    }

    #[test]
    fn identity_niels_is_neutral() {
        let B = ED25519_BASEPOINT_POINT;
        assert_eq!((&B + &ProjectiveNielsPoint::identity()).as_extended(), B);
        assert_eq!((&B + &AffineNielsPoint::default()).as_extended(), B);
        assert!(ProjectivePoint::identity().is_valid());
    }
}
