// -*- mode: rust; -*-
//
// This file is part of curve25519-engine.
// See LICENSE for licensing information.

//! The \\(u\\)-line of the Montgomery curve \\(v\^2 = u\^3 + Au\^2 + u\\),
//! \\(A = 486662\\).
//!
//! A [`MontgomeryPoint`] stores only \\(u\\), so \\(P\\) and \\(-P\\) share
//! an encoding and points of the quadratic twist are representable too.
//! The identity is written \\(u = 0\\), which it shares with the
//! two-torsion point \\((0, 0)\\).
//!
//! Multiplication is the projective \\((U : W)\\) ladder.  Its only
//! secret-dependent operation is a constant-time swap of the two ladder
//! registers.
//!
//! `EdwardsPoint::to_montgomery` maps \\(y \mapsto (1+y)/(1-y)\\);
//! [`MontgomeryPoint::to_edwards`] goes back through
//! \\(y = (u-1)/(u+1)\\) and needs a sign for \\(x\\).

#![allow(non_snake_case)]

use core::hash::{Hash, Hasher};
use core::ops::{Mul, MulAssign};

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::constants::APLUS2_OVER_FOUR;
use crate::edwards::{CompressedEdwardsY, EdwardsPoint};
use crate::field::FieldElement;
use crate::scalar::{clamp_integer, Scalar};
use crate::traits::Identity;

/// Little-endian \\(u\\)-coordinate of a point on Curve25519 or its twist.
///
/// The bytes are kept as given; equality and hashing look at \\(u \bmod p\\).
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MontgomeryPoint(pub [u8; 32]);

impl MontgomeryPoint {
    fn u(&self) -> FieldElement {
        FieldElement::from_bytes(&self.0)
    }
}

impl ConstantTimeEq for MontgomeryPoint {
    fn ct_eq(&self, other: &MontgomeryPoint) -> Choice {
        self.u().ct_eq(&other.u())
    }
}

impl PartialEq for MontgomeryPoint {
    fn eq(&self, other: &MontgomeryPoint) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for MontgomeryPoint {}

impl Hash for MontgomeryPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.u().as_bytes().hash(state);
    }
}

impl Identity for MontgomeryPoint {
    fn identity() -> MontgomeryPoint {
        MontgomeryPoint([0u8; 32])
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for MontgomeryPoint {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl MontgomeryPoint {
    /// \\(u([s]B)\\) for the basepoint \\(B\\), via the Edwards table.
    pub fn mul_base(scalar: &Scalar) -> Self {
        EdwardsPoint::mul_base(scalar).to_montgomery()
    }

    /// `self` times the clamped integer `clamp_integer(bytes)`.
    pub fn mul_clamped(self, bytes: [u8; 32]) -> Self {
        // The clamped integer stays unreduced; bit 255 is clear, which is
        // all the ladder needs.
        let s = Scalar {
            bytes: clamp_integer(bytes),
        };
        s * self
    }

    /// Basepoint times the clamped integer `clamp_integer(bytes)`.
    pub fn mul_base_clamped(bytes: [u8; 32]) -> Self {
        let s = Scalar {
            bytes: clamp_integer(bytes),
        };
        Self::mul_base(&s)
    }

    /// \\(u([n]P)\\) where `bits` lists \\(n\\) most significant bit first.
    ///
    /// Runs one ladder step per bit whatever their values, so the time
    /// depends only on how many bits are supplied.  Protocol code wants
    /// [`Self::mul_clamped`] instead.
    pub fn mul_bits_be(&self, bits: impl Iterator<Item = bool>) -> MontgomeryPoint {
        let u = self.u();

        // Invariant: R1 = R0 + P, so u(R1 - R0) = u.
        let mut r0 = ProjectivePoint::identity();
        let mut r1 = ProjectivePoint {
            U: u,
            W: FieldElement::ONE,
        };

        // Swaps are deferred and merged: `swapped` records whether the
        // registers currently sit in exchanged positions.
        let mut swapped = 0u8;
        for bit in bits {
            let bit = bit as u8;
            ProjectivePoint::conditional_swap(&mut r0, &mut r1, Choice::from(swapped ^ bit));
            differential_add_and_double(&mut r0, &mut r1, &u);
            swapped = bit;
        }
        ProjectivePoint::conditional_swap(&mut r0, &mut r1, Choice::from(swapped));

        #[cfg(feature = "zeroize")]
        swapped.zeroize();

        r0.as_affine()
    }

    /// Borrow the encoding.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Copy out the encoding.
    pub const fn to_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Lift to the Edwards point whose \\(x\\) has parity `sign` (0 or 1).
    ///
    /// `None` when \\(u\\) belongs to the twist.  \\(u = -1\\) is a twist
    /// point and the pole of \\(y = (u-1)/(u+1)\\); it is rejected before
    /// the division.
    pub fn to_edwards(&self, sign: u8) -> Option<EdwardsPoint> {
        let u = self.u();
        if u == FieldElement::MINUS_ONE {
            return None;
        }

        let one = FieldElement::ONE;
        let y = &(&u - &one) * &(&u + &one).invert();

        let mut encoding = y.as_bytes();
        encoding[31] ^= sign << 7;
        CompressedEdwardsY(encoding).decompress().ok()
    }
}

/// Ladder register: \\(u = U/W\\), with \\(W = 0\\) standing for the
/// identity.
#[derive(Copy, Clone, Debug)]
struct ProjectivePoint {
    pub U: FieldElement,
    pub W: FieldElement,
}

impl Identity for ProjectivePoint {
    fn identity() -> ProjectivePoint {
        ProjectivePoint {
            U: FieldElement::ONE,
            W: FieldElement::ZERO,
        }
    }
}

impl Default for ProjectivePoint {
    fn default() -> ProjectivePoint {
        ProjectivePoint::identity()
    }
}

impl ConditionallySelectable for ProjectivePoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        ProjectivePoint {
            U: FieldElement::conditional_select(&a.U, &b.U, choice),
            W: FieldElement::conditional_select(&a.W, &b.W, choice),
        }
    }
}

impl ProjectivePoint {
    /// \\(U/W\\).  Since \\(0\^{-1}\\) is taken as 0, the identity comes
    /// out as \\(u = 0\\).
    pub fn as_affine(&self) -> MontgomeryPoint {
        MontgomeryPoint((&self.U * &self.W.invert()).as_bytes())
    }
}

/// One ladder step: `P <- 2P` and `Q <- P + Q`, given the affine
/// \\(u(Q - P)\\).
///
/// Costello and Smith, _Montgomery curves and their arithmetic_, Alg. 8.
#[rustfmt::skip]
fn differential_add_and_double(
    P: &mut ProjectivePoint,
    Q: &mut ProjectivePoint,
    u_diff: &FieldElement,
) {
    let a  = &P.U + &P.W;
    let b  = &P.U - &P.W;
    let c  = &Q.U + &Q.W;
    let d  = &Q.U - &Q.W;

    let aa = a.square();
    let bb = b.square();
    let e  = &aa - &bb;      // 4 U_P W_P

    let da = &d * &a;
    let cb = &c * &b;

    // Doubling, with (A + 2)/4 folded into the W coordinate.
    P.U = &aa * &bb;
    P.W = &e * &(&bb + &(&APLUS2_OVER_FOUR * &e));

    // Differential addition; the difference has W = 1.
    Q.U = (&da + &cb).square();
    Q.W = u_diff * &(&da - &cb).square();
}

define_mul_assign_variants!(LHS = MontgomeryPoint, RHS = Scalar);
define_mul_variants!(LHS = MontgomeryPoint, RHS = Scalar, Output = MontgomeryPoint);
define_mul_variants!(LHS = Scalar, RHS = MontgomeryPoint, Output = MontgomeryPoint);

impl<'a, 'b> Mul<&'b Scalar> for &'a MontgomeryPoint {
    type Output = MontgomeryPoint;

    fn mul(self, scalar: &'b Scalar) -> MontgomeryPoint {
        // Bit 255 of a `Scalar` is always clear.
        self.mul_bits_be(scalar.bits_le().rev().skip(1))
    }
}

impl<'b> MulAssign<&'b Scalar> for MontgomeryPoint {
    fn mul_assign(&mut self, scalar: &'b Scalar) {
        *self = &*self * scalar;
    }
}

impl<'a, 'b> Mul<&'b MontgomeryPoint> for &'a Scalar {
    type Output = MontgomeryPoint;

    fn mul(self, point: &'b MontgomeryPoint) -> MontgomeryPoint {
        point * self
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::constants;
    use crate::traits::IsIdentity;

    use rand_core::{CryptoRng, RngCore};

    #[test]
    fn identity_in_different_coordinates() {
        let id_projective = ProjectivePoint::identity();
        let id_montgomery = id_projective.as_affine();

        assert!(id_montgomery == MontgomeryPoint::identity());
        assert!(id_montgomery.is_identity());
    }

    #[test]
    fn identity_in_different_models() {
        assert!(EdwardsPoint::identity().to_montgomery() == MontgomeryPoint::identity());
    }

    #[test]
    #[cfg(feature = "serde")]
    fn serde_bincode_basepoint_roundtrip() {
        use bincode;

        let encoded = bincode::serialize(&constants::X25519_BASEPOINT).unwrap();
        let decoded: MontgomeryPoint = bincode::deserialize(&encoded).unwrap();

        assert_eq!(encoded.len(), 32);
        assert_eq!(decoded, constants::X25519_BASEPOINT);

        let raw_bytes = constants::X25519_BASEPOINT.as_bytes();
        let bp: MontgomeryPoint = bincode::deserialize(raw_bytes).unwrap();
        assert_eq!(bp, constants::X25519_BASEPOINT);
    }

    #[test]
    fn basepoint_montgomery_to_edwards() {
        assert_eq!(
            constants::ED25519_BASEPOINT_POINT,
            constants::X25519_BASEPOINT.to_edwards(0).unwrap()
        );
        assert_eq!(
            -constants::ED25519_BASEPOINT_POINT,
            constants::X25519_BASEPOINT.to_edwards(1).unwrap()
        );
    }

    #[test]
    fn basepoint_edwards_to_montgomery() {
        assert_eq!(
            constants::ED25519_BASEPOINT_POINT.to_montgomery(),
            constants::X25519_BASEPOINT
        );
    }

    #[test]
    fn montgomery_to_edwards_rejects_twist() {
        let one = FieldElement::ONE;

        // u = 2: twist
        let two = MontgomeryPoint((&one + &one).as_bytes());

        assert!(two.to_edwards(0).is_none());

        // u = -1: twist, and the pole of the map
        let minus_one = MontgomeryPoint((-&one).as_bytes());

        assert!(minus_one.to_edwards(0).is_none());
    }

    #[test]
    fn eq_defined_mod_p() {
        let mut u18_bytes = [0u8; 32];
        u18_bytes[0] = 18;
        let u18 = MontgomeryPoint(u18_bytes);
        let u18_unred = MontgomeryPoint([255; 32]);

        assert_eq!(u18, u18_unred);
    }

    #[test]
    #[cfg(feature = "std")]
    fn hash_defined_mod_p() {
        use std::collections::hash_map::DefaultHasher;

        fn hash_of(p: &MontgomeryPoint) -> u64 {
            let mut hasher = DefaultHasher::new();
            p.hash(&mut hasher);
            hasher.finish()
        }

        let mut u18_bytes = [0u8; 32];
        u18_bytes[0] = 18;
        assert_eq!(
            hash_of(&MontgomeryPoint(u18_bytes)),
            hash_of(&MontgomeryPoint([255; 32]))
        );
    }

    fn rand_prime_order_point(mut rng: impl RngCore + CryptoRng) -> EdwardsPoint {
        let s: Scalar = Scalar::random(&mut rng);
        EdwardsPoint::mul_base(&s)
    }

    fn bits_le(x: &[u8]) -> impl DoubleEndedIterator<Item = bool> + '_ {
        x.iter().flat_map(|byte| (0..8).map(move |i| (byte >> i) & 1 == 1))
    }

    #[test]
    fn montgomery_ladder_matches_edwards_scalarmult() {
        let mut csprng = rand::thread_rng();

        for _ in 0..100 {
            let p_edwards = rand_prime_order_point(&mut csprng);
            let p_montgomery: MontgomeryPoint = p_edwards.to_montgomery();

            let s: Scalar = Scalar::random(&mut csprng);
            let expected = s * p_edwards;
            let result = s * p_montgomery;

            assert_eq!(result, expected.to_montgomery())
        }
    }

    #[test]
    fn montgomery_mul_bits_be() {
        let mut csprng = rand::thread_rng();

        for _ in 0..100 {
            let p_edwards = rand_prime_order_point(&mut csprng);
            let p_montgomery: MontgomeryPoint = p_edwards.to_montgomery();

            let mut bigint = [0u8; 64];
            csprng.fill_bytes(&mut bigint[..]);
            let bigint_bits_be = bits_le(&bigint).rev();

            // A 512-bit integer on the ladder against its reduction on Edwards.
            let expected = Scalar::from_bytes_mod_order_wide(&bigint) * p_edwards;
            let result = p_montgomery.mul_bits_be(bigint_bits_be);
            assert_eq!(result, expected.to_montgomery())
        }
    }

    #[test]
    fn montgomery_scalar_mul_assign_and_both_sides() {
        let s = Scalar::from(12345u64);
        let mut P = constants::X25519_BASEPOINT;
        let expected = s * constants::X25519_BASEPOINT;
        assert_eq!(constants::X25519_BASEPOINT * s, expected);
        P *= s;
        assert_eq!(P, expected);
        assert_eq!(MontgomeryPoint::mul_base(&s), expected);
    }

    #[test]
    fn multiplication_by_zero_is_identity() {
        assert!((constants::X25519_BASEPOINT * Scalar::ZERO).is_identity());
        assert!((MontgomeryPoint::identity() * Scalar::from(7u8)).is_identity());
    }

    #[test]
    fn mul_base_clamped() {
        let mut csprng = rand::thread_rng();

        // Clamped but still above l.
        let a_bytes = [0xff; 32];
        assert_eq!(
            MontgomeryPoint::mul_base_clamped(a_bytes),
            constants::X25519_BASEPOINT.mul_clamped(a_bytes)
        );

        for _ in 0..100 {
            let mut a_bytes = [0u8; 32];
            csprng.fill_bytes(&mut a_bytes);

            assert_eq!(
                MontgomeryPoint::mul_base_clamped(a_bytes),
                constants::X25519_BASEPOINT.mul_clamped(a_bytes)
            );
            assert_eq!(
                MontgomeryPoint::mul_base_clamped(a_bytes),
                EdwardsPoint::mul_base_clamped(a_bytes).to_montgomery()
            );
        }
    }
}
