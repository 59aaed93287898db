// -*- mode: rust; -*-
//
// This file is part of curve25519-engine.
// See LICENSE for licensing information.

//! The twisted Edwards curve \\(-x\^2 + y\^2 = 1 + dx\^2y\^2\\) over
//! \\(\mathbb F_p\\), which carries Ed25519.
//!
//! Points live in [`EdwardsPoint`] (extended coordinates) and travel as
//! [`CompressedEdwardsY`]: the 255-bit \\(y\\)-coordinate plus the parity
//! of \\(x\\) in the top bit.  Equality, conditional selection and the
//! group law are constant time.
//!
//! The full group has order \\(8\ell\\).  [`EdwardsPoint::is_small_order`]
//! recognises the eight points killed by the cofactor,
//! [`EdwardsPoint::is_torsion_free`] recognises the prime-order subgroup,
//! and [`EdwardsPoint::mul_by_cofactor`] projects into it.
//!
//! Three multiplication paths are offered:
//!
//! * `Scalar * EdwardsPoint`: constant-time fixed window over signed
//!   radix-16 digits;
//! * `Scalar * &EdwardsBasepointTable` and [`EdwardsPoint::mul_base`]:
//!   constant-time, with per-position tables of the fixed point;
//! * [`EdwardsPoint::vartime_double_scalar_mul_basepoint`]: \\(aA + bB\\)
//!   for public inputs only.
//!
//! The intermediate coordinate systems are described in
//! [`curve_models`](crate::backend::serial::curve_models).

#![allow(non_snake_case)]

use core::array::TryFromSliceError;
use core::borrow::Borrow;
use core::fmt::Debug;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use cfg_if::cfg_if;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::de::Visitor;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use subtle::{Choice, ConditionallyNegatable, ConditionallySelectable, ConstantTimeEq};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::backend::serial::curve_models::{
    AffineNielsPoint, ProjectiveNielsPoint, ProjectivePoint,
};
use crate::constants;
use crate::errors::CurveError;
use crate::field::FieldElement;
use crate::montgomery::MontgomeryPoint;
use crate::scalar::{clamp_integer, Scalar};
use crate::traits::{BasepointTable, Identity, IsIdentity, ValidityCheck};
use crate::window::LookupTable;

/// 32-byte point encoding: \\(y\\) little-endian in bits 0..255, the
/// parity of \\(x\\) in bit 255.
#[allow(clippy::derived_hash_with_manual_eq)]
#[derive(Copy, Clone, Hash)]
pub struct CompressedEdwardsY(pub [u8; 32]);

impl ConstantTimeEq for CompressedEdwardsY {
    fn ct_eq(&self, other: &CompressedEdwardsY) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl PartialEq for CompressedEdwardsY {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for CompressedEdwardsY {}

impl Debug for CompressedEdwardsY {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("CompressedEdwardsY").field(&self.0).finish()
    }
}

/// \\((0, 1)\\) and \\((0, -1)\\) with the sign bit set.  Both decode, but
/// \\(x = 0\\) has no negative.
const NON_CANONICAL_SIGN_BITS: [[u8; 32]; 2] = [
    [
        0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x80,
    ],
    [
        0xec, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff,
    ],
];

impl CompressedEdwardsY {
    /// Borrow the encoding.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// The encoding, by value.
    pub const fn to_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Recover the point.
    ///
    /// Solves \\(x\^2 = (y\^2 - 1)/(dy\^2 + 1)\\) and picks the root whose
    /// parity matches the sign bit.  A \\(y\\) at or above \\(p\\) is reduced
    /// first, and a set sign bit on \\(x = 0\\) is ignored; see
    /// [`CompressedEdwardsY::is_canonical_vartime`] for the strict check.
    ///
    /// # Errors
    ///
    /// `CurveError::InvalidYCoordinate` when the ratio is not a square.
    pub fn decompress(&self) -> Result<EdwardsPoint, CurveError> {
        let Y = FieldElement::from_bytes(&self.0);
        let Z = FieldElement::ONE;
        let Y2 = Y.square();
        let numerator = &Y2 - &Z;
        let denominator = &(&Y2 * &constants::EDWARDS_D) + &Z;
        let (is_square, mut X) = FieldElement::sqrt_ratio_i(&numerator, &denominator);

        if !bool::from(is_square) {
            return Err(CurveError::InvalidYCoordinate);
        }

        // The root comes back even; flip it for an odd sign bit.
        X.conditional_negate(Choice::from(self.0[31] >> 7));

        Ok(EdwardsPoint {
            X,
            Y,
            Z,
            T: &X * &Y,
        })
    }

    /// Variable-time test that this is the unique encoding of its point:
    /// \\(y < p\\), and no sign bit on \\(x = 0\\).
    ///
    /// Says nothing about whether the encoding decompresses at all.
    pub fn is_canonical_vartime(&self) -> bool {
        self.y_is_reduced_vartime() && !NON_CANONICAL_SIGN_BITS.contains(&self.0)
    }

    /// Low 255 bits below \\(2\^{255} - 19\\)?
    fn y_is_reduced_vartime(&self) -> bool {
        let b = &self.0;
        b[0] < 0xed || b[1..31].iter().any(|x| *x != 0xff) || (b[31] & 0x7f) != 0x7f
    }

    /// Copy a 32-byte slice.
    ///
    /// # Errors
    ///
    /// [`TryFromSliceError`] for any other length.
    pub fn from_slice(bytes: &[u8]) -> Result<CompressedEdwardsY, TryFromSliceError> {
        bytes.try_into().map(CompressedEdwardsY)
    }
}

impl TryFrom<&[u8]> for CompressedEdwardsY {
    type Error = TryFromSliceError;

    fn try_from(slice: &[u8]) -> Result<CompressedEdwardsY, TryFromSliceError> {
        CompressedEdwardsY::from_slice(slice)
    }
}

// Both types go over serde as a 32-element tuple of the compressed form.

#[cfg(feature = "serde")]
fn serialize_encoding<S: Serializer>(bytes: &[u8; 32], serializer: S) -> Result<S::Ok, S::Error> {
    use serde::ser::SerializeTuple;
    let mut tup = serializer.serialize_tuple(32)?;
    for byte in bytes {
        tup.serialize_element(byte)?;
    }
    tup.end()
}

#[cfg(feature = "serde")]
struct EncodingVisitor;

#[cfg(feature = "serde")]
impl<'de> Visitor<'de> for EncodingVisitor {
    type Value = CompressedEdwardsY;

    fn expecting(&self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        formatter.write_str("a 32-byte compressed Edwards point")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<CompressedEdwardsY, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut bytes = [0u8; 32];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = seq
                .next_element()?
                .ok_or_else(|| serde::de::Error::invalid_length(i, &"expected 32 bytes"))?;
        }
        Ok(CompressedEdwardsY(bytes))
    }
}

#[cfg(feature = "serde")]
impl Serialize for CompressedEdwardsY {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_encoding(&self.0, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for CompressedEdwardsY {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_tuple(32, EncodingVisitor)
    }
}

#[cfg(feature = "serde")]
impl Serialize for EdwardsPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_encoding(&self.compress().0, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for EdwardsPoint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer
            .deserialize_tuple(32, EncodingVisitor)?
            .decompress()
            .map_err(serde::de::Error::custom)
    }
}

/// A point in extended coordinates \\((X:Y:Z:T)\\):
/// \\(x = X/Z\\), \\(y = Y/Z\\), \\(XY = ZT\\).
#[derive(Copy, Clone)]
#[allow(missing_docs)]
pub struct EdwardsPoint {
    pub(crate) X: FieldElement,
    pub(crate) Y: FieldElement,
    pub(crate) Z: FieldElement,
    pub(crate) T: FieldElement,
}

impl Identity for CompressedEdwardsY {
    fn identity() -> CompressedEdwardsY {
        let mut bytes = [0u8; 32];
        bytes[0] = 1;
        CompressedEdwardsY(bytes)
    }
}

impl Default for CompressedEdwardsY {
    fn default() -> CompressedEdwardsY {
        CompressedEdwardsY::identity()
    }
}

impl Identity for EdwardsPoint {
    fn identity() -> EdwardsPoint {
        EdwardsPoint {
            X: FieldElement::ZERO,
            Y: FieldElement::ONE,
            Z: FieldElement::ONE,
            T: FieldElement::ZERO,
        }
    }
}

impl Default for EdwardsPoint {
    fn default() -> EdwardsPoint {
        EdwardsPoint::identity()
    }
}

// Wiping leaves the identity behind rather than an off-curve zero.

#[cfg(feature = "zeroize")]
impl Zeroize for CompressedEdwardsY {
    fn zeroize(&mut self) {
        self.0.zeroize();
        self.0[0] = 1;
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for EdwardsPoint {
    fn zeroize(&mut self) {
        self.X.zeroize();
        self.Y = FieldElement::ONE;
        self.Z = FieldElement::ONE;
        self.T.zeroize();
    }
}

impl ValidityCheck for EdwardsPoint {
    /// On the curve, and \\(XY = ZT\\).  Not constant time.
    fn is_valid(&self) -> bool {
        self.as_projective().is_valid() && (&self.X * &self.Y) == (&self.Z * &self.T)
    }
}

impl ConditionallySelectable for EdwardsPoint {
    fn conditional_select(a: &EdwardsPoint, b: &EdwardsPoint, choice: Choice) -> EdwardsPoint {
        EdwardsPoint {
            X: FieldElement::conditional_select(&a.X, &b.X, choice),
            Y: FieldElement::conditional_select(&a.Y, &b.Y, choice),
            Z: FieldElement::conditional_select(&a.Z, &b.Z, choice),
            T: FieldElement::conditional_select(&a.T, &b.T, choice),
        }
    }
}

impl ConstantTimeEq for EdwardsPoint {
    /// Cross-multiplied: \\(X_1 Z_2 = X_2 Z_1\\) and \\(Y_1 Z_2 = Y_2 Z_1\\).
    fn ct_eq(&self, other: &EdwardsPoint) -> Choice {
        let same_x = (&self.X * &other.Z).ct_eq(&(&other.X * &self.Z));
        let same_y = (&self.Y * &other.Z).ct_eq(&(&other.Y * &self.Z));
        same_x & same_y
    }
}

impl PartialEq for EdwardsPoint {
    fn eq(&self, other: &EdwardsPoint) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for EdwardsPoint {}

impl EdwardsPoint {
    pub(crate) fn as_projective_niels(&self) -> ProjectiveNielsPoint {
        ProjectiveNielsPoint {
            Y_plus_X: &self.Y + &self.X,
            Y_minus_X: &self.Y - &self.X,
            Z: self.Z,
            T2d: &self.T * &constants::EDWARDS_D2,
        }
    }

    /// Drops `T`.
    pub(crate) const fn as_projective(&self) -> ProjectivePoint {
        ProjectivePoint {
            X: self.X,
            Y: self.Y,
            Z: self.Z,
        }
    }

    /// Costs one inversion.
    pub(crate) fn as_affine_niels(&self) -> AffineNielsPoint {
        let (x, y) = self.to_affine();
        AffineNielsPoint {
            y_plus_x: &y + &x,
            y_minus_x: &y - &x,
            xy2d: &(&x * &y) * &constants::EDWARDS_D2,
        }
    }

    fn to_affine(&self) -> (FieldElement, FieldElement) {
        let z_inv = self.Z.invert();
        (&self.X * &z_inv, &self.Y * &z_inv)
    }

    /// The birational map \\(u = (1+y)/(1-y)\\) to the Montgomery curve.
    ///
    /// \\(P\\) and \\(-P\\) share a \\(u\\), so the sign is lost.  The
    /// identity has \\(1 - y = 0\\) and, with `invert(0) = 0`, lands on
    /// \\(u = 0\\).
    pub fn to_montgomery(&self) -> MontgomeryPoint {
        let numerator = &self.Z + &self.Y;
        let denominator = &self.Z - &self.Y;
        MontgomeryPoint((&numerator * &denominator.invert()).as_bytes())
    }

    /// The 32-byte encoding.  One inversion.
    pub fn compress(&self) -> CompressedEdwardsY {
        let (x, y) = self.to_affine();
        encode_affine(&x, &y)
    }

    /// [`EdwardsPoint::compress`] for a slice, sharing one inversion
    /// across all inputs.
    #[cfg(feature = "alloc")]
    pub fn compress_batch(inputs: &[EdwardsPoint]) -> Vec<CompressedEdwardsY> {
        let mut z_invs: Vec<FieldElement> = inputs.iter().map(|p| p.Z).collect();
        FieldElement::batch_invert(&mut z_invs);

        inputs
            .iter()
            .zip(z_invs.iter())
            .map(|(p, z_inv)| encode_affine(&(&p.X * z_inv), &(&p.Y * z_inv)))
            .collect()
    }

    /// `2P`.
    pub fn double(&self) -> EdwardsPoint {
        self.as_projective().double().as_extended()
    }
}

fn encode_affine(x: &FieldElement, y: &FieldElement) -> CompressedEdwardsY {
    let mut bytes = y.as_bytes();
    bytes[31] |= x.is_negative().unwrap_u8() << 7;
    CompressedEdwardsY(bytes)
}

impl<'a, 'b> Add<&'b EdwardsPoint> for &'a EdwardsPoint {
    type Output = EdwardsPoint;
    fn add(self, other: &'b EdwardsPoint) -> EdwardsPoint {
        (self + &other.as_projective_niels()).as_extended()
    }
}

define_add_variants!(
    LHS = EdwardsPoint,
    RHS = EdwardsPoint,
    Output = EdwardsPoint
);

impl<'b> AddAssign<&'b EdwardsPoint> for EdwardsPoint {
    fn add_assign(&mut self, rhs: &'b EdwardsPoint) {
        *self = &*self + rhs;
    }
}

define_add_assign_variants!(LHS = EdwardsPoint, RHS = EdwardsPoint);

impl<'a, 'b> Sub<&'b EdwardsPoint> for &'a EdwardsPoint {
    type Output = EdwardsPoint;
    fn sub(self, other: &'b EdwardsPoint) -> EdwardsPoint {
        (self - &other.as_projective_niels()).as_extended()
    }
}

define_sub_variants!(
    LHS = EdwardsPoint,
    RHS = EdwardsPoint,
    Output = EdwardsPoint
);

impl<'b> SubAssign<&'b EdwardsPoint> for EdwardsPoint {
    fn sub_assign(&mut self, rhs: &'b EdwardsPoint) {
        *self = &*self - rhs;
    }
}

define_sub_assign_variants!(LHS = EdwardsPoint, RHS = EdwardsPoint);

impl<T> Sum<T> for EdwardsPoint
where
    T: Borrow<EdwardsPoint>,
{
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(EdwardsPoint::identity(), |acc, item| acc + item.borrow())
    }
}

impl<'a> Neg for &'a EdwardsPoint {
    type Output = EdwardsPoint;

    /// \\(-(x, y) = (-x, y)\\).
    fn neg(self) -> EdwardsPoint {
        EdwardsPoint {
            X: -(&self.X),
            Y: self.Y,
            Z: self.Z,
            T: -(&self.T),
        }
    }
}

impl Neg for EdwardsPoint {
    type Output = EdwardsPoint;

    fn neg(self) -> EdwardsPoint {
        -&self
    }
}

impl<'a, 'b> Mul<&'b Scalar> for &'a EdwardsPoint {
    type Output = EdwardsPoint;

    /// Constant-time variable-base multiplication.  For the basepoint,
    /// [`EdwardsPoint::mul_base`] is faster.
    fn mul(self, scalar: &'b Scalar) -> EdwardsPoint {
        crate::backend::variable_base_mul(self, scalar)
    }
}

impl<'a, 'b> Mul<&'b EdwardsPoint> for &'a Scalar {
    type Output = EdwardsPoint;

    fn mul(self, point: &'b EdwardsPoint) -> EdwardsPoint {
        point * self
    }
}

define_mul_variants!(LHS = EdwardsPoint, RHS = Scalar, Output = EdwardsPoint);
define_mul_variants!(LHS = Scalar, RHS = EdwardsPoint, Output = EdwardsPoint);

impl<'b> MulAssign<&'b Scalar> for EdwardsPoint {
    fn mul_assign(&mut self, scalar: &'b Scalar) {
        *self = &*self * scalar;
    }
}

define_mul_assign_variants!(LHS = EdwardsPoint, RHS = Scalar);

impl EdwardsPoint {
    /// \\(aB\\) for the Ed25519 basepoint \\(B\\).
    ///
    /// Goes through [`constants::ED25519_BASEPOINT_TABLE`] when
    /// `precomputed-tables` is on, and falls back to the variable-base
    /// path otherwise.
    pub fn mul_base(scalar: &Scalar) -> Self {
        cfg_if! {
            if #[cfg(feature = "precomputed-tables")] {
                scalar * &*constants::ED25519_BASEPOINT_TABLE
            } else {
                scalar * constants::ED25519_BASEPOINT_POINT
            }
        }
    }

    /// `self * clamp_integer(bytes)`, see [`clamp_integer`].
    pub fn mul_clamped(self, bytes: [u8; 32]) -> Self {
        // Unreduced, but below 2^255, which is all the radix-16 recoding needs.
        let s = Scalar {
            bytes: clamp_integer(bytes),
        };
        s * self
    }

    /// `B * clamp_integer(bytes)`, see [`clamp_integer`].
    pub fn mul_base_clamped(bytes: [u8; 32]) -> Self {
        let s = Scalar {
            bytes: clamp_integer(bytes),
        };
        Self::mul_base(&s)
    }

    /// \\(aA + bB\\) with \\(B\\) the Ed25519 basepoint.
    ///
    /// Only use this with public inputs: the running time depends on the
    /// digits of both scalars.
    pub fn vartime_double_scalar_mul_basepoint(
        a: &Scalar,
        A: &EdwardsPoint,
        b: &Scalar,
    ) -> EdwardsPoint {
        crate::backend::vartime_double_base_mul(a, A, b)
    }

    /// \\(\[8\]P\\).
    pub fn mul_by_cofactor(&self) -> EdwardsPoint {
        self.mul_by_pow_2(3)
    }

    /// \\(\[2\^k\]P\\), staying in projective coordinates between doublings.
    ///
    /// # Panics
    ///
    /// If `k == 0`.
    pub fn mul_by_pow_2(&self, k: u32) -> EdwardsPoint {
        assert!(k > 0, "mul_by_pow_2 requires k > 0");
        let mut p = self.as_projective().double();
        for _ in 1..k {
            p = p.as_projective().double();
        }
        p.as_extended()
    }

    /// Whether \\(\[8\]P\\) is the identity.
    ///
    /// ```
    /// use curve25519_engine::constants;
    /// use curve25519_engine::traits::Identity;
    /// use curve25519_engine::EdwardsPoint;
    ///
    /// assert!(!constants::ED25519_BASEPOINT_POINT.is_small_order());
    /// assert!(EdwardsPoint::identity().is_small_order());
    /// ```
    pub fn is_small_order(&self) -> bool {
        self.mul_by_cofactor().is_identity()
    }

    /// Whether \\(\[\ell\]P\\) is the identity, i.e. \\(P\\) has no
    /// component in the 8-torsion.
    pub fn is_torsion_free(&self) -> bool {
        (self * constants::BASEPOINT_ORDER).is_identity()
    }
}

/// Fixed-base tables for a point \\(B\\): for each \\(0 \leq j < 32\\), a
/// [`LookupTable`] of \\([1..8] \cdot 256\^j B\\).  Roughly 30KB.
///
/// [`constants::ED25519_BASEPOINT_TABLE`] is the instance for Ed25519.
#[derive(Clone)]
#[repr(transparent)]
pub struct EdwardsBasepointTable(pub(crate) [LookupTable<AffineNielsPoint>; 32]);

impl BasepointTable for EdwardsBasepointTable {
    type Point = EdwardsPoint;

    fn create(basepoint: &EdwardsPoint) -> EdwardsBasepointTable {
        let mut table = EdwardsBasepointTable([LookupTable::default(); 32]);
        let mut P = *basepoint;
        for entry in table.0.iter_mut() {
            *entry = LookupTable::from(&P);
            P = P.mul_by_pow_2(8);
        }
        table
    }

    fn basepoint(&self) -> EdwardsPoint {
        // Entry 1 of the first table is B itself.
        (&EdwardsPoint::identity() + &self.0[0].select(1)).as_extended()
    }

    /// With signed radix-16 digits \\(a = \sum a_i 16\^i\\),
    /// $$
    /// aB = \sum_j a_{2j} 256\^j B + 16 \sum_j a_{2j+1} 256\^j B,
    /// $$
    /// so the odd digits are accumulated first, shifted by four
    /// doublings, and the even digits are added on top.
    fn mul_base(&self, scalar: &Scalar) -> EdwardsPoint {
        let digits = scalar.as_radix_16();
        let accumulate = |mut acc: EdwardsPoint, parity: usize| {
            for (table, pair) in self.0.iter().zip(digits.chunks_exact(2)) {
                acc = (&acc + &table.select(pair[parity])).as_extended();
            }
            acc
        };

        let odd = accumulate(EdwardsPoint::identity(), 1);
        accumulate(odd.mul_by_pow_2(4), 0)
    }
}

impl<'a, 'b> Mul<&'b Scalar> for &'a EdwardsBasepointTable {
    type Output = EdwardsPoint;

    fn mul(self, scalar: &'b Scalar) -> EdwardsPoint {
        self.mul_base(scalar)
    }
}

impl<'a, 'b> Mul<&'a EdwardsBasepointTable> for &'b Scalar {
    type Output = EdwardsPoint;

    fn mul(self, basepoint_table: &'a EdwardsBasepointTable) -> EdwardsPoint {
        basepoint_table.mul_base(self)
    }
}

impl Debug for EdwardsBasepointTable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("EdwardsBasepointTable").field(&self.0).finish()
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for EdwardsBasepointTable {
    fn zeroize(&mut self) {
        self.0.iter_mut().for_each(Zeroize::zeroize);
    }
}

impl Debug for EdwardsPoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EdwardsPoint")
            .field("X", &self.X)
            .field("Y", &self.Y)
            .field("Z", &self.Z)
            .field("T", &self.T)
            .finish()
    }
}
