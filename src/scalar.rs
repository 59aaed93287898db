// -*- mode: rust; -*-
//
// This file is part of curve25519-engine.
// See LICENSE for licensing information.

//! Integers modulo the prime subgroup order
//! \\(\ell = 2\^{252} + 27742317777372353535851937790883648493\\).
//!
//! A [`Scalar`] is stored as its 32-byte little-endian encoding and
//! unpacked into 52-bit limbs only while arithmetic runs.  Ways in:
//!
//! | constructor                           | input            | reduction          |
//! |---------------------------------------|------------------|--------------------|
//! | [`Scalar::from_bytes_mod_order`]      | 256-bit integer  | mod \\(\ell\\)     |
//! | [`Scalar::from_bytes_mod_order_wide`] | 512-bit integer  | mod \\(\ell\\)     |
//! | [`Scalar::from_canonical_bytes`]      | 256-bit integer  | rejects \\(\ge \ell\\) |
//! | [`Scalar::hash_from_bytes`]           | message          | 64-byte digest, mod \\(\ell\\) |
//!
//! Clamped secret keys never become `Scalar`s; [`clamp_integer`] feeds
//! `mul_clamped` and `mul_base_clamped` directly.

use core::borrow::Borrow;
use core::fmt::Debug;
use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Index, Mul, MulAssign, Neg, Sub, SubAssign};

use cfg_if::cfg_if;

#[cfg(feature = "alloc")]
use alloc::vec;

#[cfg(any(test, feature = "rand_core"))]
use rand_core::CryptoRngCore;

#[cfg(feature = "serde")]
use serde::de::Visitor;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use digest::generic_array::typenum::U64;
use digest::Digest;

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::backend;
use crate::constants;

cfg_if! {
    if #[cfg(target_pointer_width = "64")] {
        /// Limb form used for arithmetic.
        type UnpackedScalar = backend::serial::u64::scalar::Scalar52;
    } else {
        compile_error!("curve25519-engine only provides a 64-bit serial backend");
    }
}

/// An element of \\(\mathbb Z / \ell \mathbb Z\\).
#[allow(clippy::derived_hash_with_manual_eq)]
#[derive(Copy, Clone, Hash)]
pub struct Scalar {
    /// Little-endian integer.
    ///
    /// Always below \\(2\^{255}\\): the recodings into signed digits
    /// need the top bit free for a carry.
    ///
    /// Below \\(\ell\\) for every value reachable through the public API.
    /// The clamped integers built inside `mul_clamped` and
    /// `mul_base_clamped` are the only unreduced values, and they never
    /// escape.
    pub(crate) bytes: [u8; 32],
}

impl Scalar {
    /// Zero.
    pub const ZERO: Self = Self { bytes: [0u8; 32] };

    /// One.
    pub const ONE: Self = Self {
        bytes: [
            1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
            0, 0, 0,
        ],
    };

    /// Interpret `bytes` as a little-endian integer and reduce it mod \\(\ell\\).
    pub fn from_bytes_mod_order(bytes: [u8; 32]) -> Scalar {
        // `bytes` may have the top bit set; `reduce` copes with that.
        let s = Scalar { bytes }.reduce();
        debug_assert_eq!(0u8, s[31] >> 7);
        s
    }

    /// Interpret 64 bytes as a little-endian integer and reduce it mod
    /// \\(\ell\\).  Uniform input gives a negligibly biased scalar.
    pub fn from_bytes_mod_order_wide(input: &[u8; 64]) -> Scalar {
        UnpackedScalar::from_bytes_wide(input).pack()
    }

    /// Accept `bytes` only if it already encodes an integer below \\(\ell\\).
    ///
    /// The check runs in constant time; the result is a `CtOption`.
    pub fn from_canonical_bytes(bytes: [u8; 32]) -> CtOption<Scalar> {
        let top_bit_clear = (bytes[31] >> 7).ct_eq(&0);
        let candidate = Scalar { bytes };
        CtOption::new(candidate, top_bit_clear & candidate.is_canonical())
    }

    /// Variable-time `bytes < l`, for public values such as the `s`
    /// half of a signature.
    pub fn is_canonical_vartime(bytes: &[u8; 32]) -> bool {
        let l = constants::BASEPOINT_ORDER.as_bytes();
        // Compare from the most significant byte down.
        bytes.iter().rev().lt(l.iter().rev())
    }

    /// Uniform scalar from 64 bytes of `rng` output.
    #[cfg(any(test, feature = "rand_core"))]
    pub fn random<R: CryptoRngCore + ?Sized>(rng: &mut R) -> Self {
        let mut wide = [0u8; 64];
        rng.fill_bytes(&mut wide);
        Scalar::from_bytes_mod_order_wide(&wide)
    }

    /// `H(input) mod l` for a digest with 64 bytes of output.
    ///
    /// ```
    /// # use curve25519_engine::scalar::Scalar;
    /// use sha2::Sha512;
    ///
    /// let s = Scalar::hash_from_bytes::<Sha512>(b"nonce material");
    /// assert_ne!(s, Scalar::ZERO);
    /// ```
    pub fn hash_from_bytes<D>(input: &[u8]) -> Scalar
    where
        D: Digest<OutputSize = U64> + Default,
    {
        let mut hash = D::default();
        hash.update(input);
        Scalar::from_hash(hash)
    }

    /// Finalize a digest that has already absorbed its input and reduce
    /// the output mod \\(\ell\\).
    pub fn from_hash<D>(hash: D) -> Scalar
    where
        D: Digest<OutputSize = U64>,
    {
        let mut wide = [0u8; 64];
        wide.copy_from_slice(hash.finalize().as_slice());
        Scalar::from_bytes_mod_order_wide(&wide)
    }

    /// The 32-byte little-endian encoding.
    ///
    /// ```
    /// use curve25519_engine::scalar::Scalar;
    ///
    /// assert_eq!(Scalar::ONE.to_bytes()[0], 1);
    /// ```
    pub const fn to_bytes(&self) -> [u8; 32] {
        self.bytes
    }

    /// Borrow the 32-byte little-endian encoding.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }

    /// \\(s\^{-1}\\), computed as \\(s\^{\ell - 2}\\).  Zero maps to zero;
    /// callers that need a true inverse must rule zero out themselves.
    pub fn invert(&self) -> Scalar {
        self.unpack().invert().pack()
    }

    /// Invert every element of `inputs` in place with a single
    /// inversion, and return the inverse of their product.
    ///
    /// Every input must be nonzero.
    ///
    /// ```
    /// # use curve25519_engine::scalar::Scalar;
    /// let mut xs = [Scalar::from(2u64), Scalar::from(9u64), Scalar::from(13u64)];
    /// let product_inv = Scalar::batch_invert(&mut xs);
    ///
    /// assert_eq!(product_inv, Scalar::from(234u64).invert());
    /// assert_eq!(xs[1] * Scalar::from(9u64), Scalar::ONE);
    /// ```
    #[cfg(feature = "alloc")]
    pub fn batch_invert(inputs: &mut [Scalar]) -> Scalar {
        // Everything below is kept in Montgomery form.
        let one = Scalar::ONE.unpack().as_montgomery();
        let mut prefix = vec![one; inputs.len()];
        let mut acc = one;

        for (input, slot) in inputs.iter_mut().zip(prefix.iter_mut()) {
            *slot = acc;
            let x = input.unpack().as_montgomery();
            *input = x.pack();
            acc = UnpackedScalar::montgomery_mul(&acc, &x);
        }

        debug_assert!(acc.pack() != Scalar::ZERO);

        // Plain-form inverse of the product.
        let mut acc_inv = acc.montgomery_invert().from_montgomery();
        let product_inv = acc_inv.pack();

        for (input, before) in inputs.iter_mut().rev().zip(prefix.iter().rev()) {
            let next = UnpackedScalar::montgomery_mul(&acc_inv, &input.unpack());
            *input = UnpackedScalar::montgomery_mul(&acc_inv, before).pack();
            acc_inv = next;
        }

        #[cfg(feature = "zeroize")]
        prefix.iter_mut().for_each(Zeroize::zeroize);

        product_inv
    }

    /// Bits of the encoding, least significant first.
    pub(crate) fn bits_le(&self) -> impl DoubleEndedIterator<Item = bool> + '_ {
        (0..256).map(move |i| (self.bytes[i / 8] >> (i % 8)) & 1 == 1)
    }

    /// Width-`w` non-adjacent form: digits \\(n_i\\) with
    /// \\(\sum n_i 2\^i = s\\), each nonzero digit odd with
    /// \\(|n_i| < 2\^{w-1}\\), and no two nonzero digits closer than
    /// `w` positions.
    ///
    /// Scanning upward, an even window emits 0 and moves one bit.  An odd
    /// window emits its signed residue mod \\(2\^w\\) and moves `w` bits;
    /// a negative residue leaves a carry of one for the next window.
    ///
    /// Variable time.  Public scalars only.
    ///
    /// # Panics
    ///
    /// If `w` is outside `2..=8`.
    pub(crate) fn non_adjacent_form(&self, w: usize) -> [i8; 256] {
        assert!((2..=8).contains(&w), "NAF width must be in [2, 8]");

        // One spare zero word so a window may run off the end.
        let mut words = [0u64; 5];
        for (word, chunk) in words.iter_mut().zip(self.bytes.chunks_exact(8)) {
            let mut le = [0u8; 8];
            le.copy_from_slice(chunk);
            *word = u64::from_le_bytes(le);
        }

        let radix: u64 = 1 << w;
        let mask = radix - 1;

        let mut naf = [0i8; 256];
        let mut carry: u64 = 0;
        let mut pos = 0;
        while pos < 256 {
            let (idx, shift) = (pos / 64, pos % 64);
            let mut bits = words[idx] >> shift;
            if shift + w > 64 {
                bits |= words[idx + 1] << (64 - shift);
            }

            let window = carry + (bits & mask);
            if window & 1 == 0 {
                pos += 1;
                continue;
            }

            if window < radix / 2 {
                naf[pos] = window as i8;
                carry = 0;
            } else {
                naf[pos] = (window as i8).wrapping_sub(radix as i8);
                carry = 1;
            }
            pos += w;
        }

        naf
    }

    /// Signed radix-16 digits \\(a_0, \ldots, a_{63}\\) with
    /// \\(\sum a_i 16\^i = s\\), \\(-8 \le a_i < 8\\) for \\(i < 63\\) and
    /// \\(-8 \le a_{63} \le 8\\).
    ///
    /// Requires \\(s < 2\^{255}\\).
    pub(crate) fn as_radix_16(&self) -> [i8; 64] {
        debug_assert!(self[31] <= 127);

        let mut digits = [0i8; 64];
        for (pair, byte) in digits.chunks_exact_mut(2).zip(self.bytes.iter()) {
            pair[0] = (byte & 0x0f) as i8;
            pair[1] = (byte >> 4) as i8;
        }

        // Shift each digit from [0, 16) to [-8, 8), carrying upward.  The
        // last digit starts at most 7 and absorbs a carry of at most one.
        for i in 0..63 {
            let carry = (digits[i] + 8) >> 4;
            digits[i] -= carry << 4;
            digits[i + 1] += carry;
        }

        digits
    }

    pub(crate) fn unpack(&self) -> UnpackedScalar {
        UnpackedScalar::from_bytes(&self.bytes)
    }

    /// The representative below \\(\ell\\).  Accepts any 256-bit input.
    pub(crate) fn reduce(&self) -> Scalar {
        reduce_limbs(&self.unpack()).pack()
    }

    /// Constant-time `self < l`.
    fn is_canonical(&self) -> Choice {
        self.ct_eq(&self.reduce())
    }
}

/// Fully reduce limbs holding any value below \\(2\^{260}\\): multiplying
/// by \\(R\\) and Montgomery-reducing returns the same residue, now
/// below \\(\ell\\).
fn reduce_limbs(x: &UnpackedScalar) -> UnpackedScalar {
    UnpackedScalar::montgomery_reduce(&UnpackedScalar::mul_internal(
        x,
        &backend::serial::u64::constants::R,
    ))
}

impl Debug for Scalar {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Scalar").field("bytes", &self.bytes).finish()
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.bytes.ct_eq(&other.bytes)
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Scalar {}

impl Index<usize> for Scalar {
    type Output = u8;

    /// Read-only access to the encoding.
    fn index(&self, index: usize) -> &u8 {
        &self.bytes[index]
    }
}

impl<'a, 'b> Mul<&'b Scalar> for &'a Scalar {
    type Output = Scalar;
    fn mul(self, rhs: &'b Scalar) -> Scalar {
        UnpackedScalar::mul(&self.unpack(), &rhs.unpack()).pack()
    }
}

define_mul_variants!(LHS = Scalar, RHS = Scalar, Output = Scalar);

impl<'b> MulAssign<&'b Scalar> for Scalar {
    fn mul_assign(&mut self, rhs: &'b Scalar) {
        *self = &*self * rhs;
    }
}

define_mul_assign_variants!(LHS = Scalar, RHS = Scalar);

impl<'a, 'b> Add<&'b Scalar> for &'a Scalar {
    type Output = Scalar;
    fn add(self, rhs: &'b Scalar) -> Scalar {
        // The limb adder assumes reduced inputs; reduce its output again
        // so that unreduced operands still land below l.
        let sum = UnpackedScalar::add(&self.unpack(), &rhs.unpack());
        reduce_limbs(&sum).pack()
    }
}

define_add_variants!(LHS = Scalar, RHS = Scalar, Output = Scalar);

impl<'b> AddAssign<&'b Scalar> for Scalar {
    fn add_assign(&mut self, rhs: &'b Scalar) {
        *self = &*self + rhs;
    }
}

define_add_assign_variants!(LHS = Scalar, RHS = Scalar);

impl<'a, 'b> Sub<&'b Scalar> for &'a Scalar {
    type Output = Scalar;
    fn sub(self, rhs: &'b Scalar) -> Scalar {
        let lhs = reduce_limbs(&self.unpack());
        let rhs = reduce_limbs(&rhs.unpack());
        UnpackedScalar::sub(&lhs, &rhs).pack()
    }
}

define_sub_variants!(LHS = Scalar, RHS = Scalar, Output = Scalar);

impl<'b> SubAssign<&'b Scalar> for Scalar {
    fn sub_assign(&mut self, rhs: &'b Scalar) {
        *self = &*self - rhs;
    }
}

define_sub_assign_variants!(LHS = Scalar, RHS = Scalar);

impl<'a> Neg for &'a Scalar {
    type Output = Scalar;
    fn neg(self) -> Scalar {
        UnpackedScalar::sub(&UnpackedScalar::ZERO, &reduce_limbs(&self.unpack())).pack()
    }
}

impl Neg for Scalar {
    type Output = Scalar;
    fn neg(self) -> Scalar {
        -&self
    }
}

impl ConditionallySelectable for Scalar {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut bytes = [0u8; 32];
        for (out, (x, y)) in bytes.iter_mut().zip(a.bytes.iter().zip(b.bytes.iter())) {
            *out = u8::conditional_select(x, y, choice);
        }
        Scalar { bytes }
    }
}

#[cfg(feature = "serde")]
impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeTuple;
        let mut tup = serializer.serialize_tuple(32)?;
        for byte in &self.bytes {
            tup.serialize_element(byte)?;
        }
        tup.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ScalarVisitor;

        impl<'de> Visitor<'de> for ScalarVisitor {
            type Value = Scalar;

            fn expecting(&self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                formatter.write_str("32 bytes encoding an integer below the group order")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Scalar, A::Error>
            where
                A: serde::de::SeqAccess<'de>,
            {
                let mut bytes = [0u8; 32];
                for (i, byte) in bytes.iter_mut().enumerate() {
                    *byte = seq
                        .next_element()?
                        .ok_or_else(|| serde::de::Error::invalid_length(i, &"expected 32 bytes"))?;
                }
                Option::from(Scalar::from_canonical_bytes(bytes))
                    .ok_or_else(|| serde::de::Error::custom("scalar was not canonically encoded"))
            }
        }

        deserializer.deserialize_tuple(32, ScalarVisitor)
    }
}

impl<T> Product<T> for Scalar
where
    T: Borrow<Scalar>,
{
    fn product<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(Scalar::ONE, |acc, item| acc * item.borrow())
    }
}

impl<T> Sum<T> for Scalar
where
    T: Borrow<Scalar>,
{
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(Scalar::ZERO, |acc, item| acc + item.borrow())
    }
}

impl Default for Scalar {
    fn default() -> Scalar {
        Scalar::ZERO
    }
}

/// `From` for unsigned integers: every such value is below \\(\ell\\), so
/// the little-endian bytes are copied unchanged.
macro_rules! scalar_from_uint {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Scalar {
                fn from(x: $t) -> Scalar {
                    let le = x.to_le_bytes();
                    let mut bytes = [0u8; 32];
                    bytes[..le.len()].copy_from_slice(&le);
                    Scalar { bytes }
                }
            }
        )*
    };
}

scalar_from_uint!(u8, u16, u32, u64, u128);

#[cfg(feature = "zeroize")]
impl Zeroize for Scalar {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
    }
}

impl UnpackedScalar {
    fn pack(&self) -> Scalar {
        Scalar {
            bytes: self.as_bytes(),
        }
    }

    /// \\(x\^{\ell-2}\\) for `x` in Montgomery form, result in Montgomery form.
    #[rustfmt::skip]
    #[allow(clippy::just_underscores_and_digits)]
    pub fn montgomery_invert(&self) -> UnpackedScalar {
        // Each name spells the exponent it holds in binary.
        let    _1 = *self;
        let   _10 = _1.montgomery_square();
        let  _100 = _10.montgomery_square();
        let   _11 = UnpackedScalar::montgomery_mul(&_10,     &_1);
        let  _101 = UnpackedScalar::montgomery_mul(&_10,    &_11);
        let  _111 = UnpackedScalar::montgomery_mul(&_10,   &_101);
        let _1001 = UnpackedScalar::montgomery_mul(&_10,   &_111);
        let _1011 = UnpackedScalar::montgomery_mul(&_10,  &_1001);
        let _1111 = UnpackedScalar::montgomery_mul(&_100, &_1011);
        let _10000 = UnpackedScalar::montgomery_mul(&_1111, &_1);

        // (squarings, multiplier) pairs for the remaining bits of l - 2.
        let steps: [(usize, &UnpackedScalar); 27] = [
            (126, &_101),  (4, &_11),    (5, &_1111),  (5, &_1111),
            (4, &_1001),   (2, &_11),    (5, &_1111),  (4, &_101),
            (6, &_101),    (3, &_111),   (5, &_1111),  (5, &_111),
            (4, &_11),     (5, &_1011),  (6, &_1011),  (10, &_1001),
            (4, &_11),     (5, &_11),    (5, &_11),    (5, &_1001),
            (4, &_111),    (6, &_1111),  (5, &_1011),  (3, &_101),
            (6, &_1111),   (3, &_101),   (3, &_11),
        ];

        let mut y = _10000;
        for (squarings, multiplier) in steps {
            for _ in 0..squarings {
                y = y.montgomery_square();
            }
            y = UnpackedScalar::montgomery_mul(&y, multiplier);
        }
        y
    }

    /// \\(x\^{-1}\\) for `x` in plain form.
    pub fn invert(&self) -> UnpackedScalar {
        self.as_montgomery().montgomery_invert().from_montgomery()
    }
}

/// Clamp a 32-byte little-endian secret the X25519/Ed25519 way: clear
/// the low three bits, clear bit 255 and set bit 254.
///
/// The result is \\(2\^{254} + 8k\\) for some \\(0 \le k < 2\^{251}\\): a
/// multiple of the cofactor with a fixed top bit, so the Montgomery
/// ladder runs the same number of steps for every key.
pub const fn clamp_integer(mut bytes: [u8; 32]) -> [u8; 32] {
    bytes[0] &= 0b1111_1000;
    bytes[31] &= 0b0111_1111;
    bytes[31] |= 0b0100_0000;
    bytes
}
