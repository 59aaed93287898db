// -*- mode: rust; -*-
//
// This file is part of curve25519-engine.
// See LICENSE for licensing information.

//! Arithmetic mod \\(\ell = 2\^{252} + 27742317777372353535851937790883648493\\)
//! with five \\(52\\)-bit unsigned limbs.
//!
//! \\(51\\)-bit limbs would cover the \\(253\\) bits of \\(\ell\\), but
//! are too small to reduce a \\(512\\)-bit product with Montgomery
//! multiplication.  With \\(52\\)-bit limbs the largest coefficient of
//! a \\(5\times 5\\) product is
//!
//! ```text
//! (0xfffffffffffff^2) * 5 = 0x4ffffffffffff60000000000005 (107 bits).
//! ```

use core::fmt::Debug;
use core::ops::{Index, IndexMut};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use super::constants;

/// Mask selecting the low 52 bits of a limb.
const LOW_52_BIT_MASK: u64 = (1u64 << 52) - 1;

/// An element of \\(\mathbb Z / \ell \mathbb Z\\) as five \\(52\\)-bit
/// limbs, possibly in Montgomery form.
#[derive(Copy, Clone)]
pub struct Scalar52(pub [u64; 5]);

impl Debug for Scalar52 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Scalar52: {:?}", &self.0[..])
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for Scalar52 {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl Index<usize> for Scalar52 {
    type Output = u64;
    fn index(&self, index: usize) -> &u64 {
        &(self.0[index])
    }
}

impl IndexMut<usize> for Scalar52 {
    fn index_mut(&mut self, index: usize) -> &mut u64 {
        &mut (self.0[index])
    }
}

#[inline(always)]
fn m(x: u64, y: u64) -> u128 {
    (x as u128) * (y as u128)
}

/// Read little-endian bytes into 64-bit words.
#[inline(always)]
fn load_words<const N: usize>(bytes: &[u8]) -> [u64; N] {
    let mut words = [0u64; N];
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(8)) {
        for (k, byte) in chunk.iter().enumerate() {
            *word |= (*byte as u64) << (8 * k);
        }
    }
    words
}

/// The 52 bits of `words` starting at bit `at`, truncated at the end of
/// the input.
#[inline(always)]
fn bits52(words: &[u64], at: usize) -> u64 {
    let (w, off) = (at / 64, at % 64);
    let mut v = words[w] >> off;
    if off > 12 && w + 1 < words.len() {
        v |= words[w + 1] << (64 - off);
    }
    v & LOW_52_BIT_MASK
}

impl Scalar52 {
    /// Zero.
    pub const ZERO: Scalar52 = Scalar52([0, 0, 0, 0, 0]);

    /// Split 256 little-endian bits into limbs.  No reduction.
    pub fn from_bytes(bytes: &[u8; 32]) -> Scalar52 {
        let words = load_words::<4>(bytes);
        let mut s = Scalar52::ZERO;
        for i in 0..5 {
            s[i] = bits52(&words, 52 * i);
        }
        s
    }

    /// Reduce 512 little-endian bits mod \\(\ell\\).
    ///
    /// The input is split as \\(lo + 2\^{260} hi\\); one Montgomery
    /// multiplication by \\(R\\) and one by \\(R\^2\\) bring both halves
    /// back to canonical form with the right weight.
    pub fn from_bytes_wide(bytes: &[u8; 64]) -> Scalar52 {
        let words = load_words::<8>(bytes);
        let mut lo = Scalar52::ZERO;
        let mut hi = Scalar52::ZERO;
        for i in 0..5 {
            lo[i] = bits52(&words, 52 * i);
            hi[i] = bits52(&words, 260 + 52 * i);
        }

        let lo = Scalar52::montgomery_mul(&lo, &constants::R);
        let hi = Scalar52::montgomery_mul(&hi, &constants::RR);
        Scalar52::add(&hi, &lo)
    }

    /// Little-endian encoding of the limbs.
    pub fn as_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        let mut acc: u128 = 0;
        let mut pending = 0;
        let mut k = 0;
        for limb in self.0 {
            acc |= (limb as u128) << pending;
            pending += 52;
            while pending >= 8 && k < 32 {
                out[k] = acc as u8;
                acc >>= 8;
                pending -= 8;
                k += 1;
            }
        }
        out
    }

    /// `a + b mod l`, for reduced inputs.
    pub fn add(a: &Scalar52, b: &Scalar52) -> Scalar52 {
        let mut sum = Scalar52::ZERO;
        let mut carry: u64 = 0;
        for i in 0..5 {
            carry = a[i] + b[i] + (carry >> 52);
            sum[i] = carry & LOW_52_BIT_MASK;
        }

        // sum < 2l, one conditional subtraction suffices
        Scalar52::sub(&sum, &constants::L)
    }

    /// `a - b mod l`, for inputs below `2l`.
    pub fn sub(a: &Scalar52, b: &Scalar52) -> Scalar52 {
        let mut diff = Scalar52::ZERO;
        let mut borrow: u64 = 0;
        for i in 0..5 {
            borrow = a[i].wrapping_sub(b[i] + (borrow >> 63));
            diff[i] = borrow & LOW_52_BIT_MASK;
        }

        // All ones if the subtraction wrapped, zero otherwise.
        let wrapped = 0u64.wrapping_sub(borrow >> 63);
        let mut carry: u64 = 0;
        for i in 0..5 {
            carry = (carry >> 52) + diff[i] + (constants::L[i] & wrapped);
            diff[i] = carry & LOW_52_BIT_MASK;
        }

        diff
    }

    /// Schoolbook product, nine 128-bit columns.
    #[inline(always)]
    pub(crate) fn mul_internal(a: &Scalar52, b: &Scalar52) -> [u128; 9] {
        let mut z = [0u128; 9];
        for i in 0..5 {
            for j in 0..5 {
                z[i + j] += m(a[i], b[j]);
            }
        }
        z
    }

    /// Like `mul_internal(a, a)`, folding the symmetric cross terms.
    #[inline(always)]
    fn square_internal(a: &Scalar52) -> [u128; 9] {
        let mut z = [0u128; 9];
        for i in 0..5 {
            z[2 * i] += m(a[i], a[i]);
            let twice = a[i] * 2;
            for j in (i + 1)..5 {
                z[i + j] += m(twice, a[j]);
            }
        }
        z
    }

    /// `limbs / R mod l` with \\(R = 2\^{260}\\).
    #[inline(always)]
    pub(crate) fn montgomery_reduce(limbs: &[u128; 9]) -> Scalar52 {
        let l = &constants::L;

        // Pick n limb by limb so that limbs + n*l vanishes mod R.
        let mut n = [0u64; 5];
        let mut carry: u128 = 0;
        for i in 0..5 {
            let mut column = carry + limbs[i];
            for j in 0..i {
                column += m(n[j], l[i - j]);
            }
            n[i] = (column as u64).wrapping_mul(constants::LFACTOR) & LOW_52_BIT_MASK;
            carry = (column + m(n[i], l[0])) >> 52;
        }

        // The upper columns are the quotient by R.
        let mut r = Scalar52::ZERO;
        for i in 5..9 {
            let mut column = carry + limbs[i];
            for j in (i - 4)..5 {
                column += m(n[j], l[i - j]);
            }
            r[i - 5] = (column as u64) & LOW_52_BIT_MASK;
            carry = column >> 52;
        }
        r[4] = carry as u64;

        // r < 2l
        Scalar52::sub(&r, l)
    }

    /// `a * b mod l`.
    #[inline(never)]
    pub fn mul(a: &Scalar52, b: &Scalar52) -> Scalar52 {
        let ab_over_r = Scalar52::montgomery_mul(a, b);
        Scalar52::montgomery_mul(&ab_over_r, &constants::RR)
    }

    /// `self^2 mod l`.
    #[inline(never)]
    pub fn square(&self) -> Scalar52 {
        let aa_over_r = self.montgomery_square();
        Scalar52::montgomery_mul(&aa_over_r, &constants::RR)
    }

    /// `a * b / R mod l`.
    #[inline(never)]
    pub fn montgomery_mul(a: &Scalar52, b: &Scalar52) -> Scalar52 {
        Scalar52::montgomery_reduce(&Scalar52::mul_internal(a, b))
    }

    /// `self^2 / R mod l`.
    #[inline(never)]
    pub fn montgomery_square(&self) -> Scalar52 {
        Scalar52::montgomery_reduce(&Scalar52::square_internal(self))
    }

    /// `self * R mod l`.
    #[inline(never)]
    pub fn as_montgomery(&self) -> Scalar52 {
        Scalar52::montgomery_mul(self, &constants::RR)
    }

    /// `self / R mod l`.
    #[allow(clippy::wrong_self_convention)]
    #[inline(never)]
    pub fn from_montgomery(&self) -> Scalar52 {
        let mut limbs = [0u128; 9];
        for (wide, limb) in limbs.iter_mut().zip(self.0) {
            *wide = limb as u128;
        }
        Scalar52::montgomery_reduce(&limbs)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// x = 2^253-1, above l-1, exercising the widest limb values.
    ///
    /// x = 14474011154664524427946373126085988481658748083205070504932198000989141204991
    /// x = 7237005577332262213973186563042994240801631723825162898930247062703686954002 mod l
    /// x = 3057150787695215392275360544382990118917283750546154083604586903220563173085*R mod l in Montgomery form
    pub static X: Scalar52 = Scalar52([
        0x000fffffffffffff,
        0x000fffffffffffff,
        0x000fffffffffffff,
        0x000fffffffffffff,
        0x00001fffffffffff,
    ]);

    /// x^2 = 3078544782642840487852506753550082162405942681916160040940637093560259278169 mod l
    pub static XX: Scalar52 = Scalar52([
        0x0001668020217559,
        0x000531640ffd0ec0,
        0x00085fd6f9f38a31,
        0x000c268f73bb1cf4,
        0x000006ce65046df0,
    ]);

    /// x^2 = 4413052134910308800482070043710297189082115023966588301924965890668401540959*R mod l in Montgomery form
    pub static XX_MONT: Scalar52 = Scalar52([
        0x000c754eea569a5c,
        0x00063b6ed36cb215,
        0x0008ffa36bf25886,
        0x000e9183614e7543,
        0x0000061db6c6f26f,
    ]);

    /// y = 6145104759870991071742105800796537629880401874866217824609283457819451087098
    pub static Y: Scalar52 = Scalar52([
        0x000b75071e1458fa,
        0x000bf9d75e1ecdac,
        0x000433d2baf0672b,
        0x0005fffcc11fad13,
        0x00000d96018bb825,
    ]);

    /// x*y = 36752150652102274958925982391442301741 mod l
    pub static XY: Scalar52 = Scalar52([
        0x000ee6d76ba7632d,
        0x000ed50d71d84e02,
        0x00000000001ba634,
        0x0000000000000000,
        0x0000000000000000,
    ]);

    /// x*y = 658448296334113745583381664921721413881518248721417041768778176391714104386*R mod l in Montgomery form
    pub static XY_MONT: Scalar52 = Scalar52([
        0x0006d52bf200cfd5,
        0x00033fb1d7021570,
        0x000f201bc07139d8,
        0x0001267e3e49169e,
        0x000007b839c00268,
    ]);

    /// a = 2351415481556538453565687241199399922945659411799870114962672658845158063753
    pub static A: Scalar52 = Scalar52([
        0x0005236c07b3be89,
        0x0001bc3d2a67c0c4,
        0x000a4aa782aae3ee,
        0x0006b3f6e4fec4c4,
        0x00000532da9fab8c,
    ]);

    /// b = 4885590095775723760407499321843594317911456947580037491039278279440296187236
    pub static B: Scalar52 = Scalar52([
        0x000d3fae55421564,
        0x000c2df24f65a4bc,
        0x0005b5587d69fb0b,
        0x00094c091b013b3b,
        0x00000acd25605473,
    ]);

    /// a+b = 0
    /// a-b = 4702830963113076907131374482398799845891318823599740229925345317690316127506
    pub static AB: Scalar52 = Scalar52([
        0x000a46d80f677d12,
        0x0003787a54cf8188,
        0x0004954f0555c7dc,
        0x000d67edc9fd8989,
        0x00000a65b53f5718,
    ]);

    // c = (2^512 - 1) % l = 1627715501170711445284395025044413883736156588369414752970002579683115011840
    pub static C: Scalar52 = Scalar52([
        0x000611e3449c0f00,
        0x000a768859347a40,
        0x0007f5be65d00e1b,
        0x0009a3dceec73d21,
        0x00000399411b7c30,
    ]);

    fn assert_limbs_eq(a: &Scalar52, b: &Scalar52) {
        for i in 0..5 {
            assert_eq!(a[i], b[i], "limb {} differs", i);
        }
    }

    #[test]
    fn mul_max() {
        assert_limbs_eq(&Scalar52::mul(&X, &X), &XX);
    }

    #[test]
    fn square_max() {
        assert_limbs_eq(&X.square(), &XX);
    }

    #[test]
    fn montgomery_mul_max() {
        assert_limbs_eq(&Scalar52::montgomery_mul(&X, &X), &XX_MONT);
    }

    #[test]
    fn montgomery_square_max() {
        assert_limbs_eq(&X.montgomery_square(), &XX_MONT);
    }

    #[test]
    fn mul() {
        assert_limbs_eq(&Scalar52::mul(&X, &Y), &XY);
    }

    #[test]
    fn montgomery_mul() {
        assert_limbs_eq(&Scalar52::montgomery_mul(&X, &Y), &XY_MONT);
    }

    #[test]
    fn montgomery_round_trip() {
        let y_mont = Y.as_montgomery();
        assert_limbs_eq(&y_mont.from_montgomery(), &Y);
    }

    #[test]
    fn add() {
        assert_limbs_eq(&Scalar52::add(&A, &B), &Scalar52::ZERO);
    }

    #[test]
    fn sub() {
        assert_limbs_eq(&Scalar52::sub(&A, &B), &AB);
    }

    #[test]
    fn from_bytes_wide() {
        let bignum = [255u8; 64]; // 2^512 - 1
        assert_limbs_eq(&Scalar52::from_bytes_wide(&bignum), &C);
    }

    #[test]
    fn bytes_round_trip() {
        let bytes = A.as_bytes();
        assert_limbs_eq(&Scalar52::from_bytes(&bytes), &A);
    }
}
