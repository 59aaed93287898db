// -*- mode: rust; -*-
//
// This file is part of curve25519-engine.
// See LICENSE for licensing information.

//! Arithmetic mod \\(p = 2\^{255} - 19\\) on five 51-bit limbs.
//!
//! Limbs may grow to \\(2\^{54}\\) between reductions.  Products are
//! accumulated in `u128`, and the wrap-around \\(2\^{255} \equiv 19\\)
//! is applied by pre-multiplying the high-index operand limb by 19.

use core::fmt::Debug;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use subtle::{Choice, ConditionallySelectable};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

const LOW_51_BIT_MASK: u64 = (1u64 << 51) - 1;

/// \\(16p\\) split across the limbs.  Adding it before a subtraction
/// keeps every limb nonnegative for subtrahends with limbs below
/// \\(2\^{54}\\).
const SIXTEEN_P: [u64; 5] = [
    16 * (LOW_51_BIT_MASK - 18),
    16 * LOW_51_BIT_MASK,
    16 * LOW_51_BIT_MASK,
    16 * LOW_51_BIT_MASK,
    16 * LOW_51_BIT_MASK,
];

/// \\(\sum\_i x\_i 2\^{51 i}\\), an element of
/// \\(\mathbb Z / (2\^{255} - 19)\\).
///
/// Other modules go through the `FieldElement` alias.
#[derive(Copy, Clone)]
pub struct FieldElement51(pub(crate) [u64; 5]);

impl Debug for FieldElement51 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("FieldElement51").field(&self.0).finish()
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for FieldElement51 {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

#[inline(always)]
fn m(x: u64, y: u64) -> u128 {
    (x as u128) * (y as u128)
}

/// Carry five 128-bit column sums down to limbs below \\(2\^{51}\\),
/// except limb 1, which may exceed it by a small carry.
///
/// Every column must be below \\(2\^{115}\\) so that each carry fits in
/// a `u64`.
#[inline(always)]
fn carry_columns(c: [u128; 5]) -> FieldElement51 {
    let mut out = [0u64; 5];
    let mut carry = 0u64;
    for (limb, column) in out.iter_mut().zip(c) {
        let v = column + carry as u128;
        *limb = (v as u64) & LOW_51_BIT_MASK;
        carry = (v >> 51) as u64;
    }

    // For limbs below 2^54, carry < 2^59.33 and out[0] + 19 * carry < 2^63.58.
    out[0] += carry * 19;
    out[1] += out[0] >> 51;
    out[0] &= LOW_51_BIT_MASK;

    FieldElement51(out)
}

impl<'b> AddAssign<&'b FieldElement51> for FieldElement51 {
    fn add_assign(&mut self, rhs: &'b FieldElement51) {
        for (x, y) in self.0.iter_mut().zip(rhs.0) {
            *x += y;
        }
    }
}

impl<'a, 'b> Add<&'b FieldElement51> for &'a FieldElement51 {
    type Output = FieldElement51;
    fn add(self, rhs: &'b FieldElement51) -> FieldElement51 {
        let mut sum = *self;
        sum += rhs;
        sum
    }
}

impl<'b> SubAssign<&'b FieldElement51> for FieldElement51 {
    fn sub_assign(&mut self, rhs: &'b FieldElement51) {
        *self = &*self - rhs;
    }
}

impl<'a, 'b> Sub<&'b FieldElement51> for &'a FieldElement51 {
    type Output = FieldElement51;
    fn sub(self, rhs: &'b FieldElement51) -> FieldElement51 {
        let mut limbs = [0u64; 5];
        for i in 0..5 {
            limbs[i] = (self.0[i] + SIXTEEN_P[i]) - rhs.0[i];
        }
        FieldElement51::reduce(limbs)
    }
}

impl<'b> MulAssign<&'b FieldElement51> for FieldElement51 {
    fn mul_assign(&mut self, rhs: &'b FieldElement51) {
        *self = &*self * rhs;
    }
}

impl<'a, 'b> Mul<&'b FieldElement51> for &'a FieldElement51 {
    type Output = FieldElement51;

    fn mul(self, rhs: &'b FieldElement51) -> FieldElement51 {
        let a = &self.0;
        let b = &rhs.0;
        debug_assert!(a.iter().chain(b.iter()).all(|&x| x < (1 << 54)));

        // b[j] * 19 < 2^59 for limbs below 2^54.
        let b_19 = b.map(|x| x * 19);

        let mut c = [0u128; 5];
        for i in 0..5 {
            for j in 0..5 {
                if i + j < 5 {
                    c[i + j] += m(a[i], b[j]);
                } else {
                    c[i + j - 5] += m(a[i], b_19[j]);
                }
            }
        }

        carry_columns(c)
    }
}

impl<'a> Neg for &'a FieldElement51 {
    type Output = FieldElement51;
    fn neg(self) -> FieldElement51 {
        let mut output = *self;
        output.negate();
        output
    }
}

impl ConditionallySelectable for FieldElement51 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut limbs = [0u64; 5];
        for (out, (x, y)) in limbs.iter_mut().zip(a.0.iter().zip(b.0.iter())) {
            *out = u64::conditional_select(x, y, choice);
        }
        FieldElement51(limbs)
    }

    fn conditional_swap(a: &mut Self, b: &mut Self, choice: Choice) {
        for (x, y) in a.0.iter_mut().zip(b.0.iter_mut()) {
            u64::conditional_swap(x, y, choice);
        }
    }
}

impl FieldElement51 {
    pub(crate) const fn from_limbs(limbs: [u64; 5]) -> FieldElement51 {
        FieldElement51(limbs)
    }

    /// Zero.
    pub const ZERO: FieldElement51 = FieldElement51::from_limbs([0, 0, 0, 0, 0]);
    /// One.
    pub const ONE: FieldElement51 = FieldElement51::from_limbs([1, 0, 0, 0, 0]);
    /// \\(p - 1\\).
    pub const MINUS_ONE: FieldElement51 = FieldElement51::from_limbs([
        LOW_51_BIT_MASK - 19,
        LOW_51_BIT_MASK,
        LOW_51_BIT_MASK,
        LOW_51_BIT_MASK,
        LOW_51_BIT_MASK,
    ]);

    /// Replace `self` with `-self`.
    pub fn negate(&mut self) {
        let mut limbs = [0u64; 5];
        for i in 0..5 {
            limbs[i] = SIXTEEN_P[i] - self.0[i];
        }
        *self = FieldElement51::reduce(limbs);
    }

    /// Weak reduction: bring arbitrary 64-bit limbs under
    /// \\(2\^{51} + 19 \cdot 2\^{13}\\).
    #[inline(always)]
    fn reduce(limbs: [u64; 5]) -> FieldElement51 {
        // Carries are taken from the inputs, not propagated, so all five
        // are independent.
        let carries = limbs.map(|x| x >> 51);
        let mut out = limbs.map(|x| x & LOW_51_BIT_MASK);

        out[0] += carries[4] * 19;
        for i in 1..5 {
            out[i] += carries[i - 1];
        }

        FieldElement51(out)
    }

    /// Decode the low 255 bits of a little-endian integer.
    ///
    /// Bit 255 is dropped and no range check is made, so \\(p + 1\\)
    /// decodes to 1.  Callers that need canonical input re-encode and
    /// compare.
    pub fn from_bytes(bytes: &[u8; 32]) -> FieldElement51 {
        let mut words = [0u64; 4];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(8)) {
            let mut le = [0u8; 8];
            le.copy_from_slice(chunk);
            *word = u64::from_le_bytes(le);
        }

        let mut limbs = [0u64; 5];
        for (i, limb) in limbs.iter_mut().enumerate() {
            let at = 51 * i;
            let (idx, off) = (at / 64, at % 64);
            let mut bits = words[idx] >> off;
            if off > 13 && idx < 3 {
                bits |= words[idx + 1] << (64 - off);
            }
            *limb = bits & LOW_51_BIT_MASK;
        }

        FieldElement51(limbs)
    }

    /// Canonical 32-byte encoding: the representative below \\(p\\),
    /// little-endian.
    pub fn as_bytes(&self) -> [u8; 32] {
        let mut limbs = FieldElement51::reduce(self.0).0;

        // Now h < 2p.  The carry out of h + 19 is 1 exactly when h >= p.
        let mut q = (limbs[0] + 19) >> 51;
        for limb in &limbs[1..] {
            q = (limb + q) >> 51;
        }

        // h - qp = h + 19q - 2^255 q; the 2^255 q is the carry dropped
        // off the top limb.
        limbs[0] += 19 * q;
        for i in 0..4 {
            limbs[i + 1] += limbs[i] >> 51;
            limbs[i] &= LOW_51_BIT_MASK;
        }
        limbs[4] &= LOW_51_BIT_MASK;

        let mut s = [0u8; 32];
        let mut acc: u128 = 0;
        let mut acc_bits: i32 = 0;
        let mut limb_iter = limbs.iter();
        for byte in s.iter_mut() {
            if acc_bits < 8 {
                if let Some(&limb) = limb_iter.next() {
                    acc |= (limb as u128) << acc_bits;
                    acc_bits += 51;
                }
            }
            *byte = acc as u8;
            acc >>= 8;
            acc_bits -= 8;
        }

        debug_assert!((s[31] & 0b1000_0000u8) == 0u8);

        s
    }

    /// \\(x\^{2\^k}\\) for `k > 0`.
    pub fn pow2k(&self, k: u32) -> FieldElement51 {
        assert!(k > 0);

        let mut a: [u64; 5] = self.0;
        for _ in 0..k {
            debug_assert!(a.iter().all(|&x| x < (1 << 54)));

            // Each cross term a[i] a[j], i < j, occurs twice.
            let mut c = [0u128; 5];
            for i in 0..5 {
                for j in i..5 {
                    let factor = if i == j { 1 } else { 2 };
                    let term = if i + j < 5 {
                        m(a[i], a[j])
                    } else {
                        m(a[i], a[j] * 19)
                    };
                    c[(i + j) % 5] += factor * term;
                }
            }

            a = carry_columns(c).0;
        }

        FieldElement51(a)
    }

    /// \\(x\^2\\).
    pub fn square(&self) -> FieldElement51 {
        self.pow2k(1)
    }

    /// \\(2x\^2\\).
    pub fn square2(&self) -> FieldElement51 {
        let mut square = self.pow2k(1);
        for limb in square.0.iter_mut() {
            *limb *= 2;
        }
        square
    }
}
