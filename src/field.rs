// -*- mode: rust; -*-
//
// This file is part of curve25519-engine.
// See LICENSE for licensing information.

//! Arithmetic in \\(\mathbb F_p\\), \\(p = 2\^{255} - 19\\).
//!
//! Limb-level operations (`add`, `mul`, `square`, `pow2k`, the byte
//! codec) come from `backend::serial::u64::field`.  Everything built on
//! top of them lives here: equality, the sign bit, inversion and the
//! combined square-root-of-a-ratio.

#![allow(unused_qualifications)]

use cfg_if::cfg_if;

use subtle::{Choice, ConditionallyNegatable, ConditionallySelectable, ConstantTimeEq};

use crate::backend;
use crate::constants;

#[cfg(feature = "alloc")]
use alloc::vec;

cfg_if! {
    if #[cfg(target_pointer_width = "64")] {
        /// An element of \\(\mathbb Z / (2\^{255} - 19)\\) in the
        /// backend's limb representation.
        pub(crate) type FieldElement = backend::serial::u64::field::FieldElement51;
    } else {
        compile_error!("curve25519-engine only provides a 64-bit serial backend");
    }
}

impl Eq for FieldElement {}

impl PartialEq for FieldElement {
    fn eq(&self, other: &FieldElement) -> bool {
        self.ct_eq(other).into()
    }
}

impl ConstantTimeEq for FieldElement {
    /// Limbs are not canonical, so both sides are reduced to their
    /// 32-byte encodings and those are compared.
    fn ct_eq(&self, other: &FieldElement) -> Choice {
        self.as_bytes().ct_eq(&other.as_bytes())
    }
}

impl FieldElement {
    /// Low bit of the canonical encoding.  Odd elements count as negative.
    pub(crate) fn is_negative(&self) -> Choice {
        Choice::from(self.as_bytes()[0] & 1)
    }

    pub(crate) fn is_zero(&self) -> Choice {
        self.as_bytes().ct_eq(&[0u8; 32])
    }

    /// Shared prefix of the `invert` and `pow_p58` addition chains.
    ///
    /// Returns `(x^(2^250 - 1), x^11)`.
    #[rustfmt::skip]
    pub(crate) fn pow22501(&self) -> (FieldElement, FieldElement) {
        // Right column: set bits of the exponent reached so far.
        let x2       = self.square();               // 1
        let x9       = self * &x2.pow2k(2);         // 3,0
        let x11      = &x2 * &x9;                   // 3,1,0
        let x_5_0    = &x9 * &x11.square();         // 4..0
        let x_10_0   = &x_5_0.pow2k(5) * &x_5_0;    // 9..0
        let x_20_0   = &x_10_0.pow2k(10) * &x_10_0; // 19..0
        let x_40_0   = &x_20_0.pow2k(20) * &x_20_0; // 39..0
        let x_50_0   = &x_40_0.pow2k(10) * &x_10_0; // 49..0
        let x_100_0  = &x_50_0.pow2k(50) * &x_50_0; // 99..0
        let x_200_0  = &x_100_0.pow2k(100) * &x_100_0; // 199..0
        let x_250_0  = &x_200_0.pow2k(50) * &x_50_0;   // 249..0

        (x_250_0, x11)
    }

    /// Invert every element of `inputs` in place, with one field
    /// inversion for the whole slice.
    ///
    /// Zero entries stay zero, as with `invert`.
    #[cfg(feature = "alloc")]
    pub(crate) fn batch_invert(inputs: &mut [FieldElement]) {
        // prefix[i] holds the product of the nonzero inputs before i.
        let mut prefix = vec![FieldElement::ONE; inputs.len()];
        let mut acc = FieldElement::ONE;
        for (x, slot) in inputs.iter().zip(prefix.iter_mut()) {
            *slot = acc;
            acc.conditional_assign(&(&acc * x), !x.is_zero());
        }

        // Never zero: only nonzero factors were folded in.
        let mut acc_inv = acc.invert();

        for (x, before) in inputs.iter_mut().rev().zip(prefix.into_iter().rev()) {
            let nonzero = !x.is_zero();
            let next = &acc_inv * x;
            x.conditional_assign(&(&acc_inv * &before), nonzero);
            acc_inv.conditional_assign(&next, nonzero);
        }
    }

    /// `x^(p-2)`, which is `1/x` for nonzero `x` and zero for zero.
    #[rustfmt::skip]
    pub(crate) fn invert(&self) -> FieldElement {
        // p - 2 = 2^255 - 21: bits 254..5, 3, 1, 0.
        let (x_250_0, x11) = self.pow22501();
        &x_250_0.pow2k(5) * &x11
    }

    /// `x^((p-5)/8) = x^(2^252 - 3)`.
    #[rustfmt::skip]
    pub(crate) fn pow_p58(&self) -> FieldElement {
        // Bits 251..2, 0.
        let (x_250_0, _) = self.pow22501();
        self * &x_250_0.pow2k(2)
    }

    /// Constant-time `sqrt(u/v)`, falling back to `sqrt(i*u/v)` when
    /// `u/v` is not a square.  The root returned is always nonnegative.
    ///
    /// | input                  | flag | root            |
    /// |------------------------|------|-----------------|
    /// | `u = 0`                | 1    | 0               |
    /// | `v = 0`, `u != 0`      | 0    | 0               |
    /// | `u/v` square           | 1    | `+sqrt(u/v)`    |
    /// | `u/v` nonsquare        | 0    | `+sqrt(i*u/v)`  |
    pub(crate) fn sqrt_ratio_i(u: &FieldElement, v: &FieldElement) -> (Choice, FieldElement) {
        // Candidate r = u v^3 (u v^7)^((p-5)/8), which satisfies
        // v r^2 = ±u or ±i u.  One inversion-free exponentiation covers
        // the division, the root and the residuosity test.
        let v3 = &v.square() * v;
        let v7 = &v3.square() * v;
        let mut r = &(u * &v3) * &(u * &v7).pow_p58();
        let vr2 = v * &r.square();

        let minus_u = -u;
        let exact = vr2.ct_eq(u);
        let negated = vr2.ct_eq(&minus_u);
        let negated_i = vr2.ct_eq(&(&minus_u * &constants::SQRT_M1));

        let r_times_i = &constants::SQRT_M1 * &r;
        r.conditional_assign(&r_times_i, negated | negated_i);

        let odd = r.is_negative();
        r.conditional_negate(odd);

        (exact | negated, r)
    }

    /// `sqrt_ratio_i(1, self)`.
    pub(crate) fn invsqrt(&self) -> (Choice, FieldElement) {
        FieldElement::sqrt_ratio_i(&FieldElement::ONE, self)
    }
}
