// -*- mode: rust; -*-
//
// This file is part of curve25519-engine.
// See LICENSE for licensing information.

//! Internal macros.
//!
//! The arithmetic is written once, on borrowed operands
//! (`&'a T op &'b U`).  These macros derive the owned and mixed
//! variants, plus the owned right-hand side of the `*Assign` traits.

/// Forward `T op &U`, `&T op U` and `T op U` to `&T op &U`.
macro_rules! define_binop_variants {
    ($op:ident, $method:ident, $lhs:ty, $rhs:ty, $out:ty) => {
        impl<'b> $op<&'b $rhs> for $lhs {
            type Output = $out;
            fn $method(self, rhs: &'b $rhs) -> $out {
                <&$lhs as $op<&$rhs>>::$method(&self, rhs)
            }
        }

        impl<'a> $op<$rhs> for &'a $lhs {
            type Output = $out;
            fn $method(self, rhs: $rhs) -> $out {
                <&$lhs as $op<&$rhs>>::$method(self, &rhs)
            }
        }

        impl $op<$rhs> for $lhs {
            type Output = $out;
            fn $method(self, rhs: $rhs) -> $out {
                <&$lhs as $op<&$rhs>>::$method(&self, &rhs)
            }
        }
    };
}

/// Forward `T op= U` to `T op= &U`.
macro_rules! define_assign_variant {
    ($op:ident, $method:ident, $lhs:ty, $rhs:ty) => {
        impl $op<$rhs> for $lhs {
            fn $method(&mut self, rhs: $rhs) {
                <$lhs as $op<&$rhs>>::$method(self, &rhs)
            }
        }
    };
}

macro_rules! define_add_variants {
    (LHS = $lhs:ty, RHS = $rhs:ty, Output = $out:ty) => {
        define_binop_variants!(Add, add, $lhs, $rhs, $out);
    };
}

macro_rules! define_add_assign_variants {
    (LHS = $lhs:ty, RHS = $rhs:ty) => {
        define_assign_variant!(AddAssign, add_assign, $lhs, $rhs);
    };
}

macro_rules! define_sub_variants {
    (LHS = $lhs:ty, RHS = $rhs:ty, Output = $out:ty) => {
        define_binop_variants!(Sub, sub, $lhs, $rhs, $out);
    };
}

macro_rules! define_sub_assign_variants {
    (LHS = $lhs:ty, RHS = $rhs:ty) => {
        define_assign_variant!(SubAssign, sub_assign, $lhs, $rhs);
    };
}

macro_rules! define_mul_variants {
    (LHS = $lhs:ty, RHS = $rhs:ty, Output = $out:ty) => {
        define_binop_variants!(Mul, mul, $lhs, $rhs, $out);
    };
}

macro_rules! define_mul_assign_variants {
    (LHS = $lhs:ty, RHS = $rhs:ty) => {
        define_assign_variant!(MulAssign, mul_assign, $lhs, $rhs);
    };
}
