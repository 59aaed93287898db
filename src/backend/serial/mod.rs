// -*- mode: rust; -*-
//
// This file is part of curve25519-engine.
// See LICENSE for licensing information.

//! Portable arithmetic: limb types under `u64`, the Edwards point models
//! in `curve_models`, and the multiplication loops in `scalar_mul`.

use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(target_pointer_width = "64")] {
        pub mod u64;
    }
}

pub mod curve_models;
pub mod scalar_mul;
