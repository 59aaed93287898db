// -*- mode: rust; -*-
//
// This file is part of curve25519-engine.
// See LICENSE for licensing information.

//! Errors which may occur when decoding points, scalars, keys and
//! signatures from their wire formats.

use core::fmt;
use core::fmt::Display;

/// Decoding and key-exchange failures.
///
/// Arithmetic itself never fails: inverting zero yields zero, and
/// precondition violations (such as `mul_by_pow_2(0)`) panic.  The
/// variants here are the failures caused by *untrusted input*.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum CurveError {
    /// The y-coordinate of a `CompressedEdwardsY` does not correspond
    /// to a point on the curve: \\( (y\^2 - 1)/(dy\^2 + 1) \\) is not a
    /// square.
    InvalidYCoordinate,
    /// A scalar encoding was not the canonical representative, i.e. it
    /// was not less than \\( \ell \\).
    NonCanonicalScalar,
    /// A point encoding was rejected by policy because it is not
    /// canonical.
    NonCanonicalPoint,
    /// A point has small order where a large-order point is required:
    /// an X25519 exchange produced the all-zero output, or a signature
    /// commitment was rejected by policy.
    LowOrderPoint,
    /// The public half of a keypair encoding does not belong to its
    /// secret half.
    MismatchedKeypair,
    /// An error in the length of bytes handed to a constructor.
    ///
    /// `name` is the type which is returning the error, and `length`
    /// is the number of bytes its constructor expects.
    BytesLength {
        /// Name of the type being constructed.
        name: &'static str,
        /// Number of bytes the constructor expects.
        length: usize,
    },
}

impl Display for CurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            CurveError::InvalidYCoordinate => {
                write!(f, "Cannot decompress Edwards point: invalid y-coordinate")
            }
            CurveError::NonCanonicalScalar => write!(f, "Scalar is not canonically encoded"),
            CurveError::NonCanonicalPoint => write!(f, "Point is not canonically encoded"),
            CurveError::LowOrderPoint => write!(f, "Point has small order"),
            CurveError::MismatchedKeypair => {
                write!(f, "Public key does not match the secret key")
            }
            CurveError::BytesLength { name: n, length: l } => {
                write!(f, "{} must be {} bytes in length", n, l)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CurveError {}

#[cfg(test)]
mod test {
    use super::*;

    #[cfg(feature = "std")]
    #[test]
    fn display_messages() {
        use std::string::ToString;

        assert_eq!(
            CurveError::BytesLength {
                name: "Signature",
                length: 64
            }
            .to_string(),
            "Signature must be 64 bytes in length"
        );
        assert!(CurveError::InvalidYCoordinate
            .to_string()
            .contains("invalid y-coordinate"));
    }
}
