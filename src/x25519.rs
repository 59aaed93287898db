// -*- mode: rust; -*-
//
// This file is part of curve25519-engine.
// See LICENSE for licensing information.

//! X25519 key agreement ([RFC 7748]) on top of the Montgomery ladder.
//!
//! [RFC 7748]: https://tools.ietf.org/html/rfc7748
//!
//! ```
//! use curve25519_engine::x25519::{PublicKey, StaticSecret};
//!
//! let alice_secret = StaticSecret::from([1u8; 32]);
//! let bob_secret = StaticSecret::from([2u8; 32]);
//!
//! let alice_public = PublicKey::from(&alice_secret);
//! let bob_public = PublicKey::from(&bob_secret);
//!
//! let alice_shared = alice_secret.diffie_hellman(&bob_public);
//! let bob_shared = bob_secret.diffie_hellman(&alice_public);
//! assert_eq!(alice_shared.as_bytes(), bob_shared.as_bytes());
//! assert!(alice_shared.was_contributory());
//! ```

#[cfg(feature = "rand_core")]
use rand_core::CryptoRngCore;

#[cfg(feature = "zeroize")]
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::ed25519::{SigningKey, VerifyingKey};
use crate::edwards::EdwardsPoint;
use crate::errors::CurveError;
use crate::montgomery::MontgomeryPoint;
use crate::traits::IsIdentity;

/// Byte accessors for the newtypes around a `MontgomeryPoint`.
macro_rules! u_coordinate_bytes {
    ($name:ident) => {
        impl $name {
            /// The encoded u-coordinate.
            #[inline]
            pub fn to_bytes(&self) -> [u8; 32] {
                self.0.to_bytes()
            }

            /// Borrow the encoded u-coordinate.
            #[inline]
            pub fn as_bytes(&self) -> &[u8; 32] {
                self.0.as_bytes()
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                self.as_bytes()
            }
        }
    };
}

/// An X25519 public key: the u-coordinate of a point, as 32 bytes.
///
/// Any 32-byte string is accepted.  Public keys are not wiped on drop.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub struct PublicKey(pub(crate) MontgomeryPoint);

impl From<[u8; 32]> for PublicKey {
    /// Wrap raw u-coordinate bytes.
    fn from(bytes: [u8; 32]) -> PublicKey {
        PublicKey(MontgomeryPoint(bytes))
    }
}

impl From<&VerifyingKey> for PublicKey {
    /// The Montgomery form of an Ed25519 public key.
    fn from(key: &VerifyingKey) -> PublicKey {
        PublicKey(key.to_montgomery())
    }
}

u_coordinate_bytes!(PublicKey);

#[cfg(feature = "zeroize")]
impl Zeroize for PublicKey {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

/// A long-lived X25519 secret, reusable across exchanges.
///
/// The key is kept unclamped; clamping happens inside every
/// multiplication.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone)]
pub struct StaticSecret([u8; 32]);

impl StaticSecret {
    /// Multiply the peer's public point by this secret.
    pub fn diffie_hellman(&self, their_public: &PublicKey) -> SharedSecret {
        SharedSecret(their_public.0.mul_clamped(self.0))
    }

    /// Draw 32 fresh bytes from `csprng`.
    #[cfg(feature = "rand_core")]
    pub fn random_from_rng<R: CryptoRngCore + ?Sized>(csprng: &mut R) -> Self {
        let mut bytes = [0u8; 32];
        csprng.fill_bytes(&mut bytes);
        StaticSecret(bytes)
    }

    /// The unclamped secret bytes.
    #[inline]
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Borrow the unclamped secret bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl From<[u8; 32]> for StaticSecret {
    fn from(bytes: [u8; 32]) -> StaticSecret {
        StaticSecret(bytes)
    }
}

impl From<&SigningKey> for StaticSecret {
    /// The X25519 secret key sharing its public point with an Ed25519 key.
    fn from(key: &SigningKey) -> StaticSecret {
        StaticSecret(key.to_x25519())
    }
}

impl<'a> From<&'a StaticSecret> for PublicKey {
    /// `clamp(k) * B`, computed on the Edwards side through the basepoint table.
    fn from(secret: &'a StaticSecret) -> PublicKey {
        PublicKey(EdwardsPoint::mul_base_clamped(secret.0).to_montgomery())
    }
}

impl AsRef<[u8]> for StaticSecret {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Drop for StaticSecret {
    fn drop(&mut self) {
        #[cfg(feature = "zeroize")]
        self.0.zeroize();
    }
}

#[cfg(feature = "zeroize")]
impl ZeroizeOnDrop for StaticSecret {}

/// Output of an exchange.  Wiped on drop when `zeroize` is enabled.
pub struct SharedSecret(pub(crate) MontgomeryPoint);

u_coordinate_bytes!(SharedSecret);

impl SharedSecret {
    /// `false` when the output is all zero, i.e. the peer sent a point of
    /// small order and the result does not depend on our secret.
    ///
    /// The comparison runs in constant time.
    #[must_use]
    pub fn was_contributory(&self) -> bool {
        !self.0.is_identity()
    }
}

impl Drop for SharedSecret {
    fn drop(&mut self) {
        #[cfg(feature = "zeroize")]
        self.0.zeroize();
    }
}

#[cfg(feature = "zeroize")]
impl ZeroizeOnDrop for SharedSecret {}

/// `X25519(k, u)`: clamp `k`, decode `u` with its top bit masked, run the
/// ladder and encode the result.
///
/// # Example
///
/// ```
/// use curve25519_engine::x25519::{x25519, X25519_BASEPOINT_BYTES};
///
/// let alice_secret = [0x11u8; 32];
/// let bob_secret = [0x22u8; 32];
///
/// let alice_public = x25519(alice_secret, X25519_BASEPOINT_BYTES);
/// let bob_public = x25519(bob_secret, X25519_BASEPOINT_BYTES);
///
/// assert_eq!(x25519(alice_secret, bob_public), x25519(bob_secret, alice_public));
/// ```
pub fn x25519(k: [u8; 32], u: [u8; 32]) -> [u8; 32] {
    MontgomeryPoint(u).mul_clamped(k).to_bytes()
}

/// Like [`x25519`], but reject the all-zero output.
///
/// # Errors
///
/// Returns `CurveError::LowOrderPoint` if `u` has small order, which
/// forces the output to zero regardless of `k`.
pub fn x25519_checked(k: [u8; 32], u: [u8; 32]) -> Result<[u8; 32], CurveError> {
    let shared = SharedSecret(MontgomeryPoint(u).mul_clamped(k));
    if shared.was_contributory() {
        Ok(shared.to_bytes())
    } else {
        Err(CurveError::LowOrderPoint)
    }
}

/// Derive an X25519 shared secret from an Ed25519 key pair of ours and an
/// Ed25519 public key of theirs.
///
/// Both keys are mapped to their Montgomery forms first, so the result
/// equals the X25519 exchange between the converted keys.
pub fn shared_key_from_ed25519(ours: &SigningKey, theirs: &VerifyingKey) -> SharedSecret {
    StaticSecret::from(ours).diffie_hellman(&PublicKey::from(theirs))
}

/// `u = 9`, encoded.
pub const X25519_BASEPOINT_BYTES: [u8; 32] = [
    9, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

#[cfg(test)]
mod test {
    use super::*;
    use crate::constants;

    #[test]
    fn basepoint_bytes_match_constant() {
        assert_eq!(X25519_BASEPOINT_BYTES, constants::X25519_BASEPOINT.to_bytes());
    }

    #[test]
    fn public_key_is_basepoint_multiple() {
        let secret = StaticSecret::from([0x42u8; 32]);
        let public = PublicKey::from(&secret);
        assert_eq!(
            public.to_bytes(),
            x25519(secret.to_bytes(), X25519_BASEPOINT_BYTES)
        );
    }

    #[test]
    fn zero_public_key_is_not_contributory() {
        let secret = StaticSecret::from([0x42u8; 32]);
        let shared = secret.diffie_hellman(&PublicKey::from([0u8; 32]));
        assert!(!shared.was_contributory());
        assert_eq!(shared.to_bytes(), [0u8; 32]);

        assert_eq!(
            x25519_checked(secret.to_bytes(), [0u8; 32]),
            Err(CurveError::LowOrderPoint)
        );
    }

    #[test]
    fn small_order_points_are_rejected_by_checked_exchange() {
        // u = 1 has order 4.
        let mut one = [0u8; 32];
        one[0] = 1;
        assert_eq!(x25519_checked([0x55u8; 32], one), Err(CurveError::LowOrderPoint));

        for torsion_point in &constants::EIGHT_TORSION {
            let u = torsion_point.to_montgomery().to_bytes();
            assert_eq!(x25519_checked([0x55u8; 32], u), Err(CurveError::LowOrderPoint));
        }

        assert!(x25519_checked([0x55u8; 32], X25519_BASEPOINT_BYTES).is_ok());
    }

    #[test]
    fn ed25519_keys_agree_on_a_shared_secret() {
        let alice = SigningKey::from_bytes(&[3u8; 32]);
        let bob = SigningKey::from_bytes(&[4u8; 32]);

        let alice_shared = shared_key_from_ed25519(&alice, &bob.verifying_key());
        let bob_shared = shared_key_from_ed25519(&bob, &alice.verifying_key());
        assert_eq!(alice_shared.as_bytes(), bob_shared.as_bytes());
        assert!(alice_shared.was_contributory());

        // The converted public key is the X25519 public key of the converted secret.
        assert_eq!(
            PublicKey::from(&alice.verifying_key()),
            PublicKey::from(&StaticSecret::from(&alice))
        );
    }
}
