// -*- mode: rust; -*-
//
// This file is part of curve25519-engine.
// See LICENSE for licensing information.

//! Ed25519 signatures, as specified in [RFC 8032][rfc8032].
//!
//! This is a thin layer over the group arithmetic: key expansion hashes the
//! seed with SHA-512, signing is two fixed-base multiplications, and
//! verification is one variable-time double-base multiplication.
//!
//! Which encodings a verifier accepts is a policy decision, captured by
//! [`VerifyOptions`].  The presets reproduce the behaviour of common
//! deployments:
//!
//! | preset | small-order A | small-order R | non-canonical A | non-canonical R |
//! |---|---|---|---|---|
//! | [`VerifyOptions::DEFAULT`] | reject | reject | reject | accept |
//! | [`VerifyOptions::FIPS_186_5`] | reject | reject | accept | accept |
//! | [`VerifyOptions::ZIP_215`] | accept | accept | accept | accept |
//!
//! Verification is cofactorless: the recomputed \\(R' = [S]B - [k]A\\) is
//! compressed and compared against the encoding of \\(R\\) in the signature.
//!
//! ```
//! use curve25519_engine::ed25519::{SigningKey, VerifyOptions};
//!
//! let signing_key = SigningKey::from_bytes(&[7u8; 32]);
//! let signature = signing_key.sign(b"attack at dawn");
//!
//! let verifying_key = signing_key.verifying_key();
//! assert!(verifying_key.verify(b"attack at dawn", &signature));
//! assert!(!verifying_key.verify(b"attack at dusk", &signature));
//! assert!(verifying_key.verify_with_options(b"attack at dawn", &signature, &VerifyOptions::ZIP_215));
//! ```
//!
//! [rfc8032]: https://tools.ietf.org/html/rfc8032

#![allow(non_snake_case)]

use core::fmt::Debug;
use core::hash::{Hash, Hasher};

#[cfg(feature = "rand_core")]
use rand_core::CryptoRngCore;

use sha2::{Digest, Sha512};

use subtle::{Choice, ConstantTimeEq};

#[cfg(feature = "zeroize")]
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::edwards::{CompressedEdwardsY, EdwardsPoint};
use crate::errors::CurveError;
use crate::montgomery::MontgomeryPoint;
use crate::scalar::{clamp_integer, Scalar};

/// The length of an Ed25519 secret key seed, in bytes.
pub const SECRET_KEY_LENGTH: usize = 32;

/// The length of an Ed25519 public key, in bytes.
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// The length of an Ed25519 keypair (seed followed by public key), in bytes.
pub const KEYPAIR_LENGTH: usize = SECRET_KEY_LENGTH + PUBLIC_KEY_LENGTH;

/// The length of an Ed25519 signature, in bytes.
pub const SIGNATURE_LENGTH: usize = 64;

/// An Ed25519 secret key seed, as defined in RFC 8032.
pub type SecretKey = [u8; SECRET_KEY_LENGTH];

// ------------------------------------------------------------------------
// Signatures
// ------------------------------------------------------------------------

/// An Ed25519 signature.
///
/// Both halves are kept as raw bytes: whether \\(R\\) decompresses and
/// whether \\(S\\) is reduced are only decided when verifying, under a
/// [`VerifyOptions`] policy.
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Signature {
    R_bytes: [u8; 32],
    s_bytes: [u8; 32],
}

impl Signature {
    /// Parse a signature from its 64-byte encoding \\(R \parallel S\\).
    pub fn from_bytes(bytes: &[u8; SIGNATURE_LENGTH]) -> Signature {
        let mut R_bytes = [0u8; 32];
        let mut s_bytes = [0u8; 32];
        R_bytes.copy_from_slice(&bytes[..32]);
        s_bytes.copy_from_slice(&bytes[32..]);
        Signature { R_bytes, s_bytes }
    }

    /// Encode this signature as \\(R \parallel S\\).
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LENGTH] {
        let mut bytes = [0u8; SIGNATURE_LENGTH];
        bytes[..32].copy_from_slice(&self.R_bytes);
        bytes[32..].copy_from_slice(&self.s_bytes);
        bytes
    }

    /// The encoded commitment \\(R\\).
    pub const fn r_bytes(&self) -> &[u8; 32] {
        &self.R_bytes
    }

    /// The encoded response \\(S\\).
    pub const fn s_bytes(&self) -> &[u8; 32] {
        &self.s_bytes
    }
}

impl From<[u8; SIGNATURE_LENGTH]> for Signature {
    fn from(bytes: [u8; SIGNATURE_LENGTH]) -> Signature {
        Signature::from_bytes(&bytes)
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = CurveError;

    fn try_from(bytes: &[u8]) -> Result<Signature, CurveError> {
        let bytes: &[u8; SIGNATURE_LENGTH] =
            bytes.try_into().map_err(|_| CurveError::BytesLength {
                name: "Signature",
                length: SIGNATURE_LENGTH,
            })?;
        Ok(Signature::from_bytes(bytes))
    }
}

impl Debug for Signature {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Signature {{ R: {:?}, s: {:?} }}",
            &self.R_bytes, &self.s_bytes
        )
    }
}

// ------------------------------------------------------------------------
// Verification policy
// ------------------------------------------------------------------------

/// Which signature and key encodings a verifier accepts.
///
/// These flags only relax or tighten the checks on the *encodings*; the
/// verification equation itself is the same for every policy.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct VerifyOptions {
    /// Accept public keys \\(A\\) of small order.
    ///
    /// Such keys make the scheme no longer strongly binding: a single
    /// signature then verifies for many messages.
    pub allow_small_order_a: bool,
    /// Accept commitments \\(R\\) of small order.
    pub allow_small_order_r: bool,
    /// Accept public keys whose encoding is not canonical.
    pub allow_non_canonical_a: bool,
    /// Accept commitments whose encoding is not canonical.
    pub allow_non_canonical_r: bool,
}

impl VerifyOptions {
    /// Reject small-order keys and commitments and non-canonical keys;
    /// accept non-canonical commitments.
    pub const DEFAULT: VerifyOptions = VerifyOptions {
        allow_small_order_a: false,
        allow_small_order_r: false,
        allow_non_canonical_a: false,
        allow_non_canonical_r: true,
    };

    /// Behaviour compatible with FIPS 186-5, which also matches RFC 8032.
    pub const FIPS_186_5: VerifyOptions = VerifyOptions {
        allow_small_order_a: false,
        allow_small_order_r: false,
        allow_non_canonical_a: true,
        allow_non_canonical_r: true,
    };

    /// Behaviour compatible with [ZIP-215](https://zips.z.cash/zip-0215),
    /// which accepts every encoding that decompresses.
    pub const ZIP_215: VerifyOptions = VerifyOptions {
        allow_small_order_a: true,
        allow_small_order_r: true,
        allow_non_canonical_a: true,
        allow_non_canonical_r: true,
    };

    /// Whether \\(R\\) has to be decompressed before verification.
    const fn needs_decompressed_r(&self) -> bool {
        !self.allow_small_order_r
    }

    /// Check the public key against this policy.
    fn accepts_verifying_key(&self, key: &VerifyingKey) -> bool {
        if !self.allow_small_order_a && key.point.is_small_order() {
            return false;
        }
        if !self.allow_non_canonical_a && !key.compressed.is_canonical_vartime() {
            return false;
        }
        true
    }

    /// Check the signature against this policy and decode \\(S\\).
    fn unpack_signature(&self, signature: &Signature) -> Result<Scalar, CurveError> {
        if !Scalar::is_canonical_vartime(&signature.s_bytes) {
            return Err(CurveError::NonCanonicalScalar);
        }

        let R_compressed = CompressedEdwardsY(signature.R_bytes);
        if self.needs_decompressed_r() {
            let R = R_compressed.decompress()?;
            if !self.allow_small_order_r && R.is_small_order() {
                return Err(CurveError::LowOrderPoint);
            }
        }

        if !self.allow_non_canonical_r && !R_compressed.is_canonical_vartime() {
            return Err(CurveError::NonCanonicalPoint);
        }

        Option::from(Scalar::from_canonical_bytes(signature.s_bytes))
            .ok_or(CurveError::NonCanonicalScalar)
    }
}

impl Default for VerifyOptions {
    fn default() -> VerifyOptions {
        VerifyOptions::DEFAULT
    }
}

// ------------------------------------------------------------------------
// Verifying keys
// ------------------------------------------------------------------------

/// An Ed25519 public key.
///
/// The key remembers the exact bytes it was parsed from, so that the
/// challenge hash covers the encoding the signer used.
#[derive(Copy, Clone, Default, Eq)]
pub struct VerifyingKey {
    compressed: CompressedEdwardsY,
    point: EdwardsPoint,
}

impl VerifyingKey {
    /// Parse a public key.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidYCoordinate` if the bytes do not
    /// decompress.  Small-order and non-canonical keys are accepted here
    /// and judged by [`VerifyOptions`] at verification time; see
    /// [`VerifyingKey::is_weak`].
    pub fn from_bytes(bytes: &[u8; PUBLIC_KEY_LENGTH]) -> Result<VerifyingKey, CurveError> {
        let compressed = CompressedEdwardsY(*bytes);
        let point = compressed.decompress()?;
        Ok(VerifyingKey { compressed, point })
    }

    fn from_point(point: EdwardsPoint) -> VerifyingKey {
        VerifyingKey {
            compressed: point.compress(),
            point,
        }
    }

    /// View this public key as a byte array.
    pub const fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        self.compressed.as_bytes()
    }

    /// Convert this public key to a byte array.
    pub const fn to_bytes(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        self.compressed.to_bytes()
    }

    /// The decompressed point \\(A\\).
    pub fn to_edwards(&self) -> EdwardsPoint {
        self.point
    }

    /// The X25519 public key corresponding to this key, i.e. the
    /// Montgomery \\(u\\)-coordinate of \\(A\\).
    pub fn to_montgomery(&self) -> MontgomeryPoint {
        self.point.to_montgomery()
    }

    /// Whether this key has small order, in which case a signature made
    /// under it binds nothing.
    pub fn is_weak(&self) -> bool {
        self.point.is_small_order()
    }

    /// Verify a signature under [`VerifyOptions::DEFAULT`].
    pub fn verify(&self, message: &[u8], signature: &Signature) -> bool {
        self.verify_with_options(message, signature, &VerifyOptions::DEFAULT)
    }

    /// Verify a signature under the given policy.
    ///
    /// Every decoding failure is reported as `false`.
    pub fn verify_with_options(
        &self,
        message: &[u8],
        signature: &Signature,
        options: &VerifyOptions,
    ) -> bool {
        if !options.accepts_verifying_key(self) {
            return false;
        }
        let s = match options.unpack_signature(signature) {
            Ok(s) => s,
            Err(_) => return false,
        };

        let k = challenge_scalar(&signature.R_bytes, self.as_bytes(), message);
        let minus_A = -self.point;
        let expected_R = EdwardsPoint::vartime_double_scalar_mul_basepoint(&k, &minus_A, &s);

        expected_R
            .compress()
            .as_bytes()
            .ct_eq(&signature.R_bytes)
            .into()
    }
}

impl ConstantTimeEq for VerifyingKey {
    fn ct_eq(&self, other: &VerifyingKey) -> Choice {
        self.compressed.ct_eq(&other.compressed)
    }
}

impl PartialEq for VerifyingKey {
    fn eq(&self, other: &VerifyingKey) -> bool {
        self.ct_eq(other).into()
    }
}

impl Hash for VerifyingKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl Debug for VerifyingKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "VerifyingKey({:?})", self.compressed)
    }
}

impl TryFrom<&[u8]> for VerifyingKey {
    type Error = CurveError;

    fn try_from(bytes: &[u8]) -> Result<VerifyingKey, CurveError> {
        let bytes: &[u8; PUBLIC_KEY_LENGTH] =
            bytes.try_into().map_err(|_| CurveError::BytesLength {
                name: "VerifyingKey",
                length: PUBLIC_KEY_LENGTH,
            })?;
        VerifyingKey::from_bytes(bytes)
    }
}

// ------------------------------------------------------------------------
// Signing keys
// ------------------------------------------------------------------------

/// The SHA-512 expansion of a seed: the signing scalar and the nonce prefix.
struct ExpandedSecretKey {
    scalar: Scalar,
    hash_prefix: [u8; 32],
}

impl ExpandedSecretKey {
    /// Hash the seed, clamp the lower half and reduce it mod \\( \ell \\).
    fn from_seed(seed: &SecretKey) -> ExpandedSecretKey {
        #[allow(unused_mut)]
        let mut hash = Sha512::digest(seed);
        let mut lower = [0u8; 32];
        let mut upper = [0u8; 32];
        lower.copy_from_slice(&hash[..32]);
        upper.copy_from_slice(&hash[32..]);

        // The clamped integer is a multiple of the cofactor, so reducing it
        // does not change [a]B.
        let scalar = Scalar::from_bytes_mod_order(clamp_integer(lower));

        #[cfg(feature = "zeroize")]
        {
            hash.as_mut_slice().zeroize();
            lower.zeroize();
        }

        ExpandedSecretKey {
            scalar,
            hash_prefix: upper,
        }
    }

    fn sign(&self, message: &[u8], verifying_key: &VerifyingKey) -> Signature {
        let r = Scalar::from_hash(
            Sha512::new()
                .chain_update(self.hash_prefix)
                .chain_update(message),
        );
        let R = EdwardsPoint::mul_base(&r).compress();
        let k = challenge_scalar(R.as_bytes(), verifying_key.as_bytes(), message);
        let s = &(&k * &self.scalar) + &r;

        Signature {
            R_bytes: R.to_bytes(),
            s_bytes: s.to_bytes(),
        }
    }
}

#[cfg(feature = "zeroize")]
impl Drop for ExpandedSecretKey {
    fn drop(&mut self) {
        self.scalar.zeroize();
        self.hash_prefix.zeroize();
    }
}

/// The challenge \\( k = H(R \parallel A \parallel M) \bmod \ell \\).
fn challenge_scalar(R_bytes: &[u8; 32], A_bytes: &[u8; 32], message: &[u8]) -> Scalar {
    Scalar::from_hash(
        Sha512::new()
            .chain_update(R_bytes)
            .chain_update(A_bytes)
            .chain_update(message),
    )
}

/// An Ed25519 signing key: a 32-byte seed together with its public key.
#[derive(Clone)]
pub struct SigningKey {
    secret_key: SecretKey,
    verifying_key: VerifyingKey,
}

impl SigningKey {
    /// Construct a signing key from a 32-byte seed.
    pub fn from_bytes(secret_key: &SecretKey) -> SigningKey {
        let expanded = ExpandedSecretKey::from_seed(secret_key);
        let verifying_key = VerifyingKey::from_point(EdwardsPoint::mul_base(&expanded.scalar));
        SigningKey {
            secret_key: *secret_key,
            verifying_key,
        }
    }

    /// Construct a signing key from a seed followed by its public key.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidYCoordinate` if the public half does
    /// not decompress, and `CurveError::MismatchedKeypair` if it does not
    /// belong to the seed.
    pub fn from_keypair_bytes(bytes: &[u8; KEYPAIR_LENGTH]) -> Result<SigningKey, CurveError> {
        let mut seed = [0u8; SECRET_KEY_LENGTH];
        let mut public = [0u8; PUBLIC_KEY_LENGTH];
        seed.copy_from_slice(&bytes[..SECRET_KEY_LENGTH]);
        public.copy_from_slice(&bytes[SECRET_KEY_LENGTH..]);

        let signing_key = SigningKey::from_bytes(&seed);
        #[cfg(feature = "zeroize")]
        seed.zeroize();

        let verifying_key = VerifyingKey::from_bytes(&public)?;
        if signing_key.verifying_key != verifying_key {
            return Err(CurveError::MismatchedKeypair);
        }
        Ok(signing_key)
    }

    /// Generate a signing key from a fresh random seed.
    #[cfg(feature = "rand_core")]
    pub fn generate<R: CryptoRngCore + ?Sized>(csprng: &mut R) -> SigningKey {
        let mut secret = SecretKey::default();
        csprng.fill_bytes(&mut secret);
        let signing_key = SigningKey::from_bytes(&secret);
        #[cfg(feature = "zeroize")]
        secret.zeroize();
        signing_key
    }

    /// The 32-byte seed.
    pub const fn to_bytes(&self) -> SecretKey {
        self.secret_key
    }

    /// View the 32-byte seed.
    pub const fn as_bytes(&self) -> &SecretKey {
        &self.secret_key
    }

    /// The 64-byte keypair encoding: seed followed by public key.
    pub fn to_keypair_bytes(&self) -> [u8; KEYPAIR_LENGTH] {
        let mut bytes = [0u8; KEYPAIR_LENGTH];
        bytes[..SECRET_KEY_LENGTH].copy_from_slice(&self.secret_key);
        bytes[SECRET_KEY_LENGTH..].copy_from_slice(self.verifying_key.as_bytes());
        bytes
    }

    /// The public half of this key.
    pub fn verifying_key(&self) -> VerifyingKey {
        self.verifying_key
    }

    /// The signing scalar \\(a\\), reduced mod \\( \ell \\).
    pub fn to_scalar(&self) -> Scalar {
        ExpandedSecretKey::from_seed(&self.secret_key).scalar
    }

    /// The encoding of [`SigningKey::to_scalar`].
    pub fn to_scalar_bytes(&self) -> [u8; 32] {
        self.to_scalar().to_bytes()
    }

    /// The X25519 secret key with the same public point: the clamped
    /// lower half of SHA-512(seed).
    ///
    /// Its X25519 public key is [`VerifyingKey::to_montgomery`].
    pub fn to_x25519(&self) -> [u8; 32] {
        #[allow(unused_mut)]
        let mut hash = Sha512::digest(self.secret_key);
        let mut lower = [0u8; 32];
        lower.copy_from_slice(&hash[..32]);
        #[cfg(feature = "zeroize")]
        hash.as_mut_slice().zeroize();
        clamp_integer(lower)
    }

    /// Sign a message.
    pub fn sign(&self, message: &[u8]) -> Signature {
        ExpandedSecretKey::from_seed(&self.secret_key).sign(message, &self.verifying_key)
    }

    /// Verify a signature made by this key, under [`VerifyOptions::DEFAULT`].
    pub fn verify(&self, message: &[u8], signature: &Signature) -> bool {
        self.verifying_key.verify(message, signature)
    }
}

impl From<&SecretKey> for SigningKey {
    fn from(secret: &SecretKey) -> SigningKey {
        SigningKey::from_bytes(secret)
    }
}

impl TryFrom<&[u8]> for SigningKey {
    type Error = CurveError;

    fn try_from(bytes: &[u8]) -> Result<SigningKey, CurveError> {
        let secret: &SecretKey = bytes.try_into().map_err(|_| CurveError::BytesLength {
            name: "SigningKey",
            length: SECRET_KEY_LENGTH,
        })?;
        Ok(SigningKey::from_bytes(secret))
    }
}

impl Debug for SigningKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SigningKey")
            .field("verifying_key", &self.verifying_key)
            .finish_non_exhaustive()
    }
}

impl Drop for SigningKey {
    fn drop(&mut self) {
        #[cfg(feature = "zeroize")]
        self.secret_key.zeroize();
    }
}

#[cfg(feature = "zeroize")]
impl ZeroizeOnDrop for SigningKey {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::constants;
    use crate::traits::Identity;

    use hex_literal::hex;

    fn signing_key() -> SigningKey {
        SigningKey::from_bytes(&hex!(
            "4ccd089b28ff96da9db6c346ec114e0f5b8a319f35aba624da8cf6ed4fb8a6fb"
        ))
    }

    /// Sign with an arbitrary commitment scalar `r` and the key's real scalar.
    fn sign_with_nonce(key: &SigningKey, R_bytes: [u8; 32], r: &Scalar, message: &[u8]) -> Signature {
        let k = challenge_scalar(&R_bytes, key.verifying_key().as_bytes(), message);
        let s = &(&k * &key.to_scalar()) + r;
        Signature {
            R_bytes,
            s_bytes: s.to_bytes(),
        }
    }

    /// y = p + 3: a valid point of large order with a non-canonical encoding.
    const NON_CANONICAL_LARGE_ORDER: [u8; 32] = [
        0xf0, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0x7f,
    ];

    #[test]
    fn sign_verify_round_trip() {
        let key = signing_key();
        let sig = key.sign(b"message");
        assert!(key.verify(b"message", &sig));
        for options in [
            VerifyOptions::DEFAULT,
            VerifyOptions::FIPS_186_5,
            VerifyOptions::ZIP_215,
        ] {
            assert!(key
                .verifying_key()
                .verify_with_options(b"message", &sig, &options));
        }
    }

    #[test]
    fn tampering_is_detected() {
        let key = signing_key();
        let sig = key.sign(b"message");
        let vk = key.verifying_key();

        assert!(!vk.verify(b"massage", &sig));

        let mut bytes = sig.to_bytes();
        bytes[0] ^= 1;
        assert!(!vk.verify(b"message", &Signature::from_bytes(&bytes)));

        let mut bytes = sig.to_bytes();
        bytes[40] ^= 1;
        assert!(!vk.verify(b"message", &Signature::from_bytes(&bytes)));

        let other = SigningKey::from_bytes(&[1u8; 32]).verifying_key();
        assert!(!other.verify(b"message", &sig));
    }

    #[test]
    fn non_canonical_s_is_rejected() {
        let key = signing_key();
        let sig = key.sign(b"message");

        // s + l encodes the same residue but is not reduced.
        let s = Scalar::from_bytes_mod_order(*sig.s_bytes());
        let mut s_plus_l = [0u8; 32];
        let mut carry = 0u16;
        for i in 0..32 {
            let sum = s.as_bytes()[i] as u16 + constants::BASEPOINT_ORDER.as_bytes()[i] as u16 + carry;
            s_plus_l[i] = sum as u8;
            carry = sum >> 8;
        }
        let forged = Signature {
            R_bytes: *sig.r_bytes(),
            s_bytes: s_plus_l,
        };
        assert!(!key
            .verifying_key()
            .verify_with_options(b"message", &forged, &VerifyOptions::ZIP_215));
    }

    #[test]
    fn small_order_a_is_a_policy_decision() {
        // Under the identity key every (R = [s]B, s) verifies.
        let vk = VerifyingKey::from_point(EdwardsPoint::identity());
        assert!(vk.is_weak());

        let s = Scalar::from(1234u64);
        let sig = Signature {
            R_bytes: EdwardsPoint::mul_base(&s).compress().to_bytes(),
            s_bytes: s.to_bytes(),
        };
        assert!(!vk.verify_with_options(b"anything", &sig, &VerifyOptions::DEFAULT));
        assert!(!vk.verify_with_options(b"anything", &sig, &VerifyOptions::FIPS_186_5));
        assert!(vk.verify_with_options(b"anything", &sig, &VerifyOptions::ZIP_215));
    }

    #[test]
    fn small_order_r_is_a_policy_decision() {
        let key = signing_key();
        let vk = key.verifying_key();
        let R_bytes = CompressedEdwardsY::identity().to_bytes();
        let sig = sign_with_nonce(&key, R_bytes, &Scalar::ZERO, b"message");

        assert!(!vk.verify_with_options(b"message", &sig, &VerifyOptions::DEFAULT));
        assert!(!vk.verify_with_options(b"message", &sig, &VerifyOptions::FIPS_186_5));
        assert!(vk.verify_with_options(b"message", &sig, &VerifyOptions::ZIP_215));
    }

    #[test]
    fn non_canonical_a_is_a_policy_decision() {
        let vk = VerifyingKey::from_bytes(&NON_CANONICAL_LARGE_ORDER).unwrap();
        assert!(!vk.is_weak());
        assert!(!VerifyOptions::DEFAULT.accepts_verifying_key(&vk));
        assert!(VerifyOptions::FIPS_186_5.accepts_verifying_key(&vk));
        assert!(VerifyOptions::ZIP_215.accepts_verifying_key(&vk));
    }

    #[test]
    fn non_canonical_r_is_a_policy_decision() {
        let sig = Signature {
            R_bytes: NON_CANONICAL_LARGE_ORDER,
            s_bytes: Scalar::ONE.to_bytes(),
        };
        assert!(VerifyOptions::DEFAULT.unpack_signature(&sig).is_ok());
        let strict = VerifyOptions {
            allow_non_canonical_r: false,
            ..VerifyOptions::DEFAULT
        };
        assert_eq!(
            strict.unpack_signature(&sig),
            Err(CurveError::NonCanonicalPoint)
        );
    }

    #[test]
    fn undecodable_r_is_rejected_unless_small_order_r_is_allowed() {
        let mut R_bytes = [0u8; 32];
        R_bytes[0] = 2;
        let sig = Signature {
            R_bytes,
            s_bytes: Scalar::ONE.to_bytes(),
        };
        assert_eq!(
            VerifyOptions::DEFAULT.unpack_signature(&sig),
            Err(CurveError::InvalidYCoordinate)
        );
        assert_eq!(VerifyOptions::ZIP_215.unpack_signature(&sig), Ok(Scalar::ONE));
    }

    #[test]
    fn keypair_bytes_round_trip() {
        let key = signing_key();
        let bytes = key.to_keypair_bytes();
        let parsed = SigningKey::from_keypair_bytes(&bytes).unwrap();
        assert_eq!(parsed.to_bytes(), key.to_bytes());
        assert_eq!(parsed.verifying_key(), key.verifying_key());

        let mut mismatched = bytes;
        mismatched[SECRET_KEY_LENGTH..]
            .copy_from_slice(constants::ED25519_BASEPOINT_COMPRESSED.as_bytes());
        assert_eq!(
            SigningKey::from_keypair_bytes(&mismatched).unwrap_err(),
            CurveError::MismatchedKeypair
        );
    }

    #[test]
    fn slice_constructors_check_length() {
        assert_eq!(
            Signature::try_from(&[0u8; 63][..]),
            Err(CurveError::BytesLength {
                name: "Signature",
                length: SIGNATURE_LENGTH
            })
        );
        assert!(VerifyingKey::try_from(&[0u8; 31][..]).is_err());
        assert!(SigningKey::try_from(&[0u8; 33][..]).is_err());
        assert!(SigningKey::try_from(&[0u8; 32][..]).is_ok());
    }

    #[test]
    fn scalar_matches_clamped_multiplication() {
        let key = signing_key();
        let clamped = key.to_x25519();
        assert_eq!(
            EdwardsPoint::mul_base_clamped(clamped),
            key.verifying_key().to_edwards()
        );
        assert_eq!(
            Scalar::from_bytes_mod_order(clamped),
            key.to_scalar()
        );
        assert_eq!(key.to_scalar_bytes(), key.to_scalar().to_bytes());
    }

    #[test]
    fn montgomery_form_of_verifying_key() {
        let key = signing_key();
        assert_eq!(
            key.verifying_key().to_montgomery(),
            MontgomeryPoint::mul_base_clamped(key.to_x25519())
        );
    }
}
