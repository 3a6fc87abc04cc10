//! Plaintext key serializations: `k4.local.`, `k4.public.`, `k4.secret.`
//!
//! These are not secure serializations. Only move them over channels that are
//! themselves confidential, or prefer the wrap / seal / password operations.

use std::fmt;
use std::str::FromStr;

use ed25519_dalek::SigningKey;
use zeroize::{Zeroize, Zeroizing};

use super::{decode_b64, encode_b64, K4_LOCAL_HEADER, K4_PUBLIC_HEADER, K4_SECRET_HEADER};
use crate::core::{
    Key, Local, PasetoAsymmetricPrivateKey, PasetoAsymmetricPublicKey, PasetoError, PasetoSymmetricKey, Public, V4,
};

/// Extension trait for converting PASETO keys to PASERK format.
pub trait ToPaserk {
    /// The corresponding PASERK type for this key.
    type PaserkType;

    /// Converts this key to its PASERK representation.
    fn to_paserk(&self) -> Self::PaserkType;

    /// Returns the PASERK string representation of this key.
    fn to_paserk_string(&self) -> String;
}

/// Extension trait for creating PASETO keys from PASERK format.
pub trait FromPaserk: Sized {
    /// The corresponding PASERK type for this key.
    type PaserkType;

    /// Creates a PASETO key from its PASERK representation.
    fn from_paserk(paserk: Self::PaserkType) -> Self;

    /// Parses a PASERK string and creates a PASETO key.
    ///
    /// # Errors
    ///
    /// Returns `PasetoError` if the string is not a valid PASERK
    /// representation for this key type.
    fn try_from_paserk_str(paserk: &str) -> Result<Self, PasetoError>;
}

/// A symmetric key in its plaintext `k4.local.` serialization
#[derive(Clone)]
pub struct PaserkLocal(Key<32>);

impl PaserkLocal {
    /// The raw key bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_ref()
    }
}

impl fmt::Display for PaserkLocal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(K4_LOCAL_HEADER)?;
        f.write_str(&encode_b64(self.0.as_ref()))
    }
}

impl FromStr for PaserkLocal {
    type Err = PasetoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix(K4_LOCAL_HEADER).ok_or(PasetoError::WrongHeader)?;
        let bytes = Zeroizing::new(decode_b64(s)?);
        Ok(Self(Key::<32>::try_from(bytes.as_slice())?))
    }
}

impl From<&PasetoSymmetricKey<V4, Local>> for PaserkLocal {
    fn from(key: &PasetoSymmetricKey<V4, Local>) -> Self {
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(key.as_ref());
        let paserk = Self(Key::from(bytes));
        bytes.zeroize();
        paserk
    }
}

impl From<PaserkLocal> for PasetoSymmetricKey<V4, Local> {
    fn from(paserk: PaserkLocal) -> Self {
        PasetoSymmetricKey::from(paserk.0)
    }
}

impl ToPaserk for PasetoSymmetricKey<V4, Local> {
    type PaserkType = PaserkLocal;

    fn to_paserk(&self) -> Self::PaserkType {
        PaserkLocal::from(self)
    }

    fn to_paserk_string(&self) -> String {
        self.to_paserk().to_string()
    }
}

impl FromPaserk for PasetoSymmetricKey<V4, Local> {
    type PaserkType = PaserkLocal;

    fn from_paserk(paserk: Self::PaserkType) -> Self {
        paserk.into()
    }

    fn try_from_paserk_str(paserk: &str) -> Result<Self, PasetoError> {
        let parsed = paserk.parse::<PaserkLocal>()?;
        Ok(Self::from_paserk(parsed))
    }
}

/// The public half of an asymmetric key pair in its `k4.public.` serialization
#[derive(Clone)]
pub struct PaserkPublic(Key<32>);

impl PaserkPublic {
    /// The raw key bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_ref()
    }
}

impl fmt::Display for PaserkPublic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(K4_PUBLIC_HEADER)?;
        f.write_str(&encode_b64(self.0.as_ref()))
    }
}

impl FromStr for PaserkPublic {
    type Err = PasetoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix(K4_PUBLIC_HEADER).ok_or(PasetoError::WrongHeader)?;
        let bytes = decode_b64(s)?;
        Ok(Self(Key::<32>::try_from(bytes.as_slice())?))
    }
}

impl<'a> From<&'a PasetoAsymmetricPublicKey<'a, V4, Public>> for PaserkPublic {
    fn from(key: &'a PasetoAsymmetricPublicKey<'a, V4, Public>) -> Self {
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(key.as_ref());
        Self(Key::from(bytes))
    }
}

impl<'a> From<&'a PaserkPublic> for PasetoAsymmetricPublicKey<'a, V4, Public> {
    fn from(paserk: &'a PaserkPublic) -> Self {
        Self::from(&paserk.0)
    }
}

impl ToPaserk for PasetoAsymmetricPublicKey<'_, V4, Public> {
    type PaserkType = PaserkPublic;

    fn to_paserk(&self) -> Self::PaserkType {
        PaserkPublic::from(self)
    }

    fn to_paserk_string(&self) -> String {
        self.to_paserk().to_string()
    }
}

/// The private half of an asymmetric key pair in its `k4.secret.` serialization
///
/// Parsing enforces the keypair invariant: the trailing 32 bytes must equal
/// the Ed25519 public key derived from the leading 32 byte seed
#[derive(Clone)]
pub struct PaserkSecret(Key<64>);

impl PaserkSecret {
    /// The raw keypair bytes (seed followed by public key)
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_ref()
    }
}

impl fmt::Display for PaserkSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(K4_SECRET_HEADER)?;
        f.write_str(&encode_b64(self.0.as_ref()))
    }
}

impl FromStr for PaserkSecret {
    type Err = PasetoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix(K4_SECRET_HEADER).ok_or(PasetoError::WrongHeader)?;
        let bytes = Zeroizing::new(decode_b64(s)?);
        let key = Key::<64>::try_from(bytes.as_slice())?;
        SigningKey::from_keypair_bytes(<&[u8; 64]>::try_from(key.as_ref())?)
            .map_err(|_| PasetoError::InvalidKey)?;
        Ok(Self(key))
    }
}

impl<'a> From<&'a PasetoAsymmetricPrivateKey<'a, V4, Public>> for PaserkSecret {
    fn from(key: &'a PasetoAsymmetricPrivateKey<'a, V4, Public>) -> Self {
        let mut bytes = [0u8; 64];
        bytes.copy_from_slice(key.as_ref());
        let paserk = Self(Key::from(bytes));
        bytes.zeroize();
        paserk
    }
}

impl<'a> From<&'a PaserkSecret> for PasetoAsymmetricPrivateKey<'a, V4, Public> {
    fn from(paserk: &'a PaserkSecret) -> Self {
        Self::from(&paserk.0)
    }
}

impl ToPaserk for PasetoAsymmetricPrivateKey<'_, V4, Public> {
    type PaserkType = PaserkSecret;

    fn to_paserk(&self) -> Self::PaserkType {
        PaserkSecret::from(self)
    }

    fn to_paserk_string(&self) -> String {
        self.to_paserk().to_string()
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn local_key_roundtrips() {
        let key = PasetoSymmetricKey::<V4, Local>::from(Key::from(b"wubbalubbadubdubwubbalubbadubdub"));
        let paserk = key.to_paserk_string();
        assert!(paserk.starts_with("k4.local."));

        let parsed = PasetoSymmetricKey::<V4, Local>::try_from_paserk_str(&paserk).expect("round trip");
        assert_eq!(key.as_ref(), parsed.as_ref());
    }

    #[test]
    fn truncated_local_key_is_rejected() {
        assert!("k4.local.invalid".parse::<PaserkLocal>().is_err());
    }

    #[test]
    fn wrong_version_is_rejected() {
        assert!("k2.local.d3ViYmFsdWJiYWR1YmR1Ynd1YmJhbHViYmFkdWJkdWI"
            .parse::<PaserkLocal>()
            .is_err());
    }

    #[test]
    fn padded_base64_is_rejected() {
        assert!("k4.local.d3ViYmFsdWJiYWR1YmR1Ynd1YmJhbHViYmFkdWJkdWI="
            .parse::<PaserkLocal>()
            .is_err());
    }

    #[test]
    fn mismatched_keypair_is_rejected() {
        // the public half does not match the seed
        let bogus = Key::<64>::from([0x42u8; 64]);
        let serialized = format!("k4.secret.{}", super::encode_b64(bogus.as_ref()));
        assert!(serialized.parse::<PaserkSecret>().is_err());
    }

    #[test]
    fn valid_keypair_roundtrips() {
        let signing_key = SigningKey::from_bytes(&[0x42u8; 32]);
        let keypair = Key::<64>::from(signing_key.to_keypair_bytes());
        let private_key = PasetoAsymmetricPrivateKey::<V4, Public>::from(&keypair);

        let serialized = private_key.to_paserk_string();
        assert!(serialized.starts_with("k4.secret."));

        let parsed = serialized.parse::<PaserkSecret>().expect("valid keypair");
        assert_eq!(parsed.as_bytes(), keypair.as_ref());
    }
}
