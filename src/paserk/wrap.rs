//! PIE key wrapping: `k4.local-wrap.pie.`, `k4.secret-wrap.pie.`
//!
//! <https://github.com/paseto-standard/paserk/blob/master/operations/Wrap.md>
//!
//! Wraps a symmetric or secret key with another symmetric wrapping key, for
//! storage alongside data the wrapping key protects.

use std::fmt;
use std::str::FromStr;

use blake2::Blake2bMac;
use digest::consts::{U32, U56};
use digest::Mac;
use ed25519_dalek::SigningKey;
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use super::{decode_b64, encode_b64, xchacha20_stream};
use crate::core::{Key, Local, PasetoAsymmetricPrivateKey, PasetoError, PasetoSymmetricKey, Public, V4};

static LOCAL_WRAP_HEADER: &str = "k4.local-wrap.pie.";
static SECRET_WRAP_HEADER: &str = "k4.secret-wrap.pie.";

const WRAP_NONCE_LEN: usize = 32;
const WRAP_TAG_LEN: usize = 32;
const ENCRYPTION_DOMAIN: u8 = 0x80;
const AUTHENTICATION_DOMAIN: u8 = 0x81;

struct WrapKeys {
    encryption_key: Key<32>,
    counter_nonce: Key<24>,
    authentication_key: Key<32>,
}

fn derive_wrap_keys(wrapping_key: &[u8], nonce: &[u8]) -> Result<WrapKeys, PasetoError> {
    let mut derived = Blake2bMac::<U56>::new_from_slice(wrapping_key)?
        .chain_update([ENCRYPTION_DOMAIN])
        .chain_update(nonce)
        .finalize()
        .into_bytes();
    let encryption_key = Key::<32>::try_from(&derived[..32])?;
    let counter_nonce = Key::<24>::try_from(&derived[32..])?;
    derived.as_mut_slice().zeroize();

    let mut derived = Blake2bMac::<U32>::new_from_slice(wrapping_key)?
        .chain_update([AUTHENTICATION_DOMAIN])
        .chain_update(nonce)
        .finalize()
        .into_bytes();
    let authentication_key = Key::<32>::try_from(derived.as_slice())?;
    derived.as_mut_slice().zeroize();

    Ok(WrapKeys {
        encryption_key,
        counter_nonce,
        authentication_key,
    })
}

fn authentication_tag(
    header: &str,
    keys: &WrapKeys,
    nonce: &[u8],
    ciphertext: &[u8],
) -> Result<[u8; WRAP_TAG_LEN], PasetoError> {
    let tag = Blake2bMac::<U32>::new_from_slice(keys.authentication_key.as_ref())?
        .chain_update(header)
        .chain_update(nonce)
        .chain_update(ciphertext)
        .finalize()
        .into_bytes();
    Ok(tag.into())
}

/// A symmetric key wrapped with another symmetric key: `k4.local-wrap.pie.`
pub struct PieWrappedLocalKey {
    tag: [u8; WRAP_TAG_LEN],
    nonce: [u8; WRAP_NONCE_LEN],
    wrapped_key: [u8; 32],
}

impl PieWrappedLocalKey {
    /// Wraps `key` under `wrapping_key` with a fresh random nonce
    pub fn try_wrap(
        key: &PasetoSymmetricKey<V4, Local>,
        wrapping_key: &PasetoSymmetricKey<V4, Local>,
    ) -> Result<Self, PasetoError> {
        let nonce = Key::<WRAP_NONCE_LEN>::try_new_random()?;
        let keys = derive_wrap_keys(wrapping_key.as_ref(), nonce.as_ref())?;

        let ciphertext = xchacha20_stream(keys.encryption_key.as_ref(), keys.counter_nonce.as_ref(), key.as_ref());
        let tag = authentication_tag(LOCAL_WRAP_HEADER, &keys, nonce.as_ref(), &ciphertext)?;

        let mut wrapped_key = [0u8; 32];
        wrapped_key.copy_from_slice(&ciphertext);

        Ok(Self {
            tag,
            nonce: *nonce,
            wrapped_key,
        })
    }

    /// Authenticates and unwraps the key. A wrong wrapping key and a tampered
    /// payload are indistinguishable
    pub fn try_unwrap(
        &self,
        wrapping_key: &PasetoSymmetricKey<V4, Local>,
    ) -> Result<PasetoSymmetricKey<V4, Local>, PasetoError> {
        let keys = derive_wrap_keys(wrapping_key.as_ref(), &self.nonce)?;
        let tag2 = authentication_tag(LOCAL_WRAP_HEADER, &keys, &self.nonce, &self.wrapped_key)?;
        if !bool::from(self.tag.ct_eq(&tag2)) {
            return Err(PasetoError::Cryption);
        }

        let plaintext = xchacha20_stream(keys.encryption_key.as_ref(), keys.counter_nonce.as_ref(), &self.wrapped_key);
        let key = Key::<32>::try_from(plaintext.as_slice())?;
        Ok(PasetoSymmetricKey::from(key))
    }
}

impl fmt::Display for PieWrappedLocalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(LOCAL_WRAP_HEADER)?;
        let mut data = Vec::with_capacity(WRAP_TAG_LEN + WRAP_NONCE_LEN + 32);
        data.extend_from_slice(&self.tag);
        data.extend_from_slice(&self.nonce);
        data.extend_from_slice(&self.wrapped_key);
        f.write_str(&encode_b64(&data))
    }
}

impl FromStr for PieWrappedLocalKey {
    type Err = PasetoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix(LOCAL_WRAP_HEADER).ok_or(PasetoError::WrongHeader)?;
        let data = decode_b64(s)?;
        if data.len() != WRAP_TAG_LEN + WRAP_NONCE_LEN + 32 {
            return Err(PasetoError::IncorrectSize);
        }

        let mut tag = [0u8; WRAP_TAG_LEN];
        let mut nonce = [0u8; WRAP_NONCE_LEN];
        let mut wrapped_key = [0u8; 32];
        tag.copy_from_slice(&data[..32]);
        nonce.copy_from_slice(&data[32..64]);
        wrapped_key.copy_from_slice(&data[64..]);

        Ok(Self {
            tag,
            nonce,
            wrapped_key,
        })
    }
}

/// A secret (signing) key wrapped with a symmetric key: `k4.secret-wrap.pie.`
pub struct PieWrappedSecretKey {
    tag: [u8; WRAP_TAG_LEN],
    nonce: [u8; WRAP_NONCE_LEN],
    wrapped_key: [u8; 64],
}

impl PieWrappedSecretKey {
    /// Wraps `key` under `wrapping_key` with a fresh random nonce
    pub fn try_wrap(
        key: &PasetoAsymmetricPrivateKey<V4, Public>,
        wrapping_key: &PasetoSymmetricKey<V4, Local>,
    ) -> Result<Self, PasetoError> {
        if key.as_ref().len() != 64 {
            return Err(PasetoError::IncorrectSize);
        }

        let nonce = Key::<WRAP_NONCE_LEN>::try_new_random()?;
        let keys = derive_wrap_keys(wrapping_key.as_ref(), nonce.as_ref())?;

        let ciphertext = xchacha20_stream(keys.encryption_key.as_ref(), keys.counter_nonce.as_ref(), key.as_ref());
        let tag = authentication_tag(SECRET_WRAP_HEADER, &keys, nonce.as_ref(), &ciphertext)?;

        let mut wrapped_key = [0u8; 64];
        wrapped_key.copy_from_slice(&ciphertext);

        Ok(Self {
            tag,
            nonce: *nonce,
            wrapped_key,
        })
    }

    /// Authenticates and unwraps the keypair bytes (seed followed by public
    /// key). A wrong wrapping key, a tampered payload, and wrapped bytes that
    /// are not a valid keypair are indistinguishable
    pub fn try_unwrap(&self, wrapping_key: &PasetoSymmetricKey<V4, Local>) -> Result<Key<64>, PasetoError> {
        let keys = derive_wrap_keys(wrapping_key.as_ref(), &self.nonce)?;
        let tag2 = authentication_tag(SECRET_WRAP_HEADER, &keys, &self.nonce, &self.wrapped_key)?;
        if !bool::from(self.tag.ct_eq(&tag2)) {
            return Err(PasetoError::Cryption);
        }

        let plaintext = xchacha20_stream(keys.encryption_key.as_ref(), keys.counter_nonce.as_ref(), &self.wrapped_key);
        let key = Key::<64>::try_from(plaintext.as_slice())?;
        SigningKey::from_keypair_bytes(<&[u8; 64]>::try_from(key.as_ref())?)
            .map_err(|_| PasetoError::Cryption)?;
        Ok(key)
    }
}

impl fmt::Display for PieWrappedSecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(SECRET_WRAP_HEADER)?;
        let mut data = Vec::with_capacity(WRAP_TAG_LEN + WRAP_NONCE_LEN + 64);
        data.extend_from_slice(&self.tag);
        data.extend_from_slice(&self.nonce);
        data.extend_from_slice(&self.wrapped_key);
        f.write_str(&encode_b64(&data))
    }
}

impl FromStr for PieWrappedSecretKey {
    type Err = PasetoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix(SECRET_WRAP_HEADER).ok_or(PasetoError::WrongHeader)?;
        let data = decode_b64(s)?;
        if data.len() != WRAP_TAG_LEN + WRAP_NONCE_LEN + 64 {
            return Err(PasetoError::IncorrectSize);
        }

        let mut tag = [0u8; WRAP_TAG_LEN];
        let mut nonce = [0u8; WRAP_NONCE_LEN];
        let mut wrapped_key = [0u8; 64];
        tag.copy_from_slice(&data[..32]);
        nonce.copy_from_slice(&data[32..64]);
        wrapped_key.copy_from_slice(&data[64..]);

        Ok(Self {
            tag,
            nonce,
            wrapped_key,
        })
    }
}
