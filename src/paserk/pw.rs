//! Password-based key wrapping: `k4.local-pw.`, `k4.secret-pw.`
//!
//! <https://github.com/paseto-standard/paserk/blob/master/operations/PBKW.md>
//!
//! Argon2id stretches the password into a pre-key; domain-separated BLAKE2b
//! splits the pre-key into an encryption key and an authentication key.

use std::fmt;
use std::str::FromStr;

use argon2::{Algorithm, Argon2, Params, Version};
use blake2::{Blake2b, Blake2bMac};
use digest::consts::U32;
use digest::{Digest, Mac};
use ed25519_dalek::SigningKey;
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use super::{decode_b64, encode_b64, xchacha20_stream};
use crate::core::{Key, Local, PasetoAsymmetricPrivateKey, PasetoError, PasetoSymmetricKey, Public, V4};

static LOCAL_PW_HEADER: &str = "k4.local-pw.";
static SECRET_PW_HEADER: &str = "k4.secret-pw.";

const SALT_LEN: usize = 16;
const PW_NONCE_LEN: usize = 24;
const PW_TAG_LEN: usize = 32;
// salt + BE64 memory + BE32 time + BE32 parallelism + nonce
const PW_PREFIX_LEN: usize = SALT_LEN + 8 + 4 + 4 + PW_NONCE_LEN;
const ENCRYPTION_DOMAIN: u8 = 0xff;
const AUTHENTICATION_DOMAIN: u8 = 0xfe;

/// Argon2id cost parameters
///
/// Memory is accepted in KiB only; the serialized form carries the byte count
/// per the PASERK specification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Argon2Params {
    /// Memory cost in KiB
    pub memory_kib: u32,
    /// Number of passes over the memory
    pub iterations: u32,
    /// Degree of parallelism
    pub parallelism: u32,
}

impl Default for Argon2Params {
    /// 64 MiB, 2 iterations, no parallelism
    fn default() -> Self {
        Self {
            memory_kib: 64 * 1024,
            iterations: 2,
            parallelism: 1,
        }
    }
}

fn derive_pre_key(
    password: &[u8],
    salt: &[u8],
    params: Argon2Params,
) -> Result<Zeroizing<[u8; 32]>, PasetoError> {
    let params = Params::new(params.memory_kib, params.iterations, params.parallelism, Some(32))
        .map_err(|_| PasetoError::InvalidArgonParams)?;
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let mut pre_key = Zeroizing::new([0u8; 32]);
    argon2.hash_password_into(password, salt, pre_key.as_mut_slice())?;
    Ok(pre_key)
}

fn split_pre_key(pre_key: &[u8]) -> (Zeroizing<[u8; 32]>, Zeroizing<[u8; 32]>) {
    let encryption_key = Blake2b::<U32>::new()
        .chain_update([ENCRYPTION_DOMAIN])
        .chain_update(pre_key)
        .finalize();
    let authentication_key = Blake2b::<U32>::new()
        .chain_update([AUTHENTICATION_DOMAIN])
        .chain_update(pre_key)
        .finalize();
    (
        Zeroizing::new(encryption_key.into()),
        Zeroizing::new(authentication_key.into()),
    )
}

#[allow(clippy::too_many_arguments)]
fn authentication_tag(
    header: &str,
    authentication_key: &[u8],
    salt: &[u8],
    memory_cost: u64,
    time_cost: u32,
    parallelism: u32,
    nonce: &[u8],
    ciphertext: &[u8],
) -> Result<[u8; PW_TAG_LEN], PasetoError> {
    let tag = Blake2bMac::<U32>::new_from_slice(authentication_key)?
        .chain_update(header)
        .chain_update(salt)
        .chain_update(memory_cost.to_be_bytes())
        .chain_update(time_cost.to_be_bytes())
        .chain_update(parallelism.to_be_bytes())
        .chain_update(nonce)
        .chain_update(ciphertext)
        .finalize()
        .into_bytes();
    Ok(tag.into())
}

/// The serialized memory cost is a byte count; Argon2id consumes KiB. Reject
/// anything that is zero, not a whole number of KiB, or too large to express.
fn memory_cost_kib(memory_cost: u64) -> Result<u32, PasetoError> {
    if memory_cost == 0 || memory_cost % 1024 != 0 {
        return Err(PasetoError::InvalidArgonParams);
    }
    u32::try_from(memory_cost / 1024).map_err(|_| PasetoError::InvalidArgonParams)
}

/// A symmetric key wrapped with a password: `k4.local-pw.`
pub struct PwWrappedLocalKey {
    salt: [u8; SALT_LEN],
    memory_cost: u64,
    time_cost: u32,
    parallelism: u32,
    nonce: [u8; PW_NONCE_LEN],
    wrapped_key: [u8; 32],
    tag: [u8; PW_TAG_LEN],
}

impl PwWrappedLocalKey {
    /// Wraps `key` under `password`, stretching it with the given Argon2id
    /// parameters
    pub fn try_wrap(
        key: &PasetoSymmetricKey<V4, Local>,
        password: &[u8],
        params: Argon2Params,
    ) -> Result<Self, PasetoError> {
        let salt = Key::<SALT_LEN>::try_new_random()?;
        let nonce = Key::<PW_NONCE_LEN>::try_new_random()?;
        let memory_cost = u64::from(params.memory_kib) * 1024;

        let pre_key = derive_pre_key(password, salt.as_ref(), params)?;
        let (encryption_key, authentication_key) = split_pre_key(pre_key.as_ref());

        let ciphertext = xchacha20_stream(encryption_key.as_ref(), nonce.as_ref(), key.as_ref());
        let tag = authentication_tag(
            LOCAL_PW_HEADER,
            authentication_key.as_ref(),
            salt.as_ref(),
            memory_cost,
            params.iterations,
            params.parallelism,
            nonce.as_ref(),
            &ciphertext,
        )?;

        let mut wrapped_key = [0u8; 32];
        wrapped_key.copy_from_slice(&ciphertext);

        Ok(Self {
            salt: *salt,
            memory_cost,
            time_cost: params.iterations,
            parallelism: params.parallelism,
            nonce: *nonce,
            wrapped_key,
            tag,
        })
    }

    /// Authenticates and unwraps the key using the Argon2id parameters stored
    /// in the serialized form
    pub fn try_unwrap(&self, password: &[u8]) -> Result<PasetoSymmetricKey<V4, Local>, PasetoError> {
        let params = Argon2Params {
            memory_kib: memory_cost_kib(self.memory_cost)?,
            iterations: self.time_cost,
            parallelism: self.parallelism,
        };

        let pre_key = derive_pre_key(password, &self.salt, params)?;
        let (encryption_key, authentication_key) = split_pre_key(pre_key.as_ref());

        let tag2 = authentication_tag(
            LOCAL_PW_HEADER,
            authentication_key.as_ref(),
            &self.salt,
            self.memory_cost,
            self.time_cost,
            self.parallelism,
            &self.nonce,
            &self.wrapped_key,
        )?;
        if !bool::from(self.tag.ct_eq(&tag2)) {
            return Err(PasetoError::Cryption);
        }

        let plaintext = xchacha20_stream(encryption_key.as_ref(), &self.nonce, &self.wrapped_key);
        let key = Key::<32>::try_from(plaintext.as_slice())?;
        Ok(PasetoSymmetricKey::from(key))
    }
}

impl fmt::Display for PwWrappedLocalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(LOCAL_PW_HEADER)?;
        let mut data = Vec::with_capacity(PW_PREFIX_LEN + 32 + PW_TAG_LEN);
        data.extend_from_slice(&self.salt);
        data.extend_from_slice(&self.memory_cost.to_be_bytes());
        data.extend_from_slice(&self.time_cost.to_be_bytes());
        data.extend_from_slice(&self.parallelism.to_be_bytes());
        data.extend_from_slice(&self.nonce);
        data.extend_from_slice(&self.wrapped_key);
        data.extend_from_slice(&self.tag);
        f.write_str(&encode_b64(&data))
    }
}

impl FromStr for PwWrappedLocalKey {
    type Err = PasetoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix(LOCAL_PW_HEADER).ok_or(PasetoError::WrongHeader)?;
        let data = decode_b64(s)?;
        if data.len() != PW_PREFIX_LEN + 32 + PW_TAG_LEN {
            return Err(PasetoError::IncorrectSize);
        }

        let mut salt = [0u8; SALT_LEN];
        let mut nonce = [0u8; PW_NONCE_LEN];
        let mut wrapped_key = [0u8; 32];
        let mut tag = [0u8; PW_TAG_LEN];
        salt.copy_from_slice(&data[..16]);
        let memory_cost = u64::from_be_bytes(<[u8; 8]>::try_from(&data[16..24])?);
        let time_cost = u32::from_be_bytes(<[u8; 4]>::try_from(&data[24..28])?);
        let parallelism = u32::from_be_bytes(<[u8; 4]>::try_from(&data[28..32])?);
        nonce.copy_from_slice(&data[32..56]);
        wrapped_key.copy_from_slice(&data[56..88]);
        tag.copy_from_slice(&data[88..]);

        Ok(Self {
            salt,
            memory_cost,
            time_cost,
            parallelism,
            nonce,
            wrapped_key,
            tag,
        })
    }
}

/// A secret (signing) key wrapped with a password: `k4.secret-pw.`
pub struct PwWrappedSecretKey {
    salt: [u8; SALT_LEN],
    memory_cost: u64,
    time_cost: u32,
    parallelism: u32,
    nonce: [u8; PW_NONCE_LEN],
    wrapped_key: [u8; 64],
    tag: [u8; PW_TAG_LEN],
}

impl PwWrappedSecretKey {
    /// Wraps `key` under `password`, stretching it with the given Argon2id
    /// parameters
    pub fn try_wrap(
        key: &PasetoAsymmetricPrivateKey<V4, Public>,
        password: &[u8],
        params: Argon2Params,
    ) -> Result<Self, PasetoError> {
        let salt = Key::<SALT_LEN>::try_new_random()?;
        let nonce = Key::<PW_NONCE_LEN>::try_new_random()?;
        let memory_cost = u64::from(params.memory_kib) * 1024;

        let pre_key = derive_pre_key(password, salt.as_ref(), params)?;
        let (encryption_key, authentication_key) = split_pre_key(pre_key.as_ref());

        let ciphertext = xchacha20_stream(encryption_key.as_ref(), nonce.as_ref(), key.as_ref());
        let tag = authentication_tag(
            SECRET_PW_HEADER,
            authentication_key.as_ref(),
            salt.as_ref(),
            memory_cost,
            params.iterations,
            params.parallelism,
            nonce.as_ref(),
            &ciphertext,
        )?;

        let mut wrapped_key = [0u8; 64];
        wrapped_key.copy_from_slice(&ciphertext);

        Ok(Self {
            salt: *salt,
            memory_cost,
            time_cost: params.iterations,
            parallelism: params.parallelism,
            nonce: *nonce,
            wrapped_key,
            tag,
        })
    }

    /// Authenticates and unwraps the keypair bytes (seed followed by public
    /// key) using the Argon2id parameters stored in the serialized form
    pub fn try_unwrap(&self, password: &[u8]) -> Result<Key<64>, PasetoError> {
        let params = Argon2Params {
            memory_kib: memory_cost_kib(self.memory_cost)?,
            iterations: self.time_cost,
            parallelism: self.parallelism,
        };

        let pre_key = derive_pre_key(password, &self.salt, params)?;
        let (encryption_key, authentication_key) = split_pre_key(pre_key.as_ref());

        let tag2 = authentication_tag(
            SECRET_PW_HEADER,
            authentication_key.as_ref(),
            &self.salt,
            self.memory_cost,
            self.time_cost,
            self.parallelism,
            &self.nonce,
            &self.wrapped_key,
        )?;
        if !bool::from(self.tag.ct_eq(&tag2)) {
            return Err(PasetoError::Cryption);
        }

        let plaintext = xchacha20_stream(encryption_key.as_ref(), &self.nonce, &self.wrapped_key);
        let key = Key::<64>::try_from(plaintext.as_slice())?;
        SigningKey::from_keypair_bytes(<&[u8; 64]>::try_from(key.as_ref())?)
            .map_err(|_| PasetoError::Cryption)?;
        Ok(key)
    }
}

impl fmt::Display for PwWrappedSecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(SECRET_PW_HEADER)?;
        let mut data = Vec::with_capacity(PW_PREFIX_LEN + 64 + PW_TAG_LEN);
        data.extend_from_slice(&self.salt);
        data.extend_from_slice(&self.memory_cost.to_be_bytes());
        data.extend_from_slice(&self.time_cost.to_be_bytes());
        data.extend_from_slice(&self.parallelism.to_be_bytes());
        data.extend_from_slice(&self.nonce);
        data.extend_from_slice(&self.wrapped_key);
        data.extend_from_slice(&self.tag);
        f.write_str(&encode_b64(&data))
    }
}

impl FromStr for PwWrappedSecretKey {
    type Err = PasetoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix(SECRET_PW_HEADER).ok_or(PasetoError::WrongHeader)?;
        let data = decode_b64(s)?;
        if data.len() != PW_PREFIX_LEN + 64 + PW_TAG_LEN {
            return Err(PasetoError::IncorrectSize);
        }

        let mut salt = [0u8; SALT_LEN];
        let mut nonce = [0u8; PW_NONCE_LEN];
        let mut wrapped_key = [0u8; 64];
        let mut tag = [0u8; PW_TAG_LEN];
        salt.copy_from_slice(&data[..16]);
        let memory_cost = u64::from_be_bytes(<[u8; 8]>::try_from(&data[16..24])?);
        let time_cost = u32::from_be_bytes(<[u8; 4]>::try_from(&data[24..28])?);
        let parallelism = u32::from_be_bytes(<[u8; 4]>::try_from(&data[28..32])?);
        nonce.copy_from_slice(&data[32..56]);
        wrapped_key.copy_from_slice(&data[56..120]);
        tag.copy_from_slice(&data[120..]);

        Ok(Self {
            salt,
            memory_cost,
            time_cost,
            parallelism,
            nonce,
            wrapped_key,
            tag,
        })
    }
}
