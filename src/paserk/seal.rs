//! PKE (Public-Key Encryption): `k4.seal.`
//!
//! <https://github.com/paseto-standard/paserk/blob/master/operations/PKE.md>
//!
//! Seals a symmetric key to the holder of an Ed25519 secret key, using an
//! ephemeral X25519 key agreement against the birationally-equivalent X25519
//! form of the recipient's Ed25519 key.

use std::fmt;
use std::str::FromStr;

use blake2::{Blake2b, Blake2bMac};
use curve25519_dalek::edwards::CompressedEdwardsY;
use curve25519_dalek::scalar::clamp_integer;
use digest::consts::{U24, U32};
use digest::{Digest, Mac};
use sha2::Sha512;
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, Zeroizing};

use super::{decode_b64, encode_b64, xchacha20_stream};
use crate::core::{
    Key, Local, PasetoAsymmetricPrivateKey, PasetoAsymmetricPublicKey, PasetoError, PasetoSymmetricKey, Public, V4,
};

static SEAL_HEADER: &str = "k4.seal.";

const SEAL_TAG_LEN: usize = 32;
const EPK_LEN: usize = 32;
const EDK_LEN: usize = 32;
const ENCRYPTION_DOMAIN: u8 = 0x01;
const AUTHENTICATION_DOMAIN: u8 = 0x02;

/// A symmetric key sealed to an Ed25519 recipient: `k4.seal.`
pub struct SealedKey {
    tag: [u8; SEAL_TAG_LEN],
    ephemeral_public_key: [u8; EPK_LEN],
    encrypted_data_key: [u8; EDK_LEN],
}

/// Calculates the birationally-equivalent X25519 public key of an Ed25519
/// public key: x = (1 + y) / (1 - y) over GF(2^255 - 19)
fn convert_public_key(sealing_key: &[u8]) -> Result<x25519_dalek::PublicKey, PasetoError> {
    let compressed = CompressedEdwardsY::from_slice(sealing_key)?;
    let point = compressed.decompress().ok_or(PasetoError::InvalidKey)?;
    Ok(x25519_dalek::PublicKey::from(point.to_montgomery().0))
}

/// Expands and clamps the Ed25519 seed into the equivalent X25519 secret
fn convert_secret_key(seed: &[u8]) -> x25519_dalek::StaticSecret {
    let mut scalar_bytes = Zeroizing::new([0u8; 32]);
    scalar_bytes.copy_from_slice(&Sha512::digest(seed)[..32]);
    let mut clamped = Zeroizing::new(clamp_integer(*scalar_bytes));
    let secret = x25519_dalek::StaticSecret::from(*clamped);
    clamped.zeroize();
    secret
}

fn derive_cipher_key(domain: u8, shared: &[u8], epk: &[u8], xpk: &[u8]) -> Zeroizing<[u8; 32]> {
    let digest = Blake2b::<U32>::new()
        .chain_update([domain])
        .chain_update(SEAL_HEADER)
        .chain_update(shared)
        .chain_update(epk)
        .chain_update(xpk)
        .finalize();
    Zeroizing::new(digest.into())
}

fn derive_nonce(epk: &[u8], xpk: &[u8]) -> [u8; 24] {
    Blake2b::<U24>::new()
        .chain_update(epk)
        .chain_update(xpk)
        .finalize()
        .into()
}

fn authentication_tag(
    authentication_key: &[u8],
    epk: &[u8],
    encrypted_data_key: &[u8],
) -> Result<[u8; SEAL_TAG_LEN], PasetoError> {
    let tag = Blake2bMac::<U32>::new_from_slice(authentication_key)?
        .chain_update(SEAL_HEADER)
        .chain_update(epk)
        .chain_update(encrypted_data_key)
        .finalize()
        .into_bytes();
    Ok(tag.into())
}

impl SealedKey {
    /// Seals `key` to the holder of the Ed25519 secret key matching
    /// `sealing_key`, using a fresh ephemeral X25519 keypair
    pub fn try_seal(
        key: &PasetoSymmetricKey<V4, Local>,
        sealing_key: &PasetoAsymmetricPublicKey<V4, Public>,
    ) -> Result<Self, PasetoError> {
        let xpk = convert_public_key(sealing_key.as_ref())?;

        let ephemeral_bytes = Key::<32>::try_new_random()?;
        let ephemeral_secret = x25519_dalek::StaticSecret::from(*ephemeral_bytes);
        let epk = x25519_dalek::PublicKey::from(&ephemeral_secret);

        let shared = ephemeral_secret.diffie_hellman(&xpk);
        if !shared.was_contributory() {
            return Err(PasetoError::Cryption);
        }

        let encryption_key =
            derive_cipher_key(ENCRYPTION_DOMAIN, shared.as_bytes(), epk.as_bytes(), xpk.as_bytes());
        let authentication_key =
            derive_cipher_key(AUTHENTICATION_DOMAIN, shared.as_bytes(), epk.as_bytes(), xpk.as_bytes());
        let nonce = derive_nonce(epk.as_bytes(), xpk.as_bytes());

        let ciphertext = xchacha20_stream(encryption_key.as_ref(), &nonce, key.as_ref());
        let tag = authentication_tag(authentication_key.as_ref(), epk.as_bytes(), &ciphertext)?;

        let mut encrypted_data_key = [0u8; EDK_LEN];
        encrypted_data_key.copy_from_slice(&ciphertext);

        Ok(Self {
            tag,
            ephemeral_public_key: epk.to_bytes(),
            encrypted_data_key,
        })
    }

    /// Authenticates and unseals the key with the recipient's Ed25519 secret
    /// key. A wrong key and a tampered payload are indistinguishable
    pub fn try_unseal(
        &self,
        unsealing_key: &PasetoAsymmetricPrivateKey<V4, Public>,
    ) -> Result<PasetoSymmetricKey<V4, Local>, PasetoError> {
        let seed = unsealing_key.as_ref().get(..32).ok_or(PasetoError::IncorrectSize)?;

        let secret = convert_secret_key(seed);
        let xpk = x25519_dalek::PublicKey::from(&secret);
        let epk = x25519_dalek::PublicKey::from(self.ephemeral_public_key);

        let shared = secret.diffie_hellman(&epk);
        if !shared.was_contributory() {
            return Err(PasetoError::Cryption);
        }

        let authentication_key =
            derive_cipher_key(AUTHENTICATION_DOMAIN, shared.as_bytes(), epk.as_bytes(), xpk.as_bytes());
        let tag2 = authentication_tag(authentication_key.as_ref(), epk.as_bytes(), &self.encrypted_data_key)?;
        if !bool::from(self.tag.ct_eq(&tag2)) {
            return Err(PasetoError::Cryption);
        }

        let encryption_key =
            derive_cipher_key(ENCRYPTION_DOMAIN, shared.as_bytes(), epk.as_bytes(), xpk.as_bytes());
        let nonce = derive_nonce(epk.as_bytes(), xpk.as_bytes());

        let plaintext = xchacha20_stream(encryption_key.as_ref(), &nonce, &self.encrypted_data_key);
        let key = Key::<32>::try_from(plaintext.as_slice())?;
        Ok(PasetoSymmetricKey::from(key))
    }
}

impl fmt::Display for SealedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(SEAL_HEADER)?;
        let mut data = Vec::with_capacity(SEAL_TAG_LEN + EPK_LEN + EDK_LEN);
        data.extend_from_slice(&self.tag);
        data.extend_from_slice(&self.ephemeral_public_key);
        data.extend_from_slice(&self.encrypted_data_key);
        f.write_str(&encode_b64(&data))
    }
}

impl FromStr for SealedKey {
    type Err = PasetoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix(SEAL_HEADER).ok_or(PasetoError::WrongHeader)?;
        let data = decode_b64(s)?;
        if data.len() != SEAL_TAG_LEN + EPK_LEN + EDK_LEN {
            return Err(PasetoError::IncorrectSize);
        }

        let mut tag = [0u8; SEAL_TAG_LEN];
        let mut ephemeral_public_key = [0u8; EPK_LEN];
        let mut encrypted_data_key = [0u8; EDK_LEN];
        tag.copy_from_slice(&data[..32]);
        ephemeral_public_key.copy_from_slice(&data[32..64]);
        encrypted_data_key.copy_from_slice(&data[64..]);

        Ok(Self {
            tag,
            ephemeral_public_key,
            encrypted_data_key,
        })
    }
}
