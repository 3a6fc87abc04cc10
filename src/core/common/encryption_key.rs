use crate::core::{Key, Local, PasetoError, PasetoSymmetricKey, V4};
use blake2::digest::consts::U56;
use blake2::digest::{FixedOutput, Update};
use blake2::Blake2bMac;
use chacha20::XNonce;
use digest::KeyInit;
use std::marker::PhantomData;
use zeroize::Zeroize;

/// The derived XChaCha20 encryption key and counter nonce for one operation.
///
/// Both halves come out of a single domain-separated keyed BLAKE2b invocation
/// and are scrubbed when the value drops.
pub(crate) struct EncryptionKey<Version, Purpose> {
    version: PhantomData<Version>,
    purpose: PhantomData<Purpose>,
    key: Key<32>,
    nonce: Key<24>,
}

impl EncryptionKey<V4, Local> {
    pub(crate) fn try_from(message: &Key<53>, key: &PasetoSymmetricKey<V4, Local>) -> Result<Self, PasetoError> {
        let mut context = Blake2bMac::<U56>::new_from_slice(key.as_ref())?;
        context.update(message.as_ref());
        let mut derived = context.finalize_fixed();
        let key = Key::<32>::try_from(&derived[..32])?;
        let nonce = Key::<24>::try_from(&derived[32..])?;
        derived.as_mut_slice().zeroize();

        Ok(Self {
            version: PhantomData,
            purpose: PhantomData,
            key,
            nonce,
        })
    }

    pub(crate) fn counter_nonce(&self) -> &XNonce {
        XNonce::from_slice(self.nonce.as_ref())
    }
}

impl AsRef<chacha20::Key> for EncryptionKey<V4, Local> {
    fn as_ref(&self) -> &chacha20::Key {
        chacha20::Key::from_slice(self.key.as_ref())
    }
}
