use crate::core::common::EncryptionKey;
use crate::core::{Local, V4};
use chacha20::cipher::{KeyIvInit, StreamCipher};
use std::marker::PhantomData;

pub(crate) struct CipherText<Version, Purpose> {
    pub(crate) ciphertext: Vec<u8>,
    pub(crate) version: PhantomData<Version>,
    pub(crate) purpose: PhantomData<Purpose>,
}

impl CipherText<V4, Local> {
    pub(crate) fn from(payload: &[u8], encryption_key: &EncryptionKey<V4, Local>) -> Self {
        let mut ciphertext = vec![0u8; payload.len()];
        ciphertext.copy_from_slice(payload);

        let n2 = encryption_key.counter_nonce();
        let mut cipher = chacha20::XChaCha20::new(encryption_key.as_ref(), n2);
        cipher.apply_keystream(&mut ciphertext);

        CipherText {
            ciphertext,
            version: PhantomData,
            purpose: PhantomData,
        }
    }

    pub(crate) fn into_inner(self) -> Vec<u8> {
        self.ciphertext
    }
}

impl<Version, Purpose> AsRef<Vec<u8>> for CipherText<Version, Purpose> {
    fn as_ref(&self) -> &Vec<u8> {
        &self.ciphertext
    }
}

impl<Version, Purpose> std::ops::Deref for CipherText<Version, Purpose> {
    type Target = Vec<u8>;
    fn deref(&self) -> &Self::Target {
        &self.ciphertext
    }
}
