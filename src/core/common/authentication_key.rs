use crate::core::{Key, Local, PasetoError, PasetoSymmetricKey, V4};
use blake2::digest::consts::U32;
use blake2::digest::{FixedOutput, Update};
use blake2::Blake2bMac;
use digest::KeyInit;
use std::marker::PhantomData;
use std::ops::Deref;
use zeroize::Zeroize;

pub(crate) struct AuthenticationKey<Version, Purpose> {
    version: PhantomData<Version>,
    purpose: PhantomData<Purpose>,
    key: Key<32>,
}

impl AuthenticationKey<V4, Local> {
    pub(crate) fn try_from(message: &Key<56>, key: &PasetoSymmetricKey<V4, Local>) -> Result<Self, PasetoError> {
        let mut context = Blake2bMac::<U32>::new_from_slice(key.as_ref())?;
        context.update(message.as_ref());
        let mut derived = context.finalize_fixed();
        let key = Key::<32>::try_from(derived.as_slice())?;
        derived.as_mut_slice().zeroize();

        Ok(Self {
            version: PhantomData,
            purpose: PhantomData,
            key,
        })
    }
}

impl<Version, Purpose> AsRef<[u8]> for AuthenticationKey<Version, Purpose> {
    fn as_ref(&self) -> &[u8] {
        self.key.as_ref()
    }
}

impl<Version, Purpose> Deref for AuthenticationKey<Version, Purpose> {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.key.as_ref()
    }
}
