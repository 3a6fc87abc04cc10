use crate::core::common::PreAuthenticationEncoding;
use crate::core::{Local, PasetoError, V4};
use blake2::digest::consts::U32;
use blake2::digest::{FixedOutput, Update};
use blake2::Blake2bMac;
use digest::KeyInit;
use std::marker::PhantomData;
use std::ops::Deref;

pub struct Tag<Version, Purpose> {
    pub(crate) version: PhantomData<Version>,
    pub(crate) purpose: PhantomData<Purpose>,
    pub(crate) value: Vec<u8>,
}

impl Tag<V4, Local> {
    pub(crate) fn try_from(
        authentication_key: impl AsRef<[u8]>,
        pae: &PreAuthenticationEncoding,
    ) -> Result<Self, PasetoError> {
        let mut tag_context = Blake2bMac::<U32>::new_from_slice(authentication_key.as_ref())?;
        tag_context.update(pae.as_ref());
        let binding = tag_context.finalize_fixed();
        let value = binding.to_vec();
        Ok(Self {
            value,
            version: PhantomData,
            purpose: PhantomData,
        })
    }
}

impl<Version, Purpose> AsRef<[u8]> for Tag<Version, Purpose> {
    fn as_ref(&self) -> &[u8] {
        &self.value
    }
}

impl<Version, Purpose> Deref for Tag<Version, Purpose> {
    type Target = [u8];
    fn deref(&self) -> &Self::Target {
        &self.value
    }
}
