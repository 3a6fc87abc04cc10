use crate::core::{Local, PasetoError, PasetoNonce, Public, V4};
use base64::prelude::*;
use std::marker::PhantomData;

pub struct RawPayload<Version, Purpose> {
    version: PhantomData<Version>,
    purpose: PhantomData<Purpose>,
}

impl RawPayload<V4, Local> {
    pub(crate) fn try_from(
        nonce: &PasetoNonce<V4, Local>,
        ciphertext: &impl AsRef<Vec<u8>>,
        tag: &impl AsRef<[u8]>,
    ) -> Result<String, PasetoError> {
        let nonce_len = nonce.as_ref().len();
        let ciphertext_len = ciphertext.as_ref().len();
        let tag_len = tag.as_ref().len();
        let concat_len: usize = nonce_len
            .checked_add(tag_len)
            .and_then(|n| n.checked_add(ciphertext_len))
            .ok_or(PasetoError::Cryption)?;

        let mut raw_token = vec![0u8; concat_len];

        raw_token
            .get_mut(..nonce_len)
            .ok_or(PasetoError::IncorrectSize)?
            .copy_from_slice(nonce.as_ref());

        let ciphertext_end = nonce_len
            .checked_add(ciphertext_len)
            .ok_or(PasetoError::IncorrectSize)?;
        raw_token
            .get_mut(nonce_len..ciphertext_end)
            .ok_or(PasetoError::IncorrectSize)?
            .copy_from_slice(ciphertext.as_ref());

        let tag_start = concat_len
            .checked_sub(tag_len)
            .ok_or(PasetoError::IncorrectSize)?;
        raw_token
            .get_mut(tag_start..)
            .ok_or(PasetoError::IncorrectSize)?
            .copy_from_slice(tag.as_ref());

        Ok(BASE64_URL_SAFE_NO_PAD.encode(&raw_token))
    }
}

impl RawPayload<V4, Public> {
    pub(crate) fn from(payload: &[u8], signature: &impl AsRef<[u8]>) -> String {
        let mut raw_token = Vec::from(payload);
        raw_token.extend_from_slice(signature.as_ref());

        BASE64_URL_SAFE_NO_PAD.encode(&raw_token)
    }
}
