use super::Key;
use crate::core::Public;
use std::convert::{AsRef, From};
use std::marker::PhantomData;

/// A wrapper for the public half of an asymmetric key pair
///
/// Keys are created from [Key] of size 32
pub struct PasetoAsymmetricPublicKey<'a, Version, Purpose> {
  version: PhantomData<Version>,
  purpose: PhantomData<Purpose>,
  key: &'a [u8],
}

impl<Version, Purpose> AsRef<[u8]> for PasetoAsymmetricPublicKey<'_, Version, Purpose> {
  fn as_ref(&self) -> &[u8] {
    self.key
  }
}

impl<'a, Version> From<&'a Key<32>> for PasetoAsymmetricPublicKey<'a, Version, Public> {
  fn from(key: &'a Key<32>) -> Self {
    Self {
      version: PhantomData,
      purpose: PhantomData,
      key: key.as_ref(),
    }
  }
}
