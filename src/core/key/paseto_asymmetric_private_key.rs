use super::Key;
use crate::core::{PasetoError, Public};
use std::convert::AsRef;
use std::marker::PhantomData;

/// A wrapper for the private half of an asymmetric key pair
///
/// Keys are created from [Key] of size 64: the 32 byte Ed25519 seed followed
/// by the 32 byte Ed25519 public key
pub struct PasetoAsymmetricPrivateKey<'a, Version, Purpose> {
  version: PhantomData<Version>,
  purpose: PhantomData<Purpose>,
  key: &'a [u8],
}

impl<'a, Version> From<&'a Key<64>> for PasetoAsymmetricPrivateKey<'a, Version, Public> {
  fn from(key: &'a Key<64>) -> Self {
    Self {
      version: PhantomData,
      purpose: PhantomData,
      key: key.as_ref(),
    }
  }
}

impl<'a, Version> TryFrom<&'a [u8]> for PasetoAsymmetricPrivateKey<'a, Version, Public> {
  type Error = PasetoError;
  fn try_from(key: &'a [u8]) -> Result<Self, Self::Error> {
    if key.len() != 64 {
      return Err(PasetoError::IncorrectSize);
    }
    Ok(Self {
      version: PhantomData,
      purpose: PhantomData,
      key,
    })
  }
}

impl<'a, Version, Purpose> AsRef<[u8]> for PasetoAsymmetricPrivateKey<'a, Version, Purpose> {
  fn as_ref(&self) -> &[u8] {
    self.key
  }
}
