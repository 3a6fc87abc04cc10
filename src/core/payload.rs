use super::traits::Base64Encodable;
use std::ops::Deref;

/// The token payload; opaque bytes owned by the application
#[derive(Default, Debug, Clone, Copy)]
pub struct Payload<'a>(&'a [u8]);
impl Base64Encodable<[u8]> for Payload<'_> {}

impl<'a> Deref for Payload<'a> {
  type Target = [u8];

  fn deref(&self) -> &'a Self::Target {
    self.0
  }
}

impl AsRef<[u8]> for Payload<'_> {
  fn as_ref(&self) -> &[u8] {
    self.0
  }
}

impl<'a> From<&'a str> for Payload<'a> {
  fn from(s: &'a str) -> Self {
    Self(s.as_bytes())
  }
}

impl<'a> From<&'a [u8]> for Payload<'a> {
  fn from(s: &'a [u8]) -> Self {
    Self(s)
  }
}

impl<R> PartialEq<R> for Payload<'_>
where
  R: AsRef<[u8]>,
{
  fn eq(&self, other: &R) -> bool {
    self.as_ref() == other.as_ref()
  }
}
