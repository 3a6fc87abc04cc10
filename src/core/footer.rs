use super::*;
use std::ops::Deref;

/// An optional footer for the token; opaque bytes, by convention JSON
#[derive(Default, Debug, Clone, Copy)]
pub struct Footer<'a>(&'a [u8]);

impl<'a> Base64Encodable<[u8]> for Footer<'a> {}

impl<'a> Deref for Footer<'a> {
  type Target = [u8];

  fn deref(&self) -> &'a Self::Target {
    self.0
  }
}

impl<'a> AsRef<[u8]> for Footer<'a> {
  fn as_ref(&self) -> &[u8] {
    self.0
  }
}
impl<'a> From<&'a str> for Footer<'a> {
  fn from(s: &'a str) -> Self {
    Self(s.as_bytes())
  }
}
impl<'a> From<&'a [u8]> for Footer<'a> {
  fn from(s: &'a [u8]) -> Self {
    Self(s)
  }
}
impl<'a> PartialEq for Footer<'a> {
  fn eq(&self, other: &Self) -> bool {
    self.0 == other.0
  }
}
impl<'a> Eq for Footer<'a> {}
