use std::ops::Deref;

/// Unencrypted, authenticated context bytes which are bound into the token's
/// MAC or signature but never carried in the token itself
#[derive(Default, Debug, Copy, Clone)]
pub struct ImplicitAssertion<'a>(&'a [u8]);

impl<'a> Deref for ImplicitAssertion<'a> {
  type Target = [u8];

  fn deref(&self) -> &'a Self::Target {
    self.0
  }
}

impl<'a> AsRef<[u8]> for ImplicitAssertion<'a> {
  fn as_ref(&self) -> &[u8] {
    self.0
  }
}
impl<'a> From<&'a str> for ImplicitAssertion<'a> {
  fn from(s: &'a str) -> Self {
    Self(s.as_bytes())
  }
}
impl<'a> From<&'a [u8]> for ImplicitAssertion<'a> {
  fn from(s: &'a [u8]) -> Self {
    Self(s)
  }
}
impl<'a> PartialEq for ImplicitAssertion<'a> {
  fn eq(&self, other: &Self) -> bool {
    self.0 == other.0
  }
}
impl<'a> Eq for ImplicitAssertion<'a> {}
