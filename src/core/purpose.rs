use crate::core::traits::*;
use std::fmt;
use std::fmt::Display;

/// Symmetric encryption
#[derive(Debug, Clone, Copy)]
pub struct Local(&'static str);
impl PurposeTrait for Local {}
impl Default for Local {
  fn default() -> Self {
    Self("local")
  }
}
impl AsRef<str> for Local {
  fn as_ref(&self) -> &str {
    self.0
  }
}
impl Display for Local {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// Asymmetric authentication (public-key signatures)
#[derive(Debug, Clone, Copy)]
pub struct Public(&'static str);
impl PurposeTrait for Public {}
impl Default for Public {
  fn default() -> Self {
    Self("public")
  }
}
impl AsRef<str> for Public {
  fn as_ref(&self) -> &str {
    self.0
  }
}
impl Display for Public {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}
