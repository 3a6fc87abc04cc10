use super::*;
use base64::prelude::*;

/// A PASETO token that has been structurally parsed but **NOT** cryptographically verified.
///
/// Provides access to footer information before verification, which is needed
/// for key rotation scenarios where the footer carries a key identifier (for
/// example a PASERK `k4.lid.` string) used to select the verification key.
///
/// All data returned from this struct is untrusted: use it to look up keys,
/// never for security decisions, and verify the token afterwards with
/// [Paseto::try_decrypt] or [Paseto::try_verify].
///
/// [Paseto::try_decrypt]: crate::core::Paseto::try_decrypt
/// [Paseto::try_verify]: crate::core::Paseto::try_verify
///
/// ```
/// # use paseto4::core::*;
/// # fn example() -> Result<(), PasetoError> {
/// let token = "v4.local.payload.eyJraWQiOiJrZXktMSJ9"; // footer: {"kid":"key-1"}
/// let untrusted = UntrustedToken::try_parse(token)?;
///
/// assert_eq!(untrusted.version(), "v4");
/// assert_eq!(untrusted.purpose(), "local");
/// assert_eq!(untrusted.try_decoded_footer()?, Some(br#"{"kid":"key-1"}"#.to_vec()));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct UntrustedToken<'a> {
    version: &'a str,
    purpose: &'a str,
    footer: Option<&'a str>,
}

impl<'a> UntrustedToken<'a> {
    /// Parses a PASETO token string into its structural components without any
    /// cryptographic verification.
    ///
    /// # Errors
    ///
    /// Returns [`PasetoError::IncorrectSize`] if the token does not contain
    /// exactly 3 or 4 dot-separated parts.
    pub fn try_parse(token: &'a str) -> Result<Self, PasetoError> {
        let parts: Vec<&str> = token.split('.').collect();

        // PASETO tokens must have exactly 3 parts (no footer) or 4 parts (with footer)
        let parts_len = parts.len();
        if !(3..=4).contains(&parts_len) {
            return Err(PasetoError::IncorrectSize);
        }

        let version = parts.first().ok_or(PasetoError::IncorrectSize)?;
        let purpose = parts.get(1).ok_or(PasetoError::IncorrectSize)?;
        let footer = if parts_len == 4 {
            Some(*parts.get(3).ok_or(PasetoError::IncorrectSize)?)
        } else {
            None
        };

        Ok(Self {
            version,
            purpose,
            footer,
        })
    }

    /// Returns the (untrusted) PASETO version string, e.g. "v4"
    pub fn version(&self) -> &'a str {
        self.version
    }

    /// Returns the (untrusted) PASETO purpose string, e.g. "local"
    pub fn purpose(&self) -> &'a str {
        self.purpose
    }

    /// Returns the raw base64url footer segment, if one is present
    pub fn footer(&self) -> Option<&'a str> {
        self.footer
    }

    /// Decodes the footer segment into (untrusted) bytes, if one is present
    pub fn try_decoded_footer(&self) -> Result<Option<Vec<u8>>, PasetoError> {
        match self.footer {
            Some(footer) => Ok(Some(BASE64_URL_SAFE_NO_PAD.decode(footer)?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn parses_a_footerless_token() {
        let untrusted = UntrustedToken::try_parse("v4.public.cGF5bG9hZA").expect("structurally valid");
        assert_eq!(untrusted.version(), "v4");
        assert_eq!(untrusted.purpose(), "public");
        assert!(untrusted.footer().is_none());
    }

    #[test]
    fn rejects_too_few_segments() {
        assert!(UntrustedToken::try_parse("v4.local").is_err());
    }

    #[test]
    fn rejects_too_many_segments() {
        assert!(UntrustedToken::try_parse("v4.local.a.b.c").is_err());
    }
}
