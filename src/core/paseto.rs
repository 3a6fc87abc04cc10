use crate::core::{
    Base64Encodable, Footer, Header, ImplicitAssertion, PasetoError, Payload, PurposeTrait, VersionTrait,
};

/// Used to build and encrypt / decrypt core PASETO tokens
///
/// Given a [Payload], optional [Footer] and optional [ImplicitAssertion],
/// returns an encrypted token when [Local] is specified as the purpose or a
/// signed token when [Public] is specified
///
/// [Local]: crate::core::Local
/// [Public]: crate::core::Public
///
/// # Example usage
/// ```
/// use paseto4::core::*;
///
/// let key = PasetoSymmetricKey::<V4, Local>::from(Key::<32>::try_from("707172737475767778797a7b7c7d7e7f808182838485868788898a8b8c8d8e8f")?);
/// let nonce = Key::<32>::try_from("0000000000000000000000000000000000000000000000000000000000000000")?;
/// let nonce = PasetoNonce::<V4, Local>::from(&nonce);
///
/// let payload = Payload::from(r#"{"data":"this is a secret message","exp":"2022-01-01T00:00:00+00:00"}"#);
///
/// //create a local v4 token
/// let token = Paseto::<V4, Local>::builder()
///   .set_payload(payload)
///   .try_encrypt(&key, &nonce)?;
///
/// //now let's try to decrypt it
/// let plaintext = Paseto::<V4, Local>::try_decrypt(&token, &key, None, None)?;
/// assert_eq!(payload, plaintext);
/// # Ok::<(),anyhow::Error>(())
/// ```
#[derive(Default, Copy, Clone)]
pub struct Paseto<'a, Version, Purpose>
where
    Version: VersionTrait,
    Purpose: PurposeTrait,
{
    pub(crate) header: Header<Version, Purpose>,
    pub(crate) payload: Payload<'a>,
    pub(crate) footer: Option<Footer<'a>>,
    pub(crate) implicit_assertion: Option<ImplicitAssertion<'a>>,
}

impl<'a, Version: VersionTrait, Purpose: PurposeTrait> Paseto<'a, Version, Purpose> {
    /// Returns a builder for creating a PASETO token
    pub fn builder() -> Paseto<'a, Version, Purpose> {
        Self { ..Default::default() }
    }

    /// Sets the payload for the token
    pub fn set_payload(&mut self, payload: Payload<'a>) -> &mut Self {
        self.payload = payload;
        self
    }

    /// Sets an optional footer for the token
    ///
    /// # Example usage
    /// ```
    /// # use paseto4::core::*;
    /// # let key = PasetoSymmetricKey::<V4, Local>::from(Key::<32>::try_new_random()?);
    /// # let nonce = Key::<32>::try_new_random()?;
    /// # let nonce = PasetoNonce::<V4, Local>::from(&nonce);
    /// // Set the footer with a Footer struct
    /// let token = Paseto::<V4, Local>::builder()
    ///   .set_payload(Payload::from("this is a secret message"))
    ///   .set_footer(Footer::from("Supah doopah!"))
    ///   .try_encrypt(&key, &nonce)?;
    ///
    /// # let plaintext = Paseto::<V4, Local>::try_decrypt(&token, &key, Footer::from("Supah doopah!"), None)?;
    /// # assert_eq!(plaintext, b"this is a secret message");
    /// # Ok::<(),anyhow::Error>(())
    /// ```
    pub fn set_footer(&mut self, footer: Footer<'a>) -> &mut Self {
        self.footer = Some(footer);
        self
    }

    /// Sets an optional [ImplicitAssertion] for the token
    pub fn set_implicit_assertion(&mut self, implicit_assertion: ImplicitAssertion<'a>) -> &mut Self {
        self.implicit_assertion = Some(implicit_assertion);
        self
    }

    /* BEGIN PRIVATE FUNCTIONS */
    pub(crate) fn format_token(&self, encrypted_payload: &str) -> String {
        let footer = self.footer.map(|f| f.encode());
        match footer {
            Some(f) => format!("{}{}.{}", self.header, encrypted_payload, f),
            None => format!("{}{}", self.header, encrypted_payload),
        }
    }

    pub(crate) fn parse_raw_token(
        raw_token: &'a str,
        footer: (impl Into<Option<Footer<'a>>> + Copy),
        v: &Version,
        p: &Purpose,
    ) -> Result<Vec<u8>, PasetoError> {
        //split the raw token into parts
        let potential_parts = raw_token.split('.').collect::<Vec<_>>();
        //inspect the parts
        match potential_parts.len() {
            length if !(3..=4).contains(&length) => {
                return Err(PasetoError::IncorrectSize);
            }
            4 => {
                //verify expected footer
                let footer = footer.into().unwrap_or_default();
                let found_footer = potential_parts[3];
                if !footer.constant_time_equals(found_footer) {
                    return Err(PasetoError::FooterInvalid);
                }
            }
            _ => {}
        }

        //grab the header
        let potential_header = format!("{}.{}.", potential_parts[0], potential_parts[1]);
        //we should be able to verify the header using the passed in Version and Purpose
        let expected_header = format!("{}.{}.", v, p);

        //verify the header
        if potential_header.ne(&expected_header) {
            return Err(PasetoError::WrongHeader);
        };

        let encrypted_payload = Payload::from(potential_parts[2]);
        Ok(encrypted_payload.decode()?)
    }
    /* END PRIVATE FUNCTIONS */
}
