//! The **core** layer contains only paseto primitives for lightweight
//! encrypting / decrypting or signing / verification
//!
//! # Example usage
//! ```
//! use paseto4::core::*;
//!
//! let key = PasetoSymmetricKey::<V4, Local>::from(Key::<32>::try_from("707172737475767778797a7b7c7d7e7f808182838485868788898a8b8c8d8e8f")?);
//! let nonce = Key::<32>::try_from("0000000000000000000000000000000000000000000000000000000000000000")?;
//! // generate a random nonce with
//! // let nonce = Key::<32>::try_new_random()?;
//! let nonce = PasetoNonce::<V4, Local>::from(&nonce);
//!
//! let payload = Payload::from(r#"{"data":"this is a secret message","exp":"2022-01-01T00:00:00+00:00"}"#);
//!
//! //create a local v4 token
//! let token = Paseto::<V4, Local>::builder()
//!   .set_payload(payload)
//!   .try_encrypt(&key, &nonce)?;
//!
//! //now let's try to decrypt it
//! let plaintext = Paseto::<V4, Local>::try_decrypt(&token, &key, None, None)?;
//! assert_eq!(payload, plaintext);
//! # Ok::<(),anyhow::Error>(())
//! ```

mod common;
mod error;
mod footer;
mod header;
mod implicit_assertion;
mod key;
mod paseto;
mod paseto_impl;
mod payload;
mod purpose;
mod traits;
mod untrusted_token;
mod version;

pub use error::PasetoError;
pub use footer::Footer;
pub(crate) use header::Header;
pub use implicit_assertion::ImplicitAssertion;
pub use key::{Key, PasetoAsymmetricPrivateKey, PasetoAsymmetricPublicKey, PasetoNonce, PasetoSymmetricKey};
pub use paseto::Paseto;
pub use payload::Payload;
pub use purpose::{Local, Public};
pub(crate) use traits::Base64Encodable;
pub use traits::{PurposeTrait, VersionTrait};
pub use untrusted_token::UntrustedToken;
pub use version::V4;
