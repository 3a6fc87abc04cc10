//! Secure stateless [PASETO: Platform-Agnostic Security Tokens](https://github.com/paseto-standard/paseto-spec)
//! version 4, together with the [PASERK](https://github.com/paseto-standard/paserk) `k4` key
//! serialization family.
//!
//! This crate is a type-driven implementation of the v4 PASETO protocol: symmetric
//! authenticated encryption (`v4.local`, XChaCha20 + BLAKE2b-MAC) and public-key
//! signatures (`v4.public`, Ed25519), plus the full set of `k4.*` PASERK operations
//! for serializing, identifying, wrapping, password-protecting, and sealing keys.
//!
//! The crate deliberately stops at the cryptographic core. Claims, JSON handling,
//! expiration policy, and replay mitigation belong to the caller; payloads and
//! footers are opaque bytes here.
//!
//! # Encrypting and decrypting tokens
//!
//! ```
//! use paseto4::core::*;
//!
//! let key = PasetoSymmetricKey::<V4, Local>::from(Key::<32>::try_new_random()?);
//! let nonce = Key::<32>::try_new_random()?;
//! let nonce = PasetoNonce::<V4, Local>::from(&nonce);
//!
//! let token = Paseto::<V4, Local>::builder()
//!   .set_payload(Payload::from("this is a secret message"))
//!   .try_encrypt(&key, &nonce)?;
//! // token is a String in the form: "v4.local.encoded-payload"
//!
//! let plaintext = Paseto::<V4, Local>::try_decrypt(&token, &key, None, None)?;
//! assert_eq!(plaintext, b"this is a secret message");
//! # Ok::<(),paseto4::core::PasetoError>(())
//! ```
//!
//! # Signing and verifying tokens
//!
//! ```
//! use paseto4::core::*;
//! use ed25519_dalek::SigningKey;
//!
//! let signing_key = SigningKey::from_bytes(&[0x42; 32]);
//! let keypair = Key::<64>::from(signing_key.to_keypair_bytes());
//! let private_key = PasetoAsymmetricPrivateKey::<V4, Public>::from(&keypair);
//! let public_bytes = Key::<32>::from(signing_key.verifying_key().to_bytes());
//! let public_key = PasetoAsymmetricPublicKey::<V4, Public>::from(&public_bytes);
//!
//! let token = Paseto::<V4, Public>::builder()
//!   .set_payload(Payload::from("this is a signed message"))
//!   .try_sign(&private_key)?;
//!
//! let message = Paseto::<V4, Public>::try_verify(&token, &public_key, None, None)?;
//! assert_eq!(message, b"this is a signed message");
//! # Ok::<(),paseto4::core::PasetoError>(())
//! ```
//!
//! # Serializing keys with PASERK
//!
//! ```
//! use paseto4::prelude::*;
//!
//! let key = PasetoSymmetricKey::<V4, Local>::from(Key::<32>::try_new_random()?);
//!
//! // plaintext serialization, only for keys that may travel in the clear
//! let paserk = key.to_paserk_string();
//! assert!(paserk.starts_with("k4.local."));
//!
//! // identifiers are safe to log or to place in token footers
//! let kid = key.encode_id();
//! assert!(kid.as_ref().starts_with("k4.lid."));
//! # Ok::<(),paseto4::core::PasetoError>(())
//! ```

pub mod core;
pub mod paserk;

pub mod prelude {
  pub use crate::core::{
    Footer, ImplicitAssertion, Key, Local, Paseto, PasetoAsymmetricPrivateKey,
    PasetoAsymmetricPublicKey, PasetoError, PasetoNonce, PasetoSymmetricKey, Payload, Public,
    UntrustedToken, V4,
  };
  pub use crate::paserk::{
    Argon2Params, EncodeId, FromPaserk, PaserkId, PaserkLocal, PaserkPublic, PaserkSecret,
    PieWrappedLocalKey, PieWrappedSecretKey, PwWrappedLocalKey, PwWrappedSecretKey, SealedKey,
    ToPaserk,
  };
}
