mod authentication_key;
mod authentication_key_separator;
mod cipher_text;
mod encryption_key;
mod encryption_key_separator;
mod pre_authentication_encoding;
mod raw_payload;
mod tag;

pub(crate) use authentication_key::AuthenticationKey;
pub(crate) use authentication_key_separator::AuthenticationKeySeparator;
pub(crate) use cipher_text::CipherText;
pub(crate) use encryption_key::EncryptionKey;
pub(crate) use encryption_key_separator::EncryptionKeySeparator;
pub use pre_authentication_encoding::PreAuthenticationEncoding;
pub use raw_payload::RawPayload;
pub use tag::Tag;
