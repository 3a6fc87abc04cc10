use std::array::TryFromSliceError;
use thiserror::Error;

/// Potential errors from paseto and paserk operations
#[derive(Debug, Error)]
pub enum PasetoError {
  ///A general, unspecified (for security reasons) cryption error
  #[error("An unspecified cryption error occured")]
  Cryption,
  ///A key was not in the expected format
  #[error("Key was not in the correct format")]
  InvalidKey,
  ///An unspecified error from the system random source
  #[error("An unspecified cipher error occurred")]
  Cipher {
    ///Surfaces unspecified errors from ring
    #[from]
    source: ring::error::Unspecified,
  },
  ///An Ed25519 key parsing error
  #[error("An unspecified cipher error occurred")]
  Ed25519 {
    ///Surfaces key and signature parse errors from ed25519-dalek
    #[from]
    source: ed25519_dalek::ed25519::Error,
  },
  ///A BLAKE2b key length error
  #[error("An unspecified cipher error occurred")]
  InvalidLength {
    ///Surfaced from the blake2 crate
    #[from]
    source: blake2::digest::InvalidLength,
  },
  ///Occurs when a signature fails verification
  #[error("The token signature could not be verified")]
  InvalidSignature,
  #[error("A slice conversion error occurred")]
  TryFromSlice {
    ///Surfaces errors from slice conversion attempts
    #[from]
    source: TryFromSliceError,
  },
  ///Occurs when an untrusted token string is unable to be parsed into its constituent parts
  ///or when a fixed-length field has the wrong length
  #[error("This string has an incorrect number of parts and cannot be parsed into a token")]
  IncorrectSize,
  ///Occurs when an incorrect header is provided on an untrusted token or key string
  #[error("The token header is invalid")]
  WrongHeader,
  ///Occurs when an incorrect footer was passed in an attempt to parse an untrusted token string
  #[error("The provided footer is invalid")]
  FooterInvalid,
  ///Occurs when a base64 encoded payload cannot be decoded
  #[error("A base64 decode error occurred")]
  PayloadBase64Decode {
    ///Surfaced from the base64 crate
    #[from]
    source: base64::DecodeError,
  },
  ///Occurs when Argon2id cost parameters are zero, out of range, or not a
  ///whole number of KiB
  #[error("The Argon2id cost parameters are out of range")]
  InvalidArgonParams,
  ///A password-based key derivation error
  #[error("A key derivation error occurred")]
  KeyDerivation {
    ///Surfaced from the argon2 crate
    #[from]
    source: argon2::Error,
  },
}
