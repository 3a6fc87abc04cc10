//! [PASERK](https://github.com/paseto-standard/paserk) (Platform-Agnostic
//! Serialized Keys) for PASETO v4.
//!
//! Every PASERK is a string of the form `k4.<type>.<base64url data>`. The
//! types implemented here:
//!
//! | Prefix | Operation |
//! |---|---|
//! | `k4.local.` / `k4.public.` / `k4.secret.` | plaintext key serialization ([ToPaserk], [FromPaserk]) |
//! | `k4.lid.` / `k4.pid.` / `k4.sid.` | key identifiers ([EncodeId]) |
//! | `k4.local-wrap.pie.` / `k4.secret-wrap.pie.` | symmetric key wrapping ([PieWrappedLocalKey], [PieWrappedSecretKey]) |
//! | `k4.local-pw.` / `k4.secret-pw.` | password-based key wrapping ([PwWrappedLocalKey], [PwWrappedSecretKey]) |
//! | `k4.seal.` | asymmetric sealing to an Ed25519 recipient ([SealedKey]) |
//!
//! # Example
//!
//! ```
//! use paseto4::prelude::*;
//!
//! let key = PasetoSymmetricKey::<V4, Local>::from(Key::<32>::try_new_random()?);
//! let wrapping_key = PasetoSymmetricKey::<V4, Local>::from(Key::<32>::try_new_random()?);
//!
//! let wrapped = PieWrappedLocalKey::try_wrap(&key, &wrapping_key)?;
//! let serialized = wrapped.to_string();
//! assert!(serialized.starts_with("k4.local-wrap.pie."));
//!
//! let parsed: PieWrappedLocalKey = serialized.parse()?;
//! let unwrapped = parsed.try_unwrap(&wrapping_key)?;
//! assert_eq!(key.as_ref(), unwrapped.as_ref());
//! # Ok::<(),paseto4::core::PasetoError>(())
//! ```

mod id;
mod plaintext;
mod pw;
mod seal;
mod wrap;

pub use id::{EncodeId, PaserkId};
pub use plaintext::{FromPaserk, PaserkLocal, PaserkPublic, PaserkSecret, ToPaserk};
pub use pw::{Argon2Params, PwWrappedLocalKey, PwWrappedSecretKey};
pub use seal::SealedKey;
pub use wrap::{PieWrappedLocalKey, PieWrappedSecretKey};

use crate::core::PasetoError;
use base64::prelude::*;
use chacha20::cipher::{KeyIvInit, StreamCipher};
use chacha20::{XChaCha20, XNonce};
use zeroize::Zeroizing;

pub(crate) static K4_LOCAL_HEADER: &str = "k4.local.";
pub(crate) static K4_PUBLIC_HEADER: &str = "k4.public.";
pub(crate) static K4_SECRET_HEADER: &str = "k4.secret.";

pub(crate) fn encode_b64(data: &[u8]) -> String {
    BASE64_URL_SAFE_NO_PAD.encode(data)
}

pub(crate) fn decode_b64(data: &str) -> Result<Vec<u8>, PasetoError> {
    Ok(BASE64_URL_SAFE_NO_PAD.decode(data)?)
}

/// Applies the XChaCha20 keystream to `data`. The returned buffer is zeroized
/// on drop since it holds plaintext key material on the decrypt path.
pub(crate) fn xchacha20_stream(key: &[u8], nonce: &[u8], data: &[u8]) -> Zeroizing<Vec<u8>> {
    let mut buffer = Zeroizing::new(data.to_vec());
    let mut cipher = XChaCha20::new(chacha20::Key::from_slice(key), XNonce::from_slice(nonce));
    cipher.apply_keystream(buffer.as_mut_slice());
    buffer
}
