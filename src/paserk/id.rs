//! Unique IDs for PASERK keys: `k4.lid.`, `k4.pid.`, `k4.sid.`
//!
//! <https://github.com/paseto-standard/paserk/blob/master/operations/ID.md>
//!
//! Identifiers are pure functions of the key and are safe to place in token
//! footers or logs for key lookup.
//!
//! ```
//! use paseto4::prelude::*;
//!
//! let local_key = PasetoSymmetricKey::<V4, Local>::from(Key::try_new_random()?);
//! let kid = local_key.encode_id();
//! assert!(kid.as_ref().starts_with("k4.lid."));
//! # Ok::<(),paseto4::core::PasetoError>(())
//! ```

use std::fmt;

use blake2::Blake2b;
use digest::consts::U33;
use digest::Digest;
use subtle::ConstantTimeEq;

use super::{encode_b64, K4_LOCAL_HEADER, K4_PUBLIC_HEADER, K4_SECRET_HEADER};
use crate::core::{Local, PasetoAsymmetricPrivateKey, PasetoAsymmetricPublicKey, PasetoSymmetricKey, Public, V4};

/// A `k4.lid.` / `k4.pid.` / `k4.sid.` key identifier
///
/// Equality comparisons run in constant time
#[derive(Debug, Clone)]
pub struct PaserkId(String);

impl AsRef<str> for PaserkId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PaserkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq for PaserkId {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_bytes().ct_eq(other.0.as_bytes()).into()
    }
}
impl Eq for PaserkId {}

impl PartialEq<str> for PaserkId {
    fn eq(&self, other: &str) -> bool {
        self.0.as_bytes().ct_eq(other.as_bytes()).into()
    }
}

/// Key ID encodings <https://github.com/paseto-standard/paserk/blob/master/operations/ID.md>
pub trait EncodeId {
    /// encode the key into it's key id
    fn encode_id(&self) -> PaserkId;
}

/// The identifier is the 264-bit BLAKE2b digest of the id prefix concatenated
/// with the key's full PASERK string, under the same id prefix.
fn encode(id_header: &str, key_header: &str, key: &[u8]) -> PaserkId {
    let digest = Blake2b::<U33>::new()
        .chain_update(id_header)
        .chain_update(key_header)
        .chain_update(encode_b64(key))
        .finalize();

    PaserkId(format!("{}{}", id_header, encode_b64(&digest)))
}

/// local-id <https://github.com/paseto-standard/paserk/blob/master/types/lid.md>
impl EncodeId for PasetoSymmetricKey<V4, Local> {
    fn encode_id(&self) -> PaserkId {
        encode("k4.lid.", K4_LOCAL_HEADER, self.as_ref())
    }
}

/// public-id <https://github.com/paseto-standard/paserk/blob/master/types/pid.md>
impl EncodeId for PasetoAsymmetricPublicKey<'_, V4, Public> {
    fn encode_id(&self) -> PaserkId {
        encode("k4.pid.", K4_PUBLIC_HEADER, self.as_ref())
    }
}

/// secret-id <https://github.com/paseto-standard/paserk/blob/master/types/sid.md>
impl EncodeId for PasetoAsymmetricPrivateKey<'_, V4, Public> {
    fn encode_id(&self) -> PaserkId {
        encode("k4.sid.", K4_SECRET_HEADER, self.as_ref())
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::core::Key;

    #[test]
    fn ids_are_deterministic() {
        let key = PasetoSymmetricKey::<V4, Local>::from(Key::from(b"wubbalubbadubdubwubbalubbadubdub"));
        assert_eq!(key.encode_id(), key.encode_id());
    }

    #[test]
    fn different_keys_have_different_ids() {
        let key1 = PasetoSymmetricKey::<V4, Local>::from(Key::from(b"wubbalubbadubdubwubbalubbadubdub"));
        let key2 = PasetoSymmetricKey::<V4, Local>::from(Key::from(b"different-key-different-keyXXXXZ"));
        assert_ne!(key1.encode_id(), key2.encode_id());
    }

    #[test]
    fn id_is_264_bits_under_the_prefix() {
        let key = PasetoSymmetricKey::<V4, Local>::from(Key::from(b"wubbalubbadubdubwubbalubbadubdub"));
        let id = key.encode_id();
        let encoded = id.as_ref().strip_prefix("k4.lid.").expect("lid prefix");
        // 33 bytes of digest is 44 base64url characters
        assert_eq!(encoded.len(), 44);
    }
}
