mod keys;
mod paseto_asymmetric_private_key;
mod paseto_asymmetric_public_key;
mod paseto_nonce;
mod paseto_symmetric_key;

pub use keys::Key;
pub use paseto_asymmetric_private_key::PasetoAsymmetricPrivateKey;
pub use paseto_asymmetric_public_key::PasetoAsymmetricPublicKey;
pub use paseto_nonce::PasetoNonce;
pub use paseto_symmetric_key::PasetoSymmetricKey;
