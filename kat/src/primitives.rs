//! Reference primitives.
//!
//! These are RustCrypto implementations wrapped in the [`Aead`] and
//! [`Hash`] call contracts, used as known-good targets for the drivers.
//!
//! [`Aead`]: crate::Aead
//! [`Hash`]: crate::Hash

#[cfg(feature = "aes-gcm")]
mod aes128gcm;
#[cfg(feature = "sha2")]
mod sha256;

#[cfg(feature = "aes-gcm")]
pub use self::aes128gcm::Aes128GcmKat;
#[cfg(feature = "sha2")]
pub use self::sha256::Sha256Kat;
