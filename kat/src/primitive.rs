//! Call contract for the primitive under test.

use core::convert::Infallible;

/// Maximum supported key size in bytes.
pub const MAX_KEY_BYTES: usize = 32;
/// Maximum supported public nonce size in bytes.
pub const MAX_NPUB_BYTES: usize = 32;
/// Maximum supported ciphertext expansion (tag) in bytes.
pub const MAX_A_BYTES: usize = 32;
/// Maximum supported digest size in bytes.
pub const MAX_DIGEST_BYTES: usize = 64;

/// Opaque failure reported by a primitive.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct CryptoError;

/// Authenticated encryption with associated data.
///
/// There is no secret message number; implementations that expect one get
/// none.
pub trait Aead {
    /// Algorithm name, printed in the banner.
    const NAME: &'static str;
    /// Key size in bytes.
    const KEY_BYTES: usize;
    /// Public nonce size in bytes.
    const NPUB_BYTES: usize;
    /// Ciphertext expansion in bytes.
    const A_BYTES: usize;

    /// Encrypt `m` with associated data `ad` into `c`.
    ///
    /// `c` holds at least `m.len() + A_BYTES` bytes.
    /// Returns the ciphertext length.
    fn encrypt(
        &mut self,
        c: &mut [u8],
        m: &[u8],
        ad: &[u8],
        npub: &[u8],
        k: &[u8],
    ) -> Result<usize, CryptoError>;

    /// Decrypt and verify `c` with associated data `ad` into `m`.
    ///
    /// Returns the plaintext length.
    fn decrypt(
        &mut self,
        m: &mut [u8],
        c: &[u8],
        ad: &[u8],
        npub: &[u8],
        k: &[u8],
    ) -> Result<usize, CryptoError>;
}

/// Hash function.
pub trait Hash {
    /// Algorithm name, printed in the banner.
    const NAME: &'static str;
    /// Digest size in bytes.
    const BYTES: usize;

    /// Hash `m` into `out`, which is exactly `BYTES` long.
    fn hash(&mut self, out: &mut [u8], m: &[u8]) -> Result<(), CryptoError>;
}

impl<A: Aead + ?Sized> Aead for &mut A {
    const NAME: &'static str = A::NAME;
    const KEY_BYTES: usize = A::KEY_BYTES;
    const NPUB_BYTES: usize = A::NPUB_BYTES;
    const A_BYTES: usize = A::A_BYTES;

    #[inline]
    fn encrypt(
        &mut self,
        c: &mut [u8],
        m: &[u8],
        ad: &[u8],
        npub: &[u8],
        k: &[u8],
    ) -> Result<usize, CryptoError> {
        (**self).encrypt(c, m, ad, npub, k)
    }

    #[inline]
    fn decrypt(
        &mut self,
        m: &mut [u8],
        c: &[u8],
        ad: &[u8],
        npub: &[u8],
        k: &[u8],
    ) -> Result<usize, CryptoError> {
        (**self).decrypt(m, c, ad, npub, k)
    }
}

impl<H: Hash + ?Sized> Hash for &mut H {
    const NAME: &'static str = H::NAME;
    const BYTES: usize = H::BYTES;

    #[inline]
    fn hash(&mut self, out: &mut [u8], m: &[u8]) -> Result<(), CryptoError> {
        (**self).hash(out, m)
    }
}

/// Placeholder for a build without an AEAD.
impl Aead for Infallible {
    const NAME: &'static str = "";
    const KEY_BYTES: usize = 0;
    const NPUB_BYTES: usize = 0;
    const A_BYTES: usize = 0;

    fn encrypt(
        &mut self,
        _: &mut [u8],
        _: &[u8],
        _: &[u8],
        _: &[u8],
        _: &[u8],
    ) -> Result<usize, CryptoError> {
        match *self {}
    }

    fn decrypt(
        &mut self,
        _: &mut [u8],
        _: &[u8],
        _: &[u8],
        _: &[u8],
        _: &[u8],
    ) -> Result<usize, CryptoError> {
        match *self {}
    }
}

/// Placeholder for a build without a hash.
impl Hash for Infallible {
    const NAME: &'static str = "";
    const BYTES: usize = 0;

    fn hash(&mut self, _: &mut [u8], _: &[u8]) -> Result<(), CryptoError> {
        match *self {}
    }
}
