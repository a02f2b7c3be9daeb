use crate::primitive::{Aead, CryptoError};
use aes_gcm::{
    aead::{AeadInPlace, KeyInit},
    Aes128Gcm, Nonce, Tag,
};

const TAG_LEN: usize = 16;

/// AES-128-GCM.
#[derive(Debug, Default, Clone, Copy)]
pub struct Aes128GcmKat {
    _priv: (),
}

impl Aes128GcmKat {
    /// Create a new AES-128-GCM target.
    pub const fn new() -> Self {
        Aes128GcmKat { _priv: () }
    }

    fn cipher(npub: &[u8], k: &[u8]) -> Result<Aes128Gcm, CryptoError> {
        if npub.len() != Self::NPUB_BYTES {
            return Err(CryptoError);
        }
        Aes128Gcm::new_from_slice(k).map_err(|_| CryptoError)
    }
}

impl Aead for Aes128GcmKat {
    const NAME: &'static str = "aes128gcm";
    const KEY_BYTES: usize = 16;
    const NPUB_BYTES: usize = 12;
    const A_BYTES: usize = TAG_LEN;

    fn encrypt(
        &mut self,
        c: &mut [u8],
        m: &[u8],
        ad: &[u8],
        npub: &[u8],
        k: &[u8],
    ) -> Result<usize, CryptoError> {
        let cipher: Aes128Gcm = Self::cipher(npub, k)?;
        let clen: usize = m.len() + TAG_LEN;
        if c.len() < clen {
            return Err(CryptoError);
        }

        let (body, tag_out) = c[..clen].split_at_mut(m.len());
        body.copy_from_slice(m);
        let tag: Tag = cipher
            .encrypt_in_place_detached(Nonce::from_slice(npub), ad, body)
            .map_err(|_| CryptoError)?;
        tag_out.copy_from_slice(&tag);

        Ok(clen)
    }

    fn decrypt(
        &mut self,
        m: &mut [u8],
        c: &[u8],
        ad: &[u8],
        npub: &[u8],
        k: &[u8],
    ) -> Result<usize, CryptoError> {
        let cipher: Aes128Gcm = Self::cipher(npub, k)?;
        let mlen: usize = c.len().checked_sub(TAG_LEN).ok_or(CryptoError)?;
        if m.len() < mlen {
            return Err(CryptoError);
        }

        let (body, tag) = c.split_at(mlen);
        let out: &mut [u8] = &mut m[..mlen];
        out.copy_from_slice(body);
        cipher
            .decrypt_in_place_detached(Nonce::from_slice(npub), ad, out, Tag::from_slice(tag))
            .map_err(|_| {
                out.fill(0);
                CryptoError
            })?;

        Ok(mlen)
    }
}
