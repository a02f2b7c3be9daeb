use crate::primitive::{CryptoError, Hash};
use sha2::{Digest, Sha256};

/// SHA-256.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sha256Kat {
    _priv: (),
}

impl Sha256Kat {
    /// Create a new SHA-256 target.
    pub const fn new() -> Self {
        Sha256Kat { _priv: () }
    }
}

impl Hash for Sha256Kat {
    const NAME: &'static str = "sha256";
    const BYTES: usize = 32;

    fn hash(&mut self, out: &mut [u8], m: &[u8]) -> Result<(), CryptoError> {
        if out.len() != Self::BYTES {
            return Err(CryptoError);
        }
        out.copy_from_slice(&Sha256::digest(m));
        Ok(())
    }
}
