#![allow(dead_code)]

use core::fmt;
use lwc_kat::{
    Aead, Bench, Config, Counter, CryptoError, CycleTimer, Hash, LogError, LogSink, Ticks,
};

/// Timer that advances by a fixed number of ticks per measurement.
#[derive(Debug, Default)]
pub struct StepTimer {
    pub step: u32,
    pub now: u32,
    pub started: bool,
    pub measurements: usize,
}

impl StepTimer {
    pub fn new(step: u32) -> Self {
        StepTimer {
            step,
            ..Default::default()
        }
    }
}

impl CycleTimer for StepTimer {
    fn start(&mut self) {
        assert!(!self.started, "nested start");
        self.started = true;
    }

    fn end(&mut self) -> Ticks {
        assert!(self.started, "end without start");
        self.started = false;
        self.measurements += 1;
        self.now = self.now.wrapping_add(self.step);
        Ticks::from_raw(self.step)
    }
}

/// Counter register stand-in.
#[derive(Debug, Default)]
pub struct FakeCounter {
    pub value: u16,
    pub armed: bool,
    pub resets: usize,
}

impl Counter for FakeCounter {
    fn reset(&mut self) {
        self.resets += 1;
        self.armed = false;
        self.value = 0;
    }

    fn arm(&mut self) {
        self.armed = true;
    }

    fn disarm(&mut self) {
        self.armed = false;
    }

    fn count(&self) -> u16 {
        self.value
    }
}

/// Log sink that keeps every message.
#[derive(Debug, Default)]
pub struct Capture {
    pub msgs: Vec<String>,
}

impl Capture {
    pub fn text(&self) -> String {
        self.msgs.concat()
    }

    pub fn count_prefix(&self, prefix: &str) -> usize {
        self.msgs.iter().filter(|m| m.starts_with(prefix)).count()
    }
}

impl LogSink for Capture {
    fn log(&mut self, args: fmt::Arguments<'_>) -> Result<(), LogError> {
        self.msgs.push(args.to_string());
        Ok(())
    }
}

pub fn bench(algorithm: &'static str) -> Bench<StepTimer, Capture> {
    let config: Config = Config::new(algorithm).set_optimization("-O3");
    Bench::new(StepTimer::new(160), Capture::default(), config)
}

/// Makes encryption fail for one length combination.
pub struct FailEncryptAt<A> {
    pub inner: A,
    pub mlen: usize,
    pub adlen: usize,
}

impl<A: Aead> Aead for FailEncryptAt<A> {
    const NAME: &'static str = A::NAME;
    const KEY_BYTES: usize = A::KEY_BYTES;
    const NPUB_BYTES: usize = A::NPUB_BYTES;
    const A_BYTES: usize = A::A_BYTES;

    fn encrypt(
        &mut self,
        c: &mut [u8],
        m: &[u8],
        ad: &[u8],
        npub: &[u8],
        k: &[u8],
    ) -> Result<usize, CryptoError> {
        if (m.len(), ad.len()) == (self.mlen, self.adlen) {
            Err(CryptoError)
        } else {
            self.inner.encrypt(c, m, ad, npub, k)
        }
    }

    fn decrypt(
        &mut self,
        m: &mut [u8],
        c: &[u8],
        ad: &[u8],
        npub: &[u8],
        k: &[u8],
    ) -> Result<usize, CryptoError> {
        self.inner.decrypt(m, c, ad, npub, k)
    }
}

/// How [`CorruptDecryptAt`] corrupts its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corruption {
    /// Flip a bit in the first recovered byte.
    FlipByte,
    /// Report one byte less than recovered.
    Truncate,
    /// Report failure.
    Fail,
}

/// Corrupts decryption for one length combination.
pub struct CorruptDecryptAt<A> {
    pub inner: A,
    pub mlen: usize,
    pub adlen: usize,
    pub how: Corruption,
}

impl<A: Aead> Aead for CorruptDecryptAt<A> {
    const NAME: &'static str = A::NAME;
    const KEY_BYTES: usize = A::KEY_BYTES;
    const NPUB_BYTES: usize = A::NPUB_BYTES;
    const A_BYTES: usize = A::A_BYTES;

    fn encrypt(
        &mut self,
        c: &mut [u8],
        m: &[u8],
        ad: &[u8],
        npub: &[u8],
        k: &[u8],
    ) -> Result<usize, CryptoError> {
        self.inner.encrypt(c, m, ad, npub, k)
    }

    fn decrypt(
        &mut self,
        m: &mut [u8],
        c: &[u8],
        ad: &[u8],
        npub: &[u8],
        k: &[u8],
    ) -> Result<usize, CryptoError> {
        let mlen: usize = self.inner.decrypt(m, c, ad, npub, k)?;
        if (mlen, ad.len()) != (self.mlen, self.adlen) {
            return Ok(mlen);
        }
        match self.how {
            Corruption::FlipByte => {
                m[0] ^= 0x01;
                Ok(mlen)
            }
            Corruption::Truncate => Ok(mlen.wrapping_sub(1)),
            Corruption::Fail => Err(CryptoError),
        }
    }
}

/// Reports a ciphertext length that cannot fit the buffer.
pub struct OversizedCiphertext<A>(pub A);

impl<A: Aead> Aead for OversizedCiphertext<A> {
    const NAME: &'static str = A::NAME;
    const KEY_BYTES: usize = A::KEY_BYTES;
    const NPUB_BYTES: usize = A::NPUB_BYTES;
    const A_BYTES: usize = A::A_BYTES;

    fn encrypt(
        &mut self,
        c: &mut [u8],
        m: &[u8],
        ad: &[u8],
        npub: &[u8],
        k: &[u8],
    ) -> Result<usize, CryptoError> {
        self.0.encrypt(c, m, ad, npub, k)?;
        Ok(c.len() + 1)
    }

    fn decrypt(
        &mut self,
        m: &mut [u8],
        c: &[u8],
        ad: &[u8],
        npub: &[u8],
        k: &[u8],
    ) -> Result<usize, CryptoError> {
        self.0.decrypt(m, c, ad, npub, k)
    }
}

/// Records every hashed length and optionally fails at one.
pub struct RecordingHash<H> {
    pub inner: H,
    pub fail_at: Option<usize>,
    pub lens: Vec<usize>,
}

impl<H> RecordingHash<H> {
    pub fn new(inner: H) -> Self {
        RecordingHash {
            inner,
            fail_at: None,
            lens: Vec::new(),
        }
    }
}

impl<H: Hash> Hash for RecordingHash<H> {
    const NAME: &'static str = H::NAME;
    const BYTES: usize = H::BYTES;

    fn hash(&mut self, out: &mut [u8], m: &[u8]) -> Result<(), CryptoError> {
        self.lens.push(m.len());
        if self.fail_at == Some(m.len()) {
            Err(CryptoError)
        } else {
            self.inner.hash(out, m)
        }
    }
}

/// Decrypts only pairs without associated data and otherwise reports the
/// plaintext length without writing the output buffer.
pub struct LazyDecrypt<A>(pub A);

impl<A: Aead> Aead for LazyDecrypt<A> {
    const NAME: &'static str = A::NAME;
    const KEY_BYTES: usize = A::KEY_BYTES;
    const NPUB_BYTES: usize = A::NPUB_BYTES;
    const A_BYTES: usize = A::A_BYTES;

    fn encrypt(
        &mut self,
        c: &mut [u8],
        m: &[u8],
        ad: &[u8],
        npub: &[u8],
        k: &[u8],
    ) -> Result<usize, CryptoError> {
        self.0.encrypt(c, m, ad, npub, k)
    }

    fn decrypt(
        &mut self,
        m: &mut [u8],
        c: &[u8],
        ad: &[u8],
        npub: &[u8],
        k: &[u8],
    ) -> Result<usize, CryptoError> {
        if ad.is_empty() {
            self.0.decrypt(m, c, ad, npub, k)
        } else {
            Ok(c.len() - A::A_BYTES)
        }
    }
}
