//! Known-answer tests and cycle-count benchmarks for lightweight AEAD and
//! hash primitives.
//!
//! The crate is split into the portable sweep logic and a small set of
//! capabilities that a board has to provide:
//!
//! * a 16-bit [`Counter`] with an overflow interrupt, wrapped by
//!   [`TickTimer`]
//! * a byte [`Transmit`] path for the UART, wrapped by [`UartLog`]
//!
//! A [`Bench`] owns both and is handed to one of the drivers,
//! [`run_aead`] or [`run_hash`], usually through a [`Suite`].
//!
//! # Example
//!
//! ```no_run
//! use lwc_kat::{
//!     genkat_benchmark, Bench, Config, Counter, OverflowCounter, Suite, TickTimer, Transmit,
//!     UartLog, primitives::Aes128GcmKat,
//! };
//! # struct Tim;
//! # impl Counter for Tim {
//! #     fn reset(&mut self) {}
//! #     fn arm(&mut self) {}
//! #     fn disarm(&mut self) {}
//! #     fn count(&self) -> u16 { 0 }
//! # }
//! # struct Uart;
//! # impl Transmit for Uart {
//! #     fn transmit(&mut self, _: &[u8], _: core::time::Duration) -> Result<(), lwc_kat::LogError> { Ok(()) }
//! # }
//!
//! static OVERFLOWS: OverflowCounter = OverflowCounter::new();
//!
//! let timer = TickTimer::new(Tim, &OVERFLOWS);
//! let config = Config::new("aes128gcm");
//! let log = UartLog::new(Uart, config.log_timeout);
//! let mut bench = Bench::new(timer, log, config);
//!
//! let mut suite: Suite<Aes128GcmKat, core::convert::Infallible> =
//!     Suite::Aead(Aes128GcmKat::new());
//! let code: i32 = genkat_benchmark(&mut suite, &mut bench);
//! ```
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

mod aead;
mod bench;
mod buffer;
mod error;
mod hash;
mod log;
mod primitive;
mod suite;
mod timer;

pub mod primitives;

pub use aead::{run_aead, MAX_ASSOCIATED_DATA_LENGTH, MAX_MESSAGE_LENGTH};
pub use bench::{Bench, Config, Sweep};
pub use buffer::init_buffer;
pub use error::{
    KatError, Step, KAT_CRYPTO_FAILURE, KAT_DATA_ERROR, KAT_FILE_OPEN_ERROR, KAT_SUCCESS,
};
pub use hash::{run_hash, MAX_HASH_MESSAGE_LENGTH};
pub use log::{LogError, LogSink, SerialTx, Transmit, UartLog, LOG_BUF_LEN};
pub use primitive::{
    Aead, CryptoError, Hash, MAX_A_BYTES, MAX_DIGEST_BYTES, MAX_KEY_BYTES, MAX_NPUB_BYTES,
};
pub use suite::{genkat_benchmark, Suite};
pub use timer::{Counter, CycleTimer, OverflowCounter, TickTimer, Ticks};

/// Embedded-hal trait abstractions.
pub use embedded_hal;
