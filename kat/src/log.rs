//! Serial log sink.

use core::{fmt, time::Duration};
use embedded_hal::{blocking::delay::DelayUs, serial};
use heapless::Vec;

/// Size of the render buffer in bytes.
///
/// Longer messages are truncated.
pub const LOG_BUF_LEN: usize = 512;

/// Log errors.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum LogError {
    /// The transmitter did not accept all bytes within the timeout.
    Timeout,
    /// The serial peripheral reported an error.
    Serial,
}

/// Destination for KAT log lines.
pub trait LogSink {
    /// Render and emit a message.
    fn log(&mut self, args: fmt::Arguments<'_>) -> Result<(), LogError>;
}

impl<L: LogSink + ?Sized> LogSink for &mut L {
    #[inline]
    fn log(&mut self, args: fmt::Arguments<'_>) -> Result<(), LogError> {
        (**self).log(args)
    }
}

/// Blocking byte transmitter with a bounded wait.
pub trait Transmit {
    /// Transmit all bytes, giving up after `timeout`.
    fn transmit(&mut self, bytes: &[u8], timeout: Duration) -> Result<(), LogError>;
}

/// Log sink that renders into a fixed buffer and sends it over a
/// [`Transmit`] implementation.
#[derive(Debug)]
pub struct UartLog<TX> {
    tx: TX,
    timeout: Duration,
    buf: Vec<u8, LOG_BUF_LEN>,
}

impl<TX: Transmit> UartLog<TX> {
    /// Create a new log sink.
    pub fn new(tx: TX, timeout: Duration) -> Self {
        UartLog {
            tx,
            timeout,
            buf: Vec::new(),
        }
    }

    /// Free the transmitter.
    pub fn free(self) -> TX {
        self.tx
    }

    /// Bytes of the most recently rendered message.
    pub fn last_message(&self) -> &[u8] {
        &self.buf
    }
}

impl<TX: Transmit> LogSink for UartLog<TX> {
    fn log(&mut self, args: fmt::Arguments<'_>) -> Result<(), LogError> {
        self.buf.clear();
        // truncation is not an error
        let _ = fmt::write(&mut Truncate(&mut self.buf), args);
        self.tx.transmit(&self.buf, self.timeout)
    }
}

/// `fmt::Write` adapter that stops writing when the buffer is full.
struct Truncate<'a, const N: usize>(&'a mut Vec<u8, N>);

impl<const N: usize> fmt::Write for Truncate<'_, N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let room: usize = N - self.0.len();
        if s.len() <= room {
            // cannot fail, length checked above
            let _ = self.0.extend_from_slice(s.as_bytes());
            Ok(())
        } else {
            let mut end: usize = room;
            while !s.is_char_boundary(end) {
                end -= 1;
            }
            let _ = self.0.extend_from_slice(&s.as_bytes()[..end]);
            Err(fmt::Error)
        }
    }
}

/// [`Transmit`] over a non-blocking `embedded-hal` serial writer.
///
/// Each `WouldBlock` costs one microsecond of the timeout budget.
/// The budget covers the entire message including the final flush.
///
/// # Example
///
/// ```no_run
/// use core::time::Duration;
/// use lwc_kat::{SerialTx, Transmit};
/// # use lwc_kat::embedded_hal::{blocking::delay::DelayUs, serial};
/// # struct Uart;
/// # impl serial::Write<u8> for Uart {
/// #     type Error = ();
/// #     fn write(&mut self, _: u8) -> nb::Result<(), ()> { Ok(()) }
/// #     fn flush(&mut self) -> nb::Result<(), ()> { Ok(()) }
/// # }
/// # struct Delay;
/// # impl DelayUs<u32> for Delay { fn delay_us(&mut self, _: u32) {} }
///
/// let mut tx = SerialTx::new(Uart, Delay);
/// tx.transmit(b"Starting...\n", Duration::from_millis(100))?;
/// # Ok::<(), lwc_kat::LogError>(())
/// ```
#[derive(Debug)]
pub struct SerialTx<W, D> {
    writer: W,
    delay: D,
}

impl<W, D> SerialTx<W, D>
where
    W: serial::Write<u8>,
    D: DelayUs<u32>,
{
    /// Create a new transmitter.
    pub fn new(writer: W, delay: D) -> Self {
        SerialTx { writer, delay }
    }

    /// Free the writer and delay.
    pub fn free(self) -> (W, D) {
        (self.writer, self.delay)
    }

    fn poll<F>(&mut self, budget: &mut u64, mut f: F) -> Result<(), LogError>
    where
        F: FnMut(&mut W) -> nb::Result<(), W::Error>,
    {
        loop {
            match f(&mut self.writer) {
                Ok(()) => return Ok(()),
                Err(nb::Error::Other(_)) => return Err(LogError::Serial),
                Err(nb::Error::WouldBlock) => {
                    if *budget == 0 {
                        return Err(LogError::Timeout);
                    }
                    *budget -= 1;
                    self.delay.delay_us(1);
                }
            }
        }
    }
}

impl<W, D> Transmit for SerialTx<W, D>
where
    W: serial::Write<u8>,
    D: DelayUs<u32>,
{
    fn transmit(&mut self, bytes: &[u8], timeout: Duration) -> Result<(), LogError> {
        let mut budget: u64 = u64::try_from(timeout.as_micros()).unwrap_or(u64::MAX);
        for &byte in bytes {
            self.poll(&mut budget, |w| w.write(byte))?;
        }
        self.poll(&mut budget, |w| w.flush())
    }
}
