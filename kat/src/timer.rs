//! Cycle timer.
//!
//! The hardware provides a 16-bit counter that raises an interrupt every
//! time it wraps around.
//! The interrupt handler bumps an [`OverflowCounter`], and [`TickTimer`]
//! combines the two into a 32-bit [`Ticks`] value.
//!
//! # Example
//!
//! ```no_run
//! use lwc_kat::{Counter, CycleTimer, OverflowCounter, TickTimer, Ticks};
//! # struct Tim;
//! # impl Counter for Tim {
//! #     fn reset(&mut self) {}
//! #     fn arm(&mut self) {}
//! #     fn disarm(&mut self) {}
//! #     fn count(&self) -> u16 { 0 }
//! # }
//!
//! static OVERFLOWS: OverflowCounter = OverflowCounter::new();
//!
//! // call this from the timer update interrupt
//! fn on_update_irq() {
//!     OVERFLOWS.on_overflow();
//! }
//!
//! let mut timer = TickTimer::new(Tim, &OVERFLOWS);
//! timer.start();
//! // ... code under test
//! let elapsed: Ticks = timer.end();
//! ```

use core::sync::atomic::{AtomicU32, Ordering::Relaxed};

/// 16-bit hardware counter with an overflow interrupt.
pub trait Counter {
    /// Stop the counter, set the count to zero, and discard any pending
    /// overflow.
    fn reset(&mut self);

    /// Start counting with the overflow interrupt enabled.
    fn arm(&mut self);

    /// Stop counting and disable the overflow interrupt.
    fn disarm(&mut self);

    /// Raw counter register value.
    fn count(&self) -> u16;
}

/// Number of counter wraparounds since the last [`TickTimer::start`].
///
/// This is the only state shared with an interrupt handler.
/// There is exactly one writer at any time, the interrupt handler while the
/// counter is armed, or [`clear`](Self::clear) while it is disarmed, so plain
/// loads and stores are sufficient and work on cores without atomic
/// read-modify-write instructions.
#[derive(Debug)]
pub struct OverflowCounter(AtomicU32);

impl OverflowCounter {
    /// Create a new counter at zero.
    pub const fn new() -> OverflowCounter {
        OverflowCounter(AtomicU32::new(0))
    }

    /// Record one counter wraparound.
    ///
    /// Call this from the timer overflow interrupt.
    #[inline]
    pub fn on_overflow(&self) {
        let n: u32 = self.0.load(Relaxed);
        self.0.store(n.wrapping_add(1), Relaxed)
    }

    /// Reset the tally to zero.
    #[inline]
    pub fn clear(&self) {
        self.0.store(0, Relaxed)
    }

    /// Current tally.
    #[inline]
    pub fn get(&self) -> u32 {
        self.0.load(Relaxed)
    }
}

impl Default for OverflowCounter {
    fn default() -> Self {
        OverflowCounter::new()
    }
}

/// Elapsed time in counter ticks.
///
/// The upper 16 bits are the overflow tally, the lower 16 bits are the
/// counter register.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct Ticks(u32);

impl Ticks {
    /// Zero ticks.
    pub const ZERO: Ticks = Ticks(0);

    /// Combine an overflow tally and a counter value.
    ///
    /// Overflow bits beyond the 16th are discarded.
    ///
    /// # Example
    ///
    /// ```
    /// use lwc_kat::Ticks;
    ///
    /// let ticks: Ticks = Ticks::from_parts(2, 0x1234);
    /// assert_eq!(ticks.raw(), 0x0002_1234);
    /// ```
    pub const fn from_parts(overflows: u32, count: u16) -> Ticks {
        Ticks((overflows << 16) | (count as u32))
    }

    /// Create a tick count from a raw value.
    pub const fn from_raw(raw: u32) -> Ticks {
        Ticks(raw)
    }

    /// Raw tick count.
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Overflow tally part of the tick count.
    pub const fn overflows(self) -> u16 {
        (self.0 >> 16) as u16
    }

    /// Counter register part of the tick count.
    pub const fn count(self) -> u16 {
        self.0 as u16
    }

    /// Convert to microseconds given the number of ticks per microsecond.
    ///
    /// A divisor of zero is treated as one.
    ///
    /// # Example
    ///
    /// ```
    /// use lwc_kat::Ticks;
    ///
    /// assert_eq!(Ticks::from_raw(160).as_micros(16), 10);
    /// ```
    pub const fn as_micros(self, ticks_per_us: u32) -> u32 {
        if ticks_per_us == 0 {
            self.0
        } else {
            self.0 / ticks_per_us
        }
    }
}

impl From<Ticks> for u32 {
    fn from(ticks: Ticks) -> Self {
        ticks.0
    }
}

/// A start/end timer.
///
/// Calls must strictly alternate, starting with [`start`](Self::start).
/// Nesting is not supported.
pub trait CycleTimer {
    /// Reset and arm the timer.
    fn start(&mut self);

    /// Disarm the timer and return the elapsed ticks since
    /// [`start`](Self::start).
    fn end(&mut self) -> Ticks;
}

/// Extended tick timer built from a [`Counter`] and an
/// [`OverflowCounter`].
#[derive(Debug)]
pub struct TickTimer<'a, C> {
    counter: C,
    overflows: &'a OverflowCounter,
}

impl<'a, C: Counter> TickTimer<'a, C> {
    /// Create a new tick timer.
    ///
    /// The counter is reset and left disarmed.
    pub fn new(mut counter: C, overflows: &'a OverflowCounter) -> Self {
        counter.reset();
        overflows.clear();
        TickTimer { counter, overflows }
    }

    /// Free the counter from the timer.
    pub fn free(self) -> C {
        self.counter
    }

    /// Borrow the underlying counter.
    pub fn counter(&self) -> &C {
        &self.counter
    }
}

impl<C: Counter> CycleTimer for TickTimer<'_, C> {
    fn start(&mut self) {
        self.overflows.clear();
        self.counter.reset();
        self.counter.arm();
    }

    fn end(&mut self) -> Ticks {
        self.counter.disarm();
        Ticks::from_parts(self.overflows.get(), self.counter.count())
    }
}
