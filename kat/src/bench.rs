use crate::{
    log::LogSink,
    timer::{CycleTimer, Ticks},
};
use core::{fmt, iter::StepBy, ops::RangeInclusive, time::Duration};

/// Benchmark configuration.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Config {
    /// Algorithm name for the banner.
    pub algorithm: &'static str,
    /// Optimization level for the banner.
    pub optimization: &'static str,
    /// Timer ticks per microsecond.
    pub ticks_per_us: u32,
    /// Bounded wait for each log line.
    pub log_timeout: Duration,
}

impl Config {
    /// Default timer ticks per microsecond, a 16 MHz timer clock.
    pub const TICKS_PER_US: u32 = 16;
    /// Default serial timeout for each log line.
    pub const LOG_TIMEOUT: Duration = Duration::from_millis(100);

    /// Create a configuration with default values for everything except
    /// the algorithm name.
    ///
    /// The default optimization label only tells the build profiles apart,
    /// `"debug"` with debug assertions and `"release"` without. It does not
    /// reflect `opt-level`; use
    /// [`set_optimization`](Self::set_optimization) to report that.
    ///
    /// # Example
    ///
    /// ```
    /// use lwc_kat::Config;
    ///
    /// let config: Config = Config::new("ascon128");
    /// assert_eq!(config.ticks_per_us, 16);
    /// assert_eq!(config.log_timeout.as_millis(), 100);
    /// ```
    pub const fn new(algorithm: &'static str) -> Config {
        Config {
            algorithm,
            optimization: if cfg!(debug_assertions) {
                "debug"
            } else {
                "release"
            },
            ticks_per_us: Self::TICKS_PER_US,
            log_timeout: Self::LOG_TIMEOUT,
        }
    }

    /// Set the optimization level.
    #[must_use = "set_optimization returns a modified Config"]
    pub const fn set_optimization(mut self, optimization: &'static str) -> Config {
        self.optimization = optimization;
        self
    }

    /// Set the timer ticks per microsecond.
    #[must_use = "set_ticks_per_us returns a modified Config"]
    pub const fn set_ticks_per_us(mut self, ticks_per_us: u32) -> Config {
        self.ticks_per_us = ticks_per_us;
        self
    }

    /// Set the serial timeout for each log line.
    #[must_use = "set_log_timeout returns a modified Config"]
    pub const fn set_log_timeout(mut self, log_timeout: Duration) -> Config {
        self.log_timeout = log_timeout;
        self
    }
}

/// Inclusive length sweep.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Sweep {
    start: usize,
    max: usize,
    step: usize,
}

impl Sweep {
    /// Create a new sweep from `start` to `max` inclusive.
    ///
    /// # Panics
    ///
    /// * `step` is zero. In a `const` this is a compile error.
    ///
    /// # Example
    ///
    /// ```
    /// use lwc_kat::Sweep;
    ///
    /// const SWEEP: Sweep = Sweep::new(0, 32, 8);
    /// assert_eq!(SWEEP.len(), 5);
    /// ```
    pub const fn new(start: usize, max: usize, step: usize) -> Sweep {
        assert!(step != 0, "sweep step must be non-zero");
        Sweep { start, max, step }
    }

    /// First length.
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Upper bound, inclusive.
    pub const fn max(&self) -> usize {
        self.max
    }

    /// Increment between lengths, never zero.
    pub const fn step(&self) -> usize {
        self.step
    }

    /// Iterate over the lengths.
    ///
    /// # Example
    ///
    /// ```
    /// use lwc_kat::Sweep;
    ///
    /// let lens: Vec<usize> = Sweep::new(16, 1024, 256).iter().collect();
    /// assert_eq!(lens, [16, 272, 528, 784]);
    /// ```
    pub fn iter(&self) -> StepBy<RangeInclusive<usize>> {
        (self.start..=self.max).step_by(self.step)
    }

    /// Number of lengths in the sweep.
    pub const fn len(&self) -> usize {
        if self.start > self.max {
            0
        } else {
            (self.max - self.start) / self.step + 1
        }
    }

    /// Returns `true` if the sweep has no lengths.
    pub const fn is_empty(&self) -> bool {
        self.start > self.max
    }
}

impl IntoIterator for Sweep {
    type Item = usize;
    type IntoIter = StepBy<RangeInclusive<usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Benchmark state.
///
/// Owns the timer, the log sink, and the tick count of the last timed
/// operation.
#[derive(Debug)]
pub struct Bench<T, L> {
    timer: T,
    log: L,
    last: Ticks,
    config: Config,
}

impl<T, L> Bench<T, L>
where
    T: CycleTimer,
    L: LogSink,
{
    /// Create a new benchmark.
    pub fn new(timer: T, log: L, config: Config) -> Self {
        Bench {
            timer,
            log,
            last: Ticks::ZERO,
            config,
        }
    }

    /// Benchmark configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Tick count of the most recent [`measure`](Self::measure).
    pub fn last(&self) -> Ticks {
        self.last
    }

    /// [`last`](Self::last) converted to microseconds.
    pub fn last_us(&self) -> u32 {
        self.last.as_micros(self.config.ticks_per_us)
    }

    /// Time `f`.
    ///
    /// The elapsed ticks are available from [`last`](Self::last) until the
    /// next call.
    pub fn measure<R, F: FnOnce() -> R>(&mut self, f: F) -> R {
        self.timer.start();
        let ret: R = f();
        self.last = self.timer.end();
        ret
    }

    /// Send a formatted message to the log sink.
    ///
    /// Use [`kat_log!`](crate::kat_log) instead of calling this directly.
    pub fn emit(&mut self, args: fmt::Arguments<'_>) {
        // a dropped line does not abort the sweep
        let _ = self.log.log(args);
    }

    /// Log the start banner.
    pub fn banner(&mut self) {
        let Config {
            algorithm,
            optimization,
            ..
        } = self.config;
        kat_log!(
            self,
            "\n\n\n\nStarting...\nOptimization: {}\nAlgorithm: {}\n",
            optimization,
            algorithm
        );
    }

    /// Borrow the log sink.
    pub fn log(&self) -> &L {
        &self.log
    }

    /// Free the timer and log sink.
    pub fn free(self) -> (T, L) {
        (self.timer, self.log)
    }
}
