//! NUCLEO-WL55JC adapters for the LWC known-answer tests.
//!
//! * [`Tim2Counter`] runs TIM2 as a 16-bit counter at [`TIMER_HZ`] with an
//!   update interrupt on every wraparound.
//! * The KAT log goes out on LPUART (pin A2, the ST-LINK virtual COM port)
//!   at [`BAUD`].
#![no_std]
#![warn(missing_docs)]

pub use lwc_kat as kat;
pub use stm32wlxx_hal as hal;

use core::convert::Infallible;
use hal::{
    cortex_m::{self, delay::Delay},
    gpio::{pins, PortA},
    pac, rcc,
    uart::{self, LpUart, NoRx},
    util::new_delay,
};
use kat::{Bench, Config, Counter, OverflowCounter, SerialTx, Suite, TickTimer, UartLog};

/// System clock frequency after [`init`].
pub const SYSCLK_HZ: u32 = 48_000_000;
/// TIM2 count frequency, 16 ticks per microsecond.
pub const TIMER_HZ: u32 = 16_000_000;
/// LPUART baud rate.
pub const BAUD: u32 = 115_200;

/// TIM2 wraparounds, incremented by [`on_tim2_update`].
pub static OVERFLOWS: OverflowCounter = OverflowCounter::new();

/// LPUART transmitter with a SysTick based timeout.
pub type Tx = SerialTx<LpUart<NoRx, pins::A2>, Delay>;
/// KAT log sink.
pub type Log = UartLog<Tx>;
/// KAT cycle timer.
pub type Timer = TickTimer<'static, Tim2Counter>;
/// Benchmark state for this board.
pub type NucleoBench = Bench<Timer, Log>;

cfg_if::cfg_if! {
    if #[cfg(all(feature = "aead", feature = "hash"))] {
        core::compile_error!("The aead and hash features are mutually exclusive");
    } else if #[cfg(feature = "aead")] {
        /// Primitive under test.
        pub type Primitive = kat::primitives::Aes128GcmKat;
        /// Suite selected by the cargo features.
        pub type Selected = Suite<Primitive, Infallible>;

        /// Create the suite selected by the cargo features.
        pub const fn suite() -> Selected {
            Suite::aead(Primitive::new())
        }
    } else if #[cfg(feature = "hash")] {
        /// Primitive under test.
        pub type Primitive = kat::primitives::Sha256Kat;
        /// Suite selected by the cargo features.
        pub type Selected = Suite<Infallible, Primitive>;

        /// Create the suite selected by the cargo features.
        pub const fn suite() -> Selected {
            Suite::hash(Primitive::new())
        }
    } else {
        core::compile_error!("You must select a primitive category with the aead or hash feature");
    }
}

/// Benchmark configuration.
///
/// `LWC_ALGO_NAME` and `LWC_OPTIMIZATION` override the banner fields at
/// build time.
pub const fn config(algorithm: &'static str) -> Config {
    let config: Config = match option_env!("LWC_ALGO_NAME") {
        Some(name) => Config::new(name),
        None => Config::new(algorithm),
    };
    let config: Config = match option_env!("LWC_OPTIMIZATION") {
        Some(opt) => config.set_optimization(opt),
        None => config,
    };
    config.set_ticks_per_us(TIMER_HZ / 1_000_000)
}

/// TIM2 as a 16-bit counter.
///
/// The auto-reload register is set to `0xFFFF` so the update event fires
/// once per 16-bit wraparound.
#[derive(Debug)]
pub struct Tim2Counter {
    tim2: pac::TIM2,
}

impl Tim2Counter {
    /// Enable, reset, and configure TIM2.
    ///
    /// This assumes the APB1 prescaler is 1, which makes the timer kernel
    /// clock equal to PCLK1.
    pub fn new(tim2: pac::TIM2, rcc: &mut pac::RCC) -> Self {
        rcc.apb1enr1.modify(|_, w| w.tim2en().enabled());
        rcc.apb1enr1.read(); // wait for clock to be ready
        rcc.apb1rstr1.modify(|_, w| w.tim2rst().set_bit());
        rcc.apb1rstr1.modify(|_, w| w.tim2rst().clear_bit());

        let psc: u32 = (rcc::pclk1_hz(rcc) / TIMER_HZ).max(1) - 1;
        tim2.psc.write(|w| w.psc().bits(psc as u16));
        tim2.arr.write(|w| w.arr().bits(u32::from(u16::MAX)));

        // only counter overflow raises an update interrupt, not UG
        tim2.cr1.write(|w| w.urs().set_bit());
        // latch the prescaler
        tim2.egr.write(|w| w.ug().set_bit());
        tim2.sr.write(|w| w.uif().clear_bit());

        Tim2Counter { tim2 }
    }

    /// Free the TIM2 registers.
    pub fn free(self) -> pac::TIM2 {
        self.tim2
    }
}

impl Counter for Tim2Counter {
    fn reset(&mut self) {
        self.tim2.cr1.modify(|_, w| w.cen().clear_bit());
        self.tim2.dier.modify(|_, w| w.uie().clear_bit());
        // safety: CNT accepts any 32-bit value
        self.tim2.cnt.write(|w| unsafe { w.bits(0) });
        self.tim2.sr.write(|w| w.uif().clear_bit());
        pac::NVIC::unpend(pac::Interrupt::TIM2);
    }

    fn arm(&mut self) {
        self.tim2.dier.modify(|_, w| w.uie().set_bit());
        self.tim2.cr1.modify(|_, w| w.cen().set_bit());
    }

    fn disarm(&mut self) {
        self.tim2.cr1.modify(|_, w| w.cen().clear_bit());
        self.tim2.dier.modify(|_, w| w.uie().clear_bit());
    }

    fn count(&self) -> u16 {
        self.tim2.cnt.read().bits() as u16
    }
}

/// TIM2 update interrupt body.
///
/// Call this from the `TIM2` interrupt handler.
///
/// # Example
///
/// ```no_run
/// use nucleo_kat::hal::pac::interrupt;
///
/// #[interrupt]
/// #[allow(non_snake_case)]
/// fn TIM2() {
///     nucleo_kat::on_tim2_update();
/// }
/// ```
pub fn on_tim2_update() {
    // safety: SR is only written here and while the interrupt is masked
    let tim2: &pac::tim2::RegisterBlock = unsafe { &*pac::TIM2::ptr() };
    if tim2.sr.read().uif().bit_is_set() {
        tim2.sr.write(|w| w.uif().clear_bit());
        OVERFLOWS.on_overflow();
    }
}

/// Bring up clocks, TIM2, and LPUART, and create the benchmark state.
///
/// The `TIM2` interrupt is unmasked, the binary must define the handler and
/// call [`on_tim2_update`] from it.
pub fn init(mut dp: pac::Peripherals, syst: pac::SYST, algorithm: &'static str) -> NucleoBench {
    cortex_m::interrupt::free(|cs| unsafe {
        rcc::set_sysclk_msi_max(&mut dp.FLASH, &mut dp.PWR, &mut dp.RCC, cs)
    });
    defmt::assert_eq!(rcc::sysclk_hz(&dp.RCC), SYSCLK_HZ);

    // LPUART kernel clock
    dp.RCC.cr.modify(|_, w| w.hsion().set_bit());
    while dp.RCC.cr.read().hsirdy().is_not_ready() {}

    let gpioa: PortA = PortA::split(dp.GPIOA, &mut dp.RCC);
    let lpuart: LpUart<NoRx, pins::A2> = cortex_m::interrupt::free(|cs| {
        LpUart::new(dp.LPUART, BAUD, uart::Clk::Hsi16, &mut dp.RCC).enable_tx(gpioa.a2, cs)
    });
    let delay: Delay = new_delay(syst, &dp.RCC);

    let counter: Tim2Counter = Tim2Counter::new(dp.TIM2, &mut dp.RCC);
    let timer: Timer = TickTimer::new(counter, &OVERFLOWS);
    // safety: the handler only touches TIM2 SR and OVERFLOWS
    unsafe { pac::NVIC::unmask(pac::Interrupt::TIM2) };

    let config: Config = config(algorithm);
    defmt::info!(
        "sysclk {} Hz, TIM2 {} Hz, LPUART {} baud",
        rcc::sysclk_hz(&dp.RCC),
        TIMER_HZ,
        BAUD
    );
    defmt::info!("{}", config);

    let tx: Tx = SerialTx::new(lpuart, delay);
    Bench::new(timer, UartLog::new(tx, config.log_timeout), config)
}

