#![no_std]
#![no_main]

use defmt::unwrap;
use defmt_rtt as _; // global logger
use nucleo_kat::{
    hal::{
        cortex_m,
        pac::{self, interrupt, DWT},
    },
    kat::{
        primitives::{Aes128GcmKat, Sha256Kat},
        run_aead, run_hash, Ticks,
    },
    NucleoBench, SYSCLK_HZ, TIMER_HZ,
};
use panic_probe as _;

const CPU_CYC_PER_TICK: u32 = SYSCLK_HZ / TIMER_HZ;

#[interrupt]
#[allow(non_snake_case)]
fn TIM2() {
    nucleo_kat::on_tim2_update();
}

#[defmt_test::tests]
mod tests {
    use super::*;

    #[init]
    fn init() -> NucleoBench {
        let dp: pac::Peripherals = unwrap!(pac::Peripherals::take());
        let mut cp: pac::CorePeripherals = unwrap!(pac::CorePeripherals::take());

        cp.DCB.enable_trace();
        cp.DWT.enable_cycle_counter();
        cp.DWT.set_cycle_count(0);

        defmt::warn!("KAT log is written to LPUART, pin A2");
        nucleo_kat::init(dp, cp.SYST, "testsuite")
    }

    #[test]
    fn short_measurement_has_no_overflow(bench: &mut NucleoBench) {
        bench.measure(|| cortex_m::asm::nop());
        let ticks: Ticks = bench.last();
        defmt::assert_eq!(ticks.overflows(), 0);
        defmt::assert!(ticks.count() < 1_000, "{}", ticks);
    }

    #[test]
    fn ticks_track_cpu_cycles(bench: &mut NucleoBench) {
        // 10 ms at 16 MHz wraps the 16-bit counter twice
        const CYCLES: u32 = SYSCLK_HZ / 100;

        let start: u32 = DWT::cycle_count();
        bench.measure(|| cortex_m::asm::delay(CYCLES));
        let elapsed: u32 = DWT::cycle_count().wrapping_sub(start);

        let ticks: Ticks = bench.last();
        defmt::assert!(ticks.overflows() >= 2, "{}", ticks);

        let expected: u32 = elapsed / CPU_CYC_PER_TICK;
        // 6.25% tolerance
        let lower: u32 = expected - expected / 16;
        defmt::assert!(
            lower <= ticks.raw() && ticks.raw() <= expected,
            "TIM2 is incorrect: {} <= {} <= {}",
            lower,
            ticks.raw(),
            expected
        );
    }

    #[test]
    fn aead_sweep(bench: &mut NucleoBench) {
        defmt::assert_eq!(run_aead(bench, &mut Aes128GcmKat::new()), Ok(()));
    }

    #[test]
    fn hash_sweep(bench: &mut NucleoBench) {
        defmt::assert_eq!(run_hash(bench, &mut Sha256Kat::new()), Ok(()));
        defmt::info!("last hash took {} us", bench.last_us());
    }
}
