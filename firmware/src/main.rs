// Runs the selected LWC known-answer sweep and streams the timing log over
// LPUART (ST-LINK virtual COM port, 115200 baud).
//
// cargo genkat       AES-128-GCM round trips
// cargo genkat-hash  SHA-256 benchmark

#![no_std]
#![no_main]

use defmt_rtt as _; // global logger
use panic_probe as _; // panic handler
use nucleo_kat::{
    hal::{
        self, cortex_m,
        pac::{self, interrupt},
    },
    kat::{genkat_benchmark, KAT_SUCCESS},
    NucleoBench, Selected,
};

#[hal::cortex_m_rt::entry]
fn main() -> ! {
    let dp: pac::Peripherals = defmt::unwrap!(pac::Peripherals::take());
    let cp: pac::CorePeripherals = defmt::unwrap!(pac::CorePeripherals::take());

    let mut suite: Selected = nucleo_kat::suite();
    let mut bench: NucleoBench = nucleo_kat::init(dp, cp.SYST, suite.name());

    defmt::info!("Starting {}", bench.config().algorithm);
    let code: i32 = genkat_benchmark(&mut suite, &mut bench);
    if code == KAT_SUCCESS {
        defmt::info!("KAT complete");
    } else {
        defmt::error!("KAT failed with code {}", code);
    }

    loop {
        cortex_m::asm::wfe();
    }
}

#[interrupt]
#[allow(non_snake_case)]
fn TIM2() {
    nucleo_kat::on_tim2_update();
}
