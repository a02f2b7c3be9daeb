use lwc_kat::{Config, Sweep};

#[test]
fn sweep_len_matches_iter() {
    for (start, max, step) in [(0, 32, 8), (16, 1024, 256), (3, 3, 1), (0, 31, 8), (5, 4, 1)] {
        let sweep: Sweep = Sweep::new(start, max, step);
        assert_eq!(sweep.len(), sweep.iter().count(), "{sweep:?}");
        assert_eq!(sweep.is_empty(), sweep.len() == 0, "{sweep:?}");
    }
}

#[test]
fn sweep_accessors() {
    const SWEEP: Sweep = Sweep::new(16, 1024, 256);
    assert_eq!(SWEEP.start(), 16);
    assert_eq!(SWEEP.max(), 1024);
    assert_eq!(SWEEP.step(), 256);
}

#[test]
fn empty_sweep() {
    let sweep: Sweep = Sweep::new(8, 0, 8);
    assert!(sweep.is_empty());
    assert_eq!(sweep.len(), 0);
    assert_eq!(sweep.into_iter().next(), None);
}

#[test]
#[should_panic(expected = "sweep step must be non-zero")]
fn zero_step_is_rejected() {
    let _ = Sweep::new(0, 32, core::hint::black_box(0));
}

#[test]
fn default_optimization_names_the_profile() {
    let config: Config = Config::new("aes128gcm");
    let expected: &str = if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    };
    assert_eq!(config.optimization, expected);
    assert_eq!(config.set_optimization("-O3").optimization, "-O3");
}
