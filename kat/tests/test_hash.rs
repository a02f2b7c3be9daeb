mod common;

use common::{Capture, RecordingHash, StepTimer};
use core::convert::Infallible;
use lwc_kat::{
    genkat_benchmark, primitives::Sha256Kat, run_hash, Bench, Hash, KatError, Step, Suite,
    Sweep, KAT_CRYPTO_FAILURE, KAT_SUCCESS, MAX_HASH_MESSAGE_LENGTH,
};

const LENS: [usize; 4] = [16, 272, 528, 784];

#[test]
fn sweep_lengths() {
    let sweep: Sweep = Sweep::new(16, MAX_HASH_MESSAGE_LENGTH, 256);
    assert_eq!(sweep.iter().collect::<Vec<usize>>(), LENS);
    assert_eq!(sweep.len(), LENS.len());
}

#[test]
fn one_line_per_length() {
    let mut bench: Bench<StepTimer, Capture> = common::bench("sha256");
    let mut hash = RecordingHash::new(Sha256Kat::new());

    assert_eq!(run_hash(&mut bench, &mut hash), Ok(()));
    assert_eq!(hash.lens, LENS);

    let log: &Capture = bench.log();
    assert_eq!(log.msgs.len(), 1 + 2 * LENS.len());
    assert_eq!(log.count_prefix("hash:"), LENS.len());
    for (n, len) in LENS.iter().enumerate() {
        assert_eq!(log.msgs[1 + 2 * n], format!("msg_len:{len:04} "));
        assert_eq!(log.msgs[2 + 2 * n], "hash:00000160 us:00000010 \n");
    }
}

#[test]
fn banner() {
    let mut bench: Bench<StepTimer, Capture> = common::bench("sha256");
    run_hash(&mut bench, &mut Sha256Kat::new()).unwrap();
    assert_eq!(
        bench.log().msgs[0],
        "\n\n\n\nStarting...\nOptimization: -O3\nAlgorithm: sha256\n"
    );
}

#[test]
fn failure_stops_sweep() {
    for (n, len) in LENS.into_iter().enumerate() {
        let mut bench: Bench<StepTimer, Capture> = common::bench("sha256");
        let mut hash = RecordingHash::new(Sha256Kat::new());
        hash.fail_at = Some(len);

        assert_eq!(
            run_hash(&mut bench, &mut hash),
            Err(KatError::Crypto {
                step: Step::Hash,
                msg_len: len,
                ad_len: 0
            })
        );
        assert_eq!(hash.lens, LENS[..=n]);

        let log: &Capture = bench.log();
        assert_eq!(log.count_prefix("hash:"), n);
        assert_eq!(log.msgs.last().unwrap(), "Error occurred\n");
    }
}

#[test]
fn suite_dispatch() {
    let mut bench: Bench<StepTimer, Capture> = common::bench("sha256");
    let mut suite: Suite<Infallible, _> = Suite::hash(RecordingHash::new(Sha256Kat::new()));
    assert_eq!(suite.name(), "sha256");
    assert_eq!(genkat_benchmark(&mut suite, &mut bench), KAT_SUCCESS);

    let mut bench: Bench<StepTimer, Capture> = common::bench("sha256");
    let mut hash = RecordingHash::new(Sha256Kat::new());
    hash.fail_at = Some(528);
    let mut suite: Suite<Infallible, _> = Suite::hash(hash);
    assert_eq!(genkat_benchmark(&mut suite, &mut bench), KAT_CRYPTO_FAILURE);
}

#[test]
fn sha256_known_answer() {
    let mut out: [u8; 32] = [0; 32];
    Sha256Kat::new().hash(&mut out, b"abc").unwrap();
    assert_eq!(
        out,
        [
            0xba, 0x78, 0x16, 0xbf, 0x8f, 0x01, 0xcf, 0xea, 0x41, 0x41, 0x40, 0xde, 0x5d, 0xae,
            0x22, 0x23, 0xb0, 0x03, 0x61, 0xa3, 0x96, 0x17, 0x7a, 0x9c, 0xb4, 0x10, 0xff, 0x61,
            0xf2, 0x00, 0x15, 0xad,
        ]
    );

    let mut short: [u8; 16] = [0; 16];
    assert!(Sha256Kat::new().hash(&mut short, b"abc").is_err());
}
