//! Hash benchmark driver.

use crate::{
    bench::{Bench, Sweep},
    buffer::init_buffer,
    error::{KatError, Step},
    log::LogSink,
    primitive::{Hash, MAX_DIGEST_BYTES},
    timer::CycleTimer,
};

/// Size of the hash message buffer, the upper bound of the sweep.
pub const MAX_HASH_MESSAGE_LENGTH: usize = 1024;

pub(crate) const HASH_SWEEP: Sweep = Sweep::new(16, MAX_HASH_MESSAGE_LENGTH, 256);

/// Run the hash benchmark sweep.
///
/// Hashes the deterministic message truncated to 16, 272, 528, and 784
/// bytes and logs the timing of each call.
/// Digests are not compared against reference values.
///
/// The sweep stops at the first failure, which also logs
/// `Error occurred`.
pub fn run_hash<H, T, L>(bench: &mut Bench<T, L>, hash: &mut H) -> Result<(), KatError>
where
    H: Hash,
    T: CycleTimer,
    L: LogSink,
{
    const { assert!(H::BYTES <= MAX_DIGEST_BYTES) }

    let mut msg: [u8; MAX_HASH_MESSAGE_LENGTH] = [0; MAX_HASH_MESSAGE_LENGTH];
    let mut digest_buf: [u8; MAX_DIGEST_BYTES] = [0; MAX_DIGEST_BYTES];
    let digest: &mut [u8] = &mut digest_buf[..H::BYTES];

    init_buffer(&mut msg);

    bench.banner();

    for mlen in HASH_SWEEP {
        kat_log!(bench, "msg_len:{:04} ", mlen);

        let m: &[u8] = &msg[..mlen];
        if bench.measure(|| hash.hash(digest, m)).is_err() {
            kat_log!(bench, "Error occurred\n");
            return Err(KatError::crypto(Step::Hash, mlen, 0));
        }

        let (ticks, us): (u32, u32) = (bench.last().raw(), bench.last_us());
        kat_log!(bench, "hash:{:08} us:{:08} \n", ticks, us);
    }

    Ok(())
}
