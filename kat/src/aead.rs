//! AEAD test-vector driver.

use crate::{
    bench::{Bench, Sweep},
    buffer::init_buffer,
    error::{KatError, Step},
    log::LogSink,
    primitive::{Aead, MAX_A_BYTES, MAX_KEY_BYTES, MAX_NPUB_BYTES},
    timer::CycleTimer,
};

/// Largest message length in the AEAD sweep.
pub const MAX_MESSAGE_LENGTH: usize = 32;
/// Largest associated data length in the AEAD sweep.
pub const MAX_ASSOCIATED_DATA_LENGTH: usize = 32;

pub(crate) const MSG_SWEEP: Sweep = Sweep::new(0, MAX_MESSAGE_LENGTH, 8);
pub(crate) const AD_SWEEP: Sweep = Sweep::new(0, MAX_ASSOCIATED_DATA_LENGTH, 8);

/// Run the AEAD known-answer sweep.
///
/// For every message length in `0..=32` and associated data length in
/// `0..=32`, both in steps of 8, this encrypts and then decrypts the
/// deterministic plaintext and checks that the round trip restores it.
/// Timing for each call is logged.
///
/// The sweep stops at the first failure, which also logs
/// `Error occurred`.
pub fn run_aead<A, T, L>(bench: &mut Bench<T, L>, aead: &mut A) -> Result<(), KatError>
where
    A: Aead,
    T: CycleTimer,
    L: LogSink,
{
    const {
        assert!(A::KEY_BYTES <= MAX_KEY_BYTES);
        assert!(A::NPUB_BYTES <= MAX_NPUB_BYTES);
        assert!(A::A_BYTES <= MAX_A_BYTES);
    }

    let mut key_buf: [u8; MAX_KEY_BYTES] = [0; MAX_KEY_BYTES];
    let mut nonce_buf: [u8; MAX_NPUB_BYTES] = [0; MAX_NPUB_BYTES];
    let mut msg: [u8; MAX_MESSAGE_LENGTH] = [0; MAX_MESSAGE_LENGTH];
    let mut msg2: [u8; MAX_MESSAGE_LENGTH] = [0; MAX_MESSAGE_LENGTH];
    let mut ad: [u8; MAX_ASSOCIATED_DATA_LENGTH] = [0; MAX_ASSOCIATED_DATA_LENGTH];
    let mut ct: [u8; MAX_MESSAGE_LENGTH + MAX_A_BYTES] = [0; MAX_MESSAGE_LENGTH + MAX_A_BYTES];

    let key: &mut [u8] = &mut key_buf[..A::KEY_BYTES];
    init_buffer(key);
    let nonce: &mut [u8] = &mut nonce_buf[..A::NPUB_BYTES];
    init_buffer(nonce);
    init_buffer(&mut msg);
    init_buffer(&mut ad);

    bench.banner();

    for mlen in MSG_SWEEP {
        for adlen in AD_SWEEP {
            let res: Result<(), Step> = round_trip(
                bench,
                aead,
                key,
                nonce,
                &msg[..mlen],
                &ad[..adlen],
                &mut ct,
                &mut msg2,
            );
            if let Err(step) = res {
                kat_log!(bench, "Error occurred\n");
                return Err(KatError::crypto(step, mlen, adlen));
            }
        }
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn round_trip<A, T, L>(
    bench: &mut Bench<T, L>,
    aead: &mut A,
    key: &[u8],
    nonce: &[u8],
    msg: &[u8],
    ad: &[u8],
    ct: &mut [u8],
    msg2: &mut [u8],
) -> Result<(), Step>
where
    A: Aead,
    T: CycleTimer,
    L: LogSink,
{
    kat_log!(bench, "msg_len:{:02} ad_len:{:02}  ", msg.len(), ad.len());

    let clen: usize = bench
        .measure(|| aead.encrypt(ct, msg, ad, nonce, key))
        .ok()
        .filter(|&clen| clen <= ct.len())
        .ok_or(Step::Encrypt)?;

    let (ticks, us): (u32, u32) = (bench.last().raw(), bench.last_us());
    kat_log!(bench, "enc:{:08} us:{:08} ", ticks, us);

    // stale output from the previous pair must not pass the content check
    msg2.fill(!0);
    let mlen2: usize = bench
        .measure(|| aead.decrypt(msg2, &ct[..clen], ad, nonce, key))
        .map_err(|_| Step::Decrypt)?;
    if mlen2 != msg.len() {
        return Err(Step::LengthMismatch);
    } else if msg2[..mlen2] != *msg {
        return Err(Step::ContentMismatch);
    }

    let (ticks, us): (u32, u32) = (bench.last().raw(), bench.last_us());
    kat_log!(bench, "dec:{:08} us:{:08} \n", ticks, us);
    Ok(())
}
