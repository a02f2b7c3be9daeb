/// Fill a buffer with the deterministic KAT pattern.
///
/// Byte `i` is set to `(i mod 256) + '0'`, wrapping on overflow.
/// The pattern is reproducible, not random, and has no cryptographic meaning.
///
/// # Example
///
/// ```
/// use lwc_kat::init_buffer;
///
/// let mut buf: [u8; 4] = [0; 4];
/// init_buffer(&mut buf);
/// assert_eq!(&buf, b"0123");
/// ```
pub fn init_buffer(buf: &mut [u8]) {
    buf.iter_mut()
        .enumerate()
        .for_each(|(i, byte)| *byte = (i as u8).wrapping_add(b'0'));
}
