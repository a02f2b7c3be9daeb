/// Format a line and send it through the log sink of a [`Bench`].
///
/// Transmit failures drop the line; they never abort a sweep.
///
/// [`Bench`]: crate::Bench
#[macro_export]
macro_rules! kat_log {
    ($bench:expr, $($arg:tt)*) => {
        $bench.emit(::core::format_args!($($arg)*))
    };
}
