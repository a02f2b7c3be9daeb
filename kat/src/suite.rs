use crate::{
    aead::run_aead,
    bench::Bench,
    error::{KatError, KAT_SUCCESS},
    hash::run_hash,
    log::LogSink,
    primitive::{Aead, Hash},
    timer::CycleTimer,
};
use core::convert::Infallible;

/// Primitive category under test, selected once at startup.
///
/// A build that only carries one category uses
/// [`Infallible`] for the other.
///
/// # Example
///
/// ```
/// use core::convert::Infallible;
/// use lwc_kat::{primitives::Sha256Kat, Suite};
///
/// let suite: Suite<Infallible, Sha256Kat> = Suite::Hash(Sha256Kat::new());
/// assert_eq!(suite.name(), "sha256");
/// ```
#[derive(Debug)]
pub enum Suite<A, H> {
    /// Authenticated encryption known-answer sweep.
    Aead(A),
    /// Hash benchmark sweep.
    Hash(H),
}

impl<A: Aead> Suite<A, Infallible> {
    /// Create an AEAD suite.
    pub const fn aead(aead: A) -> Self {
        Suite::Aead(aead)
    }
}

impl<H: Hash> Suite<Infallible, H> {
    /// Create a hash suite.
    pub const fn hash(hash: H) -> Self {
        Suite::Hash(hash)
    }
}

impl<A: Aead, H: Hash> Suite<A, H> {
    /// Algorithm name of the selected primitive.
    pub const fn name(&self) -> &'static str {
        match self {
            Suite::Aead(_) => A::NAME,
            Suite::Hash(_) => H::NAME,
        }
    }

    /// Run the selected driver.
    pub fn run<T, L>(&mut self, bench: &mut Bench<T, L>) -> Result<(), KatError>
    where
        T: CycleTimer,
        L: LogSink,
    {
        match self {
            Suite::Aead(aead) => run_aead(bench, aead),
            Suite::Hash(hash) => run_hash(bench, hash),
        }
    }
}

/// Run a suite and return the process result code.
///
/// Returns [`KAT_SUCCESS`] or the [`code`](KatError::code) of the
/// failure.
pub fn genkat_benchmark<A, H, T, L>(suite: &mut Suite<A, H>, bench: &mut Bench<T, L>) -> i32
where
    A: Aead,
    H: Hash,
    T: CycleTimer,
    L: LogSink,
{
    match suite.run(bench) {
        Ok(()) => KAT_SUCCESS,
        Err(e) => e.code(),
    }
}
