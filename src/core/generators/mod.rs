//! Concrete infinite producers built on `LazySequence`.

pub mod primes;
pub mod rationals;
pub mod recurrence;

pub use primes::enumerate_primes;
pub use rationals::enumerate_rationals;
pub use recurrence::enumerate_recurrence;
