//! Core module tree: exact rationals, lazy sequences, generators, analytics.
//! Pure computation only; no I/O happens below this module.

#[macro_use]
pub mod debug; // gated debug logging (SEQMATH_DEBUG=1) provides debug_log! macro
pub mod error;
pub mod number_theory;
pub mod rational;
pub mod sequence;
pub mod generators;
pub mod analytics;

pub use analytics::{aimless, meaningless, prefix_rational_sum, worthless, worthless_with_limit};
pub use error::{SeqError, SeqResult};
pub use generators::{enumerate_primes, enumerate_rationals, enumerate_recurrence};
pub use number_theory::is_prime;
pub use rational::Rational;
pub use sequence::{Extent, LazySequence};
