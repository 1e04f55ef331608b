//! seqmath: lazy, restartable enumerations of the positive rationals, the primes
//! and additive recurrences, plus exact-arithmetic analytics over them.
//!
//! The library surface lives in [`core`]; `cli`, `commands`, `config` and `io`
//! back the `seqmath` binary.
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;

pub use crate::core::{
    aimless, enumerate_primes, enumerate_rationals, enumerate_recurrence, is_prime, meaningless,
    prefix_rational_sum, worthless, Extent, LazySequence, Rational, SeqError, SeqResult,
};
