//! Listing subcommands: rationals, primes, recurrence.

use super::Outcome;
use crate::core::{enumerate_primes, enumerate_rationals, enumerate_recurrence, Rational};

pub fn rationals(count: usize, skip: usize) -> Outcome {
    Outcome::Rationals(enumerate_rationals().skip(skip).take(count))
}

pub fn primes(count: usize, skip: usize) -> Outcome {
    Outcome::Integers(enumerate_primes().skip(skip).take(count))
}

pub fn recurrence(count: usize, first: Rational, second: Rational) -> Outcome {
    Outcome::Rationals(enumerate_recurrence(first, second).take(count))
}
