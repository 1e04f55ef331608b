//! Composite operations over the enumerators. All arithmetic is exact.

use crate::core::error::{SeqError, SeqResult};
use crate::core::generators::{enumerate_primes, enumerate_rationals, enumerate_recurrence};
use crate::core::number_theory::is_prime_component;
use crate::core::rational::Rational;
use crate::core::sequence::LazySequence;

/// Candidates `worthless` examines before giving up.
pub const DEFAULT_SEARCH_LIMIT: usize = 1_000_000;

/// Exact sum of the first `n` enumerated rationals.
pub fn prefix_rational_sum(n: usize) -> SeqResult<Rational> {
    SeqError::require_positive(n, "prefix_rational_sum")?;
    debug_log!("prefix_rational_sum(n={n})");
    enumerate_rationals()
        .prefix(n)
        .reduce(Rational::zero(), |acc, r| acc + r)
}

fn product(group: Vec<Rational>) -> SeqResult<Rational> {
    LazySequence::from_vec(group).reduce(Rational::one(), |acc, r| acc * r)
}

/// Product of the first `n` rationals whose numerator or denominator is prime,
/// divided by the product of the remaining ones.
pub fn meaningless(n: usize) -> SeqResult<Rational> {
    SeqError::require_positive(n, "meaningless")?;
    let (primal, rest): (Vec<Rational>, Vec<Rational>) = enumerate_rationals()
        .take(n)
        .into_iter()
        .partition(|r| is_prime_component(r.numerator()) || is_prime_component(r.denominator()));
    debug_log!("meaningless(n={n}): {} prime-touching, {} other", primal.len(), rest.len());
    product(primal)?.checked_div(&product(rest)?)
}

/// Pairs the first `n` primes (padded with 1 when `n` is odd) into fractions
/// and sums them.
pub fn aimless(n: usize) -> SeqResult<Rational> {
    SeqError::require_positive(n, "aimless")?;
    let mut values: Vec<u64> = enumerate_primes().take(n);
    if values.len() % 2 == 1 {
        values.push(1);
    }
    debug_log!("aimless(n={n}): pairing {:?}", values);
    let fractions = values
        .chunks_exact(2)
        .map(|pair| Rational::new(pair[0], pair[1]))
        .collect::<SeqResult<Vec<_>>>()?;
    LazySequence::from_vec(fractions).reduce(Rational::zero(), |acc, r| acc + r)
}

/// n-th value (1-based) of the default `(1, 1)` recurrence.
pub fn recurrence_target(n: usize) -> SeqResult<Rational> {
    SeqError::require_positive(n, "recurrence_target")?;
    enumerate_recurrence(Rational::one(), Rational::one())
        .nth(n - 1)
        .ok_or_else(|| SeqError::not_found("recurrence ended early"))
}

/// Longest prefix of the rational enumeration whose sum stays at or below the
/// n-th Fibonacci number.
pub fn worthless(n: usize) -> SeqResult<Vec<Rational>> {
    worthless_with_limit(n, DEFAULT_SEARCH_LIMIT)
}

/// [`worthless`] with an explicit cap on how many prefix lengths are tried.
///
/// The running sum grows without bound (every odd diagonal `s` contributes
/// `(s-1)/1`), so the search always ends for a large enough `limit`; the cap
/// turns a runaway search into `NotFound`.
pub fn worthless_with_limit(n: usize, limit: usize) -> SeqResult<Vec<Rational>> {
    if n == 0 {
        return Ok(Vec::new());
    }
    let target = recurrence_target(n)?;
    let mut sum = Rational::zero();
    // `kept` is always `enumerate_rationals().take(kept.len())`, and `sum`
    // is that prefix's sum plus the candidate under test.
    let mut kept = Vec::new();
    for value in enumerate_rationals().iter().take(limit) {
        sum = &sum + &value;
        if sum > target {
            debug_log!("worthless(n={n}): target {target}, break at m={}", kept.len() + 1);
            return Ok(kept);
        }
        kept.push(value);
    }
    Err(SeqError::NotFound(format!(
        "no prefix of the first {limit} rationals sums past {target}"
    )))
}
