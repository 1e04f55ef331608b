//! Every positive rational, once, by sweeping diagonals `numerator + denominator = s`.
//!
//! Diagonal `s` starts at 2. Odd diagonals run from `(s-1)/1` down to `1/(s-1)`,
//! even diagonals from `1/(s-1)` up to `(s-1)/1`. Pairs sharing a factor are
//! skipped, so each value shows up only in its reduced form.

use crate::core::number_theory::coprime;
use crate::core::rational::Rational;
use crate::core::sequence::LazySequence;

#[derive(Debug, Clone)]
pub struct DiagonalCursor {
    sum: u64,
    numer: u64,
    denom: u64,
}

impl DiagonalCursor {
    pub fn new() -> Self {
        DiagonalCursor::at_diagonal(2)
    }

    fn at_diagonal(sum: u64) -> Self {
        let (numer, denom) = if sum % 2 == 1 { (sum - 1, 1) } else { (1, sum - 1) };
        DiagonalCursor { sum, numer, denom }
    }

    fn diagonal_done(&self) -> bool {
        self.numer == 0 || self.denom == 0
    }

    fn advance(&mut self) {
        if self.sum % 2 == 1 {
            self.numer -= 1;
            self.denom += 1;
        } else {
            self.numer += 1;
            self.denom -= 1;
        }
    }
}

impl Default for DiagonalCursor {
    fn default() -> Self {
        DiagonalCursor::new()
    }
}

impl Iterator for DiagonalCursor {
    type Item = Rational;

    fn next(&mut self) -> Option<Rational> {
        loop {
            if self.diagonal_done() {
                *self = DiagonalCursor::at_diagonal(self.sum + 1);
                debug_log!("rationals: entering diagonal s={}", self.sum);
            }
            let (numer, denom) = (self.numer, self.denom);
            self.advance();
            if coprime(numer, denom) {
                return Some(Rational::from_coprime(numer, denom));
            }
        }
    }
}

pub fn enumerate_rationals() -> LazySequence<Rational> {
    LazySequence::unbounded(DiagonalCursor::new())
}

/// Reduced rationals on one diagonal in sweep order; empty for `sum < 2`.
pub fn diagonal(sum: u64) -> Vec<Rational> {
    if sum < 2 {
        return Vec::new();
    }
    let mut cursor = DiagonalCursor::at_diagonal(sum);
    let mut out = Vec::new();
    while !cursor.diagonal_done() {
        let (numer, denom) = (cursor.numer, cursor.denom);
        cursor.advance();
        if coprime(numer, denom) {
            out.push(Rational::from_coprime(numer, denom));
        }
    }
    out
}
