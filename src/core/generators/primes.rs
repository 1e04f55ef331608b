use crate::core::number_theory::is_prime;
use crate::core::sequence::LazySequence;

/// 2, 3, 5, 7, … by filtering the integers from 2 upward with trial division.
pub fn enumerate_primes() -> LazySequence<u64> {
    LazySequence::unbounded(2u64..).filter(|&k| is_prime(k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_five() {
        assert_eq!(enumerate_primes().take(5), vec![2, 3, 5, 7, 11]);
    }

    #[test]
    fn hundredth_prime() {
        assert_eq!(enumerate_primes().nth(99), Some(541));
    }

    #[test]
    fn strictly_increasing() {
        let ps = enumerate_primes().take(200);
        assert!(ps.windows(2).all(|w| w[0] < w[1]));
    }
}
