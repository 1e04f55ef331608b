//! Integer helpers shared by the rational type and the generators.

use num_bigint::BigInt;
use num_traits::ToPrimitive;

pub fn gcd(a: u64, b: u64) -> u64 {
    // Greatest common divisor via the Euclidean algorithm
    let (mut x, mut y) = (a, b);
    while y != 0 {
        let temp = y;
        y = x % y;
        x = temp;
    }
    x
}

pub fn coprime(a: u64, b: u64) -> bool {
    gcd(a, b) == 1
}

pub fn isqrt(k: u64) -> u64 {
    // floor(sqrt(k)) without trusting f64 rounding for large k
    if k < 2 {
        return k;
    }
    let mut r = (k as f64).sqrt() as u64;
    while r.checked_mul(r).map_or(true, |sq| sq > k) {
        r -= 1;
    }
    while (r + 1).checked_mul(r + 1).map_or(false, |sq| sq <= k) {
        r += 1;
    }
    r
}

pub fn is_prime(k: u64) -> bool {
    // Trial division by every candidate in [2, isqrt(k)]
    if k < 2 {
        return false;
    }
    (2..=isqrt(k)).all(|divisor| k % divisor != 0)
}

/// Primality of a rational component. Negatives are never prime; enumerated
/// components stay far below `u64::MAX`, anything larger reports `false`.
pub fn is_prime_component(k: &BigInt) -> bool {
    k.to_u64().map_or(false, is_prime)
}
