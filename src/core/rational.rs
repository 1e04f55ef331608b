//! Exact rational numbers kept in lowest terms.
//!
//! - `Rational::new(n, d)` → reduced, denominator always positive
//! - components are `BigInt`, so `+ - *` never overflow
//! - `checked_div` / `recip` → `SeqError::DivisionByZero` for a zero divisor
//! - the `/` operator panics on a zero divisor, like integer division

use std::cmp::Ordering;
use std::fmt;
use std::iter::{Product, Sum};
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use super::error::{SeqError, SeqResult};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    numer: BigInt,
    denom: BigInt,
}

impl Rational {
    pub fn zero() -> Self {
        Rational { numer: BigInt::zero(), denom: BigInt::one() }
    }

    pub fn one() -> Self {
        Rational { numer: BigInt::one(), denom: BigInt::one() }
    }

    /// Builds `numerator/denominator` in lowest terms with a positive denominator.
    pub fn new(numerator: impl Into<BigInt>, denominator: impl Into<BigInt>) -> SeqResult<Self> {
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(SeqError::DivisionByZero);
        }
        Ok(Rational::reduced(numerator.into(), denominator))
    }

    // `d` must be non-zero.
    fn reduced(mut n: BigInt, mut d: BigInt) -> Self {
        if d.is_negative() {
            n = -n;
            d = -d;
        }
        let g = n.gcd(&d);
        if !g.is_one() {
            n /= &g;
            d /= &g;
        }
        Rational { numer: n, denom: d }
    }

    /// Skips reduction for callers that already guarantee `gcd(n, d) == 1, d > 0`.
    pub(crate) fn from_coprime(numerator: impl Into<BigInt>, denominator: impl Into<BigInt>) -> Self {
        let (numer, denom) = (numerator.into(), denominator.into());
        debug_assert!(denom.is_positive() && numer.gcd(&denom).is_one());
        Rational { numer, denom }
    }

    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Rational { numer: value.into(), denom: BigInt::one() }
    }

    pub fn numerator(&self) -> &BigInt {
        &self.numer
    }

    pub fn denominator(&self) -> &BigInt {
        &self.denom
    }

    pub fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.numer.is_positive()
    }

    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    pub fn checked_div(&self, other: &Rational) -> SeqResult<Rational> {
        Ok(self * &other.recip()?)
    }

    /// `1 / self`; fails for zero.
    pub fn recip(&self) -> SeqResult<Rational> {
        Rational::new(self.denom.clone(), self.numer.clone())
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        // both denominators are positive
        (&self.numer * &other.denom).cmp(&(&other.numer * &self.denom))
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Default for Rational {
    fn default() -> Self {
        Rational::zero()
    }
}

impl From<BigInt> for Rational {
    fn from(value: BigInt) -> Self {
        Rational::from_integer(value)
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Rational::from_integer(value)
    }
}

impl From<u64> for Rational {
    fn from(value: u64) -> Self {
        Rational::from_integer(value)
    }
}

// ----- operators: by reference, with owned forms delegating -----

impl Add<&Rational> for &Rational {
    type Output = Rational;
    fn add(self, rhs: &Rational) -> Rational {
        // a/b + c/d over lcm(b, d) to keep intermediates small
        let g = self.denom.gcd(&rhs.denom);
        let left = &self.numer * (&rhs.denom / &g);
        let right = &rhs.numer * (&self.denom / &g);
        let denom = &self.denom / &g * &rhs.denom;
        Rational::reduced(left + right, denom)
    }
}

impl Sub<&Rational> for &Rational {
    type Output = Rational;
    fn sub(self, rhs: &Rational) -> Rational {
        self + &(-rhs)
    }
}

impl Mul<&Rational> for &Rational {
    type Output = Rational;
    fn mul(self, rhs: &Rational) -> Rational {
        // Cross-cancel first; denominators are positive so neither gcd is zero
        let g1 = self.numer.gcd(&rhs.denom);
        let g2 = rhs.numer.gcd(&self.denom);
        let numer = (&self.numer / &g1) * (&rhs.numer / &g2);
        let denom = (&self.denom / &g2) * (&rhs.denom / &g1);
        Rational::reduced(numer, denom)
    }
}

impl Div<&Rational> for &Rational {
    type Output = Rational;
    fn div(self, rhs: &Rational) -> Rational {
        match self.checked_div(rhs) {
            Ok(r) => r,
            Err(e) => panic!("attempt to divide: {e}"),
        }
    }
}

impl Neg for &Rational {
    type Output = Rational;
    fn neg(self) -> Rational {
        Rational { numer: -&self.numer, denom: self.denom.clone() }
    }
}

impl Add for Rational {
    type Output = Rational;
    fn add(self, rhs: Rational) -> Rational {
        &self + &rhs
    }
}

impl Sub for Rational {
    type Output = Rational;
    fn sub(self, rhs: Rational) -> Rational {
        &self - &rhs
    }
}

impl Mul for Rational {
    type Output = Rational;
    fn mul(self, rhs: Rational) -> Rational {
        &self * &rhs
    }
}

impl Div for Rational {
    type Output = Rational;
    fn div(self, rhs: Rational) -> Rational {
        &self / &rhs
    }
}

impl Neg for Rational {
    type Output = Rational;
    fn neg(self) -> Rational {
        Rational { numer: -self.numer, denom: self.denom }
    }
}

impl Sum for Rational {
    fn sum<I: Iterator<Item = Rational>>(iter: I) -> Rational {
        iter.fold(Rational::zero(), |acc, r| &acc + &r)
    }
}

impl<'a> Sum<&'a Rational> for Rational {
    fn sum<I: Iterator<Item = &'a Rational>>(iter: I) -> Rational {
        iter.fold(Rational::zero(), |acc, r| &acc + r)
    }
}

impl Product for Rational {
    fn product<I: Iterator<Item = Rational>>(iter: I) -> Rational {
        iter.fold(Rational::one(), |acc, r| &acc * &r)
    }
}

// ----- text form: "n" or "n/d" -----

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

impl FromStr for Rational {
    type Err = SeqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |part: &str| {
            part.trim()
                .parse::<BigInt>()
                .map_err(|e| SeqError::InvalidArgument(format!("bad rational {s:?}: {e}")))
        };
        match s.trim().split_once('/') {
            Some((n, d)) => Rational::new(parse(n)?, parse(d)?),
            None => Ok(Rational::from_integer(parse(s)?)),
        }
    }
}

impl Serialize for Rational {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rational {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(n: i64, d: i64) -> Rational {
        Rational::new(n, d).unwrap()
    }

    #[test]
    fn new_reduces_and_normalizes_sign() {
        let x = r(6, -8);
        assert_eq!(x.numerator(), &BigInt::from(-3));
        assert_eq!(x.denominator(), &BigInt::from(4));
        assert_eq!(r(-2, -4), r(1, 2));
        assert_eq!(r(0, -5), Rational::zero());
    }

    #[test]
    fn zero_denominator_is_rejected() {
        assert_eq!(Rational::new(1, 0), Err(SeqError::DivisionByZero));
        assert_eq!(Rational::one().checked_div(&Rational::zero()), Err(SeqError::DivisionByZero));
        assert_eq!(Rational::zero().recip(), Err(SeqError::DivisionByZero));
    }

    #[test]
    fn arithmetic() {
        assert_eq!(r(1, 2) + r(1, 3), r(5, 6));
        assert_eq!(r(1, 2) - r(3, 4), r(-1, 4));
        assert_eq!(r(2, 3) * r(9, 4), r(3, 2));
        assert_eq!(r(2, 3) / r(4, 9), r(3, 2));
        assert_eq!(-r(2, 3), r(-2, 3));
        assert_eq!(Rational::zero() * r(5, 7), Rational::zero());
    }

    #[test]
    fn sum_and_product_identities() {
        assert_eq!(std::iter::empty::<Rational>().sum::<Rational>(), Rational::zero());
        assert_eq!(std::iter::empty::<Rational>().product::<Rational>(), Rational::one());
        let xs = [r(1, 2), r(1, 3), r(1, 6)];
        assert_eq!(xs.iter().sum::<Rational>(), Rational::one());
        assert_eq!(xs.iter().cloned().product::<Rational>(), r(1, 36));
    }

    #[test]
    fn values_past_machine_width_stay_exact() {
        let big = Rational::from_integer(i128::MAX);
        let sum = &big + &Rational::one();
        assert_eq!(sum.to_string(), "170141183460469231731687303715884105728");
        let tiny = Rational::new(1, BigInt::from(2).pow(200)).unwrap();
        assert_eq!(&(&Rational::one() + &tiny) - &tiny, Rational::one());
        assert!(&Rational::one() + &tiny > Rational::one());
    }

    #[test]
    fn ordering_matches_value() {
        assert!(r(1, 3) < r(1, 2));
        assert!(r(-1, 2) < r(-1, 3));
        assert!(r(7, 2) > Rational::from_integer(3));
        assert_eq!(r(2, 4).cmp(&r(1, 2)), Ordering::Equal);
    }

    #[test]
    fn ordering_survives_huge_components() {
        let m = BigInt::from(i128::MAX);
        let a = Rational::new(m.clone(), &m - BigInt::one()).unwrap();
        let b = Rational::new(&m - BigInt::one(), &m - BigInt::from(2)).unwrap();
        // m/(m-1) < (m-1)/(m-2) for large m
        assert!(a < b);
    }

    #[test]
    fn display_and_parse() {
        assert_eq!(r(3, 1).to_string(), "3");
        assert_eq!(r(-3, 4).to_string(), "-3/4");
        assert_eq!(" 6 / -8 ".parse::<Rational>(), Ok(r(-3, 4)));
        assert_eq!("5".parse::<Rational>(), Ok(Rational::from_integer(5)));
        assert_eq!("1/0".parse::<Rational>(), Err(SeqError::DivisionByZero));
        assert!(matches!("x/2".parse::<Rational>(), Err(SeqError::InvalidArgument(_))));
        let huge = "340282366920938463463374607431768211457/3";
        assert_eq!(huge.parse::<Rational>().unwrap().to_string(), huge);
    }

    #[test]
    fn serde_uses_text_form() {
        let json = serde_json::to_string(&vec![r(1, 2), r(3, 1)]).unwrap();
        assert_eq!(json, r#"["1/2","3"]"#);
        let back: Vec<Rational> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vec![r(1, 2), r(3, 1)]);
    }
}
