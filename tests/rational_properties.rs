//! Property tests for exact rational arithmetic.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed};
use proptest::prelude::*;
use seqmath::{Rational, SeqError};

fn small_rational() -> impl Strategy<Value = Rational> {
    (-1_000i64..1_000, 1i64..1_000).prop_map(|(n, d)| Rational::new(n, d).unwrap())
}

proptest! {
    #[test]
    fn construction_is_reduced(n in -100_000i64..100_000, d in -100_000i64..100_000) {
        prop_assume!(d != 0);
        let r = Rational::new(n, d).unwrap();
        prop_assert!(r.denominator().is_positive());
        prop_assert!(r.numerator().gcd(r.denominator()).is_one());
        // same value as the raw pair
        prop_assert_eq!(r.numerator() * BigInt::from(d), BigInt::from(n) * r.denominator());
    }

    #[test]
    fn addition_laws(a in small_rational(), b in small_rational(), c in small_rational()) {
        prop_assert_eq!(&a + &b, &b + &a);
        prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        prop_assert_eq!(&a + &Rational::zero(), a.clone());
        prop_assert_eq!(&a - &a, Rational::zero());
    }

    #[test]
    fn multiplication_laws(a in small_rational(), b in small_rational(), c in small_rational()) {
        prop_assert_eq!(&a * &b, &b * &a);
        prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
        prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        prop_assert_eq!(&a * &Rational::one(), a.clone());
    }

    #[test]
    fn division_inverts_multiplication(a in small_rational(), b in small_rational()) {
        if b.is_zero() {
            prop_assert_eq!(a.checked_div(&b), Err(SeqError::DivisionByZero));
        } else {
            prop_assert_eq!(&(&a * &b) / &b, a);
        }
    }

    #[test]
    fn ordering_agrees_with_difference_sign(a in small_rational(), b in small_rational()) {
        prop_assert_eq!(a < b, (&a - &b).numerator().is_negative());
        prop_assert_eq!(a == b, (&a - &b).is_zero());
    }

    #[test]
    fn display_parses_back(a in small_rational()) {
        prop_assert_eq!(a.to_string().parse::<Rational>(), Ok(a));
    }
}
