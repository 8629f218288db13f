//! Property-based tests for exact integer arithmetic and factorials.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{factorial, factorial_usize, FactorialTable, Integer, IntegerError};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating factorial arguments
    fn small_index() -> impl Strategy<Value = usize> {
        0usize..200usize
    }

    proptest! {
        // Integer ring axioms used when building terms

        #[test]
        fn integer_mul_commutative(a in small_int(), b in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert_eq!(a.clone() * b.clone(), b * a);
        }

        #[test]
        fn integer_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let c = Integer::new(c);
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn integer_additive_inverse(a in small_int()) {
            let a = Integer::new(a);
            let neg_a = -a.clone();
            prop_assert!((a + neg_a).is_zero());
        }

        // Power laws

        #[test]
        fn pow_zero_is_one(a in small_int()) {
            prop_assert!(Integer::new(a).pow(0).is_one());
        }

        #[test]
        fn pow_adds_exponents(a in -50i64..50i64, m in 0usize..20, n in 0usize..20) {
            let a = Integer::new(a);
            prop_assert_eq!(a.pow(m) * a.pow(n), a.pow(m + n));
        }

        #[test]
        fn pow_sign_follows_parity(a in 1i64..1000i64, n in 0usize..30) {
            let p = Integer::new(-a).pow(n);
            let expected = if n % 2 == 0 { 1 } else { -1 };
            prop_assert_eq!(p.signum(), expected);
        }

        // Factorial properties

        #[test]
        fn factorial_recurrence(n in 1usize..200usize) {
            let lhs = factorial_usize(n);
            let rhs = Integer::from(n) * factorial_usize(n - 1);
            prop_assert_eq!(lhs, rhs);
        }

        #[test]
        fn factorial_checked_matches_unchecked(n in small_index()) {
            let checked = factorial(&Integer::from(n)).unwrap();
            prop_assert_eq!(checked, factorial_usize(n));
        }

        #[test]
        fn factorial_rejects_every_negative(n in -1_000_000i64..0i64) {
            prop_assert_eq!(
                factorial(&Integer::new(n)),
                Err(IntegerError::NegativeFactorial(Integer::new(n)))
            );
        }

        #[test]
        fn table_matches_direct(indices in proptest::collection::vec(small_index(), 1..16)) {
            let mut table = FactorialTable::new();
            for n in indices {
                prop_assert_eq!(table.get(n), &factorial_usize(n));
            }
        }
    }
}
