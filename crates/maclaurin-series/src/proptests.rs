//! Property-based tests for series evaluation.

#[cfg(test)]
mod tests {
    use maclaurin_integers::{factorial_usize, Integer};
    use proptest::prelude::*;

    use crate::{partial_sums, series_exp, terms};

    proptest! {
        #[test]
        fn zero_is_always_one(n in 1usize..150) {
            prop_assert_eq!(series_exp(&Integer::new(0), n).unwrap(), 1.0);
        }

        #[test]
        fn one_term_is_always_one(x in -1_000_000i64..1_000_000i64) {
            prop_assert_eq!(series_exp(&Integer::new(x), 1).unwrap(), 1.0);
        }

        // All terms are non-negative for x >= 0
        #[test]
        fn partial_sums_monotone(x in 0i64..30, n in 1usize..120) {
            let sums: Vec<f64> = partial_sums(&Integer::new(x), n)
                .collect::<Result<_, _>>()
                .unwrap();
            prop_assert!(sums.windows(2).all(|w| w[0] <= w[1]));
        }

        #[test]
        fn more_terms_never_decrease(x in 0i64..30, n in 1usize..100, extra in 0usize..50) {
            let short = series_exp(&Integer::new(x), n).unwrap();
            let long = series_exp(&Integer::new(x), n + extra).unwrap();
            prop_assert!(short <= long);
        }

        #[test]
        fn terms_match_direct_computation(x in -20i64..20, n in 1usize..40) {
            let x = Integer::new(x);
            for term in terms(&x, n) {
                prop_assert_eq!(&term.power, &x.pow(term.index));
                prop_assert_eq!(&term.factorial, &factorial_usize(term.index));
            }
        }

        #[test]
        fn converges_for_small_x(x in -5i64..=5) {
            let value = series_exp(&Integer::new(x), 99).unwrap();
            #[allow(clippy::cast_precision_loss)]
            let expected = (x as f64).exp();
            prop_assert!((value - expected).abs() <= 1e-12 * expected.max(1.0));
        }
    }
}
