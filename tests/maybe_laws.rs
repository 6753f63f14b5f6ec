//! Property-based law checks for Maybe

use calmwater::laws;
use calmwater::monoid::{Max, Sum};
use calmwater::typeclass::Monad;
use calmwater::Maybe;
use proptest::prelude::*;

fn maybe_of<T: std::fmt::Debug + Clone>(
    inner: impl Strategy<Value = T>,
) -> impl Strategy<Value = Maybe<T>> {
    prop::option::of(inner).prop_map(Maybe::wrap)
}

fn halve(x: i64) -> Maybe<i64> {
    if x % 2 == 0 {
        Maybe::present(x / 2)
    } else {
        Maybe::absent()
    }
}

fn positive(x: i64) -> Maybe<i64> {
    if x > 0 {
        Maybe::present(x)
    } else {
        Maybe::absent()
    }
}

proptest! {
    #[test]
    fn prop_functor_identity(m in maybe_of(any::<i64>())) {
        prop_assert!(laws::functor_identity(m));
    }

    #[test]
    fn prop_functor_composition(m in maybe_of(any::<i64>())) {
        prop_assert!(laws::functor_composition(
            m,
            |x: i64| x.wrapping_sub(7),
            |x: i64| x.to_string(),
        ));
    }

    #[test]
    fn prop_semigroup_associativity(
        a in maybe_of(any::<i32>().prop_map(|x| Sum(x as i64))),
        b in maybe_of(any::<i32>().prop_map(|x| Sum(x as i64))),
        c in maybe_of(any::<i32>().prop_map(|x| Sum(x as i64))),
    ) {
        prop_assert!(laws::semigroup_associativity(a, b, c));
    }

    #[test]
    fn prop_max_associativity(
        a in maybe_of(any::<u8>().prop_map(Max)),
        b in maybe_of(any::<u8>().prop_map(Max)),
        c in maybe_of(any::<u8>().prop_map(Max)),
    ) {
        prop_assert!(laws::semigroup_associativity(a, b, c));
    }

    #[test]
    fn prop_absent_is_identity(m in maybe_of(any::<Vec<u8>>())) {
        prop_assert!(laws::monoid_left_identity(m.clone()));
        prop_assert!(laws::monoid_right_identity(m));
    }

    #[test]
    fn prop_monad_left_identity(v: i64) {
        prop_assert!(laws::monad_left_identity::<Maybe<()>, _, _, _>(v, halve));
    }

    #[test]
    fn prop_monad_right_identity(m in maybe_of(any::<i64>())) {
        prop_assert!(laws::monad_right_identity(m));
    }

    #[test]
    fn prop_monad_associativity(m in maybe_of(any::<i64>())) {
        prop_assert_eq!(
            Monad::bind(Monad::bind(m, halve), positive),
            Monad::bind(m, |x| Monad::bind(halve(x), positive))
        );
    }

    #[test]
    fn prop_absent_absorbs_every_operation(v: i64) {
        let absent: Maybe<i64> = Maybe::absent();
        prop_assert!(absent.transform(|x| x + v).is_absent());
        prop_assert!(absent.bind(|x| Some(x + v)).is_absent());
        prop_assert!(Maybe::pure(|x: i64| x + v).apply(absent).is_absent());
    }

    #[test]
    fn prop_concat_matches_sum_of_present(values in prop::collection::vec(maybe_of(any::<i16>()), 0..20)) {
        let expected: i64 = values.iter().filter_map(|m| m.into_option()).map(i64::from).sum();
        let any_present = values.iter().any(Maybe::is_present);
        let total = Maybe::concat(values.into_iter().map(|m| m.transform(|x| Sum(i64::from(x)))));
        if any_present {
            prop_assert_eq!(total, Maybe::present(Sum(expected)));
        } else {
            prop_assert_eq!(total, Maybe::absent());
        }
    }
}
