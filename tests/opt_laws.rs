//! Property-based tests for `Opt<T>`.
//!
//! - **Tri-state invariant**: a present option is always explicit, for every
//!   constructor and combinator result
//! - **Value equality**: `Unset` and `None` compare equal, explicitness never
//!   participates
//! - **Monad laws** for `and_then`
//! - **Functor laws** for `map`
//! - **Round-trips** through the document, text and binary codecs

use proptest::prelude::*;
use tristate::Opt;

fn any_opt<T>() -> impl Strategy<Value = Opt<T>>
where
    T: Arbitrary + Clone + std::fmt::Debug + 'static,
{
    prop_oneof![
        Just(Opt::Unset),
        Just(Opt::None),
        any::<T>().prop_map(Opt::Some),
    ]
}

fn is_consistent<T>(option: &Opt<T>) -> bool {
    !option.is_some() || option.is_explicit()
}

// =============================================================================
// Tri-state Invariant
// =============================================================================

proptest! {
    #[test]
    fn prop_some_implies_explicit(option in any_opt::<i32>()) {
        prop_assert!(is_consistent(&option));
    }

    #[test]
    fn prop_combinators_keep_invariant(
        left in any_opt::<i32>(),
        right in any_opt::<i32>(),
        threshold in any::<i32>(),
    ) {
        prop_assert!(is_consistent(&left.map(|x| x.wrapping_add(1))));
        prop_assert!(is_consistent(&left.filter(|x| *x > threshold)));
        prop_assert!(is_consistent(&left.and(right)));
        prop_assert!(is_consistent(&left.or(right)));
        prop_assert!(is_consistent(&left.and_then(|_| right)));
        prop_assert!(is_consistent(&left.or_else(|| right)));
    }

    #[test]
    fn prop_constructors_are_explicit(value in any::<i32>(), ok in any::<bool>()) {
        prop_assert!(Opt::some(value).is_explicit());
        prop_assert!(Opt::<i32>::none().is_explicit());
        prop_assert!(Opt::from_tuple(value, ok).is_explicit());
        prop_assert!(Opt::from_zero(value).is_explicit());
        prop_assert!(Opt::from_ref(Some(&value)).is_explicit());
    }
}

// =============================================================================
// Value Equality
// =============================================================================

proptest! {
    #[test]
    fn prop_equality_matches_option(left in any_opt::<u8>(), right in any_opt::<u8>()) {
        prop_assert_eq!(left == right, left.into_option() == right.into_option());
    }

    #[test]
    fn prop_and_truth_table(left in any_opt::<i32>(), right in any_opt::<i32>()) {
        let expected = if left.is_some() { right } else { Opt::None };
        prop_assert_eq!(left.and(right), expected);
    }

    #[test]
    fn prop_or_truth_table(left in any_opt::<i32>(), right in any_opt::<i32>()) {
        let expected = if left.is_some() { left } else { right };
        prop_assert_eq!(left.or(right), expected);
    }
}

// =============================================================================
// Laws
// =============================================================================

proptest! {
    /// Left identity: `some(a).and_then(f) == f(a)`
    #[test]
    fn prop_and_then_left_identity(value in any::<i32>()) {
        let function = |x: i32| if x % 2 == 0 { Opt::some(x / 2) } else { Opt::none() };
        prop_assert_eq!(Opt::some(value).and_then(function), function(value));
    }

    /// Right identity: `m.and_then(some) == m`
    #[test]
    fn prop_and_then_right_identity(option in any_opt::<i32>()) {
        prop_assert_eq!(option.and_then(Opt::some), option);
    }

    /// Associativity of `and_then`
    #[test]
    fn prop_and_then_associativity(option in any_opt::<i32>()) {
        let function1 = |x: i32| Opt::some(x.wrapping_mul(3));
        let function2 = |x: i32| if x > 0 { Opt::some(x) } else { Opt::none() };

        let left = option.and_then(function1).and_then(function2);
        let right = option.and_then(|x| function1(x).and_then(function2));
        prop_assert_eq!(left, right);
    }

    /// Composition law for `map`
    #[test]
    fn prop_map_composition(option in any_opt::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = option.map(function1).map(function2);
        let right = option.map(|x| function2(function1(x)));
        prop_assert_eq!(left, right);
    }

    /// Identity law for `map` keeps explicitness too
    #[test]
    fn prop_map_identity(option in any_opt::<i32>()) {
        let mapped = option.map(|x| x);
        prop_assert_eq!(mapped, option);
        prop_assert_eq!(mapped.is_explicit(), option.is_explicit());
    }

    #[test]
    fn prop_filter_matches_predicate(option in any_opt::<i32>()) {
        let filtered = option.filter(|x| x % 2 == 0);
        prop_assert_eq!(filtered.is_some(), option.is_some_and(|x| x % 2 == 0));
    }
}

// =============================================================================
// Round-trips
// =============================================================================

#[cfg(feature = "binary")]
mod round_trip {
    use super::*;

    proptest! {
        #[test]
        fn prop_document_round_trip(option in any_opt::<String>()) {
            let json = serde_json::to_string(&option).unwrap();
            let restored: Opt<String> = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(&restored, &option);
            prop_assert!(restored.is_explicit());
        }

        #[test]
        fn prop_text_round_trip(option in any_opt::<i64>()) {
            let text = option.to_text().unwrap();
            prop_assert_eq!(Opt::<i64>::from_text(&text).unwrap(), option);
        }

        #[test]
        fn prop_binary_round_trip(option in any_opt::<String>()) {
            let bytes = option.to_binary().unwrap();
            prop_assert_eq!(bytes[0] == 1, option.is_some());
            prop_assert_eq!(Opt::<String>::from_binary(&bytes).unwrap(), option);
        }
    }
}
