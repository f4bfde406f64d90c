//! Integration tests for the synchronous sequence queries.

#![cfg(feature = "query")]

use std::cell::Cell;

use mettle::control::{Either, Maybe, MultipleMatches, Try};
use mettle::query::{NullableSequenceExt, SequenceExt, ValuesExt, values_of};
use proptest::prelude::*;
use rstest::rstest;

#[derive(Debug, Clone, PartialEq)]
struct User {
    name: &'static str,
    admin: bool,
}

fn users() -> Vec<User> {
    vec![
        User { name: "ada", admin: true },
        User { name: "brian", admin: false },
        User { name: "grace", admin: false },
    ]
}

// =============================================================================
// First / Last / Single
// =============================================================================

#[rstest]
fn first_matching_on_infinite_sequence_stops_at_index_zero() {
    let evaluated = Cell::new(0);
    let first = (0u64..).first_matching(|_| {
        evaluated.set(evaluated.get() + 1);
        true
    });
    assert_eq!(first, Maybe::Present(0));
    assert_eq!(evaluated.get(), 1);
}

#[rstest]
fn last_matching_visits_every_element() {
    let evaluated = Cell::new(0);
    let last = users().into_iter().last_matching(|user| {
        evaluated.set(evaluated.get() + 1);
        !user.admin
    });
    assert_eq!(last.map(|user| user.name), Maybe::Present("grace"));
    assert_eq!(evaluated.get(), 3);
}

#[rstest]
fn single_matching_finds_the_only_admin() {
    let admin = users().into_iter().single_matching(|user| user.admin);
    assert_eq!(admin.map(|found| found.map(|user| user.name)), Ok(Maybe::Present("ada")));
}

#[rstest]
fn single_matching_rejects_two_matches() {
    let regular = users().into_iter().single_matching(|user| !user.admin);
    assert_eq!(regular, Err(MultipleMatches));
    assert_eq!(
        regular.unwrap_err().to_string(),
        "sequence contains more than one matching element"
    );
}

#[rstest]
#[case(vec![], Ok(Maybe::Empty))]
#[case(vec![5, 7], Ok(Maybe::Empty))]
#[case(vec![5, 2, 7], Ok(Maybe::Present(2)))]
#[case(vec![2, 5, 4], Err(MultipleMatches))]
fn single_matching_cases(
    #[case] input: Vec<i32>,
    #[case] expected: Result<Maybe<i32>, MultipleMatches>,
) {
    assert_eq!(input.into_iter().single_matching(|x| x % 2 == 0), expected);
}

// =============================================================================
// Not-null Variants
// =============================================================================

#[rstest]
fn not_null_variants_skip_none() {
    let raw = vec![None, Some(1), None, Some(2), Some(3), None];
    assert_eq!(raw.clone().into_iter().first_not_null(|x| *x > 1), Maybe::Present(2));
    assert_eq!(raw.clone().into_iter().last_not_null(|x| *x < 3), Maybe::Present(2));
    assert_eq!(raw.clone().into_iter().single_not_null(|x| *x == 3), Ok(Maybe::Present(3)));
    assert_eq!(raw.into_iter().single_not_null(|_| true), Err(MultipleMatches));
}

#[rstest]
fn all_none_is_empty_not_error() {
    let raw: Vec<Option<i32>> = vec![None, None];
    assert_eq!(raw.into_iter().single_not_null(|_| true), Ok(Maybe::Empty));
}

// =============================================================================
// Values
// =============================================================================

#[rstest]
fn values_of_maybes() {
    let found = vec![Maybe::Present(1), Maybe::Empty, Maybe::Present(2)];
    assert_eq!(found.into_iter().values().collect::<Vec<_>>(), vec![1, 2]);
}

#[rstest]
fn values_of_mixed_outcomes_with_predicate() {
    let outcomes: Vec<Try<i32>> = ["1", "x", "30", "4"]
        .into_iter()
        .map(|text| Try::of(|| text.parse::<i32>()))
        .collect();
    assert_eq!(values_of(outcomes, |x| *x < 10).collect::<Vec<_>>(), vec![1, 4]);
}

#[rstest]
fn values_of_eithers_takes_left() {
    let sides: Vec<Either<char, u8>> = vec![Either::Left('a'), Either::Right(1), Either::Left('b')];
    assert_eq!(sides.into_iter().values().collect::<String>(), "ab");
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_first_matching_agrees_with_find(values in prop::collection::vec(any::<i16>(), 0..50)) {
        let expected = values.iter().copied().find(|x| x % 3 == 0);
        prop_assert_eq!(values.into_iter().first_matching(|x| x % 3 == 0), Maybe::from(expected));
    }

    #[test]
    fn prop_single_matching_counts(values in prop::collection::vec(any::<i16>(), 0..50)) {
        let count = values.iter().filter(|x| **x % 5 == 0).count();
        let result = values.into_iter().single_matching(|x| x % 5 == 0);
        match count {
            0 => prop_assert_eq!(result, Ok(Maybe::Empty)),
            1 => prop_assert!(matches!(result, Ok(Maybe::Present(_)))),
            _ => prop_assert_eq!(result, Err(MultipleMatches)),
        }
    }

    #[test]
    fn prop_values_count_matches_present(values in prop::collection::vec(any::<Option<u8>>(), 0..50)) {
        let present = values.iter().flatten().count();
        let extracted = values.into_iter().map(Maybe::from).values().count();
        prop_assert_eq!(extracted, present);
    }
}
