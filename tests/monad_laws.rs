#![cfg(feature = "typeclass")]
//! Property-based tests for Monad laws.
//!
//! - **Left Identity**: `pure(a).flat_map(f) == f(a)`
//! - **Right Identity**: `m.flat_map(pure) == m`
//! - **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`

use mettle::control::{Either, Maybe, Try};
use mettle::typeclass::Monad;
use proptest::prelude::*;

fn half(n: i32) -> Maybe<i32> {
    if n % 2 == 0 { Maybe::Present(n / 2) } else { Maybe::Empty }
}

fn positive(n: i32) -> Maybe<i32> {
    if n > 0 { Maybe::Present(n) } else { Maybe::Empty }
}

fn checked_double(n: i32) -> Either<i32, String> {
    n.checked_mul(2)
        .map_or_else(|| Either::Right(format!("{n} overflows")), Either::Left)
}

fn checked_increment(n: i32) -> Either<i32, String> {
    n.checked_add(1)
        .map_or_else(|| Either::Right(format!("{n} overflows")), Either::Left)
}

fn parse_back(n: i32) -> Try<i64> {
    Try::of(|| n.to_string().parse::<i64>())
}

fn reciprocal(n: i64) -> Try<f64> {
    if n == 0 {
        Try::failure(std::fmt::Error)
    } else {
        #[allow(clippy::cast_precision_loss)]
        Try::success(1.0 / n as f64)
    }
}

// =============================================================================
// Maybe
// =============================================================================

proptest! {
    #[test]
    fn prop_maybe_left_identity(value: i32) {
        prop_assert_eq!(<Maybe<i32> as Monad>::pure(value).flat_map(half), half(value));
    }

    #[test]
    fn prop_maybe_right_identity(value in any::<Option<i32>>().prop_map(Maybe::from)) {
        prop_assert_eq!(Monad::flat_map(value, Maybe::Present), value);
    }

    #[test]
    fn prop_maybe_associativity(value in any::<Option<i32>>().prop_map(Maybe::from)) {
        let left = Monad::flat_map(Monad::flat_map(value, half), positive);
        let right = Monad::flat_map(value, |x| Monad::flat_map(half(x), positive));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Either
// =============================================================================

proptest! {
    #[test]
    fn prop_either_left_identity(value: i32) {
        let lifted = <Either<i32, String> as Monad>::pure(value);
        prop_assert_eq!(Monad::flat_map(lifted, checked_double), checked_double(value));
    }

    #[test]
    fn prop_either_right_identity(value: i32, is_left: bool) {
        let either: Either<i32, String> =
            if is_left { Either::Left(value) } else { Either::Right(value.to_string()) };
        prop_assert_eq!(Monad::flat_map(either.clone(), Either::Left), either);
    }

    #[test]
    fn prop_either_associativity(value: i32) {
        let either: Either<i32, String> = Either::Left(value);
        let left = Monad::flat_map(Monad::flat_map(either.clone(), checked_double), checked_increment);
        let right = Monad::flat_map(either, |x| Monad::flat_map(checked_double(x), checked_increment));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Try
// =============================================================================

proptest! {
    #[test]
    fn prop_try_left_identity(value: i32) {
        let left = Monad::flat_map(<Try<i32> as Monad>::pure(value), parse_back);
        prop_assert_eq!(left.value().copied(), parse_back(value).value().copied());
    }

    #[test]
    fn prop_try_right_identity(value: i32) {
        let attempt = Try::success(value);
        prop_assert_eq!(Monad::flat_map(attempt.clone(), Try::Success), attempt);
    }

    #[test]
    fn prop_try_associativity(value in -5i32..5) {
        let left = Monad::flat_map(Monad::flat_map(Try::success(value), parse_back), reciprocal);
        let right = Monad::flat_map(Try::success(value), |x| Monad::flat_map(parse_back(x), reciprocal));
        prop_assert_eq!(left.is_success(), right.is_success());
        prop_assert_eq!(left.value().copied(), right.value().copied());
    }
}
