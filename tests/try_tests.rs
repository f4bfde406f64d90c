//! Unit tests for Try<T>.
//!
//! Try holds the outcome of a fallible computation:
//! - `Success(T)`: the computation produced a value
//! - `Failure(Failure)`: it returned an error or panicked

#![cfg(feature = "control")]

use std::cell::Cell;
use std::io;

use mettle::control::{
    CancellationPolicy, Cancelled, Either, Failure, InvalidArgument, Maybe, PanicError, Try,
};
use rstest::rstest;

fn parse(text: &str) -> Try<i32> {
    Try::of(|| text.parse::<i32>())
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn of_captures_ok_and_err() {
    assert_eq!(parse("12"), Try::Success(12));
    let failed = parse("twelve");
    assert!(failed.is_failure());
    assert!(failed.error().is_some_and(|failure| failure.is::<std::num::ParseIntError>()));
}

#[rstest]
fn of_captures_panics() {
    let attempt: Try<i32> = Try::of(|| -> Result<i32, io::Error> { panic!("boom") });
    let failure = attempt.error().cloned().unwrap();
    assert!(failure.is_panic());
    assert_eq!(failure.message(), "panicked: boom");
    assert_eq!(
        failure.downcast_ref::<PanicError>().map(|panic| panic.message.as_str()),
        Some("boom")
    );
}

#[rstest]
fn capture_wraps_infallible_computation() {
    assert_eq!(Try::capture(|| 5), Try::Success(5));
    let panicked: Try<i32> = Try::capture(|| panic!("{}", "formatted"));
    assert_eq!(panicked.error().map(|failure| failure.message()), Some("panicked: formatted".to_string()));
}

#[rstest]
fn failure_from_requires_an_error() {
    let missing = Try::<i32>::failure_from(None::<io::Error>);
    assert!(matches!(missing, Err(InvalidArgument { name: "error", .. })));
    let present = Try::<i32>::failure_from(Some(io::Error::other("disk")));
    assert!(present.is_ok_and(|attempt| attempt.is_failure()));
}

#[rstest]
#[case(CancellationPolicy::Capture, true)]
#[case(CancellationPolicy::Propagate, false)]
fn cancellation_policy(#[case] policy: CancellationPolicy, #[case] captured: bool) {
    let outcome = Try::<i32>::of_with_policy(|| Err(Cancelled), policy);
    assert_eq!(outcome.is_ok(), captured);
    if !captured {
        assert_eq!(outcome, Err(Cancelled));
    }
}

#[rstest]
fn default_policy_captures_cancellation() {
    assert_eq!(CancellationPolicy::default(), CancellationPolicy::Capture);
    let attempt = Try::<i32>::of(|| Err(Cancelled));
    assert!(attempt.error().is_some_and(|failure| failure.is_cancellation()));
}

// =============================================================================
// Combinators
// =============================================================================

#[rstest]
fn map_captures_panic_of_function() {
    let attempt = Try::success(1).map(|_| -> i32 { panic!("mapper") });
    assert!(attempt.error().is_some_and(|failure| failure.is_panic()));
}

#[rstest]
fn map_on_failure_keeps_the_same_failure() {
    let failed = parse("x");
    let mapped = failed.clone().map(|x| x + 1);
    assert_eq!(mapped, failed);
}

#[rstest]
fn try_map_captures_err() {
    let attempt = Try::success("nan").try_map(str::parse::<f64>);
    assert!(attempt.is_success());
    let attempt = Try::success("x").try_map(str::parse::<u8>);
    assert!(attempt.is_failure());
}

#[rstest]
fn flat_map_chains() {
    let doubled = parse("21").flat_map(|x| Try::success(x * 2));
    assert_eq!(doubled, Try::Success(42));
}

#[rstest]
fn recover_replaces_failure() {
    assert_eq!(parse("?").recover(|_| -1), Try::Success(-1));
    assert_eq!(parse("3").recover(|_| -1), Try::Success(3));
}

#[rstest]
fn or_else_substitutes_another_try() {
    assert_eq!(parse("?").or_else(|_| parse("4")), Try::Success(4));
}

#[rstest]
fn value_or_else_receives_failure() {
    let message = Try::<String>::failure(io::Error::other("gone")).value_or_else(|failure| failure.message());
    assert_eq!(message, "gone");
}

#[rstest]
fn flatten_prefers_outer_failure() {
    let outer: Try<Try<i32>> = Try::failure(io::Error::other("outer"));
    assert_eq!(outer.flatten().error().map(|failure| failure.message()), Some("outer".to_string()));
    let inner: Try<Try<i32>> = Try::success(Try::failure(io::Error::other("inner")));
    assert_eq!(inner.flatten().error().map(|failure| failure.message()), Some("inner".to_string()));
    let both: Try<Try<i32>> = Try::success(Try::success(1));
    assert_eq!(both.flatten(), Try::Success(1));
}

// =============================================================================
// Rethrow
// =============================================================================

#[rstest]
fn throw_reraises_failure() {
    assert_eq!(parse("1").throw(), Ok(Try::Success(1)));
    let error = parse("one").throw().unwrap_err();
    assert!(error.is::<std::num::ParseIntError>());
}

#[rstest]
fn throw_if_is_selective() {
    let failed: Try<i32> = Try::failure(io::Error::other("io"));
    assert!(failed.clone().throw_if::<std::num::ParseIntError>().is_ok_and(|attempt| attempt.is_failure()));
    assert!(failed.throw_if::<io::Error>().is_err());
}

#[rstest]
fn into_result_uses_failure_as_error() {
    assert_eq!(parse("8").into_result(), Ok(8));
    assert!(parse("eight").into_result().is_err());
}

// =============================================================================
// Side Effects and Conversions
// =============================================================================

#[rstest]
fn do_with_dispatches_on_tag() {
    let values = Cell::new(0);
    let errors = Cell::new(0);
    for text in ["1", "x", "2"] {
        let _ = parse(text).do_with(
            |value| values.set(values.get() + value),
            |_| errors.set(errors.get() + 1),
        );
    }
    assert_eq!((values.get(), errors.get()), (3, 1));
}

#[rstest]
fn do_optional_requires_a_callback() {
    let attempt = parse("1");
    assert!(attempt.do_optional(None::<fn(&i32)>, None::<fn(&Failure)>).is_err());
}

#[rstest]
#[case("5", true, Ok(Maybe::Present(5)))]
#[case("five", false, Ok(Maybe::Empty))]
fn to_maybe_swallows_ordinary_failures(
    #[case] text: &str,
    #[case] suppress: bool,
    #[case] expected: Result<Maybe<i32>, Cancelled>,
) {
    assert_eq!(parse(text).to_maybe(suppress), expected);
}

#[rstest]
fn to_maybe_propagates_cancellation_unless_suppressed() {
    let cancelled: Try<i32> = Try::failure(Cancelled);
    assert_eq!(cancelled.clone().to_maybe(false), Err(Cancelled));
    assert_eq!(cancelled.to_maybe(true), Ok(Maybe::Empty));
}

#[rstest]
fn as_either_projects_failure() {
    assert_eq!(parse("2").as_either(|failure| failure.message()), Either::Left(2));
    assert!(parse("two").to_either().is_right());
}

#[rstest]
fn failure_equality_is_identity() {
    let first: Try<i32> = Try::failure(io::Error::other("same"));
    let second: Try<i32> = Try::failure(io::Error::other("same"));
    assert_ne!(first, second);
    assert_eq!(first.clone(), first);
}
