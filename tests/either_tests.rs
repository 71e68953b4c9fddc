//! Unit tests for Either<L, R> type.
//!
//! Either represents a value that can be one of two types:
//! - `Left(L)`: Contains a value of type L, conventionally a failure
//! - `Right(R)`: Contains a value of type R, conventionally a success
//!
//! Every combinator is right-biased and leaves a `Left` untouched.

#![cfg(feature = "control")]

use effectus::control::{Either, IllegalVariantError, Optional, left, right};
use rstest::rstest;
use std::cell::Cell;
use std::panic::{AssertUnwindSafe, catch_unwind, panic_any};

// =============================================================================
// Basic Construction and Type Checking
// =============================================================================

#[rstest]
fn either_left_is_left() {
    let value: Either<i32, String> = Either::Left(42);
    assert!(value.is_left());
    assert!(!value.is_right());
}

#[rstest]
fn either_right_is_right() {
    let value: Either<i32, String> = Either::Right("hello".to_string());
    assert!(value.is_right());
    assert!(!value.is_left());
}

#[rstest]
fn factory_functions_build_the_matching_variant() {
    assert_eq!(left::<_, i32>("Hello"), Either::Left("Hello"));
    assert_eq!(right::<&str, _>(12), Either::Right(12));
}

#[rstest]
#[case(false, Either::Left("Left"))]
#[case(true, Either::Right("Right"))]
fn conditionally_selects_variant(#[case] test: bool, #[case] expected: Either<&str, &str>) {
    assert_eq!(Either::conditionally(test, || "Left", || "Right"), expected);
}

// =============================================================================
// Fold Operations
// =============================================================================

#[rstest]
fn fold_dispatches_to_exactly_one_handler() {
    let left_calls = Cell::new(0);
    let right_calls = Cell::new(0);

    let value: Either<i32, i32> = Either::Right(5);
    let result = value.fold(
        |l| {
            left_calls.set(left_calls.get() + 1);
            l
        },
        |r| {
            right_calls.set(right_calls.get() + 1);
            r * 2
        },
    );

    assert_eq!(result, 10);
    assert_eq!(left_calls.get(), 0);
    assert_eq!(right_calls.get(), 1);
}

#[rstest]
fn fold_left_on_left_returns_initial() {
    let value: Either<&str, i32> = Either::Left("failure");
    let result = value.fold_left("initial".to_string(), |acc, r| format!("{acc}{r}"));
    assert_eq!(result, "initial");
}

#[rstest]
fn fold_left_on_right_combines() {
    let value: Either<&str, i32> = Either::Right(7);
    let result = value.fold_left("initial".to_string(), |acc, r| format!("{acc}{r}"));
    assert_eq!(result, "initial7");
}

#[rstest]
fn bifold_left_on_left() {
    let value: Either<i32, &str> = Either::Left(3);
    let result = value.bifold_left(10, |acc, l| acc + l, |acc, r: &str| acc * r.len() as i32);
    assert_eq!(result, 13);
}

#[rstest]
fn bifold_left_on_right() {
    let value: Either<i32, &str> = Either::Right("abcd");
    let result = value.bifold_left(10, |acc, l| acc + l, |acc, r: &str| acc * r.len() as i32);
    assert_eq!(result, 40);
}

// =============================================================================
// Swap
// =============================================================================

#[rstest]
fn swap_left_hello_becomes_right() {
    let swapped = Either::<&str, i32>::Left("Hello").swap();
    assert!(swapped.is_right());
    assert_eq!(swapped.or_null(), Some("Hello"));
}

#[rstest]
fn swap_right_becomes_left() {
    let swapped = Either::<i32, &str>::Right("right").swap();
    assert_eq!(swapped, Either::Left("right"));
}

// =============================================================================
// Mapping Operations
// =============================================================================

#[rstest]
fn map_on_right() {
    let value: Either<i32, i32> = Either::Right(12);
    assert_eq!(value.map(|_| "flower"), Either::Right("flower"));
}

#[rstest]
fn map_on_left_never_invokes_function() {
    let calls = Cell::new(0);
    let value: Either<i32, i32> = Either::Left(12);
    let result = value.map(|_| {
        calls.set(calls.get() + 1);
        "flower"
    });
    assert_eq!(result, Either::Left(12));
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn map_left_on_left() {
    let value: Either<i32, i32> = Either::Left(12);
    assert_eq!(value.map_left(|_| "flower"), Either::Left("flower"));
}

#[rstest]
fn map_left_on_right_never_invokes_function() {
    let calls = Cell::new(0);
    let value: Either<i32, i32> = Either::Right(12);
    let result = value.map_left(|_| {
        calls.set(calls.get() + 1);
        "flower"
    });
    assert_eq!(result, Either::Right(12));
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn flat_map_on_right_returns_function_result() {
    let value: Either<String, i32> = Either::Right(4);
    let result: Either<String, u8> = value.flat_map(|x| Either::Left(format!("rejected {x}")));
    assert_eq!(result, Either::Left("rejected 4".to_string()));
}

#[rstest]
fn flat_map_on_left_never_invokes_function() {
    let calls = Cell::new(0);
    let value: Either<String, i32> = Either::Left("first".to_string());
    let result = value.flat_map(|x| {
        calls.set(calls.get() + 1);
        Either::<String, i32>::Right(x)
    });
    assert_eq!(result, Either::Left("first".to_string()));
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn bimap_on_left() {
    let value: Either<i32, String> = Either::Left(21);
    assert_eq!(value.bimap(|x| x * 2, |s| s.len()), Either::Left(42));
}

#[rstest]
fn bimap_on_right() {
    let value: Either<i32, String> = Either::Right("hello".to_string());
    assert_eq!(value.bimap(|x| x * 2, |s| s.len()), Either::Right(5));
}

#[rstest]
fn void_replaces_right_with_unit() {
    let value: Either<i32, &str> = Either::Right("payload");
    assert_eq!(value.void(), Either::Right(()));
}

// =============================================================================
// Effects
// =============================================================================

#[rstest]
fn tap_on_right_runs_effect_and_returns_self() {
    let seen = Cell::new(0);
    let value: Either<&str, i32> = Either::Right(12);
    assert_eq!(value.tap(|r| seen.set(*r)), Either::Right(12));
    assert_eq!(seen.get(), 12);
}

#[rstest]
fn tap_on_left_is_a_no_op() {
    let seen = Cell::new(0);
    let value: Either<&str, i32> = Either::Left("no");
    assert_eq!(value.tap(|r| seen.set(*r)), Either::Left("no"));
    assert_eq!(seen.get(), 0);
}

#[rstest]
fn tap_left_on_left_runs_effect() {
    let seen = Cell::new(0);
    let value: Either<i32, &str> = Either::Left(12);
    assert_eq!(value.tap_left(|l| seen.set(*l)), Either::Left(12));
    assert_eq!(seen.get(), 12);
}

#[rstest]
fn tap_left_on_right_is_a_no_op() {
    let seen = Cell::new(0);
    let value: Either<i32, &str> = Either::Right("yes");
    assert_eq!(value.tap_left(|l| seen.set(*l)), Either::Right("yes"));
    assert_eq!(seen.get(), 0);
}

// =============================================================================
// Value Extraction
// =============================================================================

#[rstest]
fn get_or_else_on_right_skips_fallback() {
    let calls = Cell::new(0);
    let value: Either<i32, i32> = Either::Right(12);
    let result = value.get_or_else(|| {
        calls.set(calls.get() + 1);
        17
    });
    assert_eq!(result, 12);
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn get_or_else_on_left_runs_fallback_once() {
    let calls = Cell::new(0);
    let value: Either<i32, i32> = Either::Left(12);
    let result = value.get_or_else(|| {
        calls.set(calls.get() + 1);
        17
    });
    assert_eq!(result, 17);
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn get_or_handle_sees_left_payload() {
    let calls = Cell::new(0);
    let value: Either<i32, i32> = Either::Left(12);
    let result = value.get_or_handle(|l| {
        calls.set(calls.get() + 1);
        l + 5
    });
    assert_eq!(result, 17);
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn get_or_handle_on_right() {
    let value: Either<i32, i32> = Either::Right(12);
    assert_eq!(value.get_or_handle(|l| l + 5), 12);
}

#[rstest]
#[case(Either::Right(12), Some(12))]
#[case(Either::Left(12), None)]
fn or_null(#[case] value: Either<i32, i32>, #[case] expected: Option<i32>) {
    assert_eq!(value.or_null(), expected);
}

#[rstest]
#[case(Either::Right(12), Optional::Some(12))]
#[case(Either::Left(12), Optional::None)]
fn or_none(#[case] value: Either<i32, i32>, #[case] expected: Optional<i32>) {
    assert_eq!(value.or_none(), expected);
}

#[rstest]
#[case(Either::Left(10), 5, None)]
#[case(Either::Right(10), 5, Some(10))]
#[case(Either::Right(3), 5, None)]
fn find_or_null_greater_than(
    #[case] value: Either<i32, i32>,
    #[case] bound: i32,
    #[case] expected: Option<i32>,
) {
    assert_eq!(value.find_or_null(|r| *r > bound), expected);
}

#[rstest]
fn reference_extraction() {
    let value: Either<i32, String> = Either::Left(42);
    assert_eq!(value.left_ref(), Some(&42));
    assert_eq!(value.right_ref(), None);
}

// =============================================================================
// Predicates
// =============================================================================

#[rstest]
#[case(Either::Right(12), true)]
#[case(Either::Right(7), false)]
#[case(Either::Left(12), false)]
fn exists_greater_than_ten(#[case] value: Either<i32, i32>, #[case] expected: bool) {
    assert_eq!(value.exists(|it| *it > 10), expected);
}

#[rstest]
#[case(Either::Right(12), true)]
#[case(Either::Right(7), false)]
#[case(Either::Left(7), true)]
fn all_greater_than_ten(#[case] value: Either<i32, i32>, #[case] expected: bool) {
    assert_eq!(value.all(|it| *it > 10), expected);
}

#[rstest]
fn emptiness_follows_variant() {
    let left: Either<&str, &str> = Either::Left("foo");
    let right: Either<&str, &str> = Either::Right("foo");
    assert!(left.is_empty());
    assert!(!left.is_not_empty());
    assert!(!right.is_empty());
    assert!(right.is_not_empty());
}

// =============================================================================
// Traversal
// =============================================================================

fn split_characters(text: &str) -> Vec<String> {
    text.chars().map(String::from).collect()
}

#[rstest]
fn traverse_right_wraps_every_element() {
    let value: Either<i32, &str> = Either::Right("abc");
    assert_eq!(
        value.traverse(split_characters),
        vec![
            Either::Right("a".to_string()),
            Either::Right("b".to_string()),
            Either::Right("c".to_string()),
        ]
    );
}

#[rstest]
fn traverse_left_is_empty_and_skips_function() {
    let calls = Cell::new(0);
    let value: Either<i32, &str> = Either::Left(1);
    let result = value.traverse(|text| {
        calls.set(calls.get() + 1);
        split_characters(text)
    });
    assert!(result.is_empty());
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn traverse_nullable_left_is_absent() {
    let value: Either<i32, &str> = Either::Left(1);
    assert_eq!(value.traverse_nullable(split_characters), None);
}

#[rstest]
fn traverse_nullable_right_has_three_elements() {
    let value: Either<i32, &str> = Either::Right("abc");
    let result = value.traverse_nullable(split_characters);
    assert_eq!(result.map(|elements| elements.len()), Some(3));
}

// =============================================================================
// Panic Capture
// =============================================================================

#[rstest]
fn catch_normal_return_is_right() {
    let result = Either::catch(|| "Hey there :)");
    assert!(result.is_right());
    assert_eq!(result.or_null(), Some("Hey there :)"));
}

#[rstest]
fn catch_panic_with_error_value_is_left() {
    let result = Either::catch(|| -> String {
        panic_any(std::io::Error::other("Something horrible has happened."))
    });
    assert!(result.is_left());
    let message = result
        .fold(|payload| payload.downcast::<std::io::Error>().ok(), |_| None)
        .map(|error| error.to_string());
    assert_eq!(message.as_deref(), Some("Something horrible has happened."));
}

#[rstest]
fn catch_panic_with_plain_string_is_left() {
    let result = Either::catch(|| -> String { panic!("Something horrible has happened.") });
    let message = result.fold(|payload| payload.downcast_ref::<&str>().copied(), |_| None);
    assert_eq!(message, Some("Something horrible has happened."));
}

#[rstest]
fn catch_and_flatten_right_is_right() {
    let result = Either::catch_and_flatten(|| Either::<String, i32>::Right(3));
    assert_eq!(result.or_null(), Some(3));
}

#[rstest]
fn catch_and_flatten_panic_is_left() {
    let result = Either::catch_and_flatten(|| -> Either<String, i32> { panic_any(7_u8) });
    let payload = result.fold(|payload| payload.downcast_ref::<u8>().copied(), |_| None);
    assert_eq!(payload, Some(7));
}

#[rstest]
fn catch_and_flatten_nested_left_is_an_illegal_variant() {
    let outcome = catch_unwind(AssertUnwindSafe(|| {
        Either::catch_and_flatten(|| Either::<String, i32>::Left("nested".to_string()))
    }));
    let error = outcome
        .err()
        .and_then(|payload| payload.downcast::<IllegalVariantError>().ok());
    assert_eq!(error.map(|error| error.operation), Some("catch_and_flatten"));
}

// =============================================================================
// Result Conversion
// =============================================================================

#[rstest]
fn result_conversion() {
    let ok: Result<i32, String> = Ok(42);
    assert_eq!(Either::from(ok), Either::Right(42));

    let left: Either<String, i32> = Either::Left("error".to_string());
    let result: Result<i32, String> = left.into();
    assert_eq!(result, Err("error".to_string()));
}
