//! Unit tests for the partial! macro.
//!
//! Tests for placeholder-based partial application, thunks, and repeated
//! (chained) partial application.

#![cfg(feature = "compose")]

use fnkit::partial;

fn add(first: i32, second: i32) -> i32 {
    first + second
}

fn add3(first: i32, second: i32, third: i32) -> i32 {
    first + second + third
}

fn clamp(value: i32, low: i32, high: i32) -> i32 {
    value.max(low).min(high)
}

// =============================================================================
// 2-argument functions
// =============================================================================

#[test]
fn test_partial_fixes_first_argument() {
    let add_ten = partial!(add, 10, __);
    assert_eq!(add_ten(5), 15);
    assert_eq!(add_ten(-10), 0);
}

#[test]
fn test_partial_fixes_second_argument() {
    let plus_three = partial!(add, __, 3);
    assert_eq!(plus_three(4), 7);
}

#[test]
fn test_partial_all_fixed_is_thunk() {
    let thunk = partial!(add, 20, 22);
    assert_eq!(thunk(), 42);
    assert_eq!(thunk(), 42); // reusable
}

#[test]
fn test_partial_all_placeholders_is_identity_adapter() {
    let still_add = partial!(add, __, __);
    assert_eq!(still_add(1, 2), add(1, 2));
}

// =============================================================================
// 3-argument functions
// =============================================================================

#[test]
fn test_partial_leading_prefix() {
    let from_one = partial!(add3, 1, __, __);
    assert_eq!(from_one(2, 3), 6);
}

#[test]
fn test_partial_keeps_argument_positions() {
    // clamp(value, low, high) with low and high fixed
    let into_percent = partial!(clamp, __, 0, 100);
    assert_eq!(into_percent(150), 100);
    assert_eq!(into_percent(-3), 0);
    assert_eq!(into_percent(42), 42);
}

#[test]
fn test_partial_middle_argument_open() {
    let bounded_five = partial!(clamp, 5, __, 10);
    assert_eq!(bounded_five(0), 5);
    assert_eq!(bounded_five(7), 7);
}

// =============================================================================
// Chained partial application
// =============================================================================

#[test]
fn test_repeated_partial_concatenates_fixations() {
    let with_one = partial!(add3, 1, __, __);
    let with_one_two = partial!(with_one, 2, __);
    assert_eq!(with_one_two(3), add3(1, 2, 3));
}

#[test]
fn test_chained_partial_is_reusable() {
    let with_one = partial!(add3, 1, __, __);
    let with_one_two = partial!(with_one, 2, __);
    assert_eq!(with_one_two(0), 3);
    assert_eq!(with_one_two(10), 13);
}

#[test]
fn test_partial_with_cloned_fixed_values() {
    fn join(separator: String, left: String, right: String) -> String {
        format!("{left}{separator}{right}")
    }

    let dashed = partial!(join, "-".to_string(), __, __);
    assert_eq!(dashed("a".to_string(), "b".to_string()), "a-b");
    assert_eq!(dashed("x".to_string(), "y".to_string()), "x-y");
}
