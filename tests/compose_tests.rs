//! Unit tests for the compose! and pipe! macros.
//!
//! Tests cover right-to-left evaluation order, multi-argument entry points
//! via tuples, type conversion through the chain, and the equivalence
//! between compose! and pipe!.

#![cfg(feature = "compose")]

use fnkit::{compose, pipe};

fn add_one(x: i32) -> i32 {
    x + 1
}

fn double(x: i32) -> i32 {
    x * 2
}

fn square(x: i32) -> i32 {
    x * x
}

// =============================================================================
// compose! tests
// =============================================================================

mod compose_macro_tests {
    use super::*;

    #[test]
    fn test_compose_single_function_is_identity_composition() {
        let composed = compose!(double);
        assert_eq!(composed(21), 42);
    }

    #[test]
    fn test_compose_two_functions_right_to_left() {
        // add_one(double(5)) = 11, NOT double(add_one(5)) = 12
        let composed = compose!(add_one, double);
        assert_eq!(composed(5), 11);
    }

    #[test]
    fn test_compose_rightmost_receives_original_arguments() {
        // The entry point takes the call's arguments as a tuple:
        // square(add(1, 2)) = 9
        let add = |(a, b): (i32, i32)| a + b;
        let composed = compose!(square, add);
        assert_eq!(composed((1, 2)), 9);
    }

    #[test]
    fn test_compose_three_functions() {
        // add_one(double(square(3))) = add_one(18) = 19
        let composed = compose!(add_one, double, square);
        assert_eq!(composed(3), 19);
    }

    #[test]
    fn test_compose_changes_types_through_chain() {
        let to_text = |x: i32| x.to_string();
        let count_chars = |s: String| s.len();
        let composed = compose!(count_chars, to_text);
        assert_eq!(composed(1_000_000), 7);
    }

    #[test]
    fn test_composed_function_is_reusable() {
        let composed = compose!(add_one, double);
        assert_eq!(composed(0), 1);
        assert_eq!(composed(10), 21);
        assert_eq!(composed(-4), -7);
    }

    #[test]
    fn test_compose_with_capturing_closures() {
        let offset = 100;
        let shift = move |x: i32| x + offset;
        let composed = compose!(double, shift);
        assert_eq!(composed(1), 202);
    }
}

// =============================================================================
// pipe! tests
// =============================================================================

mod pipe_macro_tests {
    use super::*;

    #[test]
    fn test_pipe_bare_value() {
        assert_eq!(pipe!(7), 7);
    }

    #[test]
    fn test_pipe_applies_left_to_right() {
        // square(double(add_one(2))) = square(6) = 36
        assert_eq!(pipe!(2, add_one, double, square), 36);
    }

    #[test]
    fn test_pipe_matches_reversed_compose() {
        let composed = compose!(square, double, add_one);
        assert_eq!(pipe!(5, add_one, double, square), composed(5));
    }

    #[test]
    fn test_pipe_through_string_stages() {
        let trimmed = pipe!(
            "  loud  ",
            str::trim,
            str::to_uppercase,
            |s: String| format!("{s}!")
        );
        assert_eq!(trimmed, "LOUD!");
    }
}
