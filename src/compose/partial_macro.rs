//! The `partial!` macro for partial function application.
//!
//! This module provides the [`partial!`] macro which fixes some arguments
//! of a function while leaving others as parameters of the resulting
//! callable.

/// Partially applies arguments to a function.
///
/// Use `__` (double underscore) as a placeholder for arguments that should
/// remain as parameters in the resulting function. Fixed arguments are
/// captured once and passed, in their original positions, on every call.
///
/// **Important**: Do NOT import `fnkit::compose::__`. The `__` is matched
/// as a literal token by the macro.
///
/// # Syntax
///
/// For a 2-argument function `f(a, b)`:
/// - `partial!(f, value, __)` creates `|b| f(value, b)`
/// - `partial!(f, __, value)` creates `|a| f(a, value)`
/// - `partial!(f, v1, v2)` creates `|| f(v1, v2)` (thunk)
/// - `partial!(f, __, __)` creates `|a, b| f(a, b)` (identity)
///
/// 3-argument functions support every placeholder combination; 4-argument
/// functions support fixing a leading prefix.
///
/// # Type Requirements
///
/// - Fixed values must implement [`Clone`] (the partial function may be
///   called multiple times)
/// - The original function must implement [`Fn`]
///
/// # Examples
///
/// ## Basic partial application
///
/// ```
/// use fnkit::partial;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let add_five = partial!(add, 5, __);
/// assert_eq!(add_five(3), 8);
/// assert_eq!(add_five(10), 15);
/// ```
///
/// ## Fixing the second argument
///
/// ```
/// use fnkit::partial;
///
/// fn divide(numerator: f64, denominator: f64) -> f64 {
///     numerator / denominator
/// }
///
/// let half = partial!(divide, __, 2.0);
/// assert_eq!(half(10.0), 5.0);
/// ```
///
/// ## Repeated partial application
///
/// Partially applying the result of `partial!` again concatenates the
/// fixations in application order:
///
/// ```
/// use fnkit::partial;
///
/// fn add_three(a: i32, b: i32, c: i32) -> i32 { a + b + c }
///
/// let with_one = partial!(add_three, 1, __, __);
/// let with_one_two = partial!(with_one, 2, __);
/// assert_eq!(with_one_two(3), add_three(1, 2, 3));
/// ```
///
/// ## With compose!
///
/// ```
/// use fnkit::{compose, partial};
///
/// fn multiply(first: i32, second: i32) -> i32 { first * second }
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let double = partial!(multiply, 2, __);
/// let add_ten = partial!(add, 10, __);
///
/// let double_then_add_ten = compose!(add_ten, double);
/// assert_eq!(double_then_add_ten(5), 20);
/// ```
#[macro_export]
macro_rules! partial {
    // =========================================================================
    // 4-argument functions (leading prefix)
    // =========================================================================

    // (f, __, __, __, __) -> |a, b, c, d| f(a, b, c, d)
    ($function:expr, __, __, __, __ $(,)?) => {{
        let function = $function;
        move |first, second, third, fourth| function(first, second, third, fourth)
    }};

    // (f, v1, __, __, __) -> |b, c, d| f(v1, b, c, d)
    ($function:expr, $first:expr, __, __, __ $(,)?) => {{
        let function = $function;
        let first = $first;
        move |second, third, fourth| function(first.clone(), second, third, fourth)
    }};

    // (f, v1, v2, __, __) -> |c, d| f(v1, v2, c, d)
    ($function:expr, $first:expr, $second:expr, __, __ $(,)?) => {{
        let function = $function;
        let first = $first;
        let second = $second;
        move |third, fourth| function(first.clone(), second.clone(), third, fourth)
    }};

    // (f, v1, v2, v3, __) -> |d| f(v1, v2, v3, d)
    ($function:expr, $first:expr, $second:expr, $third:expr, __ $(,)?) => {{
        let function = $function;
        let first = $first;
        let second = $second;
        let third = $third;
        move |fourth| function(first.clone(), second.clone(), third.clone(), fourth)
    }};

    // =========================================================================
    // 3-argument functions (all placeholder combinations)
    // =========================================================================

    // (f, __, __, __) -> |a, b, c| f(a, b, c)
    ($function:expr, __, __, __ $(,)?) => {{
        let function = $function;
        move |first, second, third| function(first, second, third)
    }};

    // (f, v1, __, __) -> |b, c| f(v1, b, c)
    ($function:expr, $first:expr, __, __ $(,)?) => {{
        let function = $function;
        let first = $first;
        move |second, third| function(first.clone(), second, third)
    }};

    // (f, __, v2, __) -> |a, c| f(a, v2, c)
    ($function:expr, __, $second:expr, __ $(,)?) => {{
        let function = $function;
        let second = $second;
        move |first, third| function(first, second.clone(), third)
    }};

    // (f, __, __, v3) -> |a, b| f(a, b, v3)
    ($function:expr, __, __, $third:expr $(,)?) => {{
        let function = $function;
        let third = $third;
        move |first, second| function(first, second, third.clone())
    }};

    // (f, v1, v2, __) -> |c| f(v1, v2, c)
    ($function:expr, $first:expr, $second:expr, __ $(,)?) => {{
        let function = $function;
        let first = $first;
        let second = $second;
        move |third| function(first.clone(), second.clone(), third)
    }};

    // (f, v1, __, v3) -> |b| f(v1, b, v3)
    ($function:expr, $first:expr, __, $third:expr $(,)?) => {{
        let function = $function;
        let first = $first;
        let third = $third;
        move |second| function(first.clone(), second, third.clone())
    }};

    // (f, __, v2, v3) -> |a| f(a, v2, v3)
    ($function:expr, __, $second:expr, $third:expr $(,)?) => {{
        let function = $function;
        let second = $second;
        let third = $third;
        move |first| function(first, second.clone(), third.clone())
    }};

    // (f, v1, v2, v3) -> || f(v1, v2, v3) (thunk)
    ($function:expr, $first:expr, $second:expr, $third:expr $(,)?) => {{
        let function = $function;
        let first = $first;
        let second = $second;
        let third = $third;
        move || function(first.clone(), second.clone(), third.clone())
    }};

    // =========================================================================
    // 2-argument functions
    // =========================================================================

    // (f, __, __) -> |a, b| f(a, b)
    ($function:expr, __, __ $(,)?) => {{
        let function = $function;
        move |first, second| function(first, second)
    }};

    // (f, v1, __) -> |b| f(v1, b)
    ($function:expr, $first:expr, __ $(,)?) => {{
        let function = $function;
        let first = $first;
        move |second| function(first.clone(), second)
    }};

    // (f, __, v2) -> |a| f(a, v2)
    ($function:expr, __, $second:expr $(,)?) => {{
        let function = $function;
        let second = $second;
        move |first| function(first, second.clone())
    }};

    // (f, v1, v2) -> || f(v1, v2) (thunk)
    ($function:expr, $first:expr, $second:expr $(,)?) => {{
        let function = $function;
        let first = $first;
        let second = $second;
        move || function(first.clone(), second.clone())
    }};
}
