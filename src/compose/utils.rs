//! Helper functions (combinators) for function composition.
//!
//! This module provides fundamental combinators that are commonly used in
//! functional programming:
//!
//! - [`identity`]: The identity function (I combinator)
//! - [`constant`]: Creates a function that always returns the same value (K combinator)
//! - [`flip`]: Swaps the arguments of a binary function (C combinator)

/// Returns the value unchanged.
///
/// The identity function is the unit element of function composition:
/// - `compose!(identity, f)` is equivalent to `f`
/// - `compose!(f, identity)` is equivalent to `f`
///
/// # Examples
///
/// ```
/// use fnkit::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
///
/// # Use with function composition
///
/// ```
/// use fnkit::compose;
/// use fnkit::compose::identity;
///
/// fn double(x: i32) -> i32 { x * 2 }
///
/// let composed = compose!(identity, double);
/// assert_eq!(composed(5), double(5));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its
/// input.
///
/// Also known as the K combinator. Useful when an adapter expects a function
/// but the result should not depend on the input.
///
/// # Type Parameters
///
/// * `T` - The type of the constant value (must implement [`Clone`])
/// * `U` - The input type of the returned function (ignored)
///
/// # Examples
///
/// ```
/// use fnkit::compose::constant;
///
/// let always_five = constant::<_, i32>(5);
/// assert_eq!(always_five(100), 5);
/// ```
///
/// # Use with iterators
///
/// ```
/// use fnkit::compose::constant;
///
/// let zeroed: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(zeroed, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// Given a function `f(a, b)`, returns a new function `g` such that
/// `g(b, a) == f(a, b)`. Also known as the C combinator. Useful together
/// with currying when the argument to fix is the second one.
///
/// # Laws
///
/// - **Double flip identity**: `flip(flip(f)) == f`
/// - **Flip definition**: `flip(f)(a, b) == f(b, a)`
///
/// # Examples
///
/// ```
/// use fnkit::compose::flip;
///
/// fn divide(numerator: f64, denominator: f64) -> f64 {
///     numerator / denominator
/// }
///
/// let flipped_divide = flip(divide);
///
/// assert_eq!(divide(10.0, 2.0), 5.0);
/// // flipped_divide(10.0, 2.0) = divide(2.0, 10.0) = 0.2
/// assert!((flipped_divide(10.0, 2.0) - 0.2).abs() < f64::EPSILON);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}

/// Placeholder marker type for partial application.
///
/// This type is used internally by the [`partial!`](crate::partial) macro.
/// Users should write `__` (double underscore) directly in the macro
/// invocation as a literal token, without importing it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placeholder;

/// The placeholder constant for partial application.
///
/// **Important**: Do NOT import this constant when using
/// [`partial!`](crate::partial). The macro matches `__` as a literal token;
/// importing the constant would break that matching.
///
/// Note: This is named `__` (double underscore) because Rust's
/// `macro_rules!` cannot match a single underscore `_` as a literal token.
#[allow(non_upper_case_globals)]
pub const __: Placeholder = Placeholder;
