//! The curry macro family for converting multi-argument functions to
//! curried form.
//!
//! This module provides macros for currying functions with 2 to 6
//! arguments. Currying transforms a function that takes multiple arguments
//! into a sequence of functions, each fixing exactly one argument.
//!
//! # Design Decisions
//!
//! The curry macros use `std::rc::Rc` internally to share the function and
//! the already-fixed arguments across closure invocations. This allows:
//!
//! - The curried function to be called multiple times
//! - Partial applications to be reused as independent branches
//! - Argument types that don't implement `Copy` to work correctly
//!
//! Each step fixes exactly one argument; the arity is encoded in the macro
//! name and checked by the compiler. When the number of arguments is only
//! known at runtime, or arguments arrive in groups, use
//! [`Curried`](crate::compose::Curried) instead.

/// Converts a 2-argument function into a curried form.
///
/// Given a function `f(a, b) -> c`, returns a closure that takes `a` and
/// returns another closure that takes `b` and returns `c`.
///
/// # Type Requirements
///
/// - The function must implement [`Fn`]
/// - Argument types (except the last) must implement [`Clone`], so partial
///   applications stay reusable
///
/// # Examples
///
/// ## Basic currying
///
/// ```
/// use fnkit::curry2;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let curried_add = curry2!(add);
/// assert_eq!(curried_add(5)(3), 8);
/// ```
///
/// ## Reusable partial application
///
/// ```
/// use fnkit::curry2;
///
/// fn multiply(first: i32, second: i32) -> i32 { first * second }
///
/// let curried = curry2!(multiply);
/// let double = curried(2);
/// let triple = curried(3);
///
/// assert_eq!(double(5), 10);
/// assert_eq!(triple(5), 15);
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            let first = ::std::rc::Rc::new(first);
            move |second| function(::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&first)), second)
        }
    }};
}

/// Converts a 3-argument function into a curried form.
///
/// Given a function `f(a, b, c) -> d`, returns nested closures that fix one
/// argument at a time: `curry3!(f)(a)(b)(c) == f(a, b, c)`.
///
/// # Type Requirements
///
/// - The function must implement [`Fn`]
/// - Argument types (except the last) must implement [`Clone`]
///
/// # Examples
///
/// ```
/// use fnkit::curry3;
///
/// fn add_three(first: i32, second: i32, third: i32) -> i32 {
///     first + second + third
/// }
///
/// let curried = curry3!(add_three);
/// assert_eq!(curried(1)(2)(3), 6);
/// ```
///
/// ## Step-by-step application
///
/// ```
/// use fnkit::curry3;
///
/// fn volume(width: f64, height: f64, depth: f64) -> f64 {
///     width * height * depth
/// }
///
/// let curried_volume = curry3!(volume);
/// let with_width = curried_volume(2.0);
/// let with_width_height = with_width(3.0);
///
/// assert!((with_width_height(4.0) - 24.0).abs() < f64::EPSILON);
/// ```
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            let first = ::std::rc::Rc::new(first);
            move |second| {
                let function = ::std::rc::Rc::clone(&function);
                let first = ::std::rc::Rc::clone(&first);
                let second = ::std::rc::Rc::new(second);
                move |third| function(::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&first)), ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&second)), third)
            }
        }
    }};
}

/// Converts a 4-argument function into a curried form.
///
/// # Examples
///
/// ```
/// use fnkit::curry4;
///
/// fn sum_four(a: i32, b: i32, c: i32, d: i32) -> i32 {
///     a + b + c + d
/// }
///
/// let curried = curry4!(sum_four);
/// assert_eq!(curried(1)(2)(3)(4), 10);
/// ```
#[macro_export]
macro_rules! curry4 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            let first = ::std::rc::Rc::new(first);
            move |second| {
                let function = ::std::rc::Rc::clone(&function);
                let first = ::std::rc::Rc::clone(&first);
                let second = ::std::rc::Rc::new(second);
                move |third| {
                    let function = ::std::rc::Rc::clone(&function);
                    let first = ::std::rc::Rc::clone(&first);
                    let second = ::std::rc::Rc::clone(&second);
                    let third = ::std::rc::Rc::new(third);
                    move |fourth| {
                        function(
                            ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&first)),
                            ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&second)),
                            ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&third)),
                            fourth,
                        )
                    }
                }
            }
        }
    }};
}

/// Converts a 5-argument function into a curried form.
///
/// # Examples
///
/// ```
/// use fnkit::curry5;
///
/// fn sum_five(a: i32, b: i32, c: i32, d: i32, e: i32) -> i32 {
///     a + b + c + d + e
/// }
///
/// let curried = curry5!(sum_five);
/// assert_eq!(curried(1)(2)(3)(4)(5), 15);
/// ```
#[macro_export]
macro_rules! curry5 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            let first = ::std::rc::Rc::new(first);
            move |second| {
                let function = ::std::rc::Rc::clone(&function);
                let first = ::std::rc::Rc::clone(&first);
                let second = ::std::rc::Rc::new(second);
                move |third| {
                    let function = ::std::rc::Rc::clone(&function);
                    let first = ::std::rc::Rc::clone(&first);
                    let second = ::std::rc::Rc::clone(&second);
                    let third = ::std::rc::Rc::new(third);
                    move |fourth| {
                        let function = ::std::rc::Rc::clone(&function);
                        let first = ::std::rc::Rc::clone(&first);
                        let second = ::std::rc::Rc::clone(&second);
                        let third = ::std::rc::Rc::clone(&third);
                        let fourth = ::std::rc::Rc::new(fourth);
                        move |fifth| {
                            function(
                                ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&first)),
                                ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&second)),
                                ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&third)),
                                ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&fourth)),
                                fifth,
                            )
                        }
                    }
                }
            }
        }
    }};
}

/// Converts a 6-argument function into a curried form.
///
/// # Examples
///
/// ```
/// use fnkit::curry6;
///
/// fn sum_six(a: i32, b: i32, c: i32, d: i32, e: i32, f: i32) -> i32 {
///     a + b + c + d + e + f
/// }
///
/// let curried = curry6!(sum_six);
/// assert_eq!(curried(1)(2)(3)(4)(5)(6), 21);
/// ```
#[macro_export]
macro_rules! curry6 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            let first = ::std::rc::Rc::new(first);
            move |second| {
                let function = ::std::rc::Rc::clone(&function);
                let first = ::std::rc::Rc::clone(&first);
                let second = ::std::rc::Rc::new(second);
                move |third| {
                    let function = ::std::rc::Rc::clone(&function);
                    let first = ::std::rc::Rc::clone(&first);
                    let second = ::std::rc::Rc::clone(&second);
                    let third = ::std::rc::Rc::new(third);
                    move |fourth| {
                        let function = ::std::rc::Rc::clone(&function);
                        let first = ::std::rc::Rc::clone(&first);
                        let second = ::std::rc::Rc::clone(&second);
                        let third = ::std::rc::Rc::clone(&third);
                        let fourth = ::std::rc::Rc::new(fourth);
                        move |fifth| {
                            let function = ::std::rc::Rc::clone(&function);
                            let first = ::std::rc::Rc::clone(&first);
                            let second = ::std::rc::Rc::clone(&second);
                            let third = ::std::rc::Rc::clone(&third);
                            let fourth = ::std::rc::Rc::clone(&fourth);
                            let fifth = ::std::rc::Rc::new(fifth);
                            move |sixth| {
                                function(
                                    ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&first)),
                                    ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&second)),
                                    ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&third)),
                                    ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&fourth)),
                                    ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&fifth)),
                                    sixth,
                                )
                            }
                        }
                    }
                }
            }
        }
    }};
}

#[cfg(test)]
mod tests {
    fn subtract(minuend: i32, subtrahend: i32) -> i32 {
        minuend - subtrahend
    }

    fn join_three(first: &str, second: &str, third: &str) -> String {
        format!("{first}-{second}-{third}")
    }

    #[test]
    fn test_curry2_basic() {
        let curried = curry2!(subtract);
        assert_eq!(curried(10)(3), 7);
    }

    #[test]
    fn test_curry2_branches_are_independent() {
        let curried = curry2!(subtract);
        let from_ten = curried(10);
        assert_eq!(from_ten(3), 7);
        assert_eq!(from_ten(7), 3);
    }

    #[test]
    fn test_curry3_with_non_copy_arguments() {
        let curried = curry3!(join_three);
        let with_prefix = curried("a");
        assert_eq!(with_prefix("b")("c"), "a-b-c");
        assert_eq!(with_prefix("x")("y"), "a-x-y");
    }
}
