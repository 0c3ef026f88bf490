//! Runtime function composition over a uniform type.
//!
//! The [`compose!`](crate::compose!) macro composes a chain whose length
//! and types are known at compile time. [`Composition`] is its runtime
//! counterpart: an ordered sequence of boxed functions over one type,
//! assembled dynamically and evaluated right-to-left. Unlike the macro,
//! an empty sequence can be represented, so invoking one is a defined
//! error rather than an unchecked edge case.

use std::fmt;

/// Error returned when an empty [`Composition`] is invoked.
///
/// There is no identity fallback for a composition of zero functions; the
/// caller must supply at least one.
///
/// # Examples
///
/// ```rust
/// use fnkit::compose::{Composition, EmptyCompositionError};
///
/// let empty: Composition<i32> = Composition::new();
/// assert_eq!(empty.call(1), Err(EmptyCompositionError));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyCompositionError;

impl fmt::Display for EmptyCompositionError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "Composition::call: empty function sequence. Compose at least one function."
        )
    }
}

impl std::error::Error for EmptyCompositionError {}

/// An ordered sequence of functions over one type, applied right-to-left.
///
/// Functions are supplied outermost-first, exactly like the arguments of
/// [`compose!`](crate::compose!): the function added last is applied first
/// and receives the call's input; every other function is applied to the
/// return value of the function to its right. The chain is stateless after
/// construction and can be called any number of times.
///
/// # Examples
///
/// ```rust
/// use fnkit::compose::Composition;
///
/// let composed = Composition::new()
///     .with(|x: i32| x * x) // applied second
///     .with(|x: i32| x + 1); // applied first
///
/// // square(add_one(2)) = 9
/// assert_eq!(composed.call(2), Ok(9));
/// ```
///
/// ## Assembling from boxed functions
///
/// ```rust
/// use fnkit::compose::Composition;
///
/// let stages: Vec<Box<dyn Fn(String) -> String>> = vec![
///     Box::new(|s| format!("{s}!")),
///     Box::new(|s: String| s.to_uppercase()),
/// ];
///
/// let composed = Composition::from_functions(stages);
/// assert_eq!(composed.call("hey".to_string()), Ok("HEY!".to_string()));
/// ```
pub struct Composition<T> {
    functions: Vec<Box<dyn Fn(T) -> T>>,
}

impl<T> Composition<T> {
    /// Creates an empty composition.
    ///
    /// An empty composition is a valid value but cannot be invoked; add
    /// functions with [`with`](Self::with) before calling.
    #[inline]
    pub fn new() -> Self {
        Self {
            functions: Vec::new(),
        }
    }

    /// Wraps an already-ordered sequence of functions, outermost first.
    #[inline]
    pub fn from_functions(functions: Vec<Box<dyn Fn(T) -> T>>) -> Self {
        Self { functions }
    }

    /// Appends a function to the inner end of the chain.
    ///
    /// The function added last is applied first, mirroring the
    /// right-to-left reading of `compose!`.
    #[must_use]
    pub fn with<F>(mut self, function: F) -> Self
    where
        F: Fn(T) -> T + 'static,
    {
        self.functions.push(Box::new(function));
        self
    }

    /// The number of functions in the chain.
    #[inline]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Returns `true` if the chain holds no functions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Applies the chain to `input`, right-to-left.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyCompositionError`] if the chain holds no functions.
    pub fn call(&self, input: T) -> Result<T, EmptyCompositionError> {
        if self.functions.is_empty() {
            return Err(EmptyCompositionError);
        }

        let mut value = input;
        for function in self.functions.iter().rev() {
            value = function(value);
        }
        Ok(value)
    }
}

impl<T> Default for Composition<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Composition<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Composition")
            .field("functions", &self.functions.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_function() {
        let composed = Composition::new().with(|x: i32| x * 3);
        assert_eq!(composed.call(4), Ok(12));
    }

    #[test]
    fn test_right_to_left_order() {
        // with() order mirrors compose!: last added runs first
        let composed = Composition::new()
            .with(|x: i32| x * x)
            .with(|x: i32| x + 1);
        assert_eq!(composed.call(2), Ok(9));
    }

    #[test]
    fn test_empty_composition_fails() {
        let empty: Composition<String> = Composition::new();
        let error = empty.call("input".to_string()).unwrap_err();
        assert_eq!(error, EmptyCompositionError);
        assert!(error.to_string().contains("empty function sequence"));
    }

    #[test]
    fn test_reusable() {
        let composed = Composition::new().with(|x: i32| x + 1);
        assert_eq!(composed.call(1), Ok(2));
        assert_eq!(composed.call(41), Ok(42));
    }
}
