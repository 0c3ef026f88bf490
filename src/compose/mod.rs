//! Function composition and adaptation utilities.
//!
//! This module provides macros and wrapper types for transforming functions
//! in a functional programming style: composing them, currying them, fixing
//! some of their arguments, and binding them to a receiver.
//!
//! # Overview
//!
//! The module provides the following utilities:
//!
//! - [`compose!`]: Compose functions right-to-left (mathematical composition)
//! - [`pipe!`]: Compose functions left-to-right (data flow style)
//! - [`Composition`]: Runtime right-to-left composition over a uniform type,
//!   with a defined error for the empty chain
//! - [`curry2!`] through [`curry6!`]: Convert multi-argument functions to
//!   curried form, one argument per step
//! - [`Curried`]: Dynamic-arity currying with grouped application
//! - [`partial!`]: Partial function application with placeholder support
//! - [`bind`] / [`bind_shared`]: Attach a function to a receiver value
//!
//! # Helper Functions
//!
//! - [`identity`]: The identity function - returns its argument unchanged
//! - [`constant`]: Creates a function that always returns the same value
//! - [`flip`]: Swaps the arguments of a binary function
//!
//! # Examples
//!
//! ## Function Composition (right-to-left)
//!
//! ```
//! use fnkit::compose;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // compose!(f, g)(x) = f(g(x))
//! let composed = compose!(add_one, double);
//! assert_eq!(composed(5), 11); // add_one(double(5)) = add_one(10) = 11
//! ```
//!
//! ## Pipeline (left-to-right)
//!
//! ```
//! use fnkit::pipe;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // pipe!(x, f, g) = g(f(x))
//! let result = pipe!(5, double, add_one);
//! assert_eq!(result, 11); // add_one(double(5)) = 11
//! ```
//!
//! ## Partial Application
//!
//! ```
//! use fnkit::partial;
//!
//! fn add(first: i32, second: i32) -> i32 { first + second }
//!
//! // Use __ as a placeholder for arguments that should remain as parameters.
//! // Note: Do NOT import __ - it is matched as a literal token by the macro.
//! let add_five = partial!(add, 5, __);
//! assert_eq!(add_five(3), 8);
//! ```
//!
//! ## Currying
//!
//! ```
//! use fnkit::curry2;
//!
//! fn add(first: i32, second: i32) -> i32 { first + second }
//!
//! let curried_add = curry2!(add);
//! let add_five = curried_add(5);
//! assert_eq!(add_five(3), 8);
//! ```
//!
//! ## Binding
//!
//! ```
//! use fnkit::compose::bind;
//!
//! struct Greeter { name: String }
//!
//! fn greet(receiver: &Greeter, punctuation: &str) -> String {
//!     format!("Hello, {}{}", receiver.name, punctuation)
//! }
//!
//! let bound = bind(greet, Greeter { name: "Ada".to_string() });
//! assert_eq!(bound("!"), "Hello, Ada!");
//! ```
//!
//! # Mathematical Background
//!
//! ## Function Composition
//!
//! Function composition creates a new function by combining two functions.
//! Given `f: B -> C` and `g: A -> B`, the composition `(f . g): A -> C` is
//! defined as:
//!
//! ```text
//! (f . g)(x) = f(g(x))
//! ```
//!
//! The [`compose!`] macro implements this right-to-left composition.
//!
//! ## Currying
//!
//! Currying transforms a multi-argument function into a sequence of
//! single-argument functions:
//!
//! ```text
//! curry(f)(a)(b)(c) = f(a, b, c)
//! ```
//!
//! The `curryN!` macros fix one argument per step. The [`Curried`] wrapper
//! additionally accepts arguments in arbitrary groups, accumulating them
//! until the declared arity is satisfied.
//!
//! # Laws
//!
//! ## Composition Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Left Identity**: `compose!(identity, f) == f`
//! - **Right Identity**: `compose!(f, identity) == f`
//!
//! ## Flip Laws
//!
//! - **Double Flip Identity**: `flip(flip(f)) == f`
//! - **Flip Definition**: `flip(f)(a, b) == f(b, a)`

mod bind;
mod composition;
mod compose_macro;
mod curried;
mod curry_macro;
mod partial_macro;
mod pipe_macro;
mod utils;

pub use bind::{bind, bind_shared};
pub use composition::{Composition, EmptyCompositionError};
pub use curried::{Applied, Curried};

// Re-export helper functions
pub use utils::{__, Placeholder, constant, flip, identity};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::curry2;
pub use crate::curry3;
pub use crate::curry4;
pub use crate::curry5;
pub use crate::curry6;
pub use crate::partial;
pub use crate::pipe;
