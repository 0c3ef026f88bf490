//! Dynamic-arity currying with grouped application.
//!
//! The `curryN!` macros fix one argument per step and encode the arity in
//! the type. [`Curried`] is the runtime counterpart: arguments share one
//! type, the arity is a value, and each application may supply any number
//! of arguments at once. Arguments accumulate until the declared arity is
//! satisfied, at which point the wrapped function runs.

use std::rc::Rc;

use smallvec::SmallVec;

/// How many accumulated arguments are stored inline before spilling to the
/// heap.
const INLINE_ARGUMENTS: usize = 4;

/// A curried function over a uniform argument type.
///
/// Created with [`Curried::new`] from a function taking an ordered argument
/// slice and the arity to wait for. Each [`apply`](Curried::apply) extends
/// a private copy of the accumulated argument list:
///
/// - once the accumulated count reaches the arity, the wrapped function is
///   invoked with the full list (surplus arguments included) and the result
///   is returned as [`Applied::Complete`];
/// - otherwise a new `Curried` carrying the extended list is returned as
///   [`Applied::Partial`].
///
/// Because every application copies before extending, partially-applied
/// values are independent branches: applying the same `Curried` twice with
/// different arguments yields two unrelated completions.
///
/// # Examples
///
/// ## Arbitrary groupings are equivalent
///
/// ```
/// use fnkit::compose::Curried;
///
/// let add3 = Curried::new(3, |args: &[i32]| args.iter().sum::<i32>());
///
/// let one_at_a_time = add3
///     .apply([1])
///     .into_partial()
///     .unwrap()
///     .apply([2])
///     .into_partial()
///     .unwrap()
///     .apply([3])
///     .into_complete()
///     .unwrap();
///
/// let grouped = add3.apply([1, 2]).into_partial().unwrap().apply([3]);
/// let all_at_once = add3.apply([1, 2, 3]);
///
/// assert_eq!(one_at_a_time, 6);
/// assert_eq!(grouped.into_complete(), Some(6));
/// assert_eq!(all_at_once.into_complete(), Some(6));
/// ```
///
/// ## Branches are independent
///
/// ```
/// use fnkit::compose::Curried;
///
/// let join = Curried::new(2, |parts: &[&str]| parts.join("-"));
/// let with_prefix = join.apply(["a"]).into_partial().unwrap();
///
/// assert_eq!(with_prefix.apply(["b"]).into_complete(), Some("a-b".to_string()));
/// assert_eq!(with_prefix.apply(["c"]).into_complete(), Some("a-c".to_string()));
/// ```
pub struct Curried<A, R, F> {
    function: Rc<F>,
    arity: usize,
    accumulated: SmallVec<[A; INLINE_ARGUMENTS]>,
    _output: std::marker::PhantomData<R>,
}

/// The outcome of applying arguments to a [`Curried`] function.
#[derive(Debug)]
pub enum Applied<A, R, F> {
    /// Enough arguments accumulated; the wrapped function ran and produced
    /// this result.
    Complete(R),
    /// Not enough arguments yet; continue from this branch.
    Partial(Curried<A, R, F>),
}

impl<A, R, F> Curried<A, R, F>
where
    A: Clone,
    F: Fn(&[A]) -> R,
{
    /// Wraps `function` as a curried callable waiting for `arity`
    /// arguments.
    ///
    /// The arity is captured once here; Rust functions cannot report their
    /// parameter count at runtime, so the slice-taking `function` declares
    /// it explicitly. An arity of 0 means the first application invokes
    /// the function immediately, even with no arguments.
    ///
    /// # Examples
    ///
    /// ```
    /// use fnkit::compose::Curried;
    ///
    /// let product = Curried::new(2, |args: &[i32]| args.iter().product::<i32>());
    /// assert_eq!(product.apply([6, 7]).into_complete(), Some(42));
    /// ```
    pub fn new(arity: usize, function: F) -> Self {
        Self {
            function: Rc::new(function),
            arity,
            accumulated: SmallVec::new(),
            _output: std::marker::PhantomData,
        }
    }

    /// The declared arity of the wrapped function.
    #[inline]
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// How many arguments this branch has accumulated so far.
    #[inline]
    pub fn accumulated_len(&self) -> usize {
        self.accumulated.len()
    }

    /// Applies a group of arguments.
    ///
    /// Extends a copy of this branch's accumulated list with `arguments`.
    /// If the extended count reaches the arity, the wrapped function is
    /// invoked with the complete ordered list (surplus arguments are passed
    /// through as well) and its result is returned as
    /// [`Applied::Complete`]. Otherwise the extended branch is returned as
    /// [`Applied::Partial`].
    ///
    /// This branch itself is left untouched and can be applied again.
    pub fn apply<I>(&self, arguments: I) -> Applied<A, R, F>
    where
        I: IntoIterator<Item = A>,
    {
        let mut accumulated = self.accumulated.clone();
        accumulated.extend(arguments);

        if accumulated.len() >= self.arity {
            Applied::Complete((self.function)(&accumulated))
        } else {
            Applied::Partial(Self {
                function: Rc::clone(&self.function),
                arity: self.arity,
                accumulated,
                _output: std::marker::PhantomData,
            })
        }
    }
}

impl<A: Clone, R, F> Clone for Curried<A, R, F> {
    fn clone(&self) -> Self {
        Self {
            function: Rc::clone(&self.function),
            arity: self.arity,
            accumulated: self.accumulated.clone(),
            _output: std::marker::PhantomData,
        }
    }
}

impl<A, R, F> std::fmt::Debug for Curried<A, R, F> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Curried")
            .field("arity", &self.arity)
            .field("accumulated", &self.accumulated.len())
            .finish_non_exhaustive()
    }
}

impl<A, R, F> Applied<A, R, F> {
    /// Returns `true` if the application completed.
    #[inline]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }

    /// The completed result, if the application completed.
    pub fn into_complete(self) -> Option<R> {
        match self {
            Self::Complete(result) => Some(result),
            Self::Partial(_) => None,
        }
    }

    /// The continuation branch, if more arguments are needed.
    pub fn into_partial(self) -> Option<Curried<A, R, F>> {
        match self {
            Self::Complete(_) => None,
            Self::Partial(curried) => Some(curried),
        }
    }
}
