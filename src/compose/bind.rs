//! Binding a function to a receiver value.
//!
//! Rust has no ambient receiver, so binding is expressed as explicit
//! closure capture: the receiver is moved (or shared) into the returned
//! callable and supplied as the function's first parameter on every call.

use std::rc::Rc;

/// Binds a function to a receiver, producing a callable that no longer
/// needs one.
///
/// `method` takes the receiver by reference as its first parameter;
/// `bind` captures `context` by value and forwards each call's argument
/// unchanged. A call that conceptually takes several arguments takes them
/// as a tuple; a call that takes none takes `()`.
///
/// The wrapper is transparent: it performs no validation, and anything the
/// bound function does (including panicking) happens exactly as if it had
/// been called directly.
///
/// # Examples
///
/// ```
/// use fnkit::compose::bind;
///
/// struct Counter { step: i32 }
///
/// fn advance(receiver: &Counter, from: i32) -> i32 {
///     from + receiver.step
/// }
///
/// let by_two = bind(advance, Counter { step: 2 });
/// assert_eq!(by_two(10), 12);
/// assert_eq!(by_two(12), 14);
/// ```
///
/// ## Zero-argument calls
///
/// ```
/// use fnkit::compose::bind;
///
/// struct Named { name: String }
///
/// fn name_of(receiver: &Named, (): ()) -> String {
///     receiver.name.clone()
/// }
///
/// let bound = bind(name_of, Named { name: "John Doe".to_string() });
/// assert_eq!(bound(()), "John Doe");
/// ```
#[inline]
pub fn bind<Context, Argument, Output, Method>(
    method: Method,
    context: Context,
) -> impl Fn(Argument) -> Output
where
    Method: Fn(&Context, Argument) -> Output,
{
    move |argument| method(&context, argument)
}

/// Binds a function to a shared receiver.
///
/// Like [`bind`], but the receiver is an [`Rc`], so several bound callables
/// can observe the same receiver value.
///
/// # Examples
///
/// ```
/// use std::rc::Rc;
/// use fnkit::compose::bind_shared;
///
/// struct Config { prefix: &'static str }
///
/// fn tag(receiver: &Config, value: i32) -> String {
///     format!("{}{}", receiver.prefix, value)
/// }
///
/// fn untag(receiver: &Config, text: String) -> Option<i32> {
///     text.strip_prefix(receiver.prefix)?.parse().ok()
/// }
///
/// let config = Rc::new(Config { prefix: "id-" });
/// let tagger = bind_shared(tag, Rc::clone(&config));
/// let untagger = bind_shared(untag, config);
///
/// assert_eq!(tagger(7), "id-7");
/// assert_eq!(untagger("id-7".to_string()), Some(7));
/// ```
#[inline]
pub fn bind_shared<Context, Argument, Output, Method>(
    method: Method,
    context: Rc<Context>,
) -> impl Fn(Argument) -> Output
where
    Method: Fn(&Context, Argument) -> Output,
{
    move |argument| method(&context, argument)
}
