//! Numeric helpers: aggregates, rounding, and small conversions.

use rand::Rng;

/// The sum of a slice of numbers; `0.0` for an empty slice.
#[inline]
pub fn sum(numbers: &[f64]) -> f64 {
    numbers.iter().sum()
}

/// Rounds a number to the given number of decimal places.
///
/// # Examples
///
/// ```rust
/// use fnkit::math::round;
///
/// assert_eq!(round(3.14159, 2), 3.14);
/// assert_eq!(round(2.5, 0), 3.0);
/// ```
pub fn round(number: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (number * factor).round() / factor
}

/// The arithmetic mean of a slice of numbers.
///
/// An empty slice yields NaN (zero divided by zero).
#[allow(clippy::cast_precision_loss)]
pub fn average(numbers: &[f64]) -> f64 {
    sum(numbers) / numbers.len() as f64
}

/// The factorial of a number; `factorial(0)` is 1.
///
/// # Examples
///
/// ```rust
/// use fnkit::math::factorial;
///
/// assert_eq!(factorial(0), 1);
/// assert_eq!(factorial(5), 120);
/// ```
#[inline]
pub fn factorial(number: u64) -> u64 {
    (1..=number).product()
}

/// The largest value in a slice; negative infinity for an empty slice.
pub fn max(numbers: &[f64]) -> f64 {
    numbers.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// The smallest value in a slice; positive infinity for an empty slice.
pub fn min(numbers: &[f64]) -> f64 {
    numbers.iter().copied().fold(f64::INFINITY, f64::min)
}

/// The remainder of dividing `dividend` by `divisor`.
///
/// Keeps the dividend's sign, like the `%` operator.
#[inline]
pub fn modulo(dividend: f64, divisor: f64) -> f64 {
    dividend % divisor
}

/// A random number in the half-open range `[minimum, maximum)`.
///
/// # Panics
///
/// Panics if `minimum >= maximum`.
pub fn random_between(minimum: f64, maximum: f64) -> f64 {
    rand::rng().random_range(minimum..maximum)
}

/// A random integer between `minimum` and `maximum`, inclusive.
///
/// # Panics
///
/// Panics if `minimum > maximum`.
pub fn random_int_between(minimum: i64, maximum: i64) -> i64 {
    rand::rng().random_range(minimum..=maximum)
}

/// Converts degrees to radians.
#[inline]
pub fn to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Converts radians to degrees.
#[inline]
pub fn to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}
