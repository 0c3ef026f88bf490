//! String helpers: casing, slicing, searching, and small conversions.
//!
//! All helpers operate on `char` boundaries, so indices count characters
//! rather than bytes.

use std::sync::LazyLock;

use regex::Regex;

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w+\b").unwrap());
static NON_SLUG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w ]+").unwrap());
static SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" +").unwrap());

/// Reverses a string character by character.
#[inline]
pub fn reverse(string: &str) -> String {
    string.chars().rev().collect()
}

/// Uppercases the first character, leaving the rest unchanged.
///
/// # Examples
///
/// ```rust
/// use fnkit::text::capitalize;
///
/// assert_eq!(capitalize("hello"), "Hello");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(string: &str) -> String {
    let mut characters = string.chars();
    characters.next().map_or_else(String::new, |head| {
        head.to_uppercase().chain(characters).collect()
    })
}

/// Extracts the characters between `start` (inclusive) and `end`
/// (exclusive).
///
/// Returns an empty string when `start > end`; an `end` past the string's
/// length is clamped.
///
/// # Examples
///
/// ```rust
/// use fnkit::text::substring;
///
/// assert_eq!(substring("hello world", 6, 11), "world");
/// assert_eq!(substring("hello", 3, 1), "");
/// assert_eq!(substring("hi", 0, 100), "hi");
/// ```
pub fn substring(string: &str, start: usize, end: usize) -> String {
    if start > end {
        return String::new();
    }
    string.chars().skip(start).take(end - start).collect()
}

/// Returns `true` if the string contains the given substring.
#[inline]
pub fn includes(string: &str, substring: &str) -> bool {
    string.contains(substring)
}

/// Replaces every occurrence of a substring, matched literally.
///
/// An empty search string leaves the input unchanged.
pub fn replace(string: &str, search: &str, replacement: &str) -> String {
    if search.is_empty() {
        return string.to_string();
    }
    string.replace(search, replacement)
}

/// Truncates to `length` characters, appending `suffix` only when
/// something was cut off.
///
/// # Examples
///
/// ```rust
/// use fnkit::text::truncate;
///
/// assert_eq!(truncate("hello world", 5, "..."), "hello...");
/// assert_eq!(truncate("hi", 5, "..."), "hi");
/// ```
pub fn truncate(string: &str, length: usize, suffix: &str) -> String {
    if string.chars().count() > length {
        let kept: String = string.chars().take(length).collect();
        format!("{kept}{suffix}")
    } else {
        string.to_string()
    }
}

/// Repeats a string the given number of times.
#[inline]
pub fn repeat(string: &str, times: usize) -> String {
    string.repeat(times)
}

/// Removes leading and trailing whitespace.
#[inline]
pub fn trim(string: &str) -> String {
    string.trim().to_string()
}

/// Lowercases the string, then capitalizes each space-separated word.
///
/// # Examples
///
/// ```rust
/// use fnkit::text::to_title_case;
///
/// assert_eq!(to_title_case("hello WORLD"), "Hello World");
/// ```
pub fn to_title_case(string: &str) -> String {
    string
        .to_lowercase()
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lowercases the string and joins space-separated words with
/// underscores.
///
/// # Examples
///
/// ```rust
/// use fnkit::text::to_snake_case;
///
/// assert_eq!(to_snake_case("Some Title Here"), "some_title_here");
/// ```
pub fn to_snake_case(string: &str) -> String {
    string
        .split(' ')
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// Lowercases the string and joins space-separated words in camel case.
///
/// # Examples
///
/// ```rust
/// use fnkit::text::to_camel_case;
///
/// assert_eq!(to_camel_case("some title here"), "someTitleHere");
/// ```
pub fn to_camel_case(string: &str) -> String {
    string
        .to_lowercase()
        .split(' ')
        .enumerate()
        .map(|(index, word)| {
            if index > 0 {
                capitalize(word)
            } else {
                word.to_string()
            }
        })
        .collect()
}

/// Converts a string to a URL-friendly slug.
///
/// Lowercases, strips everything except word characters and spaces, and
/// joins runs of spaces with a single hyphen.
///
/// # Examples
///
/// ```rust
/// use fnkit::text::to_slug;
///
/// assert_eq!(to_slug("Hello, World & Friends!"), "hello-world-friends");
/// ```
pub fn to_slug(string: &str) -> String {
    let lowered = string.to_lowercase();
    let stripped = NON_SLUG.replace_all(&lowered, "");
    SPACES.replace_all(&stripped, "-").into_owned()
}

/// Returns `true` for the string `"true"`, in any casing.
#[inline]
pub fn to_boolean(string: &str) -> bool {
    string.to_lowercase() == "true"
}

/// Parses a string as a number, `None` when it isn't one.
#[inline]
pub fn to_number(string: &str) -> Option<f64> {
    string.trim().parse().ok()
}

/// Returns `true` if the string starts with the given substring.
#[inline]
pub fn starts_with(string: &str, substring: &str) -> bool {
    string.starts_with(substring)
}

/// Returns `true` if the string ends with the given substring.
#[inline]
pub fn ends_with(string: &str, substring: &str) -> bool {
    string.ends_with(substring)
}

/// Counts non-overlapping, case-insensitive occurrences of a substring.
///
/// # Examples
///
/// ```rust
/// use fnkit::text::count_substring;
///
/// assert_eq!(count_substring("aAbAa", "a"), 4);
/// assert_eq!(count_substring("hello", "xyz"), 0);
/// ```
pub fn count_substring(string: &str, substring: &str) -> usize {
    if substring.is_empty() {
        return 0;
    }
    string
        .to_lowercase()
        .matches(&substring.to_lowercase())
        .count()
}

/// Returns `true` if the string is empty or whitespace only.
#[inline]
pub fn is_empty(string: &str) -> bool {
    string.trim().is_empty()
}

/// Extracts the words of a string.
///
/// # Examples
///
/// ```rust
/// use fnkit::text::words;
///
/// assert_eq!(words("one, two...three!"), vec!["one", "two", "three"]);
/// assert!(words("  ").is_empty());
/// ```
pub fn words(string: &str) -> Vec<String> {
    WORD.find_iter(string)
        .map(|found| found.as_str().to_string())
        .collect()
}

/// Returns `true` if the string reads the same forwards and backwards.
#[inline]
pub fn is_palindrome(string: &str) -> bool {
    string == reverse(string)
}
