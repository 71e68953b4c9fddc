//! Either type - a value that can be one of two types.
//!
//! This module provides the `Either<L, R>` type, which represents a value
//! that is either a `Left(L)` or a `Right(R)`. By convention `Left` carries
//! the failure branch of a computation and `Right` the success branch, and
//! every combinator is right-biased: `map`, `flat_map`, `exists` and friends
//! act on the `Right` payload and pass a `Left` through untouched.
//!
//! # Examples
//!
//! ```rust
//! use effectus::control::Either;
//!
//! // Creating Either values
//! let left: Either<i32, String> = Either::Left(42);
//! let right: Either<i32, String> = Either::Right("hello".to_string());
//!
//! // Pattern matching
//! match left {
//!     Either::Left(n) => println!("Got left: {}", n),
//!     Either::Right(s) => println!("Got right: {}", s),
//! }
//!
//! // Using fold to handle both cases
//! let result = right.fold(
//!     |n| format!("Number: {}", n),
//!     |s| format!("String: {}", s),
//! );
//! assert_eq!(result, "String: hello");
//! ```

use std::any::Any;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind, panic_any};

use super::{IllegalVariantError, Optional, TypeCategory};

/// The payload of a captured panic, stored verbatim by [`Either::catch`].
pub type PanicPayload = Box<dyn Any + Send + 'static>;

/// Alternative name for [`Either`], matching its debug label.
pub type Outcome<L, R> = Either<L, R>;

/// A value that can be one of two types.
///
/// `Either<L, R>` represents a value that is either `Left(L)` or `Right(R)`.
/// By convention:
/// - `Left` is used to represent failure or the first alternative
/// - `Right` is used to represent success or the second alternative
///
/// # Type Parameters
///
/// * `L` - The type of the left value
/// * `R` - The type of the right value
///
/// # Examples
///
/// ```rust
/// use effectus::control::Either;
///
/// let success: Either<String, i32> = Either::Right(42);
/// let failure: Either<String, i32> = Either::Left("error".to_string());
///
/// assert_eq!(success.map(|x| x * 2), Either::Right(84));
/// assert_eq!(failure.map(|x| x * 2), Either::Left("error".to_string()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// The left variant, conventionally representing failure.
    Left(L),
    /// The right variant, conventionally representing success.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Derived Constructors
    // =========================================================================

    /// Builds a `Right` from `if_true` when `test` holds, otherwise a `Left`
    /// from `if_false`. Only the selected thunk is evaluated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectus::control::Either;
    ///
    /// let left: Either<&str, &str> = Either::conditionally(false, || "Left", || "Right");
    /// assert_eq!(left, Either::Left("Left"));
    ///
    /// let right: Either<&str, &str> = Either::conditionally(true, || "Left", || "Right");
    /// assert_eq!(right, Either::Right("Right"));
    /// ```
    #[inline]
    pub fn conditionally<F, G>(test: bool, if_false: F, if_true: G) -> Self
    where
        F: FnOnce() -> L,
        G: FnOnce() -> R,
    {
        if test {
            Self::Right(if_true())
        } else {
            Self::Left(if_false())
        }
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectus::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert!(left.is_left());
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert!(!right.is_left());
    /// ```
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Returns `true` if this is a `Left`, i.e. there is no right payload.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.is_left()
    }

    /// Returns `true` if this is a `Right`.
    #[inline]
    pub const fn is_not_empty(&self) -> bool {
        self.is_right()
    }

    // =========================================================================
    // Reference Extraction (Non-consuming)
    // =========================================================================

    /// Returns a reference to the left value if present.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    // =========================================================================
    // Fold Operations
    // =========================================================================

    /// Eliminates the Either by applying one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectus::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// let result = left.fold(|x| x.to_string(), |s| s);
    /// assert_eq!(result, "42");
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// let result = right.fold(|x: i32| x.to_string(), |s| s);
    /// assert_eq!(result, "hello");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Combines `initial` with the right payload, or returns `initial` as is
    /// for a `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectus::control::Either;
    ///
    /// let right: Either<&str, i32> = Either::Right(5);
    /// assert_eq!(right.fold_left(10, |acc, r| acc + r), 15);
    ///
    /// let left: Either<&str, i32> = Either::Left("nope");
    /// assert_eq!(left.fold_left(10, |acc, r| acc + r), 10);
    /// ```
    #[inline]
    pub fn fold_left<T, F>(self, initial: T, right_function: F) -> T
    where
        F: FnOnce(T, R) -> T,
    {
        match self {
            Self::Left(_) => initial,
            Self::Right(value) => right_function(initial, value),
        }
    }

    /// Like [`fold`](Self::fold), with `initial` handed to whichever branch
    /// runs.
    #[inline]
    pub fn bifold_left<T, F, G>(self, initial: T, left_function: F, right_function: G) -> T
    where
        F: FnOnce(T, L) -> T,
        G: FnOnce(T, R) -> T,
    {
        match self {
            Self::Left(value) => left_function(initial, value),
            Self::Right(value) => right_function(initial, value),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Swaps the Left and Right variants.
    ///
    /// `Left(l)` becomes `Right(l)`, and `Right(r)` becomes `Left(r)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectus::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.swap(), Either::Right(42));
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.swap(), Either::Left("hello".to_string()));
    /// ```
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    /// Applies a function to the right value if present.
    ///
    /// If this is `Right(r)`, returns `Right(function(r))`.
    /// If this is `Left(l)`, returns `Left(l)` and `function` is never called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectus::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.map(|s| s.len()), Either::Right(5));
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.map(|s: String| s.len()), Either::Left(42));
    /// ```
    #[inline]
    pub fn map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Applies a function to the left value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectus::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.map_left(|x| x * 2), Either::Left(84));
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.map_left(|x: i32| x * 2), Either::Right("hello".to_string()));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Binds a function returning an `Either` across the right value.
    ///
    /// `Right(r).flat_map(f)` is `f(r)`; a `Left` is returned unchanged and
    /// `function` is never called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectus::control::Either;
    ///
    /// fn half(value: i32) -> Either<String, i32> {
    ///     if value % 2 == 0 {
    ///         Either::Right(value / 2)
    ///     } else {
    ///         Either::Left(format!("{value} is odd"))
    ///     }
    /// }
    ///
    /// assert_eq!(Either::Right(8).flat_map(half).flat_map(half), Either::Right(2));
    /// assert_eq!(Either::Right(6).flat_map(half).flat_map(half), Either::Left("3 is odd".to_string()));
    /// ```
    #[inline]
    pub fn flat_map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Applies one of two functions depending on whether this is Left or Right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectus::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// let result = left.bimap(|x| x * 2, |s: String| s.len());
    /// assert_eq!(result, Either::Left(84));
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// let result = right.bimap(|x: i32| x * 2, |s| s.len());
    /// assert_eq!(result, Either::Right(5));
    /// ```
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    /// Replaces the right payload with `()`.
    #[inline]
    pub fn void(self) -> Either<L, ()> {
        self.map(|_| ())
    }

    // =========================================================================
    // Effects
    // =========================================================================

    /// Runs `action` on the right value as a fire-and-forget effect and
    /// returns `self` unchanged. Does nothing on a `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectus::control::Either;
    ///
    /// let mut printed = Vec::new();
    /// let right: Either<i32, i32> = Either::Right(12);
    /// assert_eq!(right.tap(|value| printed.push(*value)), Either::Right(12));
    /// assert_eq!(printed, vec![12]);
    /// ```
    #[inline]
    #[must_use]
    pub fn tap<F>(self, action: F) -> Self
    where
        F: FnOnce(&R),
    {
        if let Self::Right(value) = &self {
            action(value);
        }
        self
    }

    /// Runs `action` on the left value and returns `self` unchanged. Does
    /// nothing on a `Right`.
    #[inline]
    #[must_use]
    pub fn tap_left<F>(self, action: F) -> Self
    where
        F: FnOnce(&L),
    {
        if let Self::Left(value) = &self {
            action(value);
        }
        self
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the right value, or the result of `fallback` for a `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectus::control::Either;
    ///
    /// assert_eq!(Either::<i32, i32>::Right(12).get_or_else(|| 17), 12);
    /// assert_eq!(Either::<i32, i32>::Left(12).get_or_else(|| 17), 17);
    /// ```
    #[inline]
    pub fn get_or_else<F>(self, fallback: F) -> R
    where
        F: FnOnce() -> R,
    {
        self.fold(|_| fallback(), |value| value)
    }

    /// Returns the right value, or lets `handler` turn the left value into one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectus::control::Either;
    ///
    /// assert_eq!(Either::<i32, i32>::Right(12).get_or_handle(|l| l + 5), 12);
    /// assert_eq!(Either::<i32, i32>::Left(12).get_or_handle(|l| l + 5), 17);
    /// ```
    #[inline]
    pub fn get_or_handle<F>(self, handler: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        self.fold(handler, |value| value)
    }

    /// Returns the right value, or `None` for a `Left`.
    #[inline]
    pub fn or_null(self) -> Option<R> {
        self.fold(|_| None, Some)
    }

    /// Returns the right value wrapped in an [`Optional`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectus::control::{Either, Optional};
    ///
    /// assert_eq!(Either::<&str, i32>::Right(1).or_none(), Optional::Some(1));
    /// assert_eq!(Either::<&str, i32>::Left("no").or_none(), Optional::None);
    /// ```
    #[inline]
    pub fn or_none(self) -> Optional<R> {
        self.fold(|_| Optional::None, Optional::Some)
    }

    /// Returns the right value if it satisfies `predicate`, otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectus::control::Either;
    ///
    /// let right: Either<i32, i32> = Either::Right(10);
    /// assert_eq!(right.find_or_null(|r| *r > 5), Some(10));
    /// assert_eq!(right.find_or_null(|r| *r < 5), None);
    ///
    /// let left: Either<i32, i32> = Either::Left(10);
    /// assert_eq!(left.find_or_null(|_| true), None);
    /// ```
    #[inline]
    pub fn find_or_null<P>(self, predicate: P) -> Option<R>
    where
        P: FnOnce(&R) -> bool,
    {
        match self {
            Self::Right(value) if predicate(&value) => Some(value),
            _ => None,
        }
    }

    // =========================================================================
    // Predicates
    // =========================================================================

    /// Returns `false` for a `Left`, otherwise the predicate applied to the
    /// right value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectus::control::Either;
    ///
    /// assert!(Either::<i32, i32>::Right(12).exists(|it| *it > 10));
    /// assert!(!Either::<i32, i32>::Right(7).exists(|it| *it > 10));
    /// assert!(!Either::<i32, i32>::Left(12).exists(|it| *it > 10));
    /// ```
    #[inline]
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&R) -> bool,
    {
        match self {
            Self::Left(_) => false,
            Self::Right(value) => predicate(value),
        }
    }

    /// Returns `true` for a `Left`, otherwise the predicate applied to the
    /// right value.
    #[inline]
    pub fn all<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&R) -> bool,
    {
        match self {
            Self::Left(_) => true,
            Self::Right(value) => predicate(value),
        }
    }

    // =========================================================================
    // Traversal
    // =========================================================================

    /// Spreads the right value across the sequence produced by `function`,
    /// wrapping every element in `Right`.
    ///
    /// A `Left` yields an empty `Vec` and `function` is never called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectus::control::Either;
    ///
    /// let right: Either<i32, &str> = Either::Right("abc");
    /// assert_eq!(
    ///     right.traverse(|s| s.chars()),
    ///     vec![Either::Right('a'), Either::Right('b'), Either::Right('c')]
    /// );
    ///
    /// let left: Either<i32, &str> = Either::Left(1);
    /// assert!(left.traverse(|s| s.chars()).is_empty());
    /// ```
    pub fn traverse<C, I, F>(self, function: F) -> Vec<Either<L, C>>
    where
        F: FnOnce(R) -> I,
        I: IntoIterator<Item = C>,
    {
        self.traverse_nullable(function).unwrap_or_default()
    }

    /// Same as [`traverse`](Self::traverse), but a `Left` yields `None`
    /// instead of an empty `Vec`.
    pub fn traverse_nullable<C, I, F>(self, function: F) -> Option<Vec<Either<L, C>>>
    where
        F: FnOnce(R) -> I,
        I: IntoIterator<Item = C>,
    {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(function(value).into_iter().map(Either::Right).collect()),
        }
    }
}

// =============================================================================
// Panic Capture
// =============================================================================

impl<R> Either<PanicPayload, R> {
    /// Runs `function`, capturing a panic as `Left(payload)`.
    ///
    /// A normal return becomes `Right(value)`. The payload is stored verbatim,
    /// whatever was passed to `panic!` or [`std::panic::panic_any`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectus::control::Either;
    ///
    /// let fine = Either::catch(|| "Hey there :)");
    /// assert_eq!(fine.or_null(), Some("Hey there :)"));
    ///
    /// let broken = Either::catch(|| -> i32 { std::panic::panic_any(404_u16) });
    /// let payload = broken.fold(|payload| payload.downcast::<u16>().ok(), |_| None);
    /// assert_eq!(payload.as_deref(), Some(&404));
    /// ```
    pub fn catch<F>(function: F) -> Self
    where
        F: FnOnce() -> R,
    {
        match catch_unwind(AssertUnwindSafe(function)) {
            Ok(value) => Self::Right(value),
            Err(payload) => {
                tracing::debug!("captured a panic as a left value");
                Self::Left(payload)
            }
        }
    }

    /// Like [`catch`](Self::catch), for a function that itself returns an
    /// `Either`.
    ///
    /// A panic becomes `Left(payload)` and a returned `Right(value)` becomes
    /// `Right(value)`. A returned `Left` is not merged.
    ///
    /// # Panics
    ///
    /// Panics with an [`IllegalVariantError`] payload if `function` returns a
    /// `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectus::control::Either;
    ///
    /// let result = Either::catch_and_flatten(|| Either::<String, i32>::Right(3));
    /// assert_eq!(result.or_null(), Some(3));
    /// ```
    pub fn catch_and_flatten<L, F>(function: F) -> Self
    where
        F: FnOnce() -> Either<L, R>,
    {
        match Either::<PanicPayload, Either<L, R>>::catch(function) {
            Either::Left(payload) => Self::Left(payload),
            Either::Right(Either::Right(value)) => Self::Right(value),
            Either::Right(Either::Left(_)) => {
                let error = IllegalVariantError::new("catch_and_flatten");
                tracing::error!(%error, "wrapped function returned a left value");
                panic_any(error)
            }
        }
    }
}

// =============================================================================
// Formatting
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

/// Formats the debug label `Outcome.Left(<category>)` or
/// `Outcome.Right(<category>)`; the payload itself is never printed.
impl<L: TypeCategory, R: TypeCategory> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "Outcome.Left({})", value.type_category()),
            Self::Right(value) => write!(formatter, "Outcome.Right({})", value.type_category()),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// Converts a `Result` to an `Either`.
    ///
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// Converts an `Either` to a `Result`.
    ///
    /// `Right(r)` becomes `Ok(r)`, and `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        either.fold(Err, Ok)
    }
}
