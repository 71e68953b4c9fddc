//! Optional type - a value that may be absent.
//!
//! `Optional<T>` is either `None` or `Some(T)`. Its combinators mirror those
//! of [`Either`] restricted to a single payload slot, and it is the target
//! of [`Either::or_none`].
//!
//! Rust's own `std::option::Option` plays the part of the *nullable* value:
//! [`Optional::from_nullable`] converts from it and [`Optional::or_null`]
//! converts back.
//!
//! # Examples
//!
//! ```rust
//! use effectus::control::Optional;
//!
//! let name = Optional::from_nullable(Some("Cody"));
//! let greeting = name.map(|name| format!("Hello, {name}"));
//! assert_eq!(greeting.or_null(), Some("Hello, Cody".to_string()));
//!
//! let missing: Optional<&str> = Optional::from_nullable(None);
//! assert!(missing.is_empty());
//! assert_eq!(missing.to_string(), "None()");
//! ```

use std::fmt;

use super::{Either, TypeCategory};

/// A value that is either present (`Some`) or absent (`None`).
///
/// # Examples
///
/// ```rust
/// use effectus::control::Optional;
///
/// let present = Optional::Some(12);
/// assert!(present.is_not_empty());
/// assert_eq!(present.fold(|| 0, |value| value * 2), 24);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Optional<T> {
    /// No value.
    None,
    /// A present value.
    Some(T),
}

impl<T> Optional<T> {
    /// Converts a nullable value.
    ///
    /// `Some(v)` becomes `Optional::Some(v)`; `None` becomes `Optional::None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectus::control::Optional;
    ///
    /// assert!(Optional::from_nullable(None::<&str>).is_empty());
    /// assert!(!Optional::from_nullable(Some("x")).is_empty());
    /// ```
    #[inline]
    pub fn from_nullable(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }

    /// Returns `true` if this is `None`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns `true` if this is `Some`.
    #[inline]
    pub const fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }

    /// Eliminates the optional by running exactly one of the two handlers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectus::control::Optional;
    ///
    /// let none: Optional<i32> = Optional::None;
    /// assert_eq!(none.fold(|| "empty".to_string(), |v| v.to_string()), "empty");
    /// assert_eq!(Optional::Some(3).fold(|| "empty".to_string(), |v| v.to_string()), "3");
    /// ```
    #[inline]
    pub fn fold<C, F, G>(self, on_none: F, on_some: G) -> C
    where
        F: FnOnce() -> C,
        G: FnOnce(T) -> C,
    {
        match self {
            Self::None => on_none(),
            Self::Some(value) => on_some(value),
        }
    }

    /// Returns the payload as a nullable value.
    #[inline]
    pub fn or_null(self) -> Option<T> {
        self.fold(|| None, Some)
    }

    /// Returns the payload, or the result of `fallback` when empty.
    #[inline]
    pub fn get_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.fold(fallback, |value| value)
    }

    /// Applies a function to the payload if present.
    ///
    /// Defined as `flat_map(|v| Some(function(v)))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectus::control::Optional;
    ///
    /// assert_eq!(Optional::Some("foo").map(str::len), Optional::Some(3));
    /// assert_eq!(Optional::<&str>::None.map(str::len), Optional::None);
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        self.flat_map(|value| Optional::Some(function(value)))
    }

    /// Binds a function returning an `Optional` across the payload.
    ///
    /// `function` is not invoked on `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectus::control::Optional;
    ///
    /// let parse = |text: &str| Optional::from_nullable(text.parse::<i32>().ok());
    /// assert_eq!(Optional::Some("12").flat_map(parse), Optional::Some(12));
    /// assert_eq!(Optional::Some("twelve").flat_map(parse), Optional::None);
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Self::None => Optional::None,
            Self::Some(value) => function(value),
        }
    }

    /// Runs `action` on the payload if present and returns `self` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectus::control::Optional;
    ///
    /// let mut seen = Vec::new();
    /// let value = Optional::Some("foo").tap(|v| seen.push(*v));
    /// assert_eq!(value, Optional::Some("foo"));
    /// assert_eq!(seen, vec!["foo"]);
    /// ```
    #[inline]
    #[must_use]
    pub fn tap<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Some(value) = &self {
            action(value);
        }
        self
    }

    /// Runs `action` only when this is `None` and returns `self` unchanged.
    #[inline]
    #[must_use]
    pub fn tap_none<F>(self, action: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_empty() {
            action();
        }
        self
    }

    /// Returns `true` when empty, otherwise the predicate's answer.
    #[inline]
    pub fn all<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::None => true,
            Self::Some(value) => predicate(value),
        }
    }

    /// Returns `false` when empty, otherwise the predicate's answer.
    #[inline]
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::None => false,
            Self::Some(value) => predicate(value),
        }
    }

    /// Keeps the payload only if it satisfies the predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectus::control::Optional;
    ///
    /// assert_eq!(Optional::Some("Foo").filter(|v| *v == "Foo"), Optional::Some("Foo"));
    /// assert!(Optional::Some("Foo").filter(|v| *v == "Bar").is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) if predicate(&value) => Self::Some(value),
            _ => Self::None,
        }
    }

    /// Keeps the payload only if it does *not* satisfy the predicate.
    #[inline]
    #[must_use]
    pub fn filter_not<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.filter(|value| !predicate(value))
    }

    /// Converts into an [`Either`], using `if_none` to build the `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectus::control::{Either, Optional};
    ///
    /// assert_eq!(Optional::Some(1).to_either(|| "missing"), Either::Right(1));
    /// assert_eq!(Optional::<i32>::None.to_either(|| "missing"), Either::Left("missing"));
    /// ```
    #[inline]
    pub fn to_either<L, F>(self, if_none: F) -> Either<L, T>
    where
        F: FnOnce() -> L,
    {
        self.fold(|| Either::Left(if_none()), Either::Right)
    }
}

impl<T> Default for Optional<T> {
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::from_nullable(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(value: Optional<T>) -> Self {
        value.or_null()
    }
}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => formatter.write_str("None"),
            Self::Some(value) => formatter.debug_tuple("Some").field(value).finish(),
        }
    }
}

/// Formats the debug label `Some(<category>)` or `None()`.
impl<T: TypeCategory> fmt::Display for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => formatter.write_str("None()"),
            Self::Some(value) => write!(formatter, "Some({})", value.type_category()),
        }
    }
}
