//! Sealed two-variant sum types.
//!
//! This module provides the two value types of the library:
//!
//! - [`Either`]: a value that is either a `Left` or a `Right`
//! - [`Optional`]: a value that is either `None` or `Some`
//!
//! Both are closed enums, so every fold-style operation is checked for
//! exhaustiveness by the compiler. The free functions [`left`], [`right`],
//! [`some`] and [`none`] are shorthands for the variant constructors.
//!
//! # Examples
//!
//! ```rust
//! use effectus::control::{Either, Optional, left, right};
//!
//! let parsed: Either<String, i32> = right(21);
//! let doubled = parsed.map(|value| value * 2);
//! assert_eq!(doubled.or_none(), Optional::Some(42));
//!
//! let failed: Either<String, i32> = left("bad input".to_string());
//! assert_eq!(failed.swap(), Either::Right("bad input".to_string()));
//! ```
//!
//! Both types print a coarse debug label rather than their payload:
//!
//! ```rust
//! use effectus::control::{Either, Optional};
//!
//! assert_eq!(Either::<&str, i32>::Left("test").to_string(), "Outcome.Left(string)");
//! assert_eq!(Optional::Some(5).to_string(), "Some(number)");
//! assert_eq!(Optional::<i32>::None.to_string(), "None()");
//! ```

mod either;
mod error;
mod optional;
mod type_category;

pub use either::{Either, Outcome, PanicPayload};
pub use error::IllegalVariantError;
pub use optional::Optional;
pub use type_category::TypeCategory;

/// Creates a `Left`.
#[inline]
pub const fn left<L, R>(value: L) -> Either<L, R> {
    Either::Left(value)
}

/// Creates a `Right`.
#[inline]
pub const fn right<L, R>(value: R) -> Either<L, R> {
    Either::Right(value)
}

/// Creates a `Some`.
#[inline]
pub const fn some<T>(value: T) -> Optional<T> {
    Optional::Some(value)
}

/// Creates a `None`.
#[inline]
pub const fn none<T>() -> Optional<T> {
    Optional::None
}
