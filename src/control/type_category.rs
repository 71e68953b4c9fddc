//! Coarse runtime categories used by the debug labels of [`Either`] and
//! [`Optional`].
//!
//! The `Display` output of both sum types reports only the *kind* of the
//! payload, never its value:
//!
//! ```rust
//! use effectus::control::{Either, Optional};
//!
//! let left: Either<&str, i32> = Either::Left("test");
//! assert_eq!(left.to_string(), "Outcome.Left(string)");
//!
//! assert_eq!(Optional::Some(5).to_string(), "Some(number)");
//! ```
//!
//! # Categories
//!
//! | Payload | Category |
//! |---------|----------|
//! | `str`, `String`, `char`, `Cow<str>` | `"string"` |
//! | integer and float primitives | `"number"` |
//! | `bool` | `"boolean"` |
//! | `()` | `"undefined"` |
//! | function pointers | `"function"` |
//! | `Option::None` | `"object"` |
//! | `Option::Some(v)`, `&T`, `Box<T>`, `Rc<T>`, `Arc<T>` | category of the inner value |
//! | anything else | `"object"` |
//!
//! User types opt in with an empty impl and get `"object"`:
//!
//! ```rust
//! use effectus::control::{Either, TypeCategory};
//!
//! struct Soup;
//! impl TypeCategory for Soup {}
//!
//! let right: Either<String, Soup> = Either::Right(Soup);
//! assert_eq!(right.to_string(), "Outcome.Right(object)");
//! ```
//!
//! [`Either`]: super::Either
//! [`Optional`]: super::Optional

use std::any::Any;
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use super::{Either, Optional};

const STRING: &str = "string";
const NUMBER: &str = "number";
const BOOLEAN: &str = "boolean";
const UNDEFINED: &str = "undefined";
const FUNCTION: &str = "function";
const OBJECT: &str = "object";

/// Reports the coarse category of a value for debug formatting.
///
/// The default method answers `"object"`, so composite and user-defined
/// types only need an empty `impl`.
pub trait TypeCategory {
    /// Returns the category label of this value.
    fn type_category(&self) -> &'static str {
        OBJECT
    }
}

macro_rules! impl_type_category {
    ($label:expr => $($type:ty),+ $(,)?) => {
        $(
            impl TypeCategory for $type {
                #[inline]
                fn type_category(&self) -> &'static str {
                    $label
                }
            }
        )+
    };
}

impl_type_category!(STRING => str, String, char);
impl_type_category!(
    NUMBER => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);
impl_type_category!(BOOLEAN => bool);
impl_type_category!(UNDEFINED => ());

impl TypeCategory for Cow<'_, str> {
    #[inline]
    fn type_category(&self) -> &'static str {
        STRING
    }
}

// Delegating wrappers.

impl<T: TypeCategory + ?Sized> TypeCategory for &T {
    #[inline]
    fn type_category(&self) -> &'static str {
        (**self).type_category()
    }
}

impl<T: TypeCategory + ?Sized> TypeCategory for &mut T {
    #[inline]
    fn type_category(&self) -> &'static str {
        (**self).type_category()
    }
}

impl<T: TypeCategory + ?Sized> TypeCategory for Box<T> {
    #[inline]
    fn type_category(&self) -> &'static str {
        (**self).type_category()
    }
}

impl<T: TypeCategory + ?Sized> TypeCategory for Rc<T> {
    #[inline]
    fn type_category(&self) -> &'static str {
        (**self).type_category()
    }
}

impl<T: TypeCategory + ?Sized> TypeCategory for Arc<T> {
    #[inline]
    fn type_category(&self) -> &'static str {
        (**self).type_category()
    }
}

/// A std `Option` plays the role of a nullable slot: an absent value is an
/// `"object"`, a present one reports its own category.
impl<T: TypeCategory> TypeCategory for Option<T> {
    #[inline]
    fn type_category(&self) -> &'static str {
        self.as_ref().map_or(OBJECT, TypeCategory::type_category)
    }
}

impl<R> TypeCategory for fn() -> R {
    #[inline]
    fn type_category(&self) -> &'static str {
        FUNCTION
    }
}

impl<A, R> TypeCategory for fn(A) -> R {
    #[inline]
    fn type_category(&self) -> &'static str {
        FUNCTION
    }
}

// Composite values are objects.

impl<T> TypeCategory for [T] {}
impl<T, const N: usize> TypeCategory for [T; N] {}
impl<T> TypeCategory for Vec<T> {}
impl<T> TypeCategory for VecDeque<T> {}
impl<K, V, S> TypeCategory for HashMap<K, V, S> {}
impl<K, V> TypeCategory for BTreeMap<K, V> {}
impl<T, S> TypeCategory for HashSet<T, S> {}
impl<T> TypeCategory for BTreeSet<T> {}
impl<A, B> TypeCategory for (A, B) {}
impl<A, B, C> TypeCategory for (A, B, C) {}
impl<L, R> TypeCategory for Either<L, R> {}
impl<T> TypeCategory for Optional<T> {}

impl TypeCategory for dyn Any {}
impl TypeCategory for dyn Any + Send {}
impl TypeCategory for dyn std::error::Error {}
impl TypeCategory for dyn std::error::Error + Send + Sync {}
impl TypeCategory for std::io::Error {}
impl TypeCategory for std::fmt::Error {}
