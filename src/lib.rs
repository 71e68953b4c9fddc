//! # effectus
//!
//! A small algebraic-effects library: two sealed sum types and an eager
//! computation runner with early return.
//!
//! ## Overview
//!
//! - **Sum Types**: [`Either`](control::Either) (`Left`/`Right`) and
//!   [`Optional`](control::Optional) (`None`/`Some`) with a right-biased
//!   combinator surface: fold, map, `flat_map`, bimap, traversal, predicates
//! - **Computation Runner**: [`eager`](effect::eager) lets a step function
//!   bind `Either` values as if writing sequential code, settling on the
//!   first `Left`
//!
//! ## Feature Flags
//!
//! - `control`: `Either`, `Optional` and their debug labels
//! - `effect`: the computation runner
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use effectus::prelude::*;
//!
//! let checkout = eager(|scope| {
//!     let price = scope.bind(Either::<String, u32>::Right(40))?;
//!     let shipping = scope.bind(Either::Right(2_u32))?;
//!     scope.ensure(price + shipping < 100, || "too expensive".to_string())?;
//!     Ok(price + shipping)
//! });
//!
//! assert_eq!(checkout(), Either::Right(42));
//! assert_eq!(checkout().to_string(), "Outcome.Right(number)");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use effectus::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;
