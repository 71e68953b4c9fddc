//! Effect runners built on [`Either`](crate::control::Either).
//!
//! - [`eager`]: turns a step function into a reusable computation with
//!   do-notation style early return
//! - [`compute`]: runs a step function once
//! - [`Bind`]: the capability a step function uses to unwrap `Right` values
//! - [`ShortCircuit`]: the private early-exit signal
//!
//! ```rust
//! use effectus::control::Either;
//! use effectus::effect::eager;
//!
//! fn parse(text: &str) -> Either<String, i32> {
//!     text.parse::<i32>().map_err(|_| format!("not a number: {text}")).into()
//! }
//!
//! let total = eager(|scope| {
//!     let first = scope.bind(parse("20"))?;
//!     let second = scope.bind(parse("22"))?;
//!     Ok(first + second)
//! });
//! assert_eq!(total(), Either::Right(42));
//!
//! let broken = eager(|scope| {
//!     let first = scope.bind(parse("20"))?;
//!     let second = scope.bind(parse("twenty-two"))?;
//!     Ok(first + second)
//! });
//! assert_eq!(broken(), Either::Left("not a number: twenty-two".to_string()));
//! ```

mod eager;

pub use eager::{Bind, ShortCircuit, compute, eager};
