//! Eager `Either` computations with early return.
//!
//! [`eager`] turns a step function into a zero-argument closure producing an
//! [`Either`]. Inside the step function, [`Bind::bind`] unwraps a `Right`
//! payload, or yields a [`ShortCircuit`] that the `?` operator carries
//! straight back to the runner, which settles the whole computation as
//! `Left`.
//!
//! This reads like ordinary sequential code and behaves like a chain of
//! [`Either::flat_map`] calls:
//!
//! ```rust
//! use effectus::control::Either;
//! use effectus::effect::eager;
//!
//! let get_veggies = || Either::<String, &str>::Right("carrots");
//! let get_meat = || Either::<String, &str>::Right("beyond beef");
//!
//! let get_soup = eager(|scope| {
//!     let veggies = scope.bind(get_veggies())?;
//!     let meats = scope.bind(get_meat())?;
//!     Ok(format!("A delicious soup with {veggies} and {meats}"))
//! });
//!
//! assert_eq!(
//!     get_soup(),
//!     Either::Right("A delicious soup with carrots and beyond beef".to_string())
//! );
//!
//! // The same computation with flat_map
//! let by_flat_map = get_veggies().flat_map(|veggies| {
//!     get_meat().map(|meats| format!("A delicious soup with {veggies} and {meats}"))
//! });
//! assert_eq!(get_soup(), by_flat_map);
//! ```
//!
//! # Signal identity
//!
//! The early exit travels in the error channel of the step function, whose
//! type is fixed to [`ShortCircuit`]. That type has no public
//! constructor, so a client cannot forge it:
//!
//! ```rust,compile_fail
//! use effectus::effect::ShortCircuit;
//!
//! let forged: ShortCircuit<'static, &str> = ShortCircuit { value: "forged" };
//! ```
//!
//! Both [`Bind`] and [`ShortCircuit`] carry an invariant `'run` lifetime
//! that is fresh for every run, so a signal raised by one run cannot settle
//! another, even when runs are nested:
//!
//! ```rust,compile_fail
//! use effectus::control::Either;
//! use effectus::effect::compute;
//!
//! let outer: Either<&str, i32> = compute(|outer| {
//!     let inner: Either<&str, i32> = compute(|_inner| Err(outer.raise("outer failed")));
//!     Ok(inner.get_or_else(|| 0))
//! });
//! ```
//!
//! The runner never catches panics either: a panic raised inside the step
//! function leaves the generated closure with its payload untouched.

use std::fmt;
use std::marker::PhantomData;

use crate::control::Either;

// Invariant in 'run.
type RunBrand<'run> = PhantomData<fn(&'run ()) -> &'run ()>;

/// The early-exit signal of an eager computation.
///
/// Carries the left payload that settles the computation. Values of this
/// type are only produced by [`Bind`], and only settle the run whose `'run`
/// they carry.
pub struct ShortCircuit<'run, L> {
    value: L,
    _run: RunBrand<'run>,
}

impl<L> ShortCircuit<'_, L> {
    const fn new(value: L) -> Self {
        Self {
            value,
            _run: PhantomData,
        }
    }
}

impl<L: fmt::Debug> fmt::Debug for ShortCircuit<'_, L> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ShortCircuit")
            .field("value", &self.value)
            .finish()
    }
}

impl<L> fmt::Display for ShortCircuit<'_, L> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("computation short-circuited")
    }
}

/// The bind capability handed to a step function.
///
/// A fresh `Bind` is created for every run and only lent to the step
/// function, so it cannot outlive the computation it belongs to.
pub struct Bind<'run, L> {
    _scope: PhantomData<*const L>,
    _run: RunBrand<'run>,
}

static_assertions::assert_not_impl_any!(Bind<'static, i32>: Send, Sync);

// The receiver only gates access to the run.
#[allow(clippy::unused_self)]
impl<'run, L> Bind<'run, L> {
    const fn new() -> Self {
        Self {
            _scope: PhantomData,
            _run: PhantomData,
        }
    }

    /// Unwraps a `Right` payload, or short-circuits with the `Left` payload.
    ///
    /// Propagate the error with `?`; the computation then settles as that
    /// `Left` and no later step runs.
    ///
    /// # Errors
    ///
    /// Returns a [`ShortCircuit`] carrying the payload when `either` is a
    /// `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectus::control::Either;
    /// use effectus::effect::compute;
    ///
    /// let result: Either<&str, i32> = compute(|scope| {
    ///     let count = scope.bind(Either::Right(3))?;
    ///     let _: i32 = scope.bind(Either::Left("exploded"))?;
    ///     Ok(count)
    /// });
    /// assert_eq!(result, Either::Left("exploded"));
    /// ```
    #[inline]
    pub fn bind<C>(&self, either: Either<L, C>) -> Result<C, ShortCircuit<'run, L>> {
        either.fold(|value| Err(ShortCircuit::new(value)), Ok)
    }

    /// Same as [`bind`](Self::bind), for a `Result` whose error is the left
    /// type.
    ///
    /// # Errors
    ///
    /// Returns a [`ShortCircuit`] carrying the error when `result` is `Err`.
    #[inline]
    pub fn bind_result<C>(&self, result: Result<C, L>) -> Result<C, ShortCircuit<'run, L>> {
        self.bind(Either::from(result))
    }

    /// Builds the signal that settles the computation as `Left(value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectus::control::Either;
    /// use effectus::effect::compute;
    ///
    /// let result: Either<String, u32> = compute(|scope| {
    ///     let age = scope.bind(Either::Right(-4_i32))?;
    ///     if age < 0 {
    ///         return Err(scope.raise(format!("negative age {age}")));
    ///     }
    ///     Ok(age.unsigned_abs())
    /// });
    /// assert_eq!(result, Either::Left("negative age -4".to_string()));
    /// ```
    #[inline]
    pub fn raise(&self, value: L) -> ShortCircuit<'run, L> {
        ShortCircuit::new(value)
    }

    /// Continues when `condition` holds, otherwise short-circuits with the
    /// value built by `on_false`.
    ///
    /// # Errors
    ///
    /// Returns a [`ShortCircuit`] when `condition` is `false`.
    #[inline]
    pub fn ensure<F>(&self, condition: bool, on_false: F) -> Result<(), ShortCircuit<'run, L>>
    where
        F: FnOnce() -> L,
    {
        self.bind(Either::conditionally(condition, on_false, || ()))
    }
}

impl<L> fmt::Debug for Bind<'_, L> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Bind")
    }
}

/// Runs a step function once and settles its outcome.
///
/// The step function receives a [`Bind`] branded with a fresh `'run`
/// lifetime; only signals carrying that lifetime can settle this run.
///
/// `Ok(value)` becomes `Right(value)`; a [`ShortCircuit`] becomes
/// `Left(payload)`.
///
/// # Examples
///
/// ```rust
/// use effectus::control::Either;
/// use effectus::effect::compute;
///
/// let result: Either<String, String> = compute(|scope| {
///     let veggie_type = scope.bind(Either::Right("bean"))?;
///     let veggie_count = scope.bind(Either::Right(3))?;
///     Ok(format!("We have {veggie_count} {veggie_type}s!"))
/// });
/// assert_eq!(result, Either::Right("We have 3 beans!".to_string()));
/// ```
pub fn compute<L, R, F>(step: F) -> Either<L, R>
where
    F: for<'run> FnOnce(&Bind<'run, L>) -> Result<R, ShortCircuit<'run, L>>,
{
    let scope = Bind::new();
    match step(&scope) {
        Ok(value) => {
            tracing::trace!("computation settled on the right");
            Either::Right(value)
        }
        Err(ShortCircuit { value, .. }) => {
            tracing::trace!("computation short-circuited on the left");
            Either::Left(value)
        }
    }
}

/// Wraps a step function into a reusable computation.
///
/// Every call of the returned closure runs `step` from the start with its
/// own [`Bind`]; nothing is shared between calls.
///
/// # Examples
///
/// ```rust
/// use effectus::control::Either;
/// use effectus::effect::eager;
///
/// let exploded = "The soup exploded into a billion tiny droplets!";
/// let make_soup = |_: &str, _: &str| Either::<&str, String>::Left(exploded);
///
/// let get_soup = eager(|scope| {
///     let veggies = scope.bind(Either::Right("carrots"))?;
///     let meats = scope.bind(Either::Right("beyond beef"))?;
///     scope.bind(make_soup(veggies, meats))
/// });
///
/// assert_eq!(get_soup(), Either::Left(exploded));
/// assert_eq!(get_soup(), Either::Left(exploded));
/// ```
pub fn eager<L, R, F>(step: F) -> impl Fn() -> Either<L, R>
where
    F: for<'run> Fn(&Bind<'run, L>) -> Result<R, ShortCircuit<'run, L>>,
{
    move || compute(&step)
}
