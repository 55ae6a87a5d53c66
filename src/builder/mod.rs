//! Builder API for ergonomic chain construction.
//!
//! Chains are built in two steps per handler: `.chain(handler)` returns a
//! binder, and the binder's `.when(predicate)` (or `.guard(guard)`) returns
//! the extended chain. The free functions below are named entry points for
//! seeding each chain flavor.

pub mod binder;
pub mod macros;

pub use binder::{ActionBinder, HandlerBinder, TryActionBinder};

use crate::chain::{ActionChain, TransformChain};

/// Seed a transforming chain with an explicit default handler.
///
/// # Example
///
/// ```
/// use responsibility::builder::transform_chain_with_default;
///
/// let chain = transform_chain_with_default(|input: &str| format!("{input} is executed by default"))
///     .chain(|input: &str| input.to_uppercase())
///     .when(|input: &str| input == "test 3");
///
/// assert_eq!(chain.apply("test 3"), "TEST 3");
/// assert_eq!(chain.apply("test 4"), "test 4 is executed by default");
/// ```
pub fn transform_chain_with_default<A, R, F>(default: F) -> TransformChain<A, R>
where
    A: ?Sized + 'static,
    R: 'static,
    F: Fn(&A) -> R + Send + Sync + 'static,
{
    TransformChain::with_default(default)
}

/// Start a transforming chain whose implicit default returns `None`.
///
/// # Example
///
/// ```
/// use responsibility::builder::transform_chain_from;
///
/// let chain = transform_chain_from(|n: &u32| n * 2).when(|n: &u32| *n > 10);
///
/// assert_eq!(chain.apply(&11), Some(22));
/// assert_eq!(chain.apply(&1), None);
/// ```
pub fn transform_chain_from<A, R, F>(handler: F) -> HandlerBinder<A, Option<R>>
where
    A: ?Sized + 'static,
    R: 'static,
    F: Fn(&A) -> R + Send + Sync + 'static,
{
    TransformChain::start_from(handler)
}

/// Seed an action chain with an explicit default action.
pub fn action_chain_with_default<A, F>(default: F) -> ActionChain<A>
where
    A: ?Sized + 'static,
    F: Fn(&A) + Send + Sync + 'static,
{
    ActionChain::with_default(default)
}

/// Start an action chain whose implicit default does nothing.
///
/// # Example
///
/// ```
/// use responsibility::builder::action_chain_from;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// let errors = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&errors);
///
/// let chain = action_chain_from(move |_: &str| {
///     counter.fetch_add(1, Ordering::SeqCst);
/// })
/// .when(|line: &str| line.starts_with("ERROR"));
///
/// chain.accept("INFO started");
/// chain.accept("ERROR disk full");
/// assert_eq!(errors.load(Ordering::SeqCst), 1);
/// ```
pub fn action_chain_from<A, F>(handler: F) -> ActionBinder<A>
where
    A: ?Sized + 'static,
    F: Fn(&A) + Send + Sync + 'static,
{
    ActionChain::start_from(handler)
}
