//! Composed handler chains.
//!
//! A chain starts from a default handler and grows one guarded step at a
//! time. Every step wraps the chain built so far, so the step bound last is
//! the first one tested when the chain runs (LIFO).
//!
//! # Flavors
//!
//! - [`TransformChain`]: handlers produce a value, the first match wins
//! - [`ActionChain`]: handlers run for their side effects, with a
//!   configurable [`Propagation`](crate::core::Propagation) policy
//! - [`TryActionChain`]: fallible actions, stopping at the first error
//!
//! Chains are immutable. Binding a step returns a new chain and leaves the
//! previous one usable as it was.

pub(crate) mod action;
pub(crate) mod fallible;
pub(crate) mod transform;

pub use action::ActionChain;
pub use fallible::TryActionChain;
pub use transform::TransformChain;

/// A composed chain that can be invoked with one input.
///
/// Implemented by every chain flavor, so generic code can dispatch through
/// any of them.
///
/// ```rust
/// use responsibility::chain::{Chain, TransformChain};
///
/// fn run_all<C: Chain<str>>(chain: &C, inputs: &[&str]) -> Vec<C::Output> {
///     inputs.iter().map(|input| chain.apply(input)).collect()
/// }
///
/// let chain = TransformChain::with_default(|s: &str| s.len())
///     .chain(|_: &str| 0)
///     .when(|s: &str| s.starts_with('#'));
///
/// assert_eq!(run_all(&chain, &["abc", "#abc"]), vec![3, 0]);
/// ```
pub trait Chain<A: ?Sized> {
    type Output;

    /// Run the chain for one input on the caller's thread.
    fn apply(&self, input: &A) -> Self::Output;
}
