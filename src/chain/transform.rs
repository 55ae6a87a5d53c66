//! Transforming chain: guarded handlers that produce a value.

use crate::builder::HandlerBinder;
use crate::chain::Chain;
use crate::core::Guard;
use std::fmt;
use std::sync::Arc;

/// Type alias for a composed transforming node.
pub(crate) type TransformFn<A, R> = Arc<dyn Fn(&A) -> R + Send + Sync>;

/// Type alias for a transforming handler waiting for its guard.
pub(crate) type BoxedTransform<A, R> = Box<dyn Fn(&A) -> R + Send + Sync>;

/// Chain of guarded handlers resolving each input to exactly one output.
///
/// The newest guard is tested first. The first guard that holds selects its
/// handler and nothing older is evaluated; when no guard holds, the default
/// handler runs.
///
/// # Example
///
/// ```rust
/// use responsibility::chain::TransformChain;
///
/// let chain = TransformChain::with_default(|input: &str| format!("{input} by default"))
///     .chain(|input: &str| format!("{input} by handler 1"))
///     .when(|input: &str| input == "test 1")
///     .chain(|input: &str| format!("{input} by handler 2"))
///     .when(|input: &str| input == "test 2");
///
/// assert_eq!(chain.apply("test 2"), "test 2 by handler 2");
/// assert_eq!(chain.apply("test 1"), "test 1 by handler 1");
/// assert_eq!(chain.apply("other"), "other by default");
/// ```
pub struct TransformChain<A: ?Sized, R> {
    node: TransformFn<A, R>,
    steps: usize,
}

impl<A: ?Sized + 'static, R: 'static> TransformChain<A, R> {
    /// Seed a chain with an explicit default handler and no guarded steps.
    pub fn with_default<F>(default: F) -> Self
    where
        F: Fn(&A) -> R + Send + Sync + 'static,
    {
        Self {
            node: Arc::new(default),
            steps: 0,
        }
    }

    /// Start binding a new handler. Complete it with a guard.
    pub fn chain<F>(self, handler: F) -> HandlerBinder<A, R>
    where
        F: Fn(&A) -> R + Send + Sync + 'static,
    {
        HandlerBinder::new(self, Box::new(handler))
    }

    /// Wrap this chain in a node testing `guard` before falling back to it.
    pub(crate) fn bind(self, guard: Guard<A>, handler: BoxedTransform<A, R>) -> Self {
        let previous = self.node;
        let guarded = guard.obligate_transform(handler);

        Self {
            node: Arc::new(move |input: &A| guarded(input).unwrap_or_else(|| previous(input))),
            steps: self.steps + 1,
        }
    }

    /// Run the chain for one input.
    pub fn apply(&self, input: &A) -> R {
        (self.node)(input)
    }

    /// Number of guarded steps bound on top of the default.
    pub fn len(&self) -> usize {
        self.steps
    }

    /// True when only the default handler is present.
    pub fn is_empty(&self) -> bool {
        self.steps == 0
    }
}

impl<A: ?Sized + 'static, R: 'static> TransformChain<A, Option<R>> {
    /// Start a chain whose implicit default leaves the input unhandled.
    ///
    /// The default yields `None`; `handler` becomes the first guarded step
    /// once a guard is bound, and its result is wrapped in `Some`.
    ///
    /// ```rust
    /// use responsibility::chain::TransformChain;
    ///
    /// let chain = TransformChain::start_from(|x: &str| format!("{x}-A"))
    ///     .when(|x: &str| x == "2")
    ///     .chain_some(|x: &str| format!("{x}-B"))
    ///     .when(|x: &str| x == "1");
    ///
    /// assert_eq!(chain.apply("1").as_deref(), Some("1-B"));
    /// assert_eq!(chain.apply("2").as_deref(), Some("2-A"));
    /// assert_eq!(chain.apply("3"), None);
    /// ```
    pub fn start_from<F>(handler: F) -> HandlerBinder<A, Option<R>>
    where
        F: Fn(&A) -> R + Send + Sync + 'static,
    {
        Self::with_default(|_: &A| None).chain_some(handler)
    }

    /// Start binding a handler that always handles, wrapping its result in
    /// `Some`.
    pub fn chain_some<F>(self, handler: F) -> HandlerBinder<A, Option<R>>
    where
        F: Fn(&A) -> R + Send + Sync + 'static,
    {
        self.chain(move |input: &A| Some(handler(input)))
    }
}

impl<A: ?Sized + 'static, R: 'static> Chain<A> for TransformChain<A, R> {
    type Output = R;

    fn apply(&self, input: &A) -> R {
        TransformChain::apply(self, input)
    }
}

impl<A: ?Sized, R> Clone for TransformChain<A, R> {
    fn clone(&self) -> Self {
        Self {
            node: Arc::clone(&self.node),
            steps: self.steps,
        }
    }
}

impl<A: ?Sized, R> fmt::Debug for TransformChain<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformChain")
            .field("steps", &self.steps)
            .finish_non_exhaustive()
    }
}
