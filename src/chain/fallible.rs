//! Fallible action chain: guarded handlers that may fail.

use crate::builder::TryActionBinder;
use crate::chain::Chain;
use crate::core::{Guard, Propagation};
use std::fmt;
use std::sync::Arc;

/// Type alias for a composed fallible action node.
pub(crate) type TryActionFn<A, E> = Arc<dyn Fn(&A) -> Result<(), E> + Send + Sync>;

/// Type alias for a fallible action handler waiting for its guard.
pub(crate) type BoxedTryAction<A, E> = Box<dyn Fn(&A) -> Result<(), E> + Send + Sync>;

/// Action chain whose handlers return `Result<(), E>`.
///
/// Propagation works as in [`ActionChain`](crate::chain::ActionChain),
/// except that under [`Propagation::FanOut`] the first handler error stops
/// the walk: older handlers and the default are skipped and the error is
/// returned to the caller unchanged.
///
/// ```rust
/// use responsibility::chain::TryActionChain;
///
/// let chain = TryActionChain::with_default(|_: &i32| Ok(()))
///     .chain(|n: &i32| Err(format!("{n} is negative")))
///     .when(|n: &i32| *n < 0);
///
/// assert_eq!(chain.accept(&1), Ok(()));
/// assert_eq!(chain.accept(&-1), Err("-1 is negative".to_string()));
/// ```
pub struct TryActionChain<A: ?Sized, E> {
    node: TryActionFn<A, E>,
    steps: usize,
    propagation: Propagation,
}

impl<A: ?Sized + 'static, E: 'static> TryActionChain<A, E> {
    /// Seed a chain with an explicit default action and no guarded steps.
    pub fn with_default<F>(default: F) -> Self
    where
        F: Fn(&A) -> Result<(), E> + Send + Sync + 'static,
    {
        Self {
            node: Arc::new(default),
            steps: 0,
            propagation: Propagation::default(),
        }
    }

    /// Start a chain whose implicit default succeeds without doing anything.
    pub fn start_from<F>(handler: F) -> TryActionBinder<A, E>
    where
        F: Fn(&A) -> Result<(), E> + Send + Sync + 'static,
    {
        Self::with_default(|_: &A| Ok(())).chain(handler)
    }

    /// Use `propagation` for the steps bound from now on.
    pub fn with_propagation(mut self, propagation: Propagation) -> Self {
        self.propagation = propagation;
        self
    }

    /// Policy applied to the next bound step.
    pub fn propagation(&self) -> Propagation {
        self.propagation
    }

    /// Start binding a new handler. Complete it with a guard.
    pub fn chain<F>(self, handler: F) -> TryActionBinder<A, E>
    where
        F: Fn(&A) -> Result<(), E> + Send + Sync + 'static,
    {
        TryActionBinder::new(self, Box::new(handler))
    }

    pub(crate) fn bind(self, guard: Guard<A>, handler: BoxedTryAction<A, E>) -> Self {
        let previous = self.node;
        let node: TryActionFn<A, E> = match self.propagation {
            Propagation::FanOut => {
                let guarded = guard.obligate_transform(handler);
                Arc::new(move |input: &A| {
                    if let Some(result) = guarded(input) {
                        result?;
                    }
                    previous(input)
                })
            }
            Propagation::ShortCircuit => Arc::new(move |input: &A| {
                if guard.test(input) {
                    handler(input)
                } else {
                    previous(input)
                }
            }),
        };

        Self {
            node,
            steps: self.steps + 1,
            propagation: self.propagation,
        }
    }

    /// Run the chain for one input, returning the first handler error.
    pub fn accept(&self, input: &A) -> Result<(), E> {
        (self.node)(input)
    }

    /// Number of guarded steps bound on top of the default.
    pub fn len(&self) -> usize {
        self.steps
    }

    /// True when only the default action is present.
    pub fn is_empty(&self) -> bool {
        self.steps == 0
    }
}

impl<A: ?Sized + 'static, E: 'static> Chain<A> for TryActionChain<A, E> {
    type Output = Result<(), E>;

    fn apply(&self, input: &A) -> Result<(), E> {
        self.accept(input)
    }
}

impl<A: ?Sized, E> Clone for TryActionChain<A, E> {
    fn clone(&self) -> Self {
        Self {
            node: Arc::clone(&self.node),
            steps: self.steps,
            propagation: self.propagation,
        }
    }
}

impl<A: ?Sized, E> fmt::Debug for TryActionChain<A, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryActionChain")
            .field("steps", &self.steps)
            .field("propagation", &self.propagation)
            .finish_non_exhaustive()
    }
}
