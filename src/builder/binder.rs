//! Two-step binders completing a `.chain(handler)` call with a guard.
//!
//! A binder holds a handler waiting for its guard. It cannot be invoked,
//! so a handler without a guard never reaches a running chain.

use crate::chain::action::BoxedAction;
use crate::chain::fallible::BoxedTryAction;
use crate::chain::transform::BoxedTransform;
use crate::chain::{ActionChain, TransformChain, TryActionChain};
use crate::core::Guard;

/// Pending transforming handler, returned by [`TransformChain::chain`].
#[must_use = "a handler is only added to the chain once a guard is bound with `when`"]
pub struct HandlerBinder<A: ?Sized, R> {
    previous: TransformChain<A, R>,
    handler: BoxedTransform<A, R>,
}

impl<A: ?Sized + 'static, R: 'static> HandlerBinder<A, R> {
    pub(crate) fn new(previous: TransformChain<A, R>, handler: BoxedTransform<A, R>) -> Self {
        Self { previous, handler }
    }

    /// Bind the handler behind a predicate closure.
    pub fn when<F>(self, predicate: F) -> TransformChain<A, R>
    where
        F: Fn(&A) -> bool + Send + Sync + 'static,
    {
        self.guard(Guard::new(predicate))
    }

    /// Bind the handler behind a prebuilt guard.
    pub fn guard(self, guard: Guard<A>) -> TransformChain<A, R> {
        self.previous.bind(guard, self.handler)
    }

    /// Bind the handler if a guard is present.
    ///
    /// With no guard the handler is dropped and the previous chain is
    /// returned unchanged.
    pub fn guard_opt(self, guard: Option<Guard<A>>) -> TransformChain<A, R> {
        match guard {
            Some(guard) => self.guard(guard),
            None => self.previous,
        }
    }
}

/// Pending action handler, returned by [`ActionChain::chain`].
#[must_use = "a handler is only added to the chain once a guard is bound with `when`"]
pub struct ActionBinder<A: ?Sized> {
    previous: ActionChain<A>,
    handler: BoxedAction<A>,
}

impl<A: ?Sized + 'static> ActionBinder<A> {
    pub(crate) fn new(previous: ActionChain<A>, handler: BoxedAction<A>) -> Self {
        Self { previous, handler }
    }

    /// Bind the handler behind a predicate closure.
    pub fn when<F>(self, predicate: F) -> ActionChain<A>
    where
        F: Fn(&A) -> bool + Send + Sync + 'static,
    {
        self.guard(Guard::new(predicate))
    }

    /// Bind the handler behind a prebuilt guard.
    pub fn guard(self, guard: Guard<A>) -> ActionChain<A> {
        self.previous.bind(guard, self.handler)
    }

    /// Bind the handler if a guard is present, otherwise keep the previous
    /// chain.
    pub fn guard_opt(self, guard: Option<Guard<A>>) -> ActionChain<A> {
        match guard {
            Some(guard) => self.guard(guard),
            None => self.previous,
        }
    }
}

/// Pending fallible action handler, returned by [`TryActionChain::chain`].
#[must_use = "a handler is only added to the chain once a guard is bound with `when`"]
pub struct TryActionBinder<A: ?Sized, E> {
    previous: TryActionChain<A, E>,
    handler: BoxedTryAction<A, E>,
}

impl<A: ?Sized + 'static, E: 'static> TryActionBinder<A, E> {
    pub(crate) fn new(previous: TryActionChain<A, E>, handler: BoxedTryAction<A, E>) -> Self {
        Self { previous, handler }
    }

    /// Bind the handler behind a predicate closure.
    pub fn when<F>(self, predicate: F) -> TryActionChain<A, E>
    where
        F: Fn(&A) -> bool + Send + Sync + 'static,
    {
        self.guard(Guard::new(predicate))
    }

    /// Bind the handler behind a prebuilt guard.
    pub fn guard(self, guard: Guard<A>) -> TryActionChain<A, E> {
        self.previous.bind(guard, self.handler)
    }

    /// Bind the handler if a guard is present, otherwise keep the previous
    /// chain.
    pub fn guard_opt(self, guard: Option<Guard<A>>) -> TryActionChain<A, E> {
        match guard {
            Some(guard) => self.guard(guard),
            None => self.previous,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn guard_binds_prebuilt_guard() {
        let short = Guard::new(|s: &str| s.len() < 4);
        let chain = TransformChain::with_default(|_: &str| "long")
            .chain(|_: &str| "short")
            .guard(short.clone());

        assert_eq!(chain.apply("abc"), "short");
        assert_eq!(chain.apply("abcdef"), "long");
        assert!(short.test("abc"));
    }

    #[test]
    fn guard_opt_some_binds_handler() {
        let chain = TransformChain::with_default(|_: &str| 0)
            .chain(|_: &str| 1)
            .guard_opt(Some(Guard::always()));

        assert_eq!(chain.apply("x"), 1);
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn action_guard_opt_none_drops_handler() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let chain = ActionChain::with_default(|_: &str| {})
            .chain(move |_: &str| {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .guard_opt(None);

        chain.accept("x");

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(chain.is_empty());
    }

    #[test]
    fn try_action_guard_opt_none_keeps_default() {
        let chain = TryActionChain::with_default(|_: &str| Err("default"))
            .chain(|_: &str| Ok(()))
            .guard_opt(None);

        assert_eq!(chain.accept("x"), Err("default"));
    }
}
