//! Guard predicates for gating chain handlers.
//!
//! Guards are pure boolean functions that decide whether a handler takes
//! part in handling an input. They combine with `and`, `or` and `negate`,
//! and can wrap ("obligate") a handler so that it only runs when the guard
//! holds.

use std::fmt;
use std::sync::Arc;

type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Pure predicate that decides whether a handler may run for an input.
///
/// Guards are immutable. Every combinator returns a new guard, and cloning
/// a guard shares the underlying predicate.
///
/// # Example
///
/// ```rust
/// use responsibility::core::Guard;
///
/// #[derive(Clone, Copy, PartialEq, Debug)]
/// enum Level {
///     Debug,
///     Warning,
///     Error,
/// }
///
/// let is_warning = Guard::new(|level: &Level| *level == Level::Warning);
/// let is_error = Guard::new(|level: &Level| *level == Level::Error);
/// let needs_attention = is_warning.or(is_error);
///
/// assert!(needs_attention.test(&Level::Warning));
/// assert!(needs_attention.test(&Level::Error));
/// assert!(!needs_attention.test(&Level::Debug));
/// ```
pub struct Guard<T: ?Sized> {
    predicate: Predicate<T>,
}

impl<T: ?Sized + 'static> Guard<T> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be pure (deterministic, no side effects) and
    /// thread-safe (Send + Sync).
    ///
    /// # Example
    ///
    /// ```rust
    /// use responsibility::core::Guard;
    ///
    /// let is_one = Guard::new(|input: &str| input == "1");
    ///
    /// assert!(is_one.test("1"));
    /// assert!(!is_one.test("2"));
    /// ```
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Guard that holds for every input.
    pub fn always() -> Self {
        Self::new(|_| true)
    }

    /// Guard that holds for no input.
    pub fn never() -> Self {
        Self::new(|_| false)
    }

    /// Check if the guard holds for this input.
    pub fn test(&self, input: &T) -> bool {
        (self.predicate)(input)
    }

    /// Guard holding when both this guard and `other` hold.
    ///
    /// `other` is not evaluated when this guard fails.
    pub fn and(self, other: Guard<T>) -> Self {
        let this = self.predicate;
        Self::new(move |input: &T| this(input) && other.test(input))
    }

    /// Guard holding when this guard or `other` holds.
    ///
    /// `other` is not evaluated when this guard holds.
    pub fn or(self, other: Guard<T>) -> Self {
        let this = self.predicate;
        Self::new(move |input: &T| this(input) || other.test(input))
    }

    /// Guard holding exactly when this guard fails.
    pub fn negate(self) -> Self {
        let this = self.predicate;
        Self::new(move |input: &T| !this(input))
    }

    /// Wrap a transforming handler so it only runs when the guard holds.
    ///
    /// The returned function yields `Some(handler(input))` when the guard
    /// holds and `None` otherwise. The handler is never invoked for an input
    /// the guard rejects.
    ///
    /// # Example
    ///
    /// ```rust
    /// use responsibility::core::Guard;
    ///
    /// let even = Guard::new(|n: &u32| n % 2 == 0);
    /// let halve = even.obligate_transform(|n: &u32| n / 2);
    ///
    /// assert_eq!(halve(&8), Some(4));
    /// assert_eq!(halve(&7), None);
    /// ```
    pub fn obligate_transform<R, F>(
        &self,
        handler: F,
    ) -> impl Fn(&T) -> Option<R> + Send + Sync
    where
        R: 'static,
        F: Fn(&T) -> R + Send + Sync + 'static,
    {
        let guard = self.clone();
        move |input: &T| guard.test(input).then(|| handler(input))
    }

    /// Wrap a handler that may itself decline, flattening the result.
    ///
    /// Yields `None` when the guard rejects the input or when the handler
    /// returns `None`.
    pub fn obligate_flat<R, F>(&self, handler: F) -> impl Fn(&T) -> Option<R> + Send + Sync
    where
        R: 'static,
        F: Fn(&T) -> Option<R> + Send + Sync + 'static,
    {
        let guard = self.clone();
        move |input: &T| guard.test(input).then(|| handler(input)).flatten()
    }

    /// Wrap a side-effecting handler so it only runs when the guard holds.
    ///
    /// # Example
    ///
    /// ```rust
    /// use responsibility::core::Guard;
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    /// use std::sync::Arc;
    ///
    /// let seen = Arc::new(AtomicUsize::new(0));
    /// let counter = Arc::clone(&seen);
    ///
    /// let long_only = Guard::new(|s: &str| s.len() > 3);
    /// let count = long_only.obligate_action(move |_: &str| {
    ///     counter.fetch_add(1, Ordering::SeqCst);
    /// });
    ///
    /// count("abc");
    /// count("abcd");
    /// assert_eq!(seen.load(Ordering::SeqCst), 1);
    /// ```
    pub fn obligate_action<F>(&self, handler: F) -> impl Fn(&T) + Send + Sync
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let guard = self.clone();
        move |input: &T| {
            if guard.test(input) {
                handler(input)
            }
        }
    }
}

impl<T: 'static> Guard<T> {
    /// Lift this guard over optional inputs.
    ///
    /// An absent input never satisfies the lifted guard.
    ///
    /// ```rust
    /// use responsibility::core::Guard;
    ///
    /// let positive = Guard::new(|n: &i64| *n > 0).optional();
    ///
    /// assert!(positive.test(&Some(3)));
    /// assert!(!positive.test(&Some(-3)));
    /// assert!(!positive.test(&None));
    /// ```
    pub fn optional(self) -> Guard<Option<T>> {
        Guard::new(move |input: &Option<T>| {
            input.as_ref().is_some_and(|value| self.test(value))
        })
    }
}

impl<T: ?Sized> Clone for Guard<T> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Guard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
