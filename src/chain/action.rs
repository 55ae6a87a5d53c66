//! Action chain: guarded handlers run for their side effects.

use crate::builder::ActionBinder;
use crate::chain::Chain;
use crate::core::{Guard, Propagation};
use std::fmt;
use std::sync::Arc;

/// Type alias for a composed action node.
pub(crate) type ActionFn<A> = Arc<dyn Fn(&A) + Send + Sync>;

/// Type alias for an action handler waiting for its guard.
pub(crate) type BoxedAction<A> = Box<dyn Fn(&A) + Send + Sync>;

/// Chain of guarded side-effecting handlers plus a default action.
///
/// Handlers are tried newest first. What happens after a match depends on
/// the chain's [`Propagation`] policy:
///
/// - [`Propagation::FanOut`] (default): every handler whose guard holds
///   runs, and the default action always runs last.
/// - [`Propagation::ShortCircuit`]: only the newest matching handler runs,
///   or the default when nothing matches.
///
/// The policy is captured by each step when its guard is bound, so
/// [`with_propagation`](Self::with_propagation) affects the steps bound
/// after it.
///
/// # Example
///
/// ```rust
/// use responsibility::chain::ActionChain;
/// use std::sync::{Arc, Mutex};
///
/// let log = Arc::new(Mutex::new(Vec::new()));
/// let (warn_log, echo_log) = (Arc::clone(&log), Arc::clone(&log));
///
/// let chain = ActionChain::with_default(move |msg: &str| {
///     echo_log.lock().unwrap().push(format!("echo: {msg}"));
/// })
/// .chain(move |msg: &str| warn_log.lock().unwrap().push(format!("warn: {msg}")))
/// .when(|msg: &str| msg.starts_with("WARN"));
///
/// chain.accept("WARN disk almost full");
///
/// assert_eq!(
///     *log.lock().unwrap(),
///     vec!["warn: WARN disk almost full", "echo: WARN disk almost full"]
/// );
/// ```
pub struct ActionChain<A: ?Sized> {
    node: ActionFn<A>,
    steps: usize,
    propagation: Propagation,
}

impl<A: ?Sized + 'static> ActionChain<A> {
    /// Seed a chain with an explicit default action and no guarded steps.
    pub fn with_default<F>(default: F) -> Self
    where
        F: Fn(&A) + Send + Sync + 'static,
    {
        Self {
            node: Arc::new(default),
            steps: 0,
            propagation: Propagation::default(),
        }
    }

    /// Start a chain whose implicit default does nothing.
    ///
    /// `handler` becomes the first guarded step once a guard is bound.
    pub fn start_from<F>(handler: F) -> ActionBinder<A>
    where
        F: Fn(&A) + Send + Sync + 'static,
    {
        Self::with_default(|_: &A| {}).chain(handler)
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
    pub fn chain<F>(self, handler: F) -> ActionBinder<A>
    where
        F: Fn(&A) + Send + Sync + 'static,
    {
        ActionBinder::new(self, Box::new(handler))
    }

    pub(crate) fn bind(self, guard: Guard<A>, handler: BoxedAction<A>) -> Self {
        let node = match self.propagation {
            Propagation::FanOut => fan_out(guard, handler, self.node),
            Propagation::ShortCircuit => short_circuit(guard, handler, self.node),
        };

        Self {
            node,
            steps: self.steps + 1,
            propagation: self.propagation,
        }
    }

    /// Run the chain for one input.
    pub fn accept(&self, input: &A) {
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

fn fan_out<A: ?Sized + 'static>(
    guard: Guard<A>,
    handler: BoxedAction<A>,
    previous: ActionFn<A>,
) -> ActionFn<A> {
    let guarded = guard.obligate_action(handler);
    Arc::new(move |input: &A| {
        guarded(input);
        previous(input);
    })
}

fn short_circuit<A: ?Sized + 'static>(
    guard: Guard<A>,
    handler: BoxedAction<A>,
    previous: ActionFn<A>,
) -> ActionFn<A> {
    Arc::new(move |input: &A| {
        if guard.test(input) {
            handler(input)
        } else {
            previous(input)
        }
    })
}

impl<A: ?Sized + 'static> Chain<A> for ActionChain<A> {
    type Output = ();

    fn apply(&self, input: &A) {
        self.accept(input)
    }
}

impl<A: ?Sized> Clone for ActionChain<A> {
    fn clone(&self) -> Self {
        Self {
            node: Arc::clone(&self.node),
            steps: self.steps,
            propagation: self.propagation,
        }
    }
}

impl<A: ?Sized> fmt::Debug for ActionChain<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionChain")
            .field("steps", &self.steps)
            .field("propagation", &self.propagation)
            .finish_non_exhaustive()
    }
}
