//! Responsibility: guarded handler chains
//!
//! A functional take on the Chain-of-Responsibility pattern. A chain is
//! seeded from a default handler and extended with `(handler, guard)` pairs;
//! the result is a single callable that tests guards and dispatches to the
//! matching handler.
//!
//! # Core Concepts
//!
//! - **Guard**: Pure predicate gating a handler, with `and`/`or`/`negate`
//! - **TransformChain**: Handlers producing a value, first match wins
//! - **ActionChain**: Side-effecting handlers with an explicit propagation
//!   policy (fan-out by default)
//!
//! Chains are immutable values. Each `.chain(handler).when(guard)` returns a
//! new chain wrapping the previous one, so the guard bound last is tested
//! first.
//!
//! # Example
//!
//! ```rust
//! use responsibility::{ActionChain, Guard, TransformChain};
//! use std::sync::{Arc, Mutex};
//!
//! let route = TransformChain::with_default(|_: &u16| "unknown")
//!     .chain(|_: &u16| "client error")
//!     .when(|code: &u16| (400..500).contains(code))
//!     .chain(|_: &u16| "not found")
//!     .when(|code: &u16| *code == 404);
//!
//! assert_eq!(route.apply(&404), "not found");
//! assert_eq!(route.apply(&403), "client error");
//! assert_eq!(route.apply(&200), "unknown");
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let (errors, all) = (Arc::clone(&seen), Arc::clone(&seen));
//! let is_error = Guard::new(|code: &u16| *code >= 500);
//!
//! let audit = ActionChain::with_default(move |code: &u16| all.lock().unwrap().push(*code))
//!     .chain(move |code: &u16| errors.lock().unwrap().push(code + 1000))
//!     .guard(is_error);
//!
//! audit.accept(&503);
//! assert_eq!(*seen.lock().unwrap(), vec![1503, 503]);
//! ```

pub mod builder;
pub mod chain;
pub mod core;

// Re-export commonly used types
pub use builder::{ActionBinder, HandlerBinder, TryActionBinder};
pub use chain::{ActionChain, Chain, TransformChain, TryActionChain};
pub use crate::core::{Guard, Propagation, PropagationError};
