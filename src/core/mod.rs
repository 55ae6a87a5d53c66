//! Core gating types.
//!
//! This module contains the pure building blocks shared by every chain:
//! - Guard predicates with combinators and obligation operators
//! - The propagation policy used by action chains
//!
//! Nothing in this module performs I/O or keeps mutable state.

mod guard;
mod propagation;

pub use guard::Guard;
pub use propagation::{Propagation, PropagationError};
