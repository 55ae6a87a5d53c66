//! Propagation policy for action chains.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How an action chain continues after a guarded handler matches.
///
/// The policy serializes in `snake_case` so it can sit in an application's
/// own configuration:
///
/// ```rust
/// use responsibility::core::Propagation;
///
/// let policy: Propagation = "short_circuit".parse().unwrap();
/// assert_eq!(policy, Propagation::ShortCircuit);
/// assert_eq!(Propagation::default(), Propagation::FanOut);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Propagation {
    /// Every matching handler runs, newest first, and the default always runs
    #[default]
    FanOut,

    /// Only the newest matching handler runs, or the default if none match
    ShortCircuit,
}

impl Propagation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FanOut => "fan_out",
            Self::ShortCircuit => "short_circuit",
        }
    }
}

impl fmt::Display for Propagation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur when reading a propagation policy from text.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PropagationError {
    #[error("Unknown propagation policy '{0}', expected 'fan_out' or 'short_circuit'")]
    Unknown(String),
}

impl FromStr for Propagation {
    type Err = PropagationError;

    /// Accepts `fan_out` and `short_circuit`, ignoring case and treating `-`
    /// like `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "fan_out" => Ok(Self::FanOut),
            "short_circuit" => Ok(Self::ShortCircuit),
            _ => Err(PropagationError::Unknown(s.to_string())),
        }
    }
}
