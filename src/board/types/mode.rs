//! Move-sharing mode.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How transporter moves are derived from rank-mates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ShareMode {
    /// Teleport to any square a rank-mate could reach from its own square.
    #[default]
    Linear,
    /// Every piece on the rank inherits the union of all their vectors, and
    /// every occupied square of the rank is a launch point.
    Quantum,
}

impl fmt::Display for ShareMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShareMode::Linear => write!(f, "linear"),
            ShareMode::Quantum => write!(f, "quantum"),
        }
    }
}

impl FromStr for ShareMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "linear" => Ok(ShareMode::Linear),
            "quantum" => Ok(ShareMode::Quantum),
            other => Err(format!("unknown mode '{other}', expected 'linear' or 'quantum'")),
        }
    }
}
