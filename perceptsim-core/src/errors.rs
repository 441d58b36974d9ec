//! Error Types for Scoring Configuration Failures
//!
//! ## Design Philosophy
//!
//! The scoring engine is a pure function library that runs on every slider
//! drag, so its error system follows the same rules as the rest of the core:
//!
//! 1. **Small Size**: Each variant carries only `Copy` data.
//!
//! 2. **No Heap Allocation**: Messages are `&'static str`, never `String`.
//!
//! 3. **Two Classes Only**: A configuration either names a key that does not
//!    exist, or carries a continuous value that is not a number at all.
//!
//! ## Error Categories
//!
//! ### Invalid Configuration Key
//! - `UnknownKey`: A dataset/model/compute/scenario string did not match any
//!   table entry. This is a programmer error in the presentation layer; the
//!   engine itself is keyed by enums and can never see an unknown key.
//!
//! ### Invalid Continuous Input
//! - `InvalidInput`: A slider value was NaN or infinite. Finite values outside
//!   `[0, 100]` are clamped instead of rejected.
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use perceptsim_core::{ScoringError, Dataset};
//!
//! match "argoverse".parse::<Dataset>() {
//!     Ok(dataset) => { /* score it */ }
//!     Err(ScoringError::UnknownKey { domain }) => {
//!         // The UI offered a choice that is not in the tables
//!     }
//!     Err(_) => {}
//! }
//! ```

use core::fmt;

use thiserror_no_std::Error;

/// Result type for scoring operations
pub type ScoringResult<T> = Result<T, ScoringError>;

/// Which enumerated table a key was looked up in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDomain {
    /// Benchmark dataset key
    Dataset,
    /// Architecture family key
    Model,
    /// Compute tier key
    Compute,
    /// Weather/lighting scenario key
    Scenario,
}

impl KeyDomain {
    /// Lowercase name used in messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dataset => "dataset",
            Self::Model => "model",
            Self::Compute => "compute",
            Self::Scenario => "scenario",
        }
    }
}

impl fmt::Display for KeyDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scoring errors - kept small and `Copy`
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ScoringError {
    /// Key not present in the lookup tables
    #[error("Unknown {domain} key")]
    UnknownKey {
        /// Table the key was looked up in
        domain: KeyDomain,
    },

    /// Continuous input is not a finite number
    #[error("Invalid input for {field}: not a valid number")]
    InvalidInput {
        /// Name of the offending configuration field
        field: &'static str,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for ScoringError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::UnknownKey { domain } =>
                defmt::write!(fmt, "Unknown {} key", domain.as_str()),
            Self::InvalidInput { field } =>
                defmt::write!(fmt, "Invalid input for {}", field),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_domain() {
        let err = ScoringError::UnknownKey { domain: KeyDomain::Compute };
        assert_eq!(format!("{}", err), "Unknown compute key");

        let err = ScoringError::InvalidInput { field: "noise" };
        assert_eq!(format!("{}", err), "Invalid input for noise: not a valid number");
    }
}
