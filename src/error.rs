//! Error types for circle packing.

use thiserror::Error;

/// Errors that can occur while packing circles.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PackError {
    /// The packing parameters are unusable; nothing was placed.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// What was wrong with the parameters.
        reason: String,
    },

    /// The occupancy grid has no free cell left for another inner circle.
    ///
    /// Raised by single placement steps and recovered by the packer, which
    /// abandons the attempt and eventually grows the outer circle.
    #[error("no free cell left for another inner circle")]
    PlacementExhausted,

    /// The caller-supplied attempt cap was reached before a layout fit.
    #[error("no valid packing found after {attempts} attempts")]
    AttemptLimitReached {
        /// Number of attempts made.
        attempts: usize,
    },
}

impl PackError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        PackError::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = PackError::invalid("target count must be at least 1");
        assert_eq!(
            err.to_string(),
            "invalid configuration: target count must be at least 1"
        );
        assert_eq!(
            PackError::AttemptLimitReached { attempts: 12 }.to_string(),
            "no valid packing found after 12 attempts"
        );
    }
}
