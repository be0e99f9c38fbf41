//! Shared error types used across submodules.

use thiserror::Error;

use crate::math::Scalar;

/// Top-level error type for the crate.
///
/// Every variant is a recoverable condition signaled to the immediate
/// caller; nothing here is meant to abort the process.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CircuitError {
    /// Raised when a non-positive characteristic value is supplied to an element.
    #[error("invalid element value {0}: must be positive")]
    InvalidValue(Scalar),
    /// Raised when a non-positive driving frequency is supplied to a network.
    #[error("invalid driving frequency {0} Hz: must be positive and finite")]
    InvalidFrequency(Scalar),
    /// Raised when `reduce` is called on a network with no elements.
    #[error("cannot reduce an empty network")]
    EmptyNetwork,
    /// Raised when a parallel combination has a zero reciprocal sum or a
    /// zero-impedance branch, leaving the equivalent impedance undefined.
    #[error("degenerate network: parallel combination with an undefined impedance")]
    DegenerateNetwork,
    /// Raised when impedance accessors are called before a successful `reduce`.
    #[error("network has not been reduced")]
    NotReduced,
    /// Raised when contraction stalls because path labels never pair up.
    #[error("irreducible topology: path labels never pair up")]
    IrreducibleTopology,
    /// Raised when the builder is asked to close or finish an inconsistent
    /// parallel split.
    #[error("invalid topology: {0}")]
    InvalidTopology(String),
}
