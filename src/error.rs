//! Error types for quantum-state validation and point subsampling.

use std::fmt;

use rand::distributions::WeightedError;

use crate::wf_ops::MAX_N;

/// A quantum-number combination that does not index a Hydrogen eigenstate.
/// These are rejected at the request boundary, before any grid or density
/// work happens; we never silently clamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateError {
    /// n must be >= 1.
    InvalidN { n: u16 },
    /// n above the factorial-LUT-safe bound.
    NAboveSupported { n: u16 },
    /// l must satisfy 0 <= l < n.
    InvalidL { n: u16, l: u16 },
    /// m must satisfy -l <= m <= l.
    InvalidM { l: u16, m: i16 },
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateError::InvalidN { n } => {
                write!(f, "Principal quantum number must satisfy n >= 1; got n={n}")
            }
            StateError::NAboveSupported { n } => write!(
                f,
                "Principal quantum number must satisfy n <= {MAX_N}; got n={n}"
            ),
            StateError::InvalidL { n, l } => write!(
                f,
                "Azimuthal quantum number must satisfy 0 <= l < n; got l={l} with n={n}"
            ),
            StateError::InvalidM { l, m } => write!(
                f,
                "Magnetic quantum number must satisfy -l <= m <= l; got m={m} with l={l}"
            ),
        }
    }
}

impl std::error::Error for StateError {}

/// Errors from weighted point subsampling. The density floor keeps weights
/// strictly positive, so these should not occur in practice; we propagate
/// them rather than unwrapping.
#[derive(Debug)]
pub enum SampleError {
    Weights(WeightedError),
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleError::Weights(e) => write!(f, "Weighted subsampling failed: {e}"),
        }
    }
}

impl std::error::Error for SampleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SampleError::Weights(e) => Some(e),
        }
    }
}

impl From<WeightedError> for SampleError {
    fn from(e: WeightedError) -> Self {
        SampleError::Weights(e)
    }
}
