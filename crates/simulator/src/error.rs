//! Configuration errors, raised before any step runs.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("dimension must be positive, got {0}")]
    InvalidDimension(usize),

    #[error("only the qubit case (dimension 2) is supported, got {0}")]
    UnsupportedDimension(usize),

    #[error("number of steps must be at least 1")]
    ZeroSteps,

    #[error("total simulation time must be positive and finite, got {0}")]
    InvalidTotalTime(f64),

    #[error("Hamiltonian scale T0 must be positive and finite, got {0}")]
    InvalidScale(f64),

    #[error("initial state has {got} amplitudes but dimension is {expected}")]
    StateLength { expected: usize, got: usize },

    #[error("initial state must have unit norm, got {0}")]
    UnnormalizedState(f64),
}

pub type SimResult<T> = Result<T, ConfigError>;
