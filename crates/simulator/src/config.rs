use linalg::{Ket, C64};

use crate::error::{ConfigError, SimResult};

pub const DIM: usize = 2;
pub const STEPS: usize = 100;
pub const TOTAL_TIME: f64 = 1.0;
pub const T0: f64 = 500.0;

const NORM_TOLERANCE: f64 = 1e-9;

/// Run parameters. `total_time` (T) fixes the step size T/L; `t0` (T0) only
/// shapes the Hamiltonian path.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    pub dim: usize,
    /// L
    pub steps: usize,
    pub total_time: f64,
    pub t0: f64,
    pub initial_state: Vec<C64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        let s = 1.0 / 2.0_f64.sqrt();
        Self {
            dim: DIM,
            steps: STEPS,
            total_time: TOTAL_TIME,
            t0: T0,
            initial_state: vec![C64::new(s, 0.0), C64::new(-s, 0.0)],
        }
    }
}

impl SimulationConfig {
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_total_time(mut self, total_time: f64) -> Self {
        self.total_time = total_time;
        self
    }

    pub fn with_t0(mut self, t0: f64) -> Self {
        self.t0 = t0;
        self
    }

    pub fn with_dim(mut self, dim: usize) -> Self {
        self.dim = dim;
        self
    }

    pub fn with_initial_state(mut self, state: Vec<C64>) -> Self {
        self.initial_state = state;
        self
    }

    pub fn validate(&self) -> SimResult<()> {
        if self.dim == 0 {
            return Err(ConfigError::InvalidDimension(self.dim));
        }
        if self.dim != DIM {
            return Err(ConfigError::UnsupportedDimension(self.dim));
        }
        if self.steps == 0 {
            return Err(ConfigError::ZeroSteps);
        }
        if !(self.total_time.is_finite() && self.total_time > 0.0) {
            return Err(ConfigError::InvalidTotalTime(self.total_time));
        }
        if !(self.t0.is_finite() && self.t0 > 0.0) {
            return Err(ConfigError::InvalidScale(self.t0));
        }
        if self.initial_state.len() != self.dim {
            return Err(ConfigError::StateLength {
                expected: self.dim,
                got: self.initial_state.len(),
            });
        }

        let norm = self
            .initial_state
            .iter()
            .map(|a| a.norm_sqr())
            .sum::<f64>()
            .sqrt();
        if (norm - 1.0).abs() > NORM_TOLERANCE {
            return Err(ConfigError::UnnormalizedState(norm));
        }
        Ok(())
    }

    /// dt = T/L
    pub fn dt(&self) -> f64 {
        self.total_time / self.steps as f64
    }

    /// s = count/L for count in 1..=L.
    pub fn progress(&self, count: usize) -> f64 {
        count as f64 / self.steps as f64
    }

    /// Validated initial ket.
    pub fn initial_ket(&self) -> SimResult<Ket> {
        self.validate()?;
        Ok([self.initial_state[0], self.initial_state[1]])
    }
}
