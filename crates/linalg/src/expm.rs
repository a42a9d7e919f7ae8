use crate::eigen::{diagonalize, Eigensystem};
use crate::matrix::{mat_vec, Ket, Op2, C64};

impl Eigensystem {
    /// exp(−i·H·dt) = V·diag(exp(−i·λ_k·dt))·V†
    pub fn propagator(&self, dt: f64) -> Op2 {
        self.map_spectrum(|lambda| C64::new(0.0, -lambda * dt).exp())
    }
}

/// One-step unitary for a Hermitian `h`. Hermiticity is not checked.
pub fn unitary_step(h: &Op2, dt: f64) -> Op2 {
    diagonalize(h).propagator(dt)
}

/// exp(−i·H·dt)·state. The result is not renormalized.
pub fn propagate(state: &Ket, h: &Op2, dt: f64) -> Ket {
    mat_vec(&unitary_step(h, dt), state)
}
