//! Adiabatic paths H(s) for the normalized progress s ∈ [0, 1].

use std::f64::consts::PI;

use linalg::Op2;

use crate::pauli::bloch_operator;

/// A one-parameter family of Hermitian Hamiltonians and its s-derivative.
pub trait Schedule {
    fn hamiltonian(&self, s: f64) -> Op2;

    /// ∂H/∂s
    fn derivative(&self, s: f64) -> Op2;
}

/// Marzlin–Sanders path: a rotating transverse field with an oscillatory
/// correction whose frequency is set by `t0`.
///
/// `t0` is a property of the path, unrelated to the total evolution time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarzlinSanders {
    pub t0: f64,
}

impl MarzlinSanders {
    pub fn new(t0: f64) -> Self {
        Self { t0 }
    }

    /// Bloch components (vx, vy, vz) of H(s).
    pub fn field(&self, s: f64) -> [f64; 3] {
        let t0 = self.t0;
        let theta = PI * s;
        let wobble = (2.0 * t0 * theta).sin() / t0;

        let vx = PI * (2.0 * theta).cos() - PI * (2.0 * theta).sin() * wobble;
        let vy = PI * (2.0 * theta).sin() + PI * (2.0 * theta).cos() * wobble;
        let vz = 2.0 * PI * (t0 * theta).sin().powi(2) / t0;
        [vx, vy, vz]
    }

    /// Bloch components of ∂H/∂s.
    pub fn field_derivative(&self, s: f64) -> [f64; 3] {
        let t0 = self.t0;
        let theta = 2.0 * PI * s;
        let k = 2.0 * PI * PI;
        let envelope = 1.0 + (t0 * theta).cos();
        let ripple = (t0 * theta).sin();

        let vx = -k * theta.sin() * envelope - k * ripple * theta.cos() / t0;
        let vy = k * theta.cos() * envelope - k * ripple * theta.sin() / t0;
        let vz = k * ripple;
        [vx, vy, vz]
    }
}

impl Schedule for MarzlinSanders {
    fn hamiltonian(&self, s: f64) -> Op2 {
        bloch_operator(self.field(s))
    }

    fn derivative(&self, s: f64) -> Op2 {
        bloch_operator(self.field_derivative(s))
    }
}

pub fn hamiltonian(s: f64, t0: f64) -> Op2 {
    MarzlinSanders::new(t0).hamiltonian(s)
}

pub fn hamiltonian_derivative(s: f64, t0: f64) -> Op2 {
    MarzlinSanders::new(t0).derivative(s)
}
