use linalg::matrix::{mat_vec, outer, vdot};
use linalg::{Ket, Op2, C64};

/// ⟨a|b⟩
pub fn overlap(a: &Ket, b: &Ket) -> C64 {
    vdot(a, b)
}

/// |⟨a|b⟩|², insensitive to the global phase of either state.
pub fn fidelity(a: &Ket, b: &Ket) -> f64 {
    overlap(a, b).norm_sqr()
}

/// 1 − |⟨state|ideal⟩|²
pub fn fidelity_error(state: &Ket, ideal: &Ket) -> f64 {
    1.0 - fidelity(state, ideal)
}

/// Rank-one projector |v⟩⟨v|.
pub fn projector(v: &Ket) -> Op2 {
    outer(v, v)
}

/// Re ⟨ψ|A|ψ⟩
pub fn expectation(op: &Op2, psi: &Ket) -> f64 {
    vdot(psi, &mat_vec(op, psi)).re
}

/// |⟨g|∂H|f⟩| / gap.
///
/// The division is unguarded: a vanishing gap yields inf or NaN.
pub fn gauge_potential(ground: &Ket, excited: &Ket, derivative: &Op2, gap: f64) -> f64 {
    vdot(ground, &mat_vec(derivative, excited)).norm() / gap
}
