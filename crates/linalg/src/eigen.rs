use std::cmp::Ordering;

use faer::{Mat, Side};

use crate::matrix::{add, outer, scale, zeros, Ket, Op2, C64};

/// Eigenpairs of a Hermitian operator.
///
/// `values` and `vectors` are kept in the order the decomposition produced
/// them. Ground and excited states are selected through [`ascending_order`],
/// never by position. Eigenvector phases are arbitrary.
#[derive(Clone, Debug)]
pub struct Eigensystem {
    pub values: [f64; 2],
    /// `vectors[k]` belongs to `values[k]`.
    pub vectors: [Ket; 2],
    order: [usize; 2],
}

impl Eigensystem {
    /// Indices into `values` sorted by ascending eigenvalue.
    pub fn order(&self) -> [usize; 2] {
        self.order
    }

    pub fn ground_index(&self) -> usize {
        self.order[0]
    }

    pub fn excited_index(&self) -> usize {
        self.order[1]
    }

    pub fn ground(&self) -> &Ket {
        &self.vectors[self.ground_index()]
    }

    pub fn excited(&self) -> &Ket {
        &self.vectors[self.excited_index()]
    }

    pub fn ground_energy(&self) -> f64 {
        self.values[self.ground_index()]
    }

    pub fn excited_energy(&self) -> f64 {
        self.values[self.excited_index()]
    }

    /// λ_excited − λ_ground; zero at an exact degeneracy.
    pub fn gap(&self) -> f64 {
        self.excited_energy() - self.ground_energy()
    }

    /// Σ_k f(λ_k) |v_k⟩⟨v_k|
    pub fn map_spectrum<F>(&self, f: F) -> Op2
    where
        F: Fn(f64) -> C64,
    {
        let mut out = zeros();
        for k in 0..2 {
            let proj = outer(&self.vectors[k], &self.vectors[k]);
            out = add(&out, &scale(&proj, f(self.values[k])));
        }
        out
    }
}

/// Hermitian eigendecomposition. Only the lower triangle of `h` is read.
pub fn diagonalize(h: &Op2) -> Eigensystem {
    let mut m = Mat::<C64>::zeros(2, 2);
    for i in 0..2 {
        for j in 0..2 {
            m.write(i, j, h[i][j]);
        }
    }

    let evd = m.selfadjoint_eigendecomposition(Side::Lower);
    let s = evd.s().column_vector();
    let u = evd.u();

    let mut values = [0.0f64; 2];
    let mut vectors = [[C64::new(0.0, 0.0); 2]; 2];
    for k in 0..2 {
        values[k] = s.read(k).re;
        for i in 0..2 {
            vectors[k][i] = u.read(i, k);
        }
    }

    let order = ascending_order(&values);
    Eigensystem {
        values,
        vectors,
        order,
    }
}

/// Stable ascending argsort; equal values keep their original index order.
pub fn ascending_order(values: &[f64; 2]) -> [usize; 2] {
    let mut idx = [0usize, 1];
    idx.sort_by(|&a, &b| values[a].partial_cmp(&values[b]).unwrap_or(Ordering::Equal));
    idx
}
