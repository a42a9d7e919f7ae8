use num_complex::Complex64;

pub type C64 = Complex64;

/// Dense 2×2 operator, row-major.
pub type Op2 = [[C64; 2]; 2];

/// Pure qubit state in the computational basis.
pub type Ket = [C64; 2];

pub fn zeros() -> Op2 {
    [[C64::new(0.0, 0.0); 2]; 2]
}

pub fn identity() -> Op2 {
    let z = C64::new(0.0, 0.0);
    let o = C64::new(1.0, 0.0);
    [[o, z], [z, o]]
}

pub fn add(a: &Op2, b: &Op2) -> Op2 {
    let mut out = zeros();
    for i in 0..2 {
        for j in 0..2 {
            out[i][j] = a[i][j] + b[i][j];
        }
    }
    out
}

pub fn scale(a: &Op2, k: C64) -> Op2 {
    let mut out = zeros();
    for i in 0..2 {
        for j in 0..2 {
            out[i][j] = a[i][j] * k;
        }
    }
    out
}

pub fn mat_mul(a: &Op2, b: &Op2) -> Op2 {
    let mut out = zeros();
    for i in 0..2 {
        for j in 0..2 {
            let mut acc = C64::new(0.0, 0.0);
            for k in 0..2 {
                acc += a[i][k] * b[k][j];
            }
            out[i][j] = acc;
        }
    }
    out
}

pub fn mat_vec(a: &Op2, v: &Ket) -> Ket {
    let mut out = [C64::new(0.0, 0.0); 2];
    for i in 0..2 {
        let mut acc = C64::new(0.0, 0.0);
        for j in 0..2 {
            acc += a[i][j] * v[j];
        }
        out[i] = acc;
    }
    out
}

pub fn adjoint(a: &Op2) -> Op2 {
    let mut out = zeros();
    for i in 0..2 {
        for j in 0..2 {
            out[i][j] = a[j][i].conj();
        }
    }
    out
}

/// |a⟩⟨b|
pub fn outer(a: &Ket, b: &Ket) -> Op2 {
    let mut out = zeros();
    for i in 0..2 {
        for j in 0..2 {
            out[i][j] = a[i] * b[j].conj();
        }
    }
    out
}

/// ⟨a|b⟩, conjugating the left argument.
pub fn vdot(a: &Ket, b: &Ket) -> C64 {
    a.iter().zip(b.iter()).map(|(x, y)| x.conj() * y).sum()
}

pub fn norm(v: &Ket) -> f64 {
    v.iter().map(|x| x.norm_sqr()).sum::<f64>().sqrt()
}

/// Largest elementwise modulus of `a - b`.
pub fn max_abs_diff(a: &Op2, b: &Op2) -> f64 {
    let mut worst = 0.0f64;
    for i in 0..2 {
        for j in 0..2 {
            worst = worst.max((a[i][j] - b[i][j]).norm());
        }
    }
    worst
}

pub fn is_hermitian(a: &Op2, tol: f64) -> bool {
    max_abs_diff(a, &adjoint(a)) <= tol
}
