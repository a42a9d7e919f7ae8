use linalg::matrix::{add, scale};
use linalg::{Op2, C64};

pub fn pauli_x() -> Op2 {
    let z = C64::new(0.0, 0.0);
    let o = C64::new(1.0, 0.0);
    [[z, o], [o, z]]
}

pub fn pauli_y() -> Op2 {
    let z = C64::new(0.0, 0.0);
    let i = C64::new(0.0, 1.0);
    let ni = C64::new(0.0, -1.0);
    [[z, ni], [i, z]]
}

pub fn pauli_z() -> Op2 {
    let z = C64::new(0.0, 0.0);
    let o = C64::new(1.0, 0.0);
    let m = C64::new(-1.0, 0.0);
    [[o, z], [z, m]]
}

/// vx·X + vy·Y + vz·Z = [[vz, vx − i·vy], [vx + i·vy, −vz]]
pub fn bloch_operator([vx, vy, vz]: [f64; 3]) -> Op2 {
    let x = scale(&pauli_x(), C64::new(vx, 0.0));
    let y = scale(&pauli_y(), C64::new(vy, 0.0));
    let z = scale(&pauli_z(), C64::new(vz, 0.0));
    add(&add(&x, &y), &z)
}
