pub mod eigen;
pub mod expm;
pub mod matrix;

pub use eigen::{ascending_order, diagonalize, Eigensystem};
pub use expm::{propagate, unitary_step};
pub use matrix::{Ket, Op2, C64};
