pub mod hamiltonian;
pub mod observables;
pub mod pauli;

pub use hamiltonian::{hamiltonian, hamiltonian_derivative, MarzlinSanders, Schedule};
