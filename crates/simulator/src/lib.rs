pub mod adiabatic;
pub mod config;
pub mod error;
pub mod output;

pub use adiabatic::{
    run, run_parallel, simulate, simulate_parallel, Diagnostics, SpectralStep, StepRecord,
};
pub use config::SimulationConfig;
pub use error::{ConfigError, SimResult};
pub use output::{write_csv, Series, Style};
