use std::io::{self, BufWriter};

use clap::Parser;
use tracing::{error, info};

use simulator::{config, run, run_parallel, write_csv, SimulationConfig};

/// Discrete adiabatic evolution of a driven qubit.
///
/// Prints time step, energy gap, adiabatic gauge potential and fidelity
/// error as CSV on stdout; logs go to stderr.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of discrete steps L
    #[arg(long, default_value_t = config::STEPS)]
    steps: usize,

    /// Total simulation time T (step size is T/L)
    #[arg(long, default_value_t = config::TOTAL_TIME)]
    total_time: f64,

    /// Hamiltonian scale T0 of the oscillatory correction
    #[arg(long, default_value_t = config::T0)]
    t0: f64,

    /// Precompute per-step spectra on the Rayon pool
    #[arg(long)]
    parallel: bool,

    /// Number of Rayon worker threads (0 = Rayon default)
    #[arg(long, default_value_t = 0)]
    threads: usize,

    /// Omit the CSV header row
    #[arg(long)]
    no_header: bool,

    /// Per-step debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if args.threads > 0 {
        if let Err(err) = rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build_global()
        {
            error!("failed to build Rayon thread pool: {}", err);
            std::process::exit(1);
        }
    }

    let config = SimulationConfig::default()
        .with_steps(args.steps)
        .with_total_time(args.total_time)
        .with_t0(args.t0);

    let result = if args.parallel {
        run_parallel(&config)
    } else {
        run(&config)
    };
    let diagnostics = match result {
        Ok(d) => d,
        Err(err) => {
            error!("invalid configuration: {}", err);
            std::process::exit(1);
        }
    };

    for series in diagnostics.series() {
        info!(
            label = series.label,
            style = ?series.style,
            points = series.values.len(),
            "series"
        );
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if let Err(err) = write_csv(&mut out, &diagnostics, !args.no_header) {
        error!("failed to write CSV to stdout: {}", err);
        std::process::exit(1);
    }
}
