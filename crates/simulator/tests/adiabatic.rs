use std::f64::consts::PI;

use linalg::{
    matrix::{identity, scale, zeros},
    Op2, C64,
};
use proptest::prelude::*;
use quantum::{pauli::pauli_x, Schedule};
use simulator::{run, run_parallel, simulate, SimulationConfig};

/// Closed-form Bloch vector of the Marzlin–Sanders path.
fn field(s: f64, t0: f64) -> (f64, f64, f64) {
    let theta = PI * s;
    let vx = PI * (2.0 * theta).cos() - PI * (2.0 * theta).sin() * (2.0 * t0 * theta).sin() / t0;
    let vy = PI * (2.0 * theta).sin() + PI * (2.0 * theta).cos() * (2.0 * t0 * theta).sin() / t0;
    let vz = 2.0 * PI * (t0 * theta).sin().powi(2) / t0;
    (vx, vy, vz)
}

#[test]
fn default_run_shapes_and_finiteness() {
    let config = SimulationConfig::default();
    let d = run(&config).unwrap();

    assert_eq!(d.len(), 100);
    assert_eq!(d.fidelity_err.len(), 100);
    assert_eq!(d.energy_gap.len(), 100);
    assert_eq!(d.gauge_potential.len(), 100);

    for i in 0..d.len() {
        assert_eq!(d.time_step[i], (i + 1) as f64 / 100.0);
        assert!(d.fidelity_err[i].is_finite(), "step {}", i);
        assert!(d.energy_gap[i].is_finite(), "step {}", i);
        assert!(d.gauge_potential[i].is_finite(), "step {}", i);

        assert!(d.fidelity_err[i] > -1e-9 && d.fidelity_err[i] < 1.0 + 1e-9);
        assert!(d.energy_gap[i] > 0.0);
        assert!(d.gauge_potential[i] >= 0.0);
        assert!((d.norm[i] - 1.0).abs() < 1e-6, "norm drift at step {}", i);
    }
}

#[test]
fn final_gap_matches_closed_form() {
    let config = SimulationConfig::default();
    let d = run(&config).unwrap();

    let (vx, vy, vz) = field(1.0, config.t0);
    let expected = 2.0 * (vx * vx + vy * vy + vz * vz).sqrt();
    let last = d.energy_gap[d.len() - 1];
    assert!(
        (last - expected).abs() < 1e-9,
        "gap(1) = {}, expected {}",
        last,
        expected
    );
}

#[test]
fn gap_tracks_field_at_every_step() {
    let config = SimulationConfig::default().with_t0(17.0).with_steps(40);
    let d = run(&config).unwrap();

    for i in 0..d.len() {
        let (vx, vy, vz) = field(d.time_step[i], 17.0);
        let expected = 2.0 * (vx * vx + vy * vy + vz * vz).sqrt();
        assert!((d.energy_gap[i] - expected).abs() < 1e-9, "step {}", i);
    }
}

#[test]
fn parallel_precompute_matches_sequential() {
    let config = SimulationConfig::default();
    let seq = run(&config).unwrap();
    let par = run_parallel(&config).unwrap();
    assert_eq!(seq, par);
}

#[test]
fn repeated_runs_agree() {
    let config = SimulationConfig::default().with_t0(42.0);
    assert_eq!(run(&config).unwrap(), run(&config).unwrap());
}

struct Frozen(Op2);

impl Schedule for Frozen {
    fn hamiltonian(&self, _s: f64) -> Op2 {
        self.0
    }

    fn derivative(&self, _s: f64) -> Op2 {
        zeros()
    }
}

#[test]
fn static_path_stays_in_ground_state() {
    // π·X, whose ground state is the default initial state
    let h = [
        [C64::new(0.0, 0.0), C64::new(PI, 0.0)],
        [C64::new(PI, 0.0), C64::new(0.0, 0.0)],
    ];
    let d = simulate(&Frozen(h), &SimulationConfig::default()).unwrap();

    for i in 0..d.len() {
        assert!(d.fidelity_err[i].abs() < 1e-12, "step {}", i);
        assert!((d.energy_gap[i] - 2.0 * PI).abs() < 1e-12);
        assert_eq!(d.gauge_potential[i], 0.0);
        assert!((d.energy[i] + PI).abs() < 1e-12);
    }
}

struct Degenerate;

impl Schedule for Degenerate {
    fn hamiltonian(&self, _s: f64) -> Op2 {
        scale(&identity(), C64::new(2.0, 0.0))
    }

    fn derivative(&self, _s: f64) -> Op2 {
        pauli_x()
    }
}

#[test]
fn degenerate_spectrum_surfaces_in_series() {
    let config = SimulationConfig::default().with_steps(5);
    let d = simulate(&Degenerate, &config).unwrap();

    assert_eq!(d.len(), 5);
    for i in 0..d.len() {
        assert!(d.energy_gap[i].abs() < 1e-12);
        // inf, NaN or a huge finite value depending on rounding in the gap
        assert!(!(d.gauge_potential[i] < 1e6), "A = {}", d.gauge_potential[i]);
    }
}

#[test]
fn record_reassembles_columns() {
    let d = run(&SimulationConfig::default().with_steps(10)).unwrap();
    let r = d.record(9).unwrap();
    assert_eq!(r.s, 1.0);
    assert_eq!(r.energy_gap, d.energy_gap[9]);
    assert!(d.record(10).is_none());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn series_are_bounded(
        t0 in 0.5f64..600.0,
        steps in 1usize..150,
        total_time in 0.01f64..20.0,
    ) {
        let config = SimulationConfig::default()
            .with_t0(t0)
            .with_steps(steps)
            .with_total_time(total_time);
        let d = run(&config).unwrap();

        prop_assert_eq!(d.len(), steps);
        for i in 0..steps {
            prop_assert!(d.fidelity_err[i] > -1e-9 && d.fidelity_err[i] < 1.0 + 1e-9);
            prop_assert!(d.energy_gap[i] >= 2.0 * PI - 1e-9);
            prop_assert!(d.gauge_potential[i].is_finite());
            prop_assert!((d.norm[i] - 1.0).abs() < 1e-6);
        }
    }
}
