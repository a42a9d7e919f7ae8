use std::io::{self, Write};

use crate::adiabatic::Diagnostics;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Style {
    Scatter,
    /// Scatter with a point marker.
    Dots,
    Line,
}

/// One plotted series against `time_step`.
#[derive(Clone, Copy, Debug)]
pub struct Series<'a> {
    pub label: &'static str,
    pub style: Style,
    pub values: &'a [f64],
}

impl Diagnostics {
    /// The three plotted series, in drawing order.
    pub fn series(&self) -> [Series<'_>; 3] {
        [
            Series {
                label: "energy gap",
                style: Style::Scatter,
                values: &self.energy_gap,
            },
            Series {
                label: "adiabatic gauge potential",
                style: Style::Dots,
                values: &self.gauge_potential,
            },
            Series {
                label: "fidelity error",
                style: Style::Line,
                values: &self.fidelity_err,
            },
        ]
    }
}

pub fn write_csv<W: Write>(out: &mut W, d: &Diagnostics, header: bool) -> io::Result<()> {
    if header {
        writeln!(out, "s,energy_gap,gauge_potential,fidelity_err,energy,norm")?;
    }
    for i in 0..d.len() {
        writeln!(
            out,
            "{},{},{},{},{},{}",
            d.time_step[i],
            d.energy_gap[i],
            d.gauge_potential[i],
            d.fidelity_err[i],
            d.energy[i],
            d.norm[i]
        )?;
    }
    out.flush()
}
