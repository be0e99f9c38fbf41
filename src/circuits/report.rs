//! Human-readable summaries of reduced networks.

use std::fmt::Write;

use crate::errors::CircuitError;
use crate::math::CScalar;

use super::network::Network;

/// Formats a complex impedance in `(R + Xi)` form, e.g. `(100.00 - 159.15i)`.
#[must_use]
pub fn format_impedance(z: CScalar) -> String {
    let sign = if z.im >= 0.0 { '+' } else { '-' };
    format!("({:.2} {sign} {:.2}i)", z.re, z.im.abs())
}

/// Formats the full circuit report: component listing, schematic, driving
/// frequency, equivalent impedance, magnitude, phase, and the component
/// with the largest impedance magnitude.
///
/// The network must have been reduced; the report is returned as a string
/// and never printed here.
pub fn network_report(network: &Network) -> Result<String, CircuitError> {
    let z = network.equivalent_impedance()?;
    let mut out = String::new();

    let _ = writeln!(out, "circuit with {} components:", network.len());
    for (index, (element, _)) in network.entries().enumerate() {
        let _ = writeln!(
            out,
            "  {}: {} {} {} | Z = {} ohms",
            index + 1,
            element.kind().name(),
            element.value(),
            element.kind().units(),
            format_impedance(element.impedance(network.frequency())),
        );
    }
    if !network.schematic().is_empty() {
        let _ = writeln!(out, "schematic: {}", network.schematic());
    }
    let _ = writeln!(out, "driving frequency: {} Hz", network.frequency());
    let _ = writeln!(out, "equivalent impedance: {} ohms", format_impedance(z));
    let _ = writeln!(out, "impedance magnitude: {:.2} ohms", network.magnitude()?);
    let _ = writeln!(
        out,
        "impedance phase: {:.2} degrees",
        network.phase()?.to_degrees()
    );
    if let Some(dominant) = network.dominant_element() {
        let _ = writeln!(
            out,
            "largest impedance: {} {} {}",
            dominant.kind().name(),
            dominant.value(),
            dominant.kind().units(),
        );
    }
    Ok(out)
}
