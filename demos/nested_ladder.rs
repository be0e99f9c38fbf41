//! Builds a nested series/parallel RLC network, reduces it, and prints the
//! full report.

use ac_impedance::prelude::*;

fn main() -> Result<(), CircuitError> {
    let r = Element::resistor(100.0)?;
    let c = Element::capacitor(1.0)?; // microfarads
    let l = Element::inductor(22.0)?; // microhenrys

    // o--R(100.0)--[~[~C(1.0) || R(100.0)~] || L(22.0)~]--o at 1 kHz
    let mut builder = NetworkBuilder::new(1000.0)?;
    builder.series(&r);
    builder.begin_parallel();
    builder.begin_parallel();
    builder.series(&c);
    builder.next_branch()?;
    builder.series(&r);
    builder.end_parallel()?;
    builder.next_branch()?;
    builder.series(&l);
    builder.end_parallel()?;

    let mut network = builder.finish()?;
    network.reduce()?;
    print!("{}", network_report(&network)?);
    Ok(())
}
