//! Convenience re-exports for assembling and reducing networks.

pub use crate::circuits::{
    builder::NetworkBuilder,
    element::{Element, ElementKind},
    library::{
        random_standard, ComponentLibrary, CAPACITOR_STANDARD_VALUES, INDUCTOR_STANDARD_VALUES,
        RESISTOR_STANDARD_VALUES,
    },
    network::Network,
    path::PathLabel,
    reduce::reduce,
    report::{format_impedance, network_report},
};
pub use crate::constants::{angular_frequency, MICRO};
pub use crate::errors::CircuitError;
pub use crate::math::{phasor, CScalar, Scalar};
