//! Aggregate network of path-labelled elements.

use crate::errors::CircuitError;
use crate::math::{CScalar, Scalar};

use super::element::Element;
use super::path::PathLabel;
use super::reduce;

/// An ordered collection of path-labelled elements driven at a fixed AC
/// frequency.
///
/// The network owns independent duplicates of every element added to it;
/// caller-held prototypes are never mutated. The equivalent impedance is
/// available only after a successful [`reduce`](Self::reduce).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct Network {
    frequency: Scalar,
    entries: Vec<(Element, PathLabel)>,
    equivalent: Option<CScalar>,
    schematic: String,
}

impl Network {
    /// Creates an empty network driven at `frequency_hz`.
    pub fn new(frequency_hz: Scalar) -> Result<Self, CircuitError> {
        if frequency_hz <= 0.0 || !frequency_hz.is_finite() {
            return Err(CircuitError::InvalidFrequency(frequency_hz));
        }
        Ok(Self {
            frequency: frequency_hz,
            entries: Vec::new(),
            equivalent: None,
            schematic: String::new(),
        })
    }

    /// Driving frequency in hertz.
    #[must_use]
    pub const fn frequency(&self) -> Scalar {
        self.frequency
    }

    /// Appends a duplicate of `element` under the given nesting label.
    pub fn add_element(&mut self, element: &Element, path: PathLabel) {
        self.entries.push((element.duplicate(), path));
        self.equivalent = None;
    }

    /// Number of elements in the network.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no elements have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the stored elements and their labels.
    pub fn entries(&self) -> impl Iterator<Item = (&Element, &PathLabel)> {
        self.entries.iter().map(|(element, path)| (element, path))
    }

    /// Contracts the network to its equivalent impedance.
    ///
    /// Idempotent: repeated calls on an unchanged network return the stored
    /// result.
    pub fn reduce(&mut self) -> Result<CScalar, CircuitError> {
        if let Some(z) = self.equivalent {
            return Ok(z);
        }
        let labelled: Vec<reduce::Entry> = self
            .entries
            .iter()
            .map(|(element, path)| (path.clone(), element.impedance(self.frequency)))
            .collect();
        let z = reduce::reduce(&labelled)?;
        self.equivalent = Some(z);
        Ok(z)
    }

    /// Equivalent impedance after a successful [`reduce`](Self::reduce).
    pub fn equivalent_impedance(&self) -> Result<CScalar, CircuitError> {
        self.equivalent.ok_or(CircuitError::NotReduced)
    }

    /// Equivalent impedance magnitude in ohms.
    pub fn magnitude(&self) -> Result<Scalar, CircuitError> {
        Ok(self.equivalent_impedance()?.norm())
    }

    /// Equivalent impedance phase in radians.
    pub fn phase(&self) -> Result<Scalar, CircuitError> {
        Ok(self.equivalent_impedance()?.arg())
    }

    /// The element with the largest impedance magnitude at the driving
    /// frequency.
    #[must_use]
    pub fn dominant_element(&self) -> Option<&Element> {
        self.entries.iter().map(|(element, _)| element).max_by(|a, b| {
            a.impedance_magnitude(self.frequency)
                .total_cmp(&b.impedance_magnitude(self.frequency))
        })
    }

    /// Schematic text assembled by the builder, if this network came from
    /// one.
    #[must_use]
    pub fn schematic(&self) -> &str {
        &self.schematic
    }

    pub(crate) fn set_schematic(&mut self, schematic: String) {
        self.schematic = schematic;
    }
}
