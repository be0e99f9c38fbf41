//! Prototype element storage and the standard value series.

use rand::Rng;

use crate::errors::CircuitError;
use crate::math::Scalar;

use super::element::{Element, ElementKind};

/// Standard resistor values in ohms, five per decade.
pub const RESISTOR_STANDARD_VALUES: [Scalar; 30] = [
    1.0, 1.2, 1.5, 1.8, 2.2, //
    10.0, 12.0, 15.0, 18.0, 22.0, //
    100.0, 120.0, 150.0, 180.0, 220.0, //
    1_000.0, 1_200.0, 1_500.0, 1_800.0, 2_200.0, //
    10_000.0, 12_000.0, 15_000.0, 18_000.0, 22_000.0, //
    100_000.0, 120_000.0, 150_000.0, 180_000.0, 220_000.0,
];

/// Standard capacitor values in microfarads.
pub const CAPACITOR_STANDARD_VALUES: [Scalar; 30] = [
    0.000_01, 0.000_012, 0.000_015, 0.000_018, 0.000_022, //
    0.000_1, 0.000_12, 0.000_15, 0.000_18, 0.000_22, //
    0.001, 0.001_2, 0.001_5, 0.001_8, 0.002_2, //
    0.01, 0.012, 0.015, 0.018, 0.022, //
    0.1, 0.12, 0.15, 0.18, 0.22, //
    1.0, 1.2, 1.5, 1.8, 2.2,
];

/// Standard inductor values in microhenrys.
pub const INDUCTOR_STANDARD_VALUES: [Scalar; 30] = [
    0.001, 0.001_2, 0.001_5, 0.001_8, 0.002_2, //
    0.01, 0.012, 0.015, 0.018, 0.022, //
    0.1, 0.12, 0.15, 0.18, 0.22, //
    1.0, 1.2, 1.5, 1.8, 2.2, //
    10.0, 12.0, 15.0, 18.0, 22.0, //
    100.0, 120.0, 150.0, 180.0, 220.0,
];

/// Draws a random element kind with a random standard value.
pub fn random_standard<R: Rng>(rng: &mut R) -> Result<Element, CircuitError> {
    let slot = rng.gen_range(0..30);
    match rng.gen_range(0..3) {
        0 => Element::new(ElementKind::Resistor, RESISTOR_STANDARD_VALUES[slot]),
        1 => Element::new(ElementKind::Capacitor, CAPACITOR_STANDARD_VALUES[slot]),
        _ => Element::new(ElementKind::Inductor, INDUCTOR_STANDARD_VALUES[slot]),
    }
}

/// A pool of prototype elements, kept grouped by kind.
///
/// Networks duplicate prototypes on insertion, so one pool can feed any
/// number of circuits without its entries ever being mutated.
#[derive(Debug, Clone, Default)]
pub struct ComponentLibrary {
    prototypes: Vec<Element>,
}

impl ComponentLibrary {
    /// Creates an empty library.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a prototype, keeping the pool grouped by kind.
    pub fn add(&mut self, element: Element) {
        self.prototypes.push(element);
        self.prototypes.sort_by_key(Element::kind);
    }

    /// Draws a random standard-value element, stores it, and returns a copy.
    pub fn add_random_standard<R: Rng>(&mut self, rng: &mut R) -> Result<Element, CircuitError> {
        let element = random_standard(rng)?;
        self.add(element.duplicate());
        Ok(element)
    }

    /// Stored prototypes, grouped by kind.
    #[must_use]
    pub fn prototypes(&self) -> &[Element] {
        &self.prototypes
    }

    /// Borrows a prototype by position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Element> {
        self.prototypes.get(index)
    }

    /// Number of stored prototypes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.prototypes.len()
    }

    /// True when the library holds no prototypes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prototypes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn library_stays_grouped_by_kind() {
        let mut library = ComponentLibrary::new();
        library.add(Element::inductor(10.0).unwrap());
        library.add(Element::resistor(100.0).unwrap());
        library.add(Element::capacitor(1.0).unwrap());
        library.add(Element::resistor(220.0).unwrap());

        let kinds: Vec<_> = library.prototypes().iter().map(Element::kind).collect();
        assert_eq!(
            kinds,
            vec![
                ElementKind::Resistor,
                ElementKind::Resistor,
                ElementKind::Capacitor,
                ElementKind::Inductor,
            ]
        );
        // Stable sort keeps insertion order within a kind.
        assert_eq!(library.get(0).unwrap().value(), 100.0);
        assert_eq!(library.get(1).unwrap().value(), 220.0);
    }

    #[test]
    fn random_standard_draws_from_the_tables() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let element = random_standard(&mut rng).unwrap();
            let table: &[Scalar] = match element.kind() {
                ElementKind::Resistor => &RESISTOR_STANDARD_VALUES,
                ElementKind::Capacitor => &CAPACITOR_STANDARD_VALUES,
                ElementKind::Inductor => &INDUCTOR_STANDARD_VALUES,
            };
            assert!(table.contains(&element.value()));
        }
    }

    #[test]
    fn add_random_standard_grows_the_pool() {
        let mut rng = StepRng::new(0, 1);
        let mut library = ComponentLibrary::new();
        let drawn = library.add_random_standard(&mut rng).unwrap();
        assert_eq!(library.len(), 1);
        assert_eq!(library.get(0).unwrap(), &drawn);
    }

    #[test]
    fn standard_values_are_all_positive() {
        for table in [
            &RESISTOR_STANDARD_VALUES,
            &CAPACITOR_STANDARD_VALUES,
            &INDUCTOR_STANDARD_VALUES,
        ] {
            assert!(table.iter().all(|&v| v > 0.0));
        }
    }
}
