//! Lumped passive element models.

use crate::constants::{angular_frequency, MICRO};
use crate::errors::CircuitError;
use crate::math::{CScalar, Scalar};

/// The closed set of supported element kinds.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ElementKind {
    /// Ideal resistor, value in ohms.
    Resistor,
    /// Ideal capacitor, value in microfarads.
    Capacitor,
    /// Ideal inductor, value in microhenrys.
    Inductor,
}

impl ElementKind {
    /// Lower-case kind name for reports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Resistor => "resistor",
            Self::Capacitor => "capacitor",
            Self::Inductor => "inductor",
        }
    }

    /// Unit the characteristic value is declared in.
    #[must_use]
    pub const fn units(self) -> &'static str {
        match self {
            Self::Resistor => "ohms",
            Self::Capacitor => "microfarads",
            Self::Inductor => "microhenrys",
        }
    }

    /// One-letter schematic prefix.
    #[must_use]
    pub const fn symbol_prefix(self) -> char {
        match self {
            Self::Resistor => 'R',
            Self::Capacitor => 'C',
            Self::Inductor => 'L',
        }
    }
}

/// A passive two-terminal element with a fixed characteristic value.
///
/// Impedance is a pure function of the value and the driving frequency,
/// recomputed on every access, so it can never go stale.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    kind: ElementKind,
    value: Scalar,
}

impl Element {
    /// Creates an element of the given kind. Fails unless `value` is positive.
    pub fn new(kind: ElementKind, value: Scalar) -> Result<Self, CircuitError> {
        if value <= 0.0 || !value.is_finite() {
            return Err(CircuitError::InvalidValue(value));
        }
        Ok(Self { kind, value })
    }

    /// Creates a resistor with resistance in ohms.
    pub fn resistor(ohms: Scalar) -> Result<Self, CircuitError> {
        Self::new(ElementKind::Resistor, ohms)
    }

    /// Creates a capacitor with capacitance in microfarads.
    pub fn capacitor(microfarads: Scalar) -> Result<Self, CircuitError> {
        Self::new(ElementKind::Capacitor, microfarads)
    }

    /// Creates an inductor with inductance in microhenrys.
    pub fn inductor(microhenrys: Scalar) -> Result<Self, CircuitError> {
        Self::new(ElementKind::Inductor, microhenrys)
    }

    /// Element kind.
    #[must_use]
    pub const fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Characteristic value in the kind's declared unit.
    #[must_use]
    pub const fn value(&self) -> Scalar {
        self.value
    }

    /// Replaces the characteristic value. Fails unless `value` is positive.
    pub fn set_value(&mut self, value: Scalar) -> Result<(), CircuitError> {
        if value <= 0.0 || !value.is_finite() {
            return Err(CircuitError::InvalidValue(value));
        }
        self.value = value;
        Ok(())
    }

    /// Returns the impedance at driving frequency `hz`.
    ///
    /// Reactive values are declared in micro-units; the scale factor is
    /// applied here, once.
    #[must_use]
    pub fn impedance(&self, hz: Scalar) -> CScalar {
        match self.kind {
            ElementKind::Resistor => CScalar::new(self.value, 0.0),
            ElementKind::Capacitor => {
                CScalar::new(0.0, -1.0 / (angular_frequency(hz) * MICRO * self.value))
            }
            ElementKind::Inductor => {
                CScalar::new(0.0, angular_frequency(hz) * MICRO * self.value)
            }
        }
    }

    /// Impedance magnitude at `hz`, in ohms.
    #[must_use]
    pub fn impedance_magnitude(&self, hz: Scalar) -> Scalar {
        self.impedance(hz).norm()
    }

    /// Impedance phase at `hz`, in radians.
    #[must_use]
    pub fn impedance_phase(&self, hz: Scalar) -> Scalar {
        self.impedance(hz).arg()
    }

    /// Independent copy with the same kind and value and no nesting context.
    ///
    /// Networks store duplicates so library prototypes are never mutated by
    /// circuit construction.
    #[must_use]
    pub fn duplicate(&self) -> Self {
        self.clone()
    }

    /// Schematic symbol with the value, e.g. `R(100.0)`.
    #[must_use]
    pub fn symbol(&self) -> String {
        format!("{}({:.1})", self.kind.symbol_prefix(), self.value)
    }
}
