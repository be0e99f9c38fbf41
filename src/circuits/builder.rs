//! Incremental network authoring with automatic nesting labels.
//!
//! [`NetworkBuilder`] plays the nesting-context tracker role: it hands a
//! fresh group id to every split opened on the main wire, tracks the branch
//! chain as splits open and close, and stamps each appended element with
//! the resulting [`PathLabel`]. It also accumulates the textual schematic
//! that ends up on the finished [`Network`].

use crate::errors::CircuitError;
use crate::math::Scalar;

use super::element::Element;
use super::network::Network;
use super::path::PathLabel;

#[derive(Debug)]
struct SplitFrame {
    /// 1-based index of the branch currently being filled.
    branch: u32,
    /// True once the current branch holds an element or a closed split.
    branch_has_content: bool,
}

/// Builds a [`Network`] node by node: elements in series, parallel splits
/// opened branch by branch, arbitrarily nested.
///
/// ```
/// use ac_impedance::circuits::{builder::NetworkBuilder, element::Element};
///
/// # fn main() -> Result<(), ac_impedance::errors::CircuitError> {
/// let r = Element::resistor(100.0)?;
/// let mut builder = NetworkBuilder::new(50.0)?;
/// builder.begin_parallel();
/// builder.series(&r);
/// builder.next_branch()?;
/// builder.series(&r);
/// builder.end_parallel()?;
/// let mut network = builder.finish()?;
/// assert!((network.reduce()?.re - 50.0).abs() < 1.0e-9);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct NetworkBuilder {
    network: Network,
    splits: Vec<SplitFrame>,
    groups_opened: u32,
    /// Group id of the outermost split currently open.
    outer_group: u32,
    main_wire_has_content: bool,
    schematic: String,
}

impl NetworkBuilder {
    /// Starts a new network at the given driving frequency.
    pub fn new(frequency_hz: Scalar) -> Result<Self, CircuitError> {
        Ok(Self {
            network: Network::new(frequency_hz)?,
            splits: Vec::new(),
            groups_opened: 0,
            outer_group: 0,
            main_wire_has_content: false,
            schematic: String::from("o--"),
        })
    }

    fn current_label(&self) -> PathLabel {
        if self.splits.is_empty() {
            PathLabel::series()
        } else {
            let branches: Vec<u32> = self.splits.iter().map(|frame| frame.branch).collect();
            PathLabel::nested(self.outer_group, &branches)
        }
    }

    fn joint_needed(&self) -> bool {
        self.splits
            .last()
            .map_or(self.main_wire_has_content, |frame| frame.branch_has_content)
    }

    fn mark_content(&mut self) {
        if let Some(frame) = self.splits.last_mut() {
            frame.branch_has_content = true;
        } else {
            self.main_wire_has_content = true;
        }
    }

    /// Appends `element` in series at the current node.
    pub fn series(&mut self, element: &Element) -> &mut Self {
        if self.joint_needed() {
            self.schematic.push_str("--");
        }
        self.schematic.push_str(&element.symbol());
        let label = self.current_label();
        self.network.add_element(element, label);
        self.mark_content();
        self
    }

    /// Opens a parallel split at the current node and enters its first
    /// branch. Splits opened on the main wire receive a fresh group id.
    pub fn begin_parallel(&mut self) -> &mut Self {
        if self.joint_needed() {
            self.schematic.push_str("--");
        }
        self.schematic.push_str("[~");
        if self.splits.is_empty() {
            self.groups_opened += 1;
            self.outer_group = self.groups_opened;
        }
        self.splits.push(SplitFrame {
            branch: 1,
            branch_has_content: false,
        });
        self
    }

    /// Closes the current branch and enters the next one.
    pub fn next_branch(&mut self) -> Result<(), CircuitError> {
        let Some(frame) = self.splits.last_mut() else {
            return Err(CircuitError::InvalidTopology(
                "next_branch outside a parallel split".into(),
            ));
        };
        if !frame.branch_has_content {
            return Err(CircuitError::InvalidTopology(
                "cannot leave an empty branch".into(),
            ));
        }
        frame.branch += 1;
        frame.branch_has_content = false;
        self.schematic.push_str(" || ");
        Ok(())
    }

    /// Closes the current split. It must hold at least two branches, each
    /// with content.
    pub fn end_parallel(&mut self) -> Result<(), CircuitError> {
        let Some(frame) = self.splits.pop() else {
            return Err(CircuitError::InvalidTopology(
                "end_parallel outside a parallel split".into(),
            ));
        };
        if !frame.branch_has_content {
            self.splits.push(frame);
            return Err(CircuitError::InvalidTopology(
                "cannot close an empty branch".into(),
            ));
        }
        if frame.branch < 2 {
            self.splits.push(frame);
            return Err(CircuitError::InvalidTopology(
                "a parallel split needs at least two branches".into(),
            ));
        }
        self.schematic.push_str("~]");
        self.mark_content();
        Ok(())
    }

    /// Completes the circuit and returns the finished network.
    pub fn finish(mut self) -> Result<Network, CircuitError> {
        if !self.splits.is_empty() {
            return Err(CircuitError::InvalidTopology(
                "finish with parallel splits still open".into(),
            ));
        }
        self.schematic.push_str("--o");
        self.network.set_schematic(self.schematic);
        Ok(self.network)
    }
}
