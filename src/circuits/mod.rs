//! Series/parallel network primitives and the path-label reduction engine.

/// Incremental network authoring with automatic nesting labels.
pub mod builder;
/// Lumped element definitions.
pub mod element;
/// Prototype storage and the standard value series.
pub mod library;
/// Aggregate network representation.
pub mod network;
/// Flat nesting labels.
pub mod path;
/// The impedance contraction engine.
pub mod reduce;
/// Human-readable network summaries.
pub mod report;

pub use builder::NetworkBuilder;
pub use element::{Element, ElementKind};
pub use library::ComponentLibrary;
pub use network::Network;
pub use path::PathLabel;
pub use report::network_report;
