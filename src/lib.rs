#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, missing_docs)]
#![doc = include_str!("../README.md")]

/// Unit scaling and frequency conversion helpers.
pub mod constants;
/// Shared scalar and complex-number aliases.
pub mod math;
/// Circuit elements, nesting labels, networks, and the reduction engine.
pub mod circuits;
/// Error types shared between submodules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
