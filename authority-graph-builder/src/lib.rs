//! # Authority Graph Builder
//!
//! Core transformation stage of the authority analysis pipeline. It
//! validates raw authority events, normalizes each one into an edge, groups
//! the edges by wallet, and sorts every group deterministically. The result
//! is consumed as-is by the downstream risk analyzer.
pub mod builder;
pub mod errors;

pub use builder::{GraphBuilder, normalize_amount};
pub use errors::BuilderError;
