//! Authority Graph
//!
//! This library provides the front-end shell around the graph builder:
//! configuration management, error handling, and loading of previously
//! emitted authority graph files.

pub mod config;
pub mod errors;
pub mod loader;

pub use config::Settings;
pub use errors::AnalysisError;
pub use loader::load_authority_graph;
