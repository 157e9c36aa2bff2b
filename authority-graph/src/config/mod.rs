//! Configuration module for the Authority Graph binary.
//! Defines the environment-driven settings the run loop needs.
mod settings;

pub use settings::Settings;
