//! # Authority Graph Shared
//! This crate defines shared data structures and types used across the authority graph ecosystem.
//! It includes common definitions for authority events, authority edges, and wallet graphs.
pub mod types;
