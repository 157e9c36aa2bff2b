//! Safe loader for previously emitted authority graph files.
//!
//! The downstream risk analyzer consumes graph files produced by this
//! binary. Re-loading one validates the top-level shape before handing it
//! over, so a hand-edited or truncated file is rejected at the boundary
//! instead of deep inside the analyzer.
use crate::errors::AnalysisError;
use authority_graph_shared::types::AuthorityGraph;
use std::fs;
use std::path::Path;

/// Loads and validates an authority graph from a JSON file.
///
/// Every entry must decode into a `WalletGraph`, and each entry's map key
/// must equal its `wallet` field.
///
/// # Arguments
///
/// * `path` - Path of the graph file to load.
///
/// # Returns
///
/// The parsed `AuthorityGraph`, or an `AnalysisError` when the file is
/// unreadable, not valid JSON for the schema, or internally inconsistent.
pub fn load_authority_graph(path: impl AsRef<Path>) -> Result<AuthorityGraph, AnalysisError> {
    let raw = fs::read_to_string(path)?;
    let graph: AuthorityGraph = serde_json::from_str(&raw)?;

    for (key, wallet_graph) in &graph {
        if wallet_graph.wallet != *key {
            return Err(AnalysisError::InvalidGraph(format!(
                "entry key {key} does not match wallet field {}",
                wallet_graph.wallet
            )));
        }
    }

    Ok(graph)
}
