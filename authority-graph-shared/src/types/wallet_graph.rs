use crate::types::AuthorityEdge;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The ordered authority edges grouped under one wallet address.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletGraph {
    pub wallet: String,
    pub authority_edges: Vec<AuthorityEdge>,
}

/// Top-level output of the graph builder: wallet address to wallet graph.
///
/// Key order carries no semantic meaning, but a `BTreeMap` keeps the
/// serialized form byte-stable across runs and machines.
pub type AuthorityGraph = BTreeMap<String, WalletGraph>;
