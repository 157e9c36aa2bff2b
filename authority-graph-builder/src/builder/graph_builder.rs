use std::collections::BTreeMap;

use authority_graph_shared::types::{
    AuthorityEdge, AuthorityEvent, AuthorityGraph, RevocationStatus, WalletGraph,
};
use serde_json::Value;
use tracing::debug;

use crate::builder::amount::normalize_amount;
use crate::builder::sort::sort_edges;
use crate::errors::BuilderError;

/// `GraphBuilder` turns flat batches of authority events into per-wallet
/// graphs of normalized authority edges.
///
/// The builder holds no state. Every call validates its whole input batch,
/// allocates a fresh output graph, and never mutates caller data, so a
/// single instance can be shared freely across threads as long as each call
/// gets its own batch.
#[derive(Clone, Copy, Debug, Default)]
pub struct GraphBuilder;

impl GraphBuilder {
    /// Creates a new `GraphBuilder` instance.
    pub fn new() -> Self {
        Self
    }

    /// Builds the authority graph from a batch of authority events.
    ///
    /// Events are validated, normalized into edges, grouped by wallet in a
    /// single pass over the input, and each group is sorted by the
    /// deterministic composite key (block, tx_hash, log_index, timestamp).
    /// Validation is all-or-nothing: one malformed event fails the whole
    /// batch and no partial graph is ever returned.
    ///
    /// # Arguments
    ///
    /// * `events` - The authority events to transform, in extraction order.
    ///
    /// # Returns
    ///
    /// The wallet-keyed `AuthorityGraph` on success, or a `BuilderError`
    /// naming the first structural violation. An empty batch yields an empty
    /// graph, not an error.
    pub fn build_authority_graph(
        &self,
        events: &[AuthorityEvent],
    ) -> Result<AuthorityGraph, BuilderError> {
        if events.is_empty() {
            return Ok(AuthorityGraph::new());
        }

        let mut groups: BTreeMap<String, Vec<AuthorityEdge>> = BTreeMap::new();
        for event in events {
            let (wallet, edge) = normalize_event(event)?;
            groups.entry(wallet).or_default().push(edge);
        }

        let mut graph = AuthorityGraph::new();
        for (wallet, mut edges) in groups {
            sort_edges(&mut edges);
            graph.insert(
                wallet.clone(),
                WalletGraph {
                    wallet,
                    authority_edges: edges,
                },
            );
        }

        debug!(
            events = events.len(),
            wallets = graph.len(),
            "built authority graph"
        );

        Ok(graph)
    }

    /// Builds the authority graph from an untrusted JSON value.
    ///
    /// This is the boundary entry point for input that has not been decoded
    /// yet: the top-level value must be an array, and each element must
    /// decode into an `AuthorityEvent` object. Field-level completeness is
    /// still checked by `build_authority_graph`, so a structurally
    /// incomplete event reports the missing field by name rather than a
    /// decoding error.
    ///
    /// # Arguments
    ///
    /// * `input` - The parsed JSON document holding the event array.
    ///
    /// # Returns
    ///
    /// The built `AuthorityGraph`, `BuilderError::InvalidInput` when the
    /// top-level value is not an array, or `BuilderError::MalformedEvent`
    /// when an element is not an event object.
    pub fn build_authority_graph_from_value(
        &self,
        input: &Value,
    ) -> Result<AuthorityGraph, BuilderError> {
        let Some(items) = input.as_array() else {
            return Err(BuilderError::InvalidInput);
        };

        let mut events = Vec::with_capacity(items.len());
        for item in items {
            let event: AuthorityEvent = serde_json::from_value(item.clone())?;
            events.push(event);
        }

        self.build_authority_graph(&events)
    }

    /// Builds the authority graph for a batch known to hold a single wallet.
    ///
    /// Thin convenience wrapper over `build_authority_graph`: an empty
    /// result fails with `BuilderError::NoEvents`, and a result spanning
    /// more than one wallet fails with `BuilderError::MultipleWallets`.
    pub fn build_single_wallet_graph(
        &self,
        events: &[AuthorityEvent],
    ) -> Result<WalletGraph, BuilderError> {
        let mut graph = self.build_authority_graph(events)?;

        if graph.len() > 1 {
            return Err(BuilderError::MultipleWallets);
        }

        match graph.pop_first() {
            Some((_, wallet_graph)) => Ok(wallet_graph),
            None => Err(BuilderError::NoEvents),
        }
    }
}

/// Validates one event and produces its wallet key and normalized edge.
///
/// Required string fields must be present and non-empty; `block` and
/// `timestamp` must be present, with zero being a valid value. Address-like
/// fields are opaque strings here: structural completeness is checked,
/// blockchain semantics are not.
fn normalize_event(event: &AuthorityEvent) -> Result<(String, AuthorityEdge), BuilderError> {
    let wallet = required_text(&event.wallet, "wallet")?;
    let contract = required_text(&event.contract, "contract")?;
    let authority_type = required_text(&event.authority_type, "authority_type")?;
    let target_entity = required_text(&event.target_entity, "target_entity")?;
    let block = event
        .block
        .ok_or(BuilderError::MissingField { field: "block" })?;
    let timestamp = event
        .timestamp
        .ok_or(BuilderError::MissingField { field: "timestamp" })?;

    let edge = AuthorityEdge {
        authority_type,
        contract,
        target_entity,
        amount: normalize_amount(&event.amount),
        block,
        timestamp,
        tx_hash: event.tx_hash.clone(),
        log_index: event.log_index,
        revocation_possible: RevocationStatus::Unknown,
    };

    Ok((wallet, edge))
}

fn required_text(value: &Option<String>, field: &'static str) -> Result<String, BuilderError> {
    match value {
        Some(text) if !text.is_empty() => Ok(text.clone()),
        _ => Err(BuilderError::MissingField { field }),
    }
}
