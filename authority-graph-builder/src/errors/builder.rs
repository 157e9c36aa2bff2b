//! Error types for the graph builder.
//! Defines specific errors that can occur while turning authority events
//! into per-wallet graphs.
use thiserror::Error;

/// Represents errors that can occur within the graph builder.
///
/// Every variant surfaces synchronously to the caller and is never retried
/// internally: the transformation is pure, so a given bad input always fails
/// the same way and only the caller can fix it.
#[derive(Debug, Error)]
pub enum BuilderError {
    #[error("input must be an array of authority events")]
    InvalidInput,

    #[error("malformed authority event: {0}")]
    MalformedEvent(#[from] serde_json::Error),

    #[error("event missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("no events provided")]
    NoEvents,

    #[error("multiple wallets detected, use build_authority_graph for batch processing")]
    MultipleWallets,
}
