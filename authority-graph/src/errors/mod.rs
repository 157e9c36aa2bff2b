//! Error types for the Authority Graph application.
//! Consolidates configuration, I/O, and builder errors behind one enum so
//! the binary can surface any failure path uniformly.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("missing configuration: {0} not set")]
    Config(&'static str),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("builder error: {0}")]
    Builder(#[from] authority_graph_builder::BuilderError),
    #[error("invalid authority graph file: {0}")]
    InvalidGraph(String),
}
