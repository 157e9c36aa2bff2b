mod authority_edge;
mod authority_event;
mod wallet_graph;

pub use authority_edge::{AuthorityEdge, RevocationStatus};
pub use authority_event::{AmountValue, AuthorityEvent};
pub use wallet_graph::{AuthorityGraph, WalletGraph};
