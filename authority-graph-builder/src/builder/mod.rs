mod amount;
mod graph_builder;
mod sort;

pub use amount::normalize_amount;
pub use graph_builder::GraphBuilder;
