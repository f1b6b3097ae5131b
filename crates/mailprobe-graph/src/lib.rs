pub mod client;
pub mod error;
pub mod types;

pub use client::{GraphSendClient, GRAPH_BASE};
pub use error::{GraphError, GraphResult};
pub use types::*;
