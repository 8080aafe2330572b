//! Relationship graph: typed nodes, edges, and the availability-gated store

mod edge;
mod node;
mod store;

pub use edge::{Edge, EdgeKind, EdgeRef};
pub use node::{normalize, EntityType, Node, NodeKey, StoryAttributes};
pub use store::{GraphIndex, GraphService, MAX_TOPIC_EDGES};
