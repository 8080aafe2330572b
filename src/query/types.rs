//! Result types for graph queries

use serde::{Deserialize, Serialize};

/// A story related to the query origin, scored by the count of distinct
/// graph neighbors the two stories share.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedStory {
    pub id: i64,
    pub title: String,
    pub commonality: usize,
}

/// A story node shaped for the visualization payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VizNode {
    /// Prefixed id, e.g. `story_42`
    pub id: String,
    /// Story title
    pub label: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub county: Option<String>,
    pub category: Option<String>,
    pub content_type: String,
}

/// An undirected story-pair edge in the visualization, canonical order
/// (`source` id < `target` id), weighted by distinct common neighbors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VizEdge {
    pub source: String,
    pub target: String,
    pub weight: usize,
}

/// Bounded snapshot of the graph for visualization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphData {
    pub nodes: Vec<VizNode>,
    pub edges: Vec<VizEdge>,
}

/// A title-search match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryHit {
    pub id: i64,
    pub title: String,
}
