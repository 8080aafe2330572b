//! Two-hop co-occurrence relatedness between stories

use super::types::RelatedStory;
use crate::graph::{EdgeRef, GraphIndex, NodeKey};
use std::collections::{HashMap, HashSet};

/// Undirected adjacency index built from an edge snapshot.
pub(crate) fn undirected_adjacency(edges: &[EdgeRef]) -> HashMap<NodeKey, HashSet<NodeKey>> {
    let mut adjacency: HashMap<NodeKey, HashSet<NodeKey>> = HashMap::new();
    for edge in edges {
        adjacency
            .entry(edge.source.clone())
            .or_default()
            .insert(edge.target.clone());
        adjacency
            .entry(edge.target.clone())
            .or_default()
            .insert(edge.source.clone());
    }
    adjacency
}

/// Query for stories related to an origin story.
///
/// Walks two hops: the origin's direct neighbors (entities, topics, county)
/// and every other story touching any of them. A candidate's commonality is
/// the number of *distinct* shared neighbors; edge multiplicity does not
/// inflate the score. Results sort by commonality descending, ties by
/// ascending story id.
#[derive(Debug, Clone)]
pub struct RelatedQuery {
    origin: i64,
    limit: usize,
}

impl RelatedQuery {
    pub fn new(origin: i64) -> Self {
        Self { origin, limit: 10 }
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Execute against the index. An origin with no neighbors (or absent
    /// from the graph) yields an empty list, never an error.
    pub fn execute(&self, index: &GraphIndex) -> Vec<RelatedStory> {
        let origin_key = NodeKey::story(self.origin);
        let edges = index.edge_refs();
        let adjacency = undirected_adjacency(&edges);

        let Some(commons) = adjacency.get(&origin_key) else {
            return Vec::new();
        };

        let mut commonality: HashMap<i64, usize> = HashMap::new();
        for common in commons {
            let Some(neighbors) = adjacency.get(common) else {
                continue;
            };
            for neighbor in neighbors {
                if let Some(id) = neighbor.story_id() {
                    if id != self.origin {
                        *commonality.entry(id).or_insert(0) += 1;
                    }
                }
            }
        }

        let mut related: Vec<RelatedStory> = commonality
            .into_iter()
            .map(|(id, commonality)| RelatedStory {
                id,
                title: index
                    .get_node(&NodeKey::story(id))
                    .map(|n| n.label)
                    .unwrap_or_default(),
                commonality,
            })
            .collect();

        related.sort_by(|a, b| b.commonality.cmp(&a.commonality).then(a.id.cmp(&b.id)));
        related.truncate(self.limit);
        related
    }
}
