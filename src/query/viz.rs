//! Bounded graph snapshot for visualization

use super::types::{GraphData, VizEdge, VizNode};
use crate::graph::{GraphIndex, Node, NodeKey};
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Query for a bounded visualization snapshot: up to `limit` story nodes
/// and up to `limit` story-pair edges weighted by distinct common
/// neighbors.
///
/// The snapshot is approximate under concurrent ingestion; no isolation is
/// promised. Node selection and edge ordering are deterministic: nodes by
/// ascending story id, edges by weight descending then canonical pair.
#[derive(Debug, Clone)]
pub struct VizQuery {
    limit: usize,
}

impl VizQuery {
    pub fn new() -> Self {
        Self { limit: 100 }
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn execute(&self, index: &GraphIndex) -> GraphData {
        let mut stories = index.story_nodes();
        stories.sort_by_key(|n| n.key.story_id());
        stories.truncate(self.limit);

        let included: HashSet<i64> =
            stories.iter().filter_map(|n| n.key.story_id()).collect();
        let nodes: Vec<VizNode> = stories.iter().map(viz_node).collect();

        // Group story ids by shared entity/topic/county neighbor, then count
        // each neighbor once per canonical story pair.
        let mut entity_stories: BTreeMap<NodeKey, BTreeSet<i64>> = BTreeMap::new();
        for edge in index.edge_refs() {
            let (story, entity) = if edge.source.is_story() {
                (&edge.source, &edge.target)
            } else {
                (&edge.target, &edge.source)
            };
            let Some(id) = story.story_id() else { continue };
            if included.contains(&id) {
                entity_stories.entry(entity.clone()).or_default().insert(id);
            }
        }

        let mut pair_weights: BTreeMap<(i64, i64), usize> = BTreeMap::new();
        for ids in entity_stories.values() {
            let ids: Vec<i64> = ids.iter().copied().collect();
            for i in 0..ids.len() {
                for j in (i + 1)..ids.len() {
                    *pair_weights.entry((ids[i], ids[j])).or_insert(0) += 1;
                }
            }
        }

        let mut pairs: Vec<((i64, i64), usize)> = pair_weights.into_iter().collect();
        pairs.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        pairs.truncate(self.limit);

        let edges = pairs
            .into_iter()
            .map(|((s1, s2), weight)| VizEdge {
                source: format!("story_{}", s1),
                target: format!("story_{}", s2),
                weight,
            })
            .collect();

        GraphData { nodes, edges }
    }
}

impl Default for VizQuery {
    fn default() -> Self {
        Self::new()
    }
}

fn viz_node(node: &Node) -> VizNode {
    let attrs = node.story.clone().unwrap_or_default();
    VizNode {
        id: node.key.to_string(),
        label: node.label.clone(),
        node_type: node.key.node_type().to_string(),
        county: attrs.county,
        category: attrs.category,
        content_type: attrs.content_type,
    }
}
