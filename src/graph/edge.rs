//! Typed edges between stories and the entities they mention

use super::node::NodeKey;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The closed set of relationship types in the graph.
///
/// Edges are stored in their creation direction (always Story → entity) but
/// traversal treats them as undirected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EdgeKind {
    /// Story → Person | Organization
    Mentions,
    /// Story → Location
    LocatedIn,
    /// Story → Topic
    About,
    /// Story → County
    InCounty,
}

impl EdgeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeKind::Mentions => "MENTIONS",
            EdgeKind::LocatedIn => "LOCATED_IN",
            EdgeKind::About => "ABOUT",
            EdgeKind::InCounty => "IN_COUNTY",
        }
    }
}

impl std::fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of an edge: the ordered (source, kind, target) triple.
///
/// Duplicate inserts of the same triple are no-ops, which is what makes
/// re-linking a story idempotent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeRef {
    pub source: NodeKey,
    pub kind: EdgeKind,
    pub target: NodeKey,
}

impl EdgeRef {
    pub fn new(source: NodeKey, kind: EdgeKind, target: NodeKey) -> Self {
        Self { source, kind, target }
    }

    /// Whether the edge touches the given node on either end.
    pub fn touches(&self, key: &NodeKey) -> bool {
        &self.source == key || &self.target == key
    }

    /// The endpoint opposite to `key`, if the edge touches it.
    pub fn other_end<'a>(&'a self, key: &NodeKey) -> Option<&'a NodeKey> {
        if &self.source == key {
            Some(&self.target)
        } else if &self.target == key {
            Some(&self.source)
        } else {
            None
        }
    }
}

/// A stored edge: its identity plus merge metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    #[serde(flatten)]
    pub link: EdgeRef,
    pub created_at: DateTime<Utc>,
}

impl Edge {
    pub fn new(source: NodeKey, kind: EdgeKind, target: NodeKey) -> Self {
        Self {
            link: EdgeRef::new(source, kind, target),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::node::EntityType;

    #[test]
    fn other_end_is_symmetric() {
        let story = NodeKey::story(1);
        let topic = NodeKey::entity(EntityType::Topic, "health");
        let edge = EdgeRef::new(story.clone(), EdgeKind::About, topic.clone());

        assert_eq!(edge.other_end(&story), Some(&topic));
        assert_eq!(edge.other_end(&topic), Some(&story));
        assert_eq!(edge.other_end(&NodeKey::story(2)), None);
    }

    #[test]
    fn kind_display_matches_wire_names() {
        assert_eq!(EdgeKind::Mentions.to_string(), "MENTIONS");
        assert_eq!(EdgeKind::InCounty.to_string(), "IN_COUNTY");
    }
}
