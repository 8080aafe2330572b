//! Node representation in the relationship graph

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kinds of entity extracted from story text (plus the county grouping).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Person,
    Organization,
    Location,
    Topic,
    County,
}

impl EntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Person => "person",
            EntityType::Organization => "organization",
            EntityType::Location => "location",
            EntityType::Topic => "topic",
            EntityType::County => "county",
        }
    }
}

/// Natural key for a node: stories by numeric id, everything else by
/// lowercase-normalized name. At most one node exists per key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "type", content = "key", rename_all = "lowercase")]
pub enum NodeKey {
    Story(i64),
    Person(String),
    Organization(String),
    Location(String),
    Topic(String),
    County(String),
}

impl NodeKey {
    pub fn story(id: i64) -> Self {
        NodeKey::Story(id)
    }

    /// Build an entity key, normalizing the name (trim + case-fold) so
    /// surface-form variants merge onto one node.
    pub fn entity(kind: EntityType, name: &str) -> Self {
        let key = normalize(name);
        match kind {
            EntityType::Person => NodeKey::Person(key),
            EntityType::Organization => NodeKey::Organization(key),
            EntityType::Location => NodeKey::Location(key),
            EntityType::Topic => NodeKey::Topic(key),
            EntityType::County => NodeKey::County(key),
        }
    }

    /// The node's type tag as used in visualization payloads.
    pub fn node_type(&self) -> &'static str {
        match self {
            NodeKey::Story(_) => "story",
            NodeKey::Person(_) => "person",
            NodeKey::Organization(_) => "organization",
            NodeKey::Location(_) => "location",
            NodeKey::Topic(_) => "topic",
            NodeKey::County(_) => "county",
        }
    }

    pub fn is_story(&self) -> bool {
        matches!(self, NodeKey::Story(_))
    }

    /// The story id, when this is a Story key.
    pub fn story_id(&self) -> Option<i64> {
        match self {
            NodeKey::Story(id) => Some(*id),
            _ => None,
        }
    }
}

impl std::fmt::Display for NodeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeKey::Story(id) => write!(f, "story_{}", id),
            other => write!(
                f,
                "{}:{}",
                other.node_type(),
                match other {
                    NodeKey::Person(k)
                    | NodeKey::Organization(k)
                    | NodeKey::Location(k)
                    | NodeKey::Topic(k)
                    | NodeKey::County(k) => k,
                    NodeKey::Story(_) => unreachable!(),
                }
            ),
        }
    }
}

/// Normalize an entity name for keying: trim, case-fold.
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Story attributes mirrored onto the Story node for visualization.
///
/// The catalog remains the system of record; these are a denormalized copy
/// refreshed on every ingestion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoryAttributes {
    pub title: String,
    pub county: Option<String>,
    pub category: Option<String>,
    pub content_type: String,
}

/// A node in the relationship graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Natural key (also determines the node type)
    pub key: NodeKey,
    /// Display form: story title, or the entity's original surface form
    pub label: String,
    /// Present only on Story nodes
    pub story: Option<StoryAttributes>,
    /// When the node was first merged
    pub created_at: DateTime<Utc>,
}

impl Node {
    /// Create a Story node carrying its visualization attributes.
    pub fn story(id: i64, attrs: StoryAttributes) -> Self {
        Self {
            key: NodeKey::story(id),
            label: attrs.title.clone(),
            story: Some(attrs),
            created_at: Utc::now(),
        }
    }

    /// Create an entity node, keeping the un-normalized surface form as label.
    pub fn entity(kind: EntityType, name: &str) -> Self {
        Self {
            key: NodeKey::entity(kind, name),
            label: name.trim().to_string(),
            story: None,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_keys_are_normalized() {
        let a = NodeKey::entity(EntityType::Person, "  Jane Wanjiku ");
        let b = NodeKey::entity(EntityType::Person, "jane wanjiku");
        assert_eq!(a, b);
    }

    #[test]
    fn same_name_different_type_is_distinct() {
        let loc = NodeKey::entity(EntityType::Location, "Nairobi");
        let topic = NodeKey::entity(EntityType::Topic, "nairobi");
        assert_ne!(loc, topic);
    }

    #[test]
    fn display_forms() {
        assert_eq!(NodeKey::story(7).to_string(), "story_7");
        assert_eq!(
            NodeKey::entity(EntityType::County, "Kisumu").to_string(),
            "county:kisumu"
        );
    }

    #[test]
    fn entity_node_keeps_surface_form_as_label() {
        let node = Node::entity(EntityType::Organization, " Ministry of Health ");
        assert_eq!(node.label, "Ministry of Health");
        assert_eq!(
            node.key,
            NodeKey::entity(EntityType::Organization, "ministry of health")
        );
    }
}
