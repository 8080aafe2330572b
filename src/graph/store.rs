//! GraphService: availability-gated store for the relationship graph
//!
//! The graph is a secondary index over the story catalog, never the system
//! of record. When the backing index is unavailable every write is a no-op
//! and every read returns its empty default; callers observe degradation
//! only through [`GraphService::is_available`].

use super::edge::{Edge, EdgeKind, EdgeRef};
use super::node::{EntityType, Node, NodeKey, StoryAttributes};
use crate::extract::EntityBundle;
use dashmap::DashMap;
use tracing::{debug, warn};

/// Topic edges are created for the first N topics of a bundle, in the
/// bundle's rank order (truncate, never re-sort).
pub const MAX_TOPIC_EDGES: usize = 5;

/// In-memory node/edge index keyed by natural identity.
///
/// Both maps upsert at entry level, so concurrent merges for different
/// stories need no global lock and a duplicate insert is a no-op.
#[derive(Debug, Default)]
pub struct GraphIndex {
    nodes: DashMap<NodeKey, Node>,
    edges: DashMap<EdgeRef, Edge>,
}

impl GraphIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a node by key: refresh label/attributes on an existing node,
    /// insert otherwise. Never duplicates.
    pub fn upsert_node(&self, node: Node) -> NodeKey {
        let key = node.key.clone();
        match self.nodes.entry(key.clone()) {
            dashmap::mapref::entry::Entry::Occupied(mut existing) => {
                let slot = existing.get_mut();
                slot.label = node.label;
                if node.story.is_some() {
                    slot.story = node.story;
                }
            }
            dashmap::mapref::entry::Entry::Vacant(slot) => {
                slot.insert(node);
            }
        }
        key
    }

    /// Insert an edge unless the same (source, kind, target) already exists.
    pub fn add_edge(&self, source: NodeKey, kind: EdgeKind, target: NodeKey) {
        let link = EdgeRef::new(source, kind, target);
        self.edges
            .entry(link.clone())
            .or_insert_with(|| Edge::new(link.source, link.kind, link.target));
    }

    /// Drop all edges whose source is the given story.
    pub fn clear_story_edges(&self, story_id: i64) {
        let key = NodeKey::story(story_id);
        self.edges.retain(|link, _| link.source != key);
    }

    /// Remove a story node and every edge incident to it. Entity, topic,
    /// and county nodes stay even if now orphaned.
    pub fn remove_story(&self, story_id: i64) {
        let key = NodeKey::story(story_id);
        self.nodes.remove(&key);
        self.edges.retain(|link, _| !link.touches(&key));
    }

    pub fn get_node(&self, key: &NodeKey) -> Option<Node> {
        self.nodes.get(key).map(|n| n.clone())
    }

    pub fn contains(&self, key: &NodeKey) -> bool {
        self.nodes.contains_key(key)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Snapshot of all edge identities, for traversal index building.
    pub fn edge_refs(&self) -> Vec<EdgeRef> {
        self.edges.iter().map(|e| e.key().clone()).collect()
    }

    /// Snapshot of all story nodes.
    pub fn story_nodes(&self) -> Vec<Node> {
        self.nodes
            .iter()
            .filter(|n| n.key().is_story())
            .map(|n| n.value().clone())
            .collect()
    }
}

/// Handle to the relationship graph with explicit availability state.
///
/// Mirrors a backing store connection that may be absent at startup: a
/// disconnected service accepts every call and degrades per contract
/// instead of erroring.
#[derive(Debug)]
pub struct GraphService {
    index: Option<GraphIndex>,
}

impl GraphService {
    /// Create an available, empty graph.
    pub fn new() -> Self {
        Self {
            index: Some(GraphIndex::new()),
        }
    }

    /// Create a handle with no backing index; all operations degrade.
    pub fn disconnected() -> Self {
        warn!("graph store unavailable; graph operations will degrade to no-ops");
        Self { index: None }
    }

    pub fn is_available(&self) -> bool {
        self.index.is_some()
    }

    /// The backing index, when available. Read-only queries execute
    /// against this snapshot handle.
    pub fn index(&self) -> Option<&GraphIndex> {
        self.index.as_ref()
    }

    /// Create or refresh the Story node. Idempotent.
    pub fn upsert_story(&self, story_id: i64, attrs: StoryAttributes) {
        let Some(index) = self.index() else { return };
        index.upsert_node(Node::story(story_id, attrs));
        debug!(story_id, "upserted story node");
    }

    /// Merge an entity node by normalized name; returns its key, or `None`
    /// when the store is unavailable.
    pub fn upsert_entity(&self, kind: EntityType, name: &str) -> Option<NodeKey> {
        let index = self.index()?;
        Some(index.upsert_node(Node::entity(kind, name)))
    }

    /// Replace the story's outgoing edges from an extraction bundle.
    ///
    /// Existing edges are cleared first, so re-ingestion converges on
    /// exactly the edge set implied by the bundle: MENTIONS for people and
    /// organizations, LOCATED_IN for locations, ABOUT for the first
    /// [`MAX_TOPIC_EDGES`] topics in rank order, IN_COUNTY when set.
    pub fn link_story_to_entities(
        &self,
        story_id: i64,
        bundle: &EntityBundle,
        county: Option<&str>,
    ) {
        let Some(index) = self.index() else { return };
        let story = NodeKey::story(story_id);

        index.clear_story_edges(story_id);

        for person in &bundle.people {
            let key = index.upsert_node(Node::entity(EntityType::Person, person));
            index.add_edge(story.clone(), EdgeKind::Mentions, key);
        }
        for org in &bundle.organizations {
            let key = index.upsert_node(Node::entity(EntityType::Organization, org));
            index.add_edge(story.clone(), EdgeKind::Mentions, key);
        }
        for location in &bundle.locations {
            let key = index.upsert_node(Node::entity(EntityType::Location, location));
            index.add_edge(story.clone(), EdgeKind::LocatedIn, key);
        }
        for topic in bundle.topics.iter().take(MAX_TOPIC_EDGES) {
            let key = index.upsert_node(Node::entity(EntityType::Topic, topic));
            index.add_edge(story.clone(), EdgeKind::About, key);
        }
        if let Some(county) = county {
            if !county.trim().is_empty() {
                let key = index.upsert_node(Node::entity(EntityType::County, county));
                index.add_edge(story.clone(), EdgeKind::InCounty, key);
            }
        }

        debug!(
            story_id,
            people = bundle.people.len(),
            organizations = bundle.organizations.len(),
            locations = bundle.locations.len(),
            topics = bundle.topics.len().min(MAX_TOPIC_EDGES),
            "linked story to entities"
        );
    }

    /// Delete the Story node and its incident edges; shared entity nodes
    /// remain. Idempotent.
    pub fn remove_story(&self, story_id: i64) {
        let Some(index) = self.index() else { return };
        index.remove_story(story_id);
        debug!(story_id, "removed story from graph");
    }
}
