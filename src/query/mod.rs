//! Read-only queries over the relationship graph
//!
//! Each query is a builder struct executed against a [`crate::graph::GraphIndex`]
//! snapshot; none of them mutate the graph.

mod related;
mod search;
mod types;
mod viz;

pub use related::RelatedQuery;
pub use search::TitleSearchQuery;
pub use types::{GraphData, RelatedStory, StoryHit, VizEdge, VizNode};
pub use viz::VizQuery;

use crate::graph::GraphService;

/// Read operations on the service handle. Each degrades to its empty
/// default when the store is unavailable.
impl GraphService {
    /// Stories related to `story_id` by distinct shared neighbors.
    pub fn related_stories(&self, story_id: i64, limit: usize) -> Vec<RelatedStory> {
        match self.index() {
            Some(index) => RelatedQuery::new(story_id).limit(limit).execute(index),
            None => Vec::new(),
        }
    }

    /// Bounded visualization snapshot.
    pub fn graph_data(&self, limit: usize) -> GraphData {
        match self.index() {
            Some(index) => VizQuery::new().limit(limit).execute(index),
            None => GraphData::default(),
        }
    }

    /// Case-insensitive title search, capped at 20 hits.
    pub fn search_by_title(&self, query: &str) -> Vec<StoryHit> {
        match self.index() {
            Some(index) => TitleSearchQuery::new(query).execute(index),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod service_tests {
    use super::*;
    use crate::graph::StoryAttributes;

    #[test]
    fn unavailable_store_returns_empty_reads() {
        let graph = GraphService::disconnected();
        assert!(graph.related_stories(1, 10).is_empty());
        assert_eq!(graph.graph_data(100), GraphData::default());
        assert!(graph.search_by_title("water").is_empty());
    }

    #[test]
    fn available_store_serves_reads() {
        let graph = GraphService::new();
        graph.upsert_story(
            1,
            StoryAttributes {
                title: "Water in Kitui".to_string(),
                ..Default::default()
            },
        );

        assert_eq!(graph.search_by_title("water").len(), 1);
        assert_eq!(graph.graph_data(10).nodes.len(), 1);
    }
}
