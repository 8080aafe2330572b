//! Story ingestion: extraction feeding the relationship graph
//!
//! Runs once per ingestion event (create or re-publish). The graph is a
//! secondary index: a degraded graph store never blocks ingestion of the
//! owning story record.

use crate::catalog::Story;
use crate::extract::{EntityBundle, Extractor};
use crate::graph::{GraphService, StoryAttributes};
use tracing::{debug, warn};

impl From<&Story> for StoryAttributes {
    fn from(story: &Story) -> Self {
        Self {
            title: story.title.clone(),
            county: story.county.clone(),
            category: story.category.clone(),
            content_type: story.content_type.clone(),
        }
    }
}

/// Pipeline tying the extractor to the graph store.
pub struct StoryIngestor<'a> {
    extractor: &'a dyn Extractor,
    graph: &'a GraphService,
}

impl<'a> StoryIngestor<'a> {
    pub fn new(extractor: &'a dyn Extractor, graph: &'a GraphService) -> Self {
        Self { extractor, graph }
    }

    /// Extract entities from the story's text and write its node and edges.
    ///
    /// Re-ingestion replaces the story's outgoing edges wholesale. The
    /// bundle is returned so the catalog owner can persist
    /// entities/topics/sentiment on the story record; when the graph store
    /// is unavailable extraction still happens and the call still succeeds.
    pub fn ingest(&self, story: &Story) -> EntityBundle {
        let bundle = self.extractor.extract(&story.full_text());

        if !self.graph.is_available() {
            warn!(story_id = story.id, "graph store unavailable; story not indexed");
            return bundle;
        }

        self.graph.upsert_story(story.id, StoryAttributes::from(story));
        self.graph
            .link_story_to_entities(story.id, &bundle, story.county.as_deref());
        debug!(story_id = story.id, "story ingested into graph");

        bundle
    }

    /// Remove a story from the graph, e.g. on unpublish or delete.
    pub fn remove(&self, story_id: i64) {
        self.graph.remove_story(story_id);
    }
}
