//! Caller-boundary operations for the HTTP layer
//!
//! Shapes query results for JSON endpoints and enforces the error taxonomy
//! the transport layer relies on: a missing story id is a distinct
//! not-found condition, an empty query is rejected before reaching the
//! engine, and an unavailable graph store is never an error at all.

use crate::catalog::StoryCatalog;
use crate::extract::{EntityBundle, Extractor};
use crate::graph::GraphService;
use crate::query::{GraphData, RelatedStory, StoryHit};
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced to callers of the boundary operations.
#[derive(Debug, Error)]
pub enum MeshError {
    #[error("no such story: {0}")]
    StoryNotFound(i64),

    #[error("query must not be empty")]
    EmptyQuery,
}

/// Result type for boundary operations
pub type MeshResult<T> = Result<T, MeshError>;

/// Response for `POST /graph/explore`: extraction over the query text plus
/// a title search.
#[derive(Debug, Clone, Serialize)]
pub struct ExploreResponse {
    pub query: String,
    pub entities: EntityBundle,
    pub stories: Vec<StoryHit>,
}

/// `GET /graph/data?limit=N`
pub fn graph_data(graph: &GraphService, limit: usize) -> GraphData {
    graph.graph_data(limit)
}

/// `GET /graph/related/{story_id}?limit=N`
///
/// The story must exist in the catalog; an id absent from the graph but
/// present in the catalog yields an empty list, not an error.
pub fn related(
    catalog: &dyn StoryCatalog,
    graph: &GraphService,
    story_id: i64,
    limit: usize,
) -> MeshResult<Vec<RelatedStory>> {
    if catalog.story_by_id(story_id).is_none() {
        return Err(MeshError::StoryNotFound(story_id));
    }
    Ok(graph.related_stories(story_id, limit))
}

/// `GET /graph/search?q=...`
pub fn search(graph: &GraphService, query: &str) -> MeshResult<Vec<StoryHit>> {
    if query.trim().is_empty() {
        return Err(MeshError::EmptyQuery);
    }
    Ok(graph.search_by_title(query))
}

/// `POST /graph/explore {query}`
pub fn explore(
    extractor: &dyn Extractor,
    graph: &GraphService,
    query: &str,
) -> MeshResult<ExploreResponse> {
    if query.trim().is_empty() {
        return Err(MeshError::EmptyQuery);
    }
    Ok(ExploreResponse {
        query: query.to_string(),
        entities: extractor.extract(query),
        stories: graph.search_by_title(query),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{InMemoryCatalog, Story};
    use crate::extract::HeuristicExtractor;
    use crate::graph::StoryAttributes;

    fn setup() -> (InMemoryCatalog, GraphService) {
        let catalog = InMemoryCatalog::new();
        catalog.add_story(Story::new(1, "County Budget Report").published());
        let graph = GraphService::new();
        graph.upsert_story(
            1,
            StoryAttributes {
                title: "County Budget Report".to_string(),
                ..Default::default()
            },
        );
        (catalog, graph)
    }

    #[test]
    fn related_distinguishes_missing_story_from_empty_result() {
        let (catalog, graph) = setup();

        // Known story with no neighbors: empty, not an error
        let related_known = related(&catalog, &graph, 1, 10).unwrap();
        assert!(related_known.is_empty());

        // Unknown story: distinct not-found
        let err = related(&catalog, &graph, 404, 10).unwrap_err();
        assert!(matches!(err, MeshError::StoryNotFound(404)));
    }

    #[test]
    fn empty_queries_are_rejected_before_the_engine() {
        let (_, graph) = setup();
        let extractor = HeuristicExtractor::new();

        assert!(matches!(search(&graph, "  "), Err(MeshError::EmptyQuery)));
        assert!(matches!(
            explore(&extractor, &graph, ""),
            Err(MeshError::EmptyQuery)
        ));
    }

    #[test]
    fn explore_combines_extraction_and_search() {
        let (_, graph) = setup();
        let extractor = HeuristicExtractor::new();

        let response = explore(&extractor, &graph, "budget hearings in Nairobi").unwrap();
        assert_eq!(response.query, "budget hearings in Nairobi");
        assert!(response.entities.locations.contains("Nairobi"));
        // The full phrase matches no title; search is substring over titles
        assert!(response.stories.is_empty());

        let response = explore(&extractor, &graph, "Budget Report").unwrap();
        assert_eq!(response.stories.len(), 1);
        assert_eq!(response.stories[0].id, 1);
    }

    #[test]
    fn graph_data_payload_shape() {
        let (_, graph) = setup();
        let data = graph_data(&graph, 10);
        let json = serde_json::to_value(&data).unwrap();

        let node = &json["nodes"][0];
        assert_eq!(node["id"], "story_1");
        assert_eq!(node["label"], "County Budget Report");
        assert_eq!(node["type"], "story");
        assert!(json["edges"].as_array().unwrap().is_empty());
    }
}
