//! Title search over story nodes

use super::types::StoryHit;
use crate::graph::GraphIndex;

/// Maximum number of search hits returned.
const MAX_RESULTS: usize = 20;

/// Case-insensitive substring search over story titles.
///
/// Rejecting an empty query is the caller layer's job; executed with one,
/// this matches every story (up to the result cap).
#[derive(Debug, Clone)]
pub struct TitleSearchQuery {
    query: String,
}

impl TitleSearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }

    pub fn execute(&self, index: &GraphIndex) -> Vec<StoryHit> {
        let needle = self.query.to_lowercase();

        let mut hits: Vec<StoryHit> = index
            .story_nodes()
            .into_iter()
            .filter(|n| n.label.to_lowercase().contains(&needle))
            .filter_map(|n| {
                n.key.story_id().map(|id| StoryHit {
                    id,
                    title: n.label,
                })
            })
            .collect();

        hits.sort_by_key(|h| h.id);
        hits.truncate(MAX_RESULTS);
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{GraphService, StoryAttributes};

    fn setup(titles: &[(i64, &str)]) -> GraphService {
        let graph = GraphService::new();
        for (id, title) in titles {
            graph.upsert_story(
                *id,
                StoryAttributes {
                    title: title.to_string(),
                    ..Default::default()
                },
            );
        }
        graph
    }

    #[test]
    fn match_is_case_insensitive_substring() {
        let graph = setup(&[
            (1, "County Budget Report"),
            (2, "Fishing on Lake Victoria"),
            (3, "budget hearings begin"),
        ]);

        let hits = TitleSearchQuery::new("BUDGET").execute(graph.index().unwrap());
        let ids: Vec<i64> = hits.iter().map(|h| h.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn no_match_yields_empty() {
        let graph = setup(&[(1, "County Budget Report")]);
        let hits = TitleSearchQuery::new("football").execute(graph.index().unwrap());
        assert!(hits.is_empty());
    }

    #[test]
    fn results_cap_at_twenty() {
        let graph = GraphService::new();
        for id in 0..30 {
            graph.upsert_story(
                id,
                StoryAttributes {
                    title: format!("Story number {}", id),
                    ..Default::default()
                },
            );
        }

        let hits = TitleSearchQuery::new("story").execute(graph.index().unwrap());
        assert_eq!(hits.len(), 20);
        // Lowest ids win under the deterministic ordering
        assert_eq!(hits[0].id, 0);
        assert_eq!(hits[19].id, 19);
    }
}
