//! Multi-strategy recommendation scorer
//!
//! Ranks published stories under three strategies with a strict fallback
//! chain: query keywords beat user history beats raw popularity. Reads the
//! catalog and contribution log only; never mutates story state.

use crate::catalog::{ContributionLog, Story, StoryCatalog};
use crate::extract::extract_keywords;
use std::collections::HashSet;
use tracing::debug;

/// Number of keywords taken from a query.
const QUERY_KEYWORDS: usize = 10;

/// Score contribution of an exact tag match (substring hits count 1 each).
const TAG_MATCH_WEIGHT: usize = 2;

/// Recommendation scorer over the catalog and contribution collaborators.
pub struct Recommender<'a> {
    catalog: &'a dyn StoryCatalog,
    contributions: &'a dyn ContributionLog,
}

impl<'a> Recommender<'a> {
    pub fn new(catalog: &'a dyn StoryCatalog, contributions: &'a dyn ContributionLog) -> Self {
        Self {
            catalog,
            contributions,
        }
    }

    /// Recommend up to `limit` published stories.
    ///
    /// Strategy selection is strict priority: a query always wins, then a
    /// user id, then the popularity fallback. A user with no recorded view
    /// contributions also falls back to popularity.
    pub fn recommend(
        &self,
        user_id: Option<i64>,
        query: Option<&str>,
        limit: usize,
    ) -> Vec<Story> {
        if let Some(query) = query {
            self.query_based(query, limit)
        } else if let Some(user_id) = user_id {
            self.user_based(user_id, limit)
        } else {
            self.popular(limit)
        }
    }

    /// Keyword relevance: +1 per keyword found as a substring of
    /// title + description, +2 per exact tag match, both case-insensitive.
    /// Zero-scoring stories are dropped.
    fn query_based(&self, query: &str, limit: usize) -> Vec<Story> {
        let keywords = extract_keywords(query, QUERY_KEYWORDS);
        debug!(?keywords, "query-based recommendation");

        let mut scored: Vec<(Story, usize)> = Vec::new();
        for story in self.catalog.published_stories() {
            let text = format!("{} {}", story.title, story.description).to_lowercase();
            let tags: Vec<String> = story.tags.iter().map(|t| t.to_lowercase()).collect();

            let mut score = 0;
            for keyword in &keywords {
                if text.contains(keyword.as_str()) {
                    score += 1;
                }
                if tags.iter().any(|t| t == keyword) {
                    score += TAG_MATCH_WEIGHT;
                }
            }

            if score > 0 {
                scored.push((story, score));
            }
        }

        scored.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.id.cmp(&b.0.id)));
        scored.into_iter().take(limit).map(|(s, _)| s).collect()
    }

    /// Categorical affinity from viewing history: unviewed published
    /// stories sharing a category or county with anything the user has
    /// viewed, ranked by views.
    fn user_based(&self, user_id: i64, limit: usize) -> Vec<Story> {
        let viewed = self.contributions.viewed_story_ids(user_id);
        if viewed.is_empty() {
            debug!(user_id, "no view history; falling back to popularity");
            return self.popular(limit);
        }

        let mut categories: HashSet<String> = HashSet::new();
        let mut counties: HashSet<String> = HashSet::new();
        for id in &viewed {
            if let Some(story) = self.catalog.story_by_id(*id) {
                if let Some(category) = story.category {
                    categories.insert(category);
                }
                if let Some(county) = story.county {
                    counties.insert(county);
                }
            }
        }

        let mut pool: Vec<Story> = self
            .catalog
            .published_stories()
            .into_iter()
            .filter(|s| !viewed.contains(&s.id))
            .filter(|s| {
                s.category.as_ref().is_some_and(|c| categories.contains(c))
                    || s.county.as_ref().is_some_and(|c| counties.contains(c))
            })
            .collect();

        pool.sort_by(|a, b| b.views.cmp(&a.views).then(a.id.cmp(&b.id)));
        pool.truncate(limit);
        pool
    }

    /// Popularity fallback: published stories by descending view count.
    fn popular(&self, limit: usize) -> Vec<Story> {
        let mut stories = self.catalog.published_stories();
        stories.sort_by(|a, b| b.views.cmp(&a.views).then(a.id.cmp(&b.id)));
        stories.truncate(limit);
        stories
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InMemoryCatalog;

    fn sample_catalog() -> InMemoryCatalog {
        let catalog = InMemoryCatalog::new();
        catalog.add_story(
            Story::new(1, "County Budget Report")
                .with_description("How the county allocates public funds")
                .with_category("governance")
                .with_county("Nairobi")
                .with_tags(vec!["budget", "transparency"])
                .with_views(50)
                .published(),
        );
        catalog.add_story(
            Story::new(2, "Fishing on Lake Victoria")
                .with_description("Fisherfolk adapt to changing waters")
                .with_category("livelihoods")
                .with_county("Kisumu")
                .with_tags(vec!["fishing"])
                .with_views(200)
                .published(),
        );
        catalog.add_story(
            Story::new(3, "Clinic Reopens in Kitui")
                .with_description("Health services return to the ward")
                .with_category("health")
                .with_county("Kitui")
                .with_tags(vec!["health"])
                .with_views(120)
                .published(),
        );
        catalog.add_story(
            Story::new(4, "Unpublished Draft")
                .with_description("budget transparency draft")
                .with_tags(vec!["budget"])
                .with_views(999),
        );
        catalog
    }

    #[test]
    fn query_strategy_scores_substrings_and_tags() {
        let catalog = sample_catalog();
        let recommender = Recommender::new(&catalog, &catalog);

        let results = recommender.recommend(None, Some("county budget transparency"), 5);
        assert_eq!(results[0].id, 1);
        // "county" and "budget" hit the text, "budget" and "transparency"
        // hit tags: 2 + 2*2 = 6, comfortably above the scenario floor of 4
    }

    #[test]
    fn query_strategy_drops_zero_scores_and_drafts() {
        let catalog = sample_catalog();
        let recommender = Recommender::new(&catalog, &catalog);

        let results = recommender.recommend(None, Some("budget transparency"), 5);
        let ids: Vec<i64> = results.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn query_beats_user_history() {
        let catalog = sample_catalog();
        catalog.record_view(7, 2);
        let recommender = Recommender::new(&catalog, &catalog);

        let results = recommender.recommend(Some(7), Some("budget"), 5);
        // Query strategy ran: story 1 despite user 7's fishing history
        assert_eq!(results[0].id, 1);
    }

    #[test]
    fn user_history_filters_by_category_or_county_and_ranks_by_views() {
        let catalog = sample_catalog();
        catalog.add_story(
            Story::new(5, "Kisumu Market Day")
                .with_category("culture")
                .with_county("Kisumu")
                .with_views(80)
                .published(),
        );
        catalog.record_view(7, 2); // livelihoods / Kisumu
        let recommender = Recommender::new(&catalog, &catalog);

        let results = recommender.recommend(Some(7), None, 5);
        let ids: Vec<i64> = results.iter().map(|s| s.id).collect();
        // Story 2 is excluded as already viewed; story 5 shares the county
        assert_eq!(ids, vec![5]);
    }

    #[test]
    fn user_without_history_gets_popularity_list() {
        let catalog = sample_catalog();
        let recommender = Recommender::new(&catalog, &catalog);

        let with_user = recommender.recommend(Some(42), None, 5);
        let popular = recommender.recommend(None, None, 5);
        let ids: Vec<i64> = with_user.iter().map(|s| s.id).collect();
        assert_eq!(
            ids,
            popular.iter().map(|s| s.id).collect::<Vec<i64>>()
        );
    }

    #[test]
    fn popularity_ranks_by_views_descending() {
        let catalog = sample_catalog();
        let recommender = Recommender::new(&catalog, &catalog);

        let ids: Vec<i64> = recommender
            .recommend(None, None, 5)
            .iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn popularity_ties_break_by_ascending_id() {
        let catalog = InMemoryCatalog::new();
        catalog.add_story(Story::new(4, "B").with_views(10).published());
        catalog.add_story(Story::new(2, "A").with_views(10).published());
        let recommender = Recommender::new(&catalog, &catalog);

        let ids: Vec<i64> = recommender
            .recommend(None, None, 5)
            .iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn limit_truncates_every_strategy() {
        let catalog = sample_catalog();
        let recommender = Recommender::new(&catalog, &catalog);

        assert_eq!(recommender.recommend(None, None, 2).len(), 2);
        assert_eq!(
            recommender
                .recommend(None, Some("county health fishing budget"), 1)
                .len(),
            1
        );
    }
}
