//! Text analysis: entity, topic, and sentiment extraction
//!
//! The graph and recommendation layers depend only on the [`Extractor`]
//! contract; the bundled [`HeuristicExtractor`] is a deterministic stand-in
//! for a third-party NLP backend and may be swapped out wholesale.

mod heuristic;
mod keywords;

pub use heuristic::HeuristicExtractor;
pub use keywords::extract_keywords;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Coarse polarity label, majority vote of polarity-word counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    #[default]
    Neutral,
    Negative,
}

/// Structured output of text analysis.
///
/// Entity collections are deduplicated and deterministically ordered;
/// `topics` keeps its rank order (descending frequency, ties by first
/// appearance) and holds at most [`EntityBundle::MAX_TOPICS`] phrases.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityBundle {
    pub people: BTreeSet<String>,
    pub organizations: BTreeSet<String>,
    pub locations: BTreeSet<String>,
    pub topics: Vec<String>,
    pub sentiment: Sentiment,
}

impl EntityBundle {
    /// Maximum number of ranked topic phrases retained.
    pub const MAX_TOPICS: usize = 10;

    /// The all-empty bundle returned for empty input or an unavailable model.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
            && self.organizations.is_empty()
            && self.locations.is_empty()
            && self.topics.is_empty()
    }
}

/// Contract for turning free text into an [`EntityBundle`].
///
/// Implementations must be total (never fail — degrade to
/// [`EntityBundle::empty`]) and deterministic: identical input yields an
/// identical bundle, including topic order.
pub trait Extractor: Send + Sync {
    fn extract(&self, text: &str) -> EntityBundle;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_bundle_is_neutral() {
        let bundle = EntityBundle::empty();
        assert!(bundle.is_empty());
        assert_eq!(bundle.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn sentiment_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Sentiment::Positive).unwrap(),
            "\"positive\""
        );
    }
}
