//! Keyword extraction for query matching
//!
//! Lowercased content words ranked by frequency. Shared between topic
//! ranking in the heuristic extractor and the query-based recommender.

use std::collections::HashMap;

/// Function words excluded from keywords and topics.
///
/// Stands in for the stop-word list of an external NLP model; only content
/// words (nouns, proper nouns, adjectives in a tagger's terms) should
/// survive.
pub(crate) const STOP_WORDS: &[&str] = &[
    "about", "above", "after", "again", "against", "because", "been", "before",
    "being", "below", "between", "both", "cannot", "could", "does", "doing",
    "down", "during", "each", "even", "every", "from", "further", "have",
    "having", "here", "himself", "herself", "into", "itself", "just", "more",
    "most", "much", "must", "once", "only", "other", "over", "same", "shall",
    "should", "since", "some", "such", "than", "that", "their", "theirs",
    "them", "themselves", "then", "there", "these", "they", "this", "those",
    "through", "under", "until", "upon", "very", "were", "what", "when",
    "where", "which", "while", "will", "with", "within", "without", "would",
    "your", "yours",
];

/// Minimum token length; shorter tokens carry too little signal to match on.
const MIN_TOKEN_LEN: usize = 4;

pub(crate) fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}

/// Lowercase alphabetic tokens of the text, in order of appearance.
pub(crate) fn content_tokens(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.len() >= MIN_TOKEN_LEN && t.chars().all(|c| c.is_alphabetic()))
        .map(|t| t.to_lowercase())
        .filter(|t| !is_stop_word(t))
        .collect()
}

/// Rank tokens by descending count, ties broken by first appearance.
///
/// The first-seen tie-break is what makes extraction reproducible; callers
/// rely on identical text producing identical ordering.
pub(crate) fn rank_by_frequency(tokens: &[String], top_n: usize) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();

    for token in tokens {
        let count = counts.entry(token).or_insert(0);
        if *count == 0 {
            first_seen.push(token);
        }
        *count += 1;
    }

    let mut ranked: Vec<(&str, usize, usize)> = first_seen
        .iter()
        .enumerate()
        .map(|(order, &t)| (t, counts[t], order))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    ranked
        .into_iter()
        .take(top_n)
        .map(|(t, _, _)| t.to_string())
        .collect()
}

/// Extract up to `top_n` keywords from free text.
///
/// Keywords are lowercase content words (length > 3, stop-words excluded)
/// ranked by frequency. Used by the query-based recommendation strategy.
pub fn extract_keywords(text: &str, top_n: usize) -> Vec<String> {
    let tokens = content_tokens(text);
    rank_by_frequency(&tokens, top_n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_tokens_and_stop_words_are_dropped() {
        let kw = extract_keywords("the county budget and the county", 10);
        assert_eq!(kw, vec!["county", "budget"]);
    }

    #[test]
    fn frequency_ranks_above_first_seen() {
        let kw = extract_keywords("water roads water schools water roads", 10);
        assert_eq!(kw, vec!["water", "roads", "schools"]);
    }

    #[test]
    fn ties_break_by_first_appearance() {
        let kw = extract_keywords("maize fishing maize fishing", 10);
        assert_eq!(kw, vec!["maize", "fishing"]);
    }

    #[test]
    fn top_n_truncates_after_ranking() {
        let kw = extract_keywords("alpha alpha beta beta gamma", 2);
        assert_eq!(kw.len(), 2);
        assert!(!kw.contains(&"gamma".to_string()));
    }

    #[test]
    fn empty_text_yields_no_keywords() {
        assert!(extract_keywords("", 10).is_empty());
        assert!(extract_keywords("a an of to", 10).is_empty());
    }
}
