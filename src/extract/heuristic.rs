//! Heuristic extractor — capitalized-span entity detection
//!
//! Deterministic stand-in for an external NLP model. Proper-noun spans are
//! runs of capitalized tokens (with `of`/`for`/`and` connectors), classified
//! into organizations (keyword suffix), locations (preceding preposition
//! cue), or people (everything else). Topics are frequency-ranked content
//! words; sentiment is a polarity-lexicon majority vote.

use super::keywords::{content_tokens, rank_by_frequency};
use super::{EntityBundle, Extractor, Sentiment};

/// Sentence-case words that start capitalized without being proper nouns.
/// Compared lowercased.
const COMMON_WORDS: &[&str] = &[
    "the", "this", "that", "these", "those", "when", "where", "what", "which",
    "while", "with", "from", "into", "upon", "about", "after", "before",
    "during", "between", "through", "against", "without", "within", "here",
    "there", "then", "thus", "also", "even", "just", "only", "some", "many",
    "much", "most", "other", "such", "each", "every", "both", "all", "any",
    "but", "and", "for", "nor", "not", "yet", "his", "her", "its", "our",
    "your", "their", "who", "how", "why", "can", "may", "will", "shall",
    "should", "would", "could", "must", "has", "have", "had", "was", "were",
    "been", "being", "are", "now", "new", "old", "good", "great", "long",
    "first", "last", "next", "like", "over",
];

/// A span containing any of these (lowercased) is an organization.
const ORG_KEYWORDS: &[&str] = &[
    "agency", "assembly", "association", "authority", "bank", "board",
    "church", "commission", "committee", "company", "cooperative",
    "corporation", "council", "foundation", "government", "group", "hospital",
    "initiative", "institute", "limited", "ltd", "ministry", "network",
    "organization", "party", "programme", "sacco", "school", "society",
    "union", "university",
];

/// A span preceded by one of these reads as a place reference.
const LOCATION_CUES: &[&str] = &[
    "in", "at", "near", "from", "across", "around", "outside", "within", "to",
];

/// Polarity lexicons for the majority-vote sentiment label.
const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "success", "achievement", "innovation",
    "improvement", "effective", "positive", "beneficial",
];
const NEGATIVE_WORDS: &[&str] = &[
    "bad", "poor", "failure", "problem", "challenge", "difficulty", "issue",
    "negative", "harmful",
];

/// Lowercase connectors allowed inside a proper-noun span
/// ("Ministry of Health").
const SPAN_CONNECTORS: &[&str] = &["of", "for", "and"];

#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicExtractor;

impl HeuristicExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Extractor for HeuristicExtractor {
    fn extract(&self, text: &str) -> EntityBundle {
        if text.trim().is_empty() {
            return EntityBundle::empty();
        }

        let mut bundle = EntityBundle::empty();

        for span in proper_noun_spans(text) {
            match span.classify() {
                EntityClass::Organization => {
                    bundle.organizations.insert(span.text);
                }
                EntityClass::Location => {
                    bundle.locations.insert(span.text);
                }
                EntityClass::Person => {
                    bundle.people.insert(span.text);
                }
            }
        }

        let tokens = content_tokens(text);
        bundle.topics = rank_by_frequency(&tokens, EntityBundle::MAX_TOPICS);
        bundle.sentiment = analyze_sentiment(text);

        bundle
    }
}

enum EntityClass {
    Person,
    Organization,
    Location,
}

/// A detected proper-noun span with its left context.
struct ProperNounSpan {
    text: String,
    /// Lowercased token immediately before the span, if any
    preceding: Option<String>,
}

impl ProperNounSpan {
    fn classify(&self) -> EntityClass {
        let lowered = self.text.to_lowercase();
        if lowered
            .split_whitespace()
            .any(|t| ORG_KEYWORDS.contains(&t))
        {
            return EntityClass::Organization;
        }
        if let Some(ref prev) = self.preceding {
            if LOCATION_CUES.contains(&prev.as_str()) {
                return EntityClass::Location;
            }
        }
        EntityClass::Person
    }
}

fn is_capitalized(token: &str) -> bool {
    token.len() >= 2 && token.chars().next().is_some_and(|c| c.is_uppercase())
}

fn is_common_word(token: &str) -> bool {
    COMMON_WORDS.contains(&token.to_lowercase().as_str())
}

/// Strip punctuation surrounding a raw whitespace token.
fn clean(token: &str) -> &str {
    token.trim_matches(|c: char| !c.is_alphanumeric())
}

/// Detect proper-noun spans per sentence.
///
/// A span is a run of capitalized tokens, optionally joined by lowercase
/// connectors. Leading sentence-case common words are stripped; a single
/// remaining token at sentence start is discarded because it cannot be told
/// apart from ordinary sentence case.
fn proper_noun_spans(text: &str) -> Vec<ProperNounSpan> {
    let mut spans = Vec::new();

    for sentence in text.split(['.', '!', '?', '\n', ';']) {
        let tokens: Vec<&str> = sentence
            .split_whitespace()
            .map(clean)
            .filter(|t| !t.is_empty())
            .collect();

        let mut i = 0;
        while i < tokens.len() {
            if !is_capitalized(tokens[i]) {
                i += 1;
                continue;
            }

            let start = i;
            let mut run: Vec<&str> = vec![tokens[i]];
            let mut j = i + 1;
            while j < tokens.len() {
                if is_capitalized(tokens[j]) {
                    run.push(tokens[j]);
                    j += 1;
                } else if SPAN_CONNECTORS.contains(&tokens[j])
                    && j + 1 < tokens.len()
                    && is_capitalized(tokens[j + 1])
                {
                    run.push(tokens[j]);
                    run.push(tokens[j + 1]);
                    j += 2;
                } else {
                    break;
                }
            }
            i = j;

            // Strip leading sentence-case filler ("The Ministry of Health")
            let mut first = 0;
            while first < run.len() && is_common_word(run[first]) {
                first += 1;
            }
            let run = &run[first..];
            if run.is_empty() {
                continue;
            }
            // Single sentence-initial capitalized word: ambiguous, skip
            if start == 0 && first == 0 && run.len() == 1 {
                continue;
            }

            let preceding = start
                .checked_sub(1)
                .map(|p| tokens[p].to_lowercase());
            spans.push(ProperNounSpan {
                text: run.join(" "),
                preceding,
            });
        }
    }

    spans
}

/// Majority vote over polarity-word counts; ties are neutral.
fn analyze_sentiment(text: &str) -> Sentiment {
    let mut positive = 0usize;
    let mut negative = 0usize;

    for token in text
        .split(|c: char| !c.is_alphabetic())
        .filter(|t| !t.is_empty())
    {
        let lowered = token.to_lowercase();
        if POSITIVE_WORDS.contains(&lowered.as_str()) {
            positive += 1;
        } else if NEGATIVE_WORDS.contains(&lowered.as_str()) {
            negative += 1;
        }
    }

    match positive.cmp(&negative) {
        std::cmp::Ordering::Greater => Sentiment::Positive,
        std::cmp::Ordering::Less => Sentiment::Negative,
        std::cmp::Ordering::Equal => Sentiment::Neutral,
    }
}
