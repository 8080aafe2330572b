//! Story catalog and contribution-log collaborator contracts
//!
//! The catalog is the system of record for stories; this crate only reads
//! it. [`InMemoryCatalog`] is a reference implementation used by the CLI
//! demo and tests; a production deployment supplies its own backed by the
//! relational store.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Publication state of a story. Only published stories participate in
/// traversal and recommendation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoryStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

/// A short-form media record as exposed by the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Story {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// video, audio, podcast, document
    pub content_type: String,
    pub transcript: Option<String>,
    pub county: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    /// Monotonic view counter, owned and incremented by the catalog
    pub views: u64,
    pub status: StoryStatus,
    pub created_at: DateTime<Utc>,
}

impl Story {
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            content_type: "document".to_string(),
            transcript: None,
            county: None,
            category: None,
            tags: Vec::new(),
            views: 0,
            status: StoryStatus::Draft,
            created_at: Utc::now(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    pub fn with_transcript(mut self, transcript: impl Into<String>) -> Self {
        self.transcript = Some(transcript.into());
        self
    }

    pub fn with_county(mut self, county: impl Into<String>) -> Self {
        self.county = Some(county.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_tags(mut self, tags: Vec<&str>) -> Self {
        self.tags = tags.into_iter().map(String::from).collect();
        self
    }

    pub fn with_views(mut self, views: u64) -> Self {
        self.views = views;
        self
    }

    pub fn with_status(mut self, status: StoryStatus) -> Self {
        self.status = status;
        self
    }

    pub fn published(self) -> Self {
        self.with_status(StoryStatus::Published)
    }

    pub fn is_published(&self) -> bool {
        self.status == StoryStatus::Published
    }

    /// The text handed to the extractor: title, description, and transcript.
    pub fn full_text(&self) -> String {
        let mut text = format!("{}. {}", self.title, self.description);
        if let Some(ref transcript) = self.transcript {
            text.push(' ');
            text.push_str(transcript);
        }
        text
    }
}

/// Read access to the story catalog.
pub trait StoryCatalog: Send + Sync {
    /// All published stories, ordered by ascending id.
    fn published_stories(&self) -> Vec<Story>;

    /// Look up a story regardless of status.
    fn story_by_id(&self, id: i64) -> Option<Story>;
}

/// Read access to per-user view contributions.
pub trait ContributionLog: Send + Sync {
    /// Ids of stories the user has a "view" contribution against.
    fn viewed_story_ids(&self, user_id: i64) -> HashSet<i64>;
}

/// In-memory catalog and contribution log.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    stories: DashMap<i64, Story>,
    views: DashMap<i64, HashSet<i64>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_story(&self, story: Story) {
        self.stories.insert(story.id, story);
    }

    /// Record a "view" contribution by a user against a story.
    pub fn record_view(&self, user_id: i64, story_id: i64) {
        self.views.entry(user_id).or_default().insert(story_id);
    }
}

impl StoryCatalog for InMemoryCatalog {
    fn published_stories(&self) -> Vec<Story> {
        let mut stories: Vec<Story> = self
            .stories
            .iter()
            .filter(|s| s.value().is_published())
            .map(|s| s.value().clone())
            .collect();
        stories.sort_by_key(|s| s.id);
        stories
    }

    fn story_by_id(&self, id: i64) -> Option<Story> {
        self.stories.get(&id).map(|s| s.clone())
    }
}

impl ContributionLog for InMemoryCatalog {
    fn viewed_story_ids(&self, user_id: i64) -> HashSet<i64> {
        self.views
            .get(&user_id)
            .map(|v| v.clone())
            .unwrap_or_default()
    }
}
