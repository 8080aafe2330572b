//! Storymesh: content relationship graph and recommendation engine
//!
//! Ingests short-form stories, extracts the people, organizations,
//! locations, and topics they mention, and connects them in a typed
//! relationship graph. Two query classes sit on top: graph co-occurrence
//! ("what is related to this story") and a multi-strategy recommendation
//! scorer ("what should this user or query see next").
//!
//! # Core concepts
//!
//! - **Extractor**: pure, deterministic text analysis behind a trait
//! - **GraphService**: availability-gated store with idempotent upserts
//! - **Queries**: read-only relatedness, visualization, and title search
//! - **Recommender**: query → history → popularity fallback chain
//!
//! # Example
//!
//! ```
//! use storymesh::{GraphService, HeuristicExtractor, InMemoryCatalog, Story, StoryIngestor};
//!
//! let graph = GraphService::new();
//! let extractor = HeuristicExtractor::new();
//! let ingestor = StoryIngestor::new(&extractor, &graph);
//!
//! let story = Story::new(1, "Water Returns to Kitui")
//!     .with_description("A borehole project brings water back to the ward.")
//!     .with_county("Kitui")
//!     .published();
//! ingestor.ingest(&story);
//!
//! let catalog = InMemoryCatalog::new();
//! catalog.add_story(story);
//! ```

pub mod api;
mod catalog;
pub mod extract;
pub mod graph;
mod ingest;
pub mod query;
mod recommend;

pub use api::{ExploreResponse, MeshError, MeshResult};
pub use catalog::{ContributionLog, InMemoryCatalog, Story, StoryCatalog, StoryStatus};
pub use extract::{extract_keywords, EntityBundle, Extractor, HeuristicExtractor, Sentiment};
pub use graph::{EdgeKind, EntityType, GraphService, Node, NodeKey, StoryAttributes};
pub use ingest::StoryIngestor;
pub use query::{GraphData, RelatedStory, StoryHit, VizEdge, VizNode};
pub use recommend::Recommender;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
