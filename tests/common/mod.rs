//! Shared builders for integration tests

use storymesh::{
    GraphService, HeuristicExtractor, InMemoryCatalog, Story, StoryCatalog, StoryIngestor,
};

/// Two health stories set in Nairobi plus one unrelated governance story.
pub fn sample_catalog() -> InMemoryCatalog {
    let catalog = InMemoryCatalog::new();
    catalog.add_story(
        Story::new(1, "Clinic Queues Shrink in Nairobi")
            .with_description(
                "Patients at a clinic in Nairobi report shorter queues after the \
                 county health reforms. Staff called the change a great improvement.",
            )
            .with_county("Nairobi")
            .with_category("health")
            .with_tags(vec!["health"])
            .with_views(150)
            .published(),
    );
    catalog.add_story(
        Story::new(2, "Vaccination Drive in Nairobi")
            .with_description(
                "A vaccination drive in Nairobi reached thousands as county health \
                 workers went door to door.",
            )
            .with_county("Nairobi")
            .with_category("health")
            .with_tags(vec!["health"])
            .with_views(90)
            .published(),
    );
    catalog.add_story(
        Story::new(3, "County Budget Report")
            .with_description("How the county allocates public funds across wards.")
            .with_county("Kisumu")
            .with_category("governance")
            .with_tags(vec!["budget", "transparency"])
            .with_views(300)
            .published(),
    );
    catalog
}

/// Ingest every published story of the catalog into the graph.
pub fn ingest_all(catalog: &InMemoryCatalog, graph: &GraphService) {
    let extractor = HeuristicExtractor::new();
    let ingestor = StoryIngestor::new(&extractor, graph);
    for story in catalog.published_stories() {
        ingestor.ingest(&story);
    }
}
