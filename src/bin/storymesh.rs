//! Storymesh CLI — demo driver for the graph and recommendation engine.
//!
//! Usage:
//!   storymesh demo [--limit N]
//!   storymesh explore <query>
//!   storymesh recommend [--user ID] [--query TEXT] [--limit N]

use clap::{Parser, Subcommand};
use storymesh::{
    api, GraphService, HeuristicExtractor, InMemoryCatalog, Recommender, Story, StoryCatalog,
    StoryIngestor,
};

#[derive(Parser)]
#[command(
    name = "storymesh",
    version,
    about = "Content relationship graph and recommendation engine"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ingest the sample catalog and print graph relationships
    Demo {
        /// Maximum related stories per origin
        #[arg(long, default_value_t = 5)]
        limit: usize,
    },
    /// Extract entities from a query and search story titles
    Explore {
        /// Free-text query
        query: String,
    },
    /// Print recommendations for a user and/or query
    Recommend {
        /// User id with view history
        #[arg(long)]
        user: Option<i64>,
        /// Free-text query
        #[arg(long)]
        query: Option<String>,
        #[arg(long, default_value_t = 5)]
        limit: usize,
    },
}

/// Small sample catalog exercising every edge type.
fn sample_catalog() -> InMemoryCatalog {
    let catalog = InMemoryCatalog::new();
    catalog.add_story(
        Story::new(1, "Clinic Reopens in Makueni")
            .with_description(
                "Nurse Grace Mwende reopened the ward clinic in Wote after months of \
                 repairs funded by the County Government. Patients called it a great \
                 improvement for local health services.",
            )
            .with_content_type("video")
            .with_county("Makueni")
            .with_category("health")
            .with_tags(vec!["health", "clinic"])
            .with_views(320)
            .published(),
    );
    catalog.add_story(
        Story::new(2, "Mobile Clinics Reach Herders")
            .with_description(
                "A health outreach programme run by the Red Cross Society brings mobile \
                 clinic services to herders near Wote, a success for preventive care.",
            )
            .with_content_type("audio")
            .with_county("Makueni")
            .with_category("health")
            .with_tags(vec!["health", "outreach"])
            .with_views(180)
            .published(),
    );
    catalog.add_story(
        Story::new(3, "County Budget Hearings Open")
            .with_description(
                "Residents questioned officials in Nairobi over budget transparency and \
                 stalled road projects.",
            )
            .with_content_type("podcast")
            .with_county("Nairobi")
            .with_category("governance")
            .with_tags(vec!["budget", "transparency"])
            .with_views(240)
            .published(),
    );
    catalog.record_view(7, 2);
    catalog
}

fn ingest_all(catalog: &InMemoryCatalog, extractor: &HeuristicExtractor, graph: &GraphService) {
    let ingestor = StoryIngestor::new(extractor, graph);
    for story in catalog.published_stories() {
        ingestor.ingest(&story);
    }
}

fn cmd_demo(limit: usize) -> i32 {
    let catalog = sample_catalog();
    let extractor = HeuristicExtractor::new();
    let graph = GraphService::new();
    ingest_all(&catalog, &extractor, &graph);

    let data = graph.graph_data(100);
    println!(
        "Graph: {} story nodes, {} story-pair edges",
        data.nodes.len(),
        data.edges.len()
    );

    for story in catalog.published_stories() {
        println!("\nRelated to \"{}\":", story.title);
        let related = match api::related(&catalog, &graph, story.id, limit) {
            Ok(related) => related,
            Err(e) => {
                eprintln!("Error: {}", e);
                return 1;
            }
        };
        if related.is_empty() {
            println!("  (none)");
        }
        for r in related {
            println!("  [{}] {} (commonality {})", r.id, r.title, r.commonality);
        }
    }
    0
}

fn cmd_explore(query: &str) -> i32 {
    let catalog = sample_catalog();
    let extractor = HeuristicExtractor::new();
    let graph = GraphService::new();
    ingest_all(&catalog, &extractor, &graph);

    match api::explore(&extractor, &graph, query) {
        Ok(response) => {
            match serde_json::to_string_pretty(&response) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return 1;
                }
            }
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_recommend(user: Option<i64>, query: Option<&str>, limit: usize) -> i32 {
    let catalog = sample_catalog();
    let recommender = Recommender::new(&catalog, &catalog);

    for story in recommender.recommend(user, query, limit) {
        println!("[{}] {} ({} views)", story.id, story.title, story.views);
    }
    0
}

fn main() {
    tracing_subscriber::fmt().init();

    let cli = Cli::parse();
    let code = match cli.command {
        Commands::Demo { limit } => cmd_demo(limit),
        Commands::Explore { query } => cmd_explore(&query),
        Commands::Recommend { user, query, limit } => {
            cmd_recommend(user, query.as_deref(), limit)
        }
    };
    std::process::exit(code);
}
