use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use discover::{DiscoverOrchestrator, DiscoverSnapshot, SequencingPolicy};
use services::{
    InMemoryCatalog, InMemorySubscriptions, LogNavigator, LogNotifier, NoopCategoryState,
};

/// podscout - discover screen for a show catalog
#[derive(Parser)]
#[command(name = "podscout")]
#[command(about = "Drive the discover-screen orchestrator from the terminal", long_about = None)]
struct Cli {
    /// Path to the JSON catalog fixture
    #[arg(short, long, default_value = "data/shows.json")]
    catalog: PathBuf,

    /// Discard superseded search results instead of last-writer-wins
    #[arg(long)]
    strict_ordering: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the grouped discover screen
    Discover,

    /// Search the catalog and show the narrowed screen
    Search {
        /// Query text (blank re-fetches the full catalog)
        #[arg(long)]
        query: String,
    },

    /// Drop the subscription for one show, then show the screen
    Unsubscribe {
        /// Exact title of the show
        #[arg(long)]
        title: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let orchestrator = build_orchestrator(&cli)?;
    orchestrator.initialize().await;

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Discover => {}
        Commands::Search { query } => handle_search(&orchestrator, &query).await,
        Commands::Unsubscribe { title } => handle_unsubscribe(&orchestrator, &title).await?,
    }

    render(&orchestrator.snapshot());
    Ok(())
}

/// Wire the orchestrator to the in-memory services backed by the fixture.
fn build_orchestrator(cli: &Cli) -> Result<DiscoverOrchestrator> {
    let source = InMemoryCatalog::from_fixture(&cli.catalog)
        .with_context(|| format!("Failed to load catalog from {}", cli.catalog.display()))?;

    // The demo starts fully subscribed so the unsubscribe affordance has
    // something to remove; a real shell would hand in its own store.
    let subscriptions =
        InMemorySubscriptions::with_subscribed(source.shows().iter().map(|show| show.id));

    let sequencing = if cli.strict_ordering {
        SequencingPolicy::DropStale
    } else {
        SequencingPolicy::LastWriterWins
    };

    Ok(DiscoverOrchestrator::new(
        Arc::new(source),
        Arc::new(subscriptions),
        Arc::new(NoopCategoryState),
        Arc::new(LogNotifier),
        Arc::new(LogNavigator),
    )
    .with_sequencing(sequencing))
}

/// Handle the 'search' command
async fn handle_search(orchestrator: &DiscoverOrchestrator, query: &str) {
    orchestrator.search(query).await;
}

/// Handle the 'unsubscribe' command
async fn handle_unsubscribe(orchestrator: &DiscoverOrchestrator, title: &str) -> Result<()> {
    let snapshot = orchestrator.snapshot();
    let Some(tile) = snapshot.shows.iter().find(|tile| tile.show().title == title) else {
        bail!("No show titled {title:?} in the catalog");
    };

    orchestrator.toggle_subscription(tile).await;
    println!(
        "{} {}",
        "Unsubscribed from".yellow(),
        tile.show().title.bold()
    );
    Ok(())
}

/// Print the grouped view the way the discover screen would render it.
fn render(snapshot: &DiscoverSnapshot) {
    if !snapshot.search_text.is_empty() {
        println!("{} {}", "Results for".dimmed(), snapshot.search_text.bold());
    }

    if snapshot.shows.is_empty() {
        println!("{}", "No shows to display.".dimmed());
        return;
    }

    for group in &snapshot.groups {
        println!("\n{}", group.label.to_string().to_uppercase().cyan().bold());
        for tile in &group.shows {
            let marker = if tile.is_subscribed() {
                "✓".green()
            } else {
                " ".normal()
            };
            println!(
                "  {} {} {}",
                marker,
                tile.show().title.bold(),
                format!("by {}", tile.show().author).dimmed()
            );
        }
    }

    println!("\n{} shows", snapshot.shows.len());
}
