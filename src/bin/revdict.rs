//! Reverse dictionary CLI.

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use reverse_dictionary::completion::GeminiGenerator;
use reverse_dictionary::embeddings::GeminiEmbedder;
use reverse_dictionary::index::{PineconeClient, QueryMatch};
use reverse_dictionary::store::{DEFAULT_BATCH_SIZE, DEFAULT_TOP_K};
use reverse_dictionary::types::display_label;
use reverse_dictionary::{Config, SuggestionClient, VectorStore, WordSuggestions};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "revdict")]
#[command(about = "Reverse dictionary - vector search + LLM suggestions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ingest a CSV dataset (Word,Description) into the vector index
    Ingest {
        /// CSV file path
        file: PathBuf,

        /// Documents per batch
        #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
        batch_size: usize,
    },

    /// Similarity search over the vector index
    Query {
        /// Description of the word you're thinking of
        description: String,

        /// Number of results
        #[arg(long, default_value_t = DEFAULT_TOP_K)]
        top_k: usize,
    },

    /// Ask the generative model for matching words
    Suggest {
        /// Description of the word you're thinking of
        description: String,
    },

    /// Run both paths and show results side by side
    Lookup {
        /// Description of the word you're thinking of
        description: String,

        /// Number of vector search results
        #[arg(long, default_value_t = DEFAULT_TOP_K)]
        top_k: usize,
    },
}

fn print_matches(matches: &[QueryMatch]) {
    for m in matches {
        match &m.metadata {
            Some(meta) => {
                println!(
                    "  {} ({:.4})\n    {}",
                    display_label(&meta.word).bold(),
                    m.score,
                    meta.description
                );
            }
            None => println!("  {} ({:.4})", m.id, m.score),
        }
    }
}

fn print_suggestions(suggestions: &WordSuggestions) {
    for (word, definition) in suggestions.words.iter().zip(&suggestions.definitions) {
        println!("  {}\n    {}", display_label(word).bold(), definition);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    match cli.command {
        Commands::Ingest { file, batch_size } => {
            let documents = reverse_dictionary::dataset::load_csv(&file)?;
            println!(
                "{} {} documents from {}",
                "Loaded".cyan(),
                documents.len(),
                file.display()
            );

            let store = build_store(&config).with_batch_size(batch_size);
            let report = store.ingest(&documents).await?;
            println!(
                "{} upserted {}, skipped {} (already present)",
                "Done:".green(),
                report.upserted,
                report.skipped
            );
        }

        Commands::Query { description, top_k } => {
            let store = build_store(&config);
            let matches = store.query(&description, top_k).await?;
            println!("{}", "Vector Search Based".bold().underline());
            print_matches(&matches);
        }

        Commands::Suggest { description } => {
            let client = build_suggester(&config);
            let suggestions = client.describe_to_words(&description).await?;
            println!("{}", "LLM Based".bold().underline());
            print_suggestions(&suggestions);
        }

        Commands::Lookup { description, top_k } => {
            let store = build_store(&config);
            let client = build_suggester(&config);

            // Both paths run independently; a failure in one never
            // suppresses results from the other.
            let (matches, suggestions) = tokio::join!(
                store.query(&description, top_k),
                client.describe_to_words(&description)
            );

            println!("{}", "Vector Search Based".bold().underline());
            match matches {
                Ok(matches) => print_matches(&matches),
                Err(e) => println!("  {} {}", "error:".red(), e),
            }

            println!("\n{}", "LLM Based".bold().underline());
            match suggestions {
                Ok(suggestions) => print_suggestions(&suggestions),
                Err(e) => println!("  {} {}", "error:".red(), e),
            }
        }
    }

    Ok(())
}

fn build_store(config: &Config) -> VectorStore<GeminiEmbedder, PineconeClient> {
    let embedder = GeminiEmbedder::new(
        config.gemini_api_key.clone(),
        config.embedding_model.clone(),
    );
    let provider = PineconeClient::new(config.pinecone_api_key.clone());
    VectorStore::new(embedder, provider, config.index_name.clone())
}

fn build_suggester(config: &Config) -> SuggestionClient<GeminiGenerator> {
    let generator = GeminiGenerator::new(
        config.gemini_api_key.clone(),
        config.completion_model.clone(),
    );
    SuggestionClient::new(generator)
}
