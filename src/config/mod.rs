pub mod local_store;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "category-resolver")]
#[command(about = "Resolve category references in free-text legal search queries")]
pub struct CliConfig {
    #[arg(long, global = true, help = "TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, global = true, help = "Directory of the JSON category store")]
    pub store: Option<String>,

    #[arg(long, global = true, help = "Portal host, e.g. mfkn.naevneneshus.dk")]
    pub portal: Option<String>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Resolve the category referenced by a query and print the outcome
    Resolve { query: String },
    /// Load categories from a SiteSettings JSON file into the store
    Ingest { settings_file: String },
    /// Add an alias to a stored category
    Promote {
        #[arg(long)]
        category: String,
        alias: String,
    },
    /// Record acronyms in a query that no category knows yet
    Acronyms { query: String },
}
