use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "episeek",
    about = "Fuzzy keyword search over a video episode catalog",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the catalog and print ranked results
    Search {
        /// Space/comma-separated keywords (fuzzy, typo-tolerant)
        query: String,

        /// Path to the catalog JSON file, or "-" for stdin
        #[arg(short, long)]
        data: String,

        /// Print results as a JSON array instead of text
        #[arg(long)]
        json: bool,

        /// Show at most this many results
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Print autocomplete suggestions for a partial query
    Suggest {
        /// Partial query; omit to list the whole vocabulary
        query: Option<String>,

        /// Path to the catalog JSON file, or "-" for stdin
        #[arg(short, long)]
        data: String,

        /// Show at most this many suggestions
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Dump the deduplicated vocabulary universe
    Vocab {
        /// Path to the catalog JSON file, or "-" for stdin
        #[arg(short, long)]
        data: String,
    },
}
