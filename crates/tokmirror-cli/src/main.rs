use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokmirror_cli::OutputFormat;
use tokmirror_cli::commands::{likes, lookup, report, searches, watch};

#[derive(Parser)]
#[command(name = "tokmirror")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "A CLI tool for analyzing TikTok personal data-export archives",
    long_about = "Tokmirror reads a TikTok data-export zip and derives watch-history timelines, \
                  like domains, search-term rankings and a persona summary from it."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Pretty)]
    format: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Display the full signals report (persona, ratios, histograms)
    Report {
        /// Path to the export archive (zip)
        #[arg(value_name = "ARCHIVE")]
        archive: PathBuf,

        /// Number of top search terms to rank
        #[arg(long, default_value_t = 10)]
        top: usize,
    },

    /// List watch history with per-date counts
    Watch {
        /// Path to the export archive (zip)
        #[arg(value_name = "ARCHIVE")]
        archive: PathBuf,

        /// Sort order for the listing
        #[arg(long, value_enum, default_value_t = watch::WatchSort::DateDesc)]
        sort: watch::WatchSort,

        /// Only show videos watched on this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },

    /// Show liked videos grouped by domain
    Likes {
        /// Path to the export archive (zip)
        #[arg(value_name = "ARCHIVE")]
        archive: PathBuf,
    },

    /// Show search-term frequencies
    Searches {
        /// Path to the export archive (zip)
        #[arg(value_name = "ARCHIVE")]
        archive: PathBuf,

        /// Limit output to the N most frequent terms
        #[arg(long)]
        top: Option<usize>,

        /// Sort order for the term table
        #[arg(long, value_enum, default_value_t = searches::SearchSort::Frequency)]
        sort: searches::SearchSort,
    },

    /// Fetch public metadata for a single video share URL
    Lookup {
        /// Video share URL
        #[arg(value_name = "URL")]
        url: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Commands::Report { archive, top } => report::execute(&archive, top, cli.format),
        Commands::Watch {
            archive,
            sort,
            date,
        } => watch::execute(&archive, sort, date.as_deref(), cli.format),
        Commands::Likes { archive } => likes::execute(&archive, cli.format),
        Commands::Searches { archive, top, sort } => {
            searches::execute(&archive, top, sort, cli.format)
        }
        Commands::Lookup { url } => lookup::execute(&url, cli.format),
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("tokmirror=debug,tokmirror_core=debug,tokmirror_lookup=debug")
    } else {
        EnvFilter::new("tokmirror=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}
