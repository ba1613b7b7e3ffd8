use crate::OutputFormat;
use anyhow::{Result, bail};
use clap::ValueEnum;
use std::path::Path;
use tokmirror_core::analysis::{TermCount, term_counts};
use tokmirror_core::archive::ExportArchive;
use tokmirror_core::export::{self, RecordKind};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum SearchSort {
    Frequency,
    Az,
    Za,
}

/// Load the search stream and count term frequencies
pub fn load_term_counts(path: &Path) -> Result<Vec<TermCount>> {
    let bytes = std::fs::read(path)?;
    let mut archive = ExportArchive::from_bytes(bytes)?;

    let Some(member) = export::resolve(&archive, RecordKind::Searches) else {
        bail!("no searches member found in archive");
    };
    let text = archive.read_text(&member)?;
    let searches = export::parse_searches(&member, &text)?;

    Ok(term_counts(&searches))
}

pub fn execute(
    path: &Path,
    top: Option<usize>,
    sort: SearchSort,
    format: OutputFormat,
) -> Result<()> {
    tracing::info!("Counting search terms from: {}", path.display());

    let mut terms = load_term_counts(path)?;

    match sort {
        // Stable: equally-counted terms keep first-seen order
        SearchSort::Frequency => terms.sort_by(|a, b| b.count.cmp(&a.count)),
        SearchSort::Az => terms.sort_by(|a, b| a.term.cmp(&b.term)),
        SearchSort::Za => terms.sort_by(|a, b| b.term.cmp(&a.term)),
    }

    if let Some(limit) = top {
        terms.truncate(limit);
    }

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&terms)?);
        }
        OutputFormat::Table => {
            println!("Term,Count");
            for term in &terms {
                println!("{},{}", term.term, term.count);
            }
        }
        OutputFormat::Pretty => {
            use console::style;

            println!("\n{}", style("Search Terms").bold().cyan());
            if terms.is_empty() {
                println!("  no search terms found");
            }
            for term in &terms {
                let plural = if term.count > 1 { "es" } else { "" };
                println!("  {} — {} search{}", term.term, term.count, plural);
            }
            println!();
        }
    }

    Ok(())
}
