use crate::OutputFormat;
use anyhow::{Result, bail};
use std::path::Path;
use tokmirror_core::analysis::{DomainCount, domain_counts};
use tokmirror_core::archive::ExportArchive;
use tokmirror_core::export::{self, RecordKind};

/// Load the like stream and group it by domain
pub fn load_like_domains(path: &Path) -> Result<Vec<DomainCount>> {
    let bytes = std::fs::read(path)?;
    let mut archive = ExportArchive::from_bytes(bytes)?;

    let Some(member) = export::resolve(&archive, RecordKind::Likes) else {
        bail!("no like list member found in archive");
    };
    let text = archive.read_text(&member)?;
    let likes = export::parse_likes(&member, &text)?;

    Ok(domain_counts(likes.iter().map(|like| like.domain.as_str())))
}

pub fn execute(path: &Path, format: OutputFormat) -> Result<()> {
    tracing::info!("Grouping likes by domain from: {}", path.display());

    let domains = load_like_domains(path)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&domains)?);
        }
        OutputFormat::Table => {
            println!("Domain,Count");
            for domain in &domains {
                println!("{},{}", domain.domain, domain.count);
            }
        }
        OutputFormat::Pretty => {
            use console::style;

            println!("\n{}", style("Likes by Domain").bold().cyan());
            if domains.is_empty() {
                println!("  no liked videos with a recognizable domain");
            }
            for domain in &domains {
                println!("  {:>6}  {}", domain.count, domain.domain);
            }
            println!();
        }
    }

    Ok(())
}
