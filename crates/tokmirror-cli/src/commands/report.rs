use crate::OutputFormat;
use anyhow::Result;
use std::path::Path;
use tokmirror_core::archive::ExportArchive;
use tokmirror_core::report::SignalsReport;

/// Run the full pipeline against an archive on disk
pub fn analyze_archive(path: &Path, top_terms: usize) -> Result<SignalsReport> {
    tracing::debug!("Reading export archive: {}", path.display());

    let bytes = std::fs::read(path)?;
    let mut archive = ExportArchive::from_bytes(bytes)?;
    let report = SignalsReport::from_archive_with_top(&mut archive, top_terms)?;
    Ok(report)
}

pub fn execute(path: &Path, top_terms: usize, format: OutputFormat) -> Result<()> {
    tracing::info!("Building signals report for: {}", path.display());

    let report = analyze_archive(path, top_terms)?;

    match format {
        OutputFormat::Json => output_json(&report)?,
        OutputFormat::Table => output_table(&report),
        OutputFormat::Pretty => output_pretty(&report),
    }

    Ok(())
}

fn output_pretty(report: &SignalsReport) {
    use console::style;

    println!("\n{}", style("Signals Report").bold().cyan());
    println!("{}", style("==============").cyan());

    println!("\n{}", style("Persona:").bold());
    println!("  {}", report.persona.label);

    println!("\n{}", style("Engagement:").bold());
    println!("  Watched Videos:       {}", report.engagement.watch_count);
    println!("  Liked Videos:         {}", report.engagement.like_count);
    println!(
        "  Likes-to-Watch Ratio: {:.1}%",
        report.engagement.like_to_watch_ratio * 100.0
    );

    if !report.activity.per_hour.is_empty() {
        println!("\n{}", style("Activity by Hour:").bold());
        for hour in &report.activity.per_hour {
            println!("  {:>5}  {}", hour.hour, "#".repeat(hour.count.min(60)));
        }
    }

    if !report.search.top_terms.is_empty() {
        println!("\n{}", style("Top Search Terms:").bold());
        for (i, term) in report.search.top_terms.iter().enumerate() {
            println!("  {}. {} ({})", i + 1, term.term, term.count);
        }
    }

    if !report.activity.per_domain.is_empty() {
        println!("\n{}", style("Top Video Domains:").bold());
        for domain in &report.activity.per_domain {
            println!("  {:>6}  {}", domain.count, domain.domain);
        }
    }

    if !report.activity.repeat_views.is_empty() {
        println!("\n{}", style("Repeat Videos:").bold());
        for repeat in &report.activity.repeat_views {
            println!("  {}x  {}", repeat.count, repeat.url);
        }
    }

    println!();
}

fn output_json(report: &SignalsReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{}", json);
    Ok(())
}

fn output_table(report: &SignalsReport) {
    println!("Metric,Value");
    println!("Persona,{}", report.persona.label);
    println!("Watched Videos,{}", report.engagement.watch_count);
    println!("Liked Videos,{}", report.engagement.like_count);
    println!(
        "Likes-to-Watch Ratio,{:.3}",
        report.engagement.like_to_watch_ratio
    );
    println!("Repeat Videos,{}", report.activity.repeat_views.len());
    println!("Distinct Active Dates,{}", report.activity.per_date.len());
}
