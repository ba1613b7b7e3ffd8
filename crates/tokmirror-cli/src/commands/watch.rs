use crate::OutputFormat;
use anyhow::{Result, bail};
use clap::ValueEnum;
use std::path::Path;
use tokmirror_core::analysis::{ActivityAnalyzer, Analyzer, DateCount};
use tokmirror_core::archive::ExportArchive;
use tokmirror_core::export::{self, ExportRecords, RecordKind, TimeOfDay, WatchEvent};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum WatchSort {
    DateDesc,
    DateAsc,
    Domain,
    Timeofday,
}

/// Load and parse the watch-history stream from an archive on disk
pub fn load_watch_history(path: &Path) -> Result<Vec<WatchEvent>> {
    let bytes = std::fs::read(path)?;
    let mut archive = ExportArchive::from_bytes(bytes)?;

    let Some(member) = export::resolve(&archive, RecordKind::Watch) else {
        bail!("no watch history member found in archive");
    };
    let text = archive.read_text(&member)?;
    Ok(export::parse_watch(&member, &text)?)
}

pub fn execute(
    path: &Path,
    sort: WatchSort,
    date_filter: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    tracing::info!("Listing watch history from: {}", path.display());

    let mut events = load_watch_history(path)?;

    if let Some(date) = date_filter {
        events.retain(|event| event.date == date);
    }

    sort_events(&mut events, sort);

    let records = ExportRecords {
        watches: events.clone(),
        ..ExportRecords::default()
    };
    let activity = ActivityAnalyzer.analyze(&records)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&events)?);
        }
        OutputFormat::Table => {
            println!("Date,Count");
            for date in &activity.per_date {
                println!("{},{}", date.date, date.count);
            }
        }
        OutputFormat::Pretty => output_pretty(&events, &activity.per_date),
    }

    Ok(())
}

fn sort_events(events: &mut [WatchEvent], sort: WatchSort) {
    match sort {
        WatchSort::DateDesc => events.sort_by(|a, b| b.timestamp.cmp(&a.timestamp)),
        WatchSort::DateAsc => events.sort_by(|a, b| a.timestamp.cmp(&b.timestamp)),
        WatchSort::Domain => events.sort_by(|a, b| a.domain.cmp(&b.domain)),
        WatchSort::Timeofday => events.sort_by_key(|event| bucket_rank(event.time_of_day)),
    }
}

fn bucket_rank(bucket: TimeOfDay) -> u8 {
    match bucket {
        TimeOfDay::Morning => 0,
        TimeOfDay::Afternoon => 1,
        TimeOfDay::Evening => 2,
        TimeOfDay::Night => 3,
        TimeOfDay::Unknown => 4,
    }
}

fn output_pretty(events: &[WatchEvent], per_date: &[DateCount]) {
    use console::style;

    println!("\n{}", style("Watch Activity by Date").bold().cyan());
    for date in per_date {
        println!("  {}  {}", date.date, "#".repeat(date.count.min(60)));
    }

    println!("\n{}", style("Videos:").bold());
    for event in events {
        println!("  {}", event.url);
        println!(
            "    viewed: {} | domain: {} | time: {}",
            if event.timestamp.is_empty() {
                "unknown"
            } else {
                &event.timestamp
            },
            if event.domain.is_empty() {
                "unknown"
            } else {
                &event.domain
            },
            event.time_of_day.as_str()
        );
    }
    println!("\n{} videos", events.len());
}
