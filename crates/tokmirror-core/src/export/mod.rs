//! Parsing of export members into normalized records.
//!
//! Two layouts are supported per stream: the plain-text block format and
//! the combined JSON export. Downstream consumers never observe which
//! layout a record came from.

pub mod json;
mod locate;
pub mod text;
mod types;

pub use locate::{RecordKind, resolve};
pub use types::{LikeEvent, SearchEvent, TimeOfDay, WatchEvent, video_id};

use crate::Result;
use serde::de::IgnoredAny;

/// The detected layout of one export member
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Text,
    Json,
}

impl ExportFormat {
    /// Detect the layout from the member's extension, falling back to a
    /// content sniff: if none of the known line prefixes occur and the
    /// content parses as JSON, it is the JSON layout.
    pub fn sniff(member_name: &str, content: &str) -> Self {
        let name_lower = member_name.to_lowercase();
        if name_lower.ends_with(".json") {
            return ExportFormat::Json;
        }
        if name_lower.ends_with(".txt") {
            return ExportFormat::Text;
        }

        if text::has_known_prefixes(content) {
            ExportFormat::Text
        } else if serde_json::from_str::<IgnoredAny>(content).is_ok() {
            ExportFormat::Json
        } else {
            ExportFormat::Text
        }
    }
}

/// Normalized records for one analysis pass
#[derive(Debug, Default)]
pub struct ExportRecords {
    pub watches: Vec<WatchEvent>,
    pub likes: Vec<LikeEvent>,
    pub searches: Vec<SearchEvent>,
}

/// Parse the watch-history stream out of a member
pub fn parse_watch(member_name: &str, content: &str) -> Result<Vec<WatchEvent>> {
    let events = match ExportFormat::sniff(member_name, content) {
        ExportFormat::Text => text::scan(content)
            .entries
            .into_iter()
            .map(|entry| WatchEvent::from_raw(entry.url, &entry.timestamp))
            .collect(),
        ExportFormat::Json => json::parse(content)?
            .watch_history
            .video_list
            .into_iter()
            .map(|record| WatchEvent::from_raw(record.link, &record.date))
            .collect(),
    };
    Ok(events)
}

/// Parse the like-list stream out of a member
pub fn parse_likes(member_name: &str, content: &str) -> Result<Vec<LikeEvent>> {
    let events = match ExportFormat::sniff(member_name, content) {
        ExportFormat::Text => text::scan(content)
            .entries
            .into_iter()
            .map(|entry| LikeEvent::from_url(entry.url))
            .collect(),
        ExportFormat::Json => json::parse(content)?
            .likes_and_favorites
            .like_list
            .into_iter()
            .map(|record| LikeEvent::from_url(record.link))
            .collect(),
    };
    Ok(events)
}

/// Parse the searches stream out of a member; empty terms are dropped
pub fn parse_searches(member_name: &str, content: &str) -> Result<Vec<SearchEvent>> {
    let events = match ExportFormat::sniff(member_name, content) {
        ExportFormat::Text => text::scan(content)
            .searches
            .iter()
            .filter_map(|raw| SearchEvent::from_raw(raw))
            .collect(),
        ExportFormat::Json => json::parse(content)?
            .your_activity
            .searches
            .search_list
            .iter()
            .filter_map(|record| SearchEvent::from_raw(&record.search_term))
            .collect(),
    };
    Ok(events)
}
