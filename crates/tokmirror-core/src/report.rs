//! End-to-end pipeline: archive → members → records → aggregates → persona.

use crate::analysis::{
    ActivityAnalyzer, ActivityStats, Analyzer, EngagementAnalyzer, EngagementStats, Persona,
    PersonaClassifier, SearchAnalyzer, SearchStats,
};
use crate::archive::ExportArchive;
use crate::export::{self, ExportRecords, RecordKind};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The structured result handed to presentation layers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalsReport {
    pub activity: ActivityStats,
    pub engagement: EngagementStats,
    pub search: SearchStats,
    pub persona: Persona,
}

impl SignalsReport {
    /// Open an archive from raw bytes and run the full pipeline
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let mut archive = ExportArchive::from_bytes(bytes)?;
        Self::from_archive(&mut archive)
    }

    pub fn from_archive(archive: &mut ExportArchive) -> Result<Self> {
        Self::from_archive_with_top(archive, SearchAnalyzer::DEFAULT_TOP_N)
    }

    /// Run the pipeline, ranking at most `top_terms` search terms.
    ///
    /// A stream whose member is missing contributes an empty record set;
    /// partial-data reports are preferred over all-or-nothing failure.
    /// Only when no stream resolves at all does this return
    /// [`Error::NoExportData`].
    pub fn from_archive_with_top(archive: &mut ExportArchive, top_terms: usize) -> Result<Self> {
        let watch_member = export::resolve(archive, RecordKind::Watch);
        let likes_member = export::resolve(archive, RecordKind::Likes);
        let searches_member = export::resolve(archive, RecordKind::Searches);

        if watch_member.is_none() && likes_member.is_none() && searches_member.is_none() {
            return Err(Error::NoExportData);
        }

        // The combined JSON export serves all three streams; cache member
        // text so it is read and decoded once.
        let mut cache: HashMap<String, String> = HashMap::new();

        let watches = match &watch_member {
            Some(name) => export::parse_watch(name, read_cached(archive, &mut cache, name)?)?,
            None => Vec::new(),
        };
        let likes = match &likes_member {
            Some(name) => export::parse_likes(name, read_cached(archive, &mut cache, name)?)?,
            None => Vec::new(),
        };
        let searches = match &searches_member {
            Some(name) => export::parse_searches(name, read_cached(archive, &mut cache, name)?)?,
            None => Vec::new(),
        };

        let records = ExportRecords {
            watches,
            likes,
            searches,
        };

        let activity = ActivityAnalyzer.analyze(&records)?;
        let engagement = EngagementAnalyzer.analyze(&records)?;
        let search = SearchAnalyzer::new(top_terms).analyze(&records)?;
        let persona = PersonaClassifier::classify(
            engagement.like_to_watch_ratio,
            activity.peak_hour,
            search.top_terms.first().map(|t| t.term.as_str()),
        );

        tracing::info!(
            "Report assembled: {} watches, {} likes, {} searches",
            engagement.watch_count,
            engagement.like_count,
            search.total_searches
        );

        Ok(Self {
            activity,
            engagement,
            search,
            persona,
        })
    }
}

fn read_cached<'a>(
    archive: &mut ExportArchive,
    cache: &'a mut HashMap<String, String>,
    name: &str,
) -> Result<&'a String> {
    if !cache.contains_key(name) {
        let text = archive.read_text(name)?;
        cache.insert(name.to_string(), text);
    }
    Ok(&cache[name])
}
