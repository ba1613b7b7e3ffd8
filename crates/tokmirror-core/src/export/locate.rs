//! Member-name resolution for each record stream.
//!
//! Precedence is JSON-first: the combined `user_data_tiktok.json` is tried
//! before a standalone JSON member, which is tried before the plain-text
//! member. First matching member wins, in the archive's listing order.

use crate::archive::{ExportArchive, MemberPattern};

/// The three record streams an export can contain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Watch,
    Likes,
    Searches,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Watch => "watch history",
            RecordKind::Likes => "like list",
            RecordKind::Searches => "searches",
        }
    }

    fn candidates(self) -> Vec<MemberPattern> {
        match self {
            RecordKind::Watch => vec![
                MemberPattern::contains("user_data_tiktok.json"),
                MemberPattern::contains("watchhistory.json"),
                MemberPattern::contains("watch history.txt"),
            ],
            RecordKind::Likes => vec![
                MemberPattern::contains("user_data_tiktok.json"),
                MemberPattern::contains("likes.json"),
                MemberPattern::contains("like list.txt"),
            ],
            RecordKind::Searches => vec![
                MemberPattern::contains("user_data_tiktok.json"),
                MemberPattern::ends_with("searches.txt"),
            ],
        }
    }
}

/// Resolve the member carrying a record stream, if any
pub fn resolve(archive: &ExportArchive, kind: RecordKind) -> Option<String> {
    let member = kind
        .candidates()
        .iter()
        .find_map(|pattern| archive.find_member(pattern).map(str::to_string));

    match &member {
        Some(name) => tracing::debug!("Resolved {} stream to member '{}'", kind.as_str(), name),
        None => tracing::info!("No member found for {} stream", kind.as_str()),
    }
    member
}
