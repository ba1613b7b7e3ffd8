use super::{Analyzer, EngagementStats};
use crate::Result;
use crate::export::ExportRecords;

/// Relates the like stream to the watch stream
pub struct EngagementAnalyzer;

impl Analyzer for EngagementAnalyzer {
    type Output = EngagementStats;

    fn analyze(&self, records: &ExportRecords) -> Result<Self::Output> {
        let watch_count = records.watches.len();
        let like_count = records.likes.len();

        // Unclamped: a user can like more than they watch
        let like_to_watch_ratio = if watch_count > 0 {
            like_count as f64 / watch_count as f64
        } else {
            0.0
        };

        tracing::debug!(
            "Engagement: {} watches, {} likes, ratio {:.3}",
            watch_count,
            like_count,
            like_to_watch_ratio
        );

        Ok(EngagementStats {
            watch_count,
            like_count,
            like_to_watch_ratio,
        })
    }
}
