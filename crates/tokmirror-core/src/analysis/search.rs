use super::{Analyzer, SearchStats, TermCount, count_first_seen};
use crate::Result;
use crate::export::{ExportRecords, SearchEvent};

/// Ranks search terms by frequency
pub struct SearchAnalyzer {
    top_n: usize,
}

impl SearchAnalyzer {
    pub const DEFAULT_TOP_N: usize = 10;

    pub fn new(top_n: usize) -> Self {
        Self { top_n }
    }
}

impl Default for SearchAnalyzer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TOP_N)
    }
}

impl Analyzer for SearchAnalyzer {
    type Output = SearchStats;

    fn analyze(&self, records: &ExportRecords) -> Result<Self::Output> {
        let total_searches = records.searches.len();

        let mut top_terms = term_counts(&records.searches);
        // Stable sort: equally-counted terms keep first-seen order
        top_terms.sort_by(|a, b| b.count.cmp(&a.count));
        top_terms.truncate(self.top_n);

        tracing::debug!(
            "Search analysis: {} searches, {} ranked terms",
            total_searches,
            top_terms.len()
        );

        Ok(SearchStats {
            total_searches,
            top_terms,
        })
    }
}

/// Per-term frequencies in first-seen order, unranked
pub fn term_counts(searches: &[SearchEvent]) -> Vec<TermCount> {
    count_first_seen(searches.iter().map(|s| s.term.as_str()))
        .into_iter()
        .map(|(term, count)| TermCount { term, count })
        .collect()
}
