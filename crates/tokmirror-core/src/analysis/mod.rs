mod activity;
mod engagement;
mod persona;
mod search;

pub use activity::ActivityAnalyzer;
pub use engagement::EngagementAnalyzer;
pub use persona::{Persona, PersonaClassifier};
pub use search::{SearchAnalyzer, term_counts};

use crate::export::ExportRecords;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateCount {
    pub date: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourCount {
    /// Hour-of-day label, e.g. "9:00"
    pub hour: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainCount {
    pub domain: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermCount {
    pub term: String,
    pub count: usize,
}

/// A URL watched more than once
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepeatView {
    pub url: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityStats {
    /// Watch counts per calendar date, ascending
    pub per_date: Vec<DateCount>,
    /// Watch counts per hour of day, ascending by hour
    pub per_hour: Vec<HourCount>,
    /// Watch counts per domain, descending by count
    pub per_domain: Vec<DomainCount>,
    /// URLs watched more than once, in first-seen order
    pub repeat_views: Vec<RepeatView>,
    /// Hour with the highest watch count; ties go to the lowest hour
    pub peak_hour: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngagementStats {
    pub watch_count: usize,
    pub like_count: usize,
    /// likes / watches; 0.0 when there are no watches, unclamped otherwise
    pub like_to_watch_ratio: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchStats {
    pub total_searches: usize,
    /// Highest-count terms, descending; ties keep first-seen order
    pub top_terms: Vec<TermCount>,
}

pub trait Analyzer {
    type Output;

    fn analyze(&self, records: &ExportRecords) -> crate::Result<Self::Output>;
}

/// Count occurrences while preserving first-seen key order
pub(crate) fn count_first_seen<'a, I>(keys: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();
    for key in keys {
        match index.get(key) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(key.to_string(), counts.len());
                counts.push((key.to_string(), 1));
            }
        }
    }
    counts
}

/// Count non-empty domains, descending by count, first-seen on ties
pub fn domain_counts<'a, I>(domains: I) -> Vec<DomainCount>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: Vec<DomainCount> =
        count_first_seen(domains.into_iter().filter(|d| !d.is_empty()))
            .into_iter()
            .map(|(domain, count)| DomainCount { domain, count })
            .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_first_seen_order() {
        let counts = count_first_seen(["b", "a", "b", "c", "a", "b"]);
        assert_eq!(
            counts,
            vec![
                ("b".to_string(), 3),
                ("a".to_string(), 2),
                ("c".to_string(), 1)
            ]
        );
    }

    #[test]
    fn test_domain_counts_exclude_empty() {
        let counts = domain_counts(["tiktok.com", "", "vm.tiktok.com", "tiktok.com", ""]);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].domain, "tiktok.com");
        assert_eq!(counts[0].count, 2);
        assert_eq!(counts[1].domain, "vm.tiktok.com");
    }
}
