use super::{
    ActivityStats, Analyzer, DateCount, HourCount, RepeatView, count_first_seen, domain_counts,
};
use crate::Result;
use crate::export::ExportRecords;
use std::collections::HashMap;

/// Aggregates watch events into date, hour, domain and repeat-view counts
pub struct ActivityAnalyzer;

impl Analyzer for ActivityAnalyzer {
    type Output = ActivityStats;

    fn analyze(&self, records: &ExportRecords) -> Result<Self::Output> {
        tracing::debug!("Analyzing activity over {} watch events", records.watches.len());

        let watches = &records.watches;

        // Events with no parseable date are excluded here, matching the
        // empty-domain exclusion rule.
        let mut per_date: Vec<DateCount> =
            count_first_seen(watches.iter().map(|w| w.date.as_str()).filter(|d| !d.is_empty()))
                .into_iter()
                .map(|(date, count)| DateCount { date, count })
                .collect();
        per_date.sort_by(|a, b| a.date.cmp(&b.date));

        let mut hour_counts: HashMap<u32, usize> = HashMap::new();
        for watch in watches {
            if let Some(hour) = watch.hour {
                *hour_counts.entry(hour).or_insert(0) += 1;
            }
        }
        let mut ordered_hours: Vec<(u32, usize)> =
            hour_counts.into_iter().collect();
        ordered_hours.sort_by_key(|(hour, _)| *hour);

        // Ascending scan with strict > keeps the lowest hour on ties
        let mut peak_hour = None;
        let mut peak_count = 0;
        for (hour, count) in &ordered_hours {
            if *count > peak_count {
                peak_count = *count;
                peak_hour = Some(*hour);
            }
        }

        let per_hour: Vec<HourCount> = ordered_hours
            .into_iter()
            .map(|(hour, count)| HourCount {
                hour: format!("{hour}:00"),
                count,
            })
            .collect();

        let per_domain = domain_counts(watches.iter().map(|w| w.domain.as_str()));

        let repeat_views: Vec<RepeatView> =
            count_first_seen(watches.iter().map(|w| w.url.as_str()))
                .into_iter()
                .filter(|(_, count)| *count > 1)
                .map(|(url, count)| RepeatView { url, count })
                .collect();

        tracing::info!(
            "Activity analysis complete: {} dates, {} domains, {} repeat views",
            per_date.len(),
            per_domain.len(),
            repeat_views.len()
        );

        Ok(ActivityStats {
            per_date,
            per_hour,
            per_domain,
            repeat_views,
            peak_hour,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::WatchEvent;

    fn records(watches: Vec<WatchEvent>) -> ExportRecords {
        ExportRecords {
            watches,
            ..ExportRecords::default()
        }
    }

    fn watch(url: &str, timestamp: &str) -> WatchEvent {
        WatchEvent::from_raw(url.to_string(), timestamp)
    }

    #[test]
    fn test_per_date_sorted_ascending() {
        let stats = ActivityAnalyzer
            .analyze(&records(vec![
                watch("https://a/video/1", "2024-02-01 10:00:00"),
                watch("https://a/video/2", "2024-01-05 09:00:00"),
                watch("https://a/video/3", "2024-01-05 21:00:00"),
            ]))
            .unwrap();

        assert_eq!(stats.per_date.len(), 2);
        assert_eq!(stats.per_date[0].date, "2024-01-05");
        assert_eq!(stats.per_date[0].count, 2);
        assert_eq!(stats.per_date[1].date, "2024-02-01");
    }

    #[test]
    fn test_per_hour_labels() {
        let stats = ActivityAnalyzer
            .analyze(&records(vec![
                watch("https://a/video/1", "2024-01-05 09:15:00"),
                watch("https://a/video/2", "2024-01-06 09:45:00"),
                watch("https://a/video/3", "2024-01-06 21:00:00"),
            ]))
            .unwrap();

        assert_eq!(stats.per_hour.len(), 2);
        assert_eq!(stats.per_hour[0].hour, "9:00");
        assert_eq!(stats.per_hour[0].count, 2);
        assert_eq!(stats.per_hour[1].hour, "21:00");
        assert_eq!(stats.peak_hour, Some(9));
    }

    #[test]
    fn test_peak_hour_tie_takes_lowest() {
        let stats = ActivityAnalyzer
            .analyze(&records(vec![
                watch("https://a/video/1", "2024-01-05 21:00:00"),
                watch("https://a/video/2", "2024-01-06 09:00:00"),
            ]))
            .unwrap();
        assert_eq!(stats.peak_hour, Some(9));
    }

    #[test]
    fn test_repeat_views_multiplicity() {
        let stats = ActivityAnalyzer
            .analyze(&records(vec![
                watch("https://a/video/1", "2024-01-05 09:00:00"),
                watch("https://a/video/2", "2024-01-05 10:00:00"),
                watch("https://a/video/1", "2024-01-05 11:00:00"),
                watch("https://a/video/1", "2024-01-05 12:00:00"),
            ]))
            .unwrap();

        // A url seen once never appears; one seen n>1 times appears once with count=n
        assert_eq!(stats.repeat_views.len(), 1);
        assert_eq!(stats.repeat_views[0].url, "https://a/video/1");
        assert_eq!(stats.repeat_views[0].count, 3);
    }

    #[test]
    fn test_empty_domains_and_dates_excluded() {
        let stats = ActivityAnalyzer
            .analyze(&records(vec![
                watch("not a url", ""),
                watch("https://www.tiktok.com/video/1", "2024-01-05 09:00:00"),
            ]))
            .unwrap();

        assert_eq!(stats.per_domain.len(), 1);
        assert_eq!(stats.per_domain[0].domain, "tiktok.com");
        assert_eq!(stats.per_date.len(), 1);
    }

    #[test]
    fn test_empty_input() {
        let stats = ActivityAnalyzer.analyze(&ExportRecords::default()).unwrap();
        assert!(stats.per_date.is_empty());
        assert!(stats.per_hour.is_empty());
        assert!(stats.repeat_views.is_empty());
        assert_eq!(stats.peak_hour, None);
    }

    #[test]
    fn test_deterministic() {
        let input = records(vec![
            watch("https://a/video/1", "2024-01-05 09:00:00"),
            watch("https://a/video/1", "2024-01-06 10:00:00"),
        ]);
        let first = ActivityAnalyzer.analyze(&input).unwrap();
        let second = ActivityAnalyzer.analyze(&input).unwrap();
        assert_eq!(first.per_date.len(), second.per_date.len());
        assert_eq!(first.repeat_views[0].count, second.repeat_views[0].count);
    }
}
