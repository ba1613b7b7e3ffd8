use crate::domain::domain_of;
use chrono::{NaiveDateTime, Timelike};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref VIDEO_ID: Regex = Regex::new(r"video/(\d+)").unwrap();
}

/// Extract the digits immediately following the `video/` path segment
pub fn video_id(url: &str) -> Option<String> {
    VIDEO_ID.captures(url).map(|caps| caps[1].to_string())
}

/// Time-of-day bucket for the hour component of a watch timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
    Unknown,
}

impl TimeOfDay {
    /// Bucket an hour (0-23): [5,12) morning, [12,17) afternoon,
    /// [17,21) evening, else night. A missing hour is `Unknown`.
    pub fn from_hour(hour: Option<u32>) -> Self {
        match hour {
            Some(5..=11) => TimeOfDay::Morning,
            Some(12..=16) => TimeOfDay::Afternoon,
            Some(17..=20) => TimeOfDay::Evening,
            Some(_) => TimeOfDay::Night,
            None => TimeOfDay::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
            TimeOfDay::Night => "night",
            TimeOfDay::Unknown => "unknown",
        }
    }
}

/// One watched video, normalized from either export layout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchEvent {
    pub url: String,
    /// Raw "<date> <time>" string as it appeared in the export
    pub timestamp: String,
    /// Calendar-date portion of the timestamp ("" when absent)
    pub date: String,
    /// Hour component, 0-23 (None when unparseable)
    pub hour: Option<u32>,
    pub time_of_day: TimeOfDay,
    /// Host name of the video URL; "" for malformed URLs
    pub domain: String,
    pub video_id: Option<String>,
}

impl WatchEvent {
    pub fn from_raw(url: String, timestamp: &str) -> Self {
        let (date, hour) = split_timestamp(timestamp);
        let domain = domain_of(&url);
        let video_id = video_id(&url);
        Self {
            timestamp: timestamp.trim().to_string(),
            date,
            hour,
            time_of_day: TimeOfDay::from_hour(hour),
            domain,
            video_id,
            url,
        }
    }
}

/// One liked video
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikeEvent {
    pub url: String,
    pub domain: String,
}

impl LikeEvent {
    pub fn from_url(url: String) -> Self {
        let domain = domain_of(&url);
        Self { url, domain }
    }
}

/// One search, case-normalized
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchEvent {
    pub term: String,
}

impl SearchEvent {
    /// Lowercase and trim the raw term; empty terms yield None
    pub fn from_raw(raw: &str) -> Option<Self> {
        let term = raw.trim().to_lowercase();
        if term.is_empty() {
            None
        } else {
            Some(Self { term })
        }
    }
}

/// Split a raw "<date> <time>" timestamp into its calendar date and hour.
///
/// Well-formed timestamps go through chrono; anything else falls back to
/// a whitespace split so partial data still yields a date. Never fails.
fn split_timestamp(timestamp: &str) -> (String, Option<u32>) {
    let timestamp = timestamp.trim();
    if let Ok(parsed) = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M:%S") {
        return (parsed.date().to_string(), Some(parsed.hour()));
    }

    let mut parts = timestamp.splitn(2, ' ');
    let date = parts.next().unwrap_or("").to_string();
    let hour = parts
        .next()
        .and_then(|time| time.split(':').next())
        .and_then(|h| h.trim().parse::<u32>().ok())
        .filter(|h| *h < 24);
    (date, hour)
}
