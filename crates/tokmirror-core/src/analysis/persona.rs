use serde::{Deserialize, Serialize};

/// Human-readable summary of a user's aggregate behavior signals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Persona {
    pub engagement: String,
    pub time_of_day: String,
    pub top_interest: String,
    pub label: String,
}

/// Maps aggregate signals to a persona label via fixed thresholds.
///
/// Total: any combination of (possibly empty) inputs yields a label.
pub struct PersonaClassifier;

impl PersonaClassifier {
    pub fn classify(ratio: f64, peak_hour: Option<u32>, top_term: Option<&str>) -> Persona {
        let engagement = Self::engagement_tier(ratio);
        let time_of_day = Self::time_tier(peak_hour);
        let top_interest = top_term.unwrap_or("everything").to_string();

        let label = format!("{engagement} {time_of_day} Viewer — Likely into {top_interest}");
        tracing::debug!("Classified persona: {}", label);

        Persona {
            engagement: engagement.to_string(),
            time_of_day: time_of_day.to_string(),
            top_interest,
            label,
        }
    }

    fn engagement_tier(ratio: f64) -> &'static str {
        if ratio > 0.5 {
            "Highly Engaged"
        } else if ratio > 0.2 {
            "Moderately Engaged"
        } else {
            "Passive"
        }
    }

    /// Empty per-hour histograms fall back to a neutral "Anytime" tier
    fn time_tier(peak_hour: Option<u32>) -> &'static str {
        match peak_hour {
            Some(0..=5) => "Late Night",
            Some(6..=11) => "Morning",
            Some(12..=17) => "Afternoon",
            Some(_) => "Evening",
            None => "Anytime",
        }
    }
}
