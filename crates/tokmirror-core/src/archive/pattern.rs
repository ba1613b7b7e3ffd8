/// Represents a name pattern for locating archive members
#[derive(Debug, Clone)]
pub enum MemberPattern {
    /// Substring match anywhere in the member name (case-insensitive)
    Contains(String),
    /// Suffix match on the member name (case-insensitive)
    EndsWith(String),
}

impl MemberPattern {
    pub fn contains(needle: &str) -> Self {
        MemberPattern::Contains(needle.to_lowercase())
    }

    pub fn ends_with(suffix: &str) -> Self {
        MemberPattern::EndsWith(suffix.to_lowercase())
    }

    /// Check if a member name matches this pattern
    ///
    /// Matching is case-insensitive for both variants.
    pub fn matches(&self, member_name: &str) -> bool {
        let name_lower = member_name.to_lowercase();
        match self {
            MemberPattern::Contains(needle) => name_lower.contains(needle),
            MemberPattern::EndsWith(suffix) => name_lower.ends_with(suffix),
        }
    }
}
