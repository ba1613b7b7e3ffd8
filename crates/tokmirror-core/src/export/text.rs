//! Plain-text export layout: colon-prefixed key/value blocks.
//!
//! A `Date:` line sets the current timestamp context, retained until the
//! next `Date:` line. Each `Link:` line emits an entry with that context.
//! `SearchTerm:` lines are independent of the context. Everything else is
//! ignored.

const DATE_PREFIX: &str = "Date:";
const LINK_PREFIX: &str = "Link:";
const SEARCH_PREFIX: &str = "SearchTerm:";

/// One `Link:` line paired with its owning `Date:` context.
///
/// `timestamp` is empty when the link preceded any `Date:` line.
#[derive(Debug, Clone)]
pub struct LinkEntry {
    pub url: String,
    pub timestamp: String,
}

/// Outcome of scanning one plain-text member
#[derive(Debug, Default)]
pub struct TextScan {
    pub entries: Vec<LinkEntry>,
    pub searches: Vec<String>,
}

/// Scan a plain-text member, folding the timestamp context across lines
pub fn scan(text: &str) -> TextScan {
    struct Context {
        scan: TextScan,
        current_timestamp: String,
    }

    let folded = text.lines().map(str::trim).fold(
        Context {
            scan: TextScan::default(),
            current_timestamp: String::new(),
        },
        |mut ctx, line| {
            if let Some(value) = line.strip_prefix(DATE_PREFIX) {
                ctx.current_timestamp = value.trim().to_string();
            } else if let Some(value) = line.strip_prefix(LINK_PREFIX) {
                ctx.scan.entries.push(LinkEntry {
                    url: value.trim().to_string(),
                    timestamp: ctx.current_timestamp.clone(),
                });
            } else if let Some(value) = line.strip_prefix(SEARCH_PREFIX) {
                ctx.scan.searches.push(value.trim().to_string());
            }
            ctx
        },
    );

    tracing::debug!(
        "Text scan found {} link entries, {} search terms",
        folded.scan.entries.len(),
        folded.scan.searches.len()
    );
    folded.scan
}

/// Check whether any line carries one of the known prefixes
pub fn has_known_prefixes(text: &str) -> bool {
    text.lines().map(str::trim).any(|line| {
        line.starts_with(DATE_PREFIX)
            || line.starts_with(LINK_PREFIX)
            || line.starts_with(SEARCH_PREFIX)
    })
}
