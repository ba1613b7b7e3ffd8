use url::Url;

/// Extract the host name from a URL, minus a leading `www.` prefix.
///
/// Total over arbitrary input: any parse failure yields an empty string.
/// Empty-string domains are excluded from domain aggregates downstream.
pub fn domain_of(url: &str) -> String {
    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::debug!("Failed to parse URL {}: {}", url, e);
            return String::new();
        }
    };

    let host = match parsed.host_str() {
        Some(host) => host,
        None => return String::new(),
    };

    host.strip_prefix("www.").unwrap_or(host).to_string()
}
