use url::Url;

/// Host name of `url` without a leading `www.`.
///
/// Input that does not parse as an absolute URL is returned unchanged.
/// URLs without a host (`mailto:`, `data:`) yield an empty string.
pub fn extract_domain(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => {
            let host = parsed.host_str().unwrap_or_default();
            host.strip_prefix("www.").unwrap_or(host).to_string()
        }
        Err(e) => {
            tracing::debug!(url, error = %e, "URL parse failed, returning input unchanged");
            url.to_string()
        }
    }
}
