// src/core/net.rs
//
// The fetch layer: URL in, CSV text out. Knows nothing about pages or tables.
// A non-success status is an error carrying the status code; the body of an
// error response is never handed to the decoder.

use reqwest::Url;
use reqwest::blocking::Client;
use reqwest::header::CACHE_CONTROL;

use crate::csv;
use crate::error::LoadError;
use crate::record::RowRecord;

#[derive(Clone, Debug)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new() -> Result<Self, LoadError> {
        let client = Client::builder()
            .user_agent(concat!("capita_score/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    /// Use a preconfigured client (proxy settings, timeouts, test stubs).
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    /// GET `url` and return the body as text. Exports change between loads,
    /// so intermediaries are asked not to cache.
    pub fn fetch_text(&self, url: &str) -> Result<String, LoadError> {
        logd!("Fetch: GET {url}");
        let res = self.client.get(url).header(CACHE_CONTROL, "no-store").send()?;

        let status = res.status();
        if !status.is_success() {
            return Err(LoadError::Http { status: status.as_u16(), url: s!(url) });
        }
        let text = res.text()?;
        logd!("Fetch: OK {url} ({} bytes)", text.len());
        Ok(text)
    }

    /// Fetch and decode in one step.
    pub fn fetch_csv(&self, url: &str) -> Result<Vec<RowRecord>, LoadError> {
        let text = self.fetch_text(url)?;
        Ok(csv::decode(&text))
    }
}

/// Resolve a source file name against the data base URL.
pub fn resolve_source(base: &str, name: &str) -> Result<String, LoadError> {
    let base_url = Url::parse(base).map_err(|e| LoadError::InvalidUrl {
        url: s!(base),
        reason: e.to_string(),
    })?;
    let full = base_url.join(name).map_err(|e| LoadError::InvalidUrl {
        url: join!(base, name),
        reason: e.to_string(),
    })?;
    Ok(full.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_inside_base_dir() {
        let url = resolve_source("http://localhost:8000/assets/data/", "a.csv").unwrap();
        assert_eq!(url, "http://localhost:8000/assets/data/a.csv");
    }

    #[test]
    fn base_without_trailing_slash_replaces_last_segment() {
        let url = resolve_source("http://localhost:8000/assets/data", "a.csv").unwrap();
        assert_eq!(url, "http://localhost:8000/assets/a.csv");
    }

    #[test]
    fn bad_base_is_reported() {
        let err = resolve_source("not a url", "a.csv").unwrap_err();
        assert!(matches!(err, LoadError::InvalidUrl { .. }));
    }
}
