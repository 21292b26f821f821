//! Wikipedia yearly-summary fetcher.
//!
//! Year pages (e.g. <https://en.wikipedia.org/wiki/1925>) are retrieved as
//! plain text through the MediaWiki query API with `prop=extracts` and
//! `explaintext=true`. The response is JSON keyed by page id; the first page
//! carrying an `extract` field supplies the document text.
//!
//! A missing page, an empty extract, or an unexpectedly-shaped response all
//! yield the [`NO_INFORMATION`] sentinel rather than an error. Transport
//! failures and unparseable JSON propagate to the caller and end the run.

use crate::collector::FetchYear;
use crate::utils::truncate_for_log;
use reqwest::get;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::error::Error;
use tracing::{debug, info, instrument};
use url::Url;

/// The MediaWiki API endpoint for the English Wikipedia.
const API_ENDPOINT: &str = "https://en.wikipedia.org/w/api.php";

/// Sentinel returned when a year page has no usable extract text.
///
/// The collector passes it straight into categorization, where it matches
/// no keywords and produces an empty result for that year.
pub const NO_INFORMATION: &str = "No relevant information found.";

/// Shape of the `action=query&prop=extracts` response.
///
/// Every level defaults so that a response missing `query` or `pages`
/// decodes to "no extract" instead of failing.
#[derive(Debug, Default, Deserialize)]
struct ExtractResponse {
    #[serde(default)]
    query: QuerySection,
}

#[derive(Debug, Default, Deserialize)]
struct QuerySection {
    #[serde(default)]
    pages: BTreeMap<String, Page>,
}

#[derive(Debug, Default, Deserialize)]
struct Page {
    extract: Option<String>,
}

/// Client for fetching yearly summary text from Wikipedia.
#[derive(Debug, Default)]
pub struct WikipediaClient;

impl WikipediaClient {
    pub fn new() -> Self {
        Self
    }

    /// Build the extracts query URL for one year page.
    fn query_url(year: i32) -> Result<Url, Box<dyn Error>> {
        let url = Url::parse_with_params(
            API_ENDPOINT,
            &[
                ("action", "query"),
                ("format", "json"),
                ("prop", "extracts"),
                ("explaintext", "true"),
                ("titles", &year.to_string()),
            ],
        )?;
        Ok(url)
    }
}

impl FetchYear for WikipediaClient {
    #[instrument(level = "info", skip(self))]
    async fn fetch(&self, year: i32) -> Result<String, Box<dyn Error>> {
        let url = Self::query_url(year)?;
        let body = get(url).await?.text().await?;
        let response: ExtractResponse = serde_json::from_str(&body)?;

        let extract = response
            .query
            .pages
            .into_values()
            .find_map(|page| page.extract)
            .unwrap_or_default();

        let extract = extract.trim();
        if extract.is_empty() {
            info!(year, "No extract for year page; using sentinel");
            return Ok(NO_INFORMATION.to_string());
        }

        info!(year, bytes = extract.len(), "Fetched year extract");
        debug!(preview = %truncate_for_log(extract, 200), "Extract preview");
        Ok(extract.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_url_contains_all_params() {
        let url = WikipediaClient::query_url(1925).unwrap();
        let s = url.as_str();
        assert!(s.starts_with("https://en.wikipedia.org/w/api.php?"));
        assert!(s.contains("action=query"));
        assert!(s.contains("format=json"));
        assert!(s.contains("prop=extracts"));
        assert!(s.contains("explaintext=true"));
        assert!(s.contains("titles=1925"));
    }

    #[test]
    fn test_response_with_extract() {
        let body = r#"{"query":{"pages":{"36357":{"extract":"Events of 1925.\n"}}}}"#;
        let response: ExtractResponse = serde_json::from_str(body).unwrap();
        let extract = response
            .query
            .pages
            .into_values()
            .find_map(|p| p.extract)
            .unwrap();
        assert_eq!(extract.trim(), "Events of 1925.");
    }

    #[test]
    fn test_missing_query_section_decodes_to_no_pages() {
        let response: ExtractResponse = serde_json::from_str("{}").unwrap();
        assert!(response.query.pages.is_empty());
    }

    #[test]
    fn test_page_without_extract() {
        let body = r#"{"query":{"pages":{"-1":{"ns":0,"title":"1925","missing":""}}}}"#;
        let response: ExtractResponse = serde_json::from_str(body).unwrap();
        let extract = response.query.pages.into_values().find_map(|p| p.extract);
        assert!(extract.is_none());
    }

    #[test]
    fn test_syntactically_invalid_body_is_an_error() {
        let result: Result<ExtractResponse, _> = serde_json::from_str("<html></html>");
        assert!(result.is_err());
    }
}
