//! Presidents API client
//!
//! Fetches the presidential term list from the sample API and maps wire
//! records into typed [`TermRecord`]s. Records missing required fields are
//! quarantined at the deserialization boundary rather than propagated.

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use super::TermRecord;

/// Default endpoint serving the presidential term dataset
pub const DEFAULT_API_URL: &str = "https://api.sampleapis.com/presidents/presidents";

/// Errors that can occur when fetching the term list
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed or returned a non-success status
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Response body was not the expected JSON array
    #[error("Failed to parse API response: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// A single record as served by the API, before validation
///
/// Fields are optional on the wire; [`filter_records`] drops entries that
/// are missing either one.
#[derive(Debug, Deserialize)]
struct ApiRecord {
    /// President name, if present
    name: Option<String>,
    /// Tenure-range expression, if present
    #[serde(rename = "yearsInOffice")]
    years_in_office: Option<String>,
}

/// Client for fetching the presidential term dataset
#[derive(Debug, Clone)]
pub struct PresidentsClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Endpoint serving the dataset
    api_url: String,
}

impl PresidentsClient {
    /// Creates a new client for the given endpoint
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_url: api_url.into(),
        }
    }

    /// Fetches the full term list from the API
    ///
    /// Issues a single GET with no retries. A transport failure, a
    /// non-success status, or a malformed body fails the whole fetch;
    /// individual records missing `name` or `yearsInOffice` are dropped
    /// with a warning.
    ///
    /// # Returns
    /// * `Ok(Vec<TermRecord>)` - The validated term records
    /// * `Err(FetchError)` - If the request or decoding fails
    pub async fn fetch_presidents(&self) -> Result<Vec<TermRecord>, FetchError> {
        let response = self
            .http_client
            .get(&self.api_url)
            .send()
            .await?
            .error_for_status()?;

        let text = response.text().await?;
        let raw: Vec<ApiRecord> = serde_json::from_str(&text)?;

        Ok(filter_records(raw))
    }
}

impl Default for PresidentsClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

/// Drops wire records that are missing required fields
fn filter_records(raw: Vec<ApiRecord>) -> Vec<TermRecord> {
    raw.into_iter()
        .filter_map(|record| match (record.name, record.years_in_office) {
            (Some(name), Some(years_in_office)) => Some(TermRecord {
                name,
                years_in_office,
            }),
            (name, _) => {
                warn!(
                    name = name.as_deref().unwrap_or("<unnamed>"),
                    "dropping record with missing fields"
                );
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> Vec<ApiRecord> {
        serde_json::from_str(json).expect("Failed to decode test payload")
    }

    #[test]
    fn test_filter_records_keeps_complete_entries() {
        let raw = decode(
            r#"[
                {"name": "George Washington", "yearsInOffice": "1789-1797"},
                {"name": "John Adams", "yearsInOffice": "1797-1801"}
            ]"#,
        );

        let records = filter_records(raw);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "George Washington");
        assert_eq!(records[1].years_in_office, "1797-1801");
    }

    #[test]
    fn test_filter_records_drops_missing_name() {
        let raw = decode(r#"[{"yearsInOffice": "1789-1797"}]"#);
        assert!(filter_records(raw).is_empty());
    }

    #[test]
    fn test_filter_records_drops_missing_years() {
        let raw = decode(r#"[{"name": "George Washington"}]"#);
        assert!(filter_records(raw).is_empty());
    }

    #[test]
    fn test_filter_records_drops_null_fields() {
        let raw = decode(
            r#"[
                {"name": null, "yearsInOffice": "1789-1797"},
                {"name": "John Adams", "yearsInOffice": null},
                {"name": "Thomas Jefferson", "yearsInOffice": "1801-1809"}
            ]"#,
        );

        let records = filter_records(raw);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Thomas Jefferson");
    }

    #[test]
    fn test_filter_records_preserves_order() {
        let raw = decode(
            r#"[
                {"name": "George Washington", "yearsInOffice": "1789-1797"},
                {"yearsInOffice": "dropped"},
                {"name": "Thomas Jefferson", "yearsInOffice": "1801-1809"}
            ]"#,
        );

        let records = filter_records(raw);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "George Washington");
        assert_eq!(records[1].name, "Thomas Jefferson");
    }

    #[test]
    fn test_unexpected_extra_fields_are_ignored() {
        let raw = decode(
            r#"[{"name": "George Washington", "yearsInOffice": "1789-1797", "id": 1, "photo": "url"}]"#,
        );

        let records = filter_records(raw);

        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_client_uses_configured_url() {
        let client = PresidentsClient::new("http://localhost:9999/presidents");
        assert_eq!(client.api_url, "http://localhost:9999/presidents");
    }

    #[test]
    fn test_default_client_targets_sample_api() {
        let client = PresidentsClient::default();
        assert!(client.api_url.contains("sampleapis.com"));
    }
}
