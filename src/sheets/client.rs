//! Google Sheets values gateway.

use anyhow::{Context, Result};
use async_trait::async_trait;
use google_sheets4::api::ValueRange;
use google_sheets4::hyper_rustls::HttpsConnector;
use google_sheets4::Sheets;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use serde_json::Value;

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::sheets::credentials;

/// Rectangular-range access to the configured spreadsheet.
///
/// The trait is the seam between the HTTP surface and the remote backend;
/// tests drive the routes against an in-memory implementation.
#[async_trait]
pub trait SheetStore: Send + Sync {
    /// Fetch a range as rows of cell strings. An empty range yields an
    /// empty vec, not an error.
    async fn get_values(&self, range: &str) -> Result<Vec<Vec<String>>>;

    /// Overwrite a range with the given rows, RAW input (no cell parsing).
    async fn update_values(&self, range: &str, values: Vec<Vec<String>>) -> Result<()>;
}

/// Client for the Google Sheets values API, pinned to a single spreadsheet.
pub struct SheetsClient {
    hub: Sheets<HttpsConnector<HttpConnector>>,
    spreadsheet_id: String,
}

impl SheetsClient {
    /// Build the hub from the configured service identity.
    ///
    /// Fails with `AuthBackend` if the key material is unusable, so startup
    /// aborts instead of every request failing later.
    pub async fn connect(config: &AppConfig) -> Result<Self, ApiError> {
        let auth = credentials::service_account_auth(config)
            .await
            .map_err(ApiError::AuthBackend)?;

        let connector = google_sheets4::hyper_rustls::HttpsConnectorBuilder::new()
            .with_native_roots()
            .context("Failed to load native TLS roots")
            .map_err(ApiError::AuthBackend)?
            .https_or_http()
            .enable_http1()
            .build();

        let client = Client::builder(TokioExecutor::new()).build(connector);
        let hub = Sheets::new(client, auth);

        Ok(Self {
            hub,
            spreadsheet_id: config.sheet_id.clone(),
        })
    }
}

/// Cells come back as JSON values; anything non-string keeps its JSON form.
fn cell_to_string(cell: Value) -> String {
    match cell {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

#[async_trait]
impl SheetStore for SheetsClient {
    async fn get_values(&self, range: &str) -> Result<Vec<Vec<String>>> {
        let (_, value_range) = self
            .hub
            .spreadsheets()
            .values_get(&self.spreadsheet_id, range)
            .doit()
            .await
            .with_context(|| format!("Failed to fetch range {}", range))?;

        let rows = value_range
            .values
            .unwrap_or_default()
            .into_iter()
            .map(|row| row.into_iter().map(cell_to_string).collect())
            .collect();

        Ok(rows)
    }

    async fn update_values(&self, range: &str, values: Vec<Vec<String>>) -> Result<()> {
        let body = ValueRange {
            major_dimension: None,
            range: None,
            values: Some(
                values
                    .into_iter()
                    .map(|row| row.into_iter().map(Value::String).collect())
                    .collect(),
            ),
        };

        self.hub
            .spreadsheets()
            .values_update(body, &self.spreadsheet_id, range)
            .value_input_option("RAW")
            .doit()
            .await
            .with_context(|| format!("Failed to update range {}", range))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_to_string_keeps_strings_verbatim() {
        assert_eq!(cell_to_string(Value::String("5550001".into())), "5550001");
    }

    #[test]
    fn test_cell_to_string_renders_non_strings() {
        assert_eq!(cell_to_string(serde_json::json!(42)), "42");
        assert_eq!(cell_to_string(Value::Bool(true)), "true");
    }
}
