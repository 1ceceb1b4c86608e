//! # sheetlink-http
//!
//! HTTP client for the Sheets v4 REST API.
//!
//! [`SheetsHttpClient`] implements [`SpreadsheetService`] so a
//! `SheetsConnection` can talk to the real backend. Supports HTTP/2 via ALPN
//! negotiation with fallback to HTTP/1.1.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use sheetlink_core::model::{
    AppendValuesRequest, AppendValuesResponse, BatchRequest, BatchUpdateResponse,
    ClearValuesRequest, ClearValuesResponse, GetValuesRequest, Grid, SpreadsheetMetadata,
    UpdateValuesRequest, UpdateValuesResponse, ValueRange,
};
use sheetlink_core::{Credentials, SheetsError, SheetsResult, SpreadsheetService};
use std::time::Duration;

/// Production endpoint of the Sheets API.
pub const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com";

/// Fields requested when describing a spreadsheet.
const METADATA_FIELDS: &str = "sheets.properties(sheetId,title),namedRanges";

/// Sheets v4 REST client.
#[derive(Debug, Clone)]
pub struct SheetsHttpClient {
    client: Client,
    base_url: Url,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ValuesBody<'a> {
    range: &'a str,
    values: &'a Grid,
}

#[derive(Serialize)]
struct BatchBody<'a> {
    requests: &'a [BatchRequest],
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: String,
}

fn flag(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

impl SheetsHttpClient {
    /// Constructs a client against [`DEFAULT_BASE_URL`] with a 30-second timeout.
    ///
    /// # Errors
    ///
    /// Returns `SheetsError::Transport` if building the underlying HTTP client fails.
    pub fn new() -> SheetsResult<Self> {
        Self::with_timeout(30)
    }

    /// Constructs a client with a custom per-request timeout in seconds.
    ///
    /// # Examples
    ///
    /// ```
    /// let client = sheetlink_http::SheetsHttpClient::with_timeout(10).unwrap();
    /// assert_eq!(client.base_url().as_str(), "https://sheets.googleapis.com/");
    /// ```
    pub fn with_timeout(timeout_secs: u64) -> SheetsResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            // Disable system proxy lookup to avoid macOS system-configuration issues
            .no_proxy()
            .build()
            .map_err(|e| SheetsError::Transport(e.to_string()))?;

        let base_url =
            Url::parse(DEFAULT_BASE_URL).map_err(|e| SheetsError::Transport(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    /// Point the client at another host, e.g. a mock server.
    pub fn with_base_url(mut self, base_url: &str) -> SheetsResult<Self> {
        let url = Url::parse(base_url)
            .map_err(|e| SheetsError::Transport(format!("invalid base URL {base_url}: {e}")))?;
        if url.cannot_be_a_base() {
            return Err(SheetsError::Transport(format!(
                "invalid base URL {base_url}"
            )));
        }
        self.base_url = url;
        Ok(self)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/v4/spreadsheets/...` with each segment percent-encoded.
    fn url(&self, segments: &[&str]) -> SheetsResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| SheetsError::Transport(format!("invalid base URL {}", self.base_url)))?
            .pop_if_empty()
            .extend(["v4", "spreadsheets"])
            .extend(segments);
        Ok(url)
    }

    fn values_url(&self, spreadsheet_id: &str, range: &str, verb: Option<&str>) -> SheetsResult<Url> {
        let last = match verb {
            Some(verb) => format!("{range}:{verb}"),
            None => range.to_string(),
        };
        self.url(&[spreadsheet_id, "values", &last])
    }

    /// Send a request and decode a JSON body, mapping non-success statuses to errors.
    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        credentials: &Credentials,
    ) -> SheetsResult<(u16, T)> {
        let response = request
            .bearer_auth(credentials.access_token())
            .send()
            .await
            .map_err(|e| SheetsError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| SheetsError::Transport(e.to_string()))?;

        if !status.is_success() {
            let message = match serde_json::from_slice::<ErrorEnvelope>(&body) {
                Ok(envelope) if envelope.error.status.is_empty() => envelope.error.message,
                Ok(envelope) => format!("{}: {}", envelope.error.status, envelope.error.message),
                Err(_) => status
                    .canonical_reason()
                    .unwrap_or("Unknown")
                    .to_string(),
            };
            tracing::debug!(status = status.as_u16(), %message, "remote error");
            return Err(SheetsError::remote(status.as_u16(), message));
        }

        let decoded = serde_json::from_slice(&body)?;
        Ok((status.as_u16(), decoded))
    }
}

#[async_trait]
impl SpreadsheetService for SheetsHttpClient {
    async fn get_values(
        &self,
        request: &GetValuesRequest,
        credentials: &Credentials,
    ) -> SheetsResult<ValueRange> {
        let url = self.values_url(&request.spreadsheet_id, &request.range, None)?;
        tracing::debug!(%url, "values.get");

        let builder = self.client.get(url).query(&[
            ("majorDimension", request.major_dimension.as_str()),
            ("valueRenderOption", request.value_render_option.as_str()),
            ("dateTimeRenderOption", request.date_time_render_option.as_str()),
        ]);
        let (_, range) = self.send(builder, credentials).await?;
        Ok(range)
    }

    async fn append_values(
        &self,
        request: &AppendValuesRequest,
        credentials: &Credentials,
    ) -> SheetsResult<AppendValuesResponse> {
        let url = self.values_url(&request.spreadsheet_id, &request.range, Some("append"))?;
        tracing::debug!(%url, rows = request.values.len(), "values.append");

        let builder = self
            .client
            .post(url)
            .query(&[
                ("valueInputOption", request.value_input_option.as_str()),
                ("insertDataOption", request.insert_data_option.as_str()),
                (
                    "includeValuesInResponse",
                    flag(request.include_values_in_response),
                ),
                (
                    "responseDateTimeRenderOption",
                    request.response_date_time_render_option.as_str(),
                ),
                (
                    "responseValueRenderOption",
                    request.response_value_render_option.as_str(),
                ),
            ])
            .json(&ValuesBody {
                range: &request.range,
                values: &request.values,
            });
        let (_, response) = self.send(builder, credentials).await?;
        Ok(response)
    }

    async fn update_values(
        &self,
        request: &UpdateValuesRequest,
        credentials: &Credentials,
    ) -> SheetsResult<UpdateValuesResponse> {
        let url = self.values_url(&request.spreadsheet_id, &request.range, None)?;
        tracing::debug!(%url, rows = request.values.len(), "values.update");

        let builder = self
            .client
            .put(url)
            .query(&[
                ("valueInputOption", request.value_input_option.as_str()),
                (
                    "includeValuesInResponse",
                    flag(request.include_values_in_response),
                ),
                (
                    "responseDateTimeRenderOption",
                    request.response_date_time_render_option.as_str(),
                ),
                (
                    "responseValueRenderOption",
                    request.response_value_render_option.as_str(),
                ),
            ])
            .json(&ValuesBody {
                range: &request.range,
                values: &request.values,
            });
        let (_, response) = self.send(builder, credentials).await?;
        Ok(response)
    }

    async fn clear_values(
        &self,
        request: &ClearValuesRequest,
        credentials: &Credentials,
    ) -> SheetsResult<ClearValuesResponse> {
        let url = self.values_url(&request.spreadsheet_id, &request.range, Some("clear"))?;
        tracing::debug!(%url, "values.clear");

        let builder = self.client.post(url).json(&serde_json::json!({}));
        let (_, response) = self.send(builder, credentials).await?;
        Ok(response)
    }

    async fn batch_update(
        &self,
        spreadsheet_id: &str,
        requests: &[BatchRequest],
        credentials: &Credentials,
    ) -> SheetsResult<BatchUpdateResponse> {
        let url = self.url(&[&format!("{spreadsheet_id}:batchUpdate")])?;
        tracing::debug!(%url, count = requests.len(), "spreadsheets.batchUpdate");

        let builder = self.client.post(url).json(&BatchBody { requests });
        let (status, mut response): (u16, BatchUpdateResponse) =
            self.send(builder, credentials).await?;
        response.status = status;
        Ok(response)
    }

    async fn describe_spreadsheet(
        &self,
        spreadsheet_id: &str,
        credentials: &Credentials,
    ) -> SheetsResult<SpreadsheetMetadata> {
        let url = self.url(&[spreadsheet_id])?;
        tracing::debug!(%url, "spreadsheets.get");

        let builder = self.client.get(url).query(&[("fields", METADATA_FIELDS)]);
        let (_, metadata) = self.send(builder, credentials).await?;
        Ok(metadata)
    }
}
