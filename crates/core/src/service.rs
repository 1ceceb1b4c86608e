//! The remote spreadsheet service a connection delegates to.

use crate::error::SheetsResult;
use crate::model::{
    AppendValuesRequest, AppendValuesResponse, BatchRequest, BatchUpdateResponse,
    ClearValuesRequest, ClearValuesResponse, GetValuesRequest, SpreadsheetMetadata,
    UpdateValuesRequest, UpdateValuesResponse, ValueRange,
};
use async_trait::async_trait;
use std::fmt;

/// Opaque credential handed to the service on every call.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    access_token: String,
}

impl Credentials {
    /// Wrap an OAuth2 bearer token.
    pub fn bearer(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
        }
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_token", &"<redacted>")
            .finish()
    }
}

/// Request/response operations of a remote spreadsheet backend.
///
/// Implementations report any failure as an error; they never retry.
#[async_trait]
pub trait SpreadsheetService: Send + Sync {
    async fn get_values(
        &self,
        request: &GetValuesRequest,
        credentials: &Credentials,
    ) -> SheetsResult<ValueRange>;

    async fn append_values(
        &self,
        request: &AppendValuesRequest,
        credentials: &Credentials,
    ) -> SheetsResult<AppendValuesResponse>;

    async fn update_values(
        &self,
        request: &UpdateValuesRequest,
        credentials: &Credentials,
    ) -> SheetsResult<UpdateValuesResponse>;

    async fn clear_values(
        &self,
        request: &ClearValuesRequest,
        credentials: &Credentials,
    ) -> SheetsResult<ClearValuesResponse>;

    async fn batch_update(
        &self,
        spreadsheet_id: &str,
        requests: &[BatchRequest],
        credentials: &Credentials,
    ) -> SheetsResult<BatchUpdateResponse>;

    async fn describe_spreadsheet(
        &self,
        spreadsheet_id: &str,
        credentials: &Credentials,
    ) -> SheetsResult<SpreadsheetMetadata>;
}
