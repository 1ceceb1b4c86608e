//! In-memory spreadsheet service shared by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::{json, Value};
use sheetlink_core::model::{
    AppendValuesRequest, AppendValuesResponse, BatchRequest, BatchUpdateResponse,
    ClearValuesRequest, ClearValuesResponse, GetValuesRequest, NamedRangeEntry, SheetEntry,
    SheetProperties, SpreadsheetMetadata, UpdateValuesRequest, UpdateValuesResponse, ValueRange,
};
use sheetlink_core::{
    ConnectionConfig, Credentials, SheetsConnection, SheetsError, SheetsResult,
    SpreadsheetService,
};
use std::sync::Mutex;

/// One call the fake received.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Get(GetValuesRequest),
    Append(AppendValuesRequest),
    Update(UpdateValuesRequest),
    Clear(ClearValuesRequest),
    Batch(Vec<BatchRequest>),
    Describe,
}

/// Records every call and answers from canned data.
pub struct FakeService {
    pub calls: Mutex<Vec<Call>>,
    pub grid: Vec<Vec<Value>>,
    pub metadata: SpreadsheetMetadata,
    /// Status reported by `batch_update`.
    pub batch_status: u16,
    /// When set, `batch_update` fails with this status.
    pub batch_error: Option<u16>,
    pub last_token: Mutex<Option<String>>,
}

impl Default for FakeService {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            grid: Vec::new(),
            metadata: metadata(&[("Sheet1", 0), ("X", 101)], &[("n", "nr-1")]),
            batch_status: 200,
            batch_error: None,
            last_token: Mutex::new(None),
        }
    }
}

impl FakeService {
    pub fn with_grid(grid: Value) -> Self {
        Self {
            grid: serde_json::from_value(grid).unwrap(),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn batches(&self) -> Vec<BatchRequest> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Batch(requests) => Some(requests),
                _ => None,
            })
            .flatten()
            .collect()
    }

    fn record(&self, call: Call, credentials: &Credentials) {
        self.calls.lock().unwrap().push(call);
        *self.last_token.lock().unwrap() = Some(credentials.access_token().to_string());
    }
}

pub fn metadata(sheets: &[(&str, i64)], named_ranges: &[(&str, &str)]) -> SpreadsheetMetadata {
    SpreadsheetMetadata {
        sheets: sheets
            .iter()
            .map(|(title, sheet_id)| SheetEntry {
                properties: SheetProperties {
                    sheet_id: *sheet_id,
                    title: (*title).to_string(),
                },
            })
            .collect(),
        named_ranges: named_ranges
            .iter()
            .map(|(name, id)| NamedRangeEntry {
                named_range_id: (*id).to_string(),
                name: (*name).to_string(),
                range: None,
            })
            .collect(),
    }
}

#[async_trait]
impl SpreadsheetService for FakeService {
    async fn get_values(
        &self,
        request: &GetValuesRequest,
        credentials: &Credentials,
    ) -> SheetsResult<ValueRange> {
        self.record(Call::Get(request.clone()), credentials);
        Ok(ValueRange {
            range: request.range.clone(),
            major_dimension: request.major_dimension,
            values: self.grid.clone(),
        })
    }

    async fn append_values(
        &self,
        request: &AppendValuesRequest,
        credentials: &Credentials,
    ) -> SheetsResult<AppendValuesResponse> {
        self.record(Call::Append(request.clone()), credentials);
        Ok(AppendValuesResponse {
            spreadsheet_id: request.spreadsheet_id.clone(),
            table_range: Some(request.range.clone()),
            updates: UpdateValuesResponse {
                spreadsheet_id: request.spreadsheet_id.clone(),
                updated_range: request.range.clone(),
                updated_rows: request.values.len() as u32,
                ..Default::default()
            },
        })
    }

    async fn update_values(
        &self,
        request: &UpdateValuesRequest,
        credentials: &Credentials,
    ) -> SheetsResult<UpdateValuesResponse> {
        self.record(Call::Update(request.clone()), credentials);
        Ok(UpdateValuesResponse {
            spreadsheet_id: request.spreadsheet_id.clone(),
            updated_range: request.range.clone(),
            updated_rows: request.values.len() as u32,
            ..Default::default()
        })
    }

    async fn clear_values(
        &self,
        request: &ClearValuesRequest,
        credentials: &Credentials,
    ) -> SheetsResult<ClearValuesResponse> {
        self.record(Call::Clear(request.clone()), credentials);
        Ok(ClearValuesResponse {
            spreadsheet_id: request.spreadsheet_id.clone(),
            cleared_range: request.range.clone(),
        })
    }

    async fn batch_update(
        &self,
        spreadsheet_id: &str,
        requests: &[BatchRequest],
        credentials: &Credentials,
    ) -> SheetsResult<BatchUpdateResponse> {
        self.record(Call::Batch(requests.to_vec()), credentials);
        if let Some(status) = self.batch_error {
            return Err(SheetsError::remote(status, "batch update rejected"));
        }
        Ok(BatchUpdateResponse {
            status: self.batch_status,
            spreadsheet_id: spreadsheet_id.to_string(),
            replies: vec![json!({})],
        })
    }

    async fn describe_spreadsheet(
        &self,
        _spreadsheet_id: &str,
        credentials: &Credentials,
    ) -> SheetsResult<SpreadsheetMetadata> {
        self.record(Call::Describe, credentials);
        Ok(self.metadata.clone())
    }
}

pub fn connect(config: ConnectionConfig, service: FakeService) -> SheetsConnection<FakeService> {
    SheetsConnection::new(config, service, Credentials::bearer("test-token"))
}

/// Connection on "Sheet1" / "A1:B2".
pub fn sheet1(service: FakeService) -> SheetsConnection<FakeService> {
    connect(
        ConnectionConfig::new("spreadsheet-1")
            .with_sheet("Sheet1")
            .with_range("A1:B2"),
        service,
    )
}
