//! Request and response shapes exchanged with the remote service.
//!
//! Field names serialize to the Sheets v4 JSON spelling so the HTTP
//! client can send and decode them directly.

use crate::a1_notation::GridRange;
use crate::options::{
    DateTimeRenderOption, Dimension, InsertDataOption, ValueInputOption, ValueRenderOption,
};
use crate::reshape::Record;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ordered rows of ordered cells.
pub type Grid = Vec<Vec<Value>>;

/// Fully resolved `values.get` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetValuesRequest {
    pub spreadsheet_id: String,
    pub range: String,
    pub major_dimension: Dimension,
    pub value_render_option: ValueRenderOption,
    pub date_time_render_option: DateTimeRenderOption,
}

/// Fully resolved `values.append` call.
#[derive(Debug, Clone, PartialEq)]
pub struct AppendValuesRequest {
    pub spreadsheet_id: String,
    pub range: String,
    pub value_input_option: ValueInputOption,
    pub insert_data_option: InsertDataOption,
    pub include_values_in_response: bool,
    pub response_date_time_render_option: DateTimeRenderOption,
    pub response_value_render_option: ValueRenderOption,
    pub values: Grid,
}

/// Fully resolved `values.update` call.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateValuesRequest {
    pub spreadsheet_id: String,
    pub range: String,
    pub value_input_option: ValueInputOption,
    pub include_values_in_response: bool,
    pub response_date_time_render_option: DateTimeRenderOption,
    pub response_value_render_option: ValueRenderOption,
    pub values: Grid,
}

/// Fully resolved `values.clear` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearValuesRequest {
    pub spreadsheet_id: String,
    pub range: String,
}

/// A block of values as returned by `values.get`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange {
    #[serde(default)]
    pub range: String,
    #[serde(default)]
    pub major_dimension: Dimension,
    #[serde(default)]
    pub values: Grid,
}

/// Value grid of a read, reshaped in header mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Values {
    Grid(Grid),
    Records(Vec<Record>),
}

/// What `get` hands back to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetResponse {
    pub range: String,
    pub major_dimension: Dimension,
    pub values: Values,
}

impl GetResponse {
    pub fn grid(&self) -> Option<&Grid> {
        match &self.values {
            Values::Grid(grid) => Some(grid),
            Values::Records(_) => None,
        }
    }

    pub fn records(&self) -> Option<&[Record]> {
        match &self.values {
            Values::Grid(_) => None,
            Values::Records(records) => Some(records),
        }
    }
}

/// Summary of cells touched by a write.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedCells {
    #[serde(default)]
    pub spreadsheet_id: String,
    #[serde(default)]
    pub updated_range: String,
    #[serde(default)]
    pub updated_rows: u32,
    #[serde(default)]
    pub updated_columns: u32,
    #[serde(default)]
    pub updated_cells: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_data: Option<ValueRange>,
}

/// Response of `values.append`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppendValuesResponse {
    #[serde(default)]
    pub spreadsheet_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_range: Option<String>,
    #[serde(default)]
    pub updates: UpdatedCells,
}

/// Response of `values.update`.
pub type UpdateValuesResponse = UpdatedCells;

/// Response of `values.clear`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearValuesResponse {
    #[serde(default)]
    pub spreadsheet_id: String,
    #[serde(default)]
    pub cleared_range: String,
}

/// One entry of a `batchUpdate` request list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BatchRequest {
    AddSheet(AddSheet),
    DeleteSheet(DeleteSheet),
    AddNamedRange(AddNamedRange),
    DeleteNamedRange(DeleteNamedRange),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddSheet {
    pub properties: NewSheetProperties,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSheetProperties {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteSheet {
    pub sheet_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddNamedRange {
    pub named_range: NewNamedRange,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewNamedRange {
    pub name: String,
    pub range: SheetGridRange,
}

/// Grid bounds anchored to a sheet id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetGridRange {
    #[serde(default)]
    pub sheet_id: i64,
    #[serde(flatten)]
    pub bounds: GridRange,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteNamedRange {
    pub named_range_id: String,
}

/// Response of `batchUpdate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchUpdateResponse {
    /// HTTP status the remote answered with.
    #[serde(skip, default = "ok_status")]
    pub status: u16,
    #[serde(default)]
    pub spreadsheet_id: String,
    #[serde(default)]
    pub replies: Vec<Value>,
}

fn ok_status() -> u16 {
    200
}

impl BatchUpdateResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// `spreadsheets.get` metadata: sheets and named ranges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpreadsheetMetadata {
    #[serde(default)]
    pub sheets: Vec<SheetEntry>,
    #[serde(default)]
    pub named_ranges: Vec<NamedRangeEntry>,
}

impl SpreadsheetMetadata {
    pub fn sheet_id(&self, title: &str) -> Option<i64> {
        self.sheets
            .iter()
            .find(|sheet| sheet.properties.title == title)
            .map(|sheet| sheet.properties.sheet_id)
    }

    pub fn named_range(&self, name: &str) -> Option<&NamedRangeEntry> {
        self.named_ranges.iter().find(|range| range.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetEntry {
    pub properties: SheetProperties,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetProperties {
    #[serde(default)]
    pub sheet_id: i64,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedRangeEntry {
    pub named_range_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<PartialGridRange>,
}

/// Grid bounds as the remote reports them; unbounded sides are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialGridRange {
    pub sheet_id: i64,
    pub start_row_index: Option<u32>,
    pub end_row_index: Option<u32>,
    pub start_column_index: Option<u32>,
    pub end_column_index: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_batch_request_wire_shape() {
        let requests = vec![
            BatchRequest::AddSheet(AddSheet {
                properties: NewSheetProperties {
                    title: "X".to_string(),
                },
            }),
            BatchRequest::DeleteSheet(DeleteSheet { sheet_id: 7 }),
            BatchRequest::AddNamedRange(AddNamedRange {
                named_range: NewNamedRange {
                    name: "n".to_string(),
                    range: SheetGridRange {
                        sheet_id: 0,
                        bounds: GridRange {
                            start_row_index: 0,
                            end_row_index: 4,
                            start_column_index: 0,
                            end_column_index: 2,
                        },
                    },
                },
            }),
            BatchRequest::DeleteNamedRange(DeleteNamedRange {
                named_range_id: "nr1".to_string(),
            }),
        ];

        assert_eq!(
            serde_json::to_value(&requests).unwrap(),
            json!([
                {"addSheet": {"properties": {"title": "X"}}},
                {"deleteSheet": {"sheetId": 7}},
                {"addNamedRange": {"namedRange": {"name": "n", "range": {
                    "sheetId": 0,
                    "startRowIndex": 0,
                    "endRowIndex": 4,
                    "startColumnIndex": 0,
                    "endColumnIndex": 2
                }}}},
                {"deleteNamedRange": {"namedRangeId": "nr1"}}
            ])
        );
    }

    #[test]
    fn test_metadata_lookup() {
        let metadata: SpreadsheetMetadata = serde_json::from_value(json!({
            "spreadsheetId": "abc",
            "sheets": [
                {"properties": {"sheetId": 0, "title": "Sheet1", "index": 0}},
                {"properties": {"sheetId": 99, "title": "Data"}}
            ],
            "namedRanges": [
                {"namedRangeId": "nr1", "name": "totals", "range": {"sheetId": 99, "startRowIndex": 0, "endRowIndex": 4}}
            ]
        }))
        .unwrap();

        assert_eq!(metadata.sheet_id("Sheet1"), Some(0));
        assert_eq!(metadata.sheet_id("Data"), Some(99));
        assert_eq!(metadata.sheet_id("Missing"), None);

        let totals = metadata.named_range("totals").unwrap();
        assert_eq!(totals.named_range_id, "nr1");
        assert_eq!(totals.range.as_ref().unwrap().start_column_index, None);
        assert!(metadata.named_range("other").is_none());
    }

    #[test]
    fn test_metadata_without_named_ranges() {
        let metadata: SpreadsheetMetadata =
            serde_json::from_value(json!({"sheets": []})).unwrap();
        assert!(metadata.named_ranges.is_empty());
    }

    #[test]
    fn test_value_range_missing_values() {
        // The remote omits `values` for an empty range.
        let range: ValueRange =
            serde_json::from_value(json!({"range": "Sheet1!A1:B2", "majorDimension": "ROWS"}))
                .unwrap();
        assert!(range.values.is_empty());
    }

    #[test]
    fn test_batch_response_status_defaults_to_ok() {
        let response: BatchUpdateResponse =
            serde_json::from_value(json!({"spreadsheetId": "abc", "replies": [{}]})).unwrap();
        assert!(response.is_success());
        assert_eq!(response.replies.len(), 1);
    }
}
