//! Connection defaults, per-call overrides and the precedence rule joining them.
//!
//! Every optional setting is resolved independently with [`resolve`]:
//! a value given on the call wins, then the connection default, then a
//! hard-coded fallback. Nothing here merges whole structs.

use crate::options::{
    DateTimeRenderOption, Dimension, InsertDataOption, ValueInputOption, ValueRenderOption,
};
use serde::{Deserialize, Serialize};

/// Fallback for the header-mode flag.
pub const DEFAULT_FIRST_ROW_AS_HEADER: bool = false;
/// Fallback for the rename-permission flag.
pub const DEFAULT_ALLOW_SHEET_NAME_MODIFICATIONS: bool = true;
/// Fallback for `includeValuesInResponse`.
pub const DEFAULT_INCLUDE_VALUES_IN_RESPONSE: bool = false;

/// Pick the effective value of one setting.
///
/// Returns `call` if present, else `connection` if present, else `fallback`.
pub fn resolve<T: Copy + std::fmt::Debug>(
    field: &'static str,
    call: Option<T>,
    connection: Option<T>,
    fallback: T,
) -> T {
    let (value, tier) = match (call, connection) {
        (Some(value), _) => (value, "call"),
        (None, Some(value)) => (value, "connection"),
        (None, None) => (fallback, "fallback"),
    };
    tracing::trace!(field, tier, ?value, "resolved setting");
    value
}

/// Settings fixed when a connection is created.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionConfig {
    pub spreadsheet_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_render_option: Option<ValueRenderOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_input_option: Option<ValueInputOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insert_data_option: Option<InsertDataOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major_dimension: Option<Dimension>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_time_render_option: Option<DateTimeRenderOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_values_in_response: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_date_time_render_option: Option<DateTimeRenderOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_value_render_option: Option<ValueRenderOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_row_as_header: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_sheet_name_modifications: Option<bool>,
}

impl ConnectionConfig {
    /// Create a config for a spreadsheet with every setting left to its fallback.
    #[must_use]
    pub fn new(spreadsheet_id: impl Into<String>) -> Self {
        Self {
            spreadsheet_id: spreadsheet_id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_sheet(mut self, sheet: impl Into<String>) -> Self {
        self.sheet = Some(sheet.into());
        self
    }

    #[must_use]
    pub fn with_range(mut self, range: impl Into<String>) -> Self {
        self.range = Some(range.into());
        self
    }

    #[must_use]
    pub fn with_value_render_option(mut self, option: ValueRenderOption) -> Self {
        self.value_render_option = Some(option);
        self
    }

    #[must_use]
    pub fn with_value_input_option(mut self, option: ValueInputOption) -> Self {
        self.value_input_option = Some(option);
        self
    }

    #[must_use]
    pub fn with_insert_data_option(mut self, option: InsertDataOption) -> Self {
        self.insert_data_option = Some(option);
        self
    }

    #[must_use]
    pub fn with_major_dimension(mut self, dimension: Dimension) -> Self {
        self.major_dimension = Some(dimension);
        self
    }

    #[must_use]
    pub fn with_date_time_render_option(mut self, option: DateTimeRenderOption) -> Self {
        self.date_time_render_option = Some(option);
        self
    }

    #[must_use]
    pub fn with_include_values_in_response(mut self, include: bool) -> Self {
        self.include_values_in_response = Some(include);
        self
    }

    #[must_use]
    pub fn with_response_date_time_render_option(mut self, option: DateTimeRenderOption) -> Self {
        self.response_date_time_render_option = Some(option);
        self
    }

    #[must_use]
    pub fn with_response_value_render_option(mut self, option: ValueRenderOption) -> Self {
        self.response_value_render_option = Some(option);
        self
    }

    #[must_use]
    pub fn with_first_row_as_header(mut self, enabled: bool) -> Self {
        self.first_row_as_header = Some(enabled);
        self
    }

    #[must_use]
    pub fn with_allow_sheet_name_modifications(mut self, allowed: bool) -> Self {
        self.allow_sheet_name_modifications = Some(allowed);
        self
    }
}

/// Overrides accepted by `get`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetOptions {
    pub sheet: Option<String>,
    pub range: Option<String>,
    pub major_dimension: Option<Dimension>,
    pub value_render_option: Option<ValueRenderOption>,
    pub date_time_render_option: Option<DateTimeRenderOption>,
    pub first_row_as_header: Option<bool>,
}

/// Overrides accepted by `append`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppendOptions {
    pub sheet: Option<String>,
    pub range: Option<String>,
    pub value_input_option: Option<ValueInputOption>,
    pub insert_data_option: Option<InsertDataOption>,
    pub include_values_in_response: Option<bool>,
    pub response_date_time_render_option: Option<DateTimeRenderOption>,
    pub response_value_render_option: Option<ValueRenderOption>,
}

/// Overrides accepted by `update`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateOptions {
    pub sheet: Option<String>,
    pub range: Option<String>,
    pub value_input_option: Option<ValueInputOption>,
    pub include_values_in_response: Option<bool>,
    pub response_date_time_render_option: Option<DateTimeRenderOption>,
    pub response_value_render_option: Option<ValueRenderOption>,
}

/// Overrides accepted by `clear`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClearOptions {
    pub sheet: Option<String>,
    pub range: Option<String>,
}

/// Arguments for `create_sheet`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSheetOptions {
    pub sheet_name: String,
    #[serde(default)]
    pub allow_sheet_name_modifications: Option<bool>,
}

impl CreateSheetOptions {
    pub fn new(sheet_name: impl Into<String>) -> Self {
        Self {
            sheet_name: sheet_name.into(),
            allow_sheet_name_modifications: None,
        }
    }
}

/// Arguments for `delete_sheet`. At most one of `sheet_id`/`sheet_name`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeleteSheetOptions {
    pub sheet_id: Option<i64>,
    pub sheet_name: Option<String>,
    pub allow_sheet_name_modifications: Option<bool>,
}

/// Arguments for `create_named_range`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNamedRangeOptions {
    pub name: String,
    pub range: String,
    #[serde(default)]
    pub sheet_id: Option<i64>,
    #[serde(default)]
    pub sheet_name: Option<String>,
}

/// Arguments for `delete_named_range`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteNamedRangeOptions {
    pub name: String,
}
