//! Connection entry points: resolve, assemble, delegate.

use crate::a1_notation::parse_grid_range;
use crate::address::{resolve_address, EffectiveAddress};
use crate::config::{
    resolve, AppendOptions, ClearOptions, ConnectionConfig, CreateNamedRangeOptions,
    CreateSheetOptions, DeleteNamedRangeOptions, DeleteSheetOptions, GetOptions, UpdateOptions,
    DEFAULT_ALLOW_SHEET_NAME_MODIFICATIONS, DEFAULT_FIRST_ROW_AS_HEADER,
    DEFAULT_INCLUDE_VALUES_IN_RESPONSE,
};
use crate::error::{SheetsError, SheetsResult};
use crate::identity::{SheetIdentity, SheetIdentityTracker, SheetReference};
use crate::model::{
    AddNamedRange, AddSheet, AppendValuesRequest, AppendValuesResponse, BatchRequest,
    BatchUpdateResponse, ClearValuesRequest, ClearValuesResponse, DeleteNamedRange, DeleteSheet,
    GetResponse, GetValuesRequest, Grid, NewNamedRange, NewSheetProperties, SheetGridRange,
    UpdateValuesRequest, UpdateValuesResponse, Values,
};
use crate::options::{
    DateTimeRenderOption, Dimension, InsertDataOption, ValueInputOption, ValueRenderOption,
};
use crate::reshape::reshape;
use crate::service::{Credentials, SpreadsheetService};

/// A client bound to one spreadsheet.
///
/// Reads take `&self`. Operations that can move the bound sheet take
/// `&mut self`, so identity changes never interleave with address resolution.
#[derive(Debug)]
pub struct SheetsConnection<S> {
    config: ConnectionConfig,
    credentials: Credentials,
    service: S,
    identity: SheetIdentityTracker,
}

impl<S: SpreadsheetService> SheetsConnection<S> {
    pub fn new(config: ConnectionConfig, service: S, credentials: Credentials) -> Self {
        let identity = SheetIdentityTracker::new(config.sheet.clone());
        Self {
            config,
            credentials,
            service,
            identity,
        }
    }

    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Currently bound sheet, if any.
    pub fn sheet_name(&self) -> Option<&str> {
        self.identity.current()
    }

    pub fn identity(&self) -> &SheetIdentity {
        self.identity.state()
    }

    /// Address a call with these overrides would operate on.
    pub fn resolve_address(
        &self,
        call_sheet: Option<&str>,
        call_range: Option<&str>,
    ) -> SheetsResult<EffectiveAddress> {
        resolve_address(
            self.identity.current(),
            self.config.range.as_deref(),
            call_sheet,
            call_range,
        )
    }

    /// Build the `values.get` request for these overrides.
    pub fn get_request(&self, options: &GetOptions) -> SheetsResult<GetValuesRequest> {
        let address = self.resolve_address(options.sheet.as_deref(), options.range.as_deref())?;
        Ok(GetValuesRequest {
            spreadsheet_id: self.config.spreadsheet_id.clone(),
            range: address.to_string(),
            major_dimension: resolve(
                "major_dimension",
                options.major_dimension,
                self.config.major_dimension,
                Dimension::Rows,
            ),
            value_render_option: resolve(
                "value_render_option",
                options.value_render_option,
                self.config.value_render_option,
                ValueRenderOption::FormattedValue,
            ),
            date_time_render_option: resolve(
                "date_time_render_option",
                options.date_time_render_option,
                self.config.date_time_render_option,
                DateTimeRenderOption::FormattedString,
            ),
        })
    }

    /// Build the `values.append` request for these overrides.
    pub fn append_request(
        &self,
        values: Grid,
        options: &AppendOptions,
    ) -> SheetsResult<AppendValuesRequest> {
        let address = self.resolve_address(options.sheet.as_deref(), options.range.as_deref())?;
        Ok(AppendValuesRequest {
            spreadsheet_id: self.config.spreadsheet_id.clone(),
            range: address.to_string(),
            value_input_option: self.value_input_option(options.value_input_option),
            insert_data_option: resolve(
                "insert_data_option",
                options.insert_data_option,
                self.config.insert_data_option,
                InsertDataOption::Overwrite,
            ),
            include_values_in_response: self
                .include_values_in_response(options.include_values_in_response),
            response_date_time_render_option: self
                .response_date_time_render_option(options.response_date_time_render_option),
            response_value_render_option: self
                .response_value_render_option(options.response_value_render_option),
            values,
        })
    }

    /// Build the `values.update` request for these overrides.
    pub fn update_request(
        &self,
        values: Grid,
        options: &UpdateOptions,
    ) -> SheetsResult<UpdateValuesRequest> {
        let address = self.resolve_address(options.sheet.as_deref(), options.range.as_deref())?;
        Ok(UpdateValuesRequest {
            spreadsheet_id: self.config.spreadsheet_id.clone(),
            range: address.to_string(),
            value_input_option: self.value_input_option(options.value_input_option),
            include_values_in_response: self
                .include_values_in_response(options.include_values_in_response),
            response_date_time_render_option: self
                .response_date_time_render_option(options.response_date_time_render_option),
            response_value_render_option: self
                .response_value_render_option(options.response_value_render_option),
            values,
        })
    }

    /// Build the `values.clear` request for these overrides.
    pub fn clear_request(&self, options: &ClearOptions) -> SheetsResult<ClearValuesRequest> {
        let address = self.resolve_address(options.sheet.as_deref(), options.range.as_deref())?;
        Ok(ClearValuesRequest {
            spreadsheet_id: self.config.spreadsheet_id.clone(),
            range: address.to_string(),
        })
    }

    /// Whether `get` with these overrides returns header-keyed records.
    pub fn first_row_as_header(&self, options: &GetOptions) -> bool {
        resolve(
            "first_row_as_header",
            options.first_row_as_header,
            self.config.first_row_as_header,
            DEFAULT_FIRST_ROW_AS_HEADER,
        )
    }

    /// Whether a lifecycle call may rebind or unbind the current sheet.
    pub fn allow_sheet_name_modifications(&self, call: Option<bool>) -> bool {
        resolve(
            "allow_sheet_name_modifications",
            call,
            self.config.allow_sheet_name_modifications,
            DEFAULT_ALLOW_SHEET_NAME_MODIFICATIONS,
        )
    }

    fn value_input_option(&self, call: Option<ValueInputOption>) -> ValueInputOption {
        resolve(
            "value_input_option",
            call,
            self.config.value_input_option,
            ValueInputOption::Raw,
        )
    }

    fn include_values_in_response(&self, call: Option<bool>) -> bool {
        resolve(
            "include_values_in_response",
            call,
            self.config.include_values_in_response,
            DEFAULT_INCLUDE_VALUES_IN_RESPONSE,
        )
    }

    fn response_date_time_render_option(
        &self,
        call: Option<DateTimeRenderOption>,
    ) -> DateTimeRenderOption {
        resolve(
            "response_date_time_render_option",
            call,
            self.config.response_date_time_render_option,
            DateTimeRenderOption::FormattedString,
        )
    }

    fn response_value_render_option(&self, call: Option<ValueRenderOption>) -> ValueRenderOption {
        resolve(
            "response_value_render_option",
            call,
            self.config.response_value_render_option,
            ValueRenderOption::FormattedValue,
        )
    }

    /// Read values, reshaped into records when header mode resolves to true.
    pub async fn get(&self, options: GetOptions) -> SheetsResult<GetResponse> {
        let request = self.get_request(&options)?;
        let header_mode = self.first_row_as_header(&options);

        let raw = self
            .service
            .get_values(&request, &self.credentials)
            .await?;

        let values = if header_mode {
            Values::Records(reshape(&raw.values))
        } else {
            Values::Grid(raw.values)
        };

        Ok(GetResponse {
            range: raw.range,
            major_dimension: raw.major_dimension,
            values,
        })
    }

    pub async fn append(
        &self,
        values: Grid,
        options: AppendOptions,
    ) -> SheetsResult<AppendValuesResponse> {
        let request = self.append_request(values, &options)?;
        self.service
            .append_values(&request, &self.credentials)
            .await
    }

    pub async fn update(
        &self,
        values: Grid,
        options: UpdateOptions,
    ) -> SheetsResult<UpdateValuesResponse> {
        let request = self.update_request(values, &options)?;
        self.service
            .update_values(&request, &self.credentials)
            .await
    }

    pub async fn clear(&self, options: ClearOptions) -> SheetsResult<ClearValuesResponse> {
        let request = self.clear_request(&options)?;
        self.service.clear_values(&request, &self.credentials).await
    }

    /// Add a sheet and, when permitted, bind the connection to it.
    pub async fn create_sheet(
        &mut self,
        options: CreateSheetOptions,
    ) -> SheetsResult<BatchUpdateResponse> {
        let permitted = self.allow_sheet_name_modifications(options.allow_sheet_name_modifications);
        let request = BatchRequest::AddSheet(AddSheet {
            properties: NewSheetProperties {
                title: options.sheet_name.clone(),
            },
        });

        let response = self.batch_update(request).await?;
        if !response.is_success() {
            tracing::warn!(status = response.status, "add sheet not acknowledged");
            return Ok(response);
        }

        self.identity
            .on_sheet_created(&options.sheet_name, permitted);
        Ok(response)
    }

    /// Delete a sheet by id, by name, or the bound sheet; unbind when permitted.
    pub async fn delete_sheet(
        &mut self,
        options: DeleteSheetOptions,
    ) -> SheetsResult<BatchUpdateResponse> {
        let target = self.identity.delete_target(&options)?;
        let permitted = self.allow_sheet_name_modifications(options.allow_sheet_name_modifications);

        let sheet_id = match target {
            SheetReference::Id(id) => id,
            SheetReference::Name(name) => self.sheet_id(&name).await?,
        };

        let response = self
            .batch_update(BatchRequest::DeleteSheet(DeleteSheet { sheet_id }))
            .await?;
        if !response.is_success() {
            tracing::warn!(status = response.status, "delete sheet not acknowledged");
            return Ok(response);
        }

        self.identity.on_sheet_deleted(permitted);
        Ok(response)
    }

    /// Register a named range over a two-corner range expression.
    pub async fn create_named_range(
        &self,
        options: CreateNamedRangeOptions,
    ) -> SheetsResult<BatchUpdateResponse> {
        let bounds = parse_grid_range(&options.range)?;

        let sheet_id = match options.sheet_id {
            Some(id) => id,
            None => {
                let name = options
                    .sheet_name
                    .as_deref()
                    .or(self.identity.current())
                    .ok_or(SheetsError::MissingSheetReference)?;
                self.sheet_id(name).await?
            }
        };

        self.batch_update(BatchRequest::AddNamedRange(AddNamedRange {
            named_range: NewNamedRange {
                name: options.name,
                range: SheetGridRange { sheet_id, bounds },
            },
        }))
        .await
    }

    /// Remove a named range, looked up by name.
    pub async fn delete_named_range(
        &self,
        options: DeleteNamedRangeOptions,
    ) -> SheetsResult<BatchUpdateResponse> {
        let metadata = self
            .service
            .describe_spreadsheet(&self.config.spreadsheet_id, &self.credentials)
            .await?;
        let named_range_id = metadata
            .named_range(&options.name)
            .map(|range| range.named_range_id.clone())
            .ok_or(SheetsError::NamedRangeNotFound { name: options.name })?;

        self.batch_update(BatchRequest::DeleteNamedRange(DeleteNamedRange {
            named_range_id,
        }))
        .await
    }

    async fn sheet_id(&self, name: &str) -> SheetsResult<i64> {
        let metadata = self
            .service
            .describe_spreadsheet(&self.config.spreadsheet_id, &self.credentials)
            .await?;
        metadata
            .sheet_id(name)
            .ok_or_else(|| SheetsError::SheetNotFound {
                name: name.to_string(),
            })
    }

    async fn batch_update(&self, request: BatchRequest) -> SheetsResult<BatchUpdateResponse> {
        tracing::debug!(?request, "batch update");
        self.service
            .batch_update(&self.config.spreadsheet_id, &[request], &self.credentials)
            .await
    }
}
