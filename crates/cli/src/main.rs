//! # sheetlink-cli
//!
//! Command-line interface for sheetlink connections.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indexmap::IndexSet;
use sheetlink_core::{
    AppendOptions, ClearOptions, ConnectionConfig, CreateNamedRangeOptions, CreateSheetOptions,
    Credentials, DateTimeRenderOption, DeleteNamedRangeOptions, DeleteSheetOptions, Dimension,
    GetOptions, GetResponse, Grid, InsertDataOption, SheetsConnection, UpdateOptions,
    ValueInputOption, ValueRenderOption, Values,
};
use sheetlink_http::{SheetsHttpClient, DEFAULT_BASE_URL};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// sheetlink - read and write spreadsheet ranges
#[derive(Parser)]
#[command(name = "sheetlink")]
#[command(author, version, about = "Spreadsheet range client", long_about = None)]
struct Cli {
    /// Connection config file (YAML or JSON)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Spreadsheet id (overrides the config file)
    #[arg(long)]
    spreadsheet_id: Option<String>,

    /// Default sheet of the connection
    #[arg(long)]
    sheet: Option<String>,

    /// Default range of the connection
    #[arg(long)]
    range: Option<String>,

    /// OAuth2 access token
    #[arg(long, env = "SHEETLINK_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// API base URL
    #[arg(long, env = "SHEETLINK_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Output format (json, table)
    #[arg(short = 'f', long = "format", default_value = "json")]
    format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

/// Output format for results.
#[derive(Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    /// Pretty JSON output (default)
    #[default]
    Json,
    /// Tab-separated rows
    Table,
}

#[derive(Subcommand)]
enum Command {
    /// Read a range
    Get(GetArgs),
    /// Append rows after a range
    Append(WriteArgs),
    /// Overwrite a range
    Update(WriteArgs),
    /// Clear a range
    Clear(AddressArgs),
    /// Add a sheet
    CreateSheet(CreateSheetArgs),
    /// Delete a sheet (the bound sheet if neither --name nor --id is given)
    DeleteSheet(DeleteSheetArgs),
    /// Register a named range
    CreateNamedRange(CreateNamedRangeArgs),
    /// Remove a named range
    DeleteNamedRange(DeleteNamedRangeArgs),
}

/// Per-call address overrides.
#[derive(Args, Default)]
struct AddressArgs {
    /// Sheet for this call (requires --range)
    #[arg(long)]
    sheet: Option<String>,

    /// Range for this call
    #[arg(long)]
    range: Option<String>,
}

#[derive(Args)]
struct GetArgs {
    #[command(flatten)]
    address: AddressArgs,

    #[arg(long)]
    major_dimension: Option<Dimension>,

    #[arg(long)]
    value_render_option: Option<ValueRenderOption>,

    #[arg(long)]
    date_time_render_option: Option<DateTimeRenderOption>,

    /// Key rows by the first row
    #[arg(long)]
    header: Option<bool>,
}

#[derive(Args)]
struct WriteArgs {
    #[command(flatten)]
    address: AddressArgs,

    /// Rows as a JSON array of arrays
    #[arg(long, value_parser = parse_grid, conflicts_with = "values_file")]
    values: Option<Grid>,

    /// File holding the rows as JSON
    #[arg(long, value_name = "FILE")]
    values_file: Option<PathBuf>,

    #[arg(long)]
    value_input_option: Option<ValueInputOption>,

    /// Ignored by update
    #[arg(long)]
    insert_data_option: Option<InsertDataOption>,

    #[arg(long)]
    include_values_in_response: Option<bool>,

    #[arg(long)]
    response_date_time_render_option: Option<DateTimeRenderOption>,

    #[arg(long)]
    response_value_render_option: Option<ValueRenderOption>,
}

#[derive(Args)]
struct CreateSheetArgs {
    /// Title of the new sheet
    name: String,

    /// Whether the connection may rebind to the new sheet
    #[arg(long)]
    allow_sheet_name_modifications: Option<bool>,
}

#[derive(Args)]
struct DeleteSheetArgs {
    #[arg(long, conflicts_with = "id")]
    name: Option<String>,

    #[arg(long)]
    id: Option<i64>,

    /// Whether the connection may unbind the deleted sheet
    #[arg(long)]
    allow_sheet_name_modifications: Option<bool>,
}

#[derive(Args)]
struct CreateNamedRangeArgs {
    name: String,

    /// Two-corner range, e.g. A1:B4
    range: String,

    #[arg(long, conflicts_with = "sheet_id")]
    sheet_name: Option<String>,

    #[arg(long)]
    sheet_id: Option<i64>,
}

#[derive(Args)]
struct DeleteNamedRangeArgs {
    name: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .init();
    }

    let config = connection_config(&cli)?;
    tracing::debug!(
        spreadsheet_id = %config.spreadsheet_id,
        sheet = ?config.sheet,
        range = ?config.range,
        "connection config"
    );
    let token = cli
        .token
        .as_deref()
        .context("Missing access token: pass --token or set SHEETLINK_TOKEN")?;
    let client = SheetsHttpClient::with_timeout(cli.timeout)?.with_base_url(&cli.base_url)?;
    let mut connection = SheetsConnection::new(config, client, Credentials::bearer(token));

    run(&mut connection, cli.command, cli.format).await
}

/// Load the config file, if any, and apply the connection flags on top.
fn connection_config(cli: &Cli) -> Result<ConnectionConfig> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ConnectionConfig::default(),
    };

    if let Some(id) = &cli.spreadsheet_id {
        config.spreadsheet_id.clone_from(id);
    }
    if let Some(sheet) = &cli.sheet {
        config.sheet = Some(sheet.clone());
    }
    if let Some(range) = &cli.range {
        config.range = Some(range.clone());
    }

    anyhow::ensure!(
        !config.spreadsheet_id.is_empty(),
        "Missing spreadsheet id: pass --spreadsheet-id or set spreadsheetId in the config file"
    );
    Ok(config)
}

/// Parse a connection config, choosing YAML or JSON by file extension.
fn load_config(path: &Path) -> Result<ConnectionConfig> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;

    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    if is_yaml {
        serde_yaml::from_str(&source)
            .with_context(|| format!("Invalid YAML config: {}", path.display()))
    } else {
        serde_json::from_str(&source)
            .with_context(|| format!("Invalid JSON config: {}", path.display()))
    }
}

fn parse_grid(s: &str) -> Result<Grid, String> {
    serde_json::from_str(s).map_err(|e| format!("expected a JSON array of rows: {e}"))
}

impl WriteArgs {
    fn grid(&self) -> Result<Grid> {
        if let Some(values) = &self.values {
            return Ok(values.clone());
        }
        let path = self
            .values_file
            .as_deref()
            .context("Missing rows: pass --values or --values-file")?;
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read values: {}", path.display()))?;
        parse_grid(&source).map_err(|e| anyhow::anyhow!("{}: {e}", path.display()))
    }

    fn append_options(&self) -> AppendOptions {
        AppendOptions {
            sheet: self.address.sheet.clone(),
            range: self.address.range.clone(),
            value_input_option: self.value_input_option,
            insert_data_option: self.insert_data_option,
            include_values_in_response: self.include_values_in_response,
            response_date_time_render_option: self.response_date_time_render_option,
            response_value_render_option: self.response_value_render_option,
        }
    }

    fn update_options(&self) -> UpdateOptions {
        UpdateOptions {
            sheet: self.address.sheet.clone(),
            range: self.address.range.clone(),
            value_input_option: self.value_input_option,
            include_values_in_response: self.include_values_in_response,
            response_date_time_render_option: self.response_date_time_render_option,
            response_value_render_option: self.response_value_render_option,
        }
    }
}

impl GetArgs {
    fn options(&self) -> GetOptions {
        GetOptions {
            sheet: self.address.sheet.clone(),
            range: self.address.range.clone(),
            major_dimension: self.major_dimension,
            value_render_option: self.value_render_option,
            date_time_render_option: self.date_time_render_option,
            first_row_as_header: self.header,
        }
    }
}

/// Run one subcommand against the connection.
async fn run(
    connection: &mut SheetsConnection<SheetsHttpClient>,
    command: Command,
    format: OutputFormat,
) -> Result<()> {
    match command {
        Command::Get(args) => {
            let response = connection.get(args.options()).await?;
            print_response(&response, format)
        }
        Command::Append(args) => {
            let response = connection
                .append(args.grid()?, args.append_options())
                .await?;
            print_json(&response)
        }
        Command::Update(args) => {
            let response = connection
                .update(args.grid()?, args.update_options())
                .await?;
            print_json(&response)
        }
        Command::Clear(args) => {
            let response = connection
                .clear(ClearOptions {
                    sheet: args.sheet,
                    range: args.range,
                })
                .await?;
            print_json(&response)
        }
        Command::CreateSheet(args) => {
            let mut options = CreateSheetOptions::new(args.name);
            options.allow_sheet_name_modifications = args.allow_sheet_name_modifications;
            let response = connection.create_sheet(options).await?;
            print_bound_sheet(connection.sheet_name());
            print_json(&response)
        }
        Command::DeleteSheet(args) => {
            let response = connection
                .delete_sheet(DeleteSheetOptions {
                    sheet_id: args.id,
                    sheet_name: args.name,
                    allow_sheet_name_modifications: args.allow_sheet_name_modifications,
                })
                .await?;
            print_bound_sheet(connection.sheet_name());
            print_json(&response)
        }
        Command::CreateNamedRange(args) => {
            let response = connection
                .create_named_range(CreateNamedRangeOptions {
                    name: args.name,
                    range: args.range,
                    sheet_id: args.sheet_id,
                    sheet_name: args.sheet_name,
                })
                .await?;
            print_json(&response)
        }
        Command::DeleteNamedRange(args) => {
            let response = connection
                .delete_named_range(DeleteNamedRangeOptions { name: args.name })
                .await?;
            print_json(&response)
        }
    }
}

fn print_bound_sheet(sheet: Option<&str>) {
    match sheet {
        Some(name) => eprintln!("{} {}", "bound sheet:".green().bold(), name),
        None => eprintln!("{}", "no bound sheet".yellow()),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_response(response: &GetResponse, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(response),
        OutputFormat::Table => {
            for line in table_lines(&response.values) {
                println!("{line}");
            }
            Ok(())
        }
    }
}

/// Render values as tab-separated lines; records get their keys as a header line.
fn table_lines(values: &Values) -> Vec<String> {
    match values {
        Values::Grid(grid) => grid
            .iter()
            .map(|row| row.iter().map(cell_text).collect::<Vec<_>>().join("\t"))
            .collect(),
        Values::Records(records) => {
            if records.is_empty() {
                return Vec::new();
            }
            // Records are ragged; columns in order of first appearance.
            let columns: IndexSet<&str> = records
                .iter()
                .flat_map(|record| record.keys().map(String::as_str))
                .collect();
            let mut lines = vec![columns.iter().copied().collect::<Vec<_>>().join("\t")];
            lines.extend(records.iter().map(|record| {
                columns
                    .iter()
                    .map(|key| record.get(*key).map(cell_text).unwrap_or_default())
                    .collect::<Vec<_>>()
                    .join("\t")
            }));
            lines
        }
    }
}

fn cell_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}
