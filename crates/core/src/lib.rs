//! # sheetlink-core
//!
//! Client-side addressing and option resolution for a remote spreadsheet
//! service.
//!
//! This crate provides:
//! - Per-setting precedence between call overrides, connection defaults and fallbacks
//! - `sheet!range` address resolution
//! - Tracking of the sheet a connection is bound to
//! - Named range coordinates from A1-style range expressions
//! - Header-keyed reshaping of value grids
//! - The [`SpreadsheetService`] trait the connection delegates to
//!
//! # Examples
//!
//! ```
//! use sheetlink_core::{resolve_address, ConnectionConfig};
//!
//! let config = ConnectionConfig::new("spreadsheet-id")
//!     .with_sheet("Sheet1")
//!     .with_range("A1:B2");
//!
//! let address = resolve_address(
//!     config.sheet.as_deref(),
//!     config.range.as_deref(),
//!     None,
//!     Some("C1:D2"),
//! )
//! .unwrap();
//! assert_eq!(address.to_string(), "Sheet1!C1:D2");
//! ```

/// A1-style range expressions to grid coordinates.
pub mod a1_notation;
/// `sheet!range` address resolution.
pub mod address;
/// Connection defaults, call overrides and precedence.
pub mod config;
/// The connection type and its operations.
pub mod connection;
/// Error types and result aliases.
pub mod error;
/// Bound-sheet state machine.
pub mod identity;
/// Remote request and response shapes.
pub mod model;
/// Option enums.
pub mod options;
/// Header-keyed reshaping of value grids.
pub mod reshape;
/// Remote service collaborator.
pub mod service;

pub use a1_notation::{parse_grid_range, GridRange};
pub use address::{resolve_address, EffectiveAddress};
pub use config::{
    resolve, AppendOptions, ClearOptions, ConnectionConfig, CreateNamedRangeOptions,
    CreateSheetOptions, DeleteNamedRangeOptions, DeleteSheetOptions, GetOptions, UpdateOptions,
};
pub use connection::SheetsConnection;
pub use error::{ErrorKind, SheetsError, SheetsResult};
pub use identity::{SheetIdentity, SheetIdentityTracker, SheetReference};
pub use model::{GetResponse, Grid, Values};
pub use options::{
    DateTimeRenderOption, Dimension, InsertDataOption, ValueInputOption, ValueRenderOption,
};
pub use reshape::{reshape, Record};
pub use service::{Credentials, SpreadsheetService};
