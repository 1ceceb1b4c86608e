//! Enumerated request options and their wire spellings.

use crate::error::SheetsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Implements `as_str`, `Display` and `FromStr` from one variant/spelling table.
macro_rules! wire_enum {
    ($ty:ident, $label:literal, { $($variant:ident => $wire:literal),+ $(,)? }) => {
        impl $ty {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            /// Wire spelling of this value.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($ty::$variant => $wire),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = SheetsError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
                    $($wire => Ok($ty::$variant),)+
                    _ => Err(SheetsError::invalid_option($label, s)),
                }
            }
        }
    };
}

/// How values are rendered in a read response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValueRenderOption {
    #[default]
    FormattedValue,
    UnformattedValue,
    Formula,
}

wire_enum!(ValueRenderOption, "value render option", {
    FormattedValue => "FORMATTED_VALUE",
    UnformattedValue => "UNFORMATTED_VALUE",
    Formula => "FORMULA",
});

/// How written input is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValueInputOption {
    #[default]
    Raw,
    UserEntered,
}

wire_enum!(ValueInputOption, "value input option", {
    Raw => "RAW",
    UserEntered => "USER_ENTERED",
});

/// Whether appended data overwrites or inserts new rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InsertDataOption {
    #[default]
    Overwrite,
    InsertRows,
}

wire_enum!(InsertDataOption, "insert data option", {
    Overwrite => "OVERWRITE",
    InsertRows => "INSERT_ROWS",
});

/// Row-major or column-major grid layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Dimension {
    #[default]
    Rows,
    Columns,
}

wire_enum!(Dimension, "major dimension", {
    Rows => "ROWS",
    Columns => "COLUMNS",
});

/// How dates and times are rendered in a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DateTimeRenderOption {
    SerialNumber,
    #[default]
    FormattedString,
}

wire_enum!(DateTimeRenderOption, "date time render option", {
    SerialNumber => "SERIAL_NUMBER",
    FormattedString => "FORMATTED_STRING",
});
