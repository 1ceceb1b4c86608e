use crate::error::{SheetsError, SheetsResult};
use serde::{Deserialize, Serialize};

/// Zero-based, end-exclusive row/column bounds of a rectangular region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridRange {
    pub start_row_index: u32,
    pub end_row_index: u32,
    pub start_column_index: u32,
    pub end_column_index: u32,
}

impl GridRange {
    /// Render the bounds back to `<column><row>:<column><row>`.
    ///
    /// Returns `None` if a column falls outside A-Z or the range is empty.
    pub fn to_a1(&self) -> Option<String> {
        if self.end_row_index == 0 || self.end_column_index == 0 {
            return None;
        }
        Some(format!(
            "{}{}:{}{}",
            column_index_to_letter(self.start_column_index)?,
            self.start_row_index + 1,
            column_index_to_letter(self.end_column_index - 1)?,
            self.end_row_index
        ))
    }
}

/// Parse a two-corner range expression (e.g. "A1:B4") into grid bounds.
///
/// Columns are single letters A-Z (case insensitive), rows are 1-based.
/// The first corner must not lie below or right of the second.
pub fn parse_grid_range(expression: &str) -> SheetsResult<GridRange> {
    let invalid = || SheetsError::InvalidRange(expression.to_string());

    let (first, second) = expression.trim().split_once(':').ok_or_else(invalid)?;
    let (start_col, start_row) = parse_corner(first).ok_or_else(invalid)?;
    let (end_col, end_row) = parse_corner(second).ok_or_else(invalid)?;

    if start_col > end_col || start_row > end_row {
        return Err(invalid());
    }

    Ok(GridRange {
        start_row_index: start_row - 1,
        end_row_index: end_row,
        start_column_index: start_col,
        end_column_index: end_col + 1,
    })
}

/// Split "B12" into (column index 1, row 12).
fn parse_corner(corner: &str) -> Option<(u32, u32)> {
    let mut chars = corner.chars();
    let column = column_letter_to_index(chars.next()?)?;
    let digits = chars.as_str();

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let row = digits.parse::<u32>().ok()?;
    if row == 0 {
        return None;
    }

    Some((column, row))
}

/// A=0, B=1, ... Z=25
pub fn column_letter_to_index(letter: char) -> Option<u32> {
    let upper = letter.to_ascii_uppercase();
    upper
        .is_ascii_uppercase()
        .then(|| u32::from(upper) - u32::from('A'))
}

/// 0=A, 1=B, ... 25=Z
pub fn column_index_to_letter(index: u32) -> Option<char> {
    (index < 26).then(|| char::from(b'A' + index as u8))
}
