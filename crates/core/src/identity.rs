//! The sheet a connection is currently bound to.

use crate::config::DeleteSheetOptions;
use crate::error::{SheetsError, SheetsResult};

/// Binding state of a connection's current sheet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SheetIdentity {
    #[default]
    Unbound,
    Bound(String),
}

impl SheetIdentity {
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Unbound => None,
            Self::Bound(name) => Some(name),
        }
    }
}

/// Owns the [`SheetIdentity`] and its two transitions.
///
/// Transitions are only applied after a successful remote mutation; callers
/// pass the already-resolved permission flag.
#[derive(Debug, Clone, Default)]
pub struct SheetIdentityTracker {
    state: SheetIdentity,
}

impl SheetIdentityTracker {
    pub fn new(default_sheet: Option<String>) -> Self {
        let state = default_sheet.map_or(SheetIdentity::Unbound, SheetIdentity::Bound);
        Self { state }
    }

    pub fn state(&self) -> &SheetIdentity {
        &self.state
    }

    pub fn current(&self) -> Option<&str> {
        self.state.name()
    }

    /// Rebind to `name` if permitted. Returns whether the state changed.
    pub fn on_sheet_created(&mut self, name: &str, permitted: bool) -> bool {
        if !permitted {
            return false;
        }
        tracing::info!(from = ?self.state.name(), to = name, "rebinding sheet");
        self.state = SheetIdentity::Bound(name.to_string());
        true
    }

    /// Unbind if permitted. Returns whether the state changed.
    pub fn on_sheet_deleted(&mut self, permitted: bool) -> bool {
        if !permitted || self.state == SheetIdentity::Unbound {
            return false;
        }
        tracing::info!(from = ?self.state.name(), "unbinding sheet");
        self.state = SheetIdentity::Unbound;
        true
    }

    /// Decide which sheet a delete request targets.
    pub fn delete_target(&self, options: &DeleteSheetOptions) -> SheetsResult<SheetReference> {
        match (options.sheet_id, options.sheet_name.as_deref()) {
            (Some(_), Some(_)) => Err(SheetsError::ConflictingSheetReference),
            (Some(id), None) => Ok(SheetReference::Id(id)),
            (None, Some(name)) => Ok(SheetReference::Name(name.to_string())),
            (None, None) => self
                .current()
                .map(|name| SheetReference::Name(name.to_string()))
                .ok_or(SheetsError::MissingSheetReference),
        }
    }
}

/// A sheet addressed by remote id or by title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetReference {
    Id(i64),
    Name(String),
}
