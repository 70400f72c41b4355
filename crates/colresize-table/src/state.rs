#![forbid(unsafe_code)]

//! Shared table state and the actions dispatched into it.

use colresize_core::{ColumnResizingState, ResizeAction};
use serde::{Deserialize, Serialize};

/// State shared by every reducer registered on a table instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableState {
    /// Owned by the resize plugin; seeded on init.
    pub column_resizing: Option<ColumnResizingState>,
}

impl TableState {
    /// Resize state, or an empty one before init.
    #[must_use]
    pub fn column_resizing(&self) -> ColumnResizingState {
        self.column_resizing.clone().unwrap_or_default()
    }
}

/// Action routed through every registered state reducer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TableAction {
    /// Dispatched once when the instance is created.
    Init,
    Resize { action: ResizeAction },
    /// Action owned by some other reducer.
    Custom { kind: String },
}

impl From<ResizeAction> for TableAction {
    fn from(action: ResizeAction) -> Self {
        Self::Resize { action }
    }
}
