//! Persistable session snapshot.
//!
//! Hosts save this across process configuration changes and hand it back
//! when recreating the grid. Round-trips losslessly through JSON.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::sort::{SortDirection, SortState};
use crate::types::ColumnId;

/// Everything needed to restore a grid session's user-visible state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GridSnapshot {
    /// Sorted column id, `None` when no sort is active.
    pub sort_column_id: Option<ColumnId>,
    /// Sort direction ordinal ([`SortDirection::ordinal`]); meaningful only
    /// when `sort_column_id` is set.
    pub sort_direction_ordinal: u8,
    /// Shared horizontal scroll offset in pixels.
    pub scroll_offset_x: f32,
    /// Index of the first row intersecting the viewport.
    pub first_visible_row: usize,
    /// Scroll offset within that row, in pixels.
    pub first_visible_row_offset_px: f32,
}

impl GridSnapshot {
    /// Capture the sort fields from a [`SortState`].
    pub fn with_sort(mut self, state: &SortState) -> Self {
        self.sort_column_id = state.column_id().map(str::to_string);
        self.sort_direction_ordinal = state.direction().map_or(0, SortDirection::ordinal);
        self
    }

    /// Reconstruct the [`SortState`] this snapshot carries.
    ///
    /// An unknown direction ordinal degrades to no sort rather than failing
    /// the whole restore.
    pub fn sort_state(&self) -> SortState {
        match (
            &self.sort_column_id,
            SortDirection::from_ordinal(self.sort_direction_ordinal),
        ) {
            (Some(id), Some(direction)) => SortState::sorted(id.clone(), direction),
            _ => SortState::inactive(),
        }
    }

    /// Serialize to a JSON string for host persistence.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize from a JSON string produced by [`to_json`](Self::to_json).
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
