//! Grid configuration record and construction-time validation.

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};
use crate::types::ColumnId;

/// Divider (grid line) appearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DividerConfig {
    /// Draw lines between rows.
    pub show_horizontal: bool,
    /// Draw lines between columns.
    pub show_vertical: bool,
    /// Line thickness in pixels.
    pub thickness: f32,
    /// Line color, hex string like "#RRGGBB".
    pub color: String,
}

impl Default for DividerConfig {
    fn default() -> Self {
        Self {
            show_horizontal: true,
            show_vertical: false,
            thickness: 1.0,
            color: "#E0E0E0".to_string(),
        }
    }
}

/// Grid configuration. Plain data — callbacks (item key, style override,
/// sort notification) are passed to the session separately.
///
/// Not every field drives the core engine: `sticky_header`,
/// `sort_animation`, `drag_resize`, `clip_content`, and `dividers` are
/// carried through for the host's drawing backend, which owns those
/// rendering behaviors.
///
/// Invalid values that have no sane runtime default are rejected by
/// [`validate`](Self::validate) at construction; everything downstream can
/// then assume positive heights and a non-negative divider thickness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Allow user-driven horizontal scrolling.
    pub horizontal_scroll: bool,
    /// Allow user-driven vertical scrolling.
    pub vertical_scroll: bool,
    /// Pin the header row at the top during vertical scrolling.
    pub sticky_header: bool,
    /// Explicit sticky column selection; always wins over
    /// [`stick_first_column`](Self::stick_first_column).
    pub sticky_column_id: Option<ColumnId>,
    /// Legacy toggle: pin the first column when no explicit id is set.
    pub stick_first_column: bool,
    /// Divider appearance.
    pub dividers: DividerConfig,
    /// Height of every data row in pixels.
    pub row_height: f32,
    /// Height of the header row in pixels.
    pub header_height: f32,
    /// Animate row reordering on sort changes.
    pub sort_animation: bool,
    /// Allow drag-resizing of column dividers.
    pub drag_resize: bool,
    /// Rows realized beyond each edge of the visible window.
    pub prefetch_rows: usize,
    /// Clip cell content to the cell rect.
    pub clip_content: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            horizontal_scroll: true,
            vertical_scroll: true,
            sticky_header: true,
            sticky_column_id: None,
            stick_first_column: false,
            dividers: DividerConfig::default(),
            row_height: 48.0,
            header_height: 56.0,
            sort_animation: true,
            drag_resize: false,
            prefetch_rows: 2,
            clip_content: true,
        }
    }
}

impl GridConfig {
    /// Validate the configuration. Called by the session constructor; hosts
    /// building configs from untrusted input can call it directly.
    pub fn validate(&self) -> Result<()> {
        if !self.row_height.is_finite() || self.row_height <= 0.0 {
            return Err(GridError::Config(format!(
                "row_height must be positive, got {}",
                self.row_height
            )));
        }
        if !self.header_height.is_finite() || self.header_height <= 0.0 {
            return Err(GridError::Config(format!(
                "header_height must be positive, got {}",
                self.header_height
            )));
        }
        if !self.dividers.thickness.is_finite() || self.dividers.thickness < 0.0 {
            return Err(GridError::Config(format!(
                "divider thickness must be non-negative, got {}",
                self.dividers.thickness
            )));
        }
        Ok(())
    }
}
