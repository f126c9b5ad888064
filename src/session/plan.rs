//! Render plans: per-frame descriptions the host backend draws from.
//!
//! All rects are in content coordinates; the host applies the shared
//! scroll transform when drawing. The sticky overlay's rect already folds
//! the current scroll in, so the same transform pins it at the clamped
//! viewport offset.

use crate::layout::{CellRect, GridLayout, StickyGeometry};
use crate::render::{CellContext, CellFill, DrawableCell};
use crate::types::{ColumnId, SortDirection};
use crate::virtualize::RowKey;

use super::GridSession;

/// Fill used for the sticky overlay when the row style supplies none.
/// The overlay must be opaque so content scrolling underneath does not
/// show through.
pub const DEFAULT_OVERLAY_FILL: &str = "#FFFFFF";

/// One header cell, ready for drawing.
#[derive(Debug, Clone)]
pub struct HeaderCell {
    pub column_id: ColumnId,
    pub title: String,
    pub rect: CellRect,
    pub sortable: bool,
    /// Indicator direction when this column is the active sort.
    pub sort_direction: Option<SortDirection>,
}

/// The header row for one frame.
#[derive(Debug, Clone)]
pub struct HeaderPlan {
    /// Header cells in display order (normal flow, including the sticky
    /// column at its natural position).
    pub cells: Vec<HeaderCell>,
    /// Pinned duplicate of the sticky column's header cell, drawn last.
    pub overlay: Option<HeaderCell>,
    pub height: f32,
}

/// One realized data row for one frame.
#[derive(Debug, Clone)]
pub struct RowPlan {
    /// Display position (after sorting).
    pub display_row: usize,
    /// Position in the source item list.
    pub source_index: usize,
    /// Recomposition identity for this row.
    pub key: RowKey,
    /// Top edge in content coordinates.
    pub y: f32,
    /// Cells in display order (normal flow).
    pub cells: Vec<DrawableCell>,
    /// Pinned duplicate of the sticky column's cell, drawn above the row
    /// with an opaque background.
    pub overlay: Option<DrawableCell>,
}

impl<T> GridSession<T> {
    /// Header plan from the last layout snapshot. `None` before the first
    /// pass.
    pub fn header_plan(&self) -> Option<HeaderPlan> {
        let layout = self.layout.as_ref()?;
        let sticky = self.sticky_geometry();

        let cells: Vec<HeaderCell> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| HeaderCell {
                column_id: col.id.clone(),
                title: col.title.clone(),
                rect: layout.column_rect(i, 0.0, self.config.header_height),
                sortable: col.sortable,
                sort_direction: self.sort_state.direction_for(&col.id),
            })
            .collect();

        let overlay = sticky.as_ref().and_then(|geo| {
            let mut cell = cells.get(geo.column_index)?.clone();
            cell.rect = self.pinned_rect(geo, 0.0, self.config.header_height);
            Some(cell)
        });

        Some(HeaderPlan {
            cells,
            overlay,
            height: self.config.header_height,
        })
    }

    /// Plan for the row at `display_row`. `None` before the first layout
    /// pass or past the end of the data.
    pub fn row_plan(&self, display_row: usize) -> Option<RowPlan> {
        let layout = self.layout.as_ref()?;
        let sticky = self.sticky_geometry();
        self.row_plan_in(layout, sticky.as_ref(), display_row)
    }

    /// Plans for every realized row (visible window plus prefetch).
    pub fn row_plans(&self) -> Vec<RowPlan> {
        let Some(layout) = self.layout.as_ref() else {
            return Vec::new();
        };
        let Some(window) = self.visible_rows() else {
            return Vec::new();
        };
        let sticky = self.sticky_geometry();
        window
            .iter()
            .filter_map(|row| self.row_plan_in(layout, sticky.as_ref(), row))
            .collect()
    }

    fn row_plan_in(
        &self,
        layout: &GridLayout,
        sticky: Option<&StickyGeometry>,
        display_row: usize,
    ) -> Option<RowPlan> {
        let source_index = self.source_index(display_row)?;
        let item = self.items.get(source_index)?;
        #[allow(clippy::cast_precision_loss)]
        let y = display_row as f32 * self.config.row_height;
        let style = self
            .row_style
            .as_ref()
            .and_then(|f| f(item, display_row));

        let cells: Vec<DrawableCell> = (0..layout.col_count())
            .filter_map(|i| {
                let col = self.columns.get(i)?;
                let ctx = CellContext {
                    rect: self.cell_rect(layout, i, y),
                    style: style.clone(),
                };
                Some(col.renderer.render(item, display_row, &ctx))
            })
            .collect();

        let overlay = sticky.and_then(|geo| {
            let col = self.columns.get(geo.column_index)?;
            let ctx = CellContext {
                rect: self.pinned_rect(geo, y, self.config.row_height),
                style: style.clone(),
            };
            let mut cell = col.renderer.render(item, display_row, &ctx);
            if cell.fill.is_none() {
                cell.fill = Some(CellFill::Solid(DEFAULT_OVERLAY_FILL.to_string()));
            }
            Some(cell)
        });

        Some(RowPlan {
            display_row,
            source_index,
            key: self.row_key(display_row).unwrap_or(RowKey::Index(source_index)),
            y,
            cells,
            overlay,
        })
    }

    /// Content-coordinate rect that the shared scroll transform maps to
    /// the sticky column's pinned viewport position.
    fn pinned_rect(&self, geo: &StickyGeometry, y: f32, height: f32) -> CellRect {
        CellRect {
            x: self.viewport.scroll_x + geo.offset_x,
            y,
            width: geo.width,
            height,
        }
    }
}
