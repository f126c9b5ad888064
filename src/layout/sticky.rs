//! Sticky-column geometry.
//!
//! The sticky column is rendered twice: once in normal flow, so total
//! content width and the scroll range stay correct, and once as an
//! elevated, opaque-background overlay pinned at the clamped offset, so
//! content scrolling underneath does not show through. All math here is
//! derived per layout pass from the pass's width snapshot — nothing is
//! stored across passes.

use crate::layout::grid_layout::GridLayout;
use crate::layout::viewport::Viewport;
use crate::types::{Column, GridConfig};

/// Derived geometry for the pinned overlay of the sticky column.
#[derive(Debug, Clone, PartialEq)]
pub struct StickyGeometry {
    /// Display index of the sticky column.
    pub column_index: usize,
    /// Left edge of the column in content coordinates.
    pub column_x: f32,
    /// Resolved width of the column.
    pub width: f32,
    /// Pinned position of the overlay in viewport coordinates:
    /// `clamp(column_x - scroll_x, 0, viewport_width - width)`.
    pub offset_x: f32,
    /// Relative transform applied on top of normal scroll positioning.
    /// Zero while the column is naturally inside the viewport; non-zero
    /// exactly when the overlay is pinned at an edge. Keeping this a
    /// relative transform leaves the column's logical position in the
    /// scrollable content unchanged, so hit testing and scroll math for
    /// the rest of the row stay correct.
    pub translation_x: f32,
    /// Total content width for this pass.
    pub total_content_width: f32,
    /// Viewport width for this pass.
    pub viewport_width: f32,
}

/// Resolve which column (if any) is sticky.
///
/// Precedence: the explicit `sticky_column_id` always wins; the legacy
/// stick-first-column flag falls back to the first column; the legacy
/// per-column flag picks the first column that sets it. An explicit id
/// naming no column deactivates the feature entirely rather than falling
/// through to the legacy flags.
pub fn resolve_sticky_column<T>(config: &GridConfig, columns: &[Column<T>]) -> Option<usize> {
    if let Some(id) = &config.sticky_column_id {
        let found = columns.iter().position(|c| &c.id == id);
        if found.is_none() {
            log::warn!("sticky column id {id:?} matches no column, sticky disabled");
        }
        return found;
    }
    if config.stick_first_column {
        return if columns.is_empty() { None } else { Some(0) };
    }
    columns.iter().position(|c| c.sticky)
}

impl StickyGeometry {
    /// Compute the overlay geometry for the sticky column at
    /// `column_index`, reading the pass's layout snapshot and the current
    /// scroll position.
    pub fn compute(layout: &GridLayout, viewport: &Viewport, column_index: usize) -> Self {
        let column_x = layout.column_x(column_index);
        let width = layout.column_width(column_index);
        let flow_x = column_x - viewport.scroll_x;
        let offset_x = flow_x.clamp(0.0, (viewport.width - width).max(0.0));
        Self {
            column_index,
            column_x,
            width,
            offset_x,
            translation_x: offset_x - flow_x,
            total_content_width: layout.total_width(),
            viewport_width: viewport.width,
        }
    }

    /// True when the overlay is pinned (the column would otherwise be
    /// partially or fully outside the viewport).
    pub fn is_pinned(&self) -> bool {
        self.translation_x.abs() > 0.0
    }
}

/// Initial horizontal offset that centers the sticky column in the
/// viewport, clamped to the valid scroll range. Applied once per sticky
/// configuration, and only when the current scroll is exactly at origin —
/// a restored scroll position must not be overridden.
pub fn initial_center_offset(layout: &GridLayout, viewport_width: f32, column_index: usize) -> f32 {
    let column_x = layout.column_x(column_index);
    let width = layout.column_width(column_index);
    let centered = column_x + width / 2.0 - viewport_width / 2.0;
    centered.clamp(0.0, (layout.total_width() - viewport_width).max(0.0))
}
