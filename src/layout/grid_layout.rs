//! Pre-computed horizontal layout for one pass.
//!
//! Built once per layout pass from the column order and a resolved width
//! map, enabling O(log n) column hit testing and O(1) position lookups.

use std::collections::HashMap;

use crate::layout::width::ColumnWidthMap;
use crate::types::ColumnId;

/// Rectangle for one cell in content coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct CellRect {
    /// X position (left edge).
    pub x: f32,
    /// Y position (top edge).
    pub y: f32,
    /// Width of the cell.
    pub width: f32,
    /// Height of the cell.
    pub height: f32,
}

/// Cumulative column geometry for one layout pass.
#[derive(Debug, Clone)]
pub struct GridLayout {
    /// Column ids in display order.
    col_ids: Vec<ColumnId>,
    /// `col_positions[i]` = x of column i's left edge; one extra entry for
    /// the right edge of the last column.
    col_positions: Vec<f32>,
    /// Resolved widths in display order.
    col_widths: Vec<f32>,
    /// Display index by column id.
    index_by_id: HashMap<ColumnId, usize>,
}

impl GridLayout {
    /// Build the layout from ordered ids and the pass's width snapshot.
    pub fn new(ordered_ids: &[ColumnId], widths: &ColumnWidthMap) -> Self {
        let mut col_positions = Vec::with_capacity(ordered_ids.len() + 1);
        let mut col_widths = Vec::with_capacity(ordered_ids.len());
        let mut index_by_id = HashMap::with_capacity(ordered_ids.len());

        let mut x = 0.0_f32;
        for (i, id) in ordered_ids.iter().enumerate() {
            col_positions.push(x);
            let w = widths.get(id);
            col_widths.push(w);
            index_by_id.insert(id.clone(), i);
            x += w;
        }
        col_positions.push(x); // Final edge

        Self {
            col_ids: ordered_ids.to_vec(),
            col_positions,
            col_widths,
            index_by_id,
        }
    }

    /// Number of columns.
    pub fn col_count(&self) -> usize {
        self.col_ids.len()
    }

    /// Display index of a column id.
    pub fn column_index(&self, id: &str) -> Option<usize> {
        self.index_by_id.get(id).copied()
    }

    /// Column id at a display index.
    pub fn column_id(&self, index: usize) -> Option<&str> {
        self.col_ids.get(index).map(String::as_str)
    }

    /// X of the column's left edge in content coordinates.
    pub fn column_x(&self, index: usize) -> f32 {
        self.col_positions.get(index).copied().unwrap_or(0.0)
    }

    /// Resolved width of the column at a display index.
    pub fn column_width(&self, index: usize) -> f32 {
        self.col_widths.get(index).copied().unwrap_or(0.0)
    }

    /// Find the column containing an x position (binary search).
    pub fn col_at_x(&self, x: f32) -> Option<usize> {
        if self.col_ids.is_empty() || x < 0.0 || x >= self.total_width() {
            return None;
        }
        match self
            .col_positions
            .binary_search_by(|pos| pos.partial_cmp(&x).unwrap_or(std::cmp::Ordering::Equal))
        {
            Ok(i) => Some(i.min(self.col_ids.len() - 1)),
            Err(i) => Some(i.saturating_sub(1)),
        }
    }

    /// Total content width (scroll range upper bound).
    pub fn total_width(&self) -> f32 {
        self.col_positions.last().copied().unwrap_or(0.0)
    }

    /// Content-coordinate rect for the column at `index`, at the given
    /// vertical position and row height.
    pub fn column_rect(&self, index: usize, y: f32, height: f32) -> CellRect {
        CellRect {
            x: self.column_x(index),
            y,
            width: self.column_width(index),
            height,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::cache::LruCache;
    use crate::layout::width::resolve_widths;
    use crate::render::{HeuristicTextMeasurer, TextCell};
    use crate::types::{Column, ColumnWidth};

    fn fixed_layout(widths: &[(&str, f32)]) -> GridLayout {
        let columns: Vec<Column<u32>> = widths
            .iter()
            .map(|&(id, w)| {
                Column::new(id, id, TextCell::new(|v: &u32| v.to_string()))
                    .width(ColumnWidth::Fixed(w))
            })
            .collect();
        let measurer = HeuristicTextMeasurer::new(14.0);
        let mut cache = LruCache::new(16);
        let map = resolve_widths(&columns, &[], 800.0, &measurer, &mut cache);
        let ids: Vec<String> = widths.iter().map(|&(id, _)| id.to_string()).collect();
        GridLayout::new(&ids, &map)
    }

    #[test]
    fn test_cumulative_positions() {
        let layout = fixed_layout(&[("a", 50.0), ("b", 80.0), ("c", 120.0)]);
        assert_eq!(layout.column_x(0), 0.0);
        assert_eq!(layout.column_x(1), 50.0);
        assert_eq!(layout.column_x(2), 130.0);
        assert_eq!(layout.total_width(), 250.0);
    }

    #[test]
    fn test_index_and_id_lookup() {
        let layout = fixed_layout(&[("a", 50.0), ("b", 80.0)]);
        assert_eq!(layout.column_index("b"), Some(1));
        assert_eq!(layout.column_index("zzz"), None);
        assert_eq!(layout.column_id(0), Some("a"));
        assert_eq!(layout.column_id(9), None);
    }

    #[test]
    fn test_col_at_x() {
        let layout = fixed_layout(&[("a", 50.0), ("b", 80.0), ("c", 120.0)]);
        assert_eq!(layout.col_at_x(0.0), Some(0));
        assert_eq!(layout.col_at_x(49.9), Some(0));
        assert_eq!(layout.col_at_x(50.0), Some(1));
        assert_eq!(layout.col_at_x(129.0), Some(1));
        assert_eq!(layout.col_at_x(130.0), Some(2));
        assert_eq!(layout.col_at_x(249.9), Some(2));
        assert_eq!(layout.col_at_x(250.0), None);
        assert_eq!(layout.col_at_x(-1.0), None);
    }

    #[test]
    fn test_empty_layout() {
        let layout = fixed_layout(&[]);
        assert_eq!(layout.col_count(), 0);
        assert_eq!(layout.total_width(), 0.0);
        assert_eq!(layout.col_at_x(0.0), None);
    }

    #[test]
    fn test_column_rect() {
        let layout = fixed_layout(&[("a", 50.0), ("b", 80.0)]);
        let rect = layout.column_rect(1, 96.0, 48.0);
        assert_eq!(rect.x, 50.0);
        assert_eq!(rect.y, 96.0);
        assert_eq!(rect.width, 80.0);
        assert_eq!(rect.height, 48.0);
    }
}
