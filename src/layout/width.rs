//! Column width resolution.
//!
//! Produces one [`ColumnWidthMap`] per layout pass from the column list,
//! the (unsorted) item list, and the viewport width. The map is a
//! consistent snapshot: all position and sticky math within a pass reads
//! the same resolved widths.

use std::collections::HashMap;

use crate::cache::LruCache;
use crate::render::TextMeasurer;
use crate::types::{Column, ColumnId, ColumnWidth};

/// Width used when a column id has no entry in the map. Lookups by id must
/// never fail downstream; a miss is logged and falls back to this.
pub const FALLBACK_COLUMN_WIDTH: f32 = 64.0;

/// Upper bound on the number of item cells measured per content-based
/// column. Measurement is a synchronous pass inside the layout cycle, so
/// bounding it is a responsiveness requirement on large datasets, not an
/// optimization.
pub const WIDTH_SAMPLE_ROWS: usize = 100;

/// Horizontal allowance reserved in a sortable column's header for the
/// sort indicator icon.
pub const SORT_INDICATOR_ALLOWANCE: f32 = 18.0;

/// Resolved width in pixels per column id, valid for one layout pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnWidthMap {
    widths: HashMap<ColumnId, f32>,
}

impl ColumnWidthMap {
    /// Width for `id`, falling back to [`FALLBACK_COLUMN_WIDTH`] on a miss.
    pub fn get(&self, id: &str) -> f32 {
        match self.widths.get(id) {
            Some(w) => *w,
            None => {
                log::warn!("width map miss for column {id:?}, using fallback");
                FALLBACK_COLUMN_WIDTH
            }
        }
    }

    /// Width for `id`, or `None` if the column was not resolved.
    pub fn get_opt(&self, id: &str) -> Option<f32> {
        self.widths.get(id).copied()
    }

    /// Number of resolved columns.
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    /// True when no columns were resolved.
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }
}

/// Resolve every column's width for one layout pass.
///
/// Fixed widths pass through verbatim. Content-based widths measure the
/// header (title plus the sort-indicator allowance when sortable) and up to
/// [`WIDTH_SAMPLE_ROWS`] item cells, take the maximum, add symmetric
/// padding, and clamp to `[min, max]`. Flexible columns then split the
/// leftover viewport space proportionally to their weights.
///
/// `measure_cache` keys raw (pre-padding, pre-clamp) content measurements
/// by column id; the caller clears it when columns or items change.
pub fn resolve_widths<T>(
    columns: &[Column<T>],
    items: &[T],
    viewport_width: f32,
    measurer: &dyn TextMeasurer,
    measure_cache: &mut LruCache<ColumnId, f32>,
) -> ColumnWidthMap {
    let mut widths: HashMap<ColumnId, f32> = HashMap::with_capacity(columns.len());
    let mut used = 0.0_f32;
    let mut flexible: Vec<(&ColumnId, f32)> = Vec::new();

    for col in columns {
        match col.width {
            ColumnWidth::Fixed(w) => {
                widths.insert(col.id.clone(), w);
                used += w;
            }
            ColumnWidth::ContentBased { min, max, padding } => {
                let measured = measure_cache
                    .get_or_insert_with(&col.id, || measure_content(col, items, measurer));
                let w = (measured + 2.0 * padding).clamp(min, max);
                widths.insert(col.id.clone(), w);
                used += w;
            }
            ColumnWidth::Flexible(weight) => {
                flexible.push((&col.id, weight.max(0.0)));
            }
        }
    }

    if !flexible.is_empty() {
        let remaining = (viewport_width - used).max(0.0);
        let total_weight: f32 = flexible.iter().map(|&(_, w)| w).sum();
        for (id, weight) in flexible {
            let w = if total_weight > 0.0 {
                remaining * weight / total_weight
            } else {
                FALLBACK_COLUMN_WIDTH
            };
            widths.insert(id.clone(), w);
        }
    }

    ColumnWidthMap { widths }
}

/// Maximum intrinsic content width observed for one column: header content
/// plus a bounded sample of item cells. With zero items this degrades to a
/// header-only measurement.
fn measure_content<T>(col: &Column<T>, items: &[T], measurer: &dyn TextMeasurer) -> f32 {
    let mut header = measurer.text_width(&col.title);
    if col.sortable {
        header += SORT_INDICATOR_ALLOWANCE;
    }

    let mut widest = header;
    for (row, item) in items.iter().take(WIDTH_SAMPLE_ROWS).enumerate() {
        widest = widest.max(col.renderer.measure(item, row, measurer));
    }
    widest
}
