//! Row virtualization: which rows are realized for the current viewport.
//!
//! Vertical windowing is independent of horizontal state — a horizontal
//! gesture never changes which rows exist. Rows are uniform height (from
//! config), so the window is pure arithmetic over the vertical scroll
//! position plus a prefetch margin on both sides.

use std::rc::Rc;

/// Host-supplied stable key for an item, used for recomposition identity.
pub type ItemKeyFn<T> = Rc<dyn Fn(&T, usize) -> String>;

/// Identity of a realized row.
///
/// Positional identity is the fallback when the host supplies no key
/// function; it is unstable across sort or filter changes, which is a
/// documented limitation of positional keying.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RowKey {
    /// Host-supplied per-item key.
    Key(String),
    /// Position in the source sequence.
    Index(usize),
}

/// Inclusive range of realized row indices (display order).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowWindow {
    pub first: usize,
    pub last: usize,
}

impl RowWindow {
    /// Iterate the realized display indices.
    pub fn iter(&self) -> impl Iterator<Item = usize> {
        self.first..=self.last
    }

    /// Number of realized rows.
    pub fn len(&self) -> usize {
        self.last - self.first + 1
    }

    /// Windows are never empty; `None` stands for "no rows".
    pub fn is_empty(&self) -> bool {
        false
    }

    /// True if the display index falls inside the window.
    pub fn contains(&self, index: usize) -> bool {
        (self.first..=self.last).contains(&index)
    }
}

/// Rows intersecting the viewport, extended by `prefetch` rows on each
/// side and clamped to `[0, row_count)`. Returns `None` when there are no
/// rows or the viewport has no height.
// Cast operands are clamped non-negative before and to row_count after.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn visible_window(
    scroll_y: f32,
    viewport_height: f32,
    row_height: f32,
    row_count: usize,
    prefetch: usize,
) -> Option<RowWindow> {
    if row_count == 0 || viewport_height <= 0.0 || row_height <= 0.0 {
        return None;
    }
    let first_visible = (scroll_y / row_height).floor().max(0.0) as usize;
    // Last row whose top edge is above the viewport bottom.
    let last_visible = ((scroll_y + viewport_height) / row_height).ceil().max(1.0) as usize - 1;

    let first = first_visible.saturating_sub(prefetch).min(row_count - 1);
    let last = last_visible.saturating_add(prefetch).min(row_count - 1);
    Some(RowWindow { first, last })
}

/// Vertical scroll offset that puts `index`'s top edge at the top of the
/// viewport, clamped to the valid scroll range. Idempotent: the same
/// target always yields the same offset.
#[allow(clippy::cast_precision_loss)]
pub fn scroll_offset_for_row(
    index: usize,
    row_height: f32,
    row_count: usize,
    viewport_height: f32,
) -> f32 {
    let index = index.min(row_count.saturating_sub(1));
    let total = row_count as f32 * row_height;
    let target = index as f32 * row_height;
    target.clamp(0.0, (total - viewport_height).max(0.0))
}

/// Key for the row displaying `item` at source position `source_index`.
pub fn row_key<T>(item: &T, source_index: usize, key_fn: Option<&ItemKeyFn<T>>) -> RowKey {
    match key_fn {
        Some(f) => RowKey::Key(f(item, source_index)),
        None => RowKey::Index(source_index),
    }
}
