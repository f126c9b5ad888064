//! Grid session — the composition root.
//!
//! One `GridSession` owns all mutable grid state for the lifetime of a
//! grid instance: scroll position, sort state, the per-pass width/layout
//! snapshot, and the measurement cache. It is a single-writer object bound
//! to the host's UI-update thread; there is no locking and no background
//! work. The host drives it cooperatively: mutate inputs, call
//! [`GridSession::frame`] once per render tick, then read plans.
//!
//! State machine: `Uninitialized → Measuring → Ready`, re-entering
//! `Measuring` whenever columns, item identity, or viewport size change.
//! Scroll and sort interactions are handled in `Ready` without
//! re-measurement.

mod plan;

pub use plan::{HeaderCell, HeaderPlan, RowPlan};

use std::collections::HashSet;
use std::rc::Rc;

use crate::animate::ScrollAnimation;
use crate::cache::LruCache;
use crate::error::{GridError, Result};
use crate::layout::{
    initial_center_offset, resolve_sticky_column, CellRect, ColumnWidthMap, GridLayout,
    StickyGeometry, Viewport,
};
use crate::render::{HeuristicTextMeasurer, RowStyle, TextMeasurer};
use crate::sort::sort_order;
use crate::types::{Column, ColumnId, GridConfig, GridSnapshot, SortState};
use crate::virtualize::{self, ItemKeyFn, RowKey, RowWindow};

/// Per-item style override callback.
pub type RowStyleFn<T> = Rc<dyn Fn(&T, usize) -> Option<RowStyle>>;

/// Notification fired after the sort state changes through a session
/// operation.
pub type SortChangedFn = Rc<dyn Fn(&SortState)>;

/// Capacity of the per-column content measurement cache.
const MEASURE_CACHE_COLUMNS: usize = 256;

/// Default font size for the built-in heuristic measurer.
const DEFAULT_FONT_SIZE: f32 = 14.0;

/// Lifecycle phase of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No layout pass has run yet.
    Uninitialized,
    /// A measurement pass is in progress.
    Measuring,
    /// Steady state: scroll and sort are handled from the last snapshot.
    Ready,
}

/// The grid's session object. See the module docs for the threading and
/// lifecycle contract.
pub struct GridSession<T> {
    columns: Vec<Column<T>>,
    items: Vec<T>,
    config: GridConfig,
    measurer: Rc<dyn TextMeasurer>,

    viewport: Viewport,
    sort_state: SortState,
    /// Display-order permutation over `items`; `None` = source order.
    sort_order: Option<Vec<usize>>,

    phase: Phase,
    /// Bumped whenever a tracked input (columns, items, viewport size)
    /// changes. A pass is due while it differs from `laid_out_generation`.
    generation: u64,
    laid_out_generation: u64,
    /// Sticky column id for which the initial centering jump already ran.
    centered_for: Option<ColumnId>,

    width_map: ColumnWidthMap,
    layout: Option<GridLayout>,
    sticky_index: Option<usize>,

    measure_cache: LruCache<ColumnId, f32>,
    animation: Option<ScrollAnimation>,

    item_key: Option<ItemKeyFn<T>>,
    row_style: Option<RowStyleFn<T>>,
    on_sort_change: Option<SortChangedFn>,
}

impl<T> GridSession<T> {
    /// Create a session. Fails on invalid configuration or duplicate
    /// column ids — the only construction-time errors.
    pub fn new(columns: Vec<Column<T>>, items: Vec<T>, config: GridConfig) -> Result<Self> {
        config.validate()?;
        check_unique_ids(&columns)?;
        Ok(Self {
            columns,
            items,
            config,
            measurer: Rc::new(HeuristicTextMeasurer::new(DEFAULT_FONT_SIZE)),
            viewport: Viewport::new(),
            sort_state: SortState::inactive(),
            sort_order: None,
            phase: Phase::Uninitialized,
            generation: 1,
            laid_out_generation: 0,
            centered_for: None,
            width_map: ColumnWidthMap::default(),
            layout: None,
            sticky_index: None,
            measure_cache: LruCache::new(MEASURE_CACHE_COLUMNS),
            animation: None,
            item_key: None,
            row_style: None,
            on_sort_change: None,
        })
    }

    /// Replace the built-in heuristic text measurer with a host one.
    /// Cached content measurements from the previous measurer are dropped.
    #[must_use]
    pub fn with_measurer(mut self, measurer: impl TextMeasurer + 'static) -> Self {
        self.measurer = Rc::new(measurer);
        self.measure_cache.clear();
        self.invalidate();
        self
    }

    /// Supply a stable per-item key for row identity.
    #[must_use]
    pub fn with_item_key(mut self, key: impl Fn(&T, usize) -> String + 'static) -> Self {
        self.item_key = Some(Rc::new(key));
        self
    }

    /// Supply a per-item style override (background fill, corner shape).
    #[must_use]
    pub fn with_row_style(mut self, style: impl Fn(&T, usize) -> Option<RowStyle> + 'static) -> Self {
        self.row_style = Some(Rc::new(style));
        self
    }

    /// Register a callback fired after each sort-state change.
    #[must_use]
    pub fn with_sort_listener(mut self, listener: impl Fn(&SortState) + 'static) -> Self {
        self.on_sort_change = Some(Rc::new(listener));
        self
    }

    // ---- dirty tracking ------------------------------------------------

    /// Force the next frame to run a measurement pass.
    pub fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// True while a tracked input changed since the last layout pass.
    pub fn is_dirty(&self) -> bool {
        self.generation != self.laid_out_generation
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    // ---- tracked inputs ------------------------------------------------

    /// Replace the item list. Clears the content measurement cache and
    /// schedules a measurement pass.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.measure_cache.clear();
        self.refresh_sort_order();
        self.invalidate();
    }

    /// Replace the column list. Fails on duplicate ids; on failure the
    /// existing columns are kept.
    pub fn set_columns(&mut self, columns: Vec<Column<T>>) -> Result<()> {
        check_unique_ids(&columns)?;
        self.columns = columns;
        self.measure_cache.clear();
        self.refresh_sort_order();
        self.invalidate();
        Ok(())
    }

    /// Update the viewport size (host resize). A size change schedules a
    /// measurement pass; an identical size is a no-op.
    pub fn set_viewport_size(&mut self, width: f32, height: f32) {
        if self.viewport.width.to_bits() == width.to_bits()
            && self.viewport.height.to_bits() == height.to_bits()
        {
            return;
        }
        self.viewport.resize(width, height);
        self.invalidate();
    }

    // ---- frame driving -------------------------------------------------

    /// Run one cooperative step: a layout pass if inputs changed, then one
    /// animation step at `now_ms`. Returns `true` while an animation is
    /// still in flight and another frame should be scheduled.
    pub fn frame(&mut self, now_ms: f64) -> bool {
        if self.is_dirty() {
            self.layout_pass();
        }
        self.step_animation(now_ms)
    }

    /// Measurement pass: resolve the width map, rebuild positions, resolve
    /// the sticky column, and apply the one-time centering jump.
    fn layout_pass(&mut self) {
        self.phase = Phase::Measuring;

        self.width_map = crate::layout::width::resolve_widths(
            &self.columns,
            &self.items,
            self.viewport.width,
            self.measurer.as_ref(),
            &mut self.measure_cache,
        );
        let ids: Vec<ColumnId> = self.columns.iter().map(|c| c.id.clone()).collect();
        let layout = GridLayout::new(&ids, &self.width_map);

        self.sticky_index = resolve_sticky_column(&self.config, &self.columns);
        match self.sticky_index {
            Some(index) => {
                let sticky_id = self.columns.get(index).map(|c| c.id.clone());
                // Initial centering: only at origin (a restored scroll is
                // never overridden) and once per sticky configuration.
                if self.viewport.scroll_x.to_bits() == 0 && self.centered_for != sticky_id {
                    self.viewport.scroll_x =
                        initial_center_offset(&layout, self.viewport.width, index);
                }
                self.centered_for = sticky_id;
            }
            None => self.centered_for = None,
        }

        self.viewport
            .clamp_scroll(layout.total_width(), self.content_height());
        log::debug!(
            "layout pass: {} columns, {} items, content width {}",
            layout.col_count(),
            self.items.len(),
            layout.total_width(),
        );
        self.layout = Some(layout);
        self.laid_out_generation = self.generation;
        self.phase = Phase::Ready;
    }

    fn step_animation(&mut self, now_ms: f64) -> bool {
        let Some(anim) = &self.animation else {
            return false;
        };
        self.viewport.scroll_y = anim
            .value_at(now_ms)
            .clamp(0.0, self.viewport.max_scroll_y(self.content_height()));
        if anim.is_finished(now_ms) {
            self.animation = None;
            return false;
        }
        true
    }

    // ---- sort operations -----------------------------------------------

    /// Advance the sort cycle for `column_id`
    /// (none → ascending → descending → none). An unknown id is a logged
    /// no-op. Does not re-measure content-based widths: the last width
    /// snapshot is reused even though sorting can change which items fall
    /// in the sampled window (a documented approximation).
    pub fn update_sort(&mut self, column_id: &str) {
        if !self.columns.iter().any(|c| c.id == column_id) {
            log::warn!("update_sort: unknown column {column_id:?}, ignoring");
            return;
        }
        self.sort_state.sort_by(column_id);
        self.refresh_sort_order();
        self.notify_sort_changed();
    }

    /// Drop any active sort, restoring source order.
    pub fn clear_sort(&mut self) {
        if !self.sort_state.is_active() {
            return;
        }
        self.sort_state.clear();
        self.sort_order = None;
        self.notify_sort_changed();
    }

    /// Current sort state.
    pub fn sort_state(&self) -> &SortState {
        &self.sort_state
    }

    fn refresh_sort_order(&mut self) {
        self.sort_order = sort_order(&self.items, &self.columns, &self.sort_state);
    }

    fn notify_sort_changed(&self) {
        if let Some(listener) = &self.on_sort_change {
            listener(&self.sort_state);
        }
    }

    // ---- scroll operations ---------------------------------------------

    /// Immediate jump so the row's top edge aligns with the viewport top.
    /// Cancels any in-flight animated scroll.
    pub fn scroll_to_row(&mut self, index: usize) {
        self.animation = None;
        self.viewport.scroll_y = virtualize::scroll_offset_for_row(
            index,
            self.config.row_height,
            self.items.len(),
            self.viewport.height,
        );
    }

    /// Animated scroll to a row. A new call supersedes an in-flight
    /// animation; a call with the target already in flight lets it
    /// converge untouched.
    pub fn animate_scroll_to_row(&mut self, index: usize, now_ms: f64) {
        let target = virtualize::scroll_offset_for_row(
            index,
            self.config.row_height,
            self.items.len(),
            self.viewport.height,
        );
        match &mut self.animation {
            Some(anim) => anim.retarget(target, now_ms),
            None => self.animation = Some(ScrollAnimation::new(self.viewport.scroll_y, target, now_ms)),
        }
    }

    /// User-driven scroll by deltas. Axes disabled in config are ignored;
    /// a vertical gesture cancels an in-flight animated scroll.
    pub fn scroll_by(&mut self, dx: f32, dy: f32) {
        if self.is_dirty() {
            self.layout_pass();
        }
        let dx = if self.config.horizontal_scroll { dx } else { 0.0 };
        let dy = if self.config.vertical_scroll { dy } else { 0.0 };
        if dy.abs() > 0.0 {
            self.animation = None;
        }
        let content_width = self.layout.as_ref().map_or(0.0, GridLayout::total_width);
        self.viewport
            .scroll_by(dx, dy, content_width, self.content_height());
    }

    /// Shared horizontal scroll offset (header and every row).
    pub fn scroll_x(&self) -> f32 {
        self.viewport.scroll_x
    }

    /// Vertical scroll offset.
    pub fn scroll_y(&self) -> f32 {
        self.viewport.scroll_y
    }

    // ---- reads over the last snapshot ----------------------------------

    /// Resolved width of a column from the last pass, if it has one.
    pub fn get_column_width(&self, column_id: &str) -> Option<f32> {
        self.width_map.get_opt(column_id)
    }

    /// Drop all cached content measurements and schedule a re-measure.
    pub fn clear_measurement_cache(&mut self) {
        self.measure_cache.clear();
        self.invalidate();
    }

    /// Sticky geometry for the current scroll position, derived from the
    /// last layout snapshot. `None` when no sticky column is configured,
    /// the configured id is unknown, or no pass has run.
    pub fn sticky_geometry(&self) -> Option<StickyGeometry> {
        let layout = self.layout.as_ref()?;
        let index = self.sticky_index?;
        Some(StickyGeometry::compute(layout, &self.viewport, index))
    }

    /// Realized rows for the current viewport (visible plus prefetch).
    pub fn visible_rows(&self) -> Option<RowWindow> {
        virtualize::visible_window(
            self.viewport.scroll_y,
            self.viewport.height,
            self.config.row_height,
            self.items.len(),
            self.config.prefetch_rows,
        )
    }

    /// Source index of the item displayed at `display_row`.
    pub fn source_index(&self, display_row: usize) -> Option<usize> {
        if display_row >= self.items.len() {
            return None;
        }
        match &self.sort_order {
            Some(order) => order.get(display_row).copied(),
            None => Some(display_row),
        }
    }

    /// Item displayed at `display_row` (sort applied).
    pub fn item_at(&self, display_row: usize) -> Option<&T> {
        self.items.get(self.source_index(display_row)?)
    }

    /// Identity key for the row at `display_row`.
    pub fn row_key(&self, display_row: usize) -> Option<RowKey> {
        let source = self.source_index(display_row)?;
        let item = self.items.get(source)?;
        Some(virtualize::row_key(item, source, self.item_key.as_ref()))
    }

    /// Ordered column list.
    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    /// Source item list (unsorted).
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Session configuration.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    // ---- persistence ---------------------------------------------------

    /// Snapshot of user-visible session state for host persistence.
    pub fn save(&self) -> GridSnapshot {
        let first_visible_row = (self.viewport.scroll_y / self.config.row_height).floor();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let first_visible_row = first_visible_row.max(0.0) as usize;
        #[allow(clippy::cast_precision_loss)]
        let row_offset = self.viewport.scroll_y - first_visible_row as f32 * self.config.row_height;
        GridSnapshot {
            sort_column_id: None,
            sort_direction_ordinal: 0,
            scroll_offset_x: self.viewport.scroll_x,
            first_visible_row,
            first_visible_row_offset_px: row_offset,
        }
        .with_sort(&self.sort_state)
    }

    /// Restore a previously saved snapshot. The restored scroll position
    /// survives the next layout pass (the initial centering jump only
    /// applies at origin).
    pub fn restore(&mut self, snapshot: &GridSnapshot) {
        self.sort_state = snapshot.sort_state();
        self.refresh_sort_order();
        self.animation = None;
        self.viewport.scroll_x = snapshot.scroll_offset_x;
        #[allow(clippy::cast_precision_loss)]
        let base = snapshot.first_visible_row as f32 * self.config.row_height;
        self.viewport.scroll_y = base + snapshot.first_visible_row_offset_px;
        self.invalidate();
    }

    // ---- internals -----------------------------------------------------

    #[allow(clippy::cast_precision_loss)]
    fn content_height(&self) -> f32 {
        self.items.len() as f32 * self.config.row_height
    }

    fn cell_rect(&self, layout: &GridLayout, col_index: usize, y: f32) -> CellRect {
        layout.column_rect(col_index, y, self.config.row_height)
    }
}

fn check_unique_ids<T>(columns: &[Column<T>]) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(columns.len());
    for col in columns {
        if !seen.insert(&col.id) {
            return Err(GridError::DuplicateColumnId(col.id.clone()));
        }
    }
    Ok(())
}
