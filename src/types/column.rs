//! Column model: identity, width strategy, and per-column capabilities.

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use crate::render::CellRenderer;

/// Unique string key identifying a column within one grid instance.
pub type ColumnId = String;

/// Ordering callback over the item type, supplied per column.
pub type Comparator<T> = Rc<dyn Fn(&T, &T) -> Ordering>;

/// Width strategy for a column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnWidth {
    /// Fixed pixel width, independent of content and viewport.
    Fixed(f32),
    /// Share of the viewport space left over after fixed and content-based
    /// columns are resolved, proportional to this weight.
    Flexible(f32),
    /// Width measured from rendered content (header plus a bounded sample
    /// of cells), padded symmetrically and clamped to `[min, max]`.
    ContentBased { min: f32, max: f32, padding: f32 },
}

impl Default for ColumnWidth {
    fn default() -> Self {
        Self::Flexible(1.0)
    }
}

/// One column of the grid. Immutable once constructed; the grid holds an
/// ordered list of these and requires unique ids.
pub struct Column<T> {
    /// Unique id used for sort/sticky references and width lookups.
    pub id: ColumnId,
    /// Header title text.
    pub title: String,
    /// Width strategy.
    pub width: ColumnWidth,
    /// Whether the header toggles sorting on tap. Without a comparator this
    /// flag draws the indicator but sorting is a no-op.
    pub sortable: bool,
    /// Legacy per-column sticky flag, superseded by the grid-level sticky
    /// column selection. Kept for config compatibility.
    pub sticky: bool,
    /// Ordering callback used by the sort engine.
    pub comparator: Option<Comparator<T>>,
    /// Rendering capability for this column's cells.
    pub renderer: Rc<dyn CellRenderer<T>>,
}

impl<T> Column<T> {
    /// Create a column with the default flexible width and no sorting.
    pub fn new(
        id: impl Into<ColumnId>,
        title: impl Into<String>,
        renderer: impl CellRenderer<T> + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            width: ColumnWidth::default(),
            sortable: false,
            sticky: false,
            comparator: None,
            renderer: Rc::new(renderer),
        }
    }

    /// Set the width strategy.
    #[must_use]
    pub fn width(mut self, width: ColumnWidth) -> Self {
        self.width = width;
        self
    }

    /// Mark sortable and attach the comparator applied on ascending sort.
    #[must_use]
    pub fn sortable_by(mut self, comparator: impl Fn(&T, &T) -> Ordering + 'static) -> Self {
        self.sortable = true;
        self.comparator = Some(Rc::new(comparator));
        self
    }

    /// Mark sortable without a comparator (indicator only; sorting no-ops).
    #[must_use]
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Set the legacy per-column sticky flag.
    #[must_use]
    pub fn sticky(mut self, sticky: bool) -> Self {
        self.sticky = sticky;
        self
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            title: self.title.clone(),
            width: self.width,
            sortable: self.sortable,
            sticky: self.sticky,
            comparator: self.comparator.clone(),
            renderer: Rc::clone(&self.renderer),
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("width", &self.width)
            .field("sortable", &self.sortable)
            .field("sticky", &self.sticky)
            .field("has_comparator", &self.comparator.is_some())
            .finish()
    }
}
