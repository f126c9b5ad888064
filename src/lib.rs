//! gridview - virtualized data-grid engine
//!
//! Layout and scroll-synchronization core for embedding a data grid in a
//! host UI:
//! - Column widths under three strategies (fixed, flexible, content-based)
//! - One horizontal scroll offset shared by header and body
//! - Sticky column pinned via a derived overlay, sticky header
//! - Stable column sorting with the none→asc→desc cycle
//! - Row virtualization with prefetch margins and animated scroll-to-row
//!
//! The engine is renderer-agnostic: columns carry a [`render::CellRenderer`]
//! capability, the session emits [`session::RowPlan`]s, and the host draws
//! them with whatever backend it embeds.
//!
//! # Usage
//!
//! ```
//! use gridview::render::TextCell;
//! use gridview::session::GridSession;
//! use gridview::types::{Column, ColumnWidth, GridConfig};
//!
//! let columns = vec![
//!     Column::new("name", "Name", TextCell::new(|p: &(String, u32)| p.0.clone()))
//!         .width(ColumnWidth::ContentBased { min: 40.0, max: 200.0, padding: 8.0 }),
//!     Column::new("age", "Age", TextCell::new(|p: &(String, u32)| p.1.to_string()))
//!         .width(ColumnWidth::Fixed(60.0))
//!         .sortable_by(|a, b| a.1.cmp(&b.1)),
//! ];
//! let items = vec![("Ada".to_string(), 36), ("Grace".to_string(), 45)];
//! let mut grid = GridSession::new(columns, items, GridConfig::default())?;
//! grid.set_viewport_size(320.0, 480.0);
//! grid.frame(0.0);
//! grid.update_sort("age");
//! for row in grid.row_plans() {
//!     // hand row.cells (and row.overlay) to the drawing backend
//! }
//! # Ok::<(), gridview::error::GridError>(())
//! ```

pub mod animate;
pub mod cache;
pub mod error;
pub mod render;
pub mod sort;
pub mod types;
pub mod virtualize;

// Layout engine
pub mod layout;

// Composition root
pub mod session;

pub use error::{GridError, Result};
pub use session::{GridSession, Phase};
pub use types::{Column, ColumnId, ColumnWidth, GridConfig, GridSnapshot, SortDirection, SortState};

/// Get the library version
#[must_use]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
