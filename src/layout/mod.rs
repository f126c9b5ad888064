//! Layout engine: column width resolution, cumulative positions, viewport
//! state, and sticky-column geometry.

pub mod grid_layout;
pub mod sticky;
pub mod viewport;
pub mod width;

pub use grid_layout::{CellRect, GridLayout};
pub use sticky::{initial_center_offset, resolve_sticky_column, StickyGeometry};
pub use viewport::Viewport;
pub use width::{
    ColumnWidthMap, FALLBACK_COLUMN_WIDTH, SORT_INDICATOR_ALLOWANCE, WIDTH_SAMPLE_ROWS,
};
