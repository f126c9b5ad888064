//! Core data model: columns, sort state, configuration, session snapshots.

pub mod column;
pub mod config;
pub mod snapshot;
pub mod sort;

pub use column::{Column, ColumnId, ColumnWidth, Comparator};
pub use config::{DividerConfig, GridConfig};
pub use snapshot::GridSnapshot;
pub use sort::{SortDirection, SortState};
