//! Renderer capability interface.
//!
//! The layout and measurement engine is renderer-agnostic: a column is
//! polymorphic over a [`CellRenderer`] capability that can (a) measure the
//! intrinsic width of a cell's content and (b) describe the cell as a
//! [`DrawableCell`] for whatever backend the host embeds. The engine never
//! draws; it only guarantees each cell occupies the column's resolved width
//! and the configured row height.

mod cell;
mod measure;

pub use cell::{CellContent, CellContext, CellFill, CellRenderer, DrawableCell, RowStyle, TextCell};
pub use measure::{HeuristicTextMeasurer, TextMeasurer};
