//! Cell renderer capability and the drawable-cell description it produces.

use std::rc::Rc;

use crate::layout::CellRect;
use crate::render::TextMeasurer;

/// Background fill for a row or cell, supplied by the host's style override.
#[derive(Debug, Clone, PartialEq)]
pub enum CellFill {
    /// Solid color, hex string like "#RRGGBB" or "#RRGGBBAA".
    Solid(String),
    /// Host-resolved image reference (asset key or URI).
    Image(String),
}

/// Per-item visual override returned by the host's style callback.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowStyle {
    /// Background fill; `None` keeps the grid default.
    pub fill: Option<CellFill>,
    /// Corner radius in pixels applied to the row background shape.
    pub corner_radius: f32,
}

/// Everything a renderer needs besides the item itself.
#[derive(Debug, Clone)]
pub struct CellContext {
    /// Cell bounds in content coordinates (x reflects the column's resolved
    /// position, not the scroll-adjusted screen position).
    pub rect: CellRect,
    /// Style override for the cell's row, if the host supplied one.
    pub style: Option<RowStyle>,
}

/// Content payload of a rendered cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellContent {
    /// Nothing to draw beyond the background.
    Empty,
    /// Plain text, drawn by the host with its own font stack.
    Text(String),
}

/// A renderer-agnostic description of one cell, ready for a host backend.
#[derive(Debug, Clone)]
pub struct DrawableCell {
    pub rect: CellRect,
    pub content: CellContent,
    pub fill: Option<CellFill>,
    pub corner_radius: f32,
}

/// Per-column rendering capability.
///
/// `measure` feeds the content-based width resolver; `render` feeds the
/// host's draw loop. Both must be pure functions of their inputs — the
/// engine may call them for off-screen rows during width sampling.
pub trait CellRenderer<T> {
    /// Intrinsic content width of this cell in pixels, excluding padding.
    fn measure(&self, item: &T, row_index: usize, measurer: &dyn TextMeasurer) -> f32;

    /// Describe the cell for drawing within `ctx.rect`.
    fn render(&self, item: &T, row_index: usize, ctx: &CellContext) -> DrawableCell;
}

/// Basic text renderer: formats the item to a string with a host-supplied
/// closure. Sufficient for most columns; richer cells implement
/// [`CellRenderer`] directly.
pub struct TextCell<T> {
    format: Rc<dyn Fn(&T) -> String>,
}

impl<T> TextCell<T> {
    pub fn new(format: impl Fn(&T) -> String + 'static) -> Self {
        Self {
            format: Rc::new(format),
        }
    }
}

impl<T> Clone for TextCell<T> {
    fn clone(&self) -> Self {
        Self {
            format: Rc::clone(&self.format),
        }
    }
}

impl<T> CellRenderer<T> for TextCell<T> {
    fn measure(&self, item: &T, _row_index: usize, measurer: &dyn TextMeasurer) -> f32 {
        measurer.text_width(&(self.format)(item))
    }

    fn render(&self, item: &T, _row_index: usize, ctx: &CellContext) -> DrawableCell {
        let style = ctx.style.clone().unwrap_or_default();
        DrawableCell {
            rect: ctx.rect.clone(),
            content: CellContent::Text((self.format)(item)),
            fill: style.fill,
            corner_radius: style.corner_radius,
        }
    }
}
