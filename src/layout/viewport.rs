//! Viewport and scroll state.
//!
//! Exactly one horizontal offset is shared by the header row and every data
//! row — that is what keeps columns visually aligned while only one axis of
//! scrolling is user-driven per gesture. The session owns one `Viewport`
//! for its whole lifetime.

/// Visible area and scroll position of the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    /// Horizontal scroll position in content coordinates; shared by the
    /// header and all rows.
    pub scroll_x: f32,
    /// Vertical scroll position in content coordinates (body rows only;
    /// a sticky header does not scroll vertically).
    pub scroll_y: f32,
    /// Viewport width in pixels.
    pub width: f32,
    /// Viewport height in pixels (body area, excluding the header row).
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport {
    /// Create a viewport at origin with a placeholder size.
    pub fn new() -> Self {
        Self {
            scroll_x: 0.0,
            scroll_y: 0.0,
            width: 800.0,
            height: 600.0,
        }
    }

    /// Largest valid horizontal scroll for the given content width.
    pub fn max_scroll_x(&self, content_width: f32) -> f32 {
        (content_width - self.width).max(0.0)
    }

    /// Largest valid vertical scroll for the given content height.
    pub fn max_scroll_y(&self, content_height: f32) -> f32 {
        (content_height - self.height).max(0.0)
    }

    /// Clamp both scroll positions to the valid range for the given content
    /// size. Content narrower/shorter than the viewport clamps to 0.
    pub fn clamp_scroll(&mut self, content_width: f32, content_height: f32) {
        self.scroll_x = self.scroll_x.clamp(0.0, self.max_scroll_x(content_width));
        self.scroll_y = self.scroll_y.clamp(0.0, self.max_scroll_y(content_height));
    }

    /// Scroll by delta amounts, clamped.
    pub fn scroll_by(&mut self, dx: f32, dy: f32, content_width: f32, content_height: f32) {
        self.scroll_x += dx;
        self.scroll_y += dy;
        self.clamp_scroll(content_width, content_height);
    }

    /// Set absolute scroll position, clamped.
    pub fn set_scroll(&mut self, x: f32, y: f32, content_width: f32, content_height: f32) {
        self.scroll_x = x;
        self.scroll_y = y;
        self.clamp_scroll(content_width, content_height);
    }

    /// Resize the viewport. Does not re-clamp; the next layout pass does.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Convert a content x position to viewport coordinates.
    pub fn to_viewport_x(&self, x: f32) -> f32 {
        x - self.scroll_x
    }

    /// Convert a content y position to viewport coordinates.
    pub fn to_viewport_y(&self, y: f32) -> f32 {
        y - self.scroll_y
    }
}
