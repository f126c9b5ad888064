//! Text measurement for content-based column sizing.
//!
//! Hosts with access to real font metrics implement [`TextMeasurer`] over
//! their text stack. [`HeuristicTextMeasurer`] is the built-in fallback: a
//! per-character advance estimate, good enough to pick a column width when
//! no shaping engine is available.

use std::cell::RefCell;

use crate::cache::LruCache;

/// Measured text widths cached per measurer instance.
const MEASURE_CACHE_CAPACITY: usize = 2048;

/// Width measurement over the host's text stack.
pub trait TextMeasurer {
    /// Width of `text` in pixels when drawn single-line in the grid font.
    fn text_width(&self, text: &str) -> f32;
}

/// Estimates text width from per-character advance classes scaled by font
/// size. No shaping, no kerning; intentionally errs slightly wide so
/// content-based columns do not truncate.
pub struct HeuristicTextMeasurer {
    font_size: f32,
    cache: RefCell<LruCache<String, f32>>,
}

impl HeuristicTextMeasurer {
    pub fn new(font_size: f32) -> Self {
        Self {
            font_size,
            cache: RefCell::new(LruCache::new(MEASURE_CACHE_CAPACITY)),
        }
    }

    fn advance_factor(c: char) -> f32 {
        match c {
            'i' | 'j' | 'l' | '|' | '\'' | '.' | ',' | ':' | ';' | '!' => 0.35,
            'f' | 't' | 'r' | 'I' | '(' | ')' | '[' | ']' | ' ' => 0.45,
            'm' | 'w' | 'M' | 'W' | '@' => 0.95,
            c if (c as u32) >= 0x1100 => 1.0, // CJK and other wide scripts
            c if c.is_ascii_uppercase() => 0.72,
            _ => 0.58,
        }
    }
}

impl TextMeasurer for HeuristicTextMeasurer {
    fn text_width(&self, text: &str) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        let key = text.to_string();
        self.cache.borrow_mut().get_or_insert_with(&key, || {
            let units: f32 = text.chars().map(Self::advance_factor).sum();
            units * self.font_size
        })
    }
}
