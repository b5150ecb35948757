// SPDX-License-Identifier: MPL-2.0
//! Text measurement for the selector label.
//!
//! Iced lays text out after `view`, so the selector cannot read the rendered
//! width back. Instead the width is estimated from the label's display width
//! in terminal cells, which accounts for wide CJK glyphs and zero-width
//! combining marks.

use crate::domain::selector::TextMeasure;
use crate::ui::design_tokens::typography;
use unicode_width::UnicodeWidthStr;

/// Estimates label widths from the base font size and an average advance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatedTextMetrics {
    base_font_size: f32,
    advance_ratio: f32,
    viewport_width: Option<f32>,
}

impl EstimatedTextMetrics {
    #[must_use]
    pub fn new(base_font_size: f32, viewport_width: Option<f32>) -> Self {
        Self {
            base_font_size,
            advance_ratio: typography::SLOT_RATIO,
            viewport_width,
        }
    }

    #[must_use]
    pub fn with_advance_ratio(mut self, ratio: f32) -> Self {
        self.advance_ratio = ratio;
        self
    }
}

impl TextMeasure for EstimatedTextMetrics {
    fn measure_text_width(&self, text: &str, font_size_em: f32) -> Option<f32> {
        if self.base_font_size <= 0.0 {
            return None;
        }
        let cells = UnicodeWidthStr::width(text) as f32;
        Some(cells * self.base_font_size * font_size_em * self.advance_ratio)
    }

    fn available_width(&self) -> Option<f32> {
        self.viewport_width.filter(|width| *width > 0.0)
    }
}
