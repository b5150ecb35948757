// SPDX-License-Identifier: MPL-2.0
//! Responsive label sizing.
//!
//! The selector never wraps or clips its centred label. After every index
//! change and every viewport resize it asks a [`TextMeasure`] backend how wide
//! the label is at full size and shrinks it, down to a floor, until it fits.

use crate::domain::ui::ScaleFloor;

/// Full label size, in em.
pub const FULL_SCALE: f32 = 1.0;

/// Share of the viewport width the centred label may occupy.
pub const AVAILABLE_WIDTH_RATIO: f32 = 0.92;

/// Narrowest selector viewport when it shares its line with a lead-in label.
pub const MIN_INLINE_VIEWPORT_WIDTH: f32 = 80.0;

/// Narrowest selector viewport when it sits on its own line.
pub const MIN_STACKED_VIEWPORT_WIDTH: f32 = 140.0;

/// Measurement capability supplied by the rendering platform.
///
/// Both methods return `None` when the platform cannot answer yet (no layout,
/// no font); callers treat that as "nothing to do".
pub trait TextMeasure {
    /// Width in pixels `text` occupies at `font_size_em` times the base size.
    fn measure_text_width(&self, text: &str, font_size_em: f32) -> Option<f32>;

    /// Width in pixels of the selector viewport.
    fn available_width(&self) -> Option<f32>;
}

/// Scale applied to the centred label, always within `[floor, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelScale(f32);

impl LabelScale {
    /// Full size.
    pub const FULL: Self = Self(FULL_SCALE);

    /// Creates a scale clamped to `[floor, 1.0]`.
    #[must_use]
    pub fn new(value: f32, floor: ScaleFloor) -> Self {
        if value.is_nan() {
            return Self::FULL;
        }
        Self(value.clamp(floor.value(), FULL_SCALE))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns `true` when the label is drawn below full size.
    #[must_use]
    pub fn is_shrunk(self) -> bool {
        self.0 < FULL_SCALE
    }
}

impl Default for LabelScale {
    fn default() -> Self {
        Self::FULL
    }
}

/// Computes the scale for `label`, or `None` if the backend cannot measure.
#[must_use]
pub fn fit_label_scale(
    measure: &impl TextMeasure,
    label: &str,
    floor: ScaleFloor,
) -> Option<LabelScale> {
    let available = measure.available_width()? * AVAILABLE_WIDTH_RATIO;
    let text_width = measure.measure_text_width(label, FULL_SCALE)?;

    if text_width <= available || text_width <= 0.0 {
        return Some(LabelScale::FULL);
    }

    Some(LabelScale::new(available / text_width * FULL_SCALE, floor))
}

/// Geometry of the line that hosts the selector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineLayout {
    /// Width of the line's container.
    pub container_width: f32,
    /// Width of the lead-in label sharing the line, if any.
    pub lead_label_width: Option<f32>,
    /// Gap between the lead-in label and the selector.
    pub gap: f32,
    /// Whether the line is stacked (label above selector) instead of inline.
    pub stacked: bool,
}

/// Width the selector viewport gets within `layout`.
#[must_use]
pub fn selector_viewport_width(layout: &LineLayout) -> f32 {
    match layout.lead_label_width {
        Some(label_width) if !layout.stacked => (layout.container_width
            - label_width
            - layout.gap)
            .max(MIN_INLINE_VIEWPORT_WIDTH),
        _ => layout.container_width.max(MIN_STACKED_VIEWPORT_WIDTH),
    }
}
