/// Average advance of a monospace glyph, in ems.
pub const FALLBACK_CHAR_WIDTH_EM: f64 = 0.6;

/// Measures rendered text width in the same unit as the font size.
pub trait TextMeasure {
    /// `None` when precise measurement is unavailable.
    fn measure(&self, text: &str) -> Option<f64>;
    fn font_size(&self) -> f64;
}

/// Offset of the simulated caret: immediately after the rendered input text.
pub fn caret_offset(text: &str, measure: &dyn TextMeasure) -> u32 {
    if text.is_empty() {
        return 0;
    }
    let width = measure.measure(text).unwrap_or_else(|| {
        text.chars().count() as f64 * FALLBACK_CHAR_WIDTH_EM * measure.font_size()
    });
    width.max(0.0).ceil() as u32
}
