//! Font metrics and text measurement for table cells

mod font;
mod metrics;

pub use font::{Font, FontMetrics};
pub use metrics::wrap_text;

/// Horizontal alignment of text within its box, or of an element within the
/// page content width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    /// X offset of a box of `content_width` aligned within `available_width`.
    pub fn offset(&self, content_width: f64, available_width: f64) -> f64 {
        let free = (available_width - content_width).max(0.0);
        match self {
            TextAlign::Left => 0.0,
            TextAlign::Center => free / 2.0,
            TextAlign::Right => free,
        }
    }
}
