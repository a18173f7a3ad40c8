use super::metrics::standard_metrics;
use std::fmt::Debug;

/// Glyph-space metrics of a font, as consumed by table measurement.
///
/// All values are in glyph space, where 1000 units make one em. Implement
/// this for embedded fonts; the standard 14 fonts are covered by [`Font`].
pub trait FontMetrics: Debug + Send + Sync {
    /// Name used to select the font in a content stream
    fn pdf_name(&self) -> String;

    /// Height of the font bounding box in glyph space
    fn bounding_box_height(&self) -> f64;

    /// Advance width of a single character in glyph space
    fn char_width(&self, ch: char) -> f64;

    /// Vertical extent of a line set in this font at `font_size`.
    fn font_height(&self, font_size: f64) -> f64 {
        self.bounding_box_height() / 1000.0 * font_size
    }

    /// Width of `text` set at `font_size`, in points.
    fn string_width(&self, text: &str, font_size: f64) -> f64 {
        text.chars().map(|ch| self.char_width(ch)).sum::<f64>() / 1000.0 * font_size
    }
}

/// The standard 14 PDF fonts.
///
/// These are available in every PDF reader and need no embedding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Font {
    /// Helvetica (sans-serif)
    #[default]
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
    /// Times Roman (serif)
    TimesRoman,
    TimesBold,
    TimesItalic,
    TimesBoldItalic,
    /// Courier (monospace)
    Courier,
    CourierBold,
    CourierOblique,
    CourierBoldOblique,
    /// Symbol font (mathematical symbols)
    Symbol,
    /// ZapfDingbats (decorative symbols)
    ZapfDingbats,
}

impl Font {
    pub fn name(&self) -> &'static str {
        match self {
            Font::Helvetica => "Helvetica",
            Font::HelveticaBold => "Helvetica-Bold",
            Font::HelveticaOblique => "Helvetica-Oblique",
            Font::HelveticaBoldOblique => "Helvetica-BoldOblique",
            Font::TimesRoman => "Times-Roman",
            Font::TimesBold => "Times-Bold",
            Font::TimesItalic => "Times-Italic",
            Font::TimesBoldItalic => "Times-BoldItalic",
            Font::Courier => "Courier",
            Font::CourierBold => "Courier-Bold",
            Font::CourierOblique => "Courier-Oblique",
            Font::CourierBoldOblique => "Courier-BoldOblique",
            Font::Symbol => "Symbol",
            Font::ZapfDingbats => "ZapfDingbats",
        }
    }
}

impl FontMetrics for Font {
    fn pdf_name(&self) -> String {
        self.name().to_string()
    }

    fn bounding_box_height(&self) -> f64 {
        standard_metrics(*self).bbox_height as f64
    }

    fn char_width(&self, ch: char) -> f64 {
        standard_metrics(*self).char_width(ch) as f64
    }
}
