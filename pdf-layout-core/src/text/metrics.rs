use crate::text::Font;
use std::collections::HashMap;

const FIRST_MAPPED: u32 = 0x20;

/// Advance widths for the printable ASCII range `' '..='~'`.
type WidthTable = [u16; 95];

const HELVETICA: WidthTable = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

const HELVETICA_BOLD: WidthTable = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

const TIMES_ROMAN: WidthTable = [
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 278, 278, 564, 564, 564, 444,
    921, 722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889, 722, 722,
    556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611, 333, 278, 333, 469, 500,
    333, 444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778, 500, 500,
    500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444, 480, 200, 480, 541,
];

/// Metrics of one standard font. All values are in 1/1000 em.
pub(crate) struct StandardMetrics {
    widths: Option<&'static WidthTable>,
    default_width: u16,
    /// `FontBBox` height (ury - lly) from the font's AFM
    pub(crate) bbox_height: u16,
}

impl StandardMetrics {
    const fn new(widths: Option<&'static WidthTable>, default_width: u16, bbox_height: u16) -> Self {
        Self {
            widths,
            default_width,
            bbox_height,
        }
    }

    pub(crate) fn char_width(&self, ch: char) -> u16 {
        let index = (ch as u32).wrapping_sub(FIRST_MAPPED) as usize;
        self.widths
            .and_then(|table| table.get(index))
            .copied()
            .unwrap_or(self.default_width)
    }
}

lazy_static::lazy_static! {
    static ref STANDARD_METRICS: HashMap<Font, StandardMetrics> = {
        let mut metrics = HashMap::new();

        metrics.insert(Font::Helvetica, StandardMetrics::new(Some(&HELVETICA), 556, 1156));
        metrics.insert(Font::HelveticaOblique, StandardMetrics::new(Some(&HELVETICA), 556, 1156));
        metrics.insert(Font::HelveticaBold, StandardMetrics::new(Some(&HELVETICA_BOLD), 611, 1190));
        metrics.insert(Font::HelveticaBoldOblique, StandardMetrics::new(Some(&HELVETICA_BOLD), 611, 1190));

        // Bold and italic Times share the roman widths
        metrics.insert(Font::TimesRoman, StandardMetrics::new(Some(&TIMES_ROMAN), 500, 1116));
        metrics.insert(Font::TimesBold, StandardMetrics::new(Some(&TIMES_ROMAN), 500, 1153));
        metrics.insert(Font::TimesItalic, StandardMetrics::new(Some(&TIMES_ROMAN), 500, 1100));
        metrics.insert(Font::TimesBoldItalic, StandardMetrics::new(Some(&TIMES_ROMAN), 500, 1139));

        // Courier is monospaced
        metrics.insert(Font::Courier, StandardMetrics::new(None, 600, 1055));
        metrics.insert(Font::CourierOblique, StandardMetrics::new(None, 600, 1055));
        metrics.insert(Font::CourierBold, StandardMetrics::new(None, 600, 1051));
        metrics.insert(Font::CourierBoldOblique, StandardMetrics::new(None, 600, 1051));

        metrics.insert(Font::Symbol, StandardMetrics::new(None, 500, 1303));
        metrics.insert(Font::ZapfDingbats, StandardMetrics::new(None, 788, 963));

        metrics
    };
}

pub(crate) fn standard_metrics(font: Font) -> &'static StandardMetrics {
    // every variant is inserted above
    &STANDARD_METRICS[&font]
}

/// Breaks `text` into lines no wider than `max_width` points.
///
/// Lines break at whitespace; explicit `\n` always starts a new line. A word
/// wider than `max_width` gets a line of its own rather than being split.
/// Empty text yields a single empty line.
pub fn wrap_text(
    text: &str,
    metrics: &dyn crate::text::FontMetrics,
    font_size: f64,
    max_width: f64,
) -> Vec<String> {
    let space = metrics.string_width(" ", font_size);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_width = 0.0;

        for word in paragraph.split_whitespace() {
            let word_width = metrics.string_width(word, font_size);
            if line.is_empty() {
                line.push_str(word);
                line_width = word_width;
            } else if line_width + space + word_width <= max_width {
                line.push(' ');
                line.push_str(word);
                line_width += space + word_width;
            } else {
                lines.push(std::mem::take(&mut line));
                line.push_str(word);
                line_width = word_width;
            }
        }
        lines.push(line);
    }

    lines
}
