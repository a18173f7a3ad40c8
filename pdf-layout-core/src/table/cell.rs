use super::row::RowView;
use crate::graphics::Color;
use crate::text::{wrap_text, FontMetrics, TextAlign};

/// Cell padding configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellPadding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for CellPadding {
    fn default() -> Self {
        Self {
            top: 2.0,
            right: 4.0,
            bottom: 4.0,
            left: 4.0,
        }
    }
}

impl CellPadding {
    /// Create uniform padding
    pub fn uniform(padding: f64) -> Self {
        Self {
            top: padding,
            right: padding,
            bottom: padding,
            left: padding,
        }
    }

    /// Create padding with individual values
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

/// A table cell holding text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cell {
    text: String,
    background_color: Option<Color>,
    text_color: Option<Color>,
    padding: CellPadding,
    align: TextAlign,
}

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    pub fn with_padding(mut self, padding: CellPadding) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn background_color(&self) -> Option<Color> {
        self.background_color
    }

    pub fn has_background_color(&self) -> bool {
        self.background_color.is_some()
    }

    pub fn text_color(&self) -> Option<Color> {
        self.text_color
    }

    pub fn padding(&self) -> CellPadding {
        self.padding
    }

    pub fn align(&self) -> TextAlign {
        self.align
    }

    pub(crate) fn set_background_color_if_unset(&mut self, color: Color) {
        self.background_color.get_or_insert(color);
    }

    /// Text lines after wrapping within `column_width` minus the horizontal
    /// padding.
    pub fn lines(&self, metrics: &dyn FontMetrics, font_size: f64, column_width: f64) -> Vec<String> {
        let available = (column_width - self.padding.horizontal()).max(0.0);
        wrap_text(&self.text, metrics, font_size, available)
    }

    /// Height of the cell content without the last line of text.
    ///
    /// The table adds one font height per row on top of this, so a single
    /// line cell measures just its vertical padding here.
    pub fn height_without_font_height(
        &self,
        metrics: &dyn FontMetrics,
        font_size: f64,
        column_width: f64,
    ) -> f64 {
        let lines = self.lines(metrics, font_size, column_width).len().max(1);
        self.padding.vertical() + (lines - 1) as f64 * metrics.font_height(font_size)
    }
}

/// A cell seen in the context of its row and table.
#[derive(Debug, Clone, Copy)]
pub struct CellView<'a> {
    row: RowView<'a>,
    column: usize,
}

impl<'a> CellView<'a> {
    pub(crate) fn new(row: RowView<'a>, column: usize) -> Self {
        Self { row, column }
    }

    pub fn row(&self) -> RowView<'a> {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn cell(&self) -> &'a Cell {
        &self.row.row().cells()[self.column]
    }

    /// Width of the column the cell sits in.
    pub fn width(&self) -> f64 {
        self.row.table().column_width(self.column)
    }

    pub fn background_color(&self) -> Option<Color> {
        self.cell().background_color()
    }

    /// Cells draw their borders in the color of their row.
    pub fn border_color(&self) -> Color {
        self.row.border_color()
    }

    pub fn text_color(&self) -> Color {
        self.cell().text_color().unwrap_or_else(Color::black)
    }

    pub fn height_without_font_height(&self) -> f64 {
        let table = self.row.table();
        self.cell()
            .height_without_font_height(table.font(), table.font_size(), self.width())
    }
}
