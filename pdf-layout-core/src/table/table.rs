use super::cell::CellView;
use super::column::Column;
use super::row::{Row, RowView};
use crate::error::{LayoutError, Result};
use crate::geometry::Point;
use crate::graphics::Color;
use crate::render::DrawContext;
use crate::text::{Font, FontMetrics};
use std::ops::Range;
use std::sync::Arc;

pub const DEFAULT_FONT_SIZE: f64 = 12.0;
pub const DEFAULT_BORDER_WIDTH: f64 = 0.2;

/// An immutable table: columns, rows and drawing defaults.
///
/// Tables are built with [`TableBuilder`], which validates that every regular
/// row has one cell per column. Cells and rows are reached through
/// [`RowView`] and [`CellView`], which resolve inherited settings such as the
/// border color.
#[derive(Debug, Clone)]
pub struct Table {
    rows: Vec<Row>,
    columns: Vec<Column>,
    font: Arc<dyn FontMetrics>,
    font_size: f64,
    border_width: f64,
    border_color: Color,
    width: f64,
}

impl Table {
    pub fn builder() -> TableBuilder {
        TableBuilder::new()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn number_of_columns(&self) -> usize {
        self.columns.len()
    }

    /// Sum of all column widths
    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn font(&self) -> &dyn FontMetrics {
        self.font.as_ref()
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    pub fn border_width(&self) -> f64 {
        self.border_width
    }

    pub fn border_color(&self) -> Color {
        self.border_color
    }

    /// Height one line of text adds to a row.
    pub fn font_height(&self) -> f64 {
        self.font.font_height(self.font_size)
    }

    /// Width of column `index`. Cells beyond the declared columns (possible
    /// in custom drawn rows) span the whole table.
    pub fn column_width(&self, index: usize) -> f64 {
        self.columns
            .get(index)
            .map(Column::width)
            .unwrap_or(self.width)
    }

    pub fn row(&self, index: usize) -> Option<RowView<'_>> {
        (index < self.rows.len()).then(|| RowView::new(self, index))
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<CellView<'_>> {
        self.row(row)?.cell(column)
    }

    pub(crate) fn row_height(&self, index: usize) -> Result<f64> {
        RowView::new(self, index).height()
    }

    /// Total height of all rows.
    pub fn height(&self) -> Result<f64> {
        self.height_of(0..self.rows.len())
    }

    pub(crate) fn height_of(&self, rows: Range<usize>) -> Result<f64> {
        rows.map(|index| self.row_height(index)).sum()
    }

    /// Draws the rows in `rows` stacked downwards from `upper_left`.
    pub(crate) fn draw_rows(
        &self,
        ctx: &mut dyn DrawContext,
        upper_left: Point,
        rows: Range<usize>,
    ) -> Result<()> {
        let mut y = upper_left.y;
        for index in rows {
            let row = RowView::new(self, index);
            let height = row.height()?;

            match row.row().custom_draw() {
                Some(custom) => {
                    custom.draw(ctx, row, Point::new(upper_left.x, y), self.width, height)?
                }
                None => {
                    let mut x = upper_left.x;
                    for cell in row.cells() {
                        self.draw_cell(ctx, cell, Point::new(x, y), height)?;
                        x += cell.width();
                    }
                }
            }

            tracing::trace!("Drew table row {} at y={:.2} ({:.2}pt)", index, y, height);
            y -= height;
        }
        Ok(())
    }

    fn draw_cell(
        &self,
        ctx: &mut dyn DrawContext,
        cell: CellView<'_>,
        upper_left: Point,
        height: f64,
    ) -> Result<()> {
        let width = cell.width();
        let padding = cell.cell().padding();
        let font_height = self.font_height();
        let graphics = ctx.graphics()?;

        if let Some(background) = cell.background_color() {
            graphics
                .set_fill_color(background)
                .rect(upper_left.x, upper_left.y - height, width, height)
                .fill();
        }

        let font_name = self.font.pdf_name();
        let available = (width - padding.horizontal()).max(0.0);
        let mut baseline = upper_left.y - padding.top - font_height;
        graphics.set_fill_color(cell.text_color());
        for line in cell.cell().lines(self.font(), self.font_size, width) {
            if !line.is_empty() {
                let line_width = self.font.string_width(&line, self.font_size);
                let x = upper_left.x + padding.left + cell.cell().align().offset(line_width, available);
                graphics.show_text(&font_name, self.font_size, x, baseline, &line);
            }
            baseline -= font_height;
        }

        if self.border_width > 0.0 {
            graphics
                .set_line_width(self.border_width)
                .set_stroke_color(cell.border_color())
                .rect(upper_left.x, upper_left.y - height, width, height)
                .stroke();
        }
        Ok(())
    }
}

/// Builder for [`Table`].
///
/// Column counts are checked in [`build`](TableBuilder::build), so rows and
/// columns may be added in any order.
#[derive(Debug)]
pub struct TableBuilder {
    rows: Vec<Row>,
    columns: Vec<Column>,
    font: Arc<dyn FontMetrics>,
    font_size: f64,
    border_width: f64,
    border_color: Color,
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            columns: Vec::new(),
            font: Arc::new(Font::Helvetica),
            font_size: DEFAULT_FONT_SIZE,
            border_width: DEFAULT_BORDER_WIDTH,
            border_color: Color::black(),
        }
    }

    pub fn add_row(mut self, row: Row) -> Self {
        self.rows.push(row);
        self
    }

    pub fn add_column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    pub fn add_column_of_width(self, width: f64) -> Self {
        self.add_column(Column::new(width))
    }

    pub fn font(mut self, font: impl FontMetrics + 'static) -> Self {
        self.font = Arc::new(font);
        self
    }

    pub fn font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn border_width(mut self, border_width: f64) -> Self {
        self.border_width = border_width;
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }

    pub fn build(self) -> Result<Table> {
        let expected = self.columns.len();
        for (index, row) in self.rows.iter().enumerate() {
            if !row.has_custom_draw() && row.cells().len() != expected {
                return Err(LayoutError::ColumnCountMismatch {
                    row: index,
                    expected,
                    actual: row.cells().len(),
                });
            }
        }

        let width = self.columns.iter().map(Column::width).sum();
        tracing::debug!(
            "Built table with {} columns, {} rows, width {:.2}",
            expected,
            self.rows.len(),
            width
        );

        Ok(Table {
            rows: self.rows,
            columns: self.columns,
            font: self.font,
            font_size: self.font_size,
            border_width: self.border_width,
            border_color: self.border_color,
            width,
        })
    }
}
