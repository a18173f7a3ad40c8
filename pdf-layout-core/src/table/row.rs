use super::cell::{Cell, CellView};
use super::table::Table;
use crate::error::{LayoutError, Result};
use crate::geometry::Point;
use crate::graphics::Color;
use crate::render::DrawContext;
use std::fmt::Debug;
use std::sync::Arc;

/// Replaces the cell-by-cell drawing of a row.
///
/// Rows with a custom drawer are exempt from the column count check, which
/// makes them suitable for dividers and full-width banners.
pub trait CustomRowDraw: Debug + Send + Sync {
    /// Draws `row` into the box with upper-left corner `upper_left`.
    fn draw(
        &self,
        ctx: &mut dyn DrawContext,
        row: RowView<'_>,
        upper_left: Point,
        width: f64,
        height: f64,
    ) -> Result<()>;
}

/// Draws a horizontal rule through the middle of the row.
///
/// The row is still measured from its cells, so give it at least one cell;
/// `Cell::empty()` is enough. A row without cells fails with `EmptyRow`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DividerLine {
    pub color: Option<Color>,
    pub line_width: f64,
}

impl Default for DividerLine {
    fn default() -> Self {
        Self {
            color: None,
            line_width: 1.0,
        }
    }
}

impl CustomRowDraw for DividerLine {
    fn draw(
        &self,
        ctx: &mut dyn DrawContext,
        row: RowView<'_>,
        upper_left: Point,
        width: f64,
        height: f64,
    ) -> Result<()> {
        let y = upper_left.y - height / 2.0;
        ctx.graphics()?
            .save_state()
            .set_line_width(self.line_width)
            .set_stroke_color(self.color.unwrap_or_else(|| row.border_color()))
            .move_to(upper_left.x, y)
            .line_to(upper_left.x + width, y)
            .stroke()
            .restore_state();
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct Row {
    cells: Vec<Cell>,
    border_color: Option<Color>,
    custom_draw: Option<Arc<dyn CustomRowDraw>>,
}

impl Row {
    pub fn builder() -> RowBuilder {
        RowBuilder::new()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The row's own border color, if it overrides the table's.
    pub fn border_color(&self) -> Option<Color> {
        self.border_color
    }

    pub fn has_custom_draw(&self) -> bool {
        self.custom_draw.is_some()
    }

    pub fn custom_draw(&self) -> Option<&dyn CustomRowDraw> {
        self.custom_draw.as_deref()
    }
}

/// Builder for [`Row`].
///
/// A row background color is pushed into every cell that has none of its
/// own when the row is built.
#[derive(Debug, Default)]
pub struct RowBuilder {
    cells: Vec<Cell>,
    background_color: Option<Color>,
    border_color: Option<Color>,
    custom_draw: Option<Arc<dyn CustomRowDraw>>,
}

impl RowBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, cell: Cell) -> Self {
        self.cells.push(cell);
        self
    }

    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    pub fn custom_draw(mut self, custom_draw: impl CustomRowDraw + 'static) -> Self {
        self.custom_draw = Some(Arc::new(custom_draw));
        self
    }

    pub fn build(self) -> Row {
        let mut cells = self.cells;
        if let Some(color) = self.background_color {
            for cell in &mut cells {
                cell.set_background_color_if_unset(color);
            }
        }

        Row {
            cells,
            border_color: self.border_color,
            custom_draw: self.custom_draw,
        }
    }
}

/// A row seen in the context of its table.
#[derive(Debug, Clone, Copy)]
pub struct RowView<'a> {
    table: &'a Table,
    index: usize,
}

impl<'a> RowView<'a> {
    pub(crate) fn new(table: &'a Table, index: usize) -> Self {
        Self { table, index }
    }

    pub fn table(&self) -> &'a Table {
        self.table
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn row(&self) -> &'a Row {
        &self.table.rows()[self.index]
    }

    pub fn cells(&self) -> impl Iterator<Item = CellView<'a>> + 'a {
        let row = *self;
        (0..row.row().cells().len()).map(move |column| CellView::new(row, column))
    }

    pub fn cell(&self, column: usize) -> Option<CellView<'a>> {
        (column < self.row().cells().len()).then(|| CellView::new(*self, column))
    }

    /// The row's border color, falling back to the table's.
    pub fn border_color(&self) -> Color {
        self.row()
            .border_color()
            .unwrap_or_else(|| self.table.border_color())
    }

    /// Tallest cell content of the row, excluding the font height.
    pub fn height_without_font_height(&self) -> Result<f64> {
        let mut cells = self.cells().peekable();
        if cells.peek().is_none() {
            return Err(LayoutError::EmptyRow { row: self.index });
        }
        Ok(cells
            .map(|cell| cell.height_without_font_height())
            .fold(f64::MIN, f64::max))
    }

    pub fn height(&self) -> Result<f64> {
        Ok(self.height_without_font_height()? + self.table.font_height())
    }
}
