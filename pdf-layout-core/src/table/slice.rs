use super::table::Table;
use crate::elements::{Divided, Divisible, Drawable, Measurable, VerticalSpacer, EPSILON};
use crate::error::{LayoutError, Result};
use crate::geometry::Point;
use crate::render::{DrawContext, DrawListener, DrawnObject};
use std::ops::Range;
use std::sync::Arc;

/// A contiguous run of rows of a shared [`Table`].
///
/// Slices are what tables become once they enter a document: dividing a
/// slice at a page boundary yields two slices of the same table, cut between
/// rows. Rows themselves are never split.
#[derive(Debug, Clone)]
pub struct TableSlice {
    table: Arc<Table>,
    rows: Range<usize>,
}

impl TableSlice {
    /// A slice covering every row of `table`.
    pub fn new(table: impl Into<Arc<Table>>) -> Self {
        let table = table.into();
        let rows = 0..table.rows().len();
        Self { table, rows }
    }

    pub fn table(&self) -> &Arc<Table> {
        &self.table
    }

    pub fn rows(&self) -> Range<usize> {
        self.rows.clone()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn sub_slice(&self, rows: Range<usize>) -> Self {
        Self {
            table: Arc::clone(&self.table),
            rows,
        }
    }
}

impl Measurable for TableSlice {
    fn width(&self) -> Result<f64> {
        Ok(self.table.width())
    }

    fn height(&self) -> Result<f64> {
        self.table.height_of(self.rows())
    }
}

impl Drawable for TableSlice {
    fn draw(
        &self,
        ctx: &mut dyn DrawContext,
        upper_left: Point,
        listener: &mut dyn DrawListener,
    ) -> Result<()> {
        self.table.draw_rows(ctx, upper_left, self.rows())?;
        let height = self.height()?;
        listener.drawn(ctx, DrawnObject::Table(self), upper_left, self.table.width(), height)
    }
}

impl Divisible for TableSlice {
    fn divide(self, remaining_height: f64, next_page_height: f64) -> Result<Divided> {
        let mut used = 0.0;
        let mut split = self.rows.start;
        for index in self.rows() {
            let height = self.table.row_height(index)?;
            if used + height > remaining_height + EPSILON {
                break;
            }
            used += height;
            split = index + 1;
        }

        if split == self.rows.end {
            return Ok(Divided::whole(self));
        }

        if split == self.rows.start {
            // not even the first row fits, move the whole slice on
            let first = self.table.row_height(split)?;
            // NaN never fits
            let fits_on_page = first <= next_page_height + EPSILON;
            if !fits_on_page {
                return Err(LayoutError::ElementTooLarge {
                    element: format!("table row {split}"),
                    height: first,
                    page_height: next_page_height,
                });
            }
            tracing::warn!(
                "Table row {} ({:.2}pt) does not fit in {:.2}pt, deferring rows {}..{}",
                split,
                first,
                remaining_height.max(0.0),
                self.rows.start,
                self.rows.end
            );
            return Ok(Divided::new(VerticalSpacer::new(remaining_height), Some(self.into())));
        }

        tracing::debug!(
            "Splitting table rows {}..{} at row {} ({:.2}pt on this page)",
            self.rows.start,
            self.rows.end,
            split,
            used
        );
        let head = self.sub_slice(self.rows.start..split);
        let tail = self.sub_slice(split..self.rows.end);
        Ok(Divided::new(head, Some(tail.into())))
    }
}
