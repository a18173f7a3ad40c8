/// A table column. Columns only carry their width; the table width is the
/// sum of all column widths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column {
    width: f64,
}

impl Column {
    pub fn new(width: f64) -> Self {
        Self { width }
    }

    pub fn width(&self) -> f64 {
        self.width
    }
}
