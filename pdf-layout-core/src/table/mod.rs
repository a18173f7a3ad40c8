//! Tables that flow across pages
//!
//! A [`Table`] is assembled once through [`TableBuilder`] and never changes
//! afterwards. Placing it in a document wraps it in a [`TableSlice`]; page
//! division then produces further slices that share the same table.
//!
//! # Example
//!
//! ```rust
//! use pdf_layout::graphics::Color;
//! use pdf_layout::table::{Cell, Row, Table};
//!
//! let table = Table::builder()
//!     .add_column_of_width(120.0)
//!     .add_column_of_width(60.0)
//!     .add_row(
//!         Row::builder()
//!             .add(Cell::new("Item"))
//!             .add(Cell::new("Qty"))
//!             .background_color(Color::gray(0.9))
//!             .build(),
//!     )
//!     .add_row(Row::builder().add(Cell::new("Bolts")).add(Cell::new("12")).build())
//!     .build()?;
//!
//! assert_eq!(table.width(), 180.0);
//! # Ok::<(), pdf_layout::LayoutError>(())
//! ```

mod cell;
mod column;
mod row;
mod slice;
#[allow(clippy::module_inception)]
mod table;

pub use cell::{Cell, CellPadding, CellView};
pub use column::Column;
pub use row::{CustomRowDraw, DividerLine, Row, RowBuilder, RowView};
pub use slice::TableSlice;
pub use table::{Table, TableBuilder, DEFAULT_BORDER_WIDTH, DEFAULT_FONT_SIZE};
