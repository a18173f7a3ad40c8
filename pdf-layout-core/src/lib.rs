//! # pdf-layout
//!
//! Vertical-flow pagination for PDF content: elements are stacked top to
//! bottom on pages of a fixed format and divided when they cross a page
//! boundary. Tables with fixed-width columns break between rows, images move
//! to the next page as a whole.
//!
//! ## Features
//!
//! - **Pagination**: ordered elements, explicit page breaks and absolutely
//!   positioned elements
//! - **Tables**: immutable tables built and validated once, measured with
//!   per-font metrics, drawn with backgrounds, borders and wrapped text
//! - **Draw listeners**: every drawn object reports its final box, for
//!   annotations or a serializable placement record
//! - **Pluggable targets**: render into the in-memory [`render::Canvas`] or
//!   any [`render::DrawContext`]
//!
//! ## Quick Start
//!
//! ```rust
//! use pdf_layout::{Canvas, Cell, Document, PageFormat, PlacementRecorder, Row, Table};
//!
//! # fn main() -> pdf_layout::Result<()> {
//! let mut table = Table::builder()
//!     .add_column_of_width(200.0)
//!     .add_column_of_width(100.0);
//! for i in 0..200 {
//!     table = table.add_row(
//!         Row::builder()
//!             .add(Cell::new(format!("Item {i}")))
//!             .add(Cell::new(format!("{}", i * 3)))
//!             .build(),
//!     );
//! }
//!
//! let mut document = Document::new(PageFormat::a4());
//! document.add(table.build()?);
//!
//! let mut canvas = Canvas::new();
//! let mut recorder = PlacementRecorder::new();
//! let pages = document.render(&mut canvas, &mut recorder)?;
//!
//! assert!(pages > 1);
//! assert_eq!(canvas.page_count(), pages);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`elements`] - element kinds and the division contract
//! - [`table`] - table model, builders and row-boundary slicing
//! - [`render`] - page formats, draw targets, listeners and the paginator
//! - [`graphics`] - content stream operators, colors and images
//! - [`text`] - font metrics and line wrapping

#[cfg(feature = "compression")]
pub mod compression;
pub mod elements;
pub mod error;
pub mod geometry;
pub mod graphics;
pub mod render;
pub mod table;
pub mod text;

pub use elements::{Divided, Divisible, Drawable, Element, ImageElement, Measurable, VerticalSpacer};
pub use error::{LayoutError, Result};
pub use geometry::{Point, Rectangle};
pub use graphics::{Color, GraphicsContext, Image};
pub use render::{
    Canvas, DrawContext, DrawListener, Document, LayoutHint, Margins, PageFormat,
    PlacementRecorder,
};
pub use table::{Cell, CellPadding, Column, Row, Table, TableSlice};
pub use text::{Font, FontMetrics, TextAlign};

/// Current version of pdf-layout
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
