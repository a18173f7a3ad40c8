//! Integration tests for table construction, measurement and drawing

use pdf_layout::graphics::Color;
use pdf_layout::render::{Canvas, DrawContext, Margins, PageFormat, PlacementKind};
use pdf_layout::table::{Cell, CellPadding, CustomRowDraw, DividerLine, Row, RowView, Table};
use pdf_layout::text::{FontMetrics, TextAlign};
use pdf_layout::{Document, LayoutError, PlacementRecorder, Point, Result};
use pretty_assertions::assert_eq;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Every glyph is one em wide and the bounding box is one em tall, so a
/// 12pt font is exactly 12pt high.
#[derive(Debug)]
struct SquareFont;

impl FontMetrics for SquareFont {
    fn pdf_name(&self) -> String {
        "F1".to_string()
    }

    fn bounding_box_height(&self) -> f64 {
        1000.0
    }

    fn char_width(&self, _ch: char) -> f64 {
        1000.0
    }
}

fn cell_with_bottom_padding(bottom: f64) -> Cell {
    Cell::new("x").with_padding(CellPadding::new(0.0, 0.0, bottom, 0.0))
}

#[test]
fn test_table_height_from_rows_and_font_height() -> Result<()> {
    let table = Table::builder()
        .font(SquareFont)
        .font_size(12.0)
        .add_column_of_width(100.0)
        .add_row(Row::builder().add(cell_with_bottom_padding(10.0)).build())
        .add_row(Row::builder().add(cell_with_bottom_padding(25.0)).build())
        .add_row(Row::builder().add(cell_with_bottom_padding(15.0)).build())
        .build()?;

    assert_eq!(table.font_height(), 12.0);
    assert_eq!(table.height()?, 86.0);
    Ok(())
}

#[test]
fn test_wrapped_cell_grows_row() -> Result<()> {
    // 10pt glyphs, 40pt column with 5pt padding each side: three glyphs per line
    let table = Table::builder()
        .font(SquareFont)
        .font_size(10.0)
        .add_column_of_width(40.0)
        .add_column_of_width(40.0)
        .add_row(
            Row::builder()
                .add(Cell::new("ab cd ef").with_padding(CellPadding::uniform(5.0)))
                .add(Cell::new("ab").with_padding(CellPadding::uniform(5.0)))
                .build(),
        )
        .build()?;

    let row = table.row(0).unwrap();
    assert_eq!(table.cell(0, 0).unwrap().cell().lines(table.font(), 10.0, 40.0).len(), 3);
    // padding 10 + two extra lines
    assert_eq!(row.height_without_font_height()?, 30.0);
    assert_eq!(row.height()?, 40.0);
    Ok(())
}

#[test]
fn test_mismatched_row_rejected_at_build() {
    let result = Table::builder()
        .add_column_of_width(50.0)
        .add_column_of_width(50.0)
        .add_column_of_width(50.0)
        .add_row(
            Row::builder()
                .add(Cell::new("a"))
                .add(Cell::new("b"))
                .add(Cell::new("c"))
                .build(),
        )
        .add_row(
            Row::builder()
                .add(Cell::new("a"))
                .add(Cell::new("b"))
                .add(Cell::new("c"))
                .add(Cell::new("d"))
                .build(),
        )
        .build();

    match result {
        Err(LayoutError::ColumnCountMismatch {
            row,
            expected,
            actual,
        }) => assert_eq!((row, expected, actual), (1, 3, 4)),
        other => panic!("expected column count mismatch, got {other:?}"),
    }
}

#[test]
fn test_columns_may_follow_rows() -> Result<()> {
    let table = Table::builder()
        .add_row(Row::builder().add(Cell::new("a")).add(Cell::new("b")).build())
        .add_column_of_width(30.0)
        .add_column_of_width(70.0)
        .build()?;
    assert_eq!(table.width(), 100.0);
    assert_eq!(table.number_of_columns(), 2);
    Ok(())
}

#[derive(Debug, Default)]
struct CountingDraw {
    calls: Arc<AtomicUsize>,
}

impl CustomRowDraw for CountingDraw {
    fn draw(
        &self,
        ctx: &mut dyn DrawContext,
        row: RowView<'_>,
        upper_left: Point,
        width: f64,
        height: f64,
    ) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        ctx.graphics()?
            .set_fill_color(row.border_color())
            .rect(upper_left.x, upper_left.y - height, width, height)
            .fill();
        Ok(())
    }
}

#[test]
fn test_custom_drawn_row_with_fewer_cells() -> Result<()> {
    let calls = Arc::new(AtomicUsize::new(0));
    let table = Table::builder()
        .font(SquareFont)
        .add_column_of_width(50.0)
        .add_column_of_width(50.0)
        .add_column_of_width(50.0)
        .add_row(
            Row::builder()
                .add(Cell::new("banner"))
                .custom_draw(CountingDraw {
                    calls: Arc::clone(&calls),
                })
                .build(),
        )
        .add_row(
            Row::builder()
                .add(Cell::new("a"))
                .add(Cell::new("b"))
                .add(Cell::new("c"))
                .build(),
        )
        .build()?;

    let mut document = Document::new(PageFormat::a4());
    document.add(table);
    let mut canvas = Canvas::new();
    document.render(&mut canvas, &mut ())?;

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    // the banner row shows no cell text, the regular row does
    let ops = canvas.pages()[0].operations();
    assert!(!ops.contains("(banner) Tj"));
    assert!(ops.contains("(a) Tj"));
    Ok(())
}

#[test]
fn test_border_color_resolution() -> Result<()> {
    let table = Table::builder()
        .add_column_of_width(50.0)
        .add_row(Row::builder().add(Cell::new("a")).build())
        .add_row(
            Row::builder()
                .add(Cell::new("b"))
                .border_color(Color::red())
                .build(),
        )
        .build()?;

    assert_eq!(table.border_color(), Color::black());
    assert_eq!(table.row(0).unwrap().border_color(), Color::black());
    assert_eq!(table.cell(0, 0).unwrap().border_color(), Color::black());
    assert_eq!(table.cell(1, 0).unwrap().border_color(), Color::red());
    Ok(())
}

#[test]
fn test_row_background_applies_to_unset_cells() -> Result<()> {
    let table = Table::builder()
        .add_column_of_width(50.0)
        .add_column_of_width(50.0)
        .add_row(
            Row::builder()
                .add(Cell::new("a"))
                .add(Cell::new("b").with_background_color(Color::green()))
                .background_color(Color::blue())
                .build(),
        )
        .build()?;

    assert_eq!(table.cell(0, 0).unwrap().background_color(), Some(Color::blue()));
    assert_eq!(table.cell(0, 1).unwrap().background_color(), Some(Color::green()));
    Ok(())
}

#[test]
fn test_table_drawing_operations() -> Result<()> {
    let table = Table::builder()
        .font(SquareFont)
        .font_size(10.0)
        .border_color(Color::red())
        .add_column_of_width(100.0)
        .add_row(
            Row::builder()
                .add(
                    Cell::new("hi")
                        .with_align(TextAlign::Right)
                        .with_padding(CellPadding::uniform(5.0)),
                )
                .background_color(Color::gray(0.5))
                .build(),
        )
        .build()?;

    let format = PageFormat::new(200.0, 100.0).with_margins(Margins::none());
    let mut document = Document::new(format);
    document.add(table);
    let mut canvas = Canvas::new();
    document.render(&mut canvas, &mut ())?;

    let ops = canvas.pages()[0].operations();
    // background over the full row: height 5 + 5 + 10
    assert!(ops.contains("0.00 80.00 100.00 20.00 re\n0.500 g\nf\n"));
    // right aligned: 100 - 5 padding - 20 text width
    assert!(ops.contains("/F1 10.00 Tf\n75.00 85.00 Td\n(hi) Tj\n"));
    assert!(ops.contains("0.20 w\n"));
    assert!(ops.contains("1.000 0.000 0.000 RG\nS\n"));
    Ok(())
}

#[test]
fn test_divider_row_draws_rule() -> Result<()> {
    let table = Table::builder()
        .font(SquareFont)
        .font_size(10.0)
        .add_column_of_width(100.0)
        .add_row(
            Row::builder()
                .add(Cell::empty().with_padding(CellPadding::uniform(0.0)))
                .custom_draw(DividerLine {
                    color: Some(Color::blue()),
                    line_width: 2.0,
                })
                .build(),
        )
        .build()?;

    let format = PageFormat::new(100.0, 100.0).with_margins(Margins::none());
    let mut document = Document::new(format);
    document.add(table);
    let mut canvas = Canvas::new();
    let mut recorder = PlacementRecorder::new();
    document.render(&mut canvas, &mut recorder)?;

    let ops = canvas.pages()[0].operations();
    assert!(ops.contains("0.00 95.00 m\n100.00 95.00 l\n0.000 0.000 1.000 RG\nS\n"));
    assert_eq!(
        recorder.placements()[0].kind,
        PlacementKind::Table {
            start_row: 0,
            end_row: 1
        }
    );
    Ok(())
}

#[test]
fn test_measuring_keeps_cell_order() -> Result<()> {
    let padded = |text: &str, bottom: f64| {
        Cell::new(text).with_padding(CellPadding::new(0.0, 0.0, bottom, 0.0))
    };
    let table = Table::builder()
        .font(SquareFont)
        .font_size(10.0)
        .add_column_of_width(100.0)
        .add_column_of_width(100.0)
        .add_column_of_width(100.0)
        .add_row(
            Row::builder()
                .add(padded("a", 30.0))
                .add(padded("b", 10.0))
                .add(padded("c", 20.0))
                .build(),
        )
        .build()?;

    let row = table.row(0).ok_or(LayoutError::EmptyRow { row: 0 })?;
    for _ in 0..3 {
        assert_eq!(row.height_without_font_height()?, 30.0);
        assert_eq!(table.height()?, 40.0);
    }
    let texts: Vec<&str> = row.row().cells().iter().map(Cell::text).collect();
    assert_eq!(texts, vec!["a", "b", "c"]);

    let format = PageFormat::new(300.0, 200.0).with_margins(Margins::none());
    let mut document = Document::new(format);
    document.add(table);
    let mut canvas = Canvas::new();
    document.render(&mut canvas, &mut ())?;

    let ops = canvas.pages()[0].operations();
    let position = |needle: &str| ops.find(needle);
    let a = position("0.00 190.00 Td\n(a) Tj\n");
    let b = position("100.00 190.00 Td\n(b) Tj\n");
    let c = position("200.00 190.00 Td\n(c) Tj\n");
    assert!(a.is_some() && b.is_some() && c.is_some());
    assert!(a < b && b < c);
    Ok(())
}
