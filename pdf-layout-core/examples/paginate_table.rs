//! Example flowing a long invoice table across A4 pages
//!
//! Prints one line per placed object and a summary per page.

use pdf_layout::elements::VerticalSpacer;
use pdf_layout::graphics::Color;
use pdf_layout::render::{LayoutHint, PlacementKind};
use pdf_layout::table::{Cell, DividerLine, Row};
use pdf_layout::text::{Font, TextAlign};
use pdf_layout::{Canvas, Document, PageFormat, PlacementRecorder, Result, Table};

fn main() -> Result<()> {
    let mut table = Table::builder()
        .font(Font::Helvetica)
        .font_size(10.0)
        .border_color(Color::gray(0.6))
        .add_column_of_width(60.0)
        .add_column_of_width(250.0)
        .add_column_of_width(60.0)
        .add_column_of_width(80.0)
        .add_row(
            Row::builder()
                .add(Cell::new("Pos"))
                .add(Cell::new("Description"))
                .add(Cell::new("Qty").with_align(TextAlign::Right))
                .add(Cell::new("Amount").with_align(TextAlign::Right))
                .background_color(Color::rgb8(220, 230, 241))
                .build(),
        );

    for i in 1..=120 {
        let description = if i % 7 == 0 {
            format!("Item {i} with a longer description that wraps onto a second line")
        } else {
            format!("Item {i}")
        };
        let mut row = Row::builder()
            .add(Cell::new(i.to_string()))
            .add(Cell::new(description))
            .add(Cell::new((i % 5 + 1).to_string()).with_align(TextAlign::Right))
            .add(Cell::new(format!("{:.2}", i as f64 * 3.5)).with_align(TextAlign::Right));
        if i % 2 == 0 {
            row = row.background_color(Color::gray(0.95));
        }
        table = table.add_row(row.build());

        if i % 40 == 0 {
            table = table.add_row(
                Row::builder()
                    .add(Cell::empty())
                    .custom_draw(DividerLine::default())
                    .build(),
            );
        }
    }

    let mut document = Document::new(PageFormat::a4());
    document
        .add(VerticalSpacer::new(20.0))
        .add_with_hint(table.build()?, LayoutHint::centered())
        .add_page_break()
        .add(VerticalSpacer::new(50.0));

    let mut canvas = Canvas::new();
    let mut recorder = PlacementRecorder::new();
    let pages = document.render(&mut canvas, &mut recorder)?;

    for placement in recorder.placements() {
        let what = match placement.kind {
            PlacementKind::Spacer => "spacer".to_string(),
            PlacementKind::Image => "image".to_string(),
            PlacementKind::Table { start_row, end_row } => format!("rows {start_row}..{end_row}"),
        };
        println!(
            "page {:>2}: {:<14} at ({:.1}, {:.1}) height {:.1}",
            placement.page + 1,
            what,
            placement.bounds.lower_left.x,
            placement.bounds.upper_right.y,
            placement.bounds.height()
        );
    }

    for (index, page) in canvas.pages().iter().enumerate() {
        println!(
            "page {}: {} bytes of content",
            index + 1,
            page.content()?.len()
        );
    }
    println!("Rendered {pages} pages");
    Ok(())
}
