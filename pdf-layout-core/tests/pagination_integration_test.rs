//! Integration tests for flowing elements across pages

use pdf_layout::elements::{Divisible, Element, Extent, ImageElement, VerticalSpacer};
use pdf_layout::render::{
    AnnotationDrawListener, AnnotationProcessor, BoxError, Canvas, DrawContext, DrawnObject,
    LayoutHint, Margins, PageFormat, PlacementKind, PlacementRecorder,
};
use pdf_layout::table::{Cell, CellPadding, Row, Table};
use pdf_layout::text::FontMetrics;
use pdf_layout::{Document, Image, LayoutError, Measurable, Point, Result};
use pretty_assertions::assert_eq;
use std::cell::RefCell;
use std::rc::Rc;

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

/// 400pt of content height per page, no margins.
fn format() -> PageFormat {
    PageFormat::new(300.0, 400.0).with_margins(Margins::none())
}

fn image(width: f64, height: f64) -> ImageElement {
    let image = Image::from_rgb_data(2, 2, vec![0xAA; 12]).unwrap();
    ImageElement::new(image).with_size(width, height)
}

/// `rows` rows of exactly 20pt each.
fn table(rows: usize) -> Table {
    let mut builder = Table::builder()
        .font(SquareFont)
        .font_size(10.0)
        .add_column_of_width(100.0)
        .add_column_of_width(100.0);
    for i in 0..rows {
        builder = builder.add_row(
            Row::builder()
                .add(Cell::new(format!("{i}")).with_padding(CellPadding::uniform(5.0)))
                .add(Cell::new("v").with_padding(CellPadding::uniform(5.0)))
                .build(),
        );
    }
    builder.build().unwrap()
}

fn render(document: Document) -> Result<(usize, Canvas, PlacementRecorder)> {
    let mut canvas = Canvas::new();
    let mut recorder = PlacementRecorder::new();
    let pages = document.render(&mut canvas, &mut recorder)?;
    Ok((pages, canvas, recorder))
}

#[test]
fn test_spacer_split_preserves_height() -> Result<()> {
    let divided = Element::from(VerticalSpacer::new(100.0)).divide(40.0, 400.0)?;
    assert_eq!(divided.first.height()?, 40.0);
    assert_eq!(divided.tail.as_ref().unwrap().height()?, 60.0);
    assert_eq!(divided.height()?, 100.0);
    Ok(())
}

#[test]
fn test_image_deferred_whole() -> Result<()> {
    let mut document = Document::new(format());
    document.add(VerticalSpacer::new(350.0)).add(image(100.0, 300.0));

    let (pages, canvas, recorder) = render(document)?;
    assert_eq!(pages, 2);

    let placements = recorder.placements();
    assert_eq!(placements.len(), 3);
    // the filler spacer takes the unused 50pt of page 0
    assert_eq!(placements[1].kind, PlacementKind::Spacer);
    assert_eq!(placements[1].bounds.height(), 50.0);
    assert_eq!(placements[2].kind, PlacementKind::Image);
    assert_eq!(placements[2].page, 1);

    assert!(canvas.pages()[0].images().is_empty());
    assert_eq!(canvas.pages()[1].images().len(), 1);
    Ok(())
}

#[test]
fn test_image_taller_than_page_is_an_error() {
    let mut document = Document::new(format());
    document.add(image(100.0, 500.0));

    match render(document) {
        Err(LayoutError::ElementTooLarge {
            height,
            page_height,
            ..
        }) => {
            assert_eq!(height, 500.0);
            assert_eq!(page_height, 400.0);
        }
        other => panic!("expected ElementTooLarge, got {:?}", other.map(|(pages, _, _)| pages)),
    }
}

#[test]
fn test_image_scaled_to_content_width() -> Result<()> {
    let raw = Image::from_gray_data(600, 200, vec![0; 600 * 200])?;
    let mut document = Document::new(format());
    document.add(
        ImageElement::new(raw)
            .with_width(Extent::ScaleToRespectWidth)
            .with_height(Extent::ScaleToRespectWidth),
    );

    let (_, _, recorder) = render(document)?;
    let bounds = recorder.placements()[0].bounds;
    assert_eq!(bounds.width(), 300.0);
    assert_eq!(bounds.height(), 100.0);
    Ok(())
}

#[test]
fn test_default_image_keeps_pixel_size() -> Result<()> {
    let raw = Image::from_gray_data(600, 200, vec![0; 600 * 200])?;
    let mut document = Document::new(format());
    document.add(ImageElement::new(raw));

    let (pages, _, recorder) = render(document)?;
    assert_eq!(pages, 1);
    let bounds = recorder.placements()[0].bounds;
    assert_eq!(bounds.width(), 600.0);
    assert_eq!(bounds.height(), 200.0);
    Ok(())
}

#[test]
fn test_image_with_nan_height_fails() -> Result<()> {
    let mut document = Document::new(format());
    document
        .add(VerticalSpacer::new(50.0))
        .add(image(100.0, f64::NAN));

    match render(document) {
        Err(LayoutError::InvalidImage(message)) => assert!(message.contains("height")),
        other => panic!("expected InvalidImage, got {:?}", other.map(|(pages, _, _)| pages)),
    }
    Ok(())
}

#[test]
fn test_table_flows_across_pages_at_row_boundaries() -> Result<()> {
    // 50 rows of 20pt on 400pt pages: 20 + 20 + 10
    let mut document = Document::new(format());
    document.add(table(50));

    let (pages, canvas, recorder) = render(document)?;
    assert_eq!(pages, 3);
    assert_eq!(canvas.page_count(), 3);

    let slices: Vec<_> = recorder
        .placements()
        .iter()
        .map(|p| (p.page, p.kind))
        .collect();
    assert_eq!(
        slices,
        vec![
            (0, PlacementKind::Table { start_row: 0, end_row: 20 }),
            (1, PlacementKind::Table { start_row: 20, end_row: 40 }),
            (2, PlacementKind::Table { start_row: 40, end_row: 50 }),
        ]
    );

    // each continuation starts at the top of its page
    for placement in recorder.placements() {
        assert_eq!(placement.bounds.upper_left().y, 400.0);
    }
    Ok(())
}

#[test]
fn test_table_after_content_splits_with_remaining_height() -> Result<()> {
    let mut document = Document::new(format());
    document.add(VerticalSpacer::new(345.0)).add(table(5));

    let (pages, _, recorder) = render(document)?;
    assert_eq!(pages, 2);
    let kinds: Vec<_> = recorder.placements().iter().map(|p| (p.page, p.kind)).collect();
    assert_eq!(
        kinds,
        vec![
            (0, PlacementKind::Spacer),
            (0, PlacementKind::Table { start_row: 0, end_row: 2 }),
            (1, PlacementKind::Table { start_row: 2, end_row: 5 }),
        ]
    );
    Ok(())
}

#[test]
fn test_table_whose_first_row_does_not_fit_is_deferred() -> Result<()> {
    let mut document = Document::new(format());
    document.add(VerticalSpacer::new(390.0)).add(table(3));

    let (pages, _, recorder) = render(document)?;
    assert_eq!(pages, 2);
    let placements = recorder.placements();
    assert_eq!(placements[1].kind, PlacementKind::Spacer);
    assert_eq!(placements[1].bounds.height(), 10.0);
    assert_eq!(placements[2].page, 1);
    assert_eq!(
        placements[2].kind,
        PlacementKind::Table { start_row: 0, end_row: 3 }
    );
    Ok(())
}

#[test]
fn test_every_element_reported_exactly_once() -> Result<()> {
    let mut document = Document::new(format());
    document
        .add(VerticalSpacer::new(10.0))
        .add_with_hint(image(50.0, 50.0), LayoutHint::centered())
        .add(table(3))
        .add_page_break()
        .add(image(20.0, 20.0).with_absolute_position(Point::new(10.0, 390.0)))
        .add(VerticalSpacer::new(5.0));

    let (pages, _, recorder) = render(document)?;
    assert_eq!(pages, 2);
    assert_eq!(recorder.placements().len(), 5);
    assert_eq!(recorder.on_page(0).count(), 3);
    assert_eq!(recorder.on_page(1).count(), 2);
    assert_eq!(recorder.pages(), 2);
    assert!(recorder.is_finished());

    let centered = &recorder.placements()[1];
    assert_eq!(centered.bounds.lower_left.x, 125.0);
    assert_eq!(centered.bounds.upper_left().y, 390.0);
    Ok(())
}

#[test]
fn test_document_can_be_rendered_twice() -> Result<()> {
    let mut document = Document::new(format());
    document.add(table(30));

    let (first, _, a) = render(document.clone())?;
    let (second, _, b) = render(document)?;
    assert_eq!(first, second);
    assert_eq!(a.placements(), b.placements());
    Ok(())
}

#[test]
fn test_shared_table_in_two_documents() -> Result<()> {
    let shared = std::sync::Arc::new(table(10));

    let mut narrow = Document::new(PageFormat::new(300.0, 100.0).with_margins(Margins::none()));
    narrow.add(pdf_layout::TableSlice::new(std::sync::Arc::clone(&shared)));
    let mut wide = Document::new(format());
    wide.add(pdf_layout::TableSlice::new(shared));

    assert_eq!(render(narrow)?.0, 2);
    assert_eq!(render(wide)?.0, 1);
    Ok(())
}

/// Collects link areas for drawn images, one list per page.
#[derive(Default)]
struct LinkAreas {
    pages: Rc<RefCell<Vec<Vec<(f64, f64)>>>>,
}

impl AnnotationProcessor for LinkAreas {
    fn annotated_object_drawn(
        &mut self,
        _ctx: &mut dyn DrawContext,
        object: &DrawnObject<'_>,
        upper_left: Point,
        _width: f64,
        _height: f64,
    ) -> std::result::Result<(), BoxError> {
        if let DrawnObject::Image(_) = object {
            let mut pages = self.pages.borrow_mut();
            pages
                .last_mut()
                .ok_or("image drawn before any page")?
                .push((upper_left.x, upper_left.y));
        }
        Ok(())
    }

    fn before_page(&mut self, _ctx: &mut dyn DrawContext) -> std::result::Result<(), BoxError> {
        self.pages.borrow_mut().push(Vec::new());
        Ok(())
    }
}

#[test]
fn test_annotation_processors_see_page_structure() -> Result<()> {
    let areas = Rc::new(RefCell::new(Vec::new()));
    let mut listener = AnnotationDrawListener::new().with_processor(LinkAreas {
        pages: Rc::clone(&areas),
    });

    let mut document = Document::new(format());
    document
        .add(image(10.0, 300.0))
        .add(image(10.0, 300.0))
        .add(image(10.0, 300.0));
    let mut canvas = Canvas::new();
    let pages = document.render(&mut canvas, &mut listener)?;

    assert_eq!(pages, 3);
    assert_eq!(
        *areas.borrow(),
        vec![vec![(0.0, 400.0)], vec![(0.0, 400.0)], vec![(0.0, 400.0)]]
    );
    Ok(())
}

struct RejectTables;

impl AnnotationProcessor for RejectTables {
    fn annotated_object_drawn(
        &mut self,
        _ctx: &mut dyn DrawContext,
        object: &DrawnObject<'_>,
        _upper_left: Point,
        _width: f64,
        _height: f64,
    ) -> std::result::Result<(), BoxError> {
        match object {
            DrawnObject::Table(_) => Err("tables cannot carry links".into()),
            _ => Ok(()),
        }
    }
}

#[test]
fn test_annotation_failure_aborts_rendering() {
    let mut listener = AnnotationDrawListener::new().with_processor(RejectTables);
    let mut document = Document::new(format());
    document.add(VerticalSpacer::new(10.0)).add(table(2));

    let err = document
        .render(&mut Canvas::new(), &mut listener)
        .unwrap_err();
    assert!(matches!(err, LayoutError::Annotation { .. }));
    assert!(err.to_string().contains("tables cannot carry links"));
}

#[cfg(feature = "serde")]
#[test]
fn test_placement_record_exports_json() -> Result<()> {
    let mut document = Document::new(format());
    document.add(table(25));
    let (_, _, recorder) = render(document)?;

    let json = recorder.to_json()?;
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 2);
    assert_eq!(value[1]["page"], 1);
    Ok(())
}
