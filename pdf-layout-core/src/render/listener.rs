//! Notifications about drawn objects
//!
//! Every element reports the box it occupied to a [`DrawListener`] right
//! after drawing it. Listeners also see page boundaries, which makes them
//! the place for post-processing such as annotations, link areas or a
//! record of the final layout.

use super::context::DrawContext;
use crate::elements::{ImageElement, VerticalSpacer};
use crate::error::{LayoutError, Result};
use crate::geometry::{Point, Rectangle};
use crate::table::TableSlice;

/// Error type returned by annotation processors.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The object a [`DrawListener`] is told about.
#[derive(Debug, Clone, Copy)]
pub enum DrawnObject<'a> {
    Spacer(&'a VerticalSpacer),
    Image(&'a ImageElement),
    Table(&'a TableSlice),
}

impl DrawnObject<'_> {
    pub fn kind(&self) -> PlacementKind {
        match self {
            DrawnObject::Spacer(_) => PlacementKind::Spacer,
            DrawnObject::Image(_) => PlacementKind::Image,
            DrawnObject::Table(slice) => PlacementKind::Table {
                start_row: slice.rows().start,
                end_row: slice.rows().end,
            },
        }
    }
}

pub trait DrawListener {
    /// Called once per drawn object with the box it occupies.
    fn drawn(
        &mut self,
        ctx: &mut dyn DrawContext,
        object: DrawnObject<'_>,
        upper_left: Point,
        width: f64,
        height: f64,
    ) -> Result<()>;

    /// Called after a page is opened, before anything is drawn on it.
    fn before_page(&mut self, _ctx: &mut dyn DrawContext) -> Result<()> {
        Ok(())
    }

    /// Called before a page is closed.
    fn after_page(&mut self, _ctx: &mut dyn DrawContext) -> Result<()> {
        Ok(())
    }

    /// Called once after the last page was closed.
    fn after_render(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Ignores every notification.
impl DrawListener for () {
    fn drawn(
        &mut self,
        _ctx: &mut dyn DrawContext,
        _object: DrawnObject<'_>,
        _upper_left: Point,
        _width: f64,
        _height: f64,
    ) -> Result<()> {
        Ok(())
    }
}

/// Post-processing hook driven by an [`AnnotationDrawListener`].
pub trait AnnotationProcessor {
    fn annotated_object_drawn(
        &mut self,
        ctx: &mut dyn DrawContext,
        object: &DrawnObject<'_>,
        upper_left: Point,
        width: f64,
        height: f64,
    ) -> std::result::Result<(), BoxError>;

    fn before_page(&mut self, _ctx: &mut dyn DrawContext) -> std::result::Result<(), BoxError> {
        Ok(())
    }

    fn after_page(&mut self, _ctx: &mut dyn DrawContext) -> std::result::Result<(), BoxError> {
        Ok(())
    }

    fn after_render(&mut self) -> std::result::Result<(), BoxError> {
        Ok(())
    }
}

/// Fans notifications out to annotation processors, in registration order.
///
/// A processor failure aborts rendering with [`LayoutError::Annotation`]
/// wrapping the processor's error.
#[derive(Default)]
pub struct AnnotationDrawListener {
    processors: Vec<Box<dyn AnnotationProcessor>>,
}

impl AnnotationDrawListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_processor(mut self, processor: impl AnnotationProcessor + 'static) -> Self {
        self.add_processor(processor);
        self
    }

    pub fn add_processor(&mut self, processor: impl AnnotationProcessor + 'static) {
        self.processors.push(Box::new(processor));
    }

    pub fn len(&self) -> usize {
        self.processors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }
}

impl std::fmt::Debug for AnnotationDrawListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnnotationDrawListener")
            .field("processors", &self.processors.len())
            .finish()
    }
}

impl DrawListener for AnnotationDrawListener {
    fn drawn(
        &mut self,
        ctx: &mut dyn DrawContext,
        object: DrawnObject<'_>,
        upper_left: Point,
        width: f64,
        height: f64,
    ) -> Result<()> {
        for processor in &mut self.processors {
            processor
                .annotated_object_drawn(ctx, &object, upper_left, width, height)
                .map_err(LayoutError::annotation)?;
        }
        Ok(())
    }

    fn before_page(&mut self, ctx: &mut dyn DrawContext) -> Result<()> {
        for processor in &mut self.processors {
            processor.before_page(ctx).map_err(LayoutError::annotation)?;
        }
        Ok(())
    }

    fn after_page(&mut self, ctx: &mut dyn DrawContext) -> Result<()> {
        for processor in &mut self.processors {
            processor.after_page(ctx).map_err(LayoutError::annotation)?;
        }
        Ok(())
    }

    fn after_render(&mut self) -> Result<()> {
        for processor in &mut self.processors {
            processor.after_render().map_err(LayoutError::annotation)?;
        }
        Ok(())
    }
}

/// What kind of object was placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlacementKind {
    Spacer,
    Image,
    Table { start_row: usize, end_row: usize },
}

/// One drawn object and where it ended up.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    /// Zero-based page index
    pub page: usize,
    pub kind: PlacementKind,
    pub bounds: Rectangle,
}

/// Listener that records every placement, for inspection or export.
#[derive(Debug, Clone, Default)]
pub struct PlacementRecorder {
    placements: Vec<Placement>,
    pages: usize,
    finished: bool,
}

impl PlacementRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn into_placements(self) -> Vec<Placement> {
        self.placements
    }

    /// Placements on page `page`, in drawing order.
    pub fn on_page(&self, page: usize) -> impl Iterator<Item = &Placement> {
        self.placements.iter().filter(move |p| p.page == page)
    }

    /// Number of pages closed so far.
    pub fn pages(&self) -> usize {
        self.pages
    }

    /// Whether rendering completed.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Placements as pretty-printed JSON.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.placements)?)
    }
}

impl DrawListener for PlacementRecorder {
    fn drawn(
        &mut self,
        ctx: &mut dyn DrawContext,
        object: DrawnObject<'_>,
        upper_left: Point,
        width: f64,
        height: f64,
    ) -> Result<()> {
        let page = ctx
            .page_index()
            .ok_or_else(|| LayoutError::Draw("object drawn outside of a page".to_string()))?;
        self.placements.push(Placement {
            page,
            kind: object.kind(),
            bounds: Rectangle::from_upper_left(upper_left, width, height),
        });
        Ok(())
    }

    fn after_page(&mut self, _ctx: &mut dyn DrawContext) -> Result<()> {
        self.pages += 1;
        Ok(())
    }

    fn after_render(&mut self) -> Result<()> {
        self.finished = true;
        Ok(())
    }
}
