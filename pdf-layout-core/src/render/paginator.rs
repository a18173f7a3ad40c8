use super::context::DrawContext;
use super::format::{LayoutHint, PageFormat};
use super::listener::DrawListener;
use crate::elements::{Divided, Divisible, Drawable, Element, Measurable, EPSILON};
use crate::error::Result;
use crate::geometry::Point;
use std::collections::VecDeque;
use tracing::{debug, trace};

#[derive(Debug, Clone)]
enum Entry {
    Element(Element, LayoutHint),
    PageBreak,
}

/// An ordered sequence of elements to lay out on pages of one format.
///
/// # Example
///
/// ```rust
/// use pdf_layout::elements::VerticalSpacer;
/// use pdf_layout::render::{Canvas, Document, Margins, PageFormat};
///
/// let format = PageFormat::new(300.0, 200.0).with_margins(Margins::none());
/// let mut document = Document::new(format);
/// document.add(VerticalSpacer::new(150.0));
/// document.add(VerticalSpacer::new(150.0));
///
/// let mut canvas = Canvas::new();
/// let pages = document.render(&mut canvas, &mut ())?;
/// assert_eq!(pages, 2);
/// # Ok::<(), pdf_layout::LayoutError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Document {
    format: PageFormat,
    entries: Vec<Entry>,
}

impl Document {
    pub fn new(format: PageFormat) -> Self {
        Self {
            format,
            entries: Vec::new(),
        }
    }

    pub fn format(&self) -> &PageFormat {
        &self.format
    }

    /// Appends an element with the default layout hint.
    pub fn add(&mut self, element: impl Into<Element>) -> &mut Self {
        self.add_with_hint(element, LayoutHint::default())
    }

    pub fn add_with_hint(&mut self, element: impl Into<Element>, hint: LayoutHint) -> &mut Self {
        self.entries.push(Entry::Element(element.into(), hint));
        self
    }

    /// Forces the following elements onto a new page.
    pub fn add_page_break(&mut self) -> &mut Self {
        self.entries.push(Entry::PageBreak);
        self
    }

    /// Number of elements and page breaks added.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lays the document out into `ctx` and returns the number of pages.
    pub fn render(
        self,
        ctx: &mut dyn DrawContext,
        listener: &mut dyn DrawListener,
    ) -> Result<usize> {
        Paginator::new(self.format, ctx, listener)?.run(self.entries)
    }
}

/// Places elements top to bottom, dividing them at page boundaries.
struct Paginator<'a> {
    format: PageFormat,
    ctx: &'a mut dyn DrawContext,
    listener: &'a mut dyn DrawListener,
    cursor: Point,
    remaining: f64,
    pages: usize,
}

impl<'a> Paginator<'a> {
    fn new(
        format: PageFormat,
        ctx: &'a mut dyn DrawContext,
        listener: &'a mut dyn DrawListener,
    ) -> Result<Self> {
        format.validate()?;
        Ok(Self {
            cursor: format.content_origin(),
            remaining: format.content_height(),
            format,
            ctx,
            listener,
            pages: 0,
        })
    }

    fn run(mut self, entries: Vec<Entry>) -> Result<usize> {
        let mut queue: VecDeque<Entry> = entries.into();
        self.open_page()?;

        while let Some(entry) = queue.pop_front() {
            let (mut element, hint) = match entry {
                Entry::Element(element, hint) => (element, hint),
                Entry::PageBreak => {
                    debug!("Page break after page {}", self.pages);
                    self.new_page()?;
                    continue;
                }
            };
            element.respect_width(self.format.content_width());

            if let Some(position) = element.absolute_position() {
                trace!("Drawing {} at absolute position {:?}", element.describe(), position);
                element.draw(&mut *self.ctx, position, &mut *self.listener)?;
                continue;
            }

            let height = element.height()?;
            if height <= self.remaining + EPSILON {
                self.place(&element, hint, height)?;
                continue;
            }

            debug!(
                "Dividing {} ({:.2}pt) with {:.2}pt left on page {}",
                element.describe(),
                height,
                self.remaining,
                self.pages
            );
            let Divided { first, tail } =
                element.divide(self.remaining, self.format.content_height())?;
            let first_height = first.height()?;
            self.place(&first, hint, first_height)?;
            self.new_page()?;
            if let Some(tail) = tail {
                queue.push_front(Entry::Element(tail, hint));
            }
        }

        self.close_page()?;
        self.listener.after_render()?;
        debug!("Rendered {} pages", self.pages);
        Ok(self.pages)
    }

    fn place(&mut self, element: &Element, hint: LayoutHint, height: f64) -> Result<()> {
        let width = element.width()?;
        let x = self.format.margins.left
            + hint.alignment.offset(width, self.format.content_width());
        let upper_left = Point::new(x, self.cursor.y);

        trace!(
            "Placing {} at ({:.2}, {:.2}) on page {}",
            element.describe(),
            upper_left.x,
            upper_left.y,
            self.pages
        );
        element.draw(&mut *self.ctx, upper_left, &mut *self.listener)?;
        self.cursor.y -= height;
        self.remaining -= height;
        Ok(())
    }

    fn open_page(&mut self) -> Result<()> {
        self.ctx.begin_page(&self.format)?;
        self.pages += 1;
        self.cursor = self.format.content_origin();
        self.remaining = self.format.content_height();
        debug!("Opened page {}", self.pages);
        self.listener.before_page(&mut *self.ctx)
    }

    fn close_page(&mut self) -> Result<()> {
        self.listener.after_page(&mut *self.ctx)?;
        self.ctx.end_page()?;
        debug!("Closed page {} ({:.2}pt unused)", self.pages, self.remaining);
        Ok(())
    }

    fn new_page(&mut self) -> Result<()> {
        self.close_page()?;
        self.open_page()
    }
}
