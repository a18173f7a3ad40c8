//! Layout elements and the division contract
//!
//! Every unit of a document is an [`Element`]: a closed set of kinds that can
//! be measured ([`Measurable`]), drawn ([`Drawable`]) and split across a page
//! boundary ([`Divisible`]). Division produces a [`Divided`] pair: the head
//! drawn on the current page and an optional tail that starts the next one.
//!
//! - [`VerticalSpacer`] is the base case: it splits at any height.
//! - [`TableSlice`] splits between rows.
//! - [`ImageElement`] is atomic and is deferred whole through the [`Cutter`].

mod cutter;
mod image_element;
mod spacer;

pub use cutter::Cutter;
pub use image_element::{Extent, ImageElement};
pub use spacer::VerticalSpacer;

use crate::error::Result;
use crate::geometry::Point;
use crate::render::{DrawContext, DrawListener};
use crate::table::{Table, TableSlice};

/// Heights closer than this are treated as equal when checking fit.
pub(crate) const EPSILON: f64 = 1e-6;

/// Anything that reports its size.
///
/// Measurement is pure: calling it repeatedly never changes the element.
pub trait Measurable {
    fn width(&self) -> Result<f64>;
    fn height(&self) -> Result<f64>;
}

/// Elements whose size adapts to a maximum width.
pub trait WidthRespecting {
    fn max_width(&self) -> Option<f64>;
    fn set_max_width(&mut self, max_width: Option<f64>);
}

pub trait Drawable: Measurable {
    /// Draws the element with its upper-left corner at `upper_left` and
    /// reports the occupied box to `listener` exactly once.
    fn draw(
        &self,
        ctx: &mut dyn DrawContext,
        upper_left: Point,
        listener: &mut dyn DrawListener,
    ) -> Result<()>;

    /// Position the element must be drawn at, outside the normal flow.
    fn absolute_position(&self) -> Option<Point> {
        None
    }
}

pub trait Divisible: Measurable + Sized {
    /// Splits the element so that the head fits into `remaining_height`.
    ///
    /// `next_page_height` is the full content height of a fresh page, used by
    /// atomic elements to decide whether deferring them can ever succeed.
    fn divide(self, remaining_height: f64, next_page_height: f64) -> Result<Divided>;
}

/// Result of dividing an element at a page boundary.
#[derive(Debug, Clone)]
pub struct Divided {
    /// Drawn on the current page
    pub first: Element,
    /// Continues on the next page, `None` when the element was consumed
    pub tail: Option<Element>,
}

impl Divided {
    pub fn new(first: impl Into<Element>, tail: Option<Element>) -> Self {
        Self {
            first: first.into(),
            tail,
        }
    }

    /// The element fits as a whole, nothing continues.
    pub fn whole(element: impl Into<Element>) -> Self {
        Self::new(element, None)
    }

    /// Combined height of head and tail.
    pub fn height(&self) -> Result<f64> {
        let tail = match &self.tail {
            Some(tail) => tail.height()?,
            None => 0.0,
        };
        Ok(self.first.height()? + tail)
    }
}

/// The element kinds a document is made of.
#[derive(Debug, Clone)]
pub enum Element {
    Spacer(VerticalSpacer),
    Image(ImageElement),
    Table(TableSlice),
}

impl Element {
    /// Short description used in placement errors and logs.
    pub fn describe(&self) -> String {
        match self {
            Element::Spacer(spacer) => format!("vertical spacer ({:.2}pt)", spacer.height_value()),
            Element::Image(image) => format!(
                "image ({}x{} px)",
                image.image().width(),
                image.image().height()
            ),
            Element::Table(slice) => format!("table rows {}..{}", slice.rows().start, slice.rows().end),
        }
    }

    /// Gives width-respecting elements a maximum width unless they have one.
    pub fn respect_width(&mut self, max_width: f64) {
        if let Element::Image(image) = self {
            if image.max_width().is_none() {
                image.set_max_width(Some(max_width));
            }
        }
    }
}

impl Measurable for Element {
    fn width(&self) -> Result<f64> {
        match self {
            Element::Spacer(spacer) => spacer.width(),
            Element::Image(image) => image.width(),
            Element::Table(slice) => slice.width(),
        }
    }

    fn height(&self) -> Result<f64> {
        match self {
            Element::Spacer(spacer) => spacer.height(),
            Element::Image(image) => image.height(),
            Element::Table(slice) => slice.height(),
        }
    }
}

impl Drawable for Element {
    fn draw(
        &self,
        ctx: &mut dyn DrawContext,
        upper_left: Point,
        listener: &mut dyn DrawListener,
    ) -> Result<()> {
        match self {
            Element::Spacer(spacer) => spacer.draw(ctx, upper_left, listener),
            Element::Image(image) => image.draw(ctx, upper_left, listener),
            Element::Table(slice) => slice.draw(ctx, upper_left, listener),
        }
    }

    fn absolute_position(&self) -> Option<Point> {
        match self {
            Element::Image(image) => image.absolute_position(),
            Element::Spacer(_) | Element::Table(_) => None,
        }
    }
}

impl Divisible for Element {
    fn divide(self, remaining_height: f64, next_page_height: f64) -> Result<Divided> {
        if self.height()? <= remaining_height + EPSILON {
            return Ok(Divided::whole(self));
        }
        match self {
            Element::Spacer(spacer) => spacer.divide(remaining_height, next_page_height),
            Element::Image(image) => image.divide(remaining_height, next_page_height),
            Element::Table(slice) => slice.divide(remaining_height, next_page_height),
        }
    }
}

impl From<VerticalSpacer> for Element {
    fn from(spacer: VerticalSpacer) -> Self {
        Element::Spacer(spacer)
    }
}

impl From<ImageElement> for Element {
    fn from(image: ImageElement) -> Self {
        Element::Image(image)
    }
}

impl From<TableSlice> for Element {
    fn from(slice: TableSlice) -> Self {
        Element::Table(slice)
    }
}

impl From<Table> for Element {
    fn from(table: Table) -> Self {
        Element::Table(TableSlice::new(table))
    }
}
