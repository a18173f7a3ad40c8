use super::{Divided, Element, Measurable, VerticalSpacer, EPSILON};
use crate::error::{LayoutError, Result};

/// Division fallback for elements that cannot be split.
///
/// The element is deferred whole: the current page receives a spacer filling
/// the remaining height and the element becomes the tail. An element taller
/// than a fresh page could never be placed, so that is an error instead of an
/// endless run of empty pages.
#[derive(Debug, Clone)]
pub struct Cutter {
    element: Element,
}

impl Cutter {
    pub fn new(element: impl Into<Element>) -> Self {
        Self {
            element: element.into(),
        }
    }

    pub fn divide(self, remaining_height: f64, next_page_height: f64) -> Result<Divided> {
        let height = self.element.height()?;
        // NaN never fits
        let fits_on_page = height <= next_page_height + EPSILON;
        if !fits_on_page {
            return Err(LayoutError::ElementTooLarge {
                element: self.element.describe(),
                height,
                page_height: next_page_height,
            });
        }

        tracing::warn!(
            "Deferring {} ({:.2}pt) to next page, {:.2}pt left unused",
            self.element.describe(),
            height,
            remaining_height.max(0.0)
        );
        Ok(Divided::new(
            VerticalSpacer::new(remaining_height),
            Some(self.element),
        ))
    }
}
