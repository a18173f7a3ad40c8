use crate::error::{LayoutError, Result};
use crate::geometry::Point;
use crate::text::TextAlign;

/// Page margins in points (1/72 inch).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Margins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(72.0)
    }
}

impl Margins {
    pub fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    pub fn uniform(margin: f64) -> Self {
        Self::new(margin, margin, margin, margin)
    }

    pub fn none() -> Self {
        Self::uniform(0.0)
    }
}

/// Size and margins shared by every page of a document.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageFormat {
    pub width: f64,
    pub height: f64,
    pub margins: Margins,
}

impl Default for PageFormat {
    fn default() -> Self {
        Self::a4()
    }
}

impl PageFormat {
    /// A page of `width` x `height` points with one inch margins.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margins: Margins::default(),
        }
    }

    /// A4 (595 x 842 points)
    pub fn a4() -> Self {
        Self::new(595.0, 842.0)
    }

    /// US Letter (612 x 792 points)
    pub fn letter() -> Self {
        Self::new(612.0, 792.0)
    }

    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    pub fn content_width(&self) -> f64 {
        self.width - self.margins.left - self.margins.right
    }

    /// Height available to flowing elements on a fresh page.
    pub fn content_height(&self) -> f64 {
        self.height - self.margins.top - self.margins.bottom
    }

    /// Upper-left corner of the content area, where the flow starts.
    pub fn content_origin(&self) -> Point {
        Point::new(self.margins.left, self.height - self.margins.top)
    }

    pub fn validate(&self) -> Result<()> {
        let finite = [
            self.width,
            self.height,
            self.margins.left,
            self.margins.right,
            self.margins.top,
            self.margins.bottom,
        ]
        .iter()
        .all(|value| value.is_finite());
        if !finite {
            return Err(LayoutError::InvalidPageFormat(
                "dimensions must be finite".to_string(),
            ));
        }
        if self.content_width() <= 0.0 || self.content_height() <= 0.0 {
            return Err(LayoutError::InvalidPageFormat(format!(
                "content area {:.2}x{:.2} leaves no room for elements",
                self.content_width(),
                self.content_height()
            )));
        }
        Ok(())
    }
}

/// Placement instructions that travel with an element through the flow.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutHint {
    /// Horizontal alignment within the content width
    pub alignment: TextAlign,
}

impl LayoutHint {
    pub fn new(alignment: TextAlign) -> Self {
        Self { alignment }
    }

    pub fn centered() -> Self {
        Self::new(TextAlign::Center)
    }

    pub fn right() -> Self {
        Self::new(TextAlign::Right)
    }
}
