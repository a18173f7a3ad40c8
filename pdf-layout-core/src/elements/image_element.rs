use super::{Cutter, Divided, Divisible, Drawable, Measurable, WidthRespecting};
use crate::error::{LayoutError, Result};
use crate::geometry::Point;
use crate::graphics::Image;
use crate::render::{DrawContext, DrawListener, DrawnObject};

/// How one dimension of a placed image is determined.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Extent {
    /// The pixel size, one point per pixel
    #[default]
    Natural,
    /// Exactly this many points; must be finite and not negative
    Fixed(f64),
    /// The pixel size, scaled down proportionally when the image is wider
    /// than the maximum width
    ScaleToRespectWidth,
}

/// An image placed in the flow, or at an absolute position.
///
/// Images are never split; when one does not fit on the current page it
/// moves to the next one as a whole.
#[derive(Debug, Clone)]
pub struct ImageElement {
    image: Image,
    width: Extent,
    height: Extent,
    max_width: Option<f64>,
    absolute_position: Option<Point>,
}

impl ImageElement {
    pub fn new(image: Image) -> Self {
        Self {
            image,
            width: Extent::default(),
            height: Extent::default(),
            max_width: None,
            absolute_position: None,
        }
    }

    pub fn with_width(mut self, width: Extent) -> Self {
        self.width = width;
        self
    }

    pub fn with_height(mut self, height: Extent) -> Self {
        self.height = height;
        self
    }

    /// Fixes both dimensions.
    pub fn with_size(self, width: f64, height: f64) -> Self {
        self.with_width(Extent::Fixed(width))
            .with_height(Extent::Fixed(height))
    }

    /// Scales both dimensions down proportionally when the image is wider
    /// than its maximum width.
    pub fn scale_to_respect_width(self) -> Self {
        self.with_width(Extent::ScaleToRespectWidth)
            .with_height(Extent::ScaleToRespectWidth)
    }

    /// Draws the image with its upper-left corner at `position` instead of
    /// in the flow.
    pub fn with_absolute_position(mut self, position: Point) -> Self {
        self.absolute_position = Some(position);
        self
    }

    pub fn image(&self) -> &Image {
        &self.image
    }

    fn scale(&self) -> f64 {
        let natural = self.image.width() as f64;
        match self.max_width {
            Some(max) if max > 0.0 && natural > max => max / natural,
            _ => 1.0,
        }
    }

    fn resolve(&self, extent: Extent, pixels: u32, dimension: &str) -> Result<f64> {
        match extent {
            Extent::Natural => Ok(pixels as f64),
            Extent::Fixed(points) if points.is_finite() && points >= 0.0 => Ok(points),
            Extent::Fixed(points) => Err(LayoutError::InvalidImage(format!(
                "image {dimension} must be finite and not negative, got {points}"
            ))),
            Extent::ScaleToRespectWidth => Ok(pixels as f64 * self.scale()),
        }
    }
}

impl Measurable for ImageElement {
    fn width(&self) -> Result<f64> {
        self.resolve(self.width, self.image.width(), "width")
    }

    fn height(&self) -> Result<f64> {
        self.resolve(self.height, self.image.height(), "height")
    }
}

impl WidthRespecting for ImageElement {
    fn max_width(&self) -> Option<f64> {
        self.max_width
    }

    fn set_max_width(&mut self, max_width: Option<f64>) {
        self.max_width = max_width;
    }
}

impl Drawable for ImageElement {
    fn draw(
        &self,
        ctx: &mut dyn DrawContext,
        upper_left: Point,
        listener: &mut dyn DrawListener,
    ) -> Result<()> {
        let width = self.width()?;
        let height = self.height()?;
        let name = ctx.register_image(&self.image)?;
        ctx.graphics()?
            .draw_image(&name, upper_left.x, upper_left.y - height, width, height);
        listener.drawn(ctx, DrawnObject::Image(self), upper_left, width, height)
    }

    fn absolute_position(&self) -> Option<Point> {
        self.absolute_position
    }
}

impl Divisible for ImageElement {
    fn divide(self, remaining_height: f64, next_page_height: f64) -> Result<Divided> {
        Cutter::new(self).divide(remaining_height, next_page_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LayoutError;

    fn image(width: u32, height: u32) -> Image {
        Image::from_gray_data(width, height, vec![0x7f; (width * height) as usize]).unwrap()
    }

    #[test]
    fn test_natural_size() {
        let element = ImageElement::new(image(40, 20));
        assert_eq!(element.width().unwrap(), 40.0);
        assert_eq!(element.height().unwrap(), 20.0);
    }

    #[test]
    fn test_default_size_ignores_max_width() {
        let mut element = ImageElement::new(image(200, 100));
        element.set_max_width(Some(50.0));
        assert_eq!(element.width().unwrap(), 200.0);
        assert_eq!(element.height().unwrap(), 100.0);
    }

    #[test]
    fn test_scales_down_to_max_width() {
        let mut element = ImageElement::new(image(200, 100)).scale_to_respect_width();
        element.set_max_width(Some(50.0));
        assert_eq!(element.width().unwrap(), 50.0);
        assert_eq!(element.height().unwrap(), 25.0);

        // narrower images keep their size
        element.set_max_width(Some(500.0));
        assert_eq!(element.width().unwrap(), 200.0);
    }

    #[test]
    fn test_fixed_size_ignores_max_width() {
        let mut element = ImageElement::new(image(200, 100)).with_size(80.0, 300.0);
        element.set_max_width(Some(50.0));
        assert_eq!(element.width().unwrap(), 80.0);
        assert_eq!(element.height().unwrap(), 300.0);
    }

    #[test]
    fn test_image_deferred_to_next_page() {
        let element = ImageElement::new(image(10, 10)).with_size(100.0, 300.0);
        let divided = element.divide(50.0, 400.0).unwrap();
        assert_eq!(divided.first.height().unwrap(), 50.0);
        let tail = divided.tail.unwrap();
        assert_eq!(tail.height().unwrap(), 300.0);
        assert!(matches!(tail, crate::elements::Element::Image(_)));
    }

    #[test]
    fn test_image_taller_than_page_fails() {
        let element = ImageElement::new(image(10, 10)).with_size(100.0, 500.0);
        let err = element.divide(50.0, 400.0).unwrap_err();
        assert!(matches!(err, LayoutError::ElementTooLarge { .. }));
        assert!(err.to_string().contains("500.00 > 400.00"));
    }

    #[test]
    fn test_non_finite_or_negative_size_rejected() {
        let element = ImageElement::new(image(10, 10)).with_size(100.0, f64::NAN);
        assert!(matches!(element.height(), Err(LayoutError::InvalidImage(_))));
        assert!(matches!(
            element.divide(50.0, 400.0),
            Err(LayoutError::InvalidImage(_))
        ));

        let element = ImageElement::new(image(10, 10)).with_size(f64::INFINITY, -20.0);
        assert!(matches!(element.width(), Err(LayoutError::InvalidImage(_))));
        assert!(matches!(element.height(), Err(LayoutError::InvalidImage(_))));
    }
}
