use super::{Divided, Divisible, Drawable, Measurable};
use crate::error::Result;
use crate::geometry::Point;
use crate::render::{DrawContext, DrawListener, DrawnObject};

/// Blank vertical space. It draws nothing, consumes its height in the flow
/// and can be split at any height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalSpacer {
    height: f64,
}

impl VerticalSpacer {
    /// Negative heights are clamped to zero.
    pub fn new(height: f64) -> Self {
        Self {
            height: height.max(0.0),
        }
    }

    pub(crate) fn height_value(&self) -> f64 {
        self.height
    }
}

impl Measurable for VerticalSpacer {
    fn width(&self) -> Result<f64> {
        Ok(0.0)
    }

    fn height(&self) -> Result<f64> {
        Ok(self.height)
    }
}

impl Drawable for VerticalSpacer {
    fn draw(
        &self,
        ctx: &mut dyn DrawContext,
        upper_left: Point,
        listener: &mut dyn DrawListener,
    ) -> Result<()> {
        listener.drawn(ctx, DrawnObject::Spacer(self), upper_left, 0.0, self.height)
    }
}

impl Divisible for VerticalSpacer {
    fn divide(self, remaining_height: f64, _next_page_height: f64) -> Result<Divided> {
        if self.height <= remaining_height {
            return Ok(Divided::whole(self));
        }
        let head = remaining_height.max(0.0);
        Ok(Divided::new(
            VerticalSpacer::new(head),
            Some(VerticalSpacer::new(self.height - head).into()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacer_splits_at_remaining_height() {
        let divided = VerticalSpacer::new(100.0).divide(40.0, 200.0).unwrap();
        assert_eq!(divided.first.height().unwrap(), 40.0);
        assert_eq!(divided.tail.unwrap().height().unwrap(), 60.0);
    }

    #[test]
    fn test_spacer_that_fits_is_whole() {
        let divided = VerticalSpacer::new(30.0).divide(40.0, 60.0).unwrap();
        assert_eq!(divided.first.height().unwrap(), 30.0);
        assert!(divided.tail.is_none());
    }

    #[test]
    fn test_spacer_with_no_room_moves_entirely() {
        let divided = VerticalSpacer::new(25.0).divide(0.0, 60.0).unwrap();
        assert_eq!(divided.first.height().unwrap(), 0.0);
        assert_eq!(divided.tail.unwrap().height().unwrap(), 25.0);
    }

    #[test]
    fn test_negative_height_clamped() {
        assert_eq!(VerticalSpacer::new(-5.0).height().unwrap(), 0.0);
        assert_eq!(VerticalSpacer::new(5.0).width().unwrap(), 0.0);
    }
}
