mod color;
mod image;

pub use color::Color;
pub use image::{ColorSpace as ImageColorSpace, EmbeddedImage, Image, ImageFormat};

/// Accumulates the content stream operators of a single page.
///
/// Paths are built in PDF user space. Fill and stroke colors are applied
/// lazily when a path is painted, so setting a color costs nothing until it
/// is used.
#[derive(Debug, Clone)]
pub struct GraphicsContext {
    operations: String,
    fill_color: Color,
    stroke_color: Color,
    line_width: f64,
}

impl Default for GraphicsContext {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphicsContext {
    pub fn new() -> Self {
        Self {
            operations: String::new(),
            fill_color: Color::black(),
            stroke_color: Color::black(),
            line_width: 1.0,
        }
    }

    fn push_op(&mut self, op: impl AsRef<str>) -> &mut Self {
        self.operations.push_str(op.as_ref());
        self.operations.push('\n');
        self
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.push_op(format!("{x:.2} {y:.2} m"))
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.push_op(format!("{x:.2} {y:.2} l"))
    }

    /// Appends a rectangle path given its lower-left corner.
    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> &mut Self {
        self.push_op(format!("{x:.2} {y:.2} {width:.2} {height:.2} re"))
    }

    pub fn stroke(&mut self) -> &mut Self {
        let color = self.stroke_color.operator(true);
        self.push_op(color).push_op("S")
    }

    pub fn fill(&mut self) -> &mut Self {
        let color = self.fill_color.operator(false);
        self.push_op(color).push_op("f")
    }

    pub fn set_stroke_color(&mut self, color: Color) -> &mut Self {
        self.stroke_color = color;
        self
    }

    pub fn set_fill_color(&mut self, color: Color) -> &mut Self {
        self.fill_color = color;
        self
    }

    pub fn set_line_width(&mut self, width: f64) -> &mut Self {
        self.line_width = width;
        self.push_op(format!("{width:.2} w"))
    }

    pub fn save_state(&mut self) -> &mut Self {
        self.push_op("q")
    }

    pub fn restore_state(&mut self) -> &mut Self {
        self.push_op("Q")
    }

    /// Paints an image XObject into the box whose lower-left corner is `(x, y)`.
    pub fn draw_image(
        &mut self,
        resource_name: &str,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> &mut Self {
        self.save_state()
            .push_op(format!("{width:.2} 0 0 {height:.2} {x:.2} {y:.2} cm"))
            .push_op(format!("/{resource_name} Do"))
            .restore_state()
    }

    /// Shows a single line of text with its baseline starting at `(x, y)`.
    ///
    /// Characters outside Latin-1 are replaced by `?`, standard fonts cannot
    /// show them anyway.
    pub fn show_text(&mut self, font_name: &str, size: f64, x: f64, y: f64, text: &str) -> &mut Self {
        let fill = self.fill_color.operator(false);
        self.push_op("BT")
            .push_op(fill)
            .push_op(format!("/{font_name} {size:.2} Tf"))
            .push_op(format!("{x:.2} {y:.2} Td"))
            .push_op(format!("({}) Tj", escape_text(text)))
            .push_op("ET")
    }

    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    pub fn stroke_color(&self) -> Color {
        self.stroke_color
    }

    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    /// Get the operations string
    pub fn operations(&self) -> &str {
        &self.operations
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '(' => escaped.push_str("\\("),
            ')' => escaped.push_str("\\)"),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            ' '..='~' => escaped.push(ch),
            c if (c as u32) <= 0xFF => escaped.push_str(&format!("\\{:03o}", c as u32)),
            _ => escaped.push('?'),
        }
    }
    escaped
}
