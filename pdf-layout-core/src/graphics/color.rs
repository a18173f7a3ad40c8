/// A device color used for fills, strokes and text.
///
/// Colors are opaque values to the layout engine: it only stores them, compares
/// them and falls back along the cell → row → table chain when one is unset.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    /// RGB color (red, green, blue) with values from 0.0 to 1.0
    Rgb(f64, f64, f64),
    /// Grayscale color with value from 0.0 (black) to 1.0 (white)
    Gray(f64),
    /// CMYK color (cyan, magenta, yellow, key/black) with values from 0.0 to 1.0
    Cmyk(f64, f64, f64, f64),
}

impl Color {
    /// Creates an RGB color with values clamped to 0.0-1.0.
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Color::Rgb(r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0))
    }

    /// Creates an RGB color from 8-bit channels.
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }

    /// Creates an RGB color from a packed `0xAARRGGBB` integer.
    ///
    /// The alpha byte is ignored; device colors carry no transparency.
    pub fn from_argb(packed: u32) -> Self {
        let r = ((packed >> 16) & 0xFF) as u8;
        let g = ((packed >> 8) & 0xFF) as u8;
        let b = (packed & 0xFF) as u8;
        Self::rgb8(r, g, b)
    }

    /// Creates a grayscale color with value clamped to 0.0-1.0.
    pub fn gray(value: f64) -> Self {
        Color::Gray(value.clamp(0.0, 1.0))
    }

    /// Creates a CMYK color with values clamped to 0.0-1.0.
    pub fn cmyk(c: f64, m: f64, y: f64, k: f64) -> Self {
        Color::Cmyk(
            c.clamp(0.0, 1.0),
            m.clamp(0.0, 1.0),
            y.clamp(0.0, 1.0),
            k.clamp(0.0, 1.0),
        )
    }

    pub fn black() -> Self {
        Color::Gray(0.0)
    }

    pub fn white() -> Self {
        Color::Gray(1.0)
    }

    pub fn red() -> Self {
        Color::Rgb(1.0, 0.0, 0.0)
    }

    pub fn green() -> Self {
        Color::Rgb(0.0, 1.0, 0.0)
    }

    pub fn blue() -> Self {
        Color::Rgb(0.0, 0.0, 1.0)
    }

    /// Content stream operator for this color, `stroking` selects the
    /// uppercase (stroke) variant.
    pub(crate) fn operator(&self, stroking: bool) -> String {
        let (components, op) = match *self {
            Color::Rgb(r, g, b) => (format!("{r:.3} {g:.3} {b:.3}"), "rg"),
            Color::Gray(g) => (format!("{g:.3}"), "g"),
            Color::Cmyk(c, m, y, k) => (format!("{c:.3} {m:.3} {y:.3} {k:.3}"), "k"),
        };
        if stroking {
            format!("{components} {}", op.to_uppercase())
        } else {
            format!("{components} {op}")
        }
    }
}
