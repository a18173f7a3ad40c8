//! Raster images placed by [`ImageElement`](crate::elements::ImageElement)
//!
//! Supported sources:
//! - JPEG data, embedded as-is with the DCT filter
//! - raw 8-bit RGB or grayscale buffers, Flate-compressed on embedding when
//!   the `compression` feature is enabled
//! - any `image::DynamicImage` with the `external-images` feature

use crate::error::{LayoutError, Result};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

/// A raster image owned by the element that draws it.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    data: Vec<u8>,
    format: ImageFormat,
    width: u32,
    height: u32,
    color_space: ColorSpace,
    bits_per_component: u8,
}

/// Encoding of the stored pixel data
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ImageFormat {
    /// JPEG stream, passed through to the document untouched
    Jpeg,
    /// Uncompressed samples, row-major, no padding
    Raw,
}

/// Color spaces for images
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorSpace {
    DeviceGray,
    DeviceRGB,
    DeviceCMYK,
}

impl ColorSpace {
    pub fn pdf_name(&self) -> &'static str {
        match self {
            ColorSpace::DeviceGray => "DeviceGray",
            ColorSpace::DeviceRGB => "DeviceRGB",
            ColorSpace::DeviceCMYK => "DeviceCMYK",
        }
    }

    fn components(&self) -> usize {
        match self {
            ColorSpace::DeviceGray => 1,
            ColorSpace::DeviceRGB => 3,
            ColorSpace::DeviceCMYK => 4,
        }
    }
}

/// Image data ready to be written as an XObject stream by a document writer.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddedImage {
    pub width: u32,
    pub height: u32,
    pub color_space: ColorSpace,
    pub bits_per_component: u8,
    /// Stream filter name, `None` for unfiltered samples
    pub filter: Option<&'static str>,
    pub data: Vec<u8>,
}

impl Image {
    /// Load a JPEG image from a file
    pub fn from_jpeg_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_jpeg_data(fs::read(path)?)
    }

    /// Create an image from JPEG data
    pub fn from_jpeg_data(data: Vec<u8>) -> Result<Self> {
        let (width, height, color_space, bits_per_component) = parse_jpeg_header(&data)?;

        Ok(Image {
            data,
            format: ImageFormat::Jpeg,
            width,
            height,
            color_space,
            bits_per_component,
        })
    }

    /// Create an image from raw 8-bit RGB samples.
    pub fn from_rgb_data(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        Self::from_raw(width, height, ColorSpace::DeviceRGB, data)
    }

    /// Create an image from raw 8-bit grayscale samples.
    pub fn from_gray_data(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        Self::from_raw(width, height, ColorSpace::DeviceGray, data)
    }

    fn from_raw(width: u32, height: u32, color_space: ColorSpace, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(LayoutError::InvalidImage(format!(
                "Image dimensions must be positive, got {width}x{height}"
            )));
        }
        let expected = width as usize * height as usize * color_space.components();
        if data.len() != expected {
            return Err(LayoutError::InvalidImage(format!(
                "Expected {expected} bytes of {} samples, got {}",
                color_space.pdf_name(),
                data.len()
            )));
        }

        Ok(Image {
            data,
            format: ImageFormat::Raw,
            width,
            height,
            color_space,
            bits_per_component: 8,
        })
    }

    /// Convert a decoded image into raw RGB samples.
    #[cfg(feature = "external-images")]
    pub fn from_dynamic_image(image: &image::DynamicImage) -> Result<Self> {
        let rgb = image.to_rgb8();
        let (width, height) = rgb.dimensions();
        Self::from_rgb_data(width, height, rgb.into_raw())
    }

    /// Decode any PNG or JPEG file through the `image` crate.
    #[cfg(feature = "external-images")]
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let decoded =
            image::open(path).map_err(|e| LayoutError::InvalidImage(e.to_string()))?;
        Self::from_dynamic_image(&decoded)
    }

    /// Get image width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get image height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn color_space(&self) -> ColorSpace {
        self.color_space
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Stable resource name derived from the image content, so the same
    /// image drawn twice on a page is registered once.
    pub fn resource_name(&self) -> String {
        let digest = Sha256::digest(&self.data);
        let hex: String = digest[..6].iter().map(|b| format!("{b:02x}")).collect();
        format!("Im{hex}")
    }

    /// Encode the image for embedding.
    pub fn embeddable(&self) -> Result<EmbeddedImage> {
        let (filter, data) = match self.format {
            ImageFormat::Jpeg => (Some("DCTDecode"), self.data.clone()),
            #[cfg(feature = "compression")]
            ImageFormat::Raw => (Some("FlateDecode"), crate::compression::compress(&self.data)?),
            #[cfg(not(feature = "compression"))]
            ImageFormat::Raw => (None, self.data.clone()),
        };

        Ok(EmbeddedImage {
            width: self.width,
            height: self.height,
            color_space: self.color_space,
            bits_per_component: self.bits_per_component,
            filter,
            data,
        })
    }
}

/// Reads dimensions and component count from the first SOF segment.
fn parse_jpeg_header(data: &[u8]) -> Result<(u32, u32, ColorSpace, u8)> {
    if data.len() < 2 || data[0] != 0xFF || data[1] != 0xD8 {
        return Err(LayoutError::InvalidImage("Not a valid JPEG file".to_string()));
    }

    let truncated = || LayoutError::InvalidImage("Truncated JPEG file".to_string());
    let mut pos = 2;

    while pos + 1 < data.len() {
        if data[pos] != 0xFF {
            return Err(LayoutError::InvalidImage("Invalid JPEG marker".to_string()));
        }
        let marker = data[pos + 1];
        pos += 2;

        match marker {
            // fill byte
            0xFF => pos -= 1,
            0xD8 | 0xD0..=0xD7 => {}
            0xD9 => break,
            // SOF0..SOF15 except DHT, JPG and DAC
            0xC0..=0xCF if !matches!(marker, 0xC4 | 0xC8 | 0xCC) => {
                // length (2) + precision (1) + height (2) + width (2) + components (1)
                let segment = data.get(pos..pos + 8).ok_or_else(truncated)?;
                let precision = segment[2];
                let height = u16::from_be_bytes([segment[3], segment[4]]) as u32;
                let width = u16::from_be_bytes([segment[5], segment[6]]) as u32;
                let color_space = match segment[7] {
                    1 => ColorSpace::DeviceGray,
                    3 => ColorSpace::DeviceRGB,
                    4 => ColorSpace::DeviceCMYK,
                    n => {
                        return Err(LayoutError::InvalidImage(format!(
                            "Unsupported number of components: {n}"
                        )))
                    }
                };
                if width == 0 || height == 0 {
                    break;
                }
                return Ok((width, height, color_space, precision));
            }
            _ => {
                let length = data.get(pos..pos + 2).ok_or_else(truncated)?;
                pos += u16::from_be_bytes([length[0], length[1]]) as usize;
            }
        }
    }

    Err(LayoutError::InvalidImage(
        "Could not find image dimensions".to_string(),
    ))
}
