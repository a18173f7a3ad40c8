use super::format::PageFormat;
use crate::error::{LayoutError, Result};
use crate::graphics::{GraphicsContext, Image};
use std::collections::HashMap;

/// Drawing target the layout renders into.
///
/// The paginator opens and closes pages; elements draw through
/// [`graphics`](DrawContext::graphics) and register the images they paint.
/// Implement this to render straight into another document model.
pub trait DrawContext {
    /// Starts a new page; drawing goes there until [`end_page`](DrawContext::end_page).
    fn begin_page(&mut self, format: &PageFormat) -> Result<()>;

    fn end_page(&mut self) -> Result<()>;

    /// Zero-based index of the open page, `None` between pages.
    fn page_index(&self) -> Option<usize>;

    /// Content stream of the open page.
    fn graphics(&mut self) -> Result<&mut GraphicsContext>;

    /// Makes `image` available to the open page and returns the resource
    /// name to paint it with.
    fn register_image(&mut self, image: &Image) -> Result<String>;
}

/// A rendered page: its format, content stream and image resources.
#[derive(Clone, Debug)]
pub struct Page {
    format: PageFormat,
    graphics_context: GraphicsContext,
    images: HashMap<String, Image>,
}

impl Page {
    pub fn new(format: PageFormat) -> Self {
        Self {
            format,
            graphics_context: GraphicsContext::new(),
            images: HashMap::new(),
        }
    }

    pub fn format(&self) -> &PageFormat {
        &self.format
    }

    pub fn width(&self) -> f64 {
        self.format.width
    }

    pub fn height(&self) -> f64 {
        self.format.height
    }

    pub fn graphics(&mut self) -> &mut GraphicsContext {
        &mut self.graphics_context
    }

    /// Content stream operators drawn on this page.
    pub fn operations(&self) -> &str {
        self.graphics_context.operations()
    }

    pub fn images(&self) -> &HashMap<String, Image> {
        &self.images
    }

    pub fn add_image(&mut self, name: impl Into<String>, image: Image) {
        self.images.insert(name.into(), image);
    }

    /// Content stream bytes, Flate-compressed when the `compression`
    /// feature is enabled.
    pub fn content(&self) -> Result<Vec<u8>> {
        let raw = self.graphics_context.operations().as_bytes();
        #[cfg(feature = "compression")]
        let content = crate::compression::compress(raw)?;
        #[cfg(not(feature = "compression"))]
        let content = raw.to_vec();
        Ok(content)
    }
}

/// In-memory [`DrawContext`] collecting rendered pages.
#[derive(Clone, Debug, Default)]
pub struct Canvas {
    pages: Vec<Page>,
    open: bool,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn into_pages(self) -> Vec<Page> {
        self.pages
    }

    fn open_page(&mut self) -> Result<&mut Page> {
        match self.pages.last_mut() {
            Some(page) if self.open => Ok(page),
            _ => Err(LayoutError::Draw("no page is open".to_string())),
        }
    }
}

impl DrawContext for Canvas {
    fn begin_page(&mut self, format: &PageFormat) -> Result<()> {
        if self.open {
            return Err(LayoutError::Draw(format!(
                "page {} is still open",
                self.pages.len() - 1
            )));
        }
        self.pages.push(Page::new(*format));
        self.open = true;
        Ok(())
    }

    fn end_page(&mut self) -> Result<()> {
        self.open_page()?;
        self.open = false;
        Ok(())
    }

    fn page_index(&self) -> Option<usize> {
        if self.open {
            self.pages.len().checked_sub(1)
        } else {
            None
        }
    }

    fn graphics(&mut self) -> Result<&mut GraphicsContext> {
        Ok(self.open_page()?.graphics())
    }

    fn register_image(&mut self, image: &Image) -> Result<String> {
        let name = image.resource_name();
        let page = self.open_page()?;
        if !page.images.contains_key(&name) {
            page.add_image(name.clone(), image.clone());
        }
        Ok(name)
    }
}
