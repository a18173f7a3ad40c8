//! Page flow: formats, drawing targets, listeners and the paginator

mod context;
mod format;
mod listener;
mod paginator;

pub use context::{Canvas, DrawContext, Page};
pub use format::{LayoutHint, Margins, PageFormat};
pub use listener::{
    AnnotationDrawListener, AnnotationProcessor, BoxError, DrawListener, DrawnObject, Placement,
    PlacementKind, PlacementRecorder,
};
pub use paginator::Document;
