use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Row {row} has {actual} cells but the table declares {expected} columns")]
    ColumnCountMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Cannot compute the height of row {row}, it has no cells")]
    EmptyRow { row: usize },

    #[error("Element {element} exceeds maximum page height, cannot be placed ({height:.2} > {page_height:.2})")]
    ElementTooLarge {
        element: String,
        height: f64,
        page_height: f64,
    },

    #[error("Invalid page format: {0}")]
    InvalidPageFormat(String),

    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("Draw error: {0}")]
    Draw(String),

    #[cfg(feature = "serde")]
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{context}: {source}")]
    Annotation {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl LayoutError {
    /// Wraps a failure raised while post-processing a drawn object.
    pub fn annotation(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        LayoutError::Annotation {
            context: "failed while processing annotations for drawn object".to_string(),
            source: source.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LayoutError>;
