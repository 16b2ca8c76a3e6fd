//! Error types for Prism Identity

use thiserror::Error;

/// Main error type for Prism Identity operations
#[derive(Error, Debug)]
pub enum PrismError {
    /// The content dataset could not be loaded
    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    /// Exporting the quote collection failed
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using PrismError
pub type PrismResult<T> = Result<T, PrismError>;

/// Errors raised while constructing the content model.
///
/// Payload shapes are enforced by deserialization, so a block whose payload
/// does not match its `type` surfaces here as [`ContentError::Parse`].
#[derive(Error, Debug)]
pub enum ContentError {
    /// Dataset is not valid JSON or does not match the block shapes
    #[error("Malformed dataset: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two categories share an id
    #[error("Duplicate category id: {0}")]
    DuplicateCategory(String),

    /// Two sections share an id (section ids are unique across the dataset)
    #[error("Duplicate section id: {0}")]
    DuplicateSection(String),

    /// A category or section has an empty id
    #[error("Empty id in {0}")]
    EmptyId(String),
}

/// Errors raised while rasterizing or saving the quote collection.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Scaled surface exceeds what a canvas can hold
    #[error("Surface too large to rasterize: {width}x{height}")]
    SurfaceTooLarge { width: u32, height: u32 },

    /// The generated scene could not be parsed
    #[error("Scene error: {0}")]
    Scene(String),

    /// Pixel buffer allocation failed
    #[error("Failed to allocate canvas")]
    Canvas,

    /// PNG encoding failed
    #[error("Encode error: {0}")]
    Encode(#[from] image::ImageError),

    /// Writing the download failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The background rasterization task did not complete
    #[error("Export interrupted: {0}")]
    Interrupted(String),
}

impl ExportError {
    /// Message shown to the user for any export failure.
    ///
    /// The cause is logged, never shown.
    pub fn user_message(&self) -> &'static str {
        "保存图片失败，可能图片过长，请尝试分段保存或稍后重试。"
    }
}
