use thiserror::Error;

/// Errors that can occur while turning a user file into a [`crate::LoadedImage`]
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read image file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("File has no accessible data: {0}")]
    NoData(String),

    #[error("Not a supported image type: {0}")]
    Unsupported(String),
}

/// Errors that can occur while exporting the adjusted image
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to decode source image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("Failed to encode PNG: {0}")]
    Encode(#[source] image::ImageError),

    #[error("Failed to write exported image: {0}")]
    Write(#[from] std::io::Error),
}

pub type LoadResult<T> = Result<T, LoadError>;
pub type ExportResult<T> = Result<T, ExportError>;
