use std::path::PathBuf;

/// Convenience result type used across banner-maker.
pub type BannerResult<T> = Result<T, BannerError>;

/// Top-level error taxonomy used by loader, renderer and pipeline APIs.
#[derive(thiserror::Error, Debug)]
pub enum BannerError {
    /// Invalid user-provided or configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// A font or base image referenced by the configuration does not exist.
    #[error("file not found: {}", .0.display())]
    MissingFontOrImage(PathBuf),

    /// A text item declares a border width but no border color.
    #[error("invalid border config: border width > 0 requires a border color")]
    InvalidBorderConfig,

    /// A text item could not be drawn.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while decoding or encoding raster images.
    #[error("image error: {0}")]
    Image(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BannerError {
    /// Build a [`BannerError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BannerError::MissingFontOrImage`] value.
    pub fn missing(path: impl Into<PathBuf>) -> Self {
        Self::MissingFontOrImage(path.into())
    }

    /// Build a [`BannerError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`BannerError::Image`] value.
    pub fn image(msg: impl Into<String>) -> Self {
        Self::Image(msg.into())
    }

    /// Build a [`BannerError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
