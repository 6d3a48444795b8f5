//! Error types for the strict parsing and validation surfaces.
//!
//! The relaxed builder path never returns these: its setters
//! accept-or-ignore and its `build()` degrades to an empty string.

use thiserror::Error;

/// Error from strict string/number conversion of an option value.
///
/// Each variant carries the rejected input. The silent setters on the model
/// types perform the same checks and drop the value instead of erroring.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown marker size: {value:?}")]
    InvalidMarkerSize { value: String },

    #[error("unknown marker color: {value:?}")]
    InvalidMarkerColor { value: String },

    #[error("invalid scale: {value:?} (expected 1 or 2)")]
    InvalidScale { value: String },

    #[error("unknown image format: {value:?}")]
    InvalidImageFormat { value: String },

    #[error("unknown map type: {value:?}")]
    InvalidMapType { value: String },

    #[error("zoom level {value} outside range [0, 21]")]
    InvalidZoom { value: u8 },

    #[error("label {value:?} contains no ASCII alphanumeric character")]
    InvalidLabel { value: String },

    #[error("unsupported display language: {value:?}")]
    UnsupportedLanguage { value: String },

    #[error("image dimensions must be positive, got {width}x{height}")]
    InvalidImageSize { width: u32, height: u32 },
}

/// Error from strict whole-map validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("map needs at least one marker set or a complete center and zoom")]
    MissingAnchor,

    #[error("marker set {index} has no resolvable location and contributes nothing")]
    EmptyMarkerSet { index: usize },

    #[error("url length {len} exceeds the {max} character limit")]
    UrlTooLong { len: usize, max: usize },
}
