//! Opt-in strict validation.
//!
//! The builder's own contract is best-effort: setters accept-or-ignore and
//! `build()` degrades to an empty string. This module provides the strict
//! twins for callers who want an error instead of a silent omission. Nothing
//! here is called by the relaxed path.

use crate::error::{ParseError, ValidationError};
use crate::model::{ImageSize, StaticMap, MAX_ZOOM};
use crate::{language, MAX_URL_LENGTH};

/// Strict twin of [`StaticMap::with_zoom`]: errors on levels above 21.
///
/// [`StaticMap::with_zoom`]: crate::StaticMap::with_zoom
pub fn parse_zoom(level: u8) -> Result<u8, ParseError> {
    if level > MAX_ZOOM {
        return Err(ParseError::InvalidZoom { value: level });
    }
    Ok(level)
}

/// Strict twin of [`MarkerStyle::with_label`]: errors when the input has no
/// ASCII alphanumeric character, otherwise returns the stored form (the
/// whole input, uppercased).
///
/// [`MarkerStyle::with_label`]: crate::MarkerStyle::with_label
pub fn parse_label(input: &str) -> Result<String, ParseError> {
    if !input.bytes().any(|b| b.is_ascii_alphanumeric()) {
        return Err(ParseError::InvalidLabel {
            value: input.to_string(),
        });
    }
    Ok(input.to_uppercase())
}

/// Strict twin of [`StaticMap::with_language`]: errors on unsupported codes.
///
/// [`StaticMap::with_language`]: crate::StaticMap::with_language
pub fn parse_language(code: &str) -> Result<String, ParseError> {
    if !language::is_supported(code) {
        return Err(ParseError::UnsupportedLanguage {
            value: code.to_string(),
        });
    }
    Ok(code.to_string())
}

/// Strict twin of [`StaticMap::with_size`]: errors on a zero dimension.
///
/// [`StaticMap::with_size`]: crate::StaticMap::with_size
pub fn parse_size(width: u32, height: u32) -> Result<ImageSize, ParseError> {
    ImageSize::new(width, height).ok_or(ParseError::InvalidImageSize { width, height })
}

/// Validates that a map will build to a non-empty URL.
///
/// Reports [`ValidationError::MissingAnchor`] when the map has neither a
/// resolvable marker set nor a complete center+zoom pair, then
/// [`ValidationError::EmptyMarkerSet`] for the first marker set that would
/// serialize empty and be dropped. A map passing this check always builds.
pub fn validate_map(map: &StaticMap) -> Result<(), ValidationError> {
    let has_markers = map.markers().iter().any(|set| !set.fragment().is_empty());
    let has_anchor = map
        .center()
        .is_some_and(|center| !center.fragment().is_empty())
        && map.zoom().is_some();
    if !has_markers && !has_anchor {
        return Err(ValidationError::MissingAnchor);
    }

    for (index, set) in map.markers().iter().enumerate() {
        if set.fragment().is_empty() {
            return Err(ValidationError::EmptyMarkerSet { index });
        }
    }

    Ok(())
}

/// Checks a finished URL against the API's practical length limit.
pub fn check_url_length(url: &str) -> Result<(), ValidationError> {
    if url.len() > MAX_URL_LENGTH {
        return Err(ValidationError::UrlTooLong {
            len: url.len(),
            max: MAX_URL_LENGTH,
        });
    }
    Ok(())
}
