//! The root map aggregate and its rendering options.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::language;
use crate::model::{Location, MarkerSet};

/// Lowest zoom level (whole world).
pub const MIN_ZOOM: u8 = 0;

/// Highest zoom level (individual buildings on the roadmap type).
pub const MAX_ZOOM: u8 = 21;

/// Largest image dimension the API serves at scale 1.
///
/// Documented for callers; the builder does not enforce it, matching the
/// API's own lenient handling.
pub const SCALE_1_MAX_DIMENSION: u32 = 640;

// =============================================================================
// RENDERING OPTION ENUMS
// =============================================================================

/// Pixel density multiplier.
///
/// 1: standard resolution (desktop), 2: high resolution (mobile).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Scale {
    One = 1,
    Two = 2,
}

impl Scale {
    /// Creates a Scale from its numeric value.
    pub fn from_value(v: u8) -> Option<Scale> {
        match v {
            1 => Some(Scale::One),
            2 => Some(Scale::Two),
            _ => None,
        }
    }

    /// Returns the numeric value of this scale.
    pub fn value(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl FromStr for Scale {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u8>()
            .ok()
            .and_then(Scale::from_value)
            .ok_or_else(|| ParseError::InvalidScale {
                value: s.to_string(),
            })
    }
}

/// Image format of the returned map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Png,
    Png8,
    Png32,
    Gif,
    Jpg,
    JpgBaseline,
}

impl ImageFormat {
    /// Creates an ImageFormat from its wire name.
    pub fn from_name(name: &str) -> Option<ImageFormat> {
        match name {
            "png" => Some(ImageFormat::Png),
            "png8" => Some(ImageFormat::Png8),
            "png32" => Some(ImageFormat::Png32),
            "gif" => Some(ImageFormat::Gif),
            "jpg" => Some(ImageFormat::Jpg),
            "jpg-baseline" => Some(ImageFormat::JpgBaseline),
            _ => None,
        }
    }

    /// Returns the wire name of this format.
    pub fn as_str(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Png8 => "png8",
            ImageFormat::Png32 => "png32",
            ImageFormat::Gif => "gif",
            ImageFormat::Jpg => "jpg",
            ImageFormat::JpgBaseline => "jpg-baseline",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageFormat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ImageFormat::from_name(s).ok_or_else(|| ParseError::InvalidImageFormat {
            value: s.to_string(),
        })
    }
}

/// Type of map to construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapType {
    Roadmap,
    Satellite,
    Hybrid,
    Terrain,
}

impl MapType {
    /// Creates a MapType from its wire name.
    pub fn from_name(name: &str) -> Option<MapType> {
        match name {
            "roadmap" => Some(MapType::Roadmap),
            "satellite" => Some(MapType::Satellite),
            "hybrid" => Some(MapType::Hybrid),
            "terrain" => Some(MapType::Terrain),
            _ => None,
        }
    }

    /// Returns the wire name of this map type.
    pub fn as_str(self) -> &'static str {
        match self {
            MapType::Roadmap => "roadmap",
            MapType::Satellite => "satellite",
            MapType::Hybrid => "hybrid",
            MapType::Terrain => "terrain",
        }
    }
}

impl fmt::Display for MapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MapType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MapType::from_name(s).ok_or_else(|| ParseError::InvalidMapType {
            value: s.to_string(),
        })
    }
}

// =============================================================================
// IMAGE SIZE
// =============================================================================

/// Image dimensions in pixels, rendered as `{width}x{height}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageSize {
    width: u32,
    height: u32,
}

impl ImageSize {
    /// Creates a size from positive dimensions; None if either is zero.
    pub fn new(width: u32, height: u32) -> Option<ImageSize> {
        if width == 0 || height == 0 {
            return None;
        }
        Some(ImageSize { width, height })
    }

    /// Returns the width in pixels.
    pub fn width(self) -> u32 {
        self.width
    }

    /// Returns the height in pixels.
    pub fn height(self) -> u32 {
        self.height
    }
}

impl Default for ImageSize {
    fn default() -> Self {
        ImageSize {
            width: SCALE_1_MAX_DIMENSION,
            height: SCALE_1_MAX_DIMENSION,
        }
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

// =============================================================================
// STATIC MAP
// =============================================================================

/// The root aggregate: map options plus marker sets, producing the URL.
///
/// A map builds to a URL when it has at least one resolvable marker set or a
/// complete center+zoom pair; otherwise [`StaticMap::build`] returns an
/// empty string. Setters for constrained values accept-or-ignore, so a bad
/// value never fails a build — it is simply omitted.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticMap {
    center: Option<Location>,
    zoom: Option<u8>,
    size: ImageSize,
    visual_refresh: Option<bool>,
    scale: Option<Scale>,
    format: Option<ImageFormat>,
    map_type: Option<MapType>,
    language: Option<String>,
    region: Option<String>,
    markers: Vec<MarkerSet>,
    sensor: bool,
    endpoint: Cow<'static, str>,
}

impl Default for StaticMap {
    fn default() -> Self {
        StaticMap {
            center: None,
            zoom: None,
            size: ImageSize::default(),
            visual_refresh: None,
            scale: None,
            format: None,
            map_type: None,
            language: None,
            region: None,
            markers: Vec::new(),
            sensor: false,
            endpoint: Cow::Borrowed(crate::ENDPOINT),
        }
    }
}

impl StaticMap {
    /// Creates a map with default size (640x640), sensor off, and no content.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the map center.
    pub fn with_center(mut self, center: Location) -> Self {
        self.center = Some(center);
        self
    }

    /// Sets the zoom level, ignoring values above 21.
    pub fn with_zoom(mut self, level: u8) -> Self {
        if level <= MAX_ZOOM {
            self.zoom = Some(level);
        }
        self
    }

    /// Sets the image size, ignoring a pair containing zero.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        if let Some(size) = ImageSize::new(width, height) {
            self.size = size;
        }
        self
    }

    /// Sets the visual refresh flag (newer tile and marker rendering).
    pub fn with_visual_refresh(mut self, visual_refresh: bool) -> Self {
        self.visual_refresh = Some(visual_refresh);
        self
    }

    /// Sets the pixel density scale.
    pub fn with_scale(mut self, scale: Scale) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Sets the scale from its numeric value, ignoring anything but 1 or 2.
    pub fn with_scale_value(mut self, value: u8) -> Self {
        if let Some(scale) = Scale::from_value(value) {
            self.scale = Some(scale);
        }
        self
    }

    /// Sets the image format.
    pub fn with_format(mut self, format: ImageFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Sets the image format from its wire name, ignoring unknown names.
    pub fn with_format_named(mut self, name: &str) -> Self {
        if let Some(format) = ImageFormat::from_name(name) {
            self.format = Some(format);
        }
        self
    }

    /// Sets the map type.
    pub fn with_map_type(mut self, map_type: MapType) -> Self {
        self.map_type = Some(map_type);
        self
    }

    /// Sets the map type from its wire name, ignoring unknown names.
    pub fn with_map_type_named(mut self, name: &str) -> Self {
        if let Some(map_type) = MapType::from_name(name) {
            self.map_type = Some(map_type);
        }
        self
    }

    /// Sets the label language, ignoring unsupported codes.
    pub fn with_language(mut self, code: &str) -> Self {
        if language::is_supported(code) {
            self.language = Some(code.to_string());
        }
        self
    }

    /// Sets the region bias, a two-letter ccTLD value. Not validated.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Appends a marker set. Each set becomes its own `markers=` entry.
    pub fn with_marker(mut self, marker: MarkerSet) -> Self {
        self.markers.push(marker);
        self
    }

    /// Appends multiple marker sets.
    pub fn with_markers(mut self, markers: impl IntoIterator<Item = MarkerSet>) -> Self {
        self.markers.extend(markers);
        self
    }

    /// Sets the sensor flag (whether the request comes from a location sensor).
    pub fn with_sensor(mut self, sensor: bool) -> Self {
        self.sensor = sensor;
        self
    }

    /// Overrides the base endpoint the query string is appended to.
    pub fn with_endpoint(mut self, endpoint: impl Into<Cow<'static, str>>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Returns the center, if set.
    pub fn center(&self) -> Option<&Location> {
        self.center.as_ref()
    }

    /// Returns the zoom level, if set.
    pub fn zoom(&self) -> Option<u8> {
        self.zoom
    }

    /// Returns the image size.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Returns the visual refresh flag, if set.
    pub fn visual_refresh(&self) -> Option<bool> {
        self.visual_refresh
    }

    /// Returns the scale, if set.
    pub fn scale(&self) -> Option<Scale> {
        self.scale
    }

    /// Returns the image format, if set.
    pub fn format(&self) -> Option<ImageFormat> {
        self.format
    }

    /// Returns the map type, if set.
    pub fn map_type(&self) -> Option<MapType> {
        self.map_type
    }

    /// Returns the label language, if set.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Returns the region bias, if set.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Returns the marker sets in insertion order.
    pub fn markers(&self) -> &[MarkerSet] {
        &self.markers
    }

    /// Returns the sensor flag.
    pub fn sensor(&self) -> bool {
        self.sensor
    }

    /// Returns the base endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Builds the ordered query parameters for this map.
    ///
    /// None when the map has neither a resolvable marker set nor a complete
    /// center+zoom pair. The returned [`UrlParams`] is the diagnostic view
    /// of exactly what [`StaticMap::build`] will render.
    ///
    /// [`UrlParams`]: crate::url::UrlParams
    pub fn build_params(&self) -> Option<crate::url::UrlParams> {
        crate::url::build_params(self)
    }

    /// Builds the final URL, or an empty string when the map is incomplete.
    ///
    /// Empty output is the sole failure signal; nothing panics and no error
    /// is returned on this path.
    pub fn build(&self) -> String {
        crate::url::build_url(self)
    }
}

impl fmt::Display for StaticMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_round_trip() {
        assert_eq!(Scale::from_value(1), Some(Scale::One));
        assert_eq!(Scale::from_value(2), Some(Scale::Two));
        assert_eq!(Scale::from_value(3), None);
        assert_eq!(Scale::Two.value(), 2);
        assert_eq!("2".parse::<Scale>().unwrap(), Scale::Two);
        assert!("0".parse::<Scale>().is_err());
    }

    #[test]
    fn test_format_round_trip() {
        for name in ["png", "png8", "png32", "gif", "jpg", "jpg-baseline"] {
            assert_eq!(ImageFormat::from_name(name).unwrap().as_str(), name);
        }
        assert_eq!(ImageFormat::from_name("webp"), None);
    }

    #[test]
    fn test_map_type_round_trip() {
        for name in ["roadmap", "satellite", "hybrid", "terrain"] {
            assert_eq!(MapType::from_name(name).unwrap().as_str(), name);
        }
        assert_eq!(MapType::from_name("moon"), None);
    }

    #[test]
    fn test_image_size_default_and_display() {
        assert_eq!(ImageSize::default().to_string(), "640x640");
        assert_eq!(ImageSize::new(400, 300).unwrap().to_string(), "400x300");
        assert_eq!(ImageSize::new(0, 300), None);
    }

    #[test]
    fn test_zoom_accepts_or_ignores() {
        let map = StaticMap::new().with_zoom(12).with_zoom(22);
        assert_eq!(map.zoom(), Some(12));
        assert_eq!(StaticMap::new().with_zoom(0).zoom(), Some(0));
        assert_eq!(StaticMap::new().with_zoom(21).zoom(), Some(21));
    }

    #[test]
    fn test_size_ignores_zero_dimension() {
        let map = StaticMap::new().with_size(400, 300).with_size(0, 100);
        assert_eq!(map.size().to_string(), "400x300");
    }

    #[test]
    fn test_language_accepts_or_ignores() {
        let map = StaticMap::new().with_language("de").with_language("tlh");
        assert_eq!(map.language(), Some("de"));
        assert_eq!(StaticMap::new().with_language("xx").language(), None);
    }

    #[test]
    fn test_named_setters_accept_or_ignore() {
        let map = StaticMap::new()
            .with_format_named("png32")
            .with_format_named("webp")
            .with_map_type_named("hybrid")
            .with_map_type_named("moon")
            .with_scale_value(2)
            .with_scale_value(9);
        assert_eq!(map.format(), Some(ImageFormat::Png32));
        assert_eq!(map.map_type(), Some(MapType::Hybrid));
        assert_eq!(map.scale(), Some(Scale::Two));
    }

    #[test]
    fn test_region_stored_as_is() {
        assert_eq!(StaticMap::new().with_region("de").region(), Some("de"));
        // Two-letter ccTLD is a documented expectation, not a validation.
        assert_eq!(StaticMap::new().with_region("xyz").region(), Some("xyz"));
    }
}
