//! Marker groups and their styling.
//!
//! A [`MarkerSet`] places one or more locations on the map under a shared
//! look: either a named [`MarkerStyle`] (size/color/label) or a
//! [`CustomIcon`] (icon URL + shadow flag). A non-empty custom icon
//! suppresses the named style entirely.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::model::Location;

// =============================================================================
// STYLE ENUMS
// =============================================================================

/// Marker pin sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerSize {
    Tiny,
    Small,
    Mid,
    Normal,
}

impl MarkerSize {
    /// Creates a MarkerSize from its wire name.
    pub fn from_name(name: &str) -> Option<MarkerSize> {
        match name {
            "tiny" => Some(MarkerSize::Tiny),
            "small" => Some(MarkerSize::Small),
            "mid" => Some(MarkerSize::Mid),
            "normal" => Some(MarkerSize::Normal),
            _ => None,
        }
    }

    /// Returns the wire name of this size.
    pub fn as_str(self) -> &'static str {
        match self {
            MarkerSize::Tiny => "tiny",
            MarkerSize::Small => "small",
            MarkerSize::Mid => "mid",
            MarkerSize::Normal => "normal",
        }
    }
}

impl fmt::Display for MarkerSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MarkerSize {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MarkerSize::from_name(s).ok_or_else(|| ParseError::InvalidMarkerSize {
            value: s.to_string(),
        })
    }
}

/// Named marker pin colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerColor {
    Black,
    Brown,
    Green,
    Purple,
    Yellow,
    Blue,
    Gray,
    Orange,
    Red,
    White,
}

impl MarkerColor {
    /// Creates a MarkerColor from its wire name.
    pub fn from_name(name: &str) -> Option<MarkerColor> {
        match name {
            "black" => Some(MarkerColor::Black),
            "brown" => Some(MarkerColor::Brown),
            "green" => Some(MarkerColor::Green),
            "purple" => Some(MarkerColor::Purple),
            "yellow" => Some(MarkerColor::Yellow),
            "blue" => Some(MarkerColor::Blue),
            "gray" => Some(MarkerColor::Gray),
            "orange" => Some(MarkerColor::Orange),
            "red" => Some(MarkerColor::Red),
            "white" => Some(MarkerColor::White),
            _ => None,
        }
    }

    /// Returns the wire name of this color.
    pub fn as_str(self) -> &'static str {
        match self {
            MarkerColor::Black => "black",
            MarkerColor::Brown => "brown",
            MarkerColor::Green => "green",
            MarkerColor::Purple => "purple",
            MarkerColor::Yellow => "yellow",
            MarkerColor::Blue => "blue",
            MarkerColor::Gray => "gray",
            MarkerColor::Orange => "orange",
            MarkerColor::Red => "red",
            MarkerColor::White => "white",
        }
    }
}

impl fmt::Display for MarkerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MarkerColor {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MarkerColor::from_name(s).ok_or_else(|| ParseError::InvalidMarkerColor {
            value: s.to_string(),
        })
    }
}

// =============================================================================
// MARKER STYLE
// =============================================================================

/// Named style for a marker group: size, color, and label.
///
/// Only default and mid sized markers can display a label character.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkerStyle {
    size: Option<MarkerSize>,
    color: Option<MarkerColor>,
    label: Option<String>,
}

impl MarkerStyle {
    /// Creates an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the pin size.
    pub fn with_size(mut self, size: MarkerSize) -> Self {
        self.size = Some(size);
        self
    }

    /// Sets the pin size from its wire name, ignoring unknown names.
    pub fn with_size_named(mut self, name: &str) -> Self {
        if let Some(size) = MarkerSize::from_name(name) {
            self.size = Some(size);
        }
        self
    }

    /// Sets the pin color.
    pub fn with_color(mut self, color: MarkerColor) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets the pin color from its wire name, ignoring unknown names.
    pub fn with_color_named(mut self, name: &str) -> Self {
        if let Some(color) = MarkerColor::from_name(name) {
            self.color = Some(color);
        }
        self
    }

    /// Sets the label, ignoring input without an ASCII alphanumeric character.
    ///
    /// The check is a containment test, not an anchored single-character
    /// match, and the whole input is stored uppercased. Multi-character
    /// labels are therefore storable even though the API renders only one
    /// character.
    pub fn with_label(mut self, label: &str) -> Self {
        if label.bytes().any(|b| b.is_ascii_alphanumeric()) {
            self.label = Some(label.to_uppercase());
        }
        self
    }

    /// Returns the pin size, if set.
    pub fn size(&self) -> Option<MarkerSize> {
        self.size
    }

    /// Returns the pin color, if set.
    pub fn color(&self) -> Option<MarkerColor> {
        self.color
    }

    /// Returns the stored (uppercased) label, if set.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns the `size:X|color:Y|label:Z` fragment, unset fields omitted.
    ///
    /// Empty when no field is set. The fragment is not percent-encoded.
    pub fn fragment(&self) -> String {
        crate::url::fragment::marker_style(self)
    }
}

impl fmt::Display for MarkerStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fragment())
    }
}

// =============================================================================
// CUSTOM ICON
// =============================================================================

/// Custom marker icon: an image URL and a shadow flag.
///
/// The icon URL is passed through without format validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomIcon {
    icon_url: Option<String>,
    shadow: Option<bool>,
}

impl CustomIcon {
    /// Creates an empty custom icon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the icon image URL.
    pub fn with_icon_url(mut self, url: impl Into<String>) -> Self {
        self.icon_url = Some(url.into());
        self
    }

    /// Sets whether the icon casts a shadow.
    pub fn with_shadow(mut self, shadow: bool) -> Self {
        self.shadow = Some(shadow);
        self
    }

    /// Returns the icon URL, if set.
    pub fn icon_url(&self) -> Option<&str> {
        self.icon_url.as_deref()
    }

    /// Returns the shadow flag, if set.
    pub fn shadow(&self) -> Option<bool> {
        self.shadow
    }

    /// Returns the `icon:<url>|shadow:<bool>` fragment, unset fields omitted.
    ///
    /// Empty when neither field is set. The fragment is not percent-encoded.
    pub fn fragment(&self) -> String {
        crate::url::fragment::custom_icon(self)
    }
}

impl fmt::Display for CustomIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fragment())
    }
}

// =============================================================================
// MARKER SET
// =============================================================================

/// A group of locations sharing one icon or style.
///
/// Each set becomes one `markers=` query entry: style/icon tokens and
/// location tokens share a single pipe-delimited segment. A set with no
/// resolvable location serializes empty and contributes nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerSet {
    custom_icon: Option<CustomIcon>,
    style: Option<MarkerStyle>,
    locations: Vec<Location>,
}

impl MarkerSet {
    /// Creates an empty marker set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the custom icon. Takes precedence over the named style.
    pub fn with_custom_icon(mut self, icon: CustomIcon) -> Self {
        self.custom_icon = Some(icon);
        self
    }

    /// Sets the named style.
    pub fn with_style(mut self, style: MarkerStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Appends a location. Insertion order is preserved in the output.
    pub fn with_location(mut self, location: Location) -> Self {
        self.locations.push(location);
        self
    }

    /// Appends multiple locations.
    pub fn with_locations(mut self, locations: impl IntoIterator<Item = Location>) -> Self {
        self.locations.extend(locations);
        self
    }

    /// Returns the custom icon, if set.
    pub fn custom_icon(&self) -> Option<&CustomIcon> {
        self.custom_icon.as_ref()
    }

    /// Returns the named style, if set.
    pub fn style(&self) -> Option<&MarkerStyle> {
        self.style.as_ref()
    }

    /// Returns the locations in insertion order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Returns the pipe-delimited fragment for this set.
    ///
    /// The custom-icon fragment wins when non-empty, else the style
    /// fragment; locations follow in insertion order. Empty when no
    /// location resolves. The fragment is not percent-encoded.
    pub fn fragment(&self) -> String {
        crate::url::fragment::marker_set(self)
    }
}

impl fmt::Display for MarkerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fragment())
    }
}
