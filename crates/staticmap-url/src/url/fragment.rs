//! Pipe-delimited URL fragments for locations and marker groups.
//!
//! Fragments are the raw (not percent-encoded) segments that end up as the
//! values of `center=` and `markers=` query parameters. Missing data always
//! degrades to an empty fragment, never an error.

use crate::model::{CustomIcon, Location, MarkerSet, MarkerStyle};

/// Separator between tokens of one marker segment.
pub const SEPARATOR: &str = "|";

/// Builds the fragment for a location.
///
/// A coordinate pair takes precedence over the address; the pair uses plain
/// decimal formatting (`40.7,-74`).
pub fn location(loc: &Location) -> String {
    if let (Some(lat), Some(lon)) = (loc.latitude(), loc.longitude()) {
        return format!("{},{}", lat, lon);
    }
    match loc.address() {
        Some(address) if !address.is_empty() => address.to_string(),
        _ => String::new(),
    }
}

/// Builds the `size:X|color:Y|label:Z` fragment for a marker style.
pub fn marker_style(style: &MarkerStyle) -> String {
    let mut tokens = Vec::new();
    if let Some(size) = style.size() {
        tokens.push(format!("size:{}", size.as_str()));
    }
    if let Some(color) = style.color() {
        tokens.push(format!("color:{}", color.as_str()));
    }
    if let Some(label) = style.label() {
        tokens.push(format!("label:{}", label));
    }
    join(tokens)
}

/// Builds the `icon:<url>|shadow:<bool>` fragment for a custom icon.
pub fn custom_icon(icon: &CustomIcon) -> String {
    let mut tokens = Vec::new();
    if let Some(url) = icon.icon_url() {
        if !url.is_empty() {
            tokens.push(format!("icon:{}", url));
        }
    }
    if let Some(shadow) = icon.shadow() {
        tokens.push(format!("shadow:{}", shadow));
    }
    join(tokens)
}

/// Builds the full fragment for a marker set.
///
/// Custom icon is preferred over the named style; the winning look and the
/// resolvable locations share one pipe-delimited segment. Empty when no
/// location resolves.
pub fn marker_set(set: &MarkerSet) -> String {
    let locations: Vec<String> = set
        .locations()
        .iter()
        .map(location)
        .filter(|f| !f.is_empty())
        .collect();
    if locations.is_empty() {
        return String::new();
    }

    let icon = set
        .custom_icon()
        .map(custom_icon)
        .filter(|f| !f.is_empty())
        .or_else(|| set.style().map(marker_style).filter(|f| !f.is_empty()));

    let mut tokens = Vec::with_capacity(locations.len() + 1);
    tokens.extend(icon);
    tokens.extend(locations);
    join(tokens)
}

fn join(tokens: Vec<String>) -> String {
    tokens.join(SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MarkerColor, MarkerSize};

    #[test]
    fn test_style_token_order_is_size_color_label() {
        let style = MarkerStyle::new()
            .with_label("a")
            .with_color(MarkerColor::Red)
            .with_size(MarkerSize::Tiny);
        assert_eq!(marker_style(&style), "size:tiny|color:red|label:A");
    }

    #[test]
    fn test_icon_url_is_passed_through_unvalidated() {
        let icon = CustomIcon::new().with_icon_url("not a url at all");
        assert_eq!(custom_icon(&icon), "icon:not a url at all");
    }

    #[test]
    fn test_blank_icon_url_is_skipped() {
        let icon = CustomIcon::new().with_icon_url("").with_shadow(true);
        assert_eq!(custom_icon(&icon), "shadow:true");
    }

    #[test]
    fn test_marker_set_token_order() {
        let set = MarkerSet::new()
            .with_style(MarkerStyle::new().with_size(MarkerSize::Mid))
            .with_location(Location::new().with_coords(1.0, 2.0))
            .with_location(Location::new().with_address("B"));
        assert_eq!(marker_set(&set), "size:mid|1,2|B");
    }
}
