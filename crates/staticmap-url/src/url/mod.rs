//! Fragment and query-string encoding for the Static Maps URL.
//!
//! The model types stay plain data; everything wire-shaped lives here.
//! Fragments (pipe-delimited marker/location segments) are built raw and
//! percent-encoded only at the point they enter the query string.

pub mod fragment;
pub mod params;

pub use params::UrlParams;

use crate::model::StaticMap;

/// Builds the ordered query parameters for a map.
///
/// Returns None when the map has neither a resolvable marker set nor a
/// complete center+zoom pair — the same condition under which
/// [`build_url`] yields an empty string.
///
/// Parameter order is fixed: `center, zoom, size, visual_refresh, scale,
/// format, mapType, language, region, markers..., sensor`. Absent options
/// are omitted entirely; each marker set contributes its own `markers=`
/// entry in insertion order. The center value and marker fragments are
/// percent-encoded; sizes, enums, and booleans are emitted raw.
pub fn build_params(map: &StaticMap) -> Option<UrlParams> {
    let markers: Vec<String> = map
        .markers()
        .iter()
        .map(fragment::marker_set)
        .filter(|f| !f.is_empty())
        .collect();

    let center = map
        .center()
        .map(fragment::location)
        .filter(|f| !f.is_empty());
    let zoom = map.zoom();

    // Center and zoom are required if no marker set resolved.
    if markers.is_empty() && (center.is_none() || zoom.is_none()) {
        tracing::trace!("static map build degraded: no markers and incomplete center/zoom");
        return None;
    }

    let mut params = UrlParams::new();
    if let Some(center) = center {
        params.push("center", urlencoding::encode(&center).into_owned());
    }
    if let Some(zoom) = zoom {
        params.push("zoom", zoom.to_string());
    }
    params.push("size", map.size().to_string());
    if let Some(visual_refresh) = map.visual_refresh() {
        params.push("visual_refresh", visual_refresh.to_string());
    }
    if let Some(scale) = map.scale() {
        params.push("scale", scale.to_string());
    }
    if let Some(format) = map.format() {
        params.push("format", format.as_str().to_string());
    }
    if let Some(map_type) = map.map_type() {
        params.push("mapType", map_type.as_str().to_string());
    }
    if let Some(language) = map.language() {
        params.push("language", language.to_string());
    }
    if let Some(region) = map.region() {
        params.push("region", region.to_string());
    }
    for marker in &markers {
        params.push("markers", urlencoding::encode(marker).into_owned());
    }
    params.push("sensor", map.sensor().to_string());

    tracing::debug!(params = params.len(), "built static map parameters");
    Some(params)
}

/// Builds the final URL for a map, or an empty string when it is incomplete.
pub fn build_url(map: &StaticMap) -> String {
    match build_params(map) {
        Some(params) => params.render(map.endpoint()),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::model::{Location, MapType, MarkerColor, MarkerSet, MarkerStyle, Scale};

    fn anchored_map() -> StaticMap {
        StaticMap::new()
            .with_center(Location::new().with_coords(40.7, -74.0))
            .with_zoom(12)
    }

    #[test]
    fn test_center_zoom_map_builds_in_order() {
        let url = anchored_map().build();
        assert_eq!(
            url,
            "http://maps.googleapis.com/maps/api/staticmap?\
             center=40.7%2C-74&zoom=12&size=640x640&sensor=false"
        );
    }

    #[test]
    fn test_markers_only_map_builds() {
        let url = StaticMap::new()
            .with_marker(MarkerSet::new().with_location(Location::new().with_address("Paris")))
            .build();
        assert_eq!(
            url,
            "http://maps.googleapis.com/maps/api/staticmap?\
             size=640x640&markers=Paris&sensor=false"
        );
    }

    #[test]
    fn test_incomplete_map_builds_empty() {
        assert_eq!(StaticMap::new().build(), "");
        // Center without zoom is not an anchor.
        let center_only = StaticMap::new().with_center(Location::new().with_coords(1.0, 2.0));
        assert_eq!(center_only.build(), "");
        assert!(center_only.build_params().is_none());
        // Zoom without center is not an anchor either.
        assert_eq!(StaticMap::new().with_zoom(5).build(), "");
    }

    #[test]
    fn test_unresolvable_center_does_not_anchor() {
        let map = StaticMap::new().with_center(Location::new()).with_zoom(5);
        assert_eq!(map.build(), "");
    }

    #[test]
    fn test_empty_marker_sets_contribute_nothing() {
        let map = StaticMap::new().with_marker(MarkerSet::new());
        assert_eq!(map.build(), "");

        let url = anchored_map().with_marker(MarkerSet::new()).build();
        assert!(!url.contains("markers"));
    }

    #[test]
    fn test_each_marker_set_gets_its_own_entry() {
        let url = StaticMap::new()
            .with_marker(
                MarkerSet::new()
                    .with_style(MarkerStyle::new().with_color(MarkerColor::Blue))
                    .with_location(Location::new().with_address("A")),
            )
            .with_marker(MarkerSet::new().with_location(Location::new().with_address("B")))
            .build();
        assert_eq!(
            url,
            "http://maps.googleapis.com/maps/api/staticmap?\
             size=640x640&markers=color%3Ablue%7CA&markers=B&sensor=false"
        );
    }

    #[test]
    fn test_optional_parameters_render_in_fixed_order() {
        let params = anchored_map()
            .with_visual_refresh(true)
            .with_scale(Scale::Two)
            .with_format_named("png32")
            .with_map_type(MapType::Terrain)
            .with_language("de")
            .with_region("de")
            .build_params()
            .unwrap();
        let keys: Vec<&str> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            [
                "center",
                "zoom",
                "size",
                "visual_refresh",
                "scale",
                "format",
                "mapType",
                "language",
                "region",
                "sensor"
            ]
        );
        assert_eq!(params.get("visual_refresh"), Some("true"));
        assert_eq!(params.get("scale"), Some("2"));
        assert_eq!(params.get("format"), Some("png32"));
        assert_eq!(params.get("mapType"), Some("terrain"));
    }

    #[test]
    fn test_absent_options_are_omitted_entirely() {
        let url = anchored_map().build();
        for key in ["visual_refresh", "scale", "format", "mapType", "language", "region"] {
            assert!(!url.contains(key), "unexpected {} in {}", key, url);
        }
        assert!(!url.contains("=&"));
    }

    #[test]
    fn test_center_address_is_percent_encoded() {
        let url = StaticMap::new()
            .with_center(Location::new().with_address("Berlin, Germany"))
            .with_zoom(10)
            .build();
        assert!(url.contains("center=Berlin%2C%20Germany"));
    }

    #[test]
    fn test_sensor_flag_renders_true_when_set() {
        let url = anchored_map().with_sensor(true).build();
        assert!(url.ends_with("&sensor=true"));
    }

    #[test]
    fn test_custom_endpoint() {
        let url = anchored_map()
            .with_endpoint("https://maps.googleapis.com/maps/api/staticmap")
            .build();
        assert!(url.starts_with("https://"));
    }

    #[test]
    fn test_build_is_idempotent() {
        let map = anchored_map()
            .with_marker(MarkerSet::new().with_location(Location::new().with_address("A")));
        assert_eq!(map.build(), map.build());
    }

    proptest! {
        #[test]
        fn prop_build_never_panics_and_is_idempotent(
            lat in -90.0f64..90.0,
            lon in -180.0f64..180.0,
            zoom in 0u8..=30,
            sensor in proptest::bool::ANY,
            address in "[a-zA-Z ,]{0,20}",
        ) {
            let map = StaticMap::new()
                .with_center(Location::new().with_coords(lat, lon))
                .with_zoom(zoom)
                .with_sensor(sensor)
                .with_marker(
                    MarkerSet::new().with_location(Location::new().with_address(address)),
                );
            let first = map.build();
            prop_assert_eq!(&first, &map.build());
            // A built URL always carries the always-present parameters.
            if !first.is_empty() {
                prop_assert!(first.contains("size=640x640"));
                let expected_sensor = format!("sensor={}", sensor);
                prop_assert!(first.ends_with(&expected_sensor));
            }
        }
    }
}
