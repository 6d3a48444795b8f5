//! Map point locations.
//!
//! A location names a point either by coordinate pair or by free-text
//! address. When both are present, coordinates win.

use std::fmt;

/// A map point, used as the map center and for marker placement.
///
/// Locations have no identity beyond value equality and never fail to
/// serialize: missing data degrades to the next fallback and finally to an
/// empty fragment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Location {
    address: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

impl Location {
    /// Creates an empty location.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the free-text address.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Sets the latitude in degrees.
    pub fn with_latitude(mut self, latitude: f64) -> Self {
        self.latitude = Some(latitude);
        self
    }

    /// Sets the longitude in degrees.
    pub fn with_longitude(mut self, longitude: f64) -> Self {
        self.longitude = Some(longitude);
        self
    }

    /// Sets latitude and longitude at once.
    pub fn with_coords(self, latitude: f64, longitude: f64) -> Self {
        self.with_latitude(latitude).with_longitude(longitude)
    }

    /// Returns the address, if set.
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Returns the latitude, if set.
    pub fn latitude(&self) -> Option<f64> {
        self.latitude
    }

    /// Returns the longitude, if set.
    pub fn longitude(&self) -> Option<f64> {
        self.longitude
    }

    /// Returns the URL fragment for this location.
    ///
    /// `"{lat},{lon}"` when both coordinates are set (coordinates take
    /// precedence over the address), else the raw address when non-empty,
    /// else an empty string. The fragment is not percent-encoded.
    pub fn fragment(&self) -> String {
        crate::url::fragment::location(self)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fragment())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_coords_fragment() {
        let loc = Location::new().with_coords(40.714728, -73.998672);
        assert_eq!(loc.fragment(), "40.714728,-73.998672");
    }

    #[test]
    fn test_whole_coords_use_plain_formatting() {
        let loc = Location::new().with_coords(40.7, -74.0);
        assert_eq!(loc.fragment(), "40.7,-74");
    }

    #[test]
    fn test_address_fragment() {
        let loc = Location::new().with_address("Paris");
        assert_eq!(loc.fragment(), "Paris");
    }

    #[test]
    fn test_coords_take_precedence_over_address() {
        let loc = Location::new()
            .with_address("Berlin, Germany")
            .with_coords(52.52, 13.405);
        assert_eq!(loc.fragment(), "52.52,13.405");
    }

    #[test]
    fn test_partial_coords_fall_back_to_address() {
        let loc = Location::new().with_address("Berlin").with_latitude(52.52);
        assert_eq!(loc.fragment(), "Berlin");
    }

    #[test]
    fn test_empty_location_yields_empty_fragment() {
        assert_eq!(Location::new().fragment(), "");
        assert_eq!(Location::new().with_address("").fragment(), "");
    }

    #[test]
    fn test_display_matches_fragment() {
        let loc = Location::new().with_coords(1.5, -2.5);
        assert_eq!(loc.to_string(), loc.fragment());
    }

    proptest! {
        #[test]
        fn prop_coords_fragment_round_trips(
            lat in -90.0f64..90.0,
            lon in -180.0f64..180.0,
        ) {
            let fragment = Location::new().with_coords(lat, lon).fragment();
            let (a, b) = fragment.split_once(',').unwrap();
            prop_assert_eq!(a.parse::<f64>().unwrap(), lat);
            prop_assert_eq!(b.parse::<f64>().unwrap(), lon);
        }
    }
}
