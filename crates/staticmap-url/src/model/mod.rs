//! Option value types for the Static Maps URL builder.
//!
//! This module contains the builder value graph:
//! - Locations (coordinate pair or address)
//! - Marker styling (named styles and custom icons)
//! - Marker sets (locations sharing one style)
//! - The root map aggregate

pub mod location;
pub mod map;
pub mod marker;

pub use location::Location;
pub use map::{
    ImageFormat, ImageSize, MapType, Scale, StaticMap, MAX_ZOOM, MIN_ZOOM, SCALE_1_MAX_DIMENSION,
};
pub use marker::{CustomIcon, MarkerColor, MarkerSet, MarkerSize, MarkerStyle};
