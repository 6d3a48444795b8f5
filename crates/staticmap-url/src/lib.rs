//! Typed URL builder for the Google Static Maps image API.
//!
//! This crate assembles a valid `staticmap` query URL from typed option
//! values: map center, zoom, image size, rendering options, and marker
//! groups with named styles or custom icons. It does no HTTP — the output
//! is a single URL string ready to hand to any client.
//!
//! # Overview
//!
//! The builder is a small value-object graph:
//! - [`Location`]: a map point, by coordinate pair or free-text address
//! - [`MarkerStyle`] / [`CustomIcon`]: the look of a marker group
//! - [`MarkerSet`]: locations sharing one icon or style
//! - [`StaticMap`]: the root aggregate producing the final URL
//!
//! Configuration is best-effort by design: setters for enumerated options
//! accept-or-ignore, so an out-of-range value leaves the prior state
//! untouched instead of failing the whole build. A build either yields a
//! complete URL or an empty string — callers detect failure by checking for
//! empty output. Strict counterparts live in [`validate`] and in the
//! `FromStr` impls of the option enums.
//!
//! # Quick Start
//!
//! ```rust
//! use staticmap_url::{Location, MarkerColor, MarkerSet, MarkerStyle, StaticMap};
//!
//! let url = StaticMap::new()
//!     .with_center(Location::new().with_coords(40.7128, -74.0060))
//!     .with_zoom(12)
//!     .with_marker(
//!         MarkerSet::new()
//!             .with_style(MarkerStyle::new().with_color(MarkerColor::Red))
//!             .with_location(Location::new().with_address("Empire State Building")),
//!     )
//!     .build();
//!
//! assert!(url.starts_with("http://maps.googleapis.com/maps/api/staticmap?center="));
//! assert!(url.ends_with("&sensor=false"));
//! ```
//!
//! # Modules
//!
//! - [`model`]: The option value types and their fluent setters
//! - [`url`]: Fragment and query-string encoding
//! - [`language`]: The supported display-language table
//! - [`validate`]: Opt-in strict parsing and map validation
//! - [`error`]: Error types for the strict surfaces
//!
//! # URL length
//!
//! The API rejects URLs longer than 2048 characters in practice. The builder
//! does not enforce this; callers who care can run the finished URL through
//! [`validate::check_url_length`].

pub mod error;
pub mod language;
pub mod model;
pub mod url;
pub mod validate;

// Re-export commonly used types at crate root
pub use error::{ParseError, ValidationError};
pub use model::{
    CustomIcon, ImageFormat, ImageSize, Location, MapType, MarkerColor, MarkerSet, MarkerSize,
    MarkerStyle, Scale, StaticMap,
};
pub use url::{UrlParams, build_params, build_url};
pub use validate::{check_url_length, validate_map};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default base endpoint the built query string is appended to.
pub const ENDPOINT: &str = "http://maps.googleapis.com/maps/api/staticmap";

/// Practical URL length limit of the Static Maps API (see RFC 2616 notes).
///
/// Not enforced by [`StaticMap::build`]; see [`validate::check_url_length`].
pub const MAX_URL_LENGTH: usize = 2048;
