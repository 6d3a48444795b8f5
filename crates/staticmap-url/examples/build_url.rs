//! Builds a sample static map URL and prints it.

use staticmap_url::{
    CustomIcon, Location, MapType, MarkerColor, MarkerSet, MarkerSize, MarkerStyle, Scale,
    StaticMap, check_url_length,
};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let map = StaticMap::new()
        .with_center(Location::new().with_address("Brooklyn Bridge, New York, NY"))
        .with_zoom(13)
        .with_size(600, 300)
        .with_scale(Scale::Two)
        .with_map_type(MapType::Roadmap)
        .with_language("en")
        .with_marker(
            MarkerSet::new()
                .with_style(
                    MarkerStyle::new()
                        .with_color(MarkerColor::Blue)
                        .with_size(MarkerSize::Mid)
                        .with_label("S"),
                )
                .with_location(Location::new().with_coords(40.702147, -74.015794))
                .with_location(Location::new().with_coords(40.711614, -74.012318)),
        )
        .with_marker(
            MarkerSet::new()
                .with_custom_icon(
                    CustomIcon::new()
                        .with_icon_url("http://example.com/pin.png")
                        .with_shadow(false),
                )
                .with_location(Location::new().with_address("Chelsea Market, New York")),
        );

    let url = map.build();
    if url.is_empty() {
        eprintln!("map is incomplete, nothing to request");
        return;
    }

    if let Err(err) = check_url_length(&url) {
        eprintln!("warning: {}", err);
    }

    if let Some(params) = map.build_params() {
        for (key, value) in params.iter() {
            println!("  {} = {}", key, value);
        }
    }
    println!("{}", url);
}
