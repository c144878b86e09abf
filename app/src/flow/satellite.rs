//! Satellite imagery view
//!
//! Slippy-map tile math over a public imagery tile service. The view
//! itself is a single centered tile at a fixed zoom plus an overlay mode.

use shared::Location;

pub const IMAGERY_ZOOM: u32 = 13;

const TILE_BASE_URL: &str =
    "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile";

/// Overlay rendered on top of the imagery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Natural,
    Ndvi,
    Moisture,
}

impl ViewMode {
    /// Short label describing what the overlay shows
    pub fn overlay_label(self) -> &'static str {
        match self {
            ViewMode::Natural => "True color",
            ViewMode::Ndvi => "Vegetation index",
            ViewMode::Moisture => "Soil moisture",
        }
    }
}

/// Web Mercator tile coordinates for a point at the given zoom
pub fn tile_coordinates(latitude: f64, longitude: f64, zoom: u32) -> (u32, u32) {
    let n = f64::from(1u32 << zoom);
    let x = ((longitude + 180.0) / 360.0 * n).floor();
    let lat_rad = latitude.to_radians();
    let y = ((1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / std::f64::consts::PI) / 2.0 * n)
        .floor();
    (x as u32, y as u32)
}

/// Imagery tile URL for the tile covering a location
pub fn tile_url(location: &Location, zoom: u32) -> String {
    let (x, y) = tile_coordinates(location.latitude, location.longitude, zoom);
    format!("{TILE_BASE_URL}/{zoom}/{y}/{x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_math_matches_known_point() {
        // Mumbai at the imagery zoom level
        let (x, y) = tile_coordinates(19.07, 72.87, IMAGERY_ZOOM);
        assert_eq!((x, y), (5754, 3653));
    }

    #[test]
    fn tile_url_places_y_before_x() {
        let location = Location::new(19.07, 72.87);
        assert_eq!(
            tile_url(&location, IMAGERY_ZOOM),
            "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/13/3653/5754"
        );
    }

    #[test]
    fn origin_maps_to_grid_center() {
        let (x, y) = tile_coordinates(0.0, 0.0, 1);
        assert_eq!((x, y), (1, 1));
    }
}
