use crate::core::constants::{MAX_LATITUDE, TILE_SIZE};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// Represents a geographical coordinate with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Clamps latitude to the range Web Mercator can represent
    pub fn clamp_lat(lat: f64) -> f64 {
        lat.clamp(-MAX_LATITUDE, MAX_LATITUDE)
    }
}

impl Default for LatLng {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Represents a point in pixel space (origin top-left, y growing downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Linear interpolation towards `other`; `t = 0` is `self`, `t = 1` is `other`
    pub fn lerp(&self, other: &Point, t: f64) -> Point {
        Point::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Axis-aligned latitude/longitude box covering a point set.
///
/// `min` holds the smallest latitude and longitude, `max` the largest. Because
/// tile and pixel y grow southward, the top-left of the rendered box is
/// [`BoundingBox::north_west`] and the bottom-right is [`BoundingBox::south_east`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: LatLng,
    pub max: LatLng,
}

impl BoundingBox {
    pub fn new(min: LatLng, max: LatLng) -> Self {
        Self { min, max }
    }

    /// Creates a box from individual coordinates
    pub fn from_coords(min_lat: f64, min_lng: f64, max_lat: f64, max_lng: f64) -> Self {
        Self::new(LatLng::new(min_lat, min_lng), LatLng::new(max_lat, max_lng))
    }

    /// Upper-left corner in tile/pixel space: `(max.lat, min.lng)`
    pub fn north_west(&self) -> LatLng {
        LatLng::new(self.max.lat, self.min.lng)
    }

    /// Lower-right corner in tile/pixel space: `(min.lat, max.lng)`
    pub fn south_east(&self) -> LatLng {
        LatLng::new(self.min.lat, self.max.lng)
    }

    /// Latitude and longitude extent of the box
    pub fn span(&self) -> LatLng {
        LatLng::new(self.max.lat - self.min.lat, self.max.lng - self.min.lng)
    }

    /// Checks whether the box has zero extent on either axis
    pub fn is_degenerate(&self) -> bool {
        let span = self.span();
        span.lat <= 0.0 || span.lng <= 0.0
    }

    /// Smallest zoom level at which the box covers `min_size_px` pixels in both axes
    pub fn optimal_zoom(&self, min_size_px: u32) -> crate::Result<u8> {
        crate::core::zoom::compute_optimal_zoom(self.min, self.max, min_size_px)
    }
}

/// Fractional position within the global tile grid at a given zoom level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TilePoint {
    pub x: f64,
    pub y: f64,
}

impl TilePoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset from `origin`, converted to pixels
    pub fn to_pixels_from(&self, origin: &TilePoint) -> Point {
        Point::new(
            (self.x - origin.x) * TILE_SIZE as f64,
            (self.y - origin.y) * TILE_SIZE as f64,
        )
    }
}

/// Projects a coordinate to fractional slippy-map tile coordinates.
///
/// No rounding is applied; at zoom 0 the whole world maps to `[0, 1]` on both
/// axes. Latitude is clamped to the Web Mercator limit so the poles stay finite.
pub fn deg2num(lat: f64, lng: f64, zoom: f64) -> TilePoint {
    let lat_rad = LatLng::clamp_lat(lat).to_radians();
    let n = 2_f64.powf(zoom);

    let x = (lng + 180.0) / 360.0 * n;
    let y = (1.0 - lat_rad.tan().asinh() / PI) / 2.0 * n;

    TilePoint::new(x, y)
}

/// Represents a tile coordinate in the slippy map tile system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileCoord {
    pub x: u32,
    pub y: u32,
    pub z: u8,
}

impl TileCoord {
    pub fn new(x: u32, y: u32, z: u8) -> Self {
        Self { x, y, z }
    }

    /// Tile containing `lat_lng` at `zoom`, clamped to the tile grid
    pub fn from_lat_lng(lat_lng: &LatLng, zoom: u8) -> Self {
        let tile = deg2num(lat_lng.lat, lat_lng.lng, zoom as f64);
        let max_index = (Self::grid_size(zoom) - 1) as f64;

        let x = tile.x.floor().clamp(0.0, max_index) as u32;
        let y = tile.y.floor().clamp(0.0, max_index) as u32;

        Self::new(x, y, zoom)
    }

    /// Number of tiles along one axis at `zoom`
    pub fn grid_size(zoom: u8) -> u32 {
        1_u32 << zoom.min(31)
    }
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.z, self.x, self.y)
    }
}
