use crate::core::constants::TILE_SIZE;
use crate::core::geo::{deg2num, LatLng};
use crate::{MapError, Result};

/// Smallest integer zoom level at which the box `min`..`max` spans at least
/// `min_size_px` pixels both horizontally and vertically.
///
/// The box corners are projected to fractional tile coordinates at zoom 0.
/// The north-west corner pairs the largest latitude with the smallest
/// longitude because tile y grows southward. Each zoom step doubles the pixel
/// extent, so the requirement per axis is
/// `ceil(log2((min_size_px / TILE_SIZE) / dist))`.
pub fn compute_optimal_zoom(min: LatLng, max: LatLng, min_size_px: u32) -> Result<u8> {
    if min_size_px == 0 {
        return Err(MapError::InvalidInput(
            "minimum size must be at least one pixel".to_string(),
        ));
    }

    let north_west = deg2num(max.lat, min.lng, 0.0);
    let south_east = deg2num(min.lat, max.lng, 0.0);
    let dist_x = south_east.x - north_west.x;
    let dist_y = south_east.y - north_west.y;

    if !(dist_x > 0.0 && dist_x.is_finite()) || !(dist_y > 0.0 && dist_y.is_finite()) {
        return Err(MapError::DegenerateGeometry(format!(
            "bounding box ({}, {})..({}, {}) has no extent on the {} axis",
            min.lat,
            min.lng,
            max.lat,
            max.lng,
            if dist_x > 0.0 { "latitude" } else { "longitude" }
        )));
    }

    let tiles_needed = min_size_px as f64 / TILE_SIZE as f64;
    let zoom_x = (tiles_needed / dist_x).log2().ceil();
    let zoom_y = (tiles_needed / dist_y).log2().ceil();
    let zoom = zoom_x.max(zoom_y);

    log::debug!(
        "zoom for {} px: x needs {}, y needs {}, using {}",
        min_size_px,
        zoom_x,
        zoom_y,
        zoom
    );

    // A box wider than the world at this size needs no zoom at all
    Ok(zoom.clamp(0.0, u8::MAX as f64) as u8)
}
