//! Core constants shared by the geometry, tile and figure code.
//! Keeping them in a single place makes it easier to tweak crate-wide magic numbers.

/// Default square tile size in pixels.
pub const TILE_SIZE: u32 = 256;

/// Latitude limit of the Web Mercator projection.
pub const MAX_LATITUDE: f64 = 85.0511287798;

/// Highest zoom level served by standard slippy-map tile servers.
pub const MAX_ZOOM: u8 = 19;

/// Default minimum edge length of a rendered map in pixels.
pub const DEFAULT_MIN_SIZE_PX: u32 = 512;

/// Default padding around the point bounding box, in percent of its extent.
pub const DEFAULT_EXTEND_PERCENTAGE: f64 = 10.0;

/// Resolution figures are laid out and exported at.
pub const DEFAULT_DPI: f64 = 72.0;

/// Margin added around the raster when sizing a figure, in inches.
pub const FIGURE_MARGIN_IN: f64 = 10.0 / 32.0;

/// Marker diameter in points.
pub const MARKER_SIZE_PT: f64 = 10.0;

/// Area of one gradient-line dot in square points.
pub const GRADIENT_DOT_AREA_PT2: f64 = 1.0;

/// Caption font size in points.
pub const CAPTION_FONT_SIZE_PT: f64 = 48.0;

/// Distance of the caption from the visible area's corner, in pixels.
pub const CAPTION_OFFSET_PX: f64 = 10.0;

/// Tile budget per mosaic before the zoom level is lowered.
pub const DEFAULT_MAX_TILES: usize = 16;

/// Values are divided by this before being fed to the colormap.
pub const VALUE_COLOR_SCALE: f64 = 100.0;
