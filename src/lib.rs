//! # trackmap
//!
//! Plot geographic point tracks on top of slippy-map tile mosaics.
//!
//! The crate derives a padded bounding box from a set of points, picks the
//! smallest tile zoom level that keeps the rendered map above a minimum pixel
//! size, stitches the matching tiles into one raster and overlays markers and
//! color-gradient trajectory lines on it.

pub mod core;
pub mod data;
pub mod render;
pub mod tiles;
pub mod prelude;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    bounds::Bounds,
    config::{MapPanelOptions, PerColumn, PlotOptions, RenderStyle, TileServerConfig},
    extent::compute_bounding_box,
    geo::{deg2num, BoundingBox, LatLng, Point, TileCoord, TilePoint},
    zoom::compute_optimal_zoom,
};

pub use crate::data::PointSet;

pub use crate::render::{
    figure::{DrawStats, Figure},
    panel::{plot_map, plot_map_with},
    renderer::{plot, plot_with, FigureSummary, PlotSummary},
};

pub use crate::tiles::{HttpTileFetcher, TileFetcher, TileMosaic, TileSource, UrlTemplateSource};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Tile server returned HTTP {status} for tile {coord}")]
    TileServer { coord: TileCoord, status: u16 },

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(String),

    #[error("Font error: {0}")]
    Font(String),

    #[error("Display error: {0}")]
    Display(String),
}

/// Error type alias for convenience
pub type Error = MapError;
