//! Prelude module for common trackmap types and functions
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use trackmap::prelude::*;`

pub use crate::core::{
    bounds::Bounds,
    config::{Interpolation, MapPanelOptions, PerColumn, PlotOptions, RenderStyle, TileServerConfig},
    extent::compute_bounding_box,
    geo::{deg2num, BoundingBox, LatLng, Point, TileCoord, TilePoint},
    zoom::compute_optimal_zoom,
};

pub use crate::data::PointSet;

pub use crate::render::{
    colormap::{plasma, value_color},
    figure::{DrawStats, Figure},
    gradient::GradientSegment,
    panel::{plot_map, plot_map_with},
    renderer::{plot, plot_with, FigureSummary, PlotSummary},
};

pub use crate::tiles::{HttpTileFetcher, TileFetcher, TileMosaic, TileSource, UrlTemplateSource};

pub use crate::{MapError, Result};
