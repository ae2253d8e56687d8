//! Configuration for plotting and tile fetching
//!
//! Everything is plain data with sensible defaults, so callers usually start
//! from `Default::default()` (or a preset) and override the fields they care
//! about with struct update syntax.

use crate::core::constants::{
    CAPTION_FONT_SIZE_PT, CAPTION_OFFSET_PX, DEFAULT_DPI, DEFAULT_EXTEND_PERCENTAGE,
    DEFAULT_MAX_TILES, DEFAULT_MIN_SIZE_PX, FIGURE_MARGIN_IN, GRADIENT_DOT_AREA_PT2,
    MARKER_SIZE_PT,
};
use crate::{MapError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// A setting that is either absent, shared by every value column, or given
/// once per value column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PerColumn<T> {
    None,
    All(T),
    Each(Vec<T>),
}

impl<T> PerColumn<T> {
    /// Setting for the `index`-th value column (0 = first value column)
    pub fn get(&self, index: usize) -> Option<&T> {
        match self {
            Self::None => None,
            Self::All(value) => Some(value),
            Self::Each(values) => values.get(index),
        }
    }

    /// Rejects per-column lists that do not cover `columns` value columns
    pub fn check_covers(&self, columns: usize, what: &str) -> Result<()> {
        match self {
            Self::Each(values) if values.len() < columns => Err(MapError::InvalidInput(format!(
                "{} {} given for {} value columns",
                values.len(),
                what,
                columns
            ))),
            _ => Ok(()),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl<T> Default for PerColumn<T> {
    fn default() -> Self {
        Self::None
    }
}

/// Resampling filter used when a figure is scaled for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interpolation {
    Nearest,
    Linear,
}

impl Default for Interpolation {
    fn default() -> Self {
        Self::Linear
    }
}

/// Fixed drawing conventions of a figure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderStyle {
    /// Resolution used to convert points and inches to pixels
    pub dpi: f64,
    /// Margin added around the raster when sizing the figure, in inches
    pub figure_margin_in: f64,
    /// Marker diameter in points
    pub marker_size_pt: f64,
    /// Area of one gradient-line dot in square points
    pub gradient_dot_area_pt2: f64,
    /// Caption font size in points
    pub caption_font_size_pt: f64,
    /// Caption distance from the visible area's top-left corner, in pixels
    pub caption_offset_px: f64,
    /// Bold font used for captions; well-known system fonts are tried when unset
    pub caption_font: Option<PathBuf>,
    /// Tile budget per mosaic; the zoom level is lowered until it fits
    pub max_tiles: Option<usize>,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            dpi: DEFAULT_DPI,
            figure_margin_in: FIGURE_MARGIN_IN,
            marker_size_pt: MARKER_SIZE_PT,
            gradient_dot_area_pt2: GRADIENT_DOT_AREA_PT2,
            caption_font_size_pt: CAPTION_FONT_SIZE_PT,
            caption_offset_px: CAPTION_OFFSET_PX,
            caption_font: None,
            max_tiles: Some(DEFAULT_MAX_TILES),
        }
    }
}

impl RenderStyle {
    /// Converts a length in points to pixels at this style's dpi
    pub fn points_to_px(&self, points: f64) -> f64 {
        points * self.dpi / 72.0
    }
}

/// Options for [`crate::plot`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotOptions {
    /// Minimum edge length of the rendered map in pixels
    pub min_size_px: u32,
    /// Padding around the points' bounding box, in percent of its extent
    pub extend_percentage: f64,
    /// Output image path(s); nothing is written when `None`
    pub filename: PerColumn<PathBuf>,
    /// Draw a marker at every point
    pub markers: bool,
    /// Draw color-gradient lines between consecutive points
    pub gradient_lines: bool,
    /// Caption(s) drawn on the figure
    pub caption: PerColumn<String>,
    /// Open every figure in a window
    pub show_plot: bool,
    pub style: RenderStyle,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            min_size_px: DEFAULT_MIN_SIZE_PX,
            extend_percentage: DEFAULT_EXTEND_PERCENTAGE,
            filename: PerColumn::None,
            markers: true,
            gradient_lines: true,
            caption: PerColumn::None,
            show_plot: true,
            style: RenderStyle::default(),
        }
    }
}

impl PlotOptions {
    /// Defaults without interactive display, for batch export
    pub fn headless() -> Self {
        Self {
            show_plot: false,
            ..Self::default()
        }
    }
}

/// Options for [`crate::plot_map`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapPanelOptions {
    pub min_size_px: u32,
    pub extend_percentage: f64,
    /// Limit the returned figure to the padded bounding box
    pub clip_to_bounds: bool,
    /// Filter used when the map is scaled for display
    pub interpolation: Interpolation,
    pub style: RenderStyle,
}

impl Default for MapPanelOptions {
    fn default() -> Self {
        Self {
            min_size_px: DEFAULT_MIN_SIZE_PX,
            extend_percentage: DEFAULT_EXTEND_PERCENTAGE,
            clip_to_bounds: false,
            interpolation: Interpolation::default(),
            style: RenderStyle::default(),
        }
    }
}

/// Where and how map tiles are downloaded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileServerConfig {
    /// URL template with `{s}`, `{z}`, `{x}` and `{y}` placeholders
    pub url_template: String,
    /// Values substituted for `{s}`, rotated per tile
    pub subdomains: Vec<String>,
    /// Public tile servers reject requests without an identifying agent
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for TileServerConfig {
    fn default() -> Self {
        Self::openstreetmap()
    }
}

impl TileServerConfig {
    pub fn openstreetmap() -> Self {
        Self {
            url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            subdomains: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            user_agent: concat!("trackmap/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn satellite() -> Self {
        Self {
            url_template:
                "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}"
                    .to_string(),
            subdomains: Vec::new(),
            ..Self::openstreetmap()
        }
    }
}
