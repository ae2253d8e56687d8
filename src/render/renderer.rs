use super::colormap::value_color;
use super::figure::Figure;
use super::font::load_caption_font;
use super::gradient::GradientSegment;
use crate::core::config::PlotOptions;
use crate::core::extent::compute_bounding_box;
use crate::core::geo::{BoundingBox, Point};
use crate::data::PointSet;
use crate::tiles::{HttpTileFetcher, TileFetcher, TileMosaic};
use crate::{MapError, Result};
use rusttype::Font;
use std::path::PathBuf;

/// What was drawn for one value column
#[derive(Debug, Clone, PartialEq)]
pub struct FigureSummary {
    /// Column index in the point set (2 = first value column)
    pub value_column: usize,
    pub markers: usize,
    pub gradient_segments: usize,
    pub gradient_points: usize,
    pub caption: Option<String>,
    pub exported: Option<PathBuf>,
}

/// Outcome of a [`plot`] call
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSummary {
    /// Padded bounding box of the points
    pub bbox: BoundingBox,
    /// Zoom level computed for the box
    pub zoom: u8,
    /// Zoom level the map was fetched at; lower than `zoom` when the tile
    /// budget was exceeded
    pub map_zoom: u8,
    /// Raster size in pixels
    pub map_size: (u32, u32),
    pub figures: Vec<FigureSummary>,
}

/// Plots every value column of `data` on an OpenStreetMap background
pub fn plot(data: &PointSet, options: &PlotOptions) -> Result<PlotSummary> {
    let fetcher = HttpTileFetcher::openstreetmap()?;
    plot_with(data, options, &fetcher)
}

/// Plots every value column of `data`, fetching tiles through `fetcher`.
///
/// One figure is produced per value column, drawn over the same map. Each
/// figure is exported and shown as requested and closed before the next one.
pub fn plot_with(
    data: &PointSet,
    options: &PlotOptions,
    fetcher: &dyn TileFetcher,
) -> Result<PlotSummary> {
    let value_columns = data.value_columns().len();
    options.filename.check_covers(value_columns, "filenames")?;
    options.caption.check_covers(value_columns, "captions")?;

    // Font problems should surface before any network traffic
    let font = if options.caption.is_none() {
        None
    } else {
        Some(load_caption_font(options.style.caption_font.as_deref())?)
    };

    let (bbox, zoom, mosaic) = prepare_map(
        data,
        options.min_size_px,
        options.extend_percentage,
        options.style.max_tiles,
        fetcher,
    )?;

    if value_columns == 0 {
        log::warn!("point set has no value columns, nothing to plot");
    }

    let figures = data
        .value_columns()
        .enumerate()
        .map(|(index, column)| render_column(data, index, column, &mosaic, options, font.as_ref()))
        .collect::<Result<Vec<_>>>()?;

    Ok(PlotSummary {
        bbox,
        zoom,
        map_zoom: mosaic.zoom(),
        map_size: mosaic.size(),
        figures,
    })
}

/// Bounding box, zoom level and fetched map shared by both entry points
pub(crate) fn prepare_map(
    data: &PointSet,
    min_size_px: u32,
    extend_percentage: f64,
    max_tiles: Option<usize>,
    fetcher: &dyn TileFetcher,
) -> Result<(BoundingBox, u8, TileMosaic)> {
    let bbox = compute_bounding_box(data, extend_percentage)?;
    if bbox.is_degenerate() {
        return Err(MapError::DegenerateGeometry(
            "all points share a latitude or a longitude".to_string(),
        ));
    }
    let zoom = bbox.optimal_zoom(min_size_px)?;
    log::info!(
        "box ({:.5}, {:.5})..({:.5}, {:.5}) needs zoom {} for {} px",
        bbox.min.lat,
        bbox.min.lng,
        bbox.max.lat,
        bbox.max.lng,
        zoom,
        min_size_px
    );

    let mosaic = TileMosaic::fetch(&bbox, zoom, fetcher, max_tiles)?;
    let (width, height) = mosaic.size();
    log::info!("map raster is {}x{} px at zoom {}", width, height, mosaic.zoom());

    Ok((bbox, zoom, mosaic))
}

fn render_column(
    data: &PointSet,
    index: usize,
    column: usize,
    mosaic: &TileMosaic,
    options: &PlotOptions,
    font: Option<&Font<'static>>,
) -> Result<FigureSummary> {
    let style = &options.style;
    let marker_px = style.points_to_px(style.marker_size_pt);
    let dot_px = style.points_to_px(style.gradient_dot_area_pt2.sqrt());

    let mut figure = Figure::with_background(mosaic.image(), style);
    let mut last: Option<(Point, f64)> = None;
    let mut gradient_segments = 0;

    for (position, value) in data.series(column) {
        let at = mosaic.to_pixels(position.lat, position.lng);

        if options.markers {
            figure.plot_marker(at, value_color(value), marker_px);
        }

        if options.gradient_lines {
            if let Some((last_at, last_value)) = last {
                let segment = GradientSegment::between(last_at, last_value, at, value);
                figure.scatter(&segment.points, &segment.colors(), dot_px);
                gradient_segments += 1;
            }
        }

        last = Some((at, value));
    }

    // Show exactly the padded bounding box; y is flipped since rows grow southward
    let extent = mosaic.pixel_extent();
    figure.set_xlim(extent.min.x, extent.max.x);
    figure.set_ylim(extent.max.y, extent.min.y);

    let caption = options.caption.get(index).cloned();
    if let (Some(text), Some(font)) = (&caption, font) {
        let at = Point::new(
            extent.min.x + style.caption_offset_px,
            extent.min.y + style.caption_offset_px,
        );
        figure.text(at, text, font, style.points_to_px(style.caption_font_size_pt));
    }

    let exported = match options.filename.get(index) {
        Some(path) => {
            figure.export(path)?;
            Some(path.clone())
        }
        None => None,
    };

    if options.show_plot {
        let title = caption
            .clone()
            .unwrap_or_else(|| format!("value column {}", column));
        figure.show(&title)?;
    }

    let stats = figure.close();
    Ok(FigureSummary {
        value_column: column,
        markers: stats.markers,
        gradient_segments,
        gradient_points: stats.scatter_points,
        caption,
        exported,
    })
}
