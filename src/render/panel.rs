use super::figure::Figure;
use super::renderer::prepare_map;
use crate::core::config::MapPanelOptions;
use crate::data::PointSet;
use crate::tiles::{HttpTileFetcher, TileFetcher, TileMosaic};
use crate::Result;

/// Map background for `data` on OpenStreetMap tiles, without overlays
pub fn plot_map(data: &PointSet, options: &MapPanelOptions) -> Result<(TileMosaic, Figure)> {
    let fetcher = HttpTileFetcher::openstreetmap()?;
    plot_map_with(data, options, &fetcher)
}

/// Map background for `data`, fetching tiles through `fetcher`.
///
/// The caller gets the mosaic (for [`TileMosaic::to_pixels`]) and a figure
/// holding only the map, to draw its own overlays on. The figure shows the
/// whole raster unless `clip_to_bounds` is set.
pub fn plot_map_with(
    data: &PointSet,
    options: &MapPanelOptions,
    fetcher: &dyn TileFetcher,
) -> Result<(TileMosaic, Figure)> {
    let (_, _, mosaic) = prepare_map(
        data,
        options.min_size_px,
        options.extend_percentage,
        options.style.max_tiles,
        fetcher,
    )?;

    let mut figure = Figure::with_background(mosaic.image(), &options.style);
    figure.set_interpolation(options.interpolation);

    let extent = mosaic.pixel_extent();
    log::debug!(
        "bounding box covers {:.1}x{:.1} px from ({:.1}, {:.1})",
        extent.width(),
        extent.height(),
        extent.min.x,
        extent.min.y
    );
    if options.clip_to_bounds {
        figure.set_xlim(extent.min.x, extent.max.x);
        figure.set_ylim(extent.max.y, extent.min.y);
    }

    Ok((mosaic, figure))
}
