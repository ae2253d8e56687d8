use super::loader::TileFetcher;
use crate::core::bounds::Bounds;
use crate::core::constants::{MAX_ZOOM, TILE_SIZE};
use crate::core::geo::{deg2num, BoundingBox, Point, TileCoord, TilePoint};
use crate::Result;
use image::imageops::{self, FilterType};
use image::RgbaImage;

/// Map raster stitched from every tile touching a bounding box.
///
/// Pixel coordinates are relative to the top-left corner of the top-left
/// tile, so the box itself usually starts somewhere inside the raster.
#[derive(Debug, Clone)]
pub struct TileMosaic {
    image: RgbaImage,
    bbox: BoundingBox,
    zoom: u8,
    tile_min: TileCoord,
    tile_max: TileCoord,
}

impl TileMosaic {
    /// Fetches and stitches the tiles covering `bbox` at `zoom`.
    ///
    /// With a `max_tiles` budget the zoom level is lowered until the tile
    /// range fits into it.
    pub fn fetch(
        bbox: &BoundingBox,
        zoom: u8,
        fetcher: &dyn TileFetcher,
        max_tiles: Option<usize>,
    ) -> Result<Self> {
        let mut zoom = zoom;
        if zoom > MAX_ZOOM {
            log::warn!("zoom {} is beyond tile servers, using {}", zoom, MAX_ZOOM);
            zoom = MAX_ZOOM;
        }

        let (mut tile_min, mut tile_max) = Self::tile_range(bbox, zoom);
        if let Some(max_tiles) = max_tiles {
            while zoom > 0 && Self::tile_count(&tile_min, &tile_max) > max_tiles {
                zoom -= 1;
                (tile_min, tile_max) = Self::tile_range(bbox, zoom);
                log::warn!(
                    "more than {} tiles needed, lowering zoom level to {}",
                    max_tiles,
                    zoom
                );
            }
        }

        let columns = tile_max.x - tile_min.x + 1;
        let rows = tile_max.y - tile_min.y + 1;
        log::debug!(
            "fetching {}x{} tiles from {} to {}",
            columns,
            rows,
            tile_min,
            tile_max
        );

        let mut image = RgbaImage::new(columns * TILE_SIZE, rows * TILE_SIZE);
        for y in tile_min.y..=tile_max.y {
            for x in tile_min.x..=tile_max.x {
                let mut tile = fetcher.fetch(TileCoord::new(x, y, zoom))?.to_rgba8();
                if tile.dimensions() != (TILE_SIZE, TILE_SIZE) {
                    tile = imageops::resize(&tile, TILE_SIZE, TILE_SIZE, FilterType::Triangle);
                }
                imageops::replace(
                    &mut image,
                    &tile,
                    ((x - tile_min.x) * TILE_SIZE) as i64,
                    ((y - tile_min.y) * TILE_SIZE) as i64,
                );
            }
        }

        Ok(Self {
            image,
            bbox: *bbox,
            zoom,
            tile_min,
            tile_max,
        })
    }

    /// Inclusive range of tiles touching `bbox` at `zoom`, top-left first
    pub fn tile_range(bbox: &BoundingBox, zoom: u8) -> (TileCoord, TileCoord) {
        let a = TileCoord::from_lat_lng(&bbox.north_west(), zoom);
        let b = TileCoord::from_lat_lng(&bbox.south_east(), zoom);
        (
            TileCoord::new(a.x.min(b.x), a.y.min(b.y), zoom),
            TileCoord::new(a.x.max(b.x), a.y.max(b.y), zoom),
        )
    }

    fn tile_count(min: &TileCoord, max: &TileCoord) -> usize {
        (max.x - min.x + 1) as usize * (max.y - min.y + 1) as usize
    }

    /// Converts a coordinate to pixel space of this mosaic
    pub fn to_pixels(&self, lat: f64, lng: f64) -> Point {
        let origin = TilePoint::new(self.tile_min.x as f64, self.tile_min.y as f64);
        deg2num(lat, lng, self.zoom as f64).to_pixels_from(&origin)
    }

    /// Pixel rectangle of the bounding box the mosaic was fetched for
    pub fn pixel_extent(&self) -> Bounds {
        let nw = self.bbox.north_west();
        let se = self.bbox.south_east();
        Bounds::new(self.to_pixels(nw.lat, nw.lng), self.to_pixels(se.lat, se.lng))
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// `(width, height)` of the raster in pixels
    pub fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Zoom level the tiles were fetched at, after any lowering
    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn bbox(&self) -> &BoundingBox {
        &self.bbox
    }

    pub fn tile_range_fetched(&self) -> (TileCoord, TileCoord) {
        (self.tile_min, self.tile_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MapError;
    use image::{DynamicImage, Rgba};
    use std::cell::RefCell;

    /// Serves solid tiles whose red channel encodes the column
    struct SolidTiles {
        requested: RefCell<Vec<TileCoord>>,
        tile_size: u32,
    }

    impl SolidTiles {
        fn new(tile_size: u32) -> Self {
            Self {
                requested: RefCell::new(Vec::new()),
                tile_size,
            }
        }
    }

    impl TileFetcher for SolidTiles {
        fn fetch(&self, coord: TileCoord) -> Result<DynamicImage> {
            self.requested.borrow_mut().push(coord);
            let color = Rgba([(coord.x % 256) as u8, (coord.y % 256) as u8, coord.z, 255]);
            Ok(DynamicImage::ImageRgba8(RgbaImage::from_pixel(
                self.tile_size,
                self.tile_size,
                color,
            )))
        }
    }

    struct FailingTiles;

    impl TileFetcher for FailingTiles {
        fn fetch(&self, coord: TileCoord) -> Result<DynamicImage> {
            Err(MapError::TileServer { coord, status: 503 })
        }
    }

    #[test]
    fn test_stitches_tiles_row_major() {
        let bbox = BoundingBox::from_coords(40.0, -74.0, 41.0, -73.0);
        let fetcher = SolidTiles::new(TILE_SIZE);
        let mosaic = TileMosaic::fetch(&bbox, 8, &fetcher, None).unwrap();

        let (min, max) = mosaic.tile_range_fetched();
        let columns = max.x - min.x + 1;
        let rows = max.y - min.y + 1;
        assert_eq!(mosaic.size(), (columns * TILE_SIZE, rows * TILE_SIZE));
        assert_eq!(fetcher.requested.borrow().len(), (columns * rows) as usize);
        assert_eq!(fetcher.requested.borrow()[0], min);

        let last = mosaic.image().get_pixel(columns * TILE_SIZE - 1, rows * TILE_SIZE - 1);
        assert_eq!(last.0[0], (max.x % 256) as u8);
        assert_eq!(last.0[1], (max.y % 256) as u8);
    }

    #[test]
    fn test_box_lies_inside_raster() {
        let bbox = BoundingBox::from_coords(40.0, -74.0, 41.0, -73.0);
        let mosaic = TileMosaic::fetch(&bbox, 10, &SolidTiles::new(TILE_SIZE), None).unwrap();
        let extent = mosaic.pixel_extent();
        let (width, height) = mosaic.size();

        assert!(extent.min.x >= 0.0 && extent.min.y >= 0.0);
        assert!(extent.max.x <= width as f64 && extent.max.y <= height as f64);
        assert!(extent.width() >= 512.0 && extent.height() >= 512.0);
    }

    #[test]
    fn test_zoom_lowered_to_fit_tile_budget() {
        let bbox = BoundingBox::from_coords(40.0, -74.0, 41.0, -73.0);
        let fetcher = SolidTiles::new(TILE_SIZE);
        let mosaic = TileMosaic::fetch(&bbox, 10, &fetcher, Some(4)).unwrap();

        assert!(mosaic.zoom() < 10);
        assert!(fetcher.requested.borrow().len() <= 4);
    }

    #[test]
    fn test_oversized_tiles_are_scaled() {
        let bbox = BoundingBox::from_coords(40.0, -74.0, 41.0, -73.0);
        let mosaic = TileMosaic::fetch(&bbox, 6, &SolidTiles::new(512), None).unwrap();
        let (min, max) = mosaic.tile_range_fetched();
        assert_eq!(mosaic.size().0, (max.x - min.x + 1) * TILE_SIZE);
    }

    #[test]
    fn test_fetch_failure_is_surfaced() {
        let bbox = BoundingBox::from_coords(40.0, -74.0, 41.0, -73.0);
        let err = TileMosaic::fetch(&bbox, 6, &FailingTiles, None).unwrap_err();
        assert!(matches!(err, MapError::TileServer { status: 503, .. }));
    }
}
