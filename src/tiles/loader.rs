use super::source::{TileSource, UrlTemplateSource};
use crate::core::config::TileServerConfig;
use crate::core::geo::TileCoord;
use crate::{MapError, Result};
use image::DynamicImage;
use reqwest::blocking::Client;

/// Anything that can deliver the raster of a single map tile.
///
/// Implementations decide where tiles come from; the mosaic only asks for
/// them one at a time, in row-major order.
pub trait TileFetcher {
    fn fetch(&self, coord: TileCoord) -> Result<DynamicImage>;
}

/// Downloads tiles over HTTP with a blocking client.
///
/// Failures are returned as-is: there is no retry and no cache.
pub struct HttpTileFetcher {
    client: Client,
    source: Box<dyn TileSource>,
}

impl HttpTileFetcher {
    /// Fetcher for the server described by `config`
    pub fn new(config: &TileServerConfig) -> Result<Self> {
        Self::with_source(config, Box::new(UrlTemplateSource::from_config(config)))
    }

    /// Fetcher for an arbitrary tile source, using `config` for the HTTP client
    pub fn with_source(config: &TileServerConfig, source: Box<dyn TileSource>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, source })
    }

    /// Fetcher for the default OpenStreetMap tile server
    pub fn openstreetmap() -> Result<Self> {
        Self::new(&TileServerConfig::openstreetmap())
    }
}

impl TileFetcher for HttpTileFetcher {
    fn fetch(&self, coord: TileCoord) -> Result<DynamicImage> {
        let url = self.source.url(coord);
        log::debug!("fetch tile {} from {}", coord, url);

        let resp = self.client.get(&url).send()?;
        if !resp.status().is_success() {
            log::warn!("tile {} download failed: HTTP {}", coord, resp.status());
            return Err(MapError::TileServer {
                coord,
                status: resp.status().as_u16(),
            });
        }

        let bytes = resp.bytes()?;
        log::info!("downloaded tile {} ({} bytes)", coord, bytes.len());
        Ok(image::load_from_memory(&bytes)?)
    }
}
