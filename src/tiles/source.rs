use crate::core::config::TileServerConfig;
use crate::core::geo::TileCoord;

/// Trait representing anything that can produce tile URLs for a given coordinate.
pub trait TileSource: Send + Sync {
    /// Build a URL for the requested `coord`.
    fn url(&self, coord: TileCoord) -> String;
}

/// Tile source driven by a `{s}/{z}/{x}/{y}` URL template.
#[derive(Debug, Clone)]
pub struct UrlTemplateSource {
    template: String,
    subdomains: Vec<String>,
}

impl UrlTemplateSource {
    pub fn new(template: impl Into<String>, subdomains: Vec<String>) -> Self {
        Self {
            template: template.into(),
            subdomains,
        }
    }

    /// The default OpenStreetMap tile server.
    pub fn openstreetmap() -> Self {
        Self::from_config(&TileServerConfig::openstreetmap())
    }

    pub fn from_config(config: &TileServerConfig) -> Self {
        Self::new(config.url_template.clone(), config.subdomains.clone())
    }
}

impl Default for UrlTemplateSource {
    fn default() -> Self {
        Self::openstreetmap()
    }
}

impl TileSource for UrlTemplateSource {
    fn url(&self, coord: TileCoord) -> String {
        let url = self
            .template
            .replace("{z}", &coord.z.to_string())
            .replace("{x}", &coord.x.to_string())
            .replace("{y}", &coord.y.to_string());

        if self.subdomains.is_empty() {
            // Templates without {s} still work; ones with it fall back to the bare host
            return url.replace("{s}.", "").replace("{s}", "");
        }

        let idx = ((coord.x as usize) + (coord.y as usize)) % self.subdomains.len();
        url.replace("{s}", &self.subdomains[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openstreetmap_url_rotates_subdomains() {
        let source = UrlTemplateSource::openstreetmap();
        assert_eq!(
            source.url(TileCoord::new(301, 384, 10)),
            "https://b.tile.openstreetmap.org/10/301/384.png"
        );
        assert_eq!(
            source.url(TileCoord::new(0, 0, 0)),
            "https://a.tile.openstreetmap.org/0/0/0.png"
        );
    }

    #[test]
    fn test_template_without_subdomains() {
        let source = UrlTemplateSource::from_config(&TileServerConfig::satellite());
        assert_eq!(
            source.url(TileCoord::new(3, 5, 4)),
            "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/4/5/3"
        );

        let bare = UrlTemplateSource::new("https://{s}.example.org/{z}/{x}/{y}.png", Vec::new());
        assert_eq!(bare.url(TileCoord::new(1, 2, 3)), "https://example.org/3/1/2.png");
    }
}
