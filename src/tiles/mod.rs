pub mod loader;
pub mod mosaic;
pub mod source;

// Re-exports for convenience
pub use loader::{HttpTileFetcher, TileFetcher};
pub use mosaic::TileMosaic;
pub use source::{TileSource, UrlTemplateSource};
