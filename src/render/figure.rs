//! A drawing surface over a map raster
//!
//! A [`Figure`] owns its canvas, so independent renders never share drawing
//! state. The lifecycle is explicit: create it over a background, draw,
//! export or show it, then [`Figure::close`] it.

use crate::core::bounds::Bounds;
use crate::core::config::{Interpolation, RenderStyle};
use crate::core::geo::Point;
use crate::{MapError, Result};
use image::{imageops, Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_text_mut};
use rusttype::{Font, Scale};
use std::path::Path;

/// Text color of captions
const TEXT_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Counts of what has been drawn on a figure
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawStats {
    pub markers: usize,
    pub scatters: usize,
    pub scatter_points: usize,
    pub texts: usize,
}

#[derive(Debug, Clone)]
pub struct Figure {
    canvas: RgbaImage,
    size_px: (u32, u32),
    xlim: Option<(f64, f64)>,
    ylim: Option<(f64, f64)>,
    interpolation: Interpolation,
    stats: DrawStats,
}

impl Figure {
    /// Figure showing `background` at its native resolution.
    ///
    /// The figure itself is larger than the raster by the style's margin,
    /// which only matters for the window it is shown in.
    pub fn with_background(background: &RgbaImage, style: &RenderStyle) -> Self {
        let margin = (style.figure_margin_in * style.dpi).round() as u32;
        let (width, height) = background.dimensions();
        log::debug!(
            "figure of {}x{} px over a {}x{} raster",
            width + margin,
            height + margin,
            width,
            height
        );

        Self {
            canvas: background.clone(),
            size_px: (width + margin, height + margin),
            xlim: None,
            ylim: None,
            interpolation: Interpolation::default(),
            stats: DrawStats::default(),
        }
    }

    /// Figure size in pixels, margin included
    pub fn size_px(&self) -> (u32, u32) {
        self.size_px
    }

    /// The full drawing canvas, ignoring axis limits
    pub fn canvas(&self) -> &RgbaImage {
        &self.canvas
    }

    pub fn stats(&self) -> DrawStats {
        self.stats
    }

    /// Resampling filter applied when the figure is shown scaled
    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }

    pub fn set_interpolation(&mut self, interpolation: Interpolation) {
        self.interpolation = interpolation;
    }

    /// Draws a filled circular marker of `diameter_px` centered on `at`.
    ///
    /// A disc centered on a pixel always spans an odd number of pixels, so
    /// even diameters come out one pixel wider.
    pub fn plot_marker(&mut self, at: Point, color: Rgba<u8>, diameter_px: f64) {
        self.stats.markers += 1;
        if color.0[3] == 0 {
            return;
        }
        let radius = ((diameter_px - 1.0) / 2.0).round().max(0.0) as i32;
        draw_filled_circle_mut(
            &mut self.canvas,
            (at.x.round() as i32, at.y.round() as i32),
            radius,
            color,
        );
    }

    /// Draws one dot per point, each in its own color
    pub fn scatter(&mut self, points: &[Point], colors: &[Rgba<u8>], dot_diameter_px: f64) {
        self.stats.scatters += 1;
        self.stats.scatter_points += points.len();

        let radius = (dot_diameter_px / 2.0).floor() as i32;
        for (point, color) in points.iter().zip(colors) {
            if color.0[3] == 0 {
                continue;
            }
            let (x, y) = (point.x.round() as i32, point.y.round() as i32);
            if radius < 1 {
                let (width, height) = self.canvas.dimensions();
                if x >= 0 && y >= 0 && (x as u32) < width && (y as u32) < height {
                    self.canvas.put_pixel(x as u32, y as u32, *color);
                }
            } else {
                draw_filled_circle_mut(&mut self.canvas, (x, y), radius, *color);
            }
        }
    }

    /// Draws `text` with its top-left corner at `at`
    pub fn text(&mut self, at: Point, text: &str, font: &Font<'_>, size_px: f64) {
        self.stats.texts += 1;
        draw_text_mut(
            &mut self.canvas,
            TEXT_COLOR,
            at.x.round() as i32,
            at.y.round() as i32,
            Scale::uniform(size_px as f32),
            font,
            text,
        );
    }

    /// Horizontal view range, left edge first
    pub fn set_xlim(&mut self, left: f64, right: f64) {
        self.xlim = Some((left, right));
    }

    /// Vertical view range, bottom edge first; pixel rows grow downward, so
    /// an upright map has `bottom > top`
    pub fn set_ylim(&mut self, bottom: f64, top: f64) {
        self.ylim = Some((bottom, top));
    }

    /// Part of the canvas inside the axis limits
    pub fn visible_region(&self) -> Bounds {
        let (width, height) = self.canvas.dimensions();
        let (x0, x1) = self.xlim.unwrap_or((0.0, width as f64));
        let (y0, y1) = self.ylim.unwrap_or((height as f64, 0.0));
        Bounds::from_corners(Point::new(x0, y0), Point::new(x1, y1))
    }

    /// Visible part of the figure, cropped tight to the axis limits
    pub fn rendered(&self) -> Result<RgbaImage> {
        let (width, height) = self.canvas.dimensions();
        let canvas_bounds = Bounds::from_coords(0.0, 0.0, width as f64, height as f64);
        let region = self
            .visible_region()
            .intersection(&canvas_bounds)
            .map(|b| b.to_pixel_rect())
            .filter(|&(_, _, w, h)| w > 0 && h > 0)
            .ok_or_else(|| {
                MapError::DegenerateGeometry("visible region of the figure is empty".to_string())
            })?;

        let (x, y, w, h) = region;
        Ok(imageops::crop_imm(&self.canvas, x, y, w, h).to_image())
    }

    /// Writes the visible part to `path`; the format follows the extension
    pub fn export(&self, path: &Path) -> Result<()> {
        let image = self.rendered()?;
        image.save(path)?;
        log::info!(
            "saved {}x{} figure to {}",
            image.width(),
            image.height(),
            path.display()
        );
        Ok(())
    }

    /// Opens the visible part in a window and blocks until it is closed
    #[cfg(feature = "egui")]
    pub fn show(&self, title: &str) -> Result<()> {
        let image = self.rendered()?;
        super::viewer::show(&image, title, self.size_px, self.interpolation())
    }

    /// Interactive display is unavailable without the `egui` feature
    #[cfg(not(feature = "egui"))]
    pub fn show(&self, title: &str) -> Result<()> {
        Err(MapError::Display(format!(
            "cannot show '{}': interactive display needs the `egui` feature",
            title
        )))
    }

    /// Releases the figure and reports what was drawn on it
    pub fn close(self) -> DrawStats {
        self.stats
    }
}
