use crate::core::config::Interpolation;
use crate::{MapError, Result};
use eframe::egui;
use image::RgbaImage;

/// Window showing a single rendered figure
struct FigureViewer {
    pending: Option<egui::ColorImage>,
    texture: Option<egui::TextureHandle>,
    options: egui::TextureOptions,
}

impl eframe::App for FigureViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(image) = self.pending.take() {
            self.texture = Some(ctx.load_texture("figure", image, self.options));
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::WHITE))
            .show(ctx, |ui| {
                if let Some(texture) = &self.texture {
                    ui.centered_and_justified(|ui| {
                        ui.image((texture.id(), texture.size_vec2()));
                    });
                }
            });
    }
}

/// Opens `image` in a native window of `window_size` pixels and blocks until
/// the window is closed
pub fn show(
    image: &RgbaImage,
    title: &str,
    window_size: (u32, u32),
    interpolation: Interpolation,
) -> Result<()> {
    let size = [image.width() as usize, image.height() as usize];
    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, image.as_raw());
    let options = match interpolation {
        Interpolation::Nearest => egui::TextureOptions::NEAREST,
        Interpolation::Linear => egui::TextureOptions::LINEAR,
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([window_size.0 as f32, window_size.1 as f32])
            .with_title(title),
        ..Default::default()
    };

    log::debug!("showing {}x{} figure '{}'", size[0], size[1], title);
    eframe::run_native(
        title,
        native_options,
        Box::new(move |_cc| {
            Box::new(FigureViewer {
                pending: Some(color_image),
                texture: None,
                options,
            })
        }),
    )
    .map_err(|e| MapError::Display(e.to_string()))
}
