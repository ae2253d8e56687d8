pub mod colormap;
pub mod figure;
pub mod font;
pub mod gradient;
pub mod panel;
pub mod renderer;
#[cfg(feature = "egui")]
pub mod viewer;
