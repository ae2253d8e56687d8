use std::path::PathBuf;
use trackmap::prelude::*;

/// Plots a short walk along the Isar in Munich and writes one image per
/// value column. Pass a JSON file of `[lat, lng, value, ...]` rows to plot
/// your own track instead.
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let data = match std::env::args().nth(1) {
        Some(path) => PointSet::from_json(&std::fs::read_to_string(path)?)?,
        None => PointSet::new(vec![
            vec![48.1300, 11.5830, -12.0, -80.0],
            vec![48.1325, 11.5860, -25.0, -72.0],
            vec![48.1352, 11.5878, -41.0, -65.0],
            vec![48.1381, 11.5893, -58.0, -51.0],
            vec![48.1410, 11.5921, -73.0, -40.0],
            vec![48.1433, 11.5957, -90.0, -22.0],
        ])?,
    };

    let bbox = compute_bounding_box(&data, 10.0)?;
    let zoom = bbox.optimal_zoom(512)?;
    println!(
        "box ({:.4}, {:.4})..({:.4}, {:.4}) at zoom {}",
        bbox.min.lat, bbox.min.lng, bbox.max.lat, bbox.max.lng, zoom
    );

    let filenames: Vec<PathBuf> = data
        .value_columns()
        .map(|column| PathBuf::from(format!("track_{}.png", column)))
        .collect();
    // Captions need a bold TrueType font
    let caption = match trackmap::render::font::system_caption_font() {
        Some(_) => PerColumn::Each(
            data.value_columns()
                .map(|column| format!("column {}", column))
                .collect(),
        ),
        None => {
            eprintln!("no bold system font found, plotting without captions");
            PerColumn::None
        }
    };

    let options = PlotOptions {
        filename: PerColumn::Each(filenames),
        caption,
        show_plot: cfg!(feature = "egui"),
        ..PlotOptions::default()
    };

    let summary = plot(&data, &options)?;
    for figure in &summary.figures {
        println!(
            "column {}: {} markers, {} gradient segments -> {:?}",
            figure.value_column, figure.markers, figure.gradient_segments, figure.exported
        );
    }

    Ok(())
}
