use super::colormap::value_color;
use crate::core::geo::Point;
use image::Rgba;

/// Dots approximating a line whose color fades from one value to the next.
///
/// One dot is placed per pixel of length (rounded). Dots are spaced evenly
/// from the start point to the end point, both included, and dot `i` of `n`
/// carries the value `from + (to - from) * i / n`.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientSegment {
    pub points: Vec<Point>,
    pub values: Vec<f64>,
}

impl GradientSegment {
    pub fn between(from: Point, from_value: f64, to: Point, to_value: f64) -> Self {
        let n = from.distance_to(&to).round() as usize;

        // Parametric sampling keeps vertical segments (equal x) well defined
        let points = (0..n)
            .map(|i| {
                let t = if n > 1 { i as f64 / (n - 1) as f64 } else { 0.0 };
                from.lerp(&to, t)
            })
            .collect();
        let values = (0..n)
            .map(|i| (to_value - from_value) * i as f64 / n as f64 + from_value)
            .collect();

        Self { points, values }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Colormap color of every dot
    pub fn colors(&self) -> Vec<Rgba<u8>> {
        self.values.iter().map(|v| value_color(*v)).collect()
    }
}
