use crate::core::geo::Point;
use serde::{Deserialize, Serialize};

/// Represents a bounding box in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    /// Creates new bounds from two points
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Creates bounds from individual coordinates
    pub fn from_coords(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self::new(Point::new(min_x, min_y), Point::new(max_x, max_y))
    }

    /// Creates ordered bounds spanning two arbitrary corners
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self::from_coords(a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y))
    }

    /// Gets the width of the bounds
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Gets the height of the bounds
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Checks if the bounds intersect with another bounds
    pub fn intersects(&self, other: &Bounds) -> bool {
        !(other.max.x < self.min.x
            || other.min.x > self.max.x
            || other.max.y < self.min.y
            || other.min.y > self.max.y)
    }

    /// Gets the intersection of two bounds
    pub fn intersection(&self, other: &Bounds) -> Option<Bounds> {
        if !self.intersects(other) {
            return None;
        }

        Some(Bounds::new(
            Point::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y)),
            Point::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y)),
        ))
    }

    /// Whole-pixel rectangle `(x, y, width, height)` covered by the bounds.
    ///
    /// Edges are rounded outward so partially covered pixels are kept.
    pub fn to_pixel_rect(&self) -> (u32, u32, u32, u32) {
        let x0 = self.min.x.floor().max(0.0);
        let y0 = self.min.y.floor().max(0.0);
        let x1 = self.max.x.ceil().max(x0);
        let y1 = self.max.y.ceil().max(y0);
        (x0 as u32, y0 as u32, (x1 - x0) as u32, (y1 - y0) as u32)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(Point::new(0.0, 0.0), Point::new(0.0, 0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_creation() {
        let bounds = Bounds::from_coords(10.0, 20.0, 30.0, 40.0);
        assert_eq!(bounds.width(), 20.0);
        assert_eq!(bounds.height(), 20.0);
        assert!(bounds.intersects(&Bounds::from_coords(25.0, 35.0, 50.0, 50.0)));
    }

    #[test]
    fn test_bounds_from_corners_orders_axes() {
        let bounds = Bounds::from_corners(Point::new(30.0, 5.0), Point::new(10.0, 40.0));
        assert_eq!(bounds, Bounds::from_coords(10.0, 5.0, 30.0, 40.0));
    }

    #[test]
    fn test_bounds_intersection() {
        let bounds1 = Bounds::from_coords(0.0, 0.0, 10.0, 10.0);
        let bounds2 = Bounds::from_coords(5.0, 5.0, 15.0, 15.0);

        let intersection = bounds1.intersection(&bounds2).unwrap();
        assert_eq!(intersection.min, Point::new(5.0, 5.0));
        assert_eq!(intersection.max, Point::new(10.0, 10.0));

        let far = Bounds::from_coords(20.0, 20.0, 25.0, 25.0);
        assert!(bounds1.intersection(&far).is_none());
    }

    #[test]
    fn test_pixel_rect_rounds_outward() {
        let bounds = Bounds::from_coords(10.4, 2.6, 20.2, 8.0);
        assert_eq!(bounds.to_pixel_rect(), (10, 2, 11, 6));
    }
}
