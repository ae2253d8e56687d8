pub mod points;

pub use points::PointSet;
