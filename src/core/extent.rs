use crate::core::geo::{BoundingBox, LatLng};
use crate::data::PointSet;
use crate::{MapError, Result};
use ::geo::{BoundingRect, MultiPoint};

/// Padded latitude/longitude box around every point of `data`.
///
/// The tight box is grown outward by `extend_percentage` percent of its own
/// extent, latitude and longitude independently. A set of identical points
/// yields a zero-size box regardless of the padding.
pub fn compute_bounding_box(data: &PointSet, extend_percentage: f64) -> Result<BoundingBox> {
    if !extend_percentage.is_finite() || extend_percentage < 0.0 {
        return Err(MapError::InvalidInput(format!(
            "extend percentage must be a non-negative number, got {}",
            extend_percentage
        )));
    }

    // geo works in (x, y) = (lng, lat)
    let points: MultiPoint<f64> = data
        .positions()
        .map(|p| ::geo::Point::new(p.lng, p.lat))
        .collect();
    let rect = points
        .bounding_rect()
        .ok_or_else(|| MapError::InvalidInput("point set has no rows".to_string()))?;

    let tight = BoundingBox::new(
        LatLng::new(rect.min().y, rect.min().x),
        LatLng::new(rect.max().y, rect.max().x),
    );
    let span = tight.span();
    let pad_lat = span.lat * extend_percentage / 100.0;
    let pad_lng = span.lng * extend_percentage / 100.0;

    Ok(BoundingBox::new(
        LatLng::new(tight.min.lat - pad_lat, tight.min.lng - pad_lng),
        LatLng::new(tight.max.lat + pad_lat, tight.max.lng + pad_lng),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn track() -> PointSet {
        PointSet::new(vec![
            vec![48.10, 11.50, 1.0],
            vec![48.30, 11.40, 2.0],
            vec![48.20, 11.90, 3.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_tight_box_without_padding() {
        let bbox = compute_bounding_box(&track(), 0.0).unwrap();
        assert_eq!(bbox, BoundingBox::from_coords(48.10, 11.40, 48.30, 11.90));
    }

    #[test]
    fn test_padding_is_per_axis() {
        let bbox = compute_bounding_box(&track(), 10.0).unwrap();
        assert_abs_diff_eq!(bbox.min.lat, 48.08, epsilon = 1e-9);
        assert_abs_diff_eq!(bbox.max.lat, 48.32, epsilon = 1e-9);
        assert_abs_diff_eq!(bbox.min.lng, 11.35, epsilon = 1e-9);
        assert_abs_diff_eq!(bbox.max.lng, 11.95, epsilon = 1e-9);
    }

    #[test]
    fn test_identical_points_give_zero_size_box() {
        let data = PointSet::new(vec![vec![5.0, 6.0, 1.0], vec![5.0, 6.0, 2.0]]).unwrap();
        let bbox = compute_bounding_box(&data, 50.0).unwrap();
        assert_eq!(bbox, BoundingBox::from_coords(5.0, 6.0, 5.0, 6.0));
        assert!(bbox.is_degenerate());
    }

    #[test]
    fn test_rejects_negative_padding() {
        assert!(matches!(
            compute_bounding_box(&track(), -1.0),
            Err(MapError::InvalidInput(_))
        ));
        assert!(matches!(
            compute_bounding_box(&track(), f64::NAN),
            Err(MapError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_extent_grows_with_padding() {
        let data = track();
        let mut last: Option<BoundingBox> = None;
        for percentage in [0.0, 10.0, 50.0] {
            let bbox = compute_bounding_box(&data, percentage).unwrap();
            assert!(bbox.min.lat <= bbox.max.lat && bbox.min.lng <= bbox.max.lng);
            if let Some(prev) = last {
                assert!(bbox.span().lat >= prev.span().lat);
                assert!(bbox.span().lng >= prev.span().lng);
                assert!(bbox.min.lat <= prev.min.lat && bbox.max.lat >= prev.max.lat);
                assert!(bbox.min.lng <= prev.min.lng && bbox.max.lng >= prev.max.lng);
            }
            last = Some(bbox);
        }
    }
}
