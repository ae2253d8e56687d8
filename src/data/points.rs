use crate::core::geo::LatLng;
use crate::{MapError, Result};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Index of the latitude column
pub const LAT_COLUMN: usize = 0;
/// Index of the longitude column
pub const LNG_COLUMN: usize = 1;
/// Index of the first value column
pub const FIRST_VALUE_COLUMN: usize = 2;

/// Rows as they appear in JSON: `null` marks a missing value
type RawRows = Vec<Vec<Option<f64>>>;

/// Ordered point rows `(lat, lng, value, ...)` in WGS84 degrees.
///
/// Every row has the same number of columns and at least latitude and
/// longitude. Missing values are stored as NaN, which the colormap renders
/// as fully transparent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRows", into = "RawRows")]
pub struct PointSet {
    rows: Vec<Vec<f64>>,
    columns: usize,
}

impl PointSet {
    /// Validates and wraps `rows`
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self> {
        let columns = rows
            .first()
            .map(Vec::len)
            .ok_or_else(|| MapError::InvalidInput("point set has no rows".to_string()))?;

        if columns < FIRST_VALUE_COLUMN {
            return Err(MapError::InvalidInput(format!(
                "rows need latitude and longitude columns, got {} column(s)",
                columns
            )));
        }

        for (index, row) in rows.iter().enumerate() {
            if row.len() != columns {
                return Err(MapError::InvalidInput(format!(
                    "row {} has {} columns, expected {}",
                    index,
                    row.len(),
                    columns
                )));
            }
            if !row[LAT_COLUMN].is_finite() || !row[LNG_COLUMN].is_finite() {
                return Err(MapError::InvalidInput(format!(
                    "row {} has a non-finite coordinate ({}, {})",
                    index, row[LAT_COLUMN], row[LNG_COLUMN]
                )));
            }
        }

        Ok(Self { rows, columns })
    }

    /// Builds a set from positions and one value per position
    pub fn from_values(positions: &[LatLng], values: &[f64]) -> Result<Self> {
        if positions.len() != values.len() {
            return Err(MapError::InvalidInput(format!(
                "{} positions but {} values",
                positions.len(),
                values.len()
            )));
        }
        Self::new(
            positions
                .iter()
                .zip(values)
                .map(|(p, v)| vec![p.lat, p.lng, *v])
                .collect(),
        )
    }

    /// Parses a JSON array of rows, e.g. `[[48.1, 11.5, 20.0], ...]`
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawRows = serde_json::from_str(json)?;
        Self::try_from(raw)
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false for a validated set
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns per row, coordinates included
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Column indices holding values
    pub fn value_columns(&self) -> Range<usize> {
        FIRST_VALUE_COLUMN..self.columns
    }

    pub fn positions(&self) -> impl Iterator<Item = LatLng> + '_ {
        self.rows
            .iter()
            .map(|row| LatLng::new(row[LAT_COLUMN], row[LNG_COLUMN]))
    }

    /// `(position, value)` pairs for one value column, in row order
    pub fn series(&self, column: usize) -> impl Iterator<Item = (LatLng, f64)> + '_ {
        self.rows.iter().map(move |row| {
            (
                LatLng::new(row[LAT_COLUMN], row[LNG_COLUMN]),
                row.get(column).copied().unwrap_or(f64::NAN),
            )
        })
    }
}

impl TryFrom<RawRows> for PointSet {
    type Error = MapError;

    fn try_from(raw: RawRows) -> Result<Self> {
        Self::new(
            raw.into_iter()
                .map(|row| row.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect())
                .collect(),
        )
    }
}

impl From<PointSet> for RawRows {
    fn from(set: PointSet) -> Self {
        set.rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|v| if v.is_nan() { None } else { Some(v) })
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_set_validation() {
        assert!(matches!(
            PointSet::new(Vec::new()),
            Err(MapError::InvalidInput(_))
        ));
        assert!(matches!(
            PointSet::new(vec![vec![1.0]]),
            Err(MapError::InvalidInput(_))
        ));
        assert!(matches!(
            PointSet::new(vec![vec![1.0, 2.0, 3.0], vec![1.0, 2.0]]),
            Err(MapError::InvalidInput(_))
        ));
        assert!(matches!(
            PointSet::new(vec![vec![f64::NAN, 2.0]]),
            Err(MapError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_point_set_accessors() {
        let set = PointSet::new(vec![
            vec![0.0, 0.0, 10.0, 1.0],
            vec![0.0, 1.0, 20.0, 2.0],
            vec![1.0, 1.0, 30.0, 3.0],
        ])
        .unwrap();

        assert_eq!(set.len(), 3);
        assert_eq!(set.columns(), 4);
        assert_eq!(set.value_columns(), 2..4);
        assert_eq!(set.positions().last(), Some(LatLng::new(1.0, 1.0)));

        let values: Vec<f64> = set.series(3).map(|(_, v)| v).collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_point_set_from_json_with_missing_value() {
        let set = PointSet::from_json("[[48.1, 11.5, 20.0], [48.2, 11.6, null]]").unwrap();
        assert_eq!(set.len(), 2);
        let values: Vec<f64> = set.series(2).map(|(_, v)| v).collect();
        assert!(values[1].is_nan());

        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, "[[48.1,11.5,20.0],[48.2,11.6,null]]");
    }

    #[test]
    fn test_point_set_from_json_rejects_ragged_rows() {
        assert!(matches!(
            PointSet::from_json("[[1.0, 2.0, 3.0], [1.0, 2.0]]"),
            Err(MapError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_from_values_length_mismatch() {
        let positions = [LatLng::new(1.0, 2.0)];
        assert!(PointSet::from_values(&positions, &[1.0, 2.0]).is_err());
        assert_eq!(PointSet::from_values(&positions, &[5.0]).unwrap().columns(), 3);
    }
}
