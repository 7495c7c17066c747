/// Nearest-row search
///
/// Finds the row whose cell is closest to a query pattern under a distance
/// metric. Metrics must be increasing: a larger value means further away.
/// The pattern length must equal the column's cell size; a mismatch is reported
/// before any row is scanned.
use crate::column::{Column, ElementKind};
use crate::error::{Result, TableError};
use crate::view::IndexView;

/// Distance between two equally sized patterns.
pub type MetricFn = fn(&[f64], &[f64]) -> f64;

/// Sum of squared differences.
pub fn sum_squares(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}

/// Euclidean (L2) distance.
pub fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    sum_squares(a, b).sqrt()
}

/// Sum of absolute differences (L1).
pub fn abs(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum()
}

fn check_pattern(pattern: &[f64], column: &Column) -> Result<usize> {
    if column.kind() != ElementKind::Numeric {
        return Err(TableError::KindMismatch {
            column: column.name().to_string(),
            expected: ElementKind::Numeric,
            actual: column.kind(),
        });
    }
    let csz = column.cell_size();
    if pattern.len() != csz {
        return Err(TableError::ShapeMismatch {
            expected: csz,
            actual: pattern.len(),
        });
    }
    Ok(csz)
}

fn closest_among<I>(pattern: &[f64], column: &Column, csz: usize, rows: I, metric: MetricFn) -> Option<(usize, f64)>
where
    I: IntoIterator<Item = usize>,
{
    let values = column.floats();
    let mut best: Option<(usize, f64)> = None;
    for row in rows {
        let start = row * csz;
        let d = metric(pattern, &values[start..start + csz]);
        if best.map_or(!d.is_nan(), |(_, min)| d < min) {
            best = Some((row, d));
        }
    }
    best
}

/// Closest row of `column` to `pattern`, with its distance.
///
/// Ties keep the first row. Returns `None` for a column without rows.
///
/// ```
/// use rowview::{metric, Column, ColumnType, ColumnValue};
///
/// let mut col = Column::with_shape("pat".to_string(), ColumnType::Float64, false, vec![3, 2]);
/// for (i, v) in [0.0, 0.0, 1.0, 1.0, 5.0, 5.0].into_iter().enumerate() {
///     col.set(i, ColumnValue::Float64(v)).unwrap();
/// }
///
/// let (row, dist) = metric::closest_row(&[0.9, 1.2], &col, metric::sum_squares).unwrap().unwrap();
/// assert_eq!(row, 1);
/// assert!(dist < 0.1);
/// ```
pub fn closest_row(pattern: &[f64], column: &Column, metric: MetricFn) -> Result<Option<(usize, f64)>> {
    let csz = check_pattern(pattern, column)?;
    Ok(closest_among(pattern, column, csz, 0..column.rows(), metric))
}

impl<'a> IndexView<'a> {
    /// Closest physical row among the view's rows to `pattern` in column
    /// `col_idx`, with its distance. Returns `None` for an empty view.
    pub fn closest_row(&self, col_idx: usize, pattern: &[f64], metric: MetricFn) -> Result<Option<(usize, f64)>> {
        let column = self.table().column(col_idx)?;
        let csz = check_pattern(pattern, column)?;
        self.validate()?;
        Ok(closest_among(pattern, column, csz, self.iter(), metric))
    }
}
