/// Column aggregation over indexed views
///
/// Aggregates run over the rows selected by an [`IndexView`], in view order,
/// and produce one value per cell position. Null and NaN elements are skipped.
///
/// Reducers have the shape `f(flat_index, value, acc) -> acc`. The standard ones
/// below are plain functions and can be passed directly:
///
/// ```
/// use rowview::{agg, IndexView, Table, Schema, ColumnType, ColumnValue};
///
/// let schema = Schema::new(vec![("x".to_string(), ColumnType::Float64, true)]);
/// let mut table = Table::with_rows("t".to_string(), schema, 3);
/// table.set_value(0, "x", ColumnValue::Float64(2.0)).unwrap();
/// table.set_value(1, "x", ColumnValue::Null).unwrap();
/// table.set_value(2, "x", ColumnValue::Float64(5.0)).unwrap();
///
/// let view = IndexView::from_table(&table);
/// assert_eq!(view.aggregate_column(0, 0.0, agg::sum).unwrap(), vec![7.0]);
/// assert_eq!(view.aggregate_column(0, 0.0, agg::count).unwrap(), vec![2.0]);
/// ```
use crate::error::Result;
use crate::view::IndexView;

/// Standard reducer signature: `(flat_index, value, acc) -> acc`.
pub type AggFunc = fn(usize, f64, f64) -> f64;

pub fn sum(_idx: usize, val: f64, agg: f64) -> f64 {
    agg + val
}

pub fn prod(_idx: usize, val: f64, agg: f64) -> f64 {
    agg * val
}

pub fn min(_idx: usize, val: f64, agg: f64) -> f64 {
    agg.min(val)
}

pub fn max(_idx: usize, val: f64, agg: f64) -> f64 {
    agg.max(val)
}

/// Counts non-null, non-NaN elements.
pub fn count(_idx: usize, _val: f64, agg: f64) -> f64 {
    agg + 1.0
}

pub fn sum_sq(_idx: usize, val: f64, agg: f64) -> f64 {
    agg + val * val
}

impl<'a> IndexView<'a> {
    /// Folds `f` over column `col_idx` for every row of the view, independently
    /// for each cell position.
    ///
    /// Returns `cell_size` values, each starting at `init`. For scalar columns
    /// `f` receives the physical row as its index, otherwise the flat element
    /// index `row * cell_size + j`. String elements are read as numbers.
    pub fn aggregate_column<F>(&self, col_idx: usize, init: f64, mut f: F) -> Result<Vec<f64>>
    where
        F: FnMut(usize, f64, f64) -> f64,
    {
        let col = self.table().column(col_idx)?;
        self.validate()?;

        let csz = col.cell_size();
        let values = col.floats();
        let nulls = col.null_flags();
        let usable = |k: usize| !values[k].is_nan() && !nulls.is_some_and(|n| n[k]);

        let mut agg = vec![init; csz];
        if csz == 1 {
            for row in self.iter() {
                if usable(row) {
                    agg[0] = f(row, values[row], agg[0]);
                }
            }
        } else {
            for row in self.iter() {
                let start = row * csz;
                for (j, acc) in agg.iter_mut().enumerate() {
                    let k = start + j;
                    if usable(k) {
                        *acc = f(k, values[k], *acc);
                    }
                }
            }
        }
        Ok(agg)
    }

    /// Sum per cell position.
    pub fn sum(&self, col_idx: usize) -> Result<Vec<f64>> {
        self.aggregate_column(col_idx, 0.0, sum)
    }

    /// Number of usable (non-null, non-NaN) elements per cell position.
    pub fn count(&self, col_idx: usize) -> Result<Vec<f64>> {
        self.aggregate_column(col_idx, 0.0, count)
    }

    /// Mean per cell position; NaN where nothing was counted.
    pub fn mean(&self, col_idx: usize) -> Result<Vec<f64>> {
        let sums = self.sum(col_idx)?;
        let counts = self.count(col_idx)?;
        Ok(sums
            .iter()
            .zip(&counts)
            .map(|(s, n)| if *n > 0.0 { s / n } else { f64::NAN })
            .collect())
    }

    /// Minimum per cell position; NaN where nothing was counted.
    pub fn min(&self, col_idx: usize) -> Result<Vec<f64>> {
        let mins = self.aggregate_column(col_idx, f64::INFINITY, min)?;
        self.mask_empty(col_idx, mins)
    }

    /// Maximum per cell position; NaN where nothing was counted.
    pub fn max(&self, col_idx: usize) -> Result<Vec<f64>> {
        let maxs = self.aggregate_column(col_idx, f64::NEG_INFINITY, max)?;
        self.mask_empty(col_idx, maxs)
    }

    /// Sample variance per cell position; NaN with fewer than two values.
    pub fn var(&self, col_idx: usize) -> Result<Vec<f64>> {
        let means = self.mean(col_idx)?;
        let counts = self.count(col_idx)?;
        let csz = means.len();
        let dev = self.aggregate_column(col_idx, 0.0, |k, val, acc| {
            let d = val - means[k % csz];
            acc + d * d
        })?;
        Ok(dev
            .iter()
            .zip(&counts)
            .map(|(ss, n)| if *n > 1.0 { ss / (n - 1.0) } else { f64::NAN })
            .collect())
    }

    /// Sample standard deviation per cell position.
    pub fn std(&self, col_idx: usize) -> Result<Vec<f64>> {
        Ok(self.var(col_idx)?.into_iter().map(f64::sqrt).collect())
    }

    fn mask_empty(&self, col_idx: usize, mut agg: Vec<f64>) -> Result<Vec<f64>> {
        let counts = self.count(col_idx)?;
        for (a, n) in agg.iter_mut().zip(counts) {
            if n == 0.0 {
                *a = f64::NAN;
            }
        }
        Ok(agg)
    }
}
