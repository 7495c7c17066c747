/// Indexed View Implementation
///
/// An [`IndexView`] is an overlay on a [`Table`]: a borrowed reference to the
/// table plus an ordered list of physical row numbers. Sorting and filtering
/// only rewrite that list; the table is never touched. Call
/// [`IndexView::to_table`] to get a table whose storage follows the view order.
use crate::column::{ColumnValue, ElementKind};
use crate::error::{Result, TableError};
use crate::table::Table;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::str::FromStr;

/// Direction applied to every key of a sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Ascending order (smallest first)
    #[default]
    Ascending,
    /// Descending order (largest first)
    Descending,
}

impl SortOrder {
    fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ord,
            SortOrder::Descending => ord.reverse(),
        }
    }
}

impl From<bool> for SortOrder {
    /// `true` is ascending.
    fn from(ascending: bool) -> Self {
        if ascending {
            SortOrder::Ascending
        } else {
            SortOrder::Descending
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    /// Accepts: "asc", "ascending", "desc", "descending"
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            "desc" | "descending" => Ok(SortOrder::Descending),
            _ => Err(format!(
                "Unknown sort order: '{}'. Use 'ascending' or 'descending'",
                s
            )),
        }
    }
}

/// Values of one scalar column, resolved once per sort.
enum SortColumn<'t> {
    Numeric(Cow<'t, [f64]>),
    String(&'t [String]),
}

impl<'t> SortColumn<'t> {
    fn resolve(table: &'t Table, col_idx: usize) -> Result<Self> {
        let col = table.column(col_idx)?;
        let cell_size = col.cell_size();
        if cell_size != 1 {
            return Err(TableError::NotScalarColumn {
                column: col.name().to_string(),
                cell_size,
            });
        }
        match (col.kind(), col.strings()) {
            (ElementKind::String, Some(values)) => Ok(SortColumn::String(values)),
            _ => Ok(SortColumn::Numeric(col.floats())),
        }
    }

    /// Rows must already be validated against the table.
    #[inline]
    fn compare(&self, a: usize, b: usize) -> Ordering {
        match self {
            SortColumn::Numeric(values) => values[a].total_cmp(&values[b]),
            SortColumn::String(values) => values[a].cmp(&values[b]),
        }
    }
}

/// An indexed view onto a [`Table`].
///
/// The view borrows the table, so the table outlives every view over it and
/// cannot change while a view exists. Cloning a view copies its indices and
/// shares the table.
///
/// # Examples
///
/// ```
/// use rowview::{IndexView, Table, Schema, ColumnType, ColumnValue, SortOrder};
/// use std::collections::HashMap;
///
/// let schema = Schema::new(vec![
///     ("name".to_string(), ColumnType::String, false),
///     ("score".to_string(), ColumnType::Int32, false),
/// ]);
/// let mut table = Table::new("students".to_string(), schema);
/// for (name, score) in [("Bob", 85), ("Alice", 92), ("Carol", 60)] {
///     let mut row = HashMap::new();
///     row.insert("name".to_string(), ColumnValue::String(name.to_string()));
///     row.insert("score".to_string(), ColumnValue::Int32(score));
///     table.append_row(row).unwrap();
/// }
///
/// let mut view = IndexView::from_table(&table);
/// view.filter(|t, row| t.get_value(row, "score").unwrap().as_i32() > Some(70));
/// view.sort_by_column(1, SortOrder::Descending).unwrap();
///
/// assert_eq!(view.indices(), &[1, 0]);
/// assert_eq!(view.get_value(0, "name").unwrap().as_string(), Some("Alice"));
/// ```
#[derive(Debug, Clone)]
pub struct IndexView<'a> {
    table: &'a Table,
    /// indices[logical_row] = physical_row
    indices: Vec<usize>,
}

impl<'a> IndexView<'a> {
    /// Creates a view over every row of `table`, in table order.
    pub fn from_table(table: &'a Table) -> Self {
        IndexView {
            table,
            indices: (0..table.len()).collect(),
        }
    }

    /// Points the view at another table and resets to sequential indices.
    pub fn set_table(&mut self, table: &'a Table) {
        self.table = table;
        self.sequential();
    }

    /// Resets the indices to `0..rows`.
    pub fn sequential(&mut self) {
        self.indices.clear();
        self.indices.extend(0..self.table.len());
    }

    pub fn table(&self) -> &'a Table {
        self.table
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Appends a physical row. The row is not checked against the table;
    /// operations that read through the view report it as `RowOutOfRange`.
    pub fn add_index(&mut self, row: usize) {
        self.indices.push(row);
    }

    /// Number of logical rows.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Physical row behind logical row `index`.
    pub fn physical_row(&self, index: usize) -> Option<usize> {
        self.indices.get(index).copied()
    }

    /// Swaps two logical rows.
    ///
    /// # Panics
    ///
    /// Panics if either index is `>= len()`.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.indices.swap(i, j);
    }

    /// Physical rows in logical order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    /// Value of a scalar column at logical row `row`.
    pub fn get_value(&self, row: usize, column: &str) -> Result<ColumnValue> {
        let physical = self.physical_row(row).ok_or(TableError::RowOutOfRange {
            row,
            rows: self.len(),
        })?;
        self.table.get_value(physical, column)
    }

    /// Checks that every index refers to a row of the table.
    pub fn validate(&self) -> Result<()> {
        let rows = self.table.len();
        match self.indices.iter().find(|&&row| row >= rows) {
            Some(&row) => Err(TableError::RowOutOfRange { row, rows }),
            None => Ok(()),
        }
    }

    fn sort_indices_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(usize, usize) -> Ordering,
    {
        self.indices.sort_by(|&a, &b| compare(a, b));
        debug!(
            "sorted view over '{}' ({} rows)",
            self.table.name(),
            self.indices.len()
        );
    }

    /// Stable sort with a caller-supplied "less" function.
    ///
    /// `less` receives the table and two physical row numbers (already
    /// projected through the indices). Rows where neither is less than the
    /// other keep their relative order, so sorts can be chained from the least
    /// to the most significant key.
    pub fn sort_by<F>(&mut self, mut less: F)
    where
        F: FnMut(&Table, usize, usize) -> bool,
    {
        let table = self.table;
        self.sort_indices_by(|a, b| {
            if less(table, a, b) {
                Ordering::Less
            } else if less(table, b, a) {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        });
    }

    /// Sorts by one scalar column.
    ///
    /// String columns compare lexicographically, everything else as `f64`
    /// using a total order (NaN sorts after all numbers when ascending).
    /// Null elements compare by their stored default value.
    pub fn sort_by_column(&mut self, col_idx: usize, order: SortOrder) -> Result<()> {
        let key = SortColumn::resolve(self.table, col_idx)?;
        self.validate()?;
        self.sort_indices_by(|a, b| order.apply(key.compare(a, b)));
        Ok(())
    }

    /// Sorts by several scalar columns, first column most significant.
    ///
    /// One direction applies to every key; a key is consulted only when all
    /// previous keys compare equal.
    pub fn sort_by_columns(&mut self, col_idxs: &[usize], order: SortOrder) -> Result<()> {
        let keys = col_idxs
            .iter()
            .map(|&ci| SortColumn::resolve(self.table, ci))
            .collect::<Result<Vec<_>>>()?;
        self.validate()?;
        self.sort_indices_by(|a, b| {
            keys.iter()
                .map(|key| key.compare(a, b))
                .find(|ord| *ord != Ordering::Equal)
                .map_or(Ordering::Equal, |ord| order.apply(ord))
        });
        Ok(())
    }

    /// Keeps only the rows for which `keep(table, physical_row)` is true.
    ///
    /// Retained rows keep their relative order. Filtering never re-adds rows,
    /// so repeated calls narrow the view further.
    pub fn filter<F>(&mut self, mut keep: F)
    where
        F: FnMut(&Table, usize) -> bool,
    {
        let table = self.table;
        let before = self.indices.len();
        self.indices.retain(|&row| keep(table, row));
        debug!(
            "filtered view over '{}': {} -> {} rows",
            table.name(),
            before,
            self.indices.len()
        );
    }

    /// Builds a new table with the same schema whose rows follow the view
    /// order. Whole cells are copied, so multi-dimensional columns keep their
    /// per-row structure. An empty view yields a zero-row table.
    pub fn to_table(&self) -> Result<Table> {
        self.validate()?;
        let rows = self.indices.len();
        let mut out = Table::with_rows(
            self.table.name().to_string(),
            self.table.schema().clone(),
            rows,
        );
        if rows == 0 {
            return Ok(out);
        }

        for (ci, src) in self.table.columns().iter().enumerate() {
            let dst = out.column_mut(ci)?;
            let csz = src.cell_size();
            for (i, &row) in self.indices.iter().enumerate() {
                dst.copy_cells_from(src, i * csz, row * csz, csz)?;
            }
            trace!("copied column '{}' ({} x {})", src.name(), rows, csz);
        }
        debug!(
            "materialized view over '{}' into {} rows",
            self.table.name(),
            rows
        );
        Ok(out)
    }
}
