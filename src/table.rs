/// Table Implementation
///
/// A Table is an ordered collection of named columns that share one row count.
/// Columns may be multi-dimensional: each row then owns a fixed-shape cell of
/// elements (see [`Column`]).
///
/// # Examples
///
/// ```
/// use rowview::{Table, Schema, ColumnType, ColumnValue};
/// use std::collections::HashMap;
///
/// let schema = Schema::new(vec![
///     ("id".to_string(), ColumnType::Int32, false),
///     ("name".to_string(), ColumnType::String, false),
///     ("age".to_string(), ColumnType::Int32, true),
/// ]);
///
/// let mut table = Table::new("users".to_string(), schema);
///
/// let mut row = HashMap::new();
/// row.insert("id".to_string(), ColumnValue::Int32(1));
/// row.insert("name".to_string(), ColumnValue::String("Alice".to_string()));
/// row.insert("age".to_string(), ColumnValue::Int32(30));
/// table.append_row(row).unwrap();
///
/// assert_eq!(table.len(), 1);
/// assert_eq!(table.get_value(0, "name").unwrap().as_string(), Some("Alice"));
/// ```
use crate::column::{Column, ColumnType, ColumnValue};
use crate::error::{Result, TableError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Name, type and cell shape of one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub name: String,
    pub column_type: ColumnType,
    pub nullable: bool,
    /// Per-row cell dimensions; empty for scalar columns.
    #[serde(default)]
    pub cell_shape: Vec<usize>,
}

impl ColumnSpec {
    pub fn scalar(name: impl Into<String>, column_type: ColumnType, nullable: bool) -> Self {
        ColumnSpec {
            name: name.into(),
            column_type,
            nullable,
            cell_shape: Vec::new(),
        }
    }

    pub fn tensor(
        name: impl Into<String>,
        column_type: ColumnType,
        nullable: bool,
        cell_shape: Vec<usize>,
    ) -> Self {
        ColumnSpec {
            name: name.into(),
            column_type,
            nullable,
            cell_shape,
        }
    }

    pub fn cell_size(&self) -> usize {
        self.cell_shape.iter().product()
    }
}

/// Schema definition with column names, types and cell shapes.
///
/// # Examples
///
/// ```
/// use rowview::{Schema, ColumnSpec, ColumnType};
///
/// let schema = Schema::from_specs(vec![
///     ColumnSpec::scalar("trial", ColumnType::Int32, false),
///     ColumnSpec::tensor("output", ColumnType::Float32, false, vec![4, 4]),
/// ]);
///
/// assert_eq!(schema.len(), 2);
/// assert_eq!(schema.get_column_index("output"), Some(1));
/// assert_eq!(schema.get_column_info(1).unwrap().cell_size(), 16);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    columns: Vec<ColumnSpec>,
}

impl Schema {
    /// Creates a schema of scalar columns.
    ///
    /// # Arguments
    ///
    /// * `columns` - Vector of tuples: (column_name, column_type, is_nullable)
    pub fn new(columns: Vec<(String, ColumnType, bool)>) -> Self {
        Schema {
            columns: columns
                .into_iter()
                .map(|(name, ty, nullable)| ColumnSpec::scalar(name, ty, nullable))
                .collect(),
        }
    }

    pub fn from_specs(columns: Vec<ColumnSpec>) -> Self {
        Schema { columns }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    pub fn get_column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn get_column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    pub fn get_column_info(&self, index: usize) -> Option<&ColumnSpec> {
        self.columns.get(index)
    }

    pub fn get_column_type(&self, name: &str) -> Option<ColumnType> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.column_type)
    }
}

/// Root table owning its column data.
///
/// Views ([`crate::IndexView`]) borrow a table immutably; all reordering lives
/// in the view, never in the table.
#[derive(Clone, PartialEq)]
pub struct Table {
    name: String,
    schema: Schema,
    columns: Vec<Column>,
    row_count: usize,
}

impl Table {
    /// Create an empty table.
    pub fn new(name: String, schema: Schema) -> Self {
        Self::with_rows(name, schema, 0)
    }

    /// Create a table with `rows` zeroed, non-null rows.
    pub fn with_rows(name: String, schema: Schema, rows: usize) -> Self {
        let columns = schema
            .columns
            .iter()
            .map(|spec| {
                let mut shape = Vec::with_capacity(spec.cell_shape.len() + 1);
                shape.push(rows);
                shape.extend_from_slice(&spec.cell_shape);
                Column::with_shape(spec.name.clone(), spec.column_type, spec.nullable, shape)
            })
            .collect();

        Table {
            name,
            schema,
            columns,
            row_count: rows,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.row_count
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Bounds-checked column access.
    pub fn column(&self, index: usize) -> Result<&Column> {
        self.columns.get(index).ok_or(TableError::ColumnOutOfRange {
            index,
            len: self.columns.len(),
        })
    }

    pub(crate) fn column_mut(&mut self, index: usize) -> Result<&mut Column> {
        let len = self.columns.len();
        self.columns
            .get_mut(index)
            .ok_or(TableError::ColumnOutOfRange { index, len })
    }

    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.schema
            .get_column_index(name)
            .ok_or_else(|| TableError::ColumnNotFound(name.to_string()))
    }

    pub fn column_by_name(&self, name: &str) -> Result<&Column> {
        self.column(self.column_index(name)?)
    }

    /// Grows every column by `n` zeroed rows.
    pub fn add_rows(&mut self, n: usize) {
        self.set_rows(self.row_count + n);
    }

    /// Resizes every column to `rows` rows.
    pub fn set_rows(&mut self, rows: usize) {
        for col in &mut self.columns {
            col.set_rows(rows);
        }
        self.row_count = rows;
    }

    fn check_row(&self, row: usize) -> Result<()> {
        if row >= self.row_count {
            return Err(TableError::RowOutOfRange {
                row,
                rows: self.row_count,
            });
        }
        Ok(())
    }

    fn scalar_column_index(&self, column: &str) -> Result<usize> {
        let col_idx = self.column_index(column)?;
        check_scalar(&self.columns[col_idx])?;
        Ok(col_idx)
    }

    /// Value of a scalar column at `row`.
    pub fn get_value(&self, row: usize, column: &str) -> Result<ColumnValue> {
        self.check_row(row)?;
        let col_idx = self.scalar_column_index(column)?;
        self.columns[col_idx].get(row)
    }

    /// Get a value by column index (faster than get_value when column index is known).
    #[inline]
    pub fn get_value_by_index(&self, row: usize, col_idx: usize) -> Result<ColumnValue> {
        self.check_row(row)?;
        let col = self.column(col_idx)?;
        check_scalar(col)?;
        col.get(row)
    }

    pub fn set_value(&mut self, row: usize, column: &str, value: ColumnValue) -> Result<()> {
        self.check_row(row)?;
        let col_idx = self.scalar_column_index(column)?;
        self.columns[col_idx].set(row, value)
    }

    /// All elements of the cell at `row`, in flat order.
    pub fn get_cell(&self, row: usize, column: &str) -> Result<Vec<ColumnValue>> {
        self.check_row(row)?;
        let col = self.column_by_name(column)?;
        let csz = col.cell_size();
        (row * csz..(row + 1) * csz).map(|i| col.get(i)).collect()
    }

    /// Overwrites the whole cell at `row`; `values.len()` must equal the cell size.
    /// Every value is checked before the first write, so on error the cell is unchanged.
    pub fn set_cell(&mut self, row: usize, column: &str, values: Vec<ColumnValue>) -> Result<()> {
        self.check_row(row)?;
        let col_idx = self.column_index(column)?;
        let col = self.column_mut(col_idx)?;
        let csz = col.cell_size();
        if values.len() != csz {
            return Err(TableError::ShapeMismatch {
                expected: csz,
                actual: values.len(),
            });
        }
        for value in &values {
            col.check_value(value)?;
        }
        for (j, value) in values.into_iter().enumerate() {
            col.set(row * csz + j, value)?;
        }
        Ok(())
    }

    /// Appends one row to a table of scalar columns.
    /// On error the table is left unchanged.
    pub fn append_row(&mut self, row: HashMap<String, ColumnValue>) -> Result<()> {
        for spec in &self.schema.columns {
            if !row.contains_key(&spec.name) {
                return Err(TableError::MissingValue(spec.name.clone()));
            }
            if spec.cell_size() != 1 {
                return Err(TableError::NotScalarColumn {
                    column: spec.name.clone(),
                    cell_size: spec.cell_size(),
                });
            }
        }

        let values: Vec<ColumnValue> = self
            .schema
            .columns
            .iter()
            .map(|spec| row[&spec.name].clone())
            .collect();

        let index = self.row_count;
        self.add_rows(1);
        let mut result = Ok(());
        for (col, value) in self.columns.iter_mut().zip(values) {
            result = col.set(index, value);
            if result.is_err() {
                break;
            }
        }
        if result.is_err() {
            self.set_rows(index);
        }
        result
    }

    /// Export table to JSON format (array of objects).
    ///
    /// Scalar columns become plain values, multi-dimensional columns become
    /// flat arrays of their cell elements.
    ///
    /// # Example
    ///
    /// ```
    /// use rowview::{Table, Schema, ColumnType, ColumnValue};
    /// use std::collections::HashMap;
    ///
    /// let schema = Schema::new(vec![
    ///     ("id".to_string(), ColumnType::Int32, false),
    ///     ("name".to_string(), ColumnType::String, false),
    /// ]);
    /// let mut table = Table::new("test".to_string(), schema);
    /// let mut row = HashMap::new();
    /// row.insert("id".to_string(), ColumnValue::Int32(1));
    /// row.insert("name".to_string(), ColumnValue::String("Alice".to_string()));
    /// table.append_row(row).unwrap();
    ///
    /// let json = table.to_json().unwrap();
    /// assert!(json.contains("\"id\": 1"));
    /// assert!(json.contains("\"name\": \"Alice\""));
    /// ```
    pub fn to_json(&self) -> Result<String> {
        let mut rows = Vec::with_capacity(self.row_count);
        for row in 0..self.row_count {
            let mut obj = serde_json::Map::new();
            for col in &self.columns {
                let csz = col.cell_size();
                let json_val = if col.shape().len() == 1 {
                    value_to_json(&col.get(row)?)
                } else {
                    let cell = (row * csz..(row + 1) * csz)
                        .map(|i| col.get(i).map(|v| value_to_json(&v)))
                        .collect::<Result<Vec<_>>>()?;
                    serde_json::Value::Array(cell)
                };
                obj.insert(col.name().to_string(), json_val);
            }
            rows.push(serde_json::Value::Object(obj));
        }

        serde_json::to_string_pretty(&rows).map_err(|e| TableError::Json(e.to_string()))
    }
}

fn check_scalar(col: &Column) -> Result<()> {
    let cell_size = col.cell_size();
    if cell_size != 1 {
        return Err(TableError::NotScalarColumn {
            column: col.name().to_string(),
            cell_size,
        });
    }
    Ok(())
}

fn value_to_json(value: &ColumnValue) -> serde_json::Value {
    match value {
        ColumnValue::Int32(n) => serde_json::Value::Number((*n).into()),
        ColumnValue::Int64(n) => serde_json::Value::Number((*n).into()),
        ColumnValue::Float32(f) => serde_json::Number::from_f64(*f as f64)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        ColumnValue::Float64(f) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        ColumnValue::String(s) => serde_json::Value::String(s.clone()),
        ColumnValue::Bool(b) => serde_json::Value::Bool(*b),
        ColumnValue::Null => serde_json::Value::Null,
    }
}

impl std::fmt::Debug for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Table")
            .field("name", &self.name)
            .field("rows", &self.row_count)
            .field("columns", &self.columns)
            .finish()
    }
}
