/// Column storage
///
/// A Column is a flat, typed element buffer with a shape `[rows, d1, .., dn]`.
/// The trailing dimensions define the per-row cell: a row owns
/// `cell_size = d1 * .. * dn` contiguous elements starting at `row * cell_size`.
/// Scalar columns have shape `[rows]` and a cell size of 1.
///
/// Nullable columns carry one null flag per flat element. A null element keeps
/// the type's default value in the buffer so that bulk copies stay simple.
use crate::error::{Result, TableError};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt::Debug;
use std::str::FromStr;

/// Column data types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    Int32,
    Int64,
    Float32,
    Float64,
    String,
    Bool,
}

impl ColumnType {
    /// The comparison/aggregation family this type belongs to.
    pub fn kind(&self) -> ElementKind {
        match self {
            ColumnType::String => ElementKind::String,
            _ => ElementKind::Numeric,
        }
    }
}

impl FromStr for ColumnType {
    type Err = String;

    /// Accepts: "int32", "int64", "float32", "float64", "string", "bool"
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "int32" | "i32" => Ok(ColumnType::Int32),
            "int64" | "i64" => Ok(ColumnType::Int64),
            "float32" | "f32" => Ok(ColumnType::Float32),
            "float64" | "f64" => Ok(ColumnType::Float64),
            "string" | "str" => Ok(ColumnType::String),
            "bool" => Ok(ColumnType::Bool),
            _ => Err(format!("Unknown column type: '{}'", s)),
        }
    }
}

/// Element family used to pick a comparison strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementKind {
    Numeric,
    String,
}

/// Column value enum to support multiple types
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValue {
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    String(String),
    Bool(bool),
    Null,
}

impl ColumnValue {
    pub fn is_null(&self) -> bool {
        matches!(self, ColumnValue::Null)
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            ColumnValue::Int32(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ColumnValue::Int64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ColumnValue::Float64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            ColumnValue::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ColumnValue::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

fn parse_f64(s: &str) -> f64 {
    s.trim().parse().unwrap_or(f64::NAN)
}

/// Typed flat element buffer.
#[derive(Debug, Clone, PartialEq)]
enum ColumnData {
    Int32(Vec<i32>),
    Int64(Vec<i64>),
    Float32(Vec<f32>),
    Float64(Vec<f64>),
    String(Vec<String>),
    Bool(Vec<bool>),
}

impl ColumnData {
    fn zeroed(column_type: ColumnType, len: usize) -> Self {
        match column_type {
            ColumnType::Int32 => ColumnData::Int32(vec![0; len]),
            ColumnType::Int64 => ColumnData::Int64(vec![0; len]),
            ColumnType::Float32 => ColumnData::Float32(vec![0.0; len]),
            ColumnType::Float64 => ColumnData::Float64(vec![0.0; len]),
            ColumnType::String => ColumnData::String(vec![String::new(); len]),
            ColumnType::Bool => ColumnData::Bool(vec![false; len]),
        }
    }

    fn len(&self) -> usize {
        match self {
            ColumnData::Int32(v) => v.len(),
            ColumnData::Int64(v) => v.len(),
            ColumnData::Float32(v) => v.len(),
            ColumnData::Float64(v) => v.len(),
            ColumnData::String(v) => v.len(),
            ColumnData::Bool(v) => v.len(),
        }
    }

    fn resize(&mut self, len: usize) {
        match self {
            ColumnData::Int32(v) => v.resize(len, 0),
            ColumnData::Int64(v) => v.resize(len, 0),
            ColumnData::Float32(v) => v.resize(len, 0.0),
            ColumnData::Float64(v) => v.resize(len, 0.0),
            ColumnData::String(v) => v.resize(len, String::new()),
            ColumnData::Bool(v) => v.resize(len, false),
        }
    }

    fn value(&self, index: usize) -> Option<ColumnValue> {
        match self {
            ColumnData::Int32(v) => v.get(index).map(|x| ColumnValue::Int32(*x)),
            ColumnData::Int64(v) => v.get(index).map(|x| ColumnValue::Int64(*x)),
            ColumnData::Float32(v) => v.get(index).map(|x| ColumnValue::Float32(*x)),
            ColumnData::Float64(v) => v.get(index).map(|x| ColumnValue::Float64(*x)),
            ColumnData::String(v) => v.get(index).map(|x| ColumnValue::String(x.clone())),
            ColumnData::Bool(v) => v.get(index).map(|x| ColumnValue::Bool(*x)),
        }
    }

    fn f64_at(&self, index: usize) -> Option<f64> {
        match self {
            ColumnData::Int32(v) => v.get(index).map(|x| *x as f64),
            ColumnData::Int64(v) => v.get(index).map(|x| *x as f64),
            ColumnData::Float32(v) => v.get(index).map(|x| *x as f64),
            ColumnData::Float64(v) => v.get(index).copied(),
            ColumnData::String(v) => v.get(index).map(|x| parse_f64(x)),
            ColumnData::Bool(v) => v.get(index).map(|x| if *x { 1.0 } else { 0.0 }),
        }
    }

    fn accepts(&self, value: &ColumnValue) -> bool {
        matches!(
            (self, value),
            (_, ColumnValue::Null)
                | (ColumnData::Int32(_), ColumnValue::Int32(_))
                | (ColumnData::Int64(_), ColumnValue::Int64(_))
                | (ColumnData::Float32(_), ColumnValue::Float32(_))
                | (ColumnData::Float64(_), ColumnValue::Float64(_))
                | (ColumnData::String(_), ColumnValue::String(_))
                | (ColumnData::Bool(_), ColumnValue::Bool(_))
        )
    }

    /// Writes `value` at `index`. `Null` writes the default element.
    /// Hands the value back when it does not fit the buffer's type.
    fn store(
        &mut self,
        index: usize,
        value: ColumnValue,
    ) -> std::result::Result<(), ColumnValue> {
        match (self, value) {
            (ColumnData::Int32(v), ColumnValue::Int32(x)) => v[index] = x,
            (ColumnData::Int64(v), ColumnValue::Int64(x)) => v[index] = x,
            (ColumnData::Float32(v), ColumnValue::Float32(x)) => v[index] = x,
            (ColumnData::Float64(v), ColumnValue::Float64(x)) => v[index] = x,
            (ColumnData::String(v), ColumnValue::String(x)) => v[index] = x,
            (ColumnData::Bool(v), ColumnValue::Bool(x)) => v[index] = x,
            (ColumnData::Int32(v), ColumnValue::Null) => v[index] = 0,
            (ColumnData::Int64(v), ColumnValue::Null) => v[index] = 0,
            (ColumnData::Float32(v), ColumnValue::Null) => v[index] = 0.0,
            (ColumnData::Float64(v), ColumnValue::Null) => v[index] = 0.0,
            (ColumnData::String(v), ColumnValue::Null) => v[index].clear(),
            (ColumnData::Bool(v), ColumnValue::Null) => v[index] = false,
            (_, value) => return Err(value),
        }
        Ok(())
    }

    /// Copies `n` elements from `src[src_off..]` into `self[dst_off..]`.
    /// Returns false when the buffers hold different types.
    fn copy_from(&mut self, src: &ColumnData, dst_off: usize, src_off: usize, n: usize) -> bool {
        let (d, s) = (dst_off..dst_off + n, src_off..src_off + n);
        match (self, src) {
            (ColumnData::Int32(a), ColumnData::Int32(b)) => a[d].copy_from_slice(&b[s]),
            (ColumnData::Int64(a), ColumnData::Int64(b)) => a[d].copy_from_slice(&b[s]),
            (ColumnData::Float32(a), ColumnData::Float32(b)) => a[d].copy_from_slice(&b[s]),
            (ColumnData::Float64(a), ColumnData::Float64(b)) => a[d].copy_from_slice(&b[s]),
            (ColumnData::String(a), ColumnData::String(b)) => a[d].clone_from_slice(&b[s]),
            (ColumnData::Bool(a), ColumnData::Bool(b)) => a[d].copy_from_slice(&b[s]),
            _ => return false,
        }
        true
    }

    fn floats(&self) -> Cow<'_, [f64]> {
        match self {
            ColumnData::Float64(v) => Cow::Borrowed(v.as_slice()),
            ColumnData::Int32(v) => Cow::Owned(v.iter().map(|x| *x as f64).collect()),
            ColumnData::Int64(v) => Cow::Owned(v.iter().map(|x| *x as f64).collect()),
            ColumnData::Float32(v) => Cow::Owned(v.iter().map(|x| *x as f64).collect()),
            ColumnData::String(v) => Cow::Owned(v.iter().map(|x| parse_f64(x)).collect()),
            ColumnData::Bool(v) => {
                Cow::Owned(v.iter().map(|x| if *x { 1.0 } else { 0.0 }).collect())
            }
        }
    }
}

/// A named, typed, possibly multi-dimensional column.
///
/// # Examples
///
/// ```
/// use rowview::{Column, ColumnType, ColumnValue};
///
/// // Two rows of 2x3 cells
/// let mut col = Column::with_shape("act".to_string(), ColumnType::Float32, false, vec![2, 2, 3]);
/// assert_eq!(col.row_cell_size(), (2, 6));
///
/// col.set(7, ColumnValue::Float32(0.5)).unwrap();
/// assert_eq!(col.get_f64(7), Some(0.5));
/// ```
#[derive(Clone, PartialEq)]
pub struct Column {
    name: String,
    column_type: ColumnType,
    nullable: bool,
    /// `[rows, d1, .., dn]`
    shape: Vec<usize>,
    data: ColumnData,
    null_flags: Option<Vec<bool>>,
}

impl Column {
    /// Creates an empty scalar column.
    pub fn new(name: String, column_type: ColumnType, nullable: bool) -> Self {
        Self::with_shape(name, column_type, nullable, vec![0])
    }

    /// Creates a zero-filled column with the given full shape, rows first.
    /// An empty shape is treated as `[0]`.
    pub fn with_shape(
        name: String,
        column_type: ColumnType,
        nullable: bool,
        mut shape: Vec<usize>,
    ) -> Self {
        if shape.is_empty() {
            shape.push(0);
        }
        let len = shape.iter().product();
        let null_flags = if nullable { Some(vec![false; len]) } else { None };

        Column {
            name,
            column_type,
            nullable,
            shape,
            data: ColumnData::zeroed(column_type, len),
            null_flags,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn column_type(&self) -> ColumnType {
        self.column_type
    }

    pub fn kind(&self) -> ElementKind {
        self.column_type.kind()
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Full shape, rows first.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Shape of a single cell (the trailing dimensions).
    pub fn cell_shape(&self) -> &[usize] {
        &self.shape[1..]
    }

    /// Number of rows (outermost dimension).
    pub fn rows(&self) -> usize {
        self.shape[0]
    }

    /// Total number of flat elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.len() == 0
    }

    /// Number of elements per row.
    pub fn cell_size(&self) -> usize {
        self.cell_shape().iter().product()
    }

    /// `(rows, cell_size)`
    pub fn row_cell_size(&self) -> (usize, usize) {
        (self.rows(), self.cell_size())
    }

    /// Resizes the column to `rows` rows. New cells are zeroed and not null.
    pub fn set_rows(&mut self, rows: usize) {
        self.shape[0] = rows;
        let len = rows * self.cell_size();
        self.data.resize(len);
        if let Some(ref mut null_flags) = self.null_flags {
            null_flags.resize(len, false);
        }
    }

    pub fn get(&self, index: usize) -> Result<ColumnValue> {
        if self.is_null_at(index) {
            return Ok(ColumnValue::Null);
        }
        self.data.value(index).ok_or(TableError::ElementOutOfRange {
            index,
            len: self.len(),
        })
    }

    /// Fast numeric access by flat index.
    /// Returns None if the element is null or out of range. String elements
    /// are parsed and read as NaN when they are not numbers.
    #[inline]
    pub fn get_f64(&self, index: usize) -> Option<f64> {
        if self.is_null_at(index) {
            return None;
        }
        self.data.f64_at(index)
    }

    /// String access by flat index; None for numeric columns and out of range.
    #[inline]
    pub fn get_str(&self, index: usize) -> Option<&str> {
        match &self.data {
            ColumnData::String(v) => v.get(index).map(String::as_str),
            _ => None,
        }
    }

    /// Check if a value at index is null (fast path without cloning).
    #[inline]
    pub fn is_null_at(&self, index: usize) -> bool {
        match self.null_flags {
            Some(ref null_flags) => null_flags.get(index).copied() == Some(true),
            None => false,
        }
    }

    /// Per-element null flags, present only for nullable columns.
    pub fn null_flags(&self) -> Option<&[bool]> {
        self.null_flags.as_deref()
    }

    /// All elements as `f64`. Borrowed for Float64 columns, converted otherwise.
    /// Null elements hold the type's default value; check [`Column::null_flags`].
    pub fn floats(&self) -> Cow<'_, [f64]> {
        self.data.floats()
    }

    /// All elements of a string column.
    pub fn strings(&self) -> Option<&[String]> {
        match &self.data {
            ColumnData::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn set(&mut self, index: usize, value: ColumnValue) -> Result<()> {
        if index >= self.len() {
            return Err(TableError::ElementOutOfRange {
                index,
                len: self.len(),
            });
        }
        let is_null = value.is_null();
        if is_null && !self.nullable {
            return Err(TableError::NotNullable(self.name.clone()));
        }
        if let Err(value) = self.data.store(index, value) {
            return Err(self.type_mismatch(&value));
        }
        if let Some(ref mut null_flags) = self.null_flags {
            null_flags[index] = is_null;
        }
        Ok(())
    }

    /// Checks that `value` could be written to this column without writing it.
    pub fn check_value(&self, value: &ColumnValue) -> Result<()> {
        if value.is_null() && !self.nullable {
            return Err(TableError::NotNullable(self.name.clone()));
        }
        if !self.data.accepts(value) {
            return Err(self.type_mismatch(value));
        }
        Ok(())
    }

    fn type_mismatch(&self, value: &ColumnValue) -> TableError {
        TableError::TypeMismatch {
            column: self.name.clone(),
            expected: self.column_type,
            value: format!("{:?}", value),
        }
    }

    /// Copies `n` contiguous elements (values and null flags) from `src`,
    /// starting at flat offset `src_off`, to this column at `dst_off`.
    pub fn copy_cells_from(
        &mut self,
        src: &Column,
        dst_off: usize,
        src_off: usize,
        n: usize,
    ) -> Result<()> {
        if dst_off + n > self.len() {
            return Err(TableError::ElementOutOfRange {
                index: dst_off + n,
                len: self.len(),
            });
        }
        if src_off + n > src.len() {
            return Err(TableError::ElementOutOfRange {
                index: src_off + n,
                len: src.len(),
            });
        }
        if !self.data.copy_from(&src.data, dst_off, src_off, n) {
            return Err(TableError::TypeMismatch {
                column: self.name.clone(),
                expected: self.column_type,
                value: format!("{:?} column '{}'", src.column_type, src.name),
            });
        }
        if let Some(ref mut null_flags) = self.null_flags {
            let dst = &mut null_flags[dst_off..dst_off + n];
            match src.null_flags {
                Some(ref src_flags) => dst.copy_from_slice(&src_flags[src_off..src_off + n]),
                None => dst.fill(false),
            }
        }
        Ok(())
    }

    pub fn iter(&self) -> ColumnIterator<'_> {
        ColumnIterator {
            column: self,
            index: 0,
        }
    }
}

/// Iterates flat elements in storage order.
pub struct ColumnIterator<'a> {
    column: &'a Column,
    index: usize,
}

impl<'a> Iterator for ColumnIterator<'a> {
    type Item = ColumnValue;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.column.len() {
            None
        } else {
            let result = self.column.get(self.index).ok();
            self.index += 1;
            result
        }
    }
}

impl Debug for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Column {{ name: '{}', type: {:?}, nullable: {}, shape: {:?} }}",
            self.name, self.column_type, self.nullable, self.shape
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scalar(column_type: ColumnType, nullable: bool, rows: usize) -> Column {
        Column::with_shape("test".to_string(), column_type, nullable, vec![rows])
    }

    #[test]
    fn test_column_basic() {
        let mut col = scalar(ColumnType::Int32, false, 3);
        col.set(0, ColumnValue::Int32(10)).unwrap();
        col.set(1, ColumnValue::Int32(20)).unwrap();
        col.set(2, ColumnValue::Int32(30)).unwrap();

        assert_eq!(col.len(), 3);
        assert_eq!(col.rows(), 3);
        assert_eq!(col.cell_size(), 1);
        assert_eq!(col.get(0).unwrap().as_i32(), Some(10));
        assert_eq!(col.get(2).unwrap().as_i32(), Some(30));
        assert_eq!(col.get_f64(1), Some(20.0));
    }

    #[test]
    fn test_column_nullable() {
        let mut col = scalar(ColumnType::Float64, true, 3);
        col.set(0, ColumnValue::Float64(1.5)).unwrap();
        col.set(1, ColumnValue::Null).unwrap();

        assert!(col.get(1).unwrap().is_null());
        assert!(col.is_null_at(1));
        assert!(!col.is_null_at(0));
        assert_eq!(col.get_f64(1), None);
        assert_eq!(col.get_f64(0), Some(1.5));
    }

    #[test]
    fn test_column_rejects_null_when_not_nullable() {
        let mut col = scalar(ColumnType::Int32, false, 1);
        assert_eq!(
            col.set(0, ColumnValue::Null),
            Err(TableError::NotNullable("test".to_string()))
        );
    }

    #[test]
    fn test_column_type_mismatch() {
        let mut col = scalar(ColumnType::Int32, false, 1);
        let err = col.set(0, ColumnValue::String("x".to_string())).unwrap_err();
        assert!(matches!(err, TableError::TypeMismatch { .. }));
    }

    #[test]
    fn test_column_out_of_range() {
        let col = scalar(ColumnType::Float64, false, 2);
        assert_eq!(
            col.get(5),
            Err(TableError::ElementOutOfRange { index: 5, len: 2 })
        );
        assert_eq!(col.get_f64(5), None);
    }

    #[test]
    fn test_column_cell_shape() {
        let mut col = Column::with_shape("grid".to_string(), ColumnType::Float64, false, vec![4, 2, 5]);
        assert_eq!(col.shape(), &[4, 2, 5]);
        assert_eq!(col.cell_shape(), &[2, 5]);
        assert_eq!(col.row_cell_size(), (4, 10));
        assert_eq!(col.len(), 40);

        col.set_rows(6);
        assert_eq!(col.row_cell_size(), (6, 10));
        assert_eq!(col.len(), 60);
    }

    #[test]
    fn test_string_column_access() {
        let mut col = scalar(ColumnType::String, false, 3);
        col.set(0, ColumnValue::String("1.5".to_string())).unwrap();
        col.set(1, ColumnValue::String("pear".to_string())).unwrap();

        assert_eq!(col.kind(), ElementKind::String);
        assert_eq!(col.get_str(1), Some("pear"));
        assert_eq!(col.get_f64(0), Some(1.5));
        assert!(col.get_f64(1).unwrap().is_nan());
        assert_eq!(col.strings().unwrap().len(), 3);
    }

    #[test]
    fn test_floats_borrows_float64() {
        let col = scalar(ColumnType::Float64, false, 3);
        assert!(matches!(col.floats(), Cow::Borrowed(_)));

        let mut ints = scalar(ColumnType::Int64, false, 2);
        ints.set(1, ColumnValue::Int64(7)).unwrap();
        assert_eq!(ints.floats().to_vec(), vec![0.0, 7.0]);
    }

    #[test]
    fn test_copy_cells_from() {
        let mut src = Column::with_shape("v".to_string(), ColumnType::Int32, true, vec![2, 2]);
        src.set(2, ColumnValue::Int32(5)).unwrap();
        src.set(3, ColumnValue::Null).unwrap();

        let mut dst = Column::with_shape("v".to_string(), ColumnType::Int32, true, vec![1, 2]);
        dst.copy_cells_from(&src, 0, 2, 2).unwrap();

        assert_eq!(dst.get(0).unwrap().as_i32(), Some(5));
        assert!(dst.get(1).unwrap().is_null());
    }

    #[test]
    fn test_copy_cells_type_mismatch() {
        let src = scalar(ColumnType::String, false, 1);
        let mut dst = scalar(ColumnType::Float64, false, 1);
        assert!(matches!(
            dst.copy_cells_from(&src, 0, 0, 1),
            Err(TableError::TypeMismatch { expected: ColumnType::Float64, .. })
        ));

        // Same kind, different width.
        let src = scalar(ColumnType::Int32, false, 1);
        let mut dst = scalar(ColumnType::Float32, false, 1);
        let err = dst.copy_cells_from(&src, 0, 0, 1).unwrap_err();
        assert_eq!(
            err,
            TableError::TypeMismatch {
                column: "test".to_string(),
                expected: ColumnType::Float32,
                value: "Int32 column 'test'".to_string(),
            }
        );
    }

    #[test]
    fn test_check_value_does_not_write() {
        let col = scalar(ColumnType::Float64, false, 1);
        assert_eq!(col.check_value(&ColumnValue::Float64(2.0)), Ok(()));
        assert_eq!(
            col.check_value(&ColumnValue::Null),
            Err(TableError::NotNullable("test".to_string()))
        );
        assert_eq!(
            col.check_value(&ColumnValue::Bool(true)),
            Err(TableError::TypeMismatch {
                column: "test".to_string(),
                expected: ColumnType::Float64,
                value: "Bool(true)".to_string(),
            })
        );
        assert_eq!(col.get_f64(0), Some(0.0));
    }

    #[test]
    fn test_iter_walks_cells_in_flat_order() {
        let mut col = Column::with_shape("pair".to_string(), ColumnType::Int64, true, vec![2, 2]);
        col.set(0, ColumnValue::Int64(1)).unwrap();
        col.set(1, ColumnValue::Null).unwrap();
        col.set(3, ColumnValue::Int64(4)).unwrap();

        let values: Vec<ColumnValue> = col.iter().collect();
        assert_eq!(
            values,
            vec![
                ColumnValue::Int64(1),
                ColumnValue::Null,
                ColumnValue::Int64(0),
                ColumnValue::Int64(4),
            ]
        );
        assert_eq!(values[3].as_i64(), Some(4));
        assert_eq!(values[3].as_f64(), None);
    }

    #[test]
    fn test_value_accessors() {
        let mut flags = scalar(ColumnType::Bool, false, 2);
        flags.set(1, ColumnValue::Bool(true)).unwrap();
        assert_eq!(flags.get(0).unwrap().as_bool(), Some(false));
        assert_eq!(flags.get(1).unwrap().as_bool(), Some(true));
        assert_eq!(flags.get_f64(1), Some(1.0));

        let mut floats = scalar(ColumnType::Float64, false, 1);
        floats.set(0, ColumnValue::Float64(2.5)).unwrap();
        assert_eq!(floats.get(0).unwrap().as_f64(), Some(2.5));
        assert_eq!(floats.get(0).unwrap().as_bool(), None);
    }

    #[test]
    fn test_column_type_from_str() {
        assert_eq!("Float64".parse::<ColumnType>(), Ok(ColumnType::Float64));
        assert_eq!("str".parse::<ColumnType>(), Ok(ColumnType::String));
        assert!("decimal".parse::<ColumnType>().is_err());
    }
}
