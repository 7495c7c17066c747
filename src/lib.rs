/// rowview - Indexed views over columnar tables
///
/// A [`Table`] stores named, typed columns whose rows may carry
/// multi-dimensional cells. An [`IndexView`] borrows a table and keeps an
/// ordered list of row indices: sorting, filtering and aggregation work on
/// that list only, and [`IndexView::to_table`] materializes the view order
/// into a fresh table when physically ordered storage is needed.

pub mod error;
pub mod column;
pub mod table;
pub mod view;
pub mod agg;
pub mod metric;

pub use error::{Result, TableError};
pub use column::{Column, ColumnType, ColumnValue, ElementKind};
pub use table::{ColumnSpec, Schema, Table};
pub use view::{IndexView, SortOrder};
pub use agg::AggFunc;
pub use metric::MetricFn;
