use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rowview::*;

fn build_table(size: usize) -> Table {
    let schema = Schema::from_specs(vec![
        ColumnSpec::scalar("id", ColumnType::Int32, false),
        ColumnSpec::scalar("value", ColumnType::Float64, true),
        ColumnSpec::scalar("name", ColumnType::String, false),
        ColumnSpec::tensor("act", ColumnType::Float32, false, vec![4, 4]),
    ]);
    let mut table = Table::with_rows("benchmark".to_string(), schema, size);

    for i in 0..size {
        // Scatter ids so sorting has work to do
        let id = ((i * 7919) % size) as i32;
        table.set_value(i, "id", ColumnValue::Int32(id)).unwrap();
        let value = if i % 10 == 0 {
            ColumnValue::Null
        } else {
            ColumnValue::Float64(i as f64 * 1.5)
        };
        table.set_value(i, "value", value).unwrap();
        table
            .set_value(i, "name", ColumnValue::String(format!("item_{}", id % 97)))
            .unwrap();
        let cell = (0..16).map(|j| ColumnValue::Float32((i + j) as f32)).collect();
        table.set_cell(i, "act", cell).unwrap();
    }
    table
}

fn bench_sort_by_column(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_by_column");

    for size in [100, 1000, 10000].iter() {
        let table = build_table(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let mut view = IndexView::from_table(&table);
                view.sort_by_column(black_box(0), SortOrder::Ascending).unwrap();
                view
            });
        });
    }
    group.finish();
}

fn bench_sort_by_columns(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_by_columns");

    for size in [100, 1000, 10000].iter() {
        let table = build_table(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let mut view = IndexView::from_table(&table);
                view.sort_by_columns(black_box(&[2usize, 0][..]), SortOrder::Descending).unwrap();
                view
            });
        });
    }
    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");

    for size in [100, 1000, 10000].iter() {
        let table = build_table(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let mut view = IndexView::from_table(&table);
                view.filter(|t, row| !t.columns()[1].is_null_at(row));
                view
            });
        });
    }
    group.finish();
}

fn bench_to_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_table");

    for size in [100, 1000, 10000].iter() {
        let table = build_table(*size);
        let mut view = IndexView::from_table(&table);
        view.sort_by_column(0, SortOrder::Descending).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| view.to_table().unwrap());
        });
    }
    group.finish();
}

fn bench_aggregate_column(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate_column");

    for size in [100, 1000, 10000].iter() {
        let table = build_table(*size);
        let view = IndexView::from_table(&table);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let scalar = view.aggregate_column(1, 0.0, agg::sum).unwrap();
                let cells = view.mean(3).unwrap();
                (scalar, cells)
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_sort_by_column,
    bench_sort_by_columns,
    bench_filter,
    bench_to_table,
    bench_aggregate_column,
);

criterion_main!(benches);
