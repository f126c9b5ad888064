//! Benchmarks for layout-pass performance.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.
#![allow(clippy::expect_used, clippy::unwrap_used)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gridview::render::TextCell;
use gridview::session::GridSession;
use gridview::types::{Column, ColumnWidth, GridConfig};

fn make_columns() -> Vec<Column<u64>> {
    vec![
        Column::new("id", "Id", TextCell::new(|v: &u64| v.to_string()))
            .width(ColumnWidth::Fixed(60.0)),
        Column::new("label", "Label", TextCell::new(|v: &u64| format!("item {v}")))
            .width(ColumnWidth::ContentBased {
                min: 40.0,
                max: 240.0,
                padding: 8.0,
            }),
        Column::new("value", "Value", TextCell::new(|v: &u64| format!("{}", v * 37)))
            .width(ColumnWidth::ContentBased {
                min: 40.0,
                max: 240.0,
                padding: 8.0,
            })
            .sortable_by(|a, b| a.cmp(b)),
        Column::new("fill", "Fill", TextCell::new(|v: &u64| v.to_string()))
            .width(ColumnWidth::Flexible(1.0)),
    ]
}

/// Benchmark a full measurement pass (width resolution + positions) at
/// several dataset sizes. Sampling bounds the cost, so large datasets
/// should stay flat.
fn bench_layout_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_pass");
    for &rows in &[100_u64, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(rows), &rows, |b, &rows| {
            let items: Vec<u64> = (0..rows).collect();
            b.iter(|| {
                let mut session =
                    GridSession::new(make_columns(), items.clone(), GridConfig::default())
                        .expect("valid session");
                session.set_viewport_size(800.0, 600.0);
                session.frame(0.0);
                black_box(session.get_column_width("label"))
            });
        });
    }
    group.finish();
}

/// Benchmark plan building for the realized window on a large dataset.
fn bench_row_plans(c: &mut Criterion) {
    let items: Vec<u64> = (0..100_000).collect();
    let mut session = GridSession::new(make_columns(), items, GridConfig::default())
        .expect("valid session");
    session.set_viewport_size(800.0, 600.0);
    session.frame(0.0);
    session.scroll_to_row(50_000);

    c.bench_function("row_plans_window", |b| {
        b.iter(|| black_box(session.row_plans()))
    });
}

/// Benchmark a sort toggle on a large dataset (no re-measurement).
fn bench_sort_toggle(c: &mut Criterion) {
    let items: Vec<u64> = (0..100_000).rev().collect();
    let mut session = GridSession::new(make_columns(), items, GridConfig::default())
        .expect("valid session");
    session.set_viewport_size(800.0, 600.0);
    session.frame(0.0);

    c.bench_function("sort_toggle_100k", |b| {
        b.iter(|| {
            session.update_sort("value");
            black_box(session.sort_state().direction())
        })
    });
}

criterion_group!(benches, bench_layout_pass, bench_row_plans, bench_sort_toggle);
criterion_main!(benches);
