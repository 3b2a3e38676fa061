//! Benchmarks for sorting and cell-content mapping over a large store.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.
#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation
)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gridlayer::{ColumnDescriptor, DataGrid, GridProps, Record, TableStore};

fn columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::new("id", "ID", 60.0),
        ColumnDescriptor::new("nome", "Nome", 200.0),
        ColumnDescriptor::new("idade", "Idade", 80.0),
        ColumnDescriptor::new("ativo", "Ativo", 80.0),
        ColumnDescriptor::new("progresso", "Progresso", 100.0),
        ColumnDescriptor::new("status", "Status", 120.0),
        ColumnDescriptor::new("avatar", "Avatar", 80.0),
        ColumnDescriptor::new("email", "Email", 200.0),
    ]
}

fn records(n: u64) -> Vec<Record> {
    (1..=n)
        .map(|i| {
            Record::new(i)
                .with("nome", format!("Person {}", (i * 7919) % n))
                .with("idade", ((i * 31) % 90) as f64)
                .with("ativo", i % 3 == 0)
                .with("progresso", (i % 101) as f64)
                .with("status", vec!["Ativo".to_string()])
                .with("avatar", format!("https://example.com/{i}.png"))
                .with("email", format!("p{i}@example.com"))
        })
        .collect()
}

/// Sort cycle over the text column
fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");
    for n in [1_000u64, 10_000, 50_000] {
        let rows = records(n);
        group.throughput(Throughput::Elements(n));
        group.bench_with_input(BenchmarkId::new("toggle_sort", n), &rows, |b, rows| {
            b.iter(|| {
                let mut store = TableStore::new(columns(), rows.clone());
                store.sort_by(black_box("nome")).unwrap();
                store.sort_by(black_box("nome")).unwrap();
            });
        });
    }
    group.finish();
}

/// Map one screenful of cells, as the engine does per frame
fn bench_cell_content(c: &mut Criterion) {
    let mut grid = DataGrid::new(GridProps::new(columns(), records(10_000)));
    grid.header_clicked(2);
    let cols = grid.store().columns().len();

    let mut group = c.benchmark_group("cell_content");
    group.throughput(Throughput::Elements((cols * 50) as u64));
    group.bench_function("viewport_50_rows", |b| {
        b.iter(|| {
            for row in 5_000..5_050 {
                for col in 0..cols {
                    black_box(grid.cell_content(col, row));
                }
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_sort, bench_cell_content);
criterion_main!(benches);
