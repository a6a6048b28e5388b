//! Symbol table benchmarks
//!
//! These benchmarks measure the cost of lookup-or-insert.
//! Run with: `cargo bench --bench symbol_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lexc_util::{Constant, SymbolTable};

/// Benchmark interning identifiers
fn bench_intern(c: &mut Criterion) {
    let mut group = c.benchmark_group("intern");
    group.throughput(Throughput::Elements(1));

    // New lexeme every iteration (miss)
    group.bench_function("intern_new_identifier", |b| {
        let mut table = SymbolTable::new();
        let mut counter = 0u64;
        b.iter(|| {
            counter += 1;
            table.intern(format!("ident_{}", counter))
        })
    });

    // Same lexeme every iteration (hit)
    group.bench_function("intern_existing_identifier", |b| {
        let mut table = SymbolTable::new();
        table.intern("existing".to_string());
        b.iter(|| black_box(table.intern(black_box("existing".to_string()))))
    });

    group.bench_function("intern_existing_constant", |b| {
        let mut table = SymbolTable::new();
        table.intern(Constant::new(3.25));
        b.iter(|| black_box(table.intern(black_box(Constant::new(3.25)))))
    });

    group.finish();
}

/// Benchmark filling tables of growing size
fn bench_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill");

    for size in [16usize, 256, 4096] {
        let lexemes: Vec<String> = (0..size).map(|i| format!("v{}", i % (size / 2))).collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &lexemes, |b, lexemes| {
            b.iter(|| {
                let table: SymbolTable<String> = lexemes.iter().cloned().collect();
                black_box(table.len())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_intern, bench_fill);
criterion_main!(benches);
