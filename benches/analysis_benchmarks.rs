//! Benchmarks for CoFFE table analysis
//!
//! Covers reading and analyzing the ARP4761 landing table, and the scaling of
//! the minimizer on synthetic tables with every F/O combination of n columns.

use coffe_analyzer::{analyze, AnalysisConfig, MinimizerConfig, Table, DEFAULT_DELIMITER};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::fs;
use std::path::PathBuf;

const ARP_HEADERS: [&str; 4] = ["WBrake", "GrndSpoiler", "ThrustRev", "Flap"];

fn arp_content() -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/test_files/table_q_4_6.csv");
    fs::read_to_string(path).unwrap()
}

/// Every F/O combination of `n` columns; rows with at least two failures lead
/// to "Loss", one failure to "Degraded", none to "Nominal"
fn synthetic_table(n: usize) -> Table {
    let columns: Vec<String> = (0..n).map(|i| format!("S{}", i)).collect();
    let mut table = Table::new(columns.as_slice()).unwrap();
    for mask in 0..1usize << n {
        let states: Vec<&str> = (0..n)
            .map(|i| if mask & (1 << i) != 0 { "F" } else { "O" })
            .collect();
        let outcome = match mask.count_ones() {
            0 => "Nominal",
            1 => "Degraded",
            _ => "Loss",
        };
        table.add_row(states.as_slice(), outcome).unwrap();
    }
    table
}

/// Benchmark: Read the ARP4761 table from text
fn bench_read(c: &mut Criterion) {
    let content = arp_content();
    let mut group = c.benchmark_group("read_table");
    group.throughput(Throughput::Elements(81));
    group.bench_function("table_q_4_6", |b| {
        b.iter(|| {
            let table = Table::from_str_with_delimiter(black_box(&content), DEFAULT_DELIMITER)
                .unwrap();
            black_box(table);
        });
    });
    group.finish();
}

/// Benchmark: Full pipeline on the ARP4761 table, factorised and flat
fn bench_arp_analysis(c: &mut Criterion) {
    let table = Table::from_str_with_delimiter(&arp_content(), DEFAULT_DELIMITER).unwrap();
    let config = AnalysisConfig::new()
        .ignore_states(["O"])
        .custom_headers(ARP_HEADERS);
    let flat = config.clone().minimizer(MinimizerConfig {
        factorise: false,
        ..MinimizerConfig::default()
    });

    let mut group = c.benchmark_group("arp4761_analysis");
    group.throughput(Throughput::Elements(table.num_rows() as u64));
    for (name, config) in [("factorised", &config), ("flat", &flat)] {
        group.bench_with_input(BenchmarkId::new("analyze", name), config, |b, config| {
            b.iter(|| {
                let analysis = analyze(black_box(&table), config).unwrap();
                black_box(analysis);
            });
        });
    }
    group.finish();
}

/// Benchmark: Minimizer scaling with the number of columns
fn bench_scaling(c: &mut Criterion) {
    let config = AnalysisConfig::new()
        .ignore_states(["O"])
        .ignore_results(["Nominal"]);

    let mut group = c.benchmark_group("scaling");
    for n in [4, 6, 8, 10] {
        let table = synthetic_table(n);
        group.throughput(Throughput::Elements(table.num_rows() as u64));
        group.bench_with_input(BenchmarkId::new("columns", n), &table, |b, table| {
            b.iter(|| {
                let analysis = analyze(black_box(table), &config).unwrap();
                black_box(analysis);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_read, bench_arp_analysis, bench_scaling);
criterion_main!(benches);
