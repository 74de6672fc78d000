//! Criterion benchmarks for cluster_logger_system

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use cluster_logger_system::{LogMessage, Logger, Severity};
use tempfile::TempDir;

fn bench_local_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("local_write");
    group.throughput(Throughput::Elements(1));

    let dir = TempDir::new().expect("Failed to create temp dir");
    let logger = Logger::builder()
        .path(dir.path().join("bench.log"))
        .level(Severity::Info)
        .build()
        .unwrap();

    group.bench_function("info", |b| {
        b.iter(|| logger.write(Severity::Info, black_box("benchmark message")));
    });

    group.bench_function("error", |b| {
        b.iter(|| logger.write(Severity::Error, black_box("benchmark message")));
    });

    group.finish();
}

fn bench_suppressed_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("suppressed_write");
    group.throughput(Throughput::Elements(1));

    let dir = TempDir::new().expect("Failed to create temp dir");
    let logger = Logger::builder()
        .path(dir.path().join("bench.log"))
        .level(Severity::Error)
        .build()
        .unwrap();

    // Filtered out by the threshold: measures the cost of cheap suppression.
    group.bench_function("filtered_info", |b| {
        b.iter(|| logger.write(Severity::Info, black_box("benchmark message")));
    });

    logger.set_level(Severity::None);
    group.bench_function("disabled", |b| {
        b.iter(|| logger.write(Severity::Error, black_box("benchmark message")));
    });

    group.finish();
}

fn bench_message_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("message_formatting");
    group.throughput(Throughput::Elements(1));

    group.bench_function("local", |b| {
        b.iter(|| {
            let message = LogMessage::local(Severity::Info, black_box("benchmark message"));
            message.format_line().unwrap()
        });
    });

    group.bench_function("rank", |b| {
        b.iter(|| {
            let message = LogMessage::from_rank(3, Severity::Warn, black_box("benchmark message"));
            message.format_line().unwrap()
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_local_write,
    bench_suppressed_write,
    bench_message_formatting
);
criterion_main!(benches);
