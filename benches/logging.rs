use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use log_budget::{log_debug, log_error, log_info, RateLimitedLogger, WriterSink};
use std::io;
use std::sync::Arc;
use std::thread;

fn discard_logger(max_errors: u64, debug: bool) -> RateLimitedLogger {
    RateLimitedLogger::builder()
        .with_sink(Arc::new(WriterSink::new(io::sink())))
        .with_max_errors(max_errors)
        .with_debug(debug)
        .build()
        .unwrap()
}

/// Benchmark the cost of each severity on the hot path
fn bench_single_call(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_call");

    let logger = discard_logger(100, true);
    group.bench_function("info", |b| {
        b.iter(|| log_info!(logger, "frame {} took {}us", black_box(1024), black_box(311)))
    });

    let logger = discard_logger(1, false);
    log_error!(logger, "trip");
    group.bench_function("error_silenced", |b| {
        b.iter(|| log_error!(logger, "frame {} dropped", black_box(1024)))
    });

    let logger = discard_logger(100, false);
    group.bench_function("debug_disabled", |b| {
        b.iter(|| log_debug!(logger, "pose {:?}", black_box((0.1f32, 0.2f32, 0.3f32))))
    });

    group.finish();
}

/// Benchmark rendering cost against message length, including truncation
fn bench_message_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("message_length");
    let logger = discard_logger(100, false);

    for len in [16usize, 256, 4096].iter() {
        let payload = "x".repeat(*len);
        group.throughput(Throughput::Bytes(*len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &payload, |b, payload| {
            b.iter(|| log_info!(logger, "{}", black_box(payload)))
        });
    }

    group.finish();
}

/// Benchmark a shared logger under contention
fn bench_concurrent(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent");

    for threads in [2usize, 4, 8].iter() {
        group.throughput(Throughput::Elements((*threads * 1000) as u64));
        group.bench_with_input(
            BenchmarkId::new("info", threads),
            threads,
            |b, &threads| {
                let logger = discard_logger(100, false);
                b.iter(|| {
                    let handles: Vec<_> = (0..threads)
                        .map(|t| {
                            let logger = logger.clone();
                            thread::spawn(move || {
                                for i in 0..1000 {
                                    log_info!(logger, "thread {} iteration {}", t, i);
                                }
                            })
                        })
                        .collect();
                    for handle in handles {
                        handle.join().unwrap();
                    }
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_call,
    bench_message_length,
    bench_concurrent
);
criterion_main!(benches);
