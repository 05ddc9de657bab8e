use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use futures::stream;
use loadstate::prelude::*;
use tokio::runtime::Runtime;

/// Items per second through `proceed` into a watch-backed sink
///
/// Compares a clean run against one that restarts after a session expiry
/// half way through the first attempt.
fn bench_proceed(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline_proceed");
    let runtime = Runtime::new().unwrap();

    for size in [100usize, 10_000] {
        group.bench_with_input(BenchmarkId::new("clean", size), &size, |b, &size| {
            let pipeline = ResultPipeline::new(SharedConnectivity::default());
            b.to_async(&runtime).iter(|| {
                let pipeline = &pipeline;
                async move {
                    let sink = WatchSink::new();
                    let report = pipeline
                        .proceed(&sink, || stream::iter((0..size).map(Ok::<_, SourceError>)))
                        .await;
                    black_box(report);
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("retry_once", size), &size, |b, &size| {
            let pipeline = ResultPipeline::new(SharedConnectivity::default());
            b.to_async(&runtime).iter(|| {
                let pipeline = &pipeline;
                async move {
                    let sink = WatchSink::new();
                    let mut attempt = 0;
                    let report = pipeline
                        .proceed(&sink, || {
                            attempt += 1;
                            let first = attempt == 1;
                            stream::iter((0..size).map(move |i| {
                                if first && i == size / 2 {
                                    Err(SourceError::Api(ApiError::session_expired("expired")))
                                } else {
                                    Ok(i)
                                }
                            }))
                        })
                        .await;
                    black_box(report);
                }
            });
        });
    }

    group.finish();
}

/// Cost of classifying a terminal failure
fn bench_classify(c: &mut Criterion) {
    c.bench_function("classify_unknown_host_offline", |b| {
        b.iter(|| {
            let error = SourceError::UnknownHost("api.example.com".to_string());
            black_box(classify(error, NetworkState::Disconnected))
        });
    });
}

criterion_group!(benches, bench_proceed, bench_classify);
criterion_main!(benches);
