use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use inmem_fts::core::types::{DocId, Status};
use inmem_fts::{ExecutionPolicy, SearchEngine};
use rand::Rng;

/// Helper to build random document text from a fixed vocabulary.
fn random_text(content_size: usize) -> String {
    let mut rng = rand::thread_rng();
    let words = ["the", "quick", "brown", "fox", "jumps", "over", "lazy", "dog"];
    (0..content_size)
        .map(|_| words[rng.gen_range(0..words.len())])
        .collect::<Vec<_>>()
        .join(" ")
}

fn fresh_engine() -> SearchEngine {
    SearchEngine::new::<_, &str>([]).unwrap()
}

/// Benchmark single document insertion.
fn bench_single_insert(c: &mut Criterion) {
    let mut engine = fresh_engine();
    let mut id = 0i64;
    c.bench_function("single_document_insert", |b| {
        b.iter(|| {
            let text = random_text(100);
            engine
                .add_document(DocId(id), text, Status::Actual, &[])
                .unwrap();
            id += 1;
        });
    });
}

/// Benchmark batch insertion.
fn bench_batch_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_insert");

    for batch_size in [10, 50, 100, 500, 1000].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(batch_size),
            batch_size,
            |b, &batch_size| {
                let mut engine = fresh_engine();
                let mut id = 0i64;

                b.iter(|| {
                    for _ in 0..batch_size {
                        let text = random_text(100);
                        engine
                            .add_document(DocId(id), text, Status::Actual, &[])
                            .unwrap();
                        id += 1;
                    }
                });
            },
        );
    }
    group.finish();
}

/// Benchmark sequential vs parallel scoring.
fn bench_search(c: &mut Criterion) {
    let mut engine = fresh_engine();
    for i in 0..1000 {
        let text = random_text(100);
        engine
            .add_document(DocId(i), text, Status::Actual, &[])
            .unwrap();
    }

    let mut group = c.benchmark_group("search");

    group.bench_function("plus_word_sequential", |b| {
        b.iter(|| {
            let _ = engine
                .find_top_documents(black_box("fox"), ExecutionPolicy::Sequential)
                .unwrap();
        });
    });

    group.bench_function("plus_word_parallel", |b| {
        b.iter(|| {
            let _ = engine
                .find_top_documents(black_box("fox"), ExecutionPolicy::Parallel)
                .unwrap();
        });
    });

    group.bench_function("plus_minus_sequential", |b| {
        b.iter(|| {
            let _ = engine
                .find_top_documents(black_box("quick -lazy"), ExecutionPolicy::Sequential)
                .unwrap();
        });
    });

    group.bench_function("plus_minus_parallel", |b| {
        b.iter(|| {
            let _ = engine
                .find_top_documents(black_box("quick -lazy"), ExecutionPolicy::Parallel)
                .unwrap();
        });
    });

    group.finish();
}

/// Benchmark document removal, sequential vs. parallel.
fn bench_removal(c: &mut Criterion) {
    let mut group = c.benchmark_group("removal");

    group.bench_function("remove_sequential", |b| {
        b.iter_batched(
            || {
                let mut engine = fresh_engine();
                for i in 0..200 {
                    engine
                        .add_document(DocId(i), random_text(100), Status::Actual, &[])
                        .unwrap();
                }
                engine
            },
            |mut engine| {
                for i in 0..200 {
                    engine.remove_document(DocId(i), ExecutionPolicy::Sequential);
                }
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.bench_function("remove_parallel", |b| {
        b.iter_batched(
            || {
                let mut engine = fresh_engine();
                for i in 0..200 {
                    engine
                        .add_document(DocId(i), random_text(100), Status::Actual, &[])
                        .unwrap();
                }
                engine
            },
            |mut engine| {
                for i in 0..200 {
                    engine.remove_document(DocId(i), ExecutionPolicy::Parallel);
                }
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_single_insert,
    bench_batch_insert,
    bench_search,
    bench_removal
);
criterion_main!(benches);
