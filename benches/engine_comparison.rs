use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use ferrous_topk::compute::simd_abstraction::vector_engine_description;
use ferrous_topk::{KernelVariant, KnnParams, VectorEngineType, knn_l2sqr};

fn generate_points(len: usize, seed: u64) -> Vec<f32> {
    let mut rng = seed;
    (0..len)
        .map(|_| {
            rng = rng.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (rng >> 40) as f32 / (1u64 << 24) as f32
        })
        .collect()
}

/// Report which engines this build and CPU can run
fn report_engines() {
    eprintln!("\n=== Vector Engines ===");
    for engine in VectorEngineType::compiled() {
        eprintln!("{:<40} available: {}", vector_engine_description(engine), engine.is_available());
    }
    eprintln!("======================\n");
}

/// Same workload on every available engine
fn bench_engine_comparison(c: &mut Criterion) {
    let _ = env_logger::builder().is_test(true).try_init();
    report_engines();

    let dim = 8;
    let n_queries = 4096;
    let n_references = 2048;
    let queries = generate_points(n_queries * dim, 42);
    let references = generate_points(n_references * dim, 123);

    let mut group = c.benchmark_group("engine_comparison");
    group.throughput(Throughput::Elements((n_queries * n_references) as u64));
    group.sample_size(20);

    for engine in VectorEngineType::compiled().into_iter().filter(|e| e.is_available()) {
        for variant in [KernelVariant::Fp32, KernelVariant::Fp32Packed] {
            let params = KnnParams { kernel: Some(variant), engine: Some(engine), ..Default::default() };
            group.bench_with_input(
                BenchmarkId::new(format!("{engine:?}"), variant.name()),
                &params,
                |b, params| b.iter(|| knn_l2sqr(black_box(&queries), black_box(&references), dim, 10, params).unwrap()),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_engine_comparison);
criterion_main!(benches);
