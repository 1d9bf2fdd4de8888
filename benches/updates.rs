use criterion::{black_box, criterion_group, criterion_main, Bencher, BenchmarkId, Criterion};
use dynamic_cover::LeveledCoverEngine;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_update(t: &mut LeveledCoverEngine, alive: &mut Vec<(usize, usize)>, rng: &mut StdRng) {
    let n = t.n();
    if alive.is_empty() || rng.gen_bool(0.6) {
        let mut u = rng.gen_range(0..n);
        let mut v = rng.gen_range(0..n - 1);
        if v >= u {
            v += 1;
        } else {
            std::mem::swap(&mut u, &mut v);
        }
        if !t.contains_edge(u, v) {
            t.insert(u, v).unwrap();
            alive.push((u, v));
        }
    } else {
        let idx = rng.gen_range(0..alive.len());
        let (u, v) = alive.swap_remove(idx);
        t.delete(u, v).unwrap();
    }
}

fn update_stream_impl(b: &mut Bencher, seed: u64, n: usize, q: usize) {
    b.iter(|| {
        let mut t = black_box(LeveledCoverEngine::new(n, 0.25));
        let mut alive = vec![];
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..q {
            random_update(&mut t, &mut alive, &mut rng);
        }
        black_box(t.relevel_events())
    });
}

fn update_streams(c: &mut Criterion) {
    let mut g = c.benchmark_group("Random update stream");
    let mut rng = StdRng::seed_from_u64(4815162342);
    for (n, q) in [(50usize, 1000usize), (200, 5000), (1000, 20000)] {
        g.throughput(criterion::Throughput::Elements(q as u64));
        let seed = rng.gen();
        g.bench_with_input(
            BenchmarkId::new("leveled", format!("n {n} updates {q}")),
            &q,
            |b, &q| update_stream_impl(b, seed, n, q),
        );
    }
    g.finish();
}

fn per_update(c: &mut Criterion) {
    let mut g = c.benchmark_group("Per update, settled graph");
    const N: usize = 2000;
    let mut t = LeveledCoverEngine::new(N, 0.25);
    let mut alive = vec![];
    let mut rng = StdRng::seed_from_u64(108);
    for _ in 0..30000 {
        random_update(&mut t, &mut alive, &mut rng);
    }
    g.bench_function("leveled", |b| {
        b.iter(|| random_update(&mut t, &mut alive, &mut rng))
    });
    g.finish();
}

criterion_group!(benches, update_streams, per_update);
criterion_main!(benches);
