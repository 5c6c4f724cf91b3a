use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use multiway_heap::Arity;
use multiway_heap::IndexMinPQ;
use multiway_heap::Multiway;
use multiway_heap::MultiwayMinPQ;
use multiway_heap::PowerOf2;
use multiway_heap::PowerOf2MinPQ;

const N: u64 = 1 << 16;

fn keys(seed: u64) -> Vec<u64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut keys: Vec<u64> = (0..N).collect();
    keys.shuffle(&mut rng);
    keys
}

fn heap_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("Heap sort");
    let input = keys(0);

    for d in [2usize, 3, 4, 6, 8, 16] {
        let arity = Multiway::new(d).unwrap();
        group.bench_with_input(BenchmarkId::new("multiway", d), &input, |b, input| {
            b.iter(|| {
                let mut pq = MultiwayMinPQ::with_arity(arity);
                pq.extend(input.iter().copied());
                pq.into_iter().fold(0u64, |acc, k| acc ^ k)
            })
        });
    }
    let arity = Multiway::cacheline::<u64>();
    group.bench_with_input(BenchmarkId::new("cacheline", arity.width()), &input, |b, input| {
        b.iter(|| {
            let mut pq = MultiwayMinPQ::with_arity(arity);
            pq.extend(input.iter().copied());
            pq.into_iter().fold(0u64, |acc, k| acc ^ k)
        })
    });
    for p in [1u32, 2, 3, 4] {
        let arity = PowerOf2::new(p).unwrap();
        group.bench_with_input(BenchmarkId::new("power_of_2", 1 << p), &input, |b, input| {
            b.iter(|| {
                let mut pq = PowerOf2MinPQ::with_arity(arity);
                pq.extend(input.iter().copied());
                pq.into_iter().fold(0u64, |acc, k| acc ^ k)
            })
        });
    }
    group.finish();
}

fn bulk_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("Bulk build");
    let input = keys(1);

    for d in [2usize, 4, 6, 8, 16] {
        let arity = Multiway::new(d).unwrap();
        group.bench_with_input(BenchmarkId::new("multiway", d), &input, |b, input| {
            b.iter(|| MultiwayMinPQ::from_vec(arity, input.clone()).len())
        });
    }
    group.finish();
}

/// Insert everything, then lower every key once before draining, like a
/// search that keeps finding better paths.
fn decrease_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("Decrease key");
    let input = keys(2);

    for d in [2usize, 4, 6, 8] {
        let arity = Multiway::new(d).unwrap();
        group.bench_with_input(BenchmarkId::new("indexed", d), &input, |b, input| {
            b.iter(|| {
                let mut pq = IndexMinPQ::with_arity(arity, input.len());
                for (h, &k) in input.iter().enumerate() {
                    pq.insert(h, k + N).unwrap();
                }
                for (h, &k) in input.iter().enumerate() {
                    pq.decrease_key(h, k).unwrap();
                }
                let mut last = 0;
                while let Ok(h) = pq.extract() {
                    last = h;
                }
                last
            })
        });
    }
    group.finish();
}

criterion_group!(benches, heap_sort, bulk_build, decrease_key);
criterion_main!(benches);
