use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use thesaurus_engine::db::WordDatabase;
use thesaurus_engine::matcher::{resolve, DEFAULT_THRESHOLD};

fn bench_resolve(c: &mut Criterion) {
    let db = WordDatabase::sample();

    let mut group = c.benchmark_group("resolve");
    for query in ["aberration", "aberation", "xyzzy"] {
        group.bench_with_input(BenchmarkId::from_parameter(query), query, |b, query| {
            b.iter(|| resolve(query, &db, DEFAULT_THRESHOLD));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
