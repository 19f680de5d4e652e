use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use vev_ranking::{Ranking, Record};

fn bench_insert_stream(c: &mut Criterion) {
    let mut g = c.benchmark_group("vev_ranking_insert");
    for &n in &[256usize, 4096usize] {
        let scores = vev_bench::xorshift_scores(n, 0x1234_5678_9ABC_DEF0);
        g.bench_with_input(BenchmarkId::new("insert_stream", n), &scores, |b, s| {
            b.iter(|| {
                let mut r = Ranking::new();
                for &score in s.iter() {
                    black_box(r.insert(Record::anonymous(black_box(score))));
                }
                r
            })
        });
    }
    g.finish();
}

criterion_group!(benches, bench_insert_stream);
criterion_main!(benches);
