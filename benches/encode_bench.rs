// benches/encode_bench.rs

//! Argument-encoding benchmarks.
//!
//! Encoding sits on the hot path of every dispatch, so these track the
//! cost of boundary token rendering and of flattening a large `ZADD`.

use bytes::Bytes;
use citrine_client::core::commands::CommandSpec;
use citrine_client::core::commands::zset::{ZAdd, ZRangeByScore};
use citrine_client::core::range::{ScoreBound, ScoreRange};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_score_tokens(c: &mut Criterion) {
    let range = ScoreRange::new(ScoreBound::Exclusive(3.25), ScoreBound::PosInfinity);
    c.bench_function("score_range_tokens", |b| {
        b.iter(|| {
            let min = black_box(&range).min_token().unwrap();
            let max = black_box(&range).max_token().unwrap();
            (min, max)
        })
    });
}

fn bench_zrangebyscore_args(c: &mut Criterion) {
    let command =
        ZRangeByScore::scores_within("bench-zset", ScoreRange::closed(0.0, 1000.0)).with_scores();
    c.bench_function("zrangebyscore_to_args", |b| {
        b.iter(|| black_box(&command).to_args().unwrap())
    });
}

fn bench_zadd_args(c: &mut Criterion) {
    let members: Vec<(f64, Bytes)> = (0..64)
        .map(|i| (i as f64 * 1.5, Bytes::from(format!("member-{i}"))))
        .collect();
    let command = ZAdd::new("bench-zset", members).changed_count();
    c.bench_function("zadd_to_args_64", |b| {
        b.iter(|| black_box(&command).to_args().unwrap())
    });
}

criterion_group!(
    benches,
    bench_score_tokens,
    bench_zrangebyscore_args,
    bench_zadd_args
);
criterion_main!(benches);
