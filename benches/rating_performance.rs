//! Performance benchmarks for rating replay

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use elo_ledger::rating::EloCalculator;
use elo_ledger::types::{Match, MatchResult};
use elo_ledger::{EloRankingSystem, RatingSystem};

fn create_bench_system(players: u32, matches: u32) -> EloRankingSystem<Match<u32>> {
    let mut system = EloRankingSystem::default();
    for id in 0..players {
        system.register_player(id).unwrap();
    }

    for i in 0..matches {
        let a = i % players;
        let b = (i * 7 + 3) % players;
        let b = if a == b { (b + 1) % players } else { b };
        let result = match i % 3 {
            0 => MatchResult::PlayerA,
            1 => MatchResult::PlayerB,
            _ => MatchResult::Draw,
        };
        system.record_match(a, b, result).unwrap();
    }
    system
}

fn bench_rating_update(c: &mut Criterion) {
    let calculator = EloCalculator::new(32.0);

    c.bench_function("elo_rating_update", |b| {
        b.iter(|| {
            black_box(calculator.rating_changes(
                black_box(1523.4),
                black_box(1388.9),
                MatchResult::PlayerB,
            ))
        })
    });
}

fn bench_full_replay(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_replay");

    for &(players, matches) in &[(10u32, 100u32), (50, 1_000), (100, 5_000)] {
        let template = (players, matches);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}p_{}m", players, matches)),
            &template,
            |b, &(players, matches)| {
                let mut system = create_bench_system(players, matches);
                b.iter(|| {
                    system.reset_cache();
                    black_box(system.rating_of(&0).unwrap())
                })
            },
        );
    }

    group.finish();
}

fn bench_cached_lookup(c: &mut Criterion) {
    let mut system = create_bench_system(50, 1_000);
    system.rating_of(&0).unwrap();

    c.bench_function("cached_rating_lookup", |b| {
        b.iter(|| black_box(system.rating_of(black_box(&0)).unwrap()))
    });
}

fn bench_append_and_query(c: &mut Criterion) {
    c.bench_function("append_then_query_suffix", |b| {
        let mut system = create_bench_system(50, 1_000);
        let mut i = 0u32;
        b.iter(|| {
            i += 1;
            system
                .record_match(i % 50, (i + 1) % 50, MatchResult::PlayerA)
                .unwrap();
            black_box(system.rating_of(&(i % 50)).unwrap())
        })
    });
}

criterion_group!(
    benches,
    bench_rating_update,
    bench_full_replay,
    bench_cached_lookup,
    bench_append_and_query
);
criterion_main!(benches);
