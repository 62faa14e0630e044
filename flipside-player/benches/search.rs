use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use flipside_othello::test_utils::random_playout;
use flipside_othello::{Board, Color};
use flipside_player::score::{FullScore, WeightedScore};
use flipside_player::{Evaluator, Search};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// A midgame position with Black to move.
fn midgame() -> Board {
    let mut rng = StdRng::seed_from_u64(5);
    loop {
        let (board, turn) = random_playout(&mut rng, 20);
        if turn == Color::Black && board.has_legal_move(Color::Black) {
            return board;
        }
    }
}

fn search_benchmark(c: &mut Criterion) {
    let board = midgame();
    let evaluators: [(&str, &dyn Evaluator); 2] = [("full", &FullScore), ("weighted", &WeightedScore)];

    let mut group = c.benchmark_group("search");
    for &(name, evaluator) in evaluators.iter() {
        for depth in 1..=4 {
            group.bench_with_input(BenchmarkId::new(name, depth), &depth, |b, &depth| {
                b.iter(|| {
                    let mut search = Search::new(Color::Black, evaluator);
                    search.best_moves(black_box(&board), depth)
                })
            });
        }
    }
    group.finish();
}

fn score_benchmark(c: &mut Criterion) {
    let board = midgame();
    c.bench_function("score full", |b| {
        b.iter(|| FullScore.score(black_box(&board), Color::Black))
    });
    c.bench_function("score weighted", |b| {
        b.iter(|| WeightedScore.score(black_box(&board), Color::Black))
    });
}

criterion_group!(benches, search_benchmark, score_benchmark);
criterion_main!(benches);
