use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use mandala_engine::sim::{play_out, RandomPlayer};
use mandala_engine::{GameRng, GameState, MandalaRules, RulesEngine};

/// Mid-game states reached by short random playouts.
fn gen_states(n: u64) -> Vec<GameState> {
    let rules = MandalaRules::default();
    (0..n)
        .map(|seed| {
            let start = rules.initialize("a", "b", GameRng::new(seed));
            play_out(&rules, start, &mut RandomPlayer::new(seed), 20)
                .last()
                .clone()
        })
        .collect()
}

fn bench_dispatch(c: &mut Criterion) {
    let rules = MandalaRules::default();
    let mut g = c.benchmark_group("mandala_dispatch");

    for &n in &[16u64, 128u64] {
        let states = gen_states(n);
        g.bench_with_input(BenchmarkId::new("legal_actions", n), &states, |b, s| {
            b.iter(|| {
                for state in s {
                    black_box(rules.legal_actions(black_box(state), state.acting_player()));
                }
            })
        });
        g.bench_with_input(BenchmarkId::new("apply_first_legal", n), &states, |b, s| {
            b.iter(|| {
                for state in s {
                    let player = state.acting_player();
                    if let Some(action) = rules.legal_actions(state, player).iter().next() {
                        black_box(rules.apply_action(black_box(state), player, action).ok());
                    }
                }
            })
        });
    }
    g.finish();
}

fn bench_full_game(c: &mut Criterion) {
    let rules = MandalaRules::default();
    c.bench_function("random_playout_full_game", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed += 1;
            let start = rules.initialize("a", "b", GameRng::new(seed));
            black_box(play_out(&rules, start, &mut RandomPlayer::new(seed), 2_000).steps())
        })
    });
}

criterion_group!(benches, bench_dispatch, bench_full_game);
criterion_main!(benches);
