use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use knight_isolation::game_state::game_state::GameState;
use knight_isolation::game_state::grid_types::{CellMove, Player};
use knight_isolation::search::board_scoring::MobilityScorer;
use knight_isolation::search::deadline::{DeadlineMonitor, UnlimitedClock, DEFAULT_TIMER_THRESHOLD};
use knight_isolation::search::iterative_deepening::{search_at_depth, SearchMethod};

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    one: CellMove,
    two: CellMove,
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "center_vs_corner",
        one: CellMove::new(3, 3),
        two: CellMove::new(0, 0),
    },
    BenchCase {
        name: "adjacent_knights",
        one: CellMove::new(2, 2),
        two: CellMove::new(4, 3),
    },
    BenchCase {
        name: "opposite_edges",
        one: CellMove::new(0, 3),
        two: CellMove::new(6, 3),
    },
];

fn bench_state(case: BenchCase) -> GameState {
    let mut state = GameState::new();
    state = state.forecast_move(case.one);
    state.forecast_move(case.two)
}

fn bench_fixed_depth_search(c: &mut Criterion) {
    let clock = UnlimitedClock;
    let monitor = DeadlineMonitor::new(&clock, DEFAULT_TIMER_THRESHOLD);

    for method in [SearchMethod::Minimax, SearchMethod::AlphaBeta] {
        let label = match method {
            SearchMethod::Minimax => "minimax",
            SearchMethod::AlphaBeta => "alpha_beta",
        };
        let mut group = c.benchmark_group(label);

        for case in CASES {
            let state = bench_state(*case);
            for depth in [2u8, 4u8] {
                group.bench_with_input(
                    BenchmarkId::new(case.name, depth),
                    &depth,
                    |b, &depth| {
                        b.iter(|| {
                            let mut nodes = 0u64;
                            let scored = search_at_depth(
                                method,
                                black_box(&state),
                                &MobilityScorer,
                                Player::One,
                                depth,
                                &monitor,
                                &mut nodes,
                            )
                            .expect("unlimited clock never aborts");
                            black_box((scored, nodes))
                        })
                    },
                );
            }
        }

        group.finish();
    }
}

criterion_group!(benches, bench_fixed_depth_search);
criterion_main!(benches);
