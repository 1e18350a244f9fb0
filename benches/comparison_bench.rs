use criterion::{criterion_group, criterion_main, Criterion};
use grid_astar::{
    AstarSearch, Board, Frontier, Heuristic, Point, SearchConfig, SortedFrontier,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

const N_SCENARIOS: usize = 32;

/// A random board with obstacle density `p` and start/goal pairs that are connected.
fn random_scenarios(w: usize, h: usize, p: f64, seed: u64) -> (Board, Vec<(Point, Point)>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new(w, h);
    for point in board.points().collect::<Vec<_>>() {
        board.set_obstacle(point, rng.gen_bool(p));
    }
    board.update();
    let random_free = |rng: &mut StdRng| loop {
        let point = Point::new(rng.gen_range(0..w as i32), rng.gen_range(0..h as i32));
        if board.is_expandable(point) {
            return point;
        }
    };
    let mut scenarios = Vec::new();
    while scenarios.len() < N_SCENARIOS {
        let start = random_free(&mut rng);
        let goal = random_free(&mut rng);
        if board.reachable(&start, &goal) {
            scenarios.push((start, goal));
        }
    }
    (board, scenarios)
}

fn bench_search<F: Frontier>(
    c: &mut Criterion,
    name: &str,
    mut searcher: AstarSearch<F>,
    board: &Board,
    scenarios: &[(Point, Point)],
) {
    c.bench_function(name, |b| {
        b.iter(|| {
            for (start, goal) in scenarios {
                black_box(searcher.run(board.clone(), *start, *goal).ok());
            }
        })
    });
}

fn frontier_bench(c: &mut Criterion) {
    for (name, density) in [("open", 0.0), ("cluttered", 0.3)] {
        let (board, scenarios) = random_scenarios(64, 64, density, 0);
        bench_search(
            c,
            &format!("{name} 64x64, heap frontier"),
            AstarSearch::new(SearchConfig::default()),
            &board,
            &scenarios,
        );
        bench_search(
            c,
            &format!("{name} 64x64, sorted frontier"),
            AstarSearch::with_frontier(SearchConfig::default(), SortedFrontier::new()),
            &board,
            &scenarios,
        );
    }
}

fn heuristic_bench(c: &mut Criterion) {
    let (board, scenarios) = random_scenarios(128, 128, 0.3, 1);
    for (name, heuristic) in [("Manhattan", Heuristic::Manhattan), ("zero", Heuristic::Zero)] {
        bench_search(
            c,
            &format!("cluttered 128x128, {name} heuristic"),
            AstarSearch::new(SearchConfig {
                heuristic,
                ..Default::default()
            }),
            &board,
            &scenarios,
        );
    }
    bench_search(
        c,
        "cluttered 128x128, first discovery cost",
        AstarSearch::new(SearchConfig {
            update_open: false,
            ..Default::default()
        }),
        &board,
        &scenarios,
    );
}

criterion_group!(benches, frontier_bench, heuristic_bench);
criterion_main!(benches);
