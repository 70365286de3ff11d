use wl_iso::prelude::*;
use wl_iso::backtrack::backtrack_degree;
use testing::{GraphIter, randomize_labels};

use criterion::{BatchSize, black_box, criterion_group, criterion_main, Criterion};
use rand::prelude::*;
use rand_xoshiro::Xoshiro256Plus;

fn iso_wl(graphs: impl IntoIterator<Item = (AdjGraph, AdjGraph)>) -> bool {
    graphs.into_iter().all(|(g, h)| find_isomorphism(&g, &h).is_some())
}

fn iso_backtrack(graphs: impl IntoIterator<Item = (AdjGraph, AdjGraph)>) -> bool {
    graphs.into_iter().all(|(g, h)| backtrack_degree(&g, &h).is_some())
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = Xoshiro256Plus::seed_from_u64(0);

    let graphs = Vec::from_iter(
        GraphIter::default()
            .take(1000)
            .map(|g| {
                let h = randomize_labels(g.clone(), &mut rng);
                (AdjGraph::from(&g), AdjGraph::from(&h))
            }),
    );
    let g = graphs.clone();
    c.bench_function("refinement", move |b| {
        b.iter_batched(|| g.clone(), |g| iso_wl(black_box(g)), BatchSize::SmallInput)
    });
    c.bench_function("degree backtracking", move |b| {
        b.iter_batched(|| graphs.clone(), |g| iso_backtrack(black_box(g)), BatchSize::SmallInput)
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
