use std::{sync::Arc, time::Instant};

use hexominoes::{
    generate::{unique_expansions, unique_expansions_rayon, ShapeCache},
    polyomino::Polyomino,
};

use crate::{finish_bar, make_bar, EnumerateOpts};

/// Find the largest stored size <= n - 1 to start from.
fn load_cache(cache: &ShapeCache, n: usize) -> (usize, Arc<[Polyomino]>) {
    for i in (2..n).rev() {
        if let Some(shapes) = cache.get(i) {
            println!("Found cache for N = {i}.");
            return (i, shapes);
        }
    }

    println!(
        "No cache found for size <= {}. Starting from N = 1",
        n.saturating_sub(1)
    );

    (1, Arc::from(vec![Polyomino::monomino()]))
}

/// Expand `current`, holding all free polyominoes of `calculate_from`
/// cells, up to size `n`.
fn unique_expansions_from(
    cache: Option<&ShapeCache>,
    n: usize,
    calculate_from: usize,
    mut current: Arc<[Polyomino]>,
    parallel: bool,
) -> Arc<[Polyomino]> {
    let mut i = calculate_from;

    while i < n {
        let bar = make_bar(current.len() as u64);
        bar.set_message(format!("Expanding base polyominoes of N = {i}..."));

        let start = Instant::now();

        let next = if parallel {
            unique_expansions_rayon(&bar, current.iter())
        } else {
            unique_expansions(&bar, current.iter())
        };

        finish_bar(&bar, start.elapsed(), next.len(), i + 1);

        i += 1;

        current = match cache {
            Some(cache) => cache.insert(i, next),
            None => Arc::from(next),
        };
    }

    current
}

fn enumerate_one(cache: Option<&ShapeCache>, n: usize, parallel: bool) {
    if n == 0 {
        println!("Free polyominoes found for N = 0: 0.");
        return;
    }

    let start = Instant::now();

    let shapes = match cache.and_then(|c| c.get(n)) {
        Some(shapes) => {
            println!("Found cache for N = {n}.");
            shapes
        }
        None => {
            let (calculate_from, seed) = match cache {
                Some(cache) => load_cache(cache, n),
                None => (1, Arc::from(vec![Polyomino::monomino()])),
            };

            unique_expansions_from(cache, n, calculate_from, seed, parallel)
        }
    };

    let duration = start.elapsed();

    println!("Free polyominoes found for N = {n}: {}.", shapes.len());
    println!("Duration: {} ms", duration.as_millis());
}

pub fn enumerate(opts: &EnumerateOpts) {
    let cache = (!opts.no_cache).then(ShapeCache::global);

    for n in &opts.n {
        enumerate_one(cache, *n, !opts.no_parallelism);
    }
}
