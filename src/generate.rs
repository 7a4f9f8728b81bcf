//! Enumeration of all free polyominoes of a given size.
//!
//! Every connected shape of N cells is a connected shape of N - 1 cells
//! with one cell added next to it. Expanding every canonical shape of
//! size N - 1 in every possible way, and collapsing the results to their
//! canonical forms, therefore yields every shape of size N exactly once.

use std::sync::{Arc, OnceLock};

use hashbrown::{HashMap, HashSet};
use indicatif::ProgressBar;
use parking_lot::RwLock;

use crate::polyomino::Polyomino;

/// Obtain all free polyominoes with `n` cells, in canonical form and
/// sorted.
///
/// All smaller sizes are recomputed on every call. Use
/// [`generate_cached`] when asking for the same sizes repeatedly.
///
/// Returns an empty list for `n == 0`.
pub fn generate(n: usize) -> Vec<Polyomino> {
    if n == 0 {
        return Vec::new();
    }

    if n == 1 {
        return vec![Polyomino::monomino()];
    }

    let previous = generate(n - 1);
    unique_expansions(&ProgressBar::hidden(), previous.iter())
}

/// Like [`generate`], but reusing and filling the process-wide
/// [`ShapeCache`].
pub fn generate_cached(n: usize) -> Arc<[Polyomino]> {
    ShapeCache::global().get_or_generate(n)
}

/// Obtain a sorted list of the canonical forms of all unique expansions of
/// the items in `from_set`.
///
/// `from_set` should contain every free polyomino of some size exactly
/// once for the output to contain every free polyomino of the next size.
pub fn unique_expansions<'a, I>(progress_bar: &ProgressBar, from_set: I) -> Vec<Polyomino>
where
    I: Iterator<Item = &'a Polyomino> + ExactSizeIterator,
{
    let mut this_level = HashSet::new();

    for value in from_set {
        for expansion in value.expand() {
            this_level.insert(expansion.canonical_form());
        }

        progress_bar.inc(1);
    }

    sorted(this_level)
}

/// Parallel version of [`unique_expansions`].
pub fn unique_expansions_rayon<'a, I>(bar: &ProgressBar, from_set: I) -> Vec<Polyomino>
where
    I: Iterator<Item = &'a Polyomino> + ExactSizeIterator + Clone + Send + Sync,
{
    use rayon::prelude::*;

    if from_set.len() == 0 {
        return Vec::new();
    }

    let available_parallelism = num_cpus::get();

    let chunk_size = (from_set.len() / available_parallelism) + 1;
    let chunks = (from_set.len() + chunk_size - 1) / chunk_size;

    let chunk_iterator = (0..chunks)
        .into_par_iter()
        .map(|v| from_set.clone().skip(v * chunk_size).take(chunk_size));

    let this_level = RwLock::new(HashSet::new());

    chunk_iterator.for_each(|v| {
        for value in v {
            for expansion in value.expand() {
                let canonical = expansion.canonical_form();

                let missing = !this_level.read().contains(&canonical);

                if missing {
                    this_level.write().insert(canonical);
                }
            }

            bar.inc(1);
        }
    });

    sorted(this_level.into_inner())
}

fn sorted(set: HashSet<Polyomino>) -> Vec<Polyomino> {
    let mut out: Vec<_> = set.into_iter().collect();
    out.sort_unstable();
    out
}

/// A store of all free polyominoes per size.
///
/// Once a size is stored it is never replaced, so handed-out lists stay
/// valid for as long as the process runs.
#[derive(Debug, Default)]
pub struct ShapeCache {
    sizes: RwLock<HashMap<usize, Arc<[Polyomino]>>>,
}

impl ShapeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide cache used by [`generate_cached`].
    pub fn global() -> &'static ShapeCache {
        static CACHE: OnceLock<ShapeCache> = OnceLock::new();
        CACHE.get_or_init(ShapeCache::new)
    }

    /// Get the polyominoes of size `n` if they have been stored.
    pub fn get(&self, n: usize) -> Option<Arc<[Polyomino]>> {
        self.sizes.read().get(&n).cloned()
    }

    /// The sizes currently stored, in ascending order.
    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes: Vec<_> = self.sizes.read().keys().copied().collect();
        sizes.sort_unstable();
        sizes
    }

    /// Get the polyominoes of size `n`, generating and storing them and all
    /// missing smaller sizes if needed.
    ///
    /// Generation starts from the largest stored size below `n`.
    pub fn get_or_generate(&self, n: usize) -> Arc<[Polyomino]> {
        if let Some(found) = self.get(n) {
            return found;
        }

        if n == 0 {
            return Arc::from(Vec::new());
        }

        let (mut i, mut current) = match (1..n).rev().find_map(|i| Some((i, self.get(i)?))) {
            Some(found) => found,
            None => (1, self.insert(1, vec![Polyomino::monomino()])),
        };

        while i < n {
            let next = unique_expansions(&ProgressBar::hidden(), current.iter());
            i += 1;
            current = self.insert(i, next);
        }

        current
    }

    /// Store `shapes` as the polyominoes of size `n`.
    ///
    /// If the size was already stored, the stored list is kept and
    /// returned instead.
    pub fn insert(&self, n: usize, shapes: Vec<Polyomino>) -> Arc<[Polyomino]> {
        self.sizes
            .write()
            .entry(n)
            .or_insert_with(|| Arc::from(shapes))
            .clone()
    }
}
