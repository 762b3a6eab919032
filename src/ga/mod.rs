//! Genetic search over timetable assignments.
//!
//! The operators are penalty-guided: crossover exchanges each parent's
//! worst genes, mutation only touches the worst slice of an individual's
//! genes. Both lean on the per-gene penalty attribution the evaluator
//! produces.
//!
//! # Key Types
//!
//! - [`GaConfig`]: every tunable of the search, with chainable builders
//!   and validation
//! - [`generate_timetable`]: the generational loop
//! - [`GaOutcome`]: best timetable found plus run statistics

mod config;
mod crossover;
mod mutation;
mod population;
mod runner;
mod selection;

pub use config::GaConfig;
pub use population::random_lessons;
pub use runner::{generate_timetable, GaOutcome};

use std::cmp::Ordering;

/// Gene indices sorted by descending per-gene penalty.
///
/// Stable sort keeps equal-penalty genes in index order, so rankings are
/// reproducible under a fixed seed.
pub(crate) fn rank_by_penalty_desc(penalties: &[f64]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..penalties.len()).collect();
    indices.sort_by(|&a, &b| {
        penalties[b]
            .partial_cmp(&penalties[a])
            .unwrap_or(Ordering::Equal)
    });
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_by_penalty_desc() {
        assert_eq!(rank_by_penalty_desc(&[1.0, 5.0, 0.0, 5.0]), vec![1, 3, 0, 2]);
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank_by_penalty_desc(&[]).is_empty());
    }
}
