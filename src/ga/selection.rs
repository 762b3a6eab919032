//! Elitist truncation selection.

use crate::evaluator::EvaluatedTimetable;
use std::cmp::Ordering;

/// Sorts the population by ascending penalty and truncates it back to
/// `size`. The stable sort keeps earlier individuals ahead of
/// equal-penalty later ones, so survivors are deterministic.
pub fn select_survivors(population: &mut Vec<EvaluatedTimetable>, size: usize) {
    population.sort_by(|a, b| a.penalty.partial_cmp(&b.penalty).unwrap_or(Ordering::Equal));
    population.truncate(size);
}
