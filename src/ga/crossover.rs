//! Bad-gene-biased marked-position crossover.

use super::rank_by_penalty_desc;
use crate::evaluator::EvaluatedTimetable;
use crate::ga::GaConfig;
use crate::model::Lesson;
use rand::Rng;

/// Runs the configured number of matings over the current population and
/// returns the offspring gene arrays, unevaluated.
///
/// Each mating draws two distinct parents uniformly. The population must
/// already be evaluated; per-gene penalties drive the gene marking.
pub fn crossover_population<R: Rng>(
    population: &[EvaluatedTimetable],
    config: &GaConfig,
    rng: &mut R,
) -> Vec<Vec<Lesson>> {
    if population.len() < 2 {
        return Vec::new();
    }

    let matings = (config.crossover_rate * population.len() as f64).round() as usize;
    let mut offspring = Vec::with_capacity(matings * 2);

    for _ in 0..matings {
        let first = rng.random_range(0..population.len());
        let mut second = rng.random_range(0..population.len());
        while second == first {
            second = rng.random_range(0..population.len());
        }
        let (a, b) = crossover_pair(&population[first], &population[second], config, rng);
        offspring.push(a);
        offspring.push(b);
    }

    offspring
}

/// Mates two parents into two children.
///
/// Both parents rank their genes by penalty; each parent's worst `cutoff`
/// positions are marked, where `cutoff` is drawn from the configured
/// bad-gene-rate range. A child keeps its own gene at marked positions
/// and takes the other parent's gene everywhere else, so the children
/// differ from the parents exactly at the unmarked, well-behaved
/// positions.
fn crossover_pair<R: Rng>(
    parent1: &EvaluatedTimetable,
    parent2: &EvaluatedTimetable,
    config: &GaConfig,
    rng: &mut R,
) -> (Vec<Lesson>, Vec<Lesson>) {
    let count = parent1.lessons.len();
    debug_assert_eq!(count, parent2.lessons.len());

    let min = (config.crossover_min_bad_gene_rate * count as f64).round() as usize;
    let max = (config.crossover_max_bad_gene_rate * count as f64).round() as usize;
    let cutoff = rng.random_range(min..=max);

    let mut marked = vec![false; count];
    for ranked in [
        rank_by_penalty_desc(&parent1.lesson_penalties),
        rank_by_penalty_desc(&parent2.lesson_penalties),
    ] {
        for &gene in ranked.iter().take(cutoff) {
            marked[gene] = true;
        }
    }

    let mut child1 = Vec::with_capacity(count);
    let mut child2 = Vec::with_capacity(count);
    for i in 0..count {
        if marked[i] {
            child1.push(parent1.lessons[i]);
            child2.push(parent2.lessons[i]);
        } else {
            child1.push(parent2.lessons[i]);
            child2.push(parent1.lessons[i]);
        }
    }
    (child1, child2)
}
