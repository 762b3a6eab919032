//! The generational loop.
//!
//! [`generate_timetable`] orchestrates the complete evolutionary process:
//! initialization → evaluation → crossover → mutation → optional repair →
//! truncation, repeated until a zero-penalty timetable appears or the
//! generation budget runs out.

use super::config::GaConfig;
use super::crossover::crossover_population;
use super::mutation::mutate_population;
use super::population::random_lessons;
use super::selection::select_survivors;
use crate::evaluator::{EvaluatedTimetable, Evaluator};
use crate::model::{Lesson, TimetableRequirements};
use crate::repair::repair_timetable;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use rayon::prelude::*;

/// Result of a timetable generation run.
#[derive(Debug, Clone)]
pub struct GaOutcome {
    /// The best timetable found during the entire run.
    pub best: EvaluatedTimetable,

    /// Number of generations executed.
    pub generations: usize,

    /// Best penalty after initialization and after each generation.
    pub penalty_history: Vec<f64>,
}

/// Runs the genetic search over the catalogue.
///
/// Gene arrays are always produced sequentially from one seeded RNG;
/// `config.parallel` only fans out their evaluation, so a fixed seed
/// reproduces the run exactly in either mode.
///
/// # Panics
/// Panics if the configuration or the catalogue is invalid (call
/// [`GaConfig::validate`] and [`TimetableRequirements::validate`] first
/// to get a descriptive error).
pub fn generate_timetable(requirements: &TimetableRequirements, config: &GaConfig) -> GaOutcome {
    config.validate().expect("invalid GaConfig");
    requirements
        .validate()
        .expect("invalid TimetableRequirements");

    let evaluator = Evaluator::new(requirements, config.adjacency, config.penalties);
    let mut rng = match config.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::seed_from_u64(rand::random()),
    };

    let initial: Vec<Vec<Lesson>> = (0..config.population_size)
        .map(|_| random_lessons(requirements, &mut rng))
        .collect();
    let mut population = evaluate_batch(&evaluator, initial, config.parallel);
    select_survivors(&mut population, config.population_size);

    let mut penalty_history = Vec::with_capacity(config.max_generations + 1);
    penalty_history.push(population[0].penalty);

    let mut generations = 0;
    while population[0].penalty > 0.0 && generations < config.max_generations {
        let offspring = crossover_population(&population, config, &mut rng);
        population.extend(evaluate_batch(&evaluator, offspring, config.parallel));

        let mutants = mutate_population(&population, requirements, config, &mut rng);
        population.extend(evaluate_batch(&evaluator, mutants, config.parallel));

        if config.repair {
            let current = std::mem::take(&mut population);
            population = if config.parallel {
                current
                    .into_par_iter()
                    .map(|individual| repair_timetable(&evaluator, individual))
                    .collect()
            } else {
                current
                    .into_iter()
                    .map(|individual| repair_timetable(&evaluator, individual))
                    .collect()
            };
        }

        select_survivors(&mut population, config.population_size);
        generations += 1;
        penalty_history.push(population[0].penalty);
    }

    GaOutcome {
        best: population.swap_remove(0),
        generations,
        penalty_history,
    }
}

fn evaluate_batch(
    evaluator: &Evaluator,
    pending: Vec<Vec<Lesson>>,
    parallel: bool,
) -> Vec<EvaluatedTimetable> {
    if parallel {
        pending
            .into_par_iter()
            .map(|lessons| evaluator.evaluate(lessons))
            .collect()
    } else {
        pending
            .into_iter()
            .map(|lessons| evaluator.evaluate(lessons))
            .collect()
    }
}
