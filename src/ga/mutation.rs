//! Worst-gene mutation.

use super::population::random_day;
use super::rank_by_penalty_desc;
use crate::evaluator::EvaluatedTimetable;
use crate::ga::GaConfig;
use crate::model::{Lesson, TimetableRequirements};
use rand::Rng;

/// Mutates every individual of the population and returns the mutant gene
/// arrays. Individuals whose mutation rolled no actual change contribute
/// nothing, so the population only grows by genuinely new candidates.
pub fn mutate_population<R: Rng>(
    population: &[EvaluatedTimetable],
    requirements: &TimetableRequirements,
    config: &GaConfig,
    rng: &mut R,
) -> Vec<Vec<Lesson>> {
    population
        .iter()
        .filter_map(|individual| mutate_lessons(individual, requirements, config, rng))
        .collect()
}

/// Re-rolls fields of the individual's worst genes.
///
/// Only the configured fraction of worst-ranked genes is considered, and
/// the walk stops at the first zero-penalty gene since everything ranked
/// below it is already clean. Each field flips independently with its
/// own probability; a roll that lands on the current value is not a
/// change. Returns `None` when no field changed.
fn mutate_lessons<R: Rng>(
    individual: &EvaluatedTimetable,
    requirements: &TimetableRequirements,
    config: &GaConfig,
    rng: &mut R,
) -> Option<Vec<Lesson>> {
    let count = individual.lessons.len();
    let considered = (config.mutation_bad_genes_rate * count as f64).round() as usize;
    let ranked = rank_by_penalty_desc(&individual.lesson_penalties);

    let mut lessons = individual.lessons.clone();
    let mut changed = false;

    for &gene in ranked.iter().take(considered) {
        if individual.lesson_penalties[gene] == 0.0 {
            break;
        }
        let lesson = &mut lessons[gene];

        if rng.random::<f64>() <= config.mutation_day_rate {
            let day = random_day(rng);
            if day != lesson.day {
                lesson.day = day;
                changed = true;
            }
        }
        if rng.random::<f64>() <= config.mutation_time_slot_rate {
            let time_slot =
                requirements.time_slots[rng.random_range(0..requirements.time_slots.len())];
            if time_slot != lesson.time_slot {
                lesson.time_slot = time_slot;
                changed = true;
            }
        }
        if rng.random::<f64>() <= config.mutation_place_rate {
            let place = rng.random_range(0..requirements.places.len());
            if place != lesson.place {
                lesson.place = place;
                changed = true;
            }
        }
        if !lesson.periodicity.is_weekly()
            && rng.random::<f64>() <= config.mutation_periodicity_rate
        {
            lesson.periodicity = lesson.periodicity.flipped();
            changed = true;
        }
    }

    changed.then_some(lessons)
}
