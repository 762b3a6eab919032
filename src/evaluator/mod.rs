//! Timetable evaluation.
//!
//! [`Evaluator::evaluate`] turns a gene array into an
//! [`EvaluatedTimetable`]: it rebuilds the per-entity ordered indices,
//! runs the day-grouped adjacency scan for every lecturer, academic
//! group, and room, shapes the raw counts through the configured
//! power-law terms, and distributes every penalty term evenly across the
//! gene indices implicated in it.
//!
//! Evaluation is deterministic for a given gene array and configuration
//! and never mutates its inputs; any change to the genes requires a fresh
//! evaluation.

mod index;
mod scan;

pub use index::EntityLessons;
pub(crate) use index::{insert_sorted, remove_index};
pub(crate) use scan::scan_entity;

use crate::adjacency::AdjacencyRules;
use crate::model::{Lesson, TimetableRequirements};
use serde::{Deserialize, Serialize};

/// Coefficient and exponent of one conflict penalty term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConflictPenalty {
    pub weight: f64,
    pub power: f64,
}

/// Coefficient and exponents of one time-window penalty term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowPenalty {
    pub weight: f64,
    pub power: f64,
    /// Exponent applied to each day's window count before summing across
    /// days, so several windows on one day cost more than the same number
    /// spread out.
    pub day_power: f64,
}

/// Penalty shaping per entity kind.
///
/// Rooms carry no window term: an empty room between classes costs
/// nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PenaltyConfig {
    pub lecturer_conflict: ConflictPenalty,
    pub lecturer_window: WindowPenalty,
    pub group_conflict: ConflictPenalty,
    pub group_window: WindowPenalty,
    pub place_conflict: ConflictPenalty,
}

impl Default for PenaltyConfig {
    fn default() -> Self {
        let conflict = ConflictPenalty {
            weight: 10.0,
            power: 1.5,
        };
        let window = WindowPenalty {
            weight: 1.0,
            power: 1.0,
            day_power: 1.5,
        };
        Self {
            lecturer_conflict: conflict,
            lecturer_window: window,
            group_conflict: conflict,
            group_window: window,
            place_conflict: conflict,
        }
    }
}

/// A fully scored candidate timetable.
///
/// `lesson_penalties` has one entry per gene; the entries are all
/// non-negative and sum (up to rounding) to `penalty`. Immutable once
/// produced.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluatedTimetable {
    pub lessons: Vec<Lesson>,
    pub penalty: f64,
    pub lesson_penalties: Vec<f64>,
}

/// Scores candidate timetables against one requirements catalogue.
#[derive(Debug, Clone)]
pub struct Evaluator<'a> {
    requirements: &'a TimetableRequirements,
    rules: AdjacencyRules,
    penalties: PenaltyConfig,
}

impl<'a> Evaluator<'a> {
    pub fn new(
        requirements: &'a TimetableRequirements,
        rules: AdjacencyRules,
        penalties: PenaltyConfig,
    ) -> Self {
        Self {
            requirements,
            rules,
            penalties,
        }
    }

    pub fn requirements(&self) -> &'a TimetableRequirements {
        self.requirements
    }

    /// Scores a gene array.
    pub fn evaluate(&self, lessons: Vec<Lesson>) -> EvaluatedTimetable {
        let index = EntityLessons::build(self.requirements, &lessons);

        let mut penalty = 0.0;
        let mut lesson_penalties = vec![0.0; lessons.len()];

        for list in index.by_lecturer.values() {
            penalty += self.score_entity(
                &lessons,
                list,
                &self.penalties.lecturer_conflict,
                Some(&self.penalties.lecturer_window),
                &mut lesson_penalties,
            );
        }
        for list in index.by_group.values() {
            penalty += self.score_entity(
                &lessons,
                list,
                &self.penalties.group_conflict,
                Some(&self.penalties.group_window),
                &mut lesson_penalties,
            );
        }
        for list in index.by_place.values() {
            penalty += self.score_entity(
                &lessons,
                list,
                &self.penalties.place_conflict,
                None,
                &mut lesson_penalties,
            );
        }

        EvaluatedTimetable {
            lessons,
            penalty,
            lesson_penalties,
        }
    }

    /// Scores one entity's ordered list, distributing each term evenly
    /// over its implicated genes. Returns the entity's total contribution.
    fn score_entity(
        &self,
        lessons: &[Lesson],
        indices: &[usize],
        conflict: &ConflictPenalty,
        window: Option<&WindowPenalty>,
        lesson_penalties: &mut [f64],
    ) -> f64 {
        let scan = scan_entity(lessons, indices, &self.rules, window.map(|w| w.day_power));
        let mut total = 0.0;

        if scan.conflict_count > 0.0 {
            let term = scan.conflict_count.powf(conflict.power) * conflict.weight;
            total += term;
            let share = term / scan.conflict_genes.len() as f64;
            for &gene in &scan.conflict_genes {
                lesson_penalties[gene] += share;
            }
        }

        if let Some(window) = window {
            if scan.window_count > 0.0 {
                let term = scan.window_count.powf(window.power) * window.weight;
                total += term;
                let share = term / scan.window_genes.len() as f64;
                for &gene in &scan.window_genes {
                    lesson_penalties[gene] += share;
                }
            }
        }

        total
    }

    /// Penalty restricted to one lecturer's, several groups', and one
    /// room's index lists.
    ///
    /// Used by local repair to compare candidate placements of a single
    /// gene without re-scoring the whole timetable.
    pub(crate) fn local_penalty(
        &self,
        lessons: &[Lesson],
        lecturer: &[usize],
        groups: &[Vec<usize>],
        place: &[usize],
    ) -> f64 {
        let mut penalty = self.entity_total(
            lessons,
            lecturer,
            &self.penalties.lecturer_conflict,
            Some(&self.penalties.lecturer_window),
        );
        for group in groups {
            penalty += self.entity_total(
                lessons,
                group,
                &self.penalties.group_conflict,
                Some(&self.penalties.group_window),
            );
        }
        penalty += self.entity_total(lessons, place, &self.penalties.place_conflict, None);
        penalty
    }

    fn entity_total(
        &self,
        lessons: &[Lesson],
        indices: &[usize],
        conflict: &ConflictPenalty,
        window: Option<&WindowPenalty>,
    ) -> f64 {
        let scan = scan_entity(lessons, indices, &self.rules, window.map(|w| w.day_power));
        let mut total = 0.0;
        if scan.conflict_count > 0.0 {
            total += scan.conflict_count.powf(conflict.power) * conflict.weight;
        }
        if let Some(window) = window {
            if scan.window_count > 0.0 {
                total += scan.window_count.powf(window.power) * window.weight;
            }
        }
        total
    }
}
