//! The fixed input catalogue for one generation run.

use super::TimeSlot;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One required course offering: who teaches it, which groups attend, and
/// how many sessions per week it needs.
///
/// `sessions_per_week` may be fractional in units of 0.5; a half session
/// stands for a class held on alternating weeks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonRequirement {
    pub lecturer: u32,
    pub groups: BTreeSet<u32>,
    pub sessions_per_week: f64,
}

impl LessonRequirement {
    pub fn new(
        lecturer: u32,
        groups: impl IntoIterator<Item = u32>,
        sessions_per_week: f64,
    ) -> Self {
        Self {
            lecturer,
            groups: groups.into_iter().collect(),
            sessions_per_week,
        }
    }

    /// Number of session instances this requirement expands to: one per
    /// started unit, so a 1.5-session requirement yields two.
    pub fn session_count(&self) -> usize {
        self.sessions_per_week.ceil().max(0.0) as usize
    }
}

/// A room. Capacity is carried for reporting; the penalty model does not
/// enforce it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    pub id: u64,
    pub name: String,
    pub capacity: u32,
}

/// Everything the optimizer needs to know about one run: the requirement
/// list, the rooms, and the slot grid. Supplied once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimetableRequirements {
    pub lesson_requirements: Vec<LessonRequirement>,
    pub places: Vec<Place>,
    pub time_slots: Vec<TimeSlot>,
}

impl TimetableRequirements {
    pub fn new(
        lesson_requirements: Vec<LessonRequirement>,
        places: Vec<Place>,
        time_slots: Vec<TimeSlot>,
    ) -> Self {
        Self {
            lesson_requirements,
            places,
            time_slots,
        }
    }

    /// Total number of session instances across all requirements — the
    /// gene count of every candidate timetable for this catalogue.
    pub fn session_count(&self) -> usize {
        self.lesson_requirements
            .iter()
            .map(LessonRequirement::session_count)
            .sum()
    }

    /// Checks the catalogue is well formed.
    ///
    /// A malformed catalogue is a caller programming error; the runner
    /// rejects it up front instead of producing undefined penalties.
    pub fn validate(&self) -> Result<(), String> {
        if self.lesson_requirements.is_empty() {
            return Err("lesson_requirements must not be empty".into());
        }
        if self.places.is_empty() {
            return Err("places must not be empty".into());
        }
        if self.time_slots.is_empty() {
            return Err("time_slots must not be empty".into());
        }
        for (i, requirement) in self.lesson_requirements.iter().enumerate() {
            if requirement.groups.is_empty() {
                return Err(format!("requirement {i} has no academic groups"));
            }
            if !requirement.sessions_per_week.is_finite()
                || requirement.sessions_per_week < 0.0
            {
                return Err(format!(
                    "requirement {i} has an invalid sessions_per_week of {}",
                    requirement.sessions_per_week
                ));
            }
        }
        for (i, slot) in self.time_slots.iter().enumerate() {
            if slot.start >= slot.end {
                return Err(format!("time slot {i} ({slot}) does not end after it starts"));
            }
        }
        Ok(())
    }
}
