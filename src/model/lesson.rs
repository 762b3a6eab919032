//! Lesson assignments — the genes of the search.

use super::{Day, TimeSlot};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Recurrence of one session across weeks.
///
/// An integer sessions-per-week budget schedules `Weekly` sessions; a
/// half-session remainder schedules a class that meets only on odd or only
/// on even teaching weeks.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Periodicity {
    Weekly,
    OddWeeks,
    EvenWeeks,
}

impl Periodicity {
    pub fn is_weekly(self) -> bool {
        matches!(self, Periodicity::Weekly)
    }

    /// The opposite alternating variant; `Weekly` flips to itself.
    pub fn flipped(self) -> Self {
        match self {
            Periodicity::Weekly => Periodicity::Weekly,
            Periodicity::OddWeeks => Periodicity::EvenWeeks,
            Periodicity::EvenWeeks => Periodicity::OddWeeks,
        }
    }
}

impl fmt::Display for Periodicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Periodicity::Weekly => "weekly",
            Periodicity::OddWeeks => "odd weeks",
            Periodicity::EvenWeeks => "even weeks",
        };
        f.write_str(name)
    }
}

/// One concrete scheduled session: the unit the optimizer reassigns.
///
/// A full candidate timetable is a `Vec<Lesson>` with one entry per
/// required session instance. `requirement` and `place` index into the
/// catalogue's requirement and room lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Lesson {
    pub requirement: usize,
    pub day: Day,
    pub time_slot: TimeSlot,
    pub place: usize,
    pub periodicity: Periodicity,
}

impl Lesson {
    /// The ordering used by the per-entity indices:
    /// `(day, time slot, periodicity)`.
    pub fn schedule_cmp(&self, other: &Lesson) -> Ordering {
        self.day
            .cmp(&other.day)
            .then(self.time_slot.cmp(&other.time_slot))
            .then(self.periodicity.cmp(&other.periodicity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn slot(sh: u32, sm: u32, eh: u32, em: u32) -> TimeSlot {
        TimeSlot::new(
            NaiveTime::from_hms_opt(sh, sm, 0).unwrap(),
            NaiveTime::from_hms_opt(eh, em, 0).unwrap(),
        )
    }

    fn lesson(day: Day, time_slot: TimeSlot, periodicity: Periodicity) -> Lesson {
        Lesson {
            requirement: 0,
            day,
            time_slot,
            place: 0,
            periodicity,
        }
    }

    #[test]
    fn test_flipped() {
        assert_eq!(Periodicity::OddWeeks.flipped(), Periodicity::EvenWeeks);
        assert_eq!(Periodicity::EvenWeeks.flipped(), Periodicity::OddWeeks);
        assert_eq!(Periodicity::Weekly.flipped(), Periodicity::Weekly);
    }

    #[test]
    fn test_schedule_cmp_day_first() {
        let a = lesson(Day::Monday, slot(10, 10, 11, 30), Periodicity::Weekly);
        let b = lesson(Day::Tuesday, slot(8, 30, 9, 50), Periodicity::Weekly);
        assert_eq!(a.schedule_cmp(&b), Ordering::Less);
    }

    #[test]
    fn test_schedule_cmp_slot_within_day() {
        let a = lesson(Day::Monday, slot(8, 30, 9, 50), Periodicity::Weekly);
        let b = lesson(Day::Monday, slot(10, 10, 11, 30), Periodicity::Weekly);
        assert_eq!(a.schedule_cmp(&b), Ordering::Less);
    }

    #[test]
    fn test_schedule_cmp_periodicity_last() {
        let a = lesson(Day::Monday, slot(8, 30, 9, 50), Periodicity::Weekly);
        let b = lesson(Day::Monday, slot(8, 30, 9, 50), Periodicity::OddWeeks);
        assert_eq!(a.schedule_cmp(&b), Ordering::Less);
        assert_eq!(a.schedule_cmp(&a), Ordering::Equal);
    }
}
