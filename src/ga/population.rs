//! Random timetable construction.

use crate::model::{Day, Lesson, Periodicity, TimetableRequirements};
use rand::Rng;

/// Builds one random gene array for the catalogue.
///
/// Each requirement is expanded by spending its weekly session budget:
/// a full unit becomes a weekly class, a trailing half unit becomes a
/// class on a random week parity. Gene order therefore follows
/// requirement order and is identical for every individual.
pub fn random_lessons<R: Rng>(requirements: &TimetableRequirements, rng: &mut R) -> Vec<Lesson> {
    let mut lessons = Vec::with_capacity(requirements.session_count());

    for (requirement, entry) in requirements.lesson_requirements.iter().enumerate() {
        let mut budget = entry.sessions_per_week;
        while budget > 0.0 {
            let periodicity = if budget >= 1.0 {
                Periodicity::Weekly
            } else if rng.random_bool(0.5) {
                Periodicity::OddWeeks
            } else {
                Periodicity::EvenWeeks
            };
            lessons.push(Lesson {
                requirement,
                day: random_day(rng),
                time_slot: requirements.time_slots
                    [rng.random_range(0..requirements.time_slots.len())],
                place: rng.random_range(0..requirements.places.len()),
                periodicity,
            });
            budget -= 1.0;
        }
    }

    lessons
}

/// Uniformly random teaching day.
pub(crate) fn random_day<R: Rng>(rng: &mut R) -> Day {
    Day::ALL[rng.random_range(0..Day::ALL.len())]
}
