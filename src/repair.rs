//! Greedy local repair.
//!
//! Walks an individual's genes from worst to best and relocates each
//! offender to the day and time slot minimizing the penalty of the
//! entities it touches. Rooms and week parity are left alone; relocation
//! only moves classes around the week grid.
//!
//! Every candidate placement includes the gene's current one, so a repair
//! pass never increases the total penalty.

use crate::evaluator::{insert_sorted, remove_index, EntityLessons, EvaluatedTimetable, Evaluator};
use crate::ga::rank_by_penalty_desc;
use crate::model::Day;

/// Relocates the timetable's penalized genes one by one, worst first, and
/// re-scores the result.
///
/// The per-entity index is maintained incrementally: each move takes the
/// gene out of its lecturer, group, and room lists, scores every
/// `(day, slot)` placement through [`Evaluator::local_penalty`] on cloned
/// lists, and reinserts the gene at its winning position. Ties keep the
/// earliest placement in day-major, slot-minor scan order, so repair is
/// deterministic.
pub fn repair_timetable(
    evaluator: &Evaluator,
    timetable: EvaluatedTimetable,
) -> EvaluatedTimetable {
    let requirements = evaluator.requirements();
    let ranked = rank_by_penalty_desc(&timetable.lesson_penalties);

    let mut lessons = timetable.lessons;
    let mut index = EntityLessons::build(requirements, &lessons);

    for &gene in &ranked {
        if timetable.lesson_penalties[gene] == 0.0 {
            break;
        }
        let requirement = &requirements.lesson_requirements[lessons[gene].requirement];
        let place = lessons[gene].place;

        // Base lists without the gene; candidates are scored against
        // clones of these.
        let mut lecturer_list = index.by_lecturer.remove(&requirement.lecturer).unwrap_or_default();
        remove_index(&mut lecturer_list, gene);
        let group_lists: Vec<(u32, Vec<usize>)> = requirement
            .groups
            .iter()
            .map(|&group| {
                let mut list = index.by_group.remove(&group).unwrap_or_default();
                remove_index(&mut list, gene);
                (group, list)
            })
            .collect();
        let mut place_list = index.by_place.remove(&place).unwrap_or_default();
        remove_index(&mut place_list, gene);

        let mut best = (f64::INFINITY, lessons[gene].day, lessons[gene].time_slot);
        for day in Day::ALL {
            for &time_slot in &requirements.time_slots {
                lessons[gene].day = day;
                lessons[gene].time_slot = time_slot;

                let mut candidate_lecturer = lecturer_list.clone();
                insert_sorted(&lessons, &mut candidate_lecturer, gene);
                let candidate_groups: Vec<Vec<usize>> = group_lists
                    .iter()
                    .map(|(_, list)| {
                        let mut list = list.clone();
                        insert_sorted(&lessons, &mut list, gene);
                        list
                    })
                    .collect();
                let mut candidate_place = place_list.clone();
                insert_sorted(&lessons, &mut candidate_place, gene);

                let penalty = evaluator.local_penalty(
                    &lessons,
                    &candidate_lecturer,
                    &candidate_groups,
                    &candidate_place,
                );
                if penalty < best.0 {
                    best = (penalty, day, time_slot);
                }
            }
        }

        lessons[gene].day = best.1;
        lessons[gene].time_slot = best.2;

        insert_sorted(&lessons, &mut lecturer_list, gene);
        index.by_lecturer.insert(requirement.lecturer, lecturer_list);
        for (group, mut list) in group_lists {
            insert_sorted(&lessons, &mut list, gene);
            index.by_group.insert(group, list);
        }
        insert_sorted(&lessons, &mut place_list, gene);
        index.by_place.insert(place, place_list);
    }

    evaluator.evaluate(lessons)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjacency::AdjacencyRules;
    use crate::evaluator::PenaltyConfig;
    use crate::ga::random_lessons;
    use crate::model::{Lesson, LessonRequirement, Periodicity, Place, TimeSlot, TimetableRequirements};
    use chrono::NaiveTime;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn slot(sh: u32, sm: u32, eh: u32, em: u32) -> TimeSlot {
        TimeSlot::new(
            NaiveTime::from_hms_opt(sh, sm, 0).unwrap(),
            NaiveTime::from_hms_opt(eh, em, 0).unwrap(),
        )
    }

    fn catalogue() -> TimetableRequirements {
        TimetableRequirements::new(
            vec![
                LessonRequirement::new(1, [1], 1.0),
                LessonRequirement::new(1, [2], 1.0),
            ],
            vec![Place {
                id: 1,
                name: "r1".into(),
                capacity: 30,
            }],
            vec![slot(8, 30, 9, 50), slot(10, 10, 11, 30)],
        )
    }

    fn colliding_timetable(requirements: &TimetableRequirements) -> Vec<Lesson> {
        // Both classes of the shared lecturer in the same room and slot.
        (0..2)
            .map(|requirement| Lesson {
                requirement,
                day: Day::Monday,
                time_slot: requirements.time_slots[0],
                place: 0,
                periodicity: Periodicity::Weekly,
            })
            .collect()
    }

    #[test]
    fn test_repair_resolves_a_direct_collision() {
        let requirements = catalogue();
        let evaluator = Evaluator::new(
            &requirements,
            AdjacencyRules::default(),
            PenaltyConfig::default(),
        );
        let broken = evaluator.evaluate(colliding_timetable(&requirements));
        assert!(broken.penalty > 0.0);

        let repaired = repair_timetable(&evaluator, broken);
        assert_eq!(repaired.penalty, 0.0);
    }

    #[test]
    fn test_repair_leaves_clean_timetables_alone() {
        let requirements = catalogue();
        let evaluator = Evaluator::new(
            &requirements,
            AdjacencyRules::default(),
            PenaltyConfig::default(),
        );
        let mut lessons = colliding_timetable(&requirements);
        lessons[1].day = Day::Tuesday;
        let clean = evaluator.evaluate(lessons);
        assert_eq!(clean.penalty, 0.0);

        let repaired = repair_timetable(&evaluator, clean.clone());
        assert_eq!(repaired.lessons, clean.lessons);
        assert_eq!(repaired.penalty, 0.0);
    }

    #[test]
    fn test_repair_preserves_room_and_periodicity() {
        let requirements = catalogue();
        let evaluator = Evaluator::new(
            &requirements,
            AdjacencyRules::default(),
            PenaltyConfig::default(),
        );
        let broken = evaluator.evaluate(colliding_timetable(&requirements));
        let repaired = repair_timetable(&evaluator, broken.clone());
        for (before, after) in broken.lessons.iter().zip(&repaired.lessons) {
            assert_eq!(before.requirement, after.requirement);
            assert_eq!(before.place, after.place);
            assert_eq!(before.periodicity, after.periodicity);
        }
    }

    #[test]
    fn test_repair_never_increases_penalty() {
        let requirements = TimetableRequirements::new(
            vec![
                LessonRequirement::new(1, [1], 3.0),
                LessonRequirement::new(2, [1, 2], 2.5),
                LessonRequirement::new(3, [2], 2.0),
            ],
            vec![
                Place {
                    id: 1,
                    name: "r1".into(),
                    capacity: 30,
                },
                Place {
                    id: 2,
                    name: "r2".into(),
                    capacity: 30,
                },
            ],
            vec![slot(8, 30, 9, 50), slot(10, 10, 11, 30), slot(11, 50, 13, 10)],
        );
        let evaluator = Evaluator::new(
            &requirements,
            AdjacencyRules::default(),
            PenaltyConfig::default(),
        );
        let mut rng = SmallRng::seed_from_u64(17);
        for _ in 0..10 {
            let candidate = evaluator.evaluate(random_lessons(&requirements, &mut rng));
            let repaired = repair_timetable(&evaluator, candidate.clone());
            assert!(
                repaired.penalty <= candidate.penalty + 1e-9,
                "repair worsened {} to {}",
                candidate.penalty,
                repaired.penalty
            );
        }
    }
}
