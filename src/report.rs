//! Plain-text rendering of a finished timetable.

use crate::evaluator::EvaluatedTimetable;
use crate::model::{Day, TimetableRequirements};
use std::io;

/// Writes the timetable day by day in schedule order, one line per class,
/// followed by the total penalty.
///
/// Room names come from the catalogue; a gene pointing at an unknown room
/// index is rendered by its raw index rather than failing.
pub fn write_timetable(
    out: &mut impl io::Write,
    requirements: &TimetableRequirements,
    timetable: &EvaluatedTimetable,
) -> io::Result<()> {
    let mut order: Vec<usize> = (0..timetable.lessons.len()).collect();
    order.sort_by(|&a, &b| timetable.lessons[a].schedule_cmp(&timetable.lessons[b]));

    for day in Day::ALL {
        let today: Vec<usize> = order
            .iter()
            .copied()
            .filter(|&i| timetable.lessons[i].day == day)
            .collect();
        if today.is_empty() {
            continue;
        }
        writeln!(out, "{day}")?;
        for i in today {
            let lesson = &timetable.lessons[i];
            let requirement = &requirements.lesson_requirements[lesson.requirement];
            let room = requirements
                .places
                .get(lesson.place)
                .map(|place| place.name.clone())
                .unwrap_or_else(|| format!("#{}", lesson.place));
            let groups: Vec<String> =
                requirement.groups.iter().map(u32::to_string).collect();
            writeln!(
                out,
                "  {}  lecturer {:>3}  groups {:<12} {}  [{}]",
                lesson.time_slot,
                requirement.lecturer,
                groups.join(","),
                room,
                lesson.periodicity,
            )?;
        }
    }
    writeln!(out, "total penalty: {:.2}", timetable.penalty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjacency::AdjacencyRules;
    use crate::evaluator::{Evaluator, PenaltyConfig};
    use crate::model::{Lesson, LessonRequirement, Periodicity, Place, TimeSlot};
    use chrono::NaiveTime;

    fn slot(sh: u32, sm: u32, eh: u32, em: u32) -> TimeSlot {
        TimeSlot::new(
            NaiveTime::from_hms_opt(sh, sm, 0).unwrap(),
            NaiveTime::from_hms_opt(eh, em, 0).unwrap(),
        )
    }

    fn requirements() -> TimetableRequirements {
        TimetableRequirements::new(
            vec![
                LessonRequirement::new(7, [1, 2], 1.0),
                LessonRequirement::new(9, [3], 1.0),
            ],
            vec![Place {
                id: 1,
                name: "room-1".into(),
                capacity: 30,
            }],
            vec![slot(8, 30, 9, 50), slot(10, 10, 11, 30)],
        )
    }

    #[test]
    fn test_report_orders_by_day_and_slot() {
        let requirements = requirements();
        let evaluator = Evaluator::new(
            &requirements,
            AdjacencyRules::default(),
            PenaltyConfig::default(),
        );
        let timetable = evaluator.evaluate(vec![
            Lesson {
                requirement: 1,
                day: Day::Tuesday,
                time_slot: requirements.time_slots[0],
                place: 0,
                periodicity: Periodicity::OddWeeks,
            },
            Lesson {
                requirement: 0,
                day: Day::Monday,
                time_slot: requirements.time_slots[1],
                place: 0,
                periodicity: Periodicity::Weekly,
            },
        ]);

        let mut rendered = Vec::new();
        write_timetable(&mut rendered, &requirements, &timetable).unwrap();
        let text = String::from_utf8(rendered).unwrap();

        let monday = text.find("Monday").unwrap();
        let tuesday = text.find("Tuesday").unwrap();
        assert!(monday < tuesday);
        assert!(text.contains("lecturer   7"));
        assert!(text.contains("groups 1,2"));
        assert!(text.contains("room-1"));
        assert!(text.contains("total penalty: 0.00"));
    }

    #[test]
    fn test_empty_days_are_skipped() {
        let requirements = requirements();
        let evaluator = Evaluator::new(
            &requirements,
            AdjacencyRules::default(),
            PenaltyConfig::default(),
        );
        let timetable = evaluator.evaluate(vec![Lesson {
            requirement: 0,
            day: Day::Friday,
            time_slot: requirements.time_slots[0],
            place: 0,
            periodicity: Periodicity::Weekly,
        }]);

        let mut rendered = Vec::new();
        write_timetable(&mut rendered, &requirements, &timetable).unwrap();
        let text = String::from_utf8(rendered).unwrap();
        assert!(text.contains("Friday"));
        assert!(!text.contains("Monday"));
    }
}
