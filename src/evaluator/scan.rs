//! Day-grouped adjacency scan over one entity's ordered lesson indices.

use crate::adjacency::AdjacencyRules;
use crate::model::{Lesson, Periodicity};

/// Raw scan results for one entity, before penalty shaping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityScan {
    /// Periodicity-weighted count of conflicting consecutive pairs.
    pub conflict_count: f64,
    /// Gene indices implicated in at least one conflict (sorted, unique).
    pub conflict_genes: Vec<usize>,
    /// Sum over days of `(windows that day) ^ day_power`.
    pub window_count: f64,
    /// Every same-day gene index of a day with at least one window.
    pub window_genes: Vec<usize>,
}

/// Scans consecutive same-day pairs of an ordered index list.
///
/// `indices` must be sorted by the schedule key, so same-day genes are
/// contiguous and time-ordered. `window_day_power` shapes each day's
/// window count before summing; pass `None` to skip window bookkeeping
/// entirely (rooms are scored on conflicts only).
pub fn scan_entity(
    lessons: &[Lesson],
    indices: &[usize],
    rules: &AdjacencyRules,
    window_day_power: Option<f64>,
) -> EntityScan {
    let mut scan = EntityScan::default();

    let mut start = 0;
    while start < indices.len() {
        let day = lessons[indices[start]].day;
        let mut end = start + 1;
        while end < indices.len() && lessons[indices[end]].day == day {
            end += 1;
        }

        let mut day_windows: f64 = 0.0;
        for pair in indices[start..end].windows(2) {
            let prev = &lessons[pair[0]];
            let current = &lessons[pair[1]];

            if rules.is_conflict(&prev.time_slot, &current.time_slot) {
                let weight = conflict_weight(prev.periodicity, current.periodicity);
                if weight > 0.0 {
                    scan.conflict_count += weight;
                    scan.conflict_genes.push(pair[0]);
                    scan.conflict_genes.push(pair[1]);
                }
            }

            if window_day_power.is_some()
                && rules.is_window(&prev.time_slot, &current.time_slot)
            {
                day_windows += 1.0;
            }
        }

        if let Some(day_power) = window_day_power {
            if day_windows > 0.0 {
                scan.window_count += day_windows.powf(day_power);
                scan.window_genes.extend_from_slice(&indices[start..end]);
            }
        }

        start = end;
    }

    scan.conflict_genes.sort_unstable();
    scan.conflict_genes.dedup();
    scan
}

/// Cost of one conflicting pair given the two periodicities.
///
/// Odd-week and even-week classes never actually meet, so that pair costs
/// nothing; a pair involving a weekly class collides every other week and
/// costs half of a full weekly-weekly collision.
pub fn conflict_weight(a: Periodicity, b: Periodicity) -> f64 {
    if a == b {
        if a == Periodicity::Weekly {
            1.0
        } else {
            0.5
        }
    } else if a == Periodicity::Weekly || b == Periodicity::Weekly {
        0.5
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Day, TimeSlot};
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
    fn test_conflict_weight_table() {
        use Periodicity::*;
        assert_eq!(conflict_weight(Weekly, Weekly), 1.0);
        assert_eq!(conflict_weight(OddWeeks, OddWeeks), 0.5);
        assert_eq!(conflict_weight(EvenWeeks, EvenWeeks), 0.5);
        assert_eq!(conflict_weight(Weekly, OddWeeks), 0.5);
        assert_eq!(conflict_weight(EvenWeeks, Weekly), 0.5);
        assert_eq!(conflict_weight(OddWeeks, EvenWeeks), 0.0);
        assert_eq!(conflict_weight(EvenWeeks, OddWeeks), 0.0);
    }

    #[test]
    fn test_empty_and_single_lesson_scan_is_zero() {
        let rules = AdjacencyRules::default();
        let lessons = vec![lesson(Day::Monday, slot(8, 30, 9, 50), Periodicity::Weekly)];

        let scan = scan_entity(&lessons, &[], &rules, Some(1.0));
        assert_eq!(scan, EntityScan::default());

        let scan = scan_entity(&lessons, &[0], &rules, Some(1.0));
        assert_eq!(scan.conflict_count, 0.0);
        assert_eq!(scan.window_count, 0.0);
    }

    #[test]
    fn test_same_slot_pair_counts_one_conflict_with_both_genes() {
        let rules = AdjacencyRules::default();
        let same = slot(8, 30, 9, 50);
        let lessons = vec![
            lesson(Day::Monday, same, Periodicity::Weekly),
            lesson(Day::Monday, same, Periodicity::Weekly),
        ];
        let scan = scan_entity(&lessons, &[0, 1], &rules, Some(1.0));
        assert_eq!(scan.conflict_count, 1.0);
        assert_eq!(scan.conflict_genes, vec![0, 1]);
    }

    #[test]
    fn test_odd_even_pair_costs_nothing() {
        let rules = AdjacencyRules::default();
        let same = slot(8, 30, 9, 50);
        let lessons = vec![
            lesson(Day::Monday, same, Periodicity::OddWeeks),
            lesson(Day::Monday, same, Periodicity::EvenWeeks),
        ];
        let scan = scan_entity(&lessons, &[0, 1], &rules, Some(1.0));
        assert_eq!(scan.conflict_count, 0.0);
        assert!(scan.conflict_genes.is_empty());
    }

    #[test]
    fn test_window_day_includes_first_lesson_of_day() {
        let rules = AdjacencyRules::default();
        let lessons = vec![
            // Tuesday pair with a 120-minute window.
            lesson(Day::Tuesday, slot(8, 30, 9, 50), Periodicity::Weekly),
            lesson(Day::Tuesday, slot(11, 50, 13, 10), Periodicity::Weekly),
            // A Monday lesson before them in schedule order.
            lesson(Day::Monday, slot(8, 30, 9, 50), Periodicity::Weekly),
        ];
        let scan = scan_entity(&lessons, &[2, 0, 1], &rules, Some(1.0));
        assert_eq!(scan.window_count, 1.0);
        // Both Tuesday genes are implicated, including the day's first.
        assert_eq!(scan.window_genes, vec![0, 1]);
    }

    #[test]
    fn test_day_window_count_raised_to_day_power() {
        let rules = AdjacencyRules::default();
        let lessons = vec![
            lesson(Day::Monday, slot(8, 30, 9, 50), Periodicity::Weekly),
            lesson(Day::Monday, slot(11, 50, 13, 10), Periodicity::Weekly),
            lesson(Day::Monday, slot(15, 5, 16, 25), Periodicity::Weekly),
        ];
        // Two windows on one day, day power 2 -> 4.
        let scan = scan_entity(&lessons, &[0, 1, 2], &rules, Some(2.0));
        assert_eq!(scan.window_count, 4.0);
        assert_eq!(scan.window_genes, vec![0, 1, 2]);
    }

    #[test]
    fn test_windows_skipped_without_day_power() {
        let rules = AdjacencyRules::default();
        let lessons = vec![
            lesson(Day::Monday, slot(8, 30, 9, 50), Periodicity::Weekly),
            lesson(Day::Monday, slot(11, 50, 13, 10), Periodicity::Weekly),
        ];
        let scan = scan_entity(&lessons, &[0, 1], &rules, None);
        assert_eq!(scan.window_count, 0.0);
        assert!(scan.window_genes.is_empty());
    }

    #[test]
    fn test_cross_day_pairs_never_compared() {
        let rules = AdjacencyRules::default();
        let same = slot(8, 30, 9, 50);
        let lessons = vec![
            lesson(Day::Monday, same, Periodicity::Weekly),
            lesson(Day::Tuesday, same, Periodicity::Weekly),
        ];
        let scan = scan_entity(&lessons, &[0, 1], &rules, Some(1.0));
        assert_eq!(scan.conflict_count, 0.0);
        assert_eq!(scan.window_count, 0.0);
    }

    #[test]
    fn test_chained_conflicts_dedup_shared_gene() {
        let rules = AdjacencyRules::default();
        let same = slot(8, 30, 9, 50);
        let lessons = vec![
            lesson(Day::Monday, same, Periodicity::Weekly),
            lesson(Day::Monday, same, Periodicity::Weekly),
            lesson(Day::Monday, same, Periodicity::Weekly),
        ];
        let scan = scan_entity(&lessons, &[0, 1, 2], &rules, Some(1.0));
        assert_eq!(scan.conflict_count, 2.0);
        // Gene 1 sits in both pairs but appears once.
        assert_eq!(scan.conflict_genes, vec![0, 1, 2]);
    }
}
