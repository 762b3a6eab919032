//! Per-entity ordered lesson indices.
//!
//! Each lecturer, academic group, and room maps to the list of gene
//! indices touching it, sorted by the composite schedule key
//! `(day, time slot, periodicity)` with the gene index as tie-break.
//! The maps are rebuilt wholesale on every evaluation; only local repair
//! edits them in place, through [`remove_index`] / [`insert_sorted`].

use crate::model::{Lesson, TimetableRequirements};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Gene indices grouped per lecturer, group, and room.
///
/// `BTreeMap` keeps entity iteration order deterministic, so seeded runs
/// reproduce bit-identical penalty attributions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityLessons {
    pub by_lecturer: BTreeMap<u32, Vec<usize>>,
    pub by_group: BTreeMap<u32, Vec<usize>>,
    pub by_place: BTreeMap<usize, Vec<usize>>,
}

impl EntityLessons {
    /// Builds the three maps from scratch for the given gene array.
    ///
    /// A gene attended by several groups is inserted into every one of
    /// those groups' lists.
    pub fn build(requirements: &TimetableRequirements, lessons: &[Lesson]) -> Self {
        let mut index = Self::default();

        for (i, lesson) in lessons.iter().enumerate() {
            let requirement = &requirements.lesson_requirements[lesson.requirement];
            index
                .by_lecturer
                .entry(requirement.lecturer)
                .or_default()
                .push(i);
            for &group in &requirement.groups {
                index.by_group.entry(group).or_default().push(i);
            }
            index.by_place.entry(lesson.place).or_default().push(i);
        }

        for list in index
            .by_lecturer
            .values_mut()
            .chain(index.by_group.values_mut())
            .chain(index.by_place.values_mut())
        {
            sort_schedule_order(lessons, list);
        }

        index
    }
}

/// Sorts `indices` by the composite schedule key; the stable sort keeps
/// equal-key genes in index order.
pub fn sort_schedule_order(lessons: &[Lesson], indices: &mut [usize]) {
    indices.sort_by(|&a, &b| lessons[a].schedule_cmp(&lessons[b]));
}

/// Removes gene `index` from an ordered index list, if present.
pub fn remove_index(list: &mut Vec<usize>, index: usize) {
    if let Some(position) = list.iter().position(|&i| i == index) {
        list.remove(position);
    }
}

/// Inserts gene `index` into an ordered index list at its schedule
/// position under the current gene state.
pub fn insert_sorted(lessons: &[Lesson], list: &mut Vec<usize>, index: usize) {
    let position = list.partition_point(|&i| {
        lessons[i]
            .schedule_cmp(&lessons[index])
            .then(i.cmp(&index))
            == Ordering::Less
    });
    list.insert(position, index);
}
