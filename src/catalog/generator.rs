//! Random catalogue synthesis for demos and benchmarks.

use super::example::RequirementsExample;
use crate::model::LessonRequirement;
use rand::Rng;
use std::collections::BTreeSet;

/// Synthesizes a random catalogue with roughly `total_sessions` weekly
/// sessions spread over random requirements.
///
/// Each requirement draws a lecturer, one to five distinct attending
/// groups, and a session load between 0.5 and 2.5 in half-session steps.
/// The final requirement is clamped to whatever budget is left, so the
/// catalogue's total load equals `total_sessions` exactly.
pub fn random_example<R: Rng>(
    lecturer_count: u32,
    group_count: u32,
    place_count: usize,
    total_sessions: f64,
    rng: &mut R,
) -> RequirementsExample {
    assert!(lecturer_count > 0, "need at least one lecturer");
    assert!(group_count > 0, "need at least one group");
    assert!(place_count > 0, "need at least one room");

    let mut lesson_requirements = Vec::new();
    let mut budget = total_sessions;

    while budget > 0.0 {
        let mut sessions = rng.random_range(0..=2) as f64;
        if rng.random_bool(0.25) {
            sessions += 0.5;
        }
        let sessions = sessions.max(0.5).min(budget);

        let lecturer = rng.random_range(1..=lecturer_count);
        let wanted = (1 + rng.random_range(0..5)).min(group_count as usize);
        let mut groups = BTreeSet::new();
        while groups.len() < wanted {
            groups.insert(rng.random_range(1..=group_count));
        }

        lesson_requirements.push(LessonRequirement::new(lecturer, groups, sessions));
        budget -= sessions;
    }

    RequirementsExample {
        lecturer_count,
        group_count,
        place_count,
        lesson_requirements,
    }
}
