//! Requirement catalogues: the standard slot grid, JSON persistence, and
//! random catalogue synthesis.

mod example;
mod generator;

pub use example::{CatalogError, RequirementsExample};
pub use generator::random_example;

use crate::model::TimeSlot;
use chrono::NaiveTime;

/// The standard eight-slot teaching grid: 80-minute classes from 08:30
/// to 21:00 separated by short breaks.
pub fn default_time_slots() -> Vec<TimeSlot> {
    [
        ((8, 30), (9, 50)),
        ((10, 10), (11, 30)),
        ((11, 50), (13, 10)),
        ((13, 30), (14, 50)),
        ((15, 5), (16, 25)),
        ((16, 40), (18, 0)),
        ((18, 10), (19, 30)),
        ((19, 40), (21, 0)),
    ]
    .into_iter()
    .map(|((sh, sm), (eh, em))| {
        TimeSlot::new(
            NaiveTime::from_hms_opt(sh, sm, 0).expect("valid slot start"),
            NaiveTime::from_hms_opt(eh, em, 0).expect("valid slot end"),
        )
    })
    .collect()
}
