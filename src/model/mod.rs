//! Domain types for timetable generation.
//!
//! Everything here is plain data: the fixed input catalogue
//! ([`TimetableRequirements`]) supplied once per run, and the mutable
//! scheduling decisions ([`Lesson`]) the optimizer rearranges.

mod lesson;
mod requirements;
mod time;

pub use lesson::{Lesson, Periodicity};
pub use requirements::{LessonRequirement, Place, TimetableRequirements};
pub use time::{Day, TimeSlot};
