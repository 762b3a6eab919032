//! Weekly university timetable generation.
//!
//! Builds a week of lessons for a catalogue of requirements — who teaches
//! what to which groups, how often — by evolving candidate timetables with
//! a penalty-guided genetic algorithm:
//!
//! - **Model**: days, time slots, lessons, and the requirements catalogue.
//! - **Evaluator**: scores a candidate by scanning each lecturer's, group's,
//!   and room's day against conflict and idle-window rules, attributing
//!   every penalty back to the genes causing it.
//! - **GA**: bad-gene-biased crossover, worst-gene mutation, elitist
//!   truncation, running until a zero-penalty week or the generation budget.
//! - **Repair**: optional greedy relocation of the worst genes.
//! - **Catalog / Report**: JSON catalogues, random instance synthesis, and
//!   plain-text rendering of the result.
//!
//! # Example
//!
//! ```
//! use u_timetable::catalog::random_example;
//! use u_timetable::ga::{generate_timetable, GaConfig};
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//!
//! let mut rng = SmallRng::seed_from_u64(7);
//! let requirements = random_example(4, 6, 3, 15.0, &mut rng).into_requirements();
//!
//! let config = GaConfig::default()
//!     .with_population_size(50)
//!     .with_max_generations(50)
//!     .with_seed(7);
//! let outcome = generate_timetable(&requirements, &config);
//! assert_eq!(outcome.best.lessons.len(), requirements.session_count());
//! ```

pub mod adjacency;
pub mod catalog;
pub mod evaluator;
pub mod ga;
pub mod model;
pub mod repair;
pub mod report;

pub use adjacency::AdjacencyRules;
pub use evaluator::{EvaluatedTimetable, Evaluator, PenaltyConfig};
pub use ga::{generate_timetable, GaConfig, GaOutcome};
pub use model::{
    Day, Lesson, LessonRequirement, Periodicity, Place, TimeSlot, TimetableRequirements,
};
