//! JSON persistence for requirement catalogues.

use super::default_time_slots;
use crate::model::{LessonRequirement, Place, TimetableRequirements};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::path::Path;

/// Failure loading or saving a catalogue file.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum CatalogError {
    #[display("catalog io error: {_0}")]
    Io(std::io::Error),
    #[display("catalog format error: {_0}")]
    Format(serde_json::Error),
}

/// A portable requirement catalogue.
///
/// Stores the requirement list plus the entity counts it was drawn
/// against, so a file round-trips into the same problem instance. Rooms
/// and the slot grid are synthesized on conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementsExample {
    pub lecturer_count: u32,
    pub group_count: u32,
    pub place_count: usize,
    pub lesson_requirements: Vec<LessonRequirement>,
}

impl RequirementsExample {
    /// Reads a catalogue from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Writes the catalogue as pretty JSON.
    ///
    /// The file is written to a temporary sibling and renamed into place,
    /// so readers never observe a half-written catalogue.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), CatalogError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut tmp = OsString::from(path.as_os_str());
        tmp.push(".tmp");
        fs::write(&tmp, serde_json::to_string_pretty(self)?)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }

    /// Expands the catalogue into full optimizer input, synthesizing
    /// numbered rooms and the standard slot grid.
    pub fn into_requirements(self) -> TimetableRequirements {
        let places = (0..self.place_count)
            .map(|i| Place {
                id: i as u64 + 1,
                name: format!("room-{}", i + 1),
                capacity: 30,
            })
            .collect();
        TimetableRequirements::new(self.lesson_requirements, places, default_time_slots())
    }
}
