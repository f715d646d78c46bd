//! Serialization-friendly version of [`Roster`] - the whole persisted
//! document

use serde::{Deserialize, Serialize};

use crate::domain::entities::Roster;
use crate::error::ParseResult;
use crate::storage::{AdaptedReminder, AdaptedStudent};

/// The top-level document written to the data file: every student and every
/// reminder, as flat records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdaptedRoster {
    #[serde(default)]
    students: Vec<AdaptedStudent>,
    #[serde(default)]
    reminders: Vec<AdaptedReminder>,
}

impl AdaptedRoster {
    /// Serialize the document to the JSON text the host stores on disk.
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Parse on-disk JSON text into a document. Structural JSON problems
    /// surface here; data-constraint violations surface from [`Self::to_model`].
    pub fn from_json_str(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Convert the document back into the in-memory [`Roster`].
    ///
    /// Every record is re-validated; two students with the same name reject
    /// the whole document. The first failure aborts the load.
    pub fn to_model(&self) -> ParseResult<Roster> {
        let mut roster = Roster::new();
        for adapted in &self.students {
            let student = adapted.to_model().inspect_err(|err| {
                log::warn!("discarding persisted students: {err}");
            })?;
            roster.add_student(student).inspect_err(|err| {
                log::warn!("discarding persisted students: {err}");
            })?;
        }
        for adapted in &self.reminders {
            let reminder = adapted.to_model().inspect_err(|err| {
                log::warn!("discarding persisted reminders: {err}");
            })?;
            roster.add_reminder(reminder);
        }
        log::debug!(
            "loaded {} student(s) and {} reminder(s)",
            roster.students().len(),
            roster.reminders().len()
        );
        Ok(roster)
    }
}

impl From<&Roster> for AdaptedRoster {
    fn from(source: &Roster) -> Self {
        Self {
            students: source.students().iter().map(AdaptedStudent::from).collect(),
            reminders: source
                .reminders()
                .iter()
                .map(AdaptedReminder::from)
                .collect(),
        }
    }
}
