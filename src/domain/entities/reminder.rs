//! Reminder entity
//!
//! A scheduled note tied to a set of people. People are held as
//! [`PersonRef`]s: the reminder knows them by name and leaves resolution to
//! the host, which is also why persisting a reminder only keeps the names.

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDateTime;

use crate::domain::entities::PersonRef;
use crate::domain::value_objects::{Name, Tag};

/// A reminder: label, timestamp, free-form notes, people and tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    name: Name,
    time: NaiveDateTime,
    notes: String,
    people: BTreeSet<PersonRef>,
    tags: BTreeSet<Tag>,
}

impl Reminder {
    pub fn new(
        name: Name,
        time: NaiveDateTime,
        notes: impl Into<String>,
        people: BTreeSet<PersonRef>,
        tags: BTreeSet<Tag>,
    ) -> Self {
        Self {
            name,
            time,
            notes: notes.into(),
            people,
            tags,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn time(&self) -> NaiveDateTime {
        self.time
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn people(&self) -> &BTreeSet<PersonRef> {
        &self.people
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }
}

impl fmt::Display for Reminder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {}",
            self.name,
            self.time.format(crate::parser::DATE_TIME_PATTERN)
        )
    }
}
