//! Serialization-friendly version of [`Reminder`]
//!
//! The flat record keeps people as bare name strings. That loss is the
//! persisted contract: a reminder identifies its people by name, and the
//! full records live in the students list. Reconstruction therefore yields
//! [`PersonRef::Reference`] entries for the host to resolve.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{PersonRef, Reminder};
use crate::domain::value_objects::Name;
use crate::error::{ParseError, ParseResult};
use crate::parser;
use crate::storage::AdaptedTag;

/// Flat reminder record: `name`, `time` (`yyyy-MM-dd HH:mm`), `notes`,
/// `people` (name strings) and nested `tags`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdaptedReminder {
    name: Option<String>,
    time: Option<String>,
    notes: Option<String>,
    #[serde(default)]
    people: Vec<String>,
    #[serde(default)]
    tags: Vec<AdaptedTag>,
}

impl AdaptedReminder {
    const ENTITY: &'static str = "Reminder";

    /// Convert this record back into the model's [`Reminder`].
    ///
    /// Required scalars are checked first (absence is a missing-field
    /// failure naming the field), then every stored value is re-validated
    /// through the same predicates the command parser uses. The first
    /// violation aborts; a partial reminder is never produced.
    pub fn to_model(&self) -> ParseResult<Reminder> {
        let name = self.name.as_deref().ok_or(ParseError::MissingField {
            entity: Self::ENTITY,
            field: "Name",
        })?;
        let name = Name::new(name)?;

        let time = self.time.as_deref().ok_or(ParseError::MissingField {
            entity: Self::ENTITY,
            field: "Time",
        })?;
        let time = parser::parse_time(time)?;

        let notes = self.notes.clone().ok_or(ParseError::MissingField {
            entity: Self::ENTITY,
            field: "Notes",
        })?;

        let mut people = BTreeSet::new();
        for raw in &self.people {
            people.insert(PersonRef::Reference(Name::new(raw.as_str())?));
        }

        let mut tags = BTreeSet::new();
        for adapted in &self.tags {
            tags.insert(adapted.to_model()?);
        }

        Ok(Reminder::new(name, time, notes, people, tags))
    }
}

impl From<&Reminder> for AdaptedReminder {
    fn from(source: &Reminder) -> Self {
        Self {
            name: Some(source.name().as_str().to_string()),
            time: Some(source.time().format(parser::DATE_TIME_PATTERN).to_string()),
            notes: Some(source.notes().to_string()),
            people: source
                .people()
                .iter()
                .map(|person| person.name().as_str().to_string())
                .collect(),
            tags: source.tags().iter().map(AdaptedTag::from).collect(),
        }
    }
}
