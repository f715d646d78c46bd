//! Serialization-friendly version of [`Student`]

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Person, Student};
use crate::domain::value_objects::{Address, Email, Level, Name, Phone, Subject};
use crate::error::{ParseError, ParseResult};
use crate::storage::AdaptedTag;

/// Flat student record. Subjects are plain strings; tags are nested records
/// like everywhere else in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdaptedStudent {
    name: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    address: Option<String>,
    level: Option<String>,
    #[serde(default)]
    subjects: Vec<String>,
    #[serde(default)]
    tags: Vec<AdaptedTag>,
}

impl AdaptedStudent {
    const ENTITY: &'static str = "Student";

    fn require<'a>(field: &'static str, value: &'a Option<String>) -> ParseResult<&'a str> {
        value.as_deref().ok_or(ParseError::MissingField {
            entity: Self::ENTITY,
            field,
        })
    }

    /// Convert this record back into the model's [`Student`], re-validating
    /// every stored value through its value type's predicate.
    pub fn to_model(&self) -> ParseResult<Student> {
        let name = Name::new(Self::require("Name", &self.name)?)?;
        let phone = Phone::new(Self::require("Phone", &self.phone)?)?;
        let email = Email::new(Self::require("Email", &self.email)?)?;
        let address = Address::new(Self::require("Address", &self.address)?)?;
        let level = Level::new(Self::require("Level", &self.level)?)?;

        let mut subjects = BTreeSet::new();
        for raw in &self.subjects {
            subjects.insert(Subject::new(raw.as_str())?);
        }

        let mut tags = BTreeSet::new();
        for adapted in &self.tags {
            tags.insert(adapted.to_model()?);
        }

        let contact = Person::new(name, phone, email, address, tags);
        Ok(Student::new(contact, level, subjects))
    }
}

impl From<&Student> for AdaptedStudent {
    fn from(source: &Student) -> Self {
        let contact = source.contact();
        Self {
            name: Some(contact.name().as_str().to_string()),
            phone: Some(contact.phone().as_str().to_string()),
            email: Some(contact.email().as_str().to_string()),
            address: Some(contact.address().as_str().to_string()),
            level: Some(source.level().as_str().to_string()),
            subjects: source
                .subjects()
                .iter()
                .map(|subject| subject.as_str().to_string())
                .collect(),
            tags: contact.tags().iter().map(AdaptedTag::from).collect(),
        }
    }
}
