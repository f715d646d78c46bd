//! Student entity and the lazy student reference

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::domain::entities::Person;
use crate::domain::value_objects::{Level, Name, Subject};

/// A student in the roster: a contact record plus teaching metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    contact: Person,
    level: Level,
    subjects: BTreeSet<Subject>,
}

impl Student {
    pub fn new(contact: Person, level: Level, subjects: BTreeSet<Subject>) -> Self {
        Self {
            contact,
            level,
            subjects,
        }
    }

    pub fn contact(&self) -> &Person {
        &self.contact
    }

    /// Shorthand for the contact's name, the student's identity in the roster
    pub fn name(&self) -> &Name {
        self.contact.name()
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn subjects(&self) -> &BTreeSet<Subject> {
        &self.subjects
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.level)
    }
}

/// A student as referenced from command input (e.g. a parent's `child/`
/// argument): either a validated name waiting to be resolved against the
/// roster, or the resolved student. Identity is by name.
#[derive(Debug, Clone)]
pub enum StudentRef {
    /// Identity by name only; resolution is the caller's job
    Reference(Name),
    /// A fully resolved student record
    Resolved(Box<Student>),
}

impl StudentRef {
    pub fn name(&self) -> &Name {
        match self {
            StudentRef::Reference(name) => name,
            StudentRef::Resolved(student) => student.name(),
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, StudentRef::Resolved(_))
    }
}

impl From<Student> for StudentRef {
    fn from(student: Student) -> Self {
        StudentRef::Resolved(Box::new(student))
    }
}

impl PartialEq for StudentRef {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl Eq for StudentRef {}

impl PartialOrd for StudentRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for StudentRef {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name().cmp(other.name())
    }
}

impl Hash for StudentRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
    }
}

impl fmt::Display for StudentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
