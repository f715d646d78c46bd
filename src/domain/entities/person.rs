//! Person entity and the lazy person reference
//!
//! A reminder does not own the people it mentions; it holds references that
//! the host resolves against the authoritative store by name. `PersonRef`
//! makes that explicit: a `Reference` carries only the validated lookup key,
//! a `Resolved` carries the full record. Identity is by name in both cases.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::domain::value_objects::{Address, Email, Name, Phone, Tag};

/// A contact record: the identity fields shared by everyone in the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    tags: BTreeSet<Tag>,
}

impl Person {
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        tags: BTreeSet<Tag>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            tags,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.phone)
    }
}

/// A person as held by a reminder: either a bare name reference waiting to
/// be resolved, or the resolved record itself.
///
/// Equality, ordering and hashing go by name only. That is the persisted
/// contract: a reminder identifies its people by name, so a `Reference` and
/// a `Resolved` entry for the same name are the same set member.
#[derive(Debug, Clone)]
pub enum PersonRef {
    /// Identity by name only; the full record lives elsewhere
    Reference(Name),
    /// A fully resolved person record
    Resolved(Box<Person>),
}

impl PersonRef {
    /// The lookup key, regardless of resolution state
    pub fn name(&self) -> &Name {
        match self {
            PersonRef::Reference(name) => name,
            PersonRef::Resolved(person) => person.name(),
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, PersonRef::Resolved(_))
    }
}

impl From<Person> for PersonRef {
    fn from(person: Person) -> Self {
        PersonRef::Resolved(Box::new(person))
    }
}

impl PartialEq for PersonRef {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl Eq for PersonRef {}

impl PartialOrd for PersonRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PersonRef {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name().cmp(other.name())
    }
}

impl Hash for PersonRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
    }
}

impl fmt::Display for PersonRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
